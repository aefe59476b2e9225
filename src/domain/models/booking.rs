use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use rust_decimal::Decimal;
use chrono::Month;
use crate::domain::models::schedule::TimeOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum BookingStatus {
    Pending = 0,
    Confirmed = 1,
    Cancelled = 2,
}

impl TryFrom<i32> for BookingStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BookingStatus::Pending),
            1 => Ok(BookingStatus::Confirmed),
            2 => Ok(BookingStatus::Cancelled),
            other => Err(format!("Invalid booking status: {}", other)),
        }
    }
}

impl From<BookingStatus> for i32 {
    fn from(status: BookingStatus) -> Self {
        status as i32
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: TimeOffset,
    pub end_time: TimeOffset,
    pub status: BookingStatus,
    #[sqlx(default)]
    pub client_name: Option<String>,
    #[sqlx(default)]
    pub service_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: TimeOffset,
    pub status: BookingStatus,
}

impl Booking {
    /// End time starts equal to the start time; it is derived from the
    /// service duration when the booking is stored.
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_id: params.service_id,
            client_id: params.client_id,
            booking_date: params.booking_date,
            start_time: params.start_time,
            end_time: params.start_time,
            status: params.status,
            client_name: None,
            service_name: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: Decimal,
}

impl MonthlyRevenue {
    pub fn new(month: u32, revenue: Decimal) -> Option<Self> {
        month_label(month).map(|label| Self {
            month: label.to_string(),
            revenue,
        })
    }
}

/// Three-letter English abbreviation for a 1-based month number.
pub fn month_label(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| &m.name()[..3])
}
