use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum ServiceStatus {
    Active = 0,
    Inactive = 1,
}

impl TryFrom<i32> for ServiceStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ServiceStatus::Active),
            1 => Ok(ServiceStatus::Inactive),
            other => Err(format!("Invalid service status: {}", other)),
        }
    }
}

impl From<ServiceStatus> for i32 {
    fn from(status: ServiceStatus) -> Self {
        status as i32
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub company_id: Uuid,
    pub service_name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_min: i32,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
}

/// Longest bookable service: one week.
pub const MAX_DURATION_MIN: i32 = 7 * 24 * 60;

pub struct NewServiceParams {
    pub company_id: Uuid,
    pub service_name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_min: i32,
    pub status: ServiceStatus,
}

impl Service {
    pub fn new(params: NewServiceParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id: params.company_id,
            service_name: params.service_name,
            description: params.description,
            price: params.price,
            duration_min: params.duration_min,
            status: params.status,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.duration_min <= 0 {
            return Err(AppError::Validation("Duration must be a positive number of minutes".into()));
        }
        if self.duration_min > MAX_DURATION_MIN {
            return Err(AppError::Validation(format!("Duration must not exceed {} minutes", MAX_DURATION_MIN)));
        }
        price_to_cents(self.price)?;
        Ok(())
    }
}

/// Prices are persisted as integer cents so sums stay exact in every backend.
pub fn price_to_cents(price: Decimal) -> Result<i64, AppError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::Validation("Price must not be negative".into()));
    }
    (price.round_dp(2) * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| AppError::Validation("Price out of range".into()))
}

pub fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
