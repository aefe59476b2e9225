use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::domain::models::schedule::{DayOfWeek, TimeOffset};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct WorkingHour {
    pub id: Uuid,
    pub company_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOffset,
    pub end_time: TimeOffset,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl WorkingHour {
    pub fn new(company_id: Uuid, day_of_week: DayOfWeek, start_time: TimeOffset, end_time: TimeOffset) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            day_of_week,
            start_time,
            end_time,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
