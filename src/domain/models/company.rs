use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::domain::models::service::Service;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Company {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub owner_id: Uuid,
    pub company_name: String,
    pub company_logo_path: Option<String>,
    pub public_url: String,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn new(owner_id: Uuid, company_name: String, public_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            company_name,
            company_logo_path: None,
            public_url,
            created_at: Utc::now(),
        }
    }
}

/// Public storefront view of a company: its services ordered by name.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CompanyWithServices {
    #[serde(flatten)]
    pub company: Company,
    pub services: Vec<Service>,
}
