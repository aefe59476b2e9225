use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(first_name: String, last_name: String, email: String, phone_number: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            phone_number,
            created_at: Utc::now(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Outcome of registering a client by email.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(Client),
    Existing(Client),
}

impl Registration {
    pub fn client(&self) -> &Client {
        match self {
            Registration::Created(c) | Registration::Existing(c) => c,
        }
    }

    pub fn into_client(self) -> Client {
        match self {
            Registration::Created(c) | Registration::Existing(c) => c,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Registration::Created(_))
    }
}
