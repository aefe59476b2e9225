pub mod sqlite_company_repo;
pub mod sqlite_service_repo;
pub mod sqlite_working_hour_repo;
pub mod sqlite_client_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_unit_of_work;

pub mod postgres_company_repo;
pub mod postgres_service_repo;
pub mod postgres_working_hour_repo;
pub mod postgres_client_repo;
pub mod postgres_booking_repo;
pub mod postgres_unit_of_work;

use crate::domain::models::{
    booking::MonthlyRevenue,
    service::{cents_to_price, Service, ServiceStatus},
};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Transaction};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Transaction shared by the repositories of one unit of work.
pub struct SharedTx<DB: sqlx::Database>(Arc<Mutex<Option<Transaction<'static, DB>>>>);

impl<DB: sqlx::Database> Clone for SharedTx<DB> {
    fn clone(&self) -> Self {
        SharedTx(self.0.clone())
    }
}

impl<DB: sqlx::Database> SharedTx<DB> {
    pub fn new(tx: Transaction<'static, DB>) -> Self {
        SharedTx(Arc::new(Mutex::new(Some(tx))))
    }

    pub async fn lock(&self) -> MutexGuard<'_, Option<Transaction<'static, DB>>> {
        self.0.lock().await
    }

    /// Takes the transaction out; later repository calls fail with `Internal`.
    pub async fn take(&self) -> Result<Transaction<'static, DB>, AppError> {
        self.0.lock().await.take().ok_or(AppError::Internal)
    }
}

pub fn active<'a, DB: sqlx::Database>(
    slot: &'a mut Option<Transaction<'static, DB>>,
) -> Result<&'a mut Transaction<'static, DB>, AppError> {
    slot.as_mut().ok_or(AppError::Internal)
}

#[derive(Debug, FromRow)]
pub struct ServiceRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub service_name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_min: i32,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Service {
            id: row.id,
            company_id: row.company_id,
            service_name: row.service_name,
            description: row.description,
            price: cents_to_price(row.price_cents),
            duration_min: row.duration_min,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MonthlyRevenueRow {
    pub month: i32,
    pub revenue_cents: i64,
}

pub fn into_monthly_revenue(rows: Vec<MonthlyRevenueRow>) -> Vec<MonthlyRevenue> {
    rows.into_iter()
        .filter_map(|row| {
            let month = u32::try_from(row.month).ok()?;
            MonthlyRevenue::new(month, cents_to_price(row.revenue_cents))
        })
        .collect()
}
