use crate::domain::ports::{Database, Repositories, TransactionHandle, UnitOfWork};
use crate::error::AppError;
use crate::infra::repositories::{
    sqlite_booking_repo::SqliteBookingRepo, sqlite_client_repo::SqliteClientRepo,
    sqlite_company_repo::SqliteCompanyRepo, sqlite_service_repo::SqliteServiceRepo,
    sqlite_working_hour_repo::SqliteWorkingHourRepo, SharedTx,
};
use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn begin(&self) -> Result<UnitOfWork, AppError> {
        let tx = SharedTx::new(self.pool.begin().await.map_err(AppError::Database)?);
        debug!("Unit of work started (sqlite)");

        Ok(UnitOfWork::new(
            Repositories {
                companies: Box::new(SqliteCompanyRepo::new(tx.clone())),
                services: Box::new(SqliteServiceRepo::new(tx.clone())),
                working_hours: Box::new(SqliteWorkingHourRepo::new(tx.clone())),
                clients: Box::new(SqliteClientRepo::new(tx.clone())),
                bookings: Box::new(SqliteBookingRepo::new(tx.clone())),
            },
            Box::new(tx),
        ))
    }
}

#[async_trait]
impl TransactionHandle for SharedTx<Sqlite> {
    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let tx = self.take().await?;
        tx.commit().await.map_err(AppError::Database)?;
        debug!("Unit of work committed (sqlite)");
        Ok(())
    }
}
