use crate::domain::ports::{Database, Repositories, TransactionHandle, UnitOfWork};
use crate::error::AppError;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_client_repo::PostgresClientRepo,
    postgres_company_repo::PostgresCompanyRepo, postgres_service_repo::PostgresServiceRepo,
    postgres_working_hour_repo::PostgresWorkingHourRepo, SharedTx,
};
use async_trait::async_trait;
use sqlx::{Postgres, PgPool};
use tracing::debug;

pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn begin(&self) -> Result<UnitOfWork, AppError> {
        let tx = SharedTx::new(self.pool.begin().await.map_err(AppError::Database)?);
        debug!("Unit of work started (postgres)");

        Ok(UnitOfWork::new(
            Repositories {
                companies: Box::new(PostgresCompanyRepo::new(tx.clone())),
                services: Box::new(PostgresServiceRepo::new(tx.clone())),
                working_hours: Box::new(PostgresWorkingHourRepo::new(tx.clone())),
                clients: Box::new(PostgresClientRepo::new(tx.clone())),
                bookings: Box::new(PostgresBookingRepo::new(tx.clone())),
            },
            Box::new(tx),
        ))
    }
}

#[async_trait]
impl TransactionHandle for SharedTx<Postgres> {
    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let tx = self.take().await?;
        tx.commit().await.map_err(AppError::Database)?;
        debug!("Unit of work committed (postgres)");
        Ok(())
    }
}
