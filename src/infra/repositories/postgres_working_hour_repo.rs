use crate::domain::{models::working_hour::WorkingHour, ports::WorkingHourRepository};
use crate::error::AppError;
use crate::infra::repositories::{active, SharedTx};
use async_trait::async_trait;
use sqlx::Postgres;
use uuid::Uuid;

const DUPLICATE_DAY: &str = "Company already has working hours for this day";

pub struct PostgresWorkingHourRepo {
    tx: SharedTx<Postgres>,
}

impl PostgresWorkingHourRepo {
    pub fn new(tx: SharedTx<Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl WorkingHourRepository for PostgresWorkingHourRepo {
    async fn add(&self, working_hour: &WorkingHour) -> Result<WorkingHour, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, WorkingHour>(
            "INSERT INTO working_hours (id, company_id, day_of_week, start_time, end_time, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(working_hour.id)
            .bind(working_hour.company_id)
            .bind(working_hour.day_of_week)
            .bind(working_hour.start_time)
            .bind(working_hour.end_time)
            .bind(working_hour.is_active)
            .bind(working_hour.created_at)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::unique_as_conflict(e, DUPLICATE_DAY))
    }

    async fn update(&self, working_hour: &WorkingHour) -> Result<WorkingHour, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, WorkingHour>(
            "UPDATE working_hours SET company_id=$1, day_of_week=$2, start_time=$3, end_time=$4, is_active=$5
             WHERE id=$6
             RETURNING *"
        )
            .bind(working_hour.company_id)
            .bind(working_hour.day_of_week)
            .bind(working_hour.start_time)
            .bind(working_hour.end_time)
            .bind(working_hour.is_active)
            .bind(working_hour.id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| AppError::unique_as_conflict(e, DUPLICATE_DAY))?
            .ok_or(AppError::NotFound("Working hour not found".into()))
    }

    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<WorkingHour>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, WorkingHour>(
            "DELETE FROM working_hours
             WHERE id = $1 AND company_id IN (SELECT id FROM companies WHERE owner_id = $2)
             RETURNING *"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<WorkingHour>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, WorkingHour>(
            "SELECT w.* FROM working_hours w
             JOIN companies c ON c.id = w.company_id
             WHERE w.id = $1 AND c.owner_id = $2"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<WorkingHour>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, WorkingHour>(
            "SELECT w.* FROM working_hours w
             JOIN companies c ON c.id = w.company_id
             WHERE c.owner_id = $1
             ORDER BY w.day_of_week ASC"
        )
            .bind(owner_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM working_hours w
                JOIN companies c ON c.id = w.company_id
                WHERE w.id = $1 AND c.owner_id = $2
            )"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::Database)
    }
}
