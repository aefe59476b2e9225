use crate::domain::{models::service::{price_to_cents, Service}, ports::ServiceRepository};
use crate::error::AppError;
use crate::infra::repositories::{active, ServiceRow, SharedTx};
use async_trait::async_trait;
use sqlx::Sqlite;
use uuid::Uuid;

pub struct SqliteServiceRepo {
    tx: SharedTx<Sqlite>,
}

impl SqliteServiceRepo {
    pub fn new(tx: SharedTx<Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepo {
    async fn add(&self, service: &Service) -> Result<Service, AppError> {
        let price_cents = price_to_cents(service.price)?;
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let row = sqlx::query_as::<_, ServiceRow>(
            "INSERT INTO services (id, company_id, service_name, description, price_cents, duration_min, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(service.id)
            .bind(service.company_id)
            .bind(&service.service_name)
            .bind(&service.description)
            .bind(price_cents)
            .bind(service.duration_min)
            .bind(service.status)
            .bind(service.created_at)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn update(&self, service: &Service) -> Result<Service, AppError> {
        let price_cents = price_to_cents(service.price)?;
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let row = sqlx::query_as::<_, ServiceRow>(
            "UPDATE services SET company_id=?, service_name=?, description=?, price_cents=?, duration_min=?, status=?
             WHERE id=?
             RETURNING *"
        )
            .bind(service.company_id)
            .bind(&service.service_name)
            .bind(&service.description)
            .bind(price_cents)
            .bind(service.duration_min)
            .bind(service.status)
            .bind(service.id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Service not found".into()))?;
        Ok(row.into())
    }

    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Service>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let row = sqlx::query_as::<_, ServiceRow>(
            "DELETE FROM services
             WHERE id = ? AND company_id IN (SELECT id FROM companies WHERE owner_id = ?)
             RETURNING *"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Service>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let row = sqlx::query_as::<_, ServiceRow>(
            "SELECT s.* FROM services s
             JOIN companies c ON c.id = s.company_id
             WHERE s.id = ? AND c.owner_id = ?"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_id_unscoped(&self, id: Uuid) -> Result<Option<Service>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let row = sqlx::query_as::<_, ServiceRow>("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Service>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT s.* FROM services s
             JOIN companies c ON c.id = s.company_id
             WHERE c.owner_id = ?
             ORDER BY s.service_name ASC"
        )
            .bind(owner_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM services s
                JOIN companies c ON c.id = s.company_id
                WHERE s.id = ? AND c.owner_id = ?
            )"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::Database)
    }
}
