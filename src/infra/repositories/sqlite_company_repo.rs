use crate::domain::{models::company::{Company, CompanyWithServices}, ports::CompanyRepository};
use crate::error::AppError;
use crate::infra::repositories::{active, ServiceRow, SharedTx};
use async_trait::async_trait;
use sqlx::Sqlite;
use uuid::Uuid;

pub struct SqliteCompanyRepo {
    tx: SharedTx<Sqlite>,
}

impl SqliteCompanyRepo {
    pub fn new(tx: SharedTx<Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepo {
    async fn add(&self, company: &Company) -> Result<Company, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (id, owner_id, company_name, company_logo_path, public_url, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(company.id)
            .bind(company.owner_id)
            .bind(&company.company_name)
            .bind(&company.company_logo_path)
            .bind(&company.public_url)
            .bind(company.created_at)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::unique_as_conflict(e, "Public URL is already taken"))
    }

    async fn update(&self, company: &Company) -> Result<Company, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET company_name=?, company_logo_path=?, public_url=? WHERE id=? AND owner_id=? RETURNING *"
        )
            .bind(&company.company_name)
            .bind(&company.company_logo_path)
            .bind(&company.public_url)
            .bind(company.id)
            .bind(company.owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| AppError::unique_as_conflict(e, "Public URL is already taken"))?
            .ok_or(AppError::NotFound("Company not found".into()))
    }

    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Company>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Company>("DELETE FROM companies WHERE id = ? AND owner_id = ? RETURNING *")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Company>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Company>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE owner_id = ? ORDER BY company_name ASC")
            .bind(owner_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = ? AND owner_id = ?)")
            .bind(id)
            .bind(owner_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn get_by_public_url_with_services(&self, public_url: &str) -> Result<Option<CompanyWithServices>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE LOWER(public_url) = LOWER(?)")
            .bind(public_url)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)?;

        let Some(company) = company else {
            return Ok(None);
        };

        let services = sqlx::query_as::<_, ServiceRow>(
            "SELECT * FROM services WHERE company_id = ? ORDER BY service_name ASC"
        )
            .bind(company.id)
            .fetch_all(&mut **tx)
            .await
            .map_err(AppError::Database)?;

        Ok(Some(CompanyWithServices {
            company,
            services: services.into_iter().map(Into::into).collect(),
        }))
    }
}
