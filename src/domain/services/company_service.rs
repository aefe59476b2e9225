use crate::domain::{
    models::company::{Company, CompanyWithServices},
    ports::UnitOfWork,
};
use crate::error::AppError;
use tracing::{info, warn};
use uuid::Uuid;

/// Storefront management. An owner runs at most one company.
pub struct CompanyService<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> CompanyService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub async fn add(&self, mut company: Company, owner_id: Uuid) -> Result<Company, AppError> {
        if !self.uow.companies.list(owner_id).await?.is_empty() {
            warn!("Owner {} attempted to create a second company", owner_id);
            return Err(AppError::Conflict("Owner already has a company".into()));
        }

        company.owner_id = owner_id;
        let created = self.uow.companies.add(&company).await?;
        info!("Company created: {} ({})", created.id, created.public_url);
        Ok(created)
    }

    pub async fn update(&self, mut company: Company, owner_id: Uuid) -> Result<Company, AppError> {
        let existing = self.uow.companies.find_by_id(company.id, owner_id).await?
            .ok_or(AppError::NotFound("Company not found".into()))?;

        company.owner_id = existing.owner_id;
        company.created_at = existing.created_at;
        let updated = self.uow.companies.update(&company).await?;
        info!("Company updated: {}", updated.id);
        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Company, AppError> {
        let removed = self.uow.companies.remove(id, owner_id).await?
            .ok_or(AppError::NotFound("Company not found".into()))?;
        info!("Company removed: {}", removed.id);
        Ok(removed)
    }

    pub async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Company, AppError> {
        self.uow.companies.find_by_id(id, owner_id).await?
            .ok_or(AppError::NotFound("Company not found".into()))
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Company>, AppError> {
        self.uow.companies.list(owner_id).await
    }

    pub async fn get_by_public_url_with_services(&self, public_url: &str) -> Result<CompanyWithServices, AppError> {
        self.uow.companies.get_by_public_url_with_services(public_url).await?
            .ok_or(AppError::NotFound("Company not found".into()))
    }
}
