use crate::domain::{models::service::Service, ports::UnitOfWork};
use crate::error::AppError;
use super::ensure_company_owned;
use tracing::info;
use uuid::Uuid;

pub struct ServiceCatalog<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> ServiceCatalog<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub async fn add(&self, service: Service, owner_id: Uuid) -> Result<Service, AppError> {
        service.validate()?;
        ensure_company_owned(self.uow, service.company_id, owner_id).await?;

        let created = self.uow.services.add(&service).await?;
        info!("Service created: {} for company {}", created.id, created.company_id);
        Ok(created)
    }

    pub async fn update(&self, mut service: Service, owner_id: Uuid) -> Result<Service, AppError> {
        service.validate()?;
        let existing = self.uow.services.find_by_id(service.id, owner_id).await?
            .ok_or(AppError::NotFound("Service not found".into()))?;
        ensure_company_owned(self.uow, service.company_id, owner_id).await?;

        service.created_at = existing.created_at;
        let updated = self.uow.services.update(&service).await?;
        info!("Service updated: {}", updated.id);
        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Service, AppError> {
        let removed = self.uow.services.remove(id, owner_id).await?
            .ok_or(AppError::NotFound("Service not found".into()))?;
        info!("Service removed: {}", removed.id);
        Ok(removed)
    }

    pub async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Service, AppError> {
        self.uow.services.find_by_id(id, owner_id).await?
            .ok_or(AppError::NotFound("Service not found".into()))
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Service>, AppError> {
        self.uow.services.list(owner_id).await
    }

    pub async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        self.uow.services.exists(id, owner_id).await
    }
}
