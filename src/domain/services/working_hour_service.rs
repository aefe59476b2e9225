use crate::domain::{models::working_hour::WorkingHour, ports::UnitOfWork};
use crate::error::AppError;
use super::ensure_company_owned;
use tracing::info;
use uuid::Uuid;

/// Weekly opening hours, one row per company and day.
pub struct WorkingHourService<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> WorkingHourService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub async fn add(&self, working_hour: WorkingHour, owner_id: Uuid) -> Result<WorkingHour, AppError> {
        ensure_company_owned(self.uow, working_hour.company_id, owner_id).await?;

        let created = self.uow.working_hours.add(&working_hour).await?;
        info!("Working hour created: {} ({:?})", created.id, created.day_of_week);
        Ok(created)
    }

    pub async fn update(&self, mut working_hour: WorkingHour, owner_id: Uuid) -> Result<WorkingHour, AppError> {
        let existing = self.uow.working_hours.find_by_id(working_hour.id, owner_id).await?
            .ok_or(AppError::NotFound("Working hour not found".into()))?;
        ensure_company_owned(self.uow, working_hour.company_id, owner_id).await?;

        working_hour.created_at = existing.created_at;
        let updated = self.uow.working_hours.update(&working_hour).await?;
        info!("Working hour updated: {}", updated.id);
        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<WorkingHour, AppError> {
        let removed = self.uow.working_hours.remove(id, owner_id).await?
            .ok_or(AppError::NotFound("Working hour not found".into()))?;
        info!("Working hour removed: {}", removed.id);
        Ok(removed)
    }

    pub async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<WorkingHour, AppError> {
        self.uow.working_hours.find_by_id(id, owner_id).await?
            .ok_or(AppError::NotFound("Working hour not found".into()))
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<WorkingHour>, AppError> {
        self.uow.working_hours.list(owner_id).await
    }

    pub async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        self.uow.working_hours.exists(id, owner_id).await
    }
}
