pub mod booking_service;
pub mod client_service;
pub mod company_service;
pub mod service_catalog;
pub mod working_hour_service;

use crate::domain::ports::UnitOfWork;
use crate::error::AppError;
use tracing::warn;
use uuid::Uuid;

/// Fails with `NotFound` unless `company_id` belongs to `owner_id`.
pub(crate) async fn ensure_company_owned(uow: &UnitOfWork, company_id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
    if !uow.companies.exists(company_id, owner_id).await? {
        warn!("Owner {} referenced foreign company {}", owner_id, company_id);
        return Err(AppError::NotFound("Company not found".into()));
    }
    Ok(())
}
