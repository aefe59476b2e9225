use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::owner::OwnerId;
use crate::api::dtos::requests::{CreateServiceRequest, UpdateServiceRequest};
use crate::domain::models::service::{NewServiceParams, Service, ServiceStatus};
use crate::domain::services::service_catalog::ServiceCatalog;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let services = ServiceCatalog::new(&uow).list(owner_id).await?;
    Ok(Json(services))
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating service {} in company {}", payload.service_name, payload.company_id);

    let service = Service::new(NewServiceParams {
        company_id: payload.company_id,
        service_name: payload.service_name,
        description: payload.description.unwrap_or_default(),
        price: payload.price,
        duration_min: payload.duration_min,
        status: payload.status.unwrap_or(ServiceStatus::Active),
    });

    let uow = state.db.begin().await?;
    let created = ServiceCatalog::new(&uow).add(service, owner_id).await?;
    uow.save_changes().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_service(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let service = ServiceCatalog::new(&uow).find_by_id(id, owner_id).await?;
    Ok(Json(service))
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let catalog = ServiceCatalog::new(&uow);

    let mut service = catalog.find_by_id(id, owner_id).await?;
    if let Some(company_id) = payload.company_id { service.company_id = company_id; }
    if let Some(name) = payload.service_name { service.service_name = name; }
    if let Some(description) = payload.description { service.description = description; }
    if let Some(price) = payload.price { service.price = price; }
    if let Some(duration) = payload.duration_min { service.duration_min = duration; }
    if let Some(status) = payload.status { service.status = status; }

    let updated = catalog.update(service, owner_id).await?;
    uow.save_changes().await?;

    Ok(Json(updated))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    ServiceCatalog::new(&uow).remove(id, owner_id).await?;
    uow.save_changes().await?;
    Ok(StatusCode::NO_CONTENT)
}
