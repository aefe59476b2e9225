use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::owner::OwnerId;
use crate::api::dtos::requests::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::domain::models::company::Company;
use crate::domain::services::company_service::CompanyService;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn list_companies(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let companies = CompanyService::new(&uow).list(owner_id).await?;
    Ok(Json(companies))
}

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating company {} for owner {}", payload.public_url, owner_id);

    let mut company = Company::new(owner_id, payload.company_name, payload.public_url);
    company.company_logo_path = payload.company_logo_path;

    let uow = state.db.begin().await?;
    let created = CompanyService::new(&uow).add(company, owner_id).await?;
    uow.save_changes().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let company = CompanyService::new(&uow).find_by_id(id, owner_id).await?;
    Ok(Json(company))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let companies = CompanyService::new(&uow);

    let mut company = companies.find_by_id(id, owner_id).await?;
    if let Some(name) = payload.company_name { company.company_name = name; }
    if let Some(url) = payload.public_url { company.public_url = url; }
    if let Some(path) = payload.company_logo_path { company.company_logo_path = Some(path); }

    let updated = companies.update(company, owner_id).await?;
    uow.save_changes().await?;

    Ok(Json(updated))
}

pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    CompanyService::new(&uow).remove(id, owner_id).await?;
    uow.save_changes().await?;
    Ok(StatusCode::NO_CONTENT)
}
