use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::owner::OwnerId;
use crate::api::dtos::requests::{parse_time, CreateWorkingHourRequest, UpdateWorkingHourRequest};
use crate::domain::models::working_hour::WorkingHour;
use crate::domain::services::working_hour_service::WorkingHourService;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn list_working_hours(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let hours = WorkingHourService::new(&uow).list(owner_id).await?;
    Ok(Json(hours))
}

pub async fn create_working_hour(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Json(payload): Json<CreateWorkingHourRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating working hour {:?} for company {}", payload.day_of_week, payload.company_id);

    let mut working_hour = WorkingHour::new(
        payload.company_id,
        payload.day_of_week,
        parse_time(&payload.start_time)?,
        parse_time(&payload.end_time)?,
    );
    if let Some(active) = payload.is_active { working_hour.is_active = active; }

    let uow = state.db.begin().await?;
    let created = WorkingHourService::new(&uow).add(working_hour, owner_id).await?;
    uow.save_changes().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_working_hour(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let working_hour = WorkingHourService::new(&uow).find_by_id(id, owner_id).await?;
    Ok(Json(working_hour))
}

pub async fn update_working_hour(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkingHourRequest>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let hours = WorkingHourService::new(&uow);

    let mut working_hour = hours.find_by_id(id, owner_id).await?;
    if let Some(company_id) = payload.company_id { working_hour.company_id = company_id; }
    if let Some(day) = payload.day_of_week { working_hour.day_of_week = day; }
    if let Some(start) = payload.start_time { working_hour.start_time = parse_time(&start)?; }
    if let Some(end) = payload.end_time { working_hour.end_time = parse_time(&end)?; }
    if let Some(active) = payload.is_active { working_hour.is_active = active; }

    let updated = hours.update(working_hour, owner_id).await?;
    uow.save_changes().await?;

    Ok(Json(updated))
}

pub async fn delete_working_hour(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    WorkingHourService::new(&uow).remove(id, owner_id).await?;
    uow.save_changes().await?;
    Ok(StatusCode::NO_CONTENT)
}
