use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::owner::OwnerId;
use crate::api::dtos::{
    requests::{parse_date, parse_time, CreateBookingRequest, TurnoverQuery, UpdateBookingRequest},
    responses::TurnoverResponse,
};
use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::ports::UnitOfWork;
use crate::domain::services::{booking_service::BookingService, service_catalog::ServiceCatalog};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let bookings = BookingService::new(&uow).list(owner_id).await?;
    Ok(Json(bookings))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = Booking::new(NewBookingParams {
        service_id: payload.service_id,
        client_id: payload.client_id,
        booking_date: parse_date(&payload.booking_date)?,
        start_time: parse_time(&payload.start_time)?,
        status: payload.status.unwrap_or(BookingStatus::Pending),
    });

    let uow = state.db.begin().await?;
    ensure_service_owned(&uow, booking.service_id, owner_id).await?;
    let created = BookingService::new(&uow).add(booking).await?;
    uow.save_changes().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let booking = BookingService::new(&uow).find_by_id(id, owner_id).await?;
    Ok(Json(booking))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let bookings = BookingService::new(&uow);

    let mut booking = bookings.find_by_id(id, owner_id).await?;
    if let Some(service_id) = payload.service_id { booking.service_id = service_id; }
    if let Some(client_id) = payload.client_id { booking.client_id = client_id; }
    if let Some(date) = payload.booking_date { booking.booking_date = parse_date(&date)?; }
    if let Some(start) = payload.start_time { booking.start_time = parse_time(&start)?; }
    if let Some(status) = payload.status { booking.status = status; }

    ensure_service_owned(&uow, booking.service_id, owner_id).await?;
    bookings.update(booking).await?;
    // Re-read so the response carries the display names of the new references.
    let updated = bookings.find_by_id(id, owner_id).await?;
    uow.save_changes().await?;

    info!("Booking {} updated by owner {}", id, owner_id);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    BookingService::new(&uow).remove(id, owner_id).await?;
    uow.save_changes().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_turnover(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Query(query): Query<TurnoverQuery>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let total = BookingService::new(&uow).calculate_total_turnover(owner_id, query.service_id).await?;
    Ok(Json(TurnoverResponse { total, service_id: query.service_id }))
}

pub async fn get_monthly_turnover(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Query(query): Query<TurnoverQuery>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let months = BookingService::new(&uow).calculate_monthly_turnover(owner_id, query.service_id).await?;
    Ok(Json(months))
}

async fn ensure_service_owned(uow: &UnitOfWork, service_id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
    if !ServiceCatalog::new(uow).exists(service_id, owner_id).await? {
        warn!("Owner {} tried to book foreign or unknown service {}", owner_id, service_id);
        return Err(AppError::InvalidReference("Service not found".into()));
    }
    Ok(())
}
