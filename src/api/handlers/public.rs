use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{parse_date, parse_time, CreateBookingRequest};
use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::services::{booking_service::BookingService, company_service::CompanyService};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_company_by_public_url(
    State(state): State<Arc<AppState>>,
    Path(public_url): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let company = CompanyService::new(&uow).get_by_public_url_with_services(&public_url).await?;
    Ok(Json(company))
}

pub async fn create_public_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Public booking request for service {}", payload.service_id);

    let booking = Booking::new(NewBookingParams {
        service_id: payload.service_id,
        client_id: payload.client_id,
        booking_date: parse_date(&payload.booking_date)?,
        start_time: parse_time(&payload.start_time)?,
        status: payload.status.unwrap_or(BookingStatus::Pending),
    });

    let uow = state.db.begin().await?;
    let created = BookingService::new(&uow).add(booking).await?;
    uow.save_changes().await?;

    Ok((StatusCode::CREATED, Json(created)))
}
