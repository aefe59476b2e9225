use crate::domain::models::{
    booking::BookingStatus, schedule::{DayOfWeek, TimeOffset}, service::ServiceStatus,
};
use crate::error::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateCompanyRequest {
    pub company_name: String,
    pub public_url: String,
    pub company_logo_path: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCompanyRequest {
    pub company_name: Option<String>,
    pub public_url: Option<String>,
    pub company_logo_path: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub company_id: Uuid,
    pub service_name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration_min: i32,
    pub status: Option<ServiceStatus>,
}

#[derive(Deserialize)]
pub struct UpdateServiceRequest {
    pub company_id: Option<Uuid>,
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration_min: Option<i32>,
    pub status: Option<ServiceStatus>,
}

#[derive(Deserialize)]
pub struct CreateWorkingHourRequest {
    pub company_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateWorkingHourRequest {
    pub company_id: Option<Uuid>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub booking_date: String,
    pub start_time: String,
    pub status: Option<BookingStatus>,
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub service_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub booking_date: Option<String>,
    pub start_time: Option<String>,
    pub status: Option<BookingStatus>,
}

#[derive(Deserialize)]
pub struct TurnoverQuery {
    pub service_id: Option<Uuid>,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date (YYYY-MM-DD): {}", raw)))
}

pub fn parse_time(raw: &str) -> Result<TimeOffset, AppError> {
    raw.parse().map_err(AppError::Validation)
}
