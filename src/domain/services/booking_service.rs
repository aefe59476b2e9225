use crate::domain::{
    models::{booking::{Booking, MonthlyRevenue}, schedule::TimeOffset, service::Service},
    ports::UnitOfWork,
};
use crate::error::AppError;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

pub struct BookingService<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> BookingService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    /// Stores a booking with its end time derived from the current service duration.
    pub async fn add(&self, mut booking: Booking) -> Result<Booking, AppError> {
        let service = self.resolve_service(booking.service_id).await?;
        booking.end_time = end_time_for(booking.start_time, &service)?;

        let created = self.uow.bookings.add(&booking).await?;
        info!(
            "Booking created: {} ({} {} - {})",
            created.id, created.booking_date, created.start_time, created.end_time
        );
        Ok(created)
    }

    pub async fn update(&self, mut booking: Booking) -> Result<Booking, AppError> {
        let service = self.resolve_service(booking.service_id).await?;
        booking.end_time = end_time_for(booking.start_time, &service)?;

        let updated = self.uow.bookings.update(&booking).await?;
        info!("Booking updated: {} (status {:?})", updated.id, updated.status);
        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Booking, AppError> {
        let removed = self.uow.bookings.remove(id, owner_id).await?
            .ok_or(AppError::NotFound("Booking not found".into()))?;
        info!("Booking removed: {}", removed.id);
        Ok(removed)
    }

    pub async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Booking, AppError> {
        self.uow.bookings.find_by_id(id, owner_id).await?
            .ok_or(AppError::NotFound("Booking not found".into()))
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.uow.bookings.list(owner_id).await
    }

    pub async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        self.uow.bookings.exists(id, owner_id).await
    }

    pub async fn calculate_total_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Decimal, AppError> {
        self.uow.bookings.calculate_total_turnover(owner_id, service_id).await
    }

    pub async fn calculate_monthly_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Vec<MonthlyRevenue>, AppError> {
        self.uow.bookings.calculate_monthly_turnover(owner_id, service_id).await
    }

    async fn resolve_service(&self, service_id: Uuid) -> Result<Service, AppError> {
        match self.uow.services.find_by_id_unscoped(service_id).await? {
            Some(service) => Ok(service),
            None => {
                warn!("Booking rejected: service {} does not exist", service_id);
                Err(AppError::InvalidReference("Service not found".into()))
            }
        }
    }
}

fn end_time_for(start: TimeOffset, service: &Service) -> Result<TimeOffset, AppError> {
    start.plus_minutes(service.duration_min)
        .ok_or_else(|| AppError::Validation("Booking ends outside the representable time range".into()))
}
