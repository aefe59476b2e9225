use crate::domain::{models::booking::{Booking, MonthlyRevenue}, models::service::cents_to_price, ports::BookingRepository};
use crate::error::AppError;
use crate::infra::repositories::{active, into_monthly_revenue, MonthlyRevenueRow, SharedTx};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Postgres;
use uuid::Uuid;

const SELECT_WITH_NAMES: &str = "SELECT b.*, c.first_name || ' ' || c.last_name AS client_name, s.service_name AS service_name
     FROM bookings b
     JOIN services s ON s.id = b.service_id
     JOIN companies co ON co.id = s.company_id
     JOIN clients c ON c.id = b.client_id";

pub struct PostgresBookingRepo {
    tx: SharedTx<Postgres>,
}

impl PostgresBookingRepo {
    pub fn new(tx: SharedTx<Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn add(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, service_id, client_id, booking_date, start_time, end_time, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(booking.id).bind(booking.service_id).bind(booking.client_id).bind(booking.booking_date)
            .bind(booking.start_time).bind(booking.end_time).bind(booking.status).bind(booking.created_at)
            .fetch_one(&mut **tx).await
            .map_err(|e| AppError::foreign_key_as_invalid_reference(e, "Booking references an unknown client"))
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET service_id=$1, client_id=$2, booking_date=$3, start_time=$4, end_time=$5, status=$6
             WHERE id=$7
             RETURNING *"
        )
            .bind(booking.service_id).bind(booking.client_id).bind(booking.booking_date)
            .bind(booking.start_time).bind(booking.end_time).bind(booking.status)
            .bind(booking.id)
            .fetch_optional(&mut **tx).await
            .map_err(|e| AppError::foreign_key_as_invalid_reference(e, "Booking references an unknown client"))?
            .ok_or(AppError::NotFound("Booking not found".into()))
    }

    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Booking>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(
            "DELETE FROM bookings
             WHERE id = $1 AND service_id IN (
                SELECT s.id FROM services s JOIN companies co ON co.id = s.company_id WHERE co.owner_id = $2
             )
             RETURNING *"
        )
            .bind(id).bind(owner_id)
            .fetch_optional(&mut **tx).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Booking>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(&format!("{} WHERE b.id = $1 AND co.owner_id = $2", SELECT_WITH_NAMES))
            .bind(id).bind(owner_id)
            .fetch_optional(&mut **tx).await.map_err(AppError::Database)
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(&format!(
            "{} WHERE co.owner_id = $1 ORDER BY b.booking_date ASC, b.start_time ASC, client_name ASC",
            SELECT_WITH_NAMES
        ))
            .bind(owner_id)
            .fetch_all(&mut **tx).await.map_err(AppError::Database)
    }

    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM bookings b
                JOIN services s ON s.id = b.service_id
                JOIN companies co ON co.id = s.company_id
                WHERE b.id = $1 AND co.owner_id = $2
            )"
        )
            .bind(id).bind(owner_id)
            .fetch_one(&mut **tx).await.map_err(AppError::Database)
    }

    async fn calculate_total_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Decimal, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let cents = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(s.price_cents), 0)::BIGINT
             FROM bookings b
             JOIN services s ON s.id = b.service_id
             JOIN companies co ON co.id = s.company_id
             WHERE co.owner_id = $1 AND ($2::UUID IS NULL OR b.service_id = $2)"
        )
            .bind(owner_id).bind(service_id)
            .fetch_one(&mut **tx).await.map_err(AppError::Database)?;
        Ok(cents_to_price(cents))
    }

    async fn calculate_monthly_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Vec<MonthlyRevenue>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let rows = sqlx::query_as::<_, MonthlyRevenueRow>(
            "SELECT EXTRACT(MONTH FROM b.booking_date)::INT AS month, SUM(s.price_cents)::BIGINT AS revenue_cents
             FROM bookings b
             JOIN services s ON s.id = b.service_id
             JOIN companies co ON co.id = s.company_id
             WHERE co.owner_id = $1 AND ($2::UUID IS NULL OR b.service_id = $2)
             GROUP BY month
             ORDER BY month ASC"
        )
            .bind(owner_id).bind(service_id)
            .fetch_all(&mut **tx).await.map_err(AppError::Database)?;
        Ok(into_monthly_revenue(rows))
    }
}
