use crate::domain::{models::booking::{Booking, MonthlyRevenue}, models::service::cents_to_price, ports::BookingRepository};
use crate::error::AppError;
use crate::infra::repositories::{active, into_monthly_revenue, MonthlyRevenueRow, SharedTx};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Sqlite;
use uuid::Uuid;

const SELECT_WITH_NAMES: &str = "SELECT b.*, c.first_name || ' ' || c.last_name AS client_name, s.service_name AS service_name
     FROM bookings b
     JOIN services s ON s.id = b.service_id
     JOIN companies co ON co.id = s.company_id
     JOIN clients c ON c.id = b.client_id";

pub struct SqliteBookingRepo {
    tx: SharedTx<Sqlite>,
}

impl SqliteBookingRepo {
    pub fn new(tx: SharedTx<Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn add(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, service_id, client_id, booking_date, start_time, end_time, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
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
            "UPDATE bookings SET service_id=?, client_id=?, booking_date=?, start_time=?, end_time=?, status=?
             WHERE id=?
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
             WHERE id = ? AND service_id IN (
                SELECT s.id FROM services s JOIN companies co ON co.id = s.company_id WHERE co.owner_id = ?
             )
             RETURNING *"
        )
            .bind(id).bind(owner_id)
            .fetch_optional(&mut **tx).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Booking>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(&format!("{} WHERE b.id = ? AND co.owner_id = ?", SELECT_WITH_NAMES))
            .bind(id).bind(owner_id)
            .fetch_optional(&mut **tx).await.map_err(AppError::Database)
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Booking>(&format!(
            "{} WHERE co.owner_id = ? ORDER BY b.booking_date ASC, b.start_time ASC, client_name ASC",
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
                WHERE b.id = ? AND co.owner_id = ?
            )"
        )
            .bind(id).bind(owner_id)
            .fetch_one(&mut **tx).await.map_err(AppError::Database)
    }

    async fn calculate_total_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Decimal, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let cents = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(s.price_cents), 0)
             FROM bookings b
             JOIN services s ON s.id = b.service_id
             JOIN companies co ON co.id = s.company_id
             WHERE co.owner_id = ? AND (? IS NULL OR b.service_id = ?)"
        )
            .bind(owner_id).bind(service_id).bind(service_id)
            .fetch_one(&mut **tx).await.map_err(AppError::Database)?;
        Ok(cents_to_price(cents))
    }

    async fn calculate_monthly_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Vec<MonthlyRevenue>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        let rows = sqlx::query_as::<_, MonthlyRevenueRow>(
            "SELECT CAST(strftime('%m', b.booking_date) AS INTEGER) AS month, SUM(s.price_cents) AS revenue_cents
             FROM bookings b
             JOIN services s ON s.id = b.service_id
             JOIN companies co ON co.id = s.company_id
             WHERE co.owner_id = ? AND (? IS NULL OR b.service_id = ?)
             GROUP BY month
             ORDER BY month ASC"
        )
            .bind(owner_id).bind(service_id).bind(service_id)
            .fetch_all(&mut **tx).await.map_err(AppError::Database)?;
        Ok(into_monthly_revenue(rows))
    }
}
