use crate::domain::{models::client::Client, ports::ClientRepository};
use crate::error::AppError;
use crate::infra::repositories::{active, SharedTx};
use async_trait::async_trait;
use sqlx::Sqlite;
use uuid::Uuid;

const DUPLICATE_EMAIL: &str = "A client with this email already exists";

// A client belongs to an owner once it has a booking on one of the owner's services.
const OWNED_BY: &str = "EXISTS (
    SELECT 1 FROM bookings b
    JOIN services s ON s.id = b.service_id
    JOIN companies co ON co.id = s.company_id
    WHERE b.client_id = clients.id AND co.owner_id = ?
)";

pub struct SqliteClientRepo {
    tx: SharedTx<Sqlite>,
}

impl SqliteClientRepo {
    pub fn new(tx: SharedTx<Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepo {
    async fn add(&self, client: &Client) -> Result<Client, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (id, first_name, last_name, email, phone_number, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(client.id)
            .bind(&client.first_name)
            .bind(&client.last_name)
            .bind(&client.email)
            .bind(&client.phone_number)
            .bind(client.created_at)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::unique_as_conflict(e, DUPLICATE_EMAIL))
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Client>(
            "UPDATE clients SET first_name=?, last_name=?, email=?, phone_number=? WHERE id=? RETURNING *"
        )
            .bind(&client.first_name)
            .bind(&client.last_name)
            .bind(&client.email)
            .bind(&client.phone_number)
            .bind(client.id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| AppError::unique_as_conflict(e, DUPLICATE_EMAIL))?
            .ok_or(AppError::NotFound("Client not found".into()))
    }

    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Client>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Client>(&format!("DELETE FROM clients WHERE id = ? AND {} RETURNING *", OWNED_BY))
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Client>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Client>(&format!("SELECT * FROM clients WHERE id = ? AND {}", OWNED_BY))
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Client>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Client>(&format!(
            "SELECT * FROM clients WHERE {} ORDER BY last_name ASC, first_name ASC", OWNED_BY
        ))
            .bind(owner_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE LOWER(email) = LOWER(?)")
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)
    }

    async fn has_bookings_elsewhere(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.tx.lock().await;
        let tx = active(&mut *guard)?;
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM bookings b
                JOIN services s ON s.id = b.service_id
                JOIN companies co ON co.id = s.company_id
                WHERE b.client_id = ? AND co.owner_id <> ?
            )"
        )
            .bind(id)
            .bind(owner_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::Database)
    }
}
