use crate::domain::{
    models::client::{Client, Registration},
    ports::UnitOfWork,
};
use crate::error::AppError;
use tracing::{info, warn};
use uuid::Uuid;

pub struct ClientService<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> ClientService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    /// Registers a client, or hands back the stored one when the email is known.
    pub async fn register(&self, client: Client) -> Result<Registration, AppError> {
        if let Some(existing) = self.uow.clients.find_by_email(&client.email).await? {
            info!("Client already registered: {}", existing.id);
            return Ok(Registration::Existing(existing));
        }

        let created = self.uow.clients.add(&client).await?;
        info!("Client registered: {}", created.id);
        Ok(Registration::Created(created))
    }

    pub async fn update(&self, mut client: Client, owner_id: Uuid) -> Result<Client, AppError> {
        let existing = self.uow.clients.find_by_id(client.id, owner_id).await?
            .ok_or(AppError::NotFound("Client not found".into()))?;
        self.ensure_not_shared(client.id, owner_id).await?;

        client.created_at = existing.created_at;
        let updated = self.uow.clients.update(&client).await?;
        info!("Client updated: {}", updated.id);
        Ok(updated)
    }

    /// Removing a client also removes their bookings, so it is refused while
    /// another owner still has bookings for them.
    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Client, AppError> {
        if self.uow.clients.find_by_id(id, owner_id).await?.is_none() {
            return Err(AppError::NotFound("Client not found".into()));
        }
        self.ensure_not_shared(id, owner_id).await?;

        let removed = self.uow.clients.remove(id, owner_id).await?
            .ok_or(AppError::NotFound("Client not found".into()))?;
        info!("Client removed: {}", removed.id);
        Ok(removed)
    }

    pub async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Client, AppError> {
        self.uow.clients.find_by_id(id, owner_id).await?
            .ok_or(AppError::NotFound("Client not found".into()))
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Client>, AppError> {
        self.uow.clients.list(owner_id).await
    }

    async fn ensure_not_shared(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        if self.uow.clients.has_bookings_elsewhere(id, owner_id).await? {
            warn!("Owner {} tried to modify client {} shared with another owner", owner_id, id);
            return Err(AppError::Conflict("Client also has bookings with another company".into()));
        }
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Client>, AppError> {
        self.uow.clients.find_by_email(email).await
    }
}
