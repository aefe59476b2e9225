use crate::domain::models::{
    booking::{Booking, MonthlyRevenue}, client::Client,
    company::{Company, CompanyWithServices}, service::Service, working_hour::WorkingHour,
};
use crate::error::AppError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

// Every method taking `owner_id` only sees rows reachable from that owner's company.

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn add(&self, company: &Company) -> Result<Company, AppError>;
    async fn update(&self, company: &Company) -> Result<Company, AppError>;
    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Company>, AppError>;
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Company>, AppError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Company>, AppError>;
    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
    async fn get_by_public_url_with_services(&self, public_url: &str) -> Result<Option<CompanyWithServices>, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn add(&self, service: &Service) -> Result<Service, AppError>;
    async fn update(&self, service: &Service) -> Result<Service, AppError>;
    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Service>, AppError>;
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Service>, AppError>;
    /// Lookup without an ownership filter. Callers are responsible for scoping.
    async fn find_by_id_unscoped(&self, id: Uuid) -> Result<Option<Service>, AppError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Service>, AppError>;
    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
pub trait WorkingHourRepository: Send + Sync {
    async fn add(&self, working_hour: &WorkingHour) -> Result<WorkingHour, AppError>;
    async fn update(&self, working_hour: &WorkingHour) -> Result<WorkingHour, AppError>;
    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<WorkingHour>, AppError>;
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<WorkingHour>, AppError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<WorkingHour>, AppError>;
    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn add(&self, client: &Client) -> Result<Client, AppError>;
    async fn update(&self, client: &Client) -> Result<Client, AppError>;
    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Client>, AppError>;
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Client>, AppError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Client>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, AppError>;
    /// True when the client also has bookings with a company of another owner.
    async fn has_bookings_elsewhere(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn add(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Booking>, AppError>;
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Booking>, AppError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Booking>, AppError>;
    async fn exists(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
    async fn calculate_total_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Decimal, AppError>;
    async fn calculate_monthly_turnover(&self, owner_id: Uuid, service_id: Option<Uuid>) -> Result<Vec<MonthlyRevenue>, AppError>;
}

#[async_trait]
pub trait TransactionHandle: Send + Sync {
    async fn commit(self: Box<Self>) -> Result<(), AppError>;
}

/// Opens a unit of work per request.
#[async_trait]
pub trait Database: Send + Sync {
    async fn begin(&self) -> Result<UnitOfWork, AppError>;
}

/// Repository set sharing one transaction.
///
/// Nothing is persisted until `save_changes` is called; dropping the unit of
/// work rolls every pending mutation back.
pub struct UnitOfWork {
    pub companies: Box<dyn CompanyRepository>,
    pub services: Box<dyn ServiceRepository>,
    pub working_hours: Box<dyn WorkingHourRepository>,
    pub clients: Box<dyn ClientRepository>,
    pub bookings: Box<dyn BookingRepository>,
    transaction: Box<dyn TransactionHandle>,
}

pub struct Repositories {
    pub companies: Box<dyn CompanyRepository>,
    pub services: Box<dyn ServiceRepository>,
    pub working_hours: Box<dyn WorkingHourRepository>,
    pub clients: Box<dyn ClientRepository>,
    pub bookings: Box<dyn BookingRepository>,
}

impl UnitOfWork {
    pub fn new(repositories: Repositories, transaction: Box<dyn TransactionHandle>) -> Self {
        Self {
            companies: repositories.companies,
            services: repositories.services,
            working_hours: repositories.working_hours,
            clients: repositories.clients,
            bookings: repositories.bookings,
            transaction,
        }
    }

    pub async fn save_changes(self) -> Result<(), AppError> {
        self.transaction.commit().await
    }
}
