#![allow(dead_code)]

use booking_platform::{
    api::router::create_router,
    config::Config,
    domain::{
        models::{
            auth::OwnerClaims,
            booking::{Booking, BookingStatus, NewBookingParams},
            client::Client,
            company::Company,
            service::{NewServiceParams, Service, ServiceStatus},
        },
        ports::UnitOfWork,
        services::{
            booking_service::BookingService, client_service::ClientService,
            company_service::CompanyService, service_catalog::ServiceCatalog,
        },
    },
    infra::{
        factory::{connect_sqlite, run_sqlite_migrations},
        repositories::sqlite_unit_of_work::SqliteDatabase,
    },
    state::AppState,
};
use axum::Router;
use chrono::{NaiveDate, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use rust_decimal::Decimal;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_ISSUER: &str = "test-issuer";

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let pool = connect_sqlite(&db_url).await.expect("Failed to connect to test db");
        run_sqlite_migrations(&pool).await.expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret: TEST_SECRET.to_string(),
            auth_issuer: TEST_ISSUER.to_string(),
        };

        let state = Arc::new(AppState::new(config, Arc::new(SqliteDatabase::new(pool.clone()))));
        let router = create_router(state.clone());

        Self { router, pool, db_filename, state }
    }

    pub async fn uow(&self) -> UnitOfWork {
        self.state.db.begin().await.expect("Failed to begin unit of work")
    }

    pub fn token_for(&self, owner_id: Uuid) -> String {
        let now = Utc::now().timestamp() as usize;
        let claims = OwnerClaims {
            iss: TEST_ISSUER.to_string(),
            sub: owner_id.to_string(),
            exp: now + 3600,
            iat: now,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes()))
            .expect("Failed to sign test token")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn price(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

pub async fn seed_company(uow: &UnitOfWork, owner_id: Uuid, public_url: &str) -> Company {
    let company = Company::new(owner_id, format!("Company {}", public_url), public_url.to_string());
    CompanyService::new(uow).add(company, owner_id).await.unwrap()
}

pub async fn seed_service(uow: &UnitOfWork, owner_id: Uuid, company_id: Uuid, name: &str, price_raw: &str, duration_min: i32) -> Service {
    let service = Service::new(NewServiceParams {
        company_id,
        service_name: name.to_string(),
        description: String::new(),
        price: price(price_raw),
        duration_min,
        status: ServiceStatus::Active,
    });
    ServiceCatalog::new(uow).add(service, owner_id).await.unwrap()
}

pub async fn seed_client(uow: &UnitOfWork, first: &str, last: &str, email: &str) -> Client {
    let client = Client::new(first.to_string(), last.to_string(), email.to_string(), None);
    ClientService::new(uow).register(client).await.unwrap().into_client()
}

pub async fn seed_booking(uow: &UnitOfWork, service_id: Uuid, client_id: Uuid, day: &str, start: &str) -> Booking {
    let booking = Booking::new(NewBookingParams {
        service_id,
        client_id,
        booking_date: date(day),
        start_time: start.parse().unwrap(),
        status: BookingStatus::Pending,
    });
    BookingService::new(uow).add(booking).await.unwrap()
}
