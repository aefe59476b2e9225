use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct TurnoverResponse {
    pub total: Decimal,
    pub service_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
