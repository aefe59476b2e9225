use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, company, service, working_hour, client, booking, public};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public storefront
        .route("/api/v1/public/companies/{public_url}", get(public::get_company_by_public_url))
        .route("/api/v1/public/clients", post(client::register_client))
        .route("/api/v1/public/bookings", post(public::create_public_booking))

        // Companies
        .route("/api/v1/admin/companies", get(company::list_companies).post(company::create_company))
        .route("/api/v1/admin/companies/{id}", get(company::get_company).put(company::update_company).delete(company::delete_company))

        // Services
        .route("/api/v1/admin/services", get(service::list_services).post(service::create_service))
        .route("/api/v1/admin/services/{id}", get(service::get_service).put(service::update_service).delete(service::delete_service))

        // Working hours
        .route("/api/v1/admin/working-hours", get(working_hour::list_working_hours).post(working_hour::create_working_hour))
        .route("/api/v1/admin/working-hours/{id}", get(working_hour::get_working_hour).put(working_hour::update_working_hour).delete(working_hour::delete_working_hour))

        // Clients
        .route("/api/v1/admin/clients", get(client::list_clients).post(client::create_client))
        .route("/api/v1/admin/clients/{id}", get(client::get_client).put(client::update_client).delete(client::delete_client))

        // Bookings & revenue
        .route("/api/v1/admin/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/v1/admin/bookings/turnover", get(booking::get_turnover))
        .route("/api/v1/admin/bookings/monthly-turnover", get(booking::get_monthly_turnover))
        .route("/api/v1/admin/bookings/{id}", get(booking::get_booking).put(booking::update_booking).delete(booking::delete_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        owner_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
