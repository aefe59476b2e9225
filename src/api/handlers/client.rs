use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::owner::OwnerId;
use crate::api::dtos::requests::{CreateClientRequest, UpdateClientRequest};
use crate::domain::models::client::Client;
use crate::domain::services::client_service::ClientService;
use crate::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub async fn list_clients(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let clients = ClientService::new(&uow).list(owner_id).await?;
    Ok(Json(clients))
}

/// Shared by the admin and public routes: 201 for a new client, 200 when the
/// email was already registered.
pub async fn register_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let client = Client::new(payload.first_name, payload.last_name, payload.email, payload.phone_number);

    let uow = state.db.begin().await?;
    let registration = ClientService::new(&uow).register(client).await?;
    uow.save_changes().await?;

    let status = if registration.is_created() { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(registration.into_client())))
}

pub async fn create_client(
    state: State<Arc<AppState>>,
    _owner: OwnerId,
    payload: Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    register_client(state, payload).await
}

pub async fn get_client(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let client = ClientService::new(&uow).find_by_id(id, owner_id).await?;
    Ok(Json(client))
}

pub async fn update_client(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    let clients = ClientService::new(&uow);

    let mut client = clients.find_by_id(id, owner_id).await?;
    if let Some(first) = payload.first_name { client.first_name = first; }
    if let Some(last) = payload.last_name { client.last_name = last; }
    if let Some(email) = payload.email { client.email = email; }
    if let Some(phone) = payload.phone_number { client.phone_number = Some(phone); }

    let updated = clients.update(client, owner_id).await?;
    uow.save_changes().await?;

    Ok(Json(updated))
}

pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let uow = state.db.begin().await?;
    ClientService::new(&uow).remove(id, owner_id).await?;
    uow.save_changes().await?;
    Ok(StatusCode::NO_CONTENT)
}
