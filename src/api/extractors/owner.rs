use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use crate::domain::models::auth::OwnerClaims;
use crate::error::AppError;
use crate::state::AppState;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tracing::{warn, Span};
use uuid::Uuid;

/// Owner resolved from an HS256 `Authorization: Bearer` token.
pub struct OwnerId(pub Uuid);

impl FromRequestParts<Arc<AppState>> for OwnerId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let token = parts.headers.get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[state.config.auth_issuer.as_str()]);

        let token_data = decode::<OwnerClaims>(
            token,
            &DecodingKey::from_secret(state.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            warn!("Rejected bearer token: {}", e);
            AppError::Unauthorized
        })?;

        let owner_id = Uuid::parse_str(&token_data.claims.sub).map_err(|_| AppError::Unauthorized)?;
        Span::current().record("owner_id", tracing::field::display(owner_id));

        Ok(OwnerId(owner_id))
    }
}
