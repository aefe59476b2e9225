use serde::{Deserialize, Serialize};

/// Claims of the bearer token issued by the external identity provider.
/// `sub` carries the owner's id.
#[derive(Debug, Serialize, Deserialize)]
pub struct OwnerClaims {
    pub iss: String,
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}
