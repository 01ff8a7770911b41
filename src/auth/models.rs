//! Authentication data models

use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// `sub` is the account's store-assigned id; `username` is the display name
/// the dashboard greets with. Both ride inside the signed token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

/// Login request body
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
