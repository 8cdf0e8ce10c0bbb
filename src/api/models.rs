//! Request and response types for the marketplace API

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
///
/// The role must arrive alongside the token: a session is either fully
/// populated or not created at all, so a response missing either field fails
/// deserialization and the login as a whole.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// A user profile as owned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
}

/// The user record embedded in a worker listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerUser {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
}

/// A worker as returned by `GET /api/workers/all`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: u64,
    pub user: WorkerUser,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
}

/// Body of `PUT /api/admin/edit_profile/{user_id}`.
///
/// Field names follow the server's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerProfileUpdate {
    pub description: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "direccion")]
    pub address: String,
}

/// Body of `POST /api/admin/create-admin`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Error body the server attaches to non-2xx responses, when it does
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}
