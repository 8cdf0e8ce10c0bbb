//! Client-side form validation
//!
//! Field checks run before any network call: a failing field blocks
//! submission entirely. The server still validates everything again.

pub mod rules;

pub use rules::FieldCheck;

use crate::api::models::{CreateAdminRequest, WorkerProfileUpdate};
use crate::error::{Error, Result};

fn ensure(field: &'static str, check: FieldCheck) -> Result<()> {
    match check {
        FieldCheck::Valid => Ok(()),
        FieldCheck::Invalid(reason) => Err(Error::Validation { field, reason }),
    }
}

/// Validate login credentials. First failing field wins.
pub fn validate_login(username: &str, password: &str) -> Result<()> {
    ensure("username", rules::login_username(username))?;
    ensure("password", rules::login_password(password))
}

/// Validate a worker profile update before it is sent
pub fn validate_worker_profile(update: &WorkerProfileUpdate) -> Result<()> {
    ensure("description", rules::required("description", &update.description))?;
    ensure("phone number", rules::phone_number(&update.phone_number))?;
    ensure("address", rules::required("address", &update.address))
}

/// Validate a new-admin form before it is sent
pub fn validate_new_admin(request: &CreateAdminRequest) -> Result<()> {
    ensure("username", rules::admin_username(&request.username))?;
    ensure("name", rules::required("name", &request.name))?;
    ensure("lastname", rules::required("lastname", &request.lastname))?;
    ensure("email", rules::email(&request.email))?;
    ensure("password", rules::admin_password(&request.password))
}
