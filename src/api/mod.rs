//! Remote marketplace API

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{
    CreateAdminRequest, LoginRequest, LoginResponse, UserProfile, Worker, WorkerProfileUpdate,
    WorkerUser,
};
