//! # Users Module
//!
//! This module handles all account-related functionality including:
//! - Account registration (email/phone and social)
//! - Credential verification for the login flow
//! - User CRUD operations

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::users_routes;
pub use services::UsersService;
