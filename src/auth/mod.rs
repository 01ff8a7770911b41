//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Email/password login
//! - JWT token issuance and verification
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod token;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;
pub use token::TokenService;
