//! # Attributes Module
//!
//! Product-attribute CRUD with bulk status/delete operations.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::attributes_routes;
