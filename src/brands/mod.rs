//! # Brands Module
//!
//! Product-brand CRUD with bulk status/delete operations.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::brands_routes;
