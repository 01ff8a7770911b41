//! # Categories Module
//!
//! Category CRUD plus the bulk status/delete operations and the
//! show/hide toggle used by the storefront dashboard.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::categories_routes;
