//! # Coupons Module
//!
//! Discount coupon CRUD, including single and batch insertion, a batch
//! field patch, and the show/hide toggle.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::coupons_routes;
