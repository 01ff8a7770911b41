//! # Testimonials Module
//!
//! Customer-testimonial CRUD with bulk status/delete operations.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::testimonials_routes;
