//! HTTP layer for Werkstatt.
//!
//! Axum server with the site pages, the `/ask` answer endpoint, static
//! assets and a health check.

pub mod error;
pub mod handlers;
pub mod router;
