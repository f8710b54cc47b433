//! HTTP surface for pet adoption search.
//!
//! Thin axum layer over the `search` core: route handlers translate query
//! parameters into core calls and core results into JSON. All search
//! semantics live in the core library.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
pub use error::ApiError;
