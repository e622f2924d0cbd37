//! Yatra API crate - axum HTTP server for programmatic site listing.
//!
//! A thin wrapper over the site directory and translator: callers post a
//! language and a district and get back the district's sites, translated.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
