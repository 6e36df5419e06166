//! flashnote-server - REST API server for flashnote.
//!
//! # Example
//!
//! ```ignore
//! use flashnote_core::FlashnoteConfig;
//! use flashnote_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = FlashnoteConfig::load().unwrap();
//!     let state = AppState::from_config(&config).unwrap();
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
}
