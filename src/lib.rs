pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod routes;

// Re-export key functions for convenience
pub use app::{AppState, create_app, init_tracing};
