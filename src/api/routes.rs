//! API routes configuration module

use crate::api::handlers::{create_all_runs, create_run, health, list_roles};
use crate::service::FreelanceCrew;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `crew` - Crew shared across handlers
pub fn app(crew: Arc<FreelanceCrew>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/roles", get(list_roles))
        .route("/runs", post(create_run))
        .route("/runs/all", post(create_all_runs))
        .layer(Extension(crew))
}
