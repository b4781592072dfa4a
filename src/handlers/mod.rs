pub mod activity;
pub mod participant;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::AppState;

// Re-exports for convenience
pub use activity::get_activities;
pub use participant::confirm_participant;

/// Build the application router with all trip routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/participants/{participant_id}/confirm",
            get(confirm_participant),
        )
        .route("/trips/{trip_id}/activities", get(get_activities))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
