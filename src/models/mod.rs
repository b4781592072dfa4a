pub mod config;
pub mod response;
pub mod state;
pub mod trip;

// Re-exports for convenience
pub use config::AppConfig;
pub use response::{ActivitiesResponse, DayActivities};
pub use state::AppState;
pub use trip::{Activity, Participant, Trip, TripWithActivities};
