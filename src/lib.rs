//! HTTP service for a trip planner: confirming participants through the
//! link they receive, and listing a trip's activities day by day.

pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

pub use handlers::router;
