//! Persistence for trips, their participants and their activities.
//!
//! Handlers only see the [`TripRepository`] capability; [`SqliteStore`] is the
//! production backend.

pub mod sqlite;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Participant, TripWithActivities};

pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("invalid timestamp in column {column}: {value}")]
    Timestamp {
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid id in column {column}: {value}")]
    Id {
        column: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },
}

/// Lookups and updates the route handlers need.
pub trait TripRepository: Send + Sync {
    /// Fetch a trip along with its activities in chronological order.
    fn find_trip_with_activities(
        &self,
        trip_id: Uuid,
    ) -> Result<Option<TripWithActivities>, StoreError>;

    fn find_participant(&self, participant_id: Uuid) -> Result<Option<Participant>, StoreError>;

    /// Mark a participant as attending. Confirming twice is harmless.
    fn confirm_participant(&self, participant_id: Uuid) -> Result<(), StoreError>;
}
