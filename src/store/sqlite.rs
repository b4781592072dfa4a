use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{OptionalExtension, params};
use std::time::Duration;
use uuid::Uuid;

use super::{StoreError, TripRepository};
use crate::models::{Activity, Participant, Trip, TripWithActivities};
use crate::utils::{create_connection_pool, ensure_schema};

/// [`TripRepository`] backed by a pool of SQLite connections.
///
/// Timestamps are stored as RFC 3339 text with millisecond precision, so
/// ordering by the column is chronological.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> Self {
        Self { pool }
    }

    /// Open a pool on `db_path` and make sure the trip tables exist
    pub fn open(
        db_path: &str,
        max_size: u32,
        min_idle: u32,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = create_connection_pool(db_path, max_size, min_idle, timeout)?;
        {
            let conn = pool.get()?;
            ensure_schema(&conn)?;
        }
        Ok(Self::new(pool))
    }

    pub fn insert_trip(&self, trip: &Trip) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO trips (id, destination, starts_at, ends_at, is_confirmed, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                trip.id.to_string(),
                trip.destination,
                format_timestamp(&trip.starts_at),
                format_timestamp(&trip.ends_at),
                trip.is_confirmed,
                format_timestamp(&trip.created_at),
            ],
        )?;
        Ok(())
    }

    pub fn insert_participant(&self, participant: &Participant) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO participants (id, name, email, is_confirmed, is_owner, trip_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                participant.id.to_string(),
                participant.name,
                participant.email,
                participant.is_confirmed,
                participant.is_owner,
                participant.trip_id.to_string(),
            ],
        )?;
        Ok(())
    }

    pub fn insert_activity(&self, activity: &Activity) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO activities (id, title, occurs_at, trip_id) VALUES (?1, ?2, ?3, ?4)",
            params![
                activity.id.to_string(),
                activity.title,
                format_timestamp(&activity.occurs_at),
                activity.trip_id.to_string(),
            ],
        )?;
        Ok(())
    }
}

impl TripRepository for SqliteStore {
    fn find_trip_with_activities(
        &self,
        trip_id: Uuid,
    ) -> Result<Option<TripWithActivities>, StoreError> {
        let conn = self.pool.get()?;
        let id = trip_id.to_string();

        let row = conn
            .query_row(
                "SELECT id, destination, starts_at, ends_at, is_confirmed, created_at
                 FROM trips WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, bool>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((id_text, destination, starts_at, ends_at, is_confirmed, created_at)) = row else {
            return Ok(None);
        };

        let trip = Trip {
            id: parse_id("trips.id", &id_text)?,
            destination,
            starts_at: parse_timestamp("trips.starts_at", &starts_at)?,
            ends_at: parse_timestamp("trips.ends_at", &ends_at)?,
            is_confirmed,
            created_at: parse_timestamp("trips.created_at", &created_at)?,
        };

        let mut stmt = conn.prepare(
            "SELECT id, title, occurs_at, trip_id FROM activities
             WHERE trip_id = ?1 ORDER BY occurs_at ASC",
        )?;
        let rows = stmt.query_map(params![id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut activities = Vec::new();
        for row in rows {
            let (id, title, occurs_at, trip_id) = row?;
            activities.push(Activity {
                id: parse_id("activities.id", &id)?,
                title,
                occurs_at: parse_timestamp("activities.occurs_at", &occurs_at)?,
                trip_id: parse_id("activities.trip_id", &trip_id)?,
            });
        }

        debug!("Loaded trip '{trip_id}' with {} activities", activities.len());
        Ok(Some(TripWithActivities { trip, activities }))
    }

    fn find_participant(&self, participant_id: Uuid) -> Result<Option<Participant>, StoreError> {
        let conn = self.pool.get()?;
        let row = conn
            .query_row(
                "SELECT id, name, email, is_confirmed, is_owner, trip_id
                 FROM participants WHERE id = ?1",
                params![participant_id.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, bool>(3)?,
                        row.get::<_, bool>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        row.map(
            |(id, name, email, is_confirmed, is_owner, trip_id)| -> Result<_, StoreError> {
                Ok(Participant {
                    id: parse_id("participants.id", &id)?,
                    name,
                    email,
                    is_confirmed,
                    is_owner,
                    trip_id: parse_id("participants.trip_id", &trip_id)?,
                })
            },
        )
        .transpose()
    }

    fn confirm_participant(&self, participant_id: Uuid) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        let updated = conn.execute(
            "UPDATE participants SET is_confirmed = 1 WHERE id = ?1",
            params![participant_id.to_string()],
        )?;
        debug!("Confirmed participant '{participant_id}' ({updated} row(s) updated)");
        Ok(())
    }
}

fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(column: &'static str, value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| StoreError::Timestamp {
            column,
            value: value.to_string(),
            source,
        })
}

fn parse_id(column: &'static str, value: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(value).map_err(|source| StoreError::Id {
        column,
        value: value.to_string(),
        source,
    })
}
