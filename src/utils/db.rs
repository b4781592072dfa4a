use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::time::Duration;

/// Create and configure an SQLite connection pool
pub fn create_connection_pool(
    db_path: &str,
    max_size: u32,
    min_idle: u32,
    timeout: Duration,
) -> Result<Pool<SqliteConnectionManager>, r2d2::Error> {
    // Participants and activities reference their trip, so enforce keys
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )
    });

    r2d2::Pool::builder()
        .max_size(max_size)
        .min_idle(Some(min_idle))
        .max_lifetime(None) // Connections last until closed
        .idle_timeout(Some(Duration::from_secs(300))) // 5 minutes idle timeout
        .connection_timeout(timeout)
        .build(manager)
}

/// Ensures the trip tables and their indexes exist in the database
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS trips (
            id TEXT NOT NULL PRIMARY KEY,
            destination TEXT NOT NULL,
            starts_at TEXT NOT NULL,
            ends_at TEXT NOT NULL,
            is_confirmed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS participants (
            id TEXT NOT NULL PRIMARY KEY,
            name TEXT,
            email TEXT NOT NULL,
            is_confirmed INTEGER NOT NULL DEFAULT 0,
            is_owner INTEGER NOT NULL DEFAULT 0,
            trip_id TEXT NOT NULL REFERENCES trips (id) ON DELETE CASCADE
        );
        CREATE TABLE IF NOT EXISTS activities (
            id TEXT NOT NULL PRIMARY KEY,
            title TEXT NOT NULL,
            occurs_at TEXT NOT NULL,
            trip_id TEXT NOT NULL REFERENCES trips (id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_participants_trip_id ON participants (trip_id);
        CREATE INDEX IF NOT EXISTS idx_activities_trip_id_occurs_at
            ON activities (trip_id, occurs_at);",
    )
}
