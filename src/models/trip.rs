use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::utils::bucket::{Timestamped, TripWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    pub fn window(&self) -> TripWindow {
        TripWindow::new(self.starts_at, self.ends_at)
    }
}

/// Someone invited to a trip. Attendance is confirmed through an e-mailed link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
    pub is_owner: bool,
    pub trip_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub occurs_at: DateTime<Utc>,
    pub trip_id: Uuid,
}

impl Timestamped for Activity {
    fn occurs_at(&self) -> DateTime<Utc> {
        self.occurs_at
    }
}

/// A trip together with its activities, ordered by `occurs_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripWithActivities {
    pub trip: Trip,
    pub activities: Vec<Activity>,
}
