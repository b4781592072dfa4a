#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;
use url::Url;
use uuid::Uuid;

use trip_planner::models::{Activity, AppState, Participant, Trip};
use trip_planner::router;
use trip_planner::store::{SqliteStore, TripRepository};

pub const WEB_BASE_URL: &str = "http://localhost:3000";

pub struct TestApp {
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
    pub store: SqliteStore,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("trips.db");
        let store = SqliteStore::open(path.to_str().unwrap(), 4, 1, Duration::from_secs(5))
            .expect("Failed to open store");
        Self { _dir: dir, store }
    }

    pub fn router(&self) -> Router {
        router_for(Arc::new(self.store.clone()))
    }

    pub fn seed_trip(&self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Trip {
        let trip = Trip {
            id: Uuid::new_v4(),
            destination: "Florianópolis".to_string(),
            starts_at,
            ends_at,
            is_confirmed: true,
            created_at: Utc::now(),
        };
        self.store.insert_trip(&trip).expect("Failed to insert trip");
        trip
    }

    pub fn seed_activity(&self, trip: &Trip, title: &str, occurs_at: DateTime<Utc>) -> Activity {
        let activity = Activity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            occurs_at,
            trip_id: trip.id,
        };
        self.store
            .insert_activity(&activity)
            .expect("Failed to insert activity");
        activity
    }

    pub fn seed_participant(&self, trip: &Trip, is_confirmed: bool) -> Participant {
        let participant = Participant {
            id: Uuid::new_v4(),
            name: Some("Diego".to_string()),
            email: "diego@example.com".to_string(),
            is_confirmed,
            is_owner: false,
            trip_id: trip.id,
        };
        self.store
            .insert_participant(&participant)
            .expect("Failed to insert participant");
        participant
    }
}

pub fn router_for(trips: Arc<dyn TripRepository>) -> Router {
    router(Arc::new(AppState {
        trips,
        web_base_url: Url::parse(WEB_BASE_URL).unwrap(),
    }))
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("Response body is not JSON")
}
