use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use std::sync::Arc;

use crate::models::{ActivitiesResponse, AppState, DayActivities, TripWithActivities};
use crate::utils::{ApiError, bucket_by_day, validate_id};

/// List a trip's activities grouped by calendar day
/// GET /trips/{trip_id}/activities
pub async fn get_activities(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
) -> Result<Json<ActivitiesResponse>, ApiError> {
    let trip_id = validate_id("tripId", &trip_id)?;

    let TripWithActivities { trip, activities } = state
        .trips
        .find_trip_with_activities(trip_id)?
        .ok_or(ApiError::TripNotFound)?;

    let days = bucket_by_day(&trip.window(), activities)?;
    info!("Listing activities for trip '{trip_id}' over {} days", days.len());

    Ok(Json(ActivitiesResponse {
        activities: days.into_iter().map(DayActivities::from).collect(),
    }))
}
