use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::info;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

use crate::models::AppState;
use crate::utils::{ApiError, validate_id};

/// Confirm a participant's attendance, then send them to the trip page
/// GET /participants/{participant_id}/confirm
pub async fn confirm_participant(
    State(state): State<Arc<AppState>>,
    Path(participant_id): Path<String>,
) -> Result<Response, ApiError> {
    let participant_id = validate_id("participantId", &participant_id)?;

    let participant = state
        .trips
        .find_participant(participant_id)?
        .ok_or(ApiError::ParticipantNotFound)?;

    if participant.is_confirmed {
        info!("Participant '{participant_id}' already confirmed, redirecting");
        return Ok(redirect_to_trip(&state.web_base_url, participant.trip_id));
    }

    state.trips.confirm_participant(participant_id)?;
    info!(
        "Confirmed participant '{participant_id}' for trip '{}'",
        participant.trip_id
    );

    Ok(redirect_to_trip(&state.web_base_url, participant.trip_id))
}

fn redirect_to_trip(base: &Url, trip_id: Uuid) -> Response {
    let location = trip_page_url(base, trip_id);
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// `{base}/trips/{trip_id}`, appended to the base path. Any query on the base is kept.
pub fn trip_page_url(base: &Url, trip_id: Uuid) -> String {
    let mut url = base.clone();
    // Bases that cannot carry a path are rejected when the config is loaded
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push("trips")
            .push(&trip_id.to_string());
    }
    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_page_url_from_bare_origin() {
        let id = Uuid::nil();
        let base = Url::parse("http://localhost:3000").unwrap();
        assert_eq!(
            trip_page_url(&base, id),
            "http://localhost:3000/trips/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_trip_page_url_keeps_base_path() {
        let id = Uuid::nil();
        let base = Url::parse("https://example.com/planner/").unwrap();
        assert_eq!(
            trip_page_url(&base, id),
            "https://example.com/planner/trips/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_trip_page_url_with_query_on_base() {
        let id = Uuid::nil();
        let base = Url::parse("https://example.com/app?lang=pt").unwrap();
        assert_eq!(
            trip_page_url(&base, id),
            "https://example.com/app/trips/00000000-0000-0000-0000-000000000000?lang=pt"
        );
    }
}
