use std::sync::Arc;
use url::Url;

use crate::store::TripRepository;

/// Application state shared across all request handlers
pub struct AppState {
    pub trips: Arc<dyn TripRepository>,
    pub web_base_url: Url, // Front-end origin that confirmation links redirect to
}
