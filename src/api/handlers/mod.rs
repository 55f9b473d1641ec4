use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::analysis::{filter_by_gender, filter_by_month, parse_month_key};
use crate::config::settings::{AppConfig, ScoringSettings};
use crate::database::EventStore;
use crate::domain::{EventRecord, Gender};

pub mod keepers;
pub mod players;
pub mod records;
pub mod scoring;

pub struct AppState {
    pub store: EventStore,
    pub config: AppConfig,
}

/// Filters shared by every data endpoint
#[derive(Debug, Default, Deserialize)]
pub struct EventParams {
    pub month: Option<String>,
    pub gender: Option<String>,
    pub half_life: Option<f64>,
}

impl EventParams {
    pub fn scoring(&self, config: &AppConfig) -> ScoringSettings {
        config.scoring.with_half_life(self.half_life)
    }
}

/// Loads stored events and applies the request's gender and month filters
pub(crate) fn load_events(state: &AppState, params: &EventParams) -> Result<Vec<EventRecord>, Response> {
    let gender = match params.gender.as_deref().filter(|g| !g.trim().is_empty()) {
        Some(g) => match g.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(e) => return Err((StatusCode::BAD_REQUEST, e).into_response()),
        },
        None => None,
    };

    let month = params.month.as_deref().unwrap_or("");
    if !month.is_empty() && parse_month_key(month).is_none() {
        return Err((StatusCode::BAD_REQUEST, format!("Invalid month '{}', expected YYYY-MM", month)).into_response());
    }

    let mut events = match state.store.list_all() {
        Ok(events) => events,
        Err(e) => {
            log::error!("Failed to load events: {:?}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response());
        }
    };

    if let Some(gender) = gender {
        events = filter_by_gender(&events, gender);
    }

    Ok(filter_by_month(&events, month))
}
