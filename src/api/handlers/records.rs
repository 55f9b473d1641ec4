use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{load_events, AppState, EventParams};
use crate::analysis::unique_months;
use crate::api::models::HallOfFameResponse;
use crate::records::hall_of_fame;

pub async fn get_hall_of_fame(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    let events = match load_events(&state, &params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let settings = params.scoring(&state.config);
    let hall = hall_of_fame(&events, &settings);
    Json(HallOfFameResponse::from(hall)).into_response()
}

pub async fn get_months(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    // The month selector always lists every month, whatever month is selected
    let params = EventParams {
        month: None,
        ..params
    };

    match load_events(&state, &params) {
        Ok(events) => Json(unique_months(&events)).into_response(),
        Err(response) => response,
    }
}
