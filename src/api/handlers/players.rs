use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{load_events, AppState, EventParams};
use crate::analysis::{compare_players, shooter_outcome_distribution, unique_players};
use crate::api::models::{DistributionResponse, PlayerCompareParams};
use crate::scoring::calculate_player_scores;

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    let events = match load_events(&state, &params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let settings = params.scoring(&state.config);
    Json(calculate_player_scores(&events, &settings)).into_response()
}

pub async fn get_player_names(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    match load_events(&state, &params) {
        Ok(events) => Json(unique_players(&events)).into_response(),
        Err(response) => response,
    }
}

pub async fn get_player_distribution(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    let events = match load_events(&state, &params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let shares = shooter_outcome_distribution(&events, &name);
    if shares.is_empty() {
        return (StatusCode::NOT_FOUND, format!("Player '{}' not found", name)).into_response();
    }

    Json(DistributionResponse::new(name, shares)).into_response()
}

pub async fn compare_selected_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerCompareParams>,
) -> impl IntoResponse {
    let event_params = params.event_params();
    let events = match load_events(&state, &event_params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let scores = calculate_player_scores(&events, &event_params.scoring(&state.config));
    let metric = params.metric.unwrap_or_default();
    Json(compare_players(&scores, &params.selected_names(), metric)).into_response()
}
