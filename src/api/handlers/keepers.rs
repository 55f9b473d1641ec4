use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{load_events, AppState, EventParams};
use crate::analysis::{compare_keepers, keeper_outcome_distribution, keeper_save_rate, unique_keepers};
use crate::api::models::{DistributionResponse, KeeperCompareParams, SaveRateResponse};
use crate::scoring::calculate_keeper_scores;

pub async fn get_keepers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    let events = match load_events(&state, &params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let settings = params.scoring(&state.config);
    Json(calculate_keeper_scores(&events, &settings)).into_response()
}

pub async fn get_keeper_names(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    match load_events(&state, &params) {
        Ok(events) => Json(unique_keepers(&events)).into_response(),
        Err(response) => response,
    }
}

pub async fn get_keeper_distribution(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    let events = match load_events(&state, &params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let shares = keeper_outcome_distribution(&events, &name);
    if shares.is_empty() {
        return (StatusCode::NOT_FOUND, format!("Keeper '{}' not found", name)).into_response();
    }

    Json(DistributionResponse::new(name, shares)).into_response()
}

pub async fn get_keeper_save_rate(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EventParams>,
) -> impl IntoResponse {
    let events = match load_events(&state, &params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    match keeper_save_rate(&events, &name) {
        Some(save_rate) => Json(SaveRateResponse { name, save_rate }).into_response(),
        None => (StatusCode::NOT_FOUND, format!("Keeper '{}' not found", name)).into_response(),
    }
}

pub async fn compare_selected_keepers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<KeeperCompareParams>,
) -> impl IntoResponse {
    let event_params = params.event_params();
    let events = match load_events(&state, &event_params) {
        Ok(events) => events,
        Err(response) => return response,
    };

    let scores = calculate_keeper_scores(&events, &event_params.scoring(&state.config));
    let metric = params.metric.unwrap_or_default();
    Json(compare_keepers(&scores, &params.selected_names(), metric)).into_response()
}
