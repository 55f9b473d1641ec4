use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::DecayParams;
use crate::scoring::{decay_curve, point_table};

pub async fn get_point_table() -> impl IntoResponse {
    Json(point_table())
}

pub async fn get_decay_curve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DecayParams>,
) -> impl IntoResponse {
    let settings = state.config.scoring.with_half_life(params.half_life);
    let server = &state.config.server;
    let days = params
        .days
        .unwrap_or(server.decay_chart_days)
        .min(server.max_decay_chart_days);
    let step = server.decay_chart_step.max(1);

    let elapsed: Vec<f64> = (0..=days).step_by(step as usize).map(f64::from).collect();
    let score = params.score.unwrap_or(100.0);

    Json(decay_curve(score, settings.half_life_days, &elapsed))
}
