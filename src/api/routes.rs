use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    keepers::{
        compare_selected_keepers, get_keeper_distribution, get_keeper_names, get_keeper_save_rate,
        get_keepers,
    },
    players::{compare_selected_players, get_player_distribution, get_player_names, get_players},
    records::{get_hall_of_fame, get_months},
    scoring::{get_decay_curve, get_point_table},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(get_players))
        .route("/api/players/names", get(get_player_names))
        .route("/api/players/compare", get(compare_selected_players))
        .route("/api/players/:name/distribution", get(get_player_distribution))
        .route("/api/keepers", get(get_keepers))
        .route("/api/keepers/names", get(get_keeper_names))
        .route("/api/keepers/compare", get(compare_selected_keepers))
        .route("/api/keepers/:name/distribution", get(get_keeper_distribution))
        .route("/api/keepers/:name/save-rate", get(get_keeper_save_rate))
        .route("/api/months", get(get_months))
        .route("/api/hall-of-fame", get(get_hall_of_fame))
        .route("/api/scoring/points", get(get_point_table))
        .route("/api/scoring/decay", get(get_decay_curve))
        .with_state(state)
}
