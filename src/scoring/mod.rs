pub mod aggregation;
pub mod points;
pub mod weighting;

pub use aggregation::{
    calculate_actor_scores, calculate_keeper_scores, calculate_player_scores, top_keeper,
    top_player,
};
pub use points::{point_table, PointRow, Role};
pub use weighting::{apply_time_decay, calculate_weight, decay_curve, weight, DecayPoint, WeightedEvent};
