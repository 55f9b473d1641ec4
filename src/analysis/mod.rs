pub mod comparison;
pub mod distribution;
pub mod filters;

pub use comparison::{
    compare_keepers, compare_players, ComparisonEntry, KeeperMetric, PlayerMetric, RankMark,
};
pub use distribution::{
    keeper_outcome_distribution, keeper_save_rate, shooter_outcome_distribution,
};
pub use filters::{
    filter_by_gender, filter_by_month, parse_month_key, unique_keepers, unique_months,
    unique_players,
};
