use serde::Serialize;

use crate::domain::Outcome;

pub const SHOOTER_GOAL: f64 = 1.5;
pub const SHOOTER_SAVED: f64 = 0.0;
pub const SHOOTER_OUT: f64 = -1.0;

pub const KEEPER_GOAL: f64 = -1.0;
pub const KEEPER_SAVED: f64 = 1.5;
pub const KEEPER_OUT: f64 = 0.0;

/// Side of the penalty an actor is scored for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Shooter,
    Keeper,
}

impl Role {
    pub fn points(&self, outcome: Outcome) -> f64 {
        match (self, outcome) {
            (Role::Shooter, Outcome::Goal) => SHOOTER_GOAL,
            (Role::Shooter, Outcome::Saved) => SHOOTER_SAVED,
            (Role::Shooter, Outcome::Out) => SHOOTER_OUT,
            (Role::Keeper, Outcome::Goal) => KEEPER_GOAL,
            (Role::Keeper, Outcome::Saved) => KEEPER_SAVED,
            (Role::Keeper, Outcome::Out) => KEEPER_OUT,
        }
    }
}

/// Row of the point-system table shown by the scoring explainer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRow {
    pub event: String,
    pub shooter_points: f64,
    pub goalkeeper_points: f64,
}

pub fn point_table() -> Vec<PointRow> {
    Outcome::ALL
        .iter()
        .map(|&outcome| PointRow {
            event: capitalize(outcome.as_str()),
            shooter_points: Role::Shooter.points(outcome),
            goalkeeper_points: Role::Keeper.points(outcome),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_table_rows() {
        let table = point_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].event, "Goal");
        assert_eq!(table[0].shooter_points, 1.5);
        assert_eq!(table[0].goalkeeper_points, -1.0);
        assert_eq!(table[1].event, "Saved");
        assert_eq!(table[1].goalkeeper_points, 1.5);
        assert_eq!(table[2].event, "Out");
        assert_eq!(table[2].shooter_points, -1.0);
        assert_eq!(table[2].goalkeeper_points, 0.0);
    }
}
