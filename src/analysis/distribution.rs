use crate::domain::{EventRecord, Outcome, OutcomeShare, OutcomeTally};

/// Outcome split of every penalty faced by `keeper_name`
pub fn keeper_outcome_distribution(records: &[EventRecord], keeper_name: &str) -> Vec<OutcomeShare> {
    outcome_distribution(records.iter().filter(|r| r.keeper_name == keeper_name))
}

/// Outcome split of every penalty taken by `shooter_name`
pub fn shooter_outcome_distribution(records: &[EventRecord], shooter_name: &str) -> Vec<OutcomeShare> {
    outcome_distribution(records.iter().filter(|r| r.shooter_name == shooter_name))
}

/// Saves as a percentage of shots on target (saves plus goals) faced by `keeper_name`.
/// `None` when the keeper faced nothing; `Some(0)` when every shot went out.
pub fn keeper_save_rate(records: &[EventRecord], keeper_name: &str) -> Option<u32> {
    let mut tally = OutcomeTally::default();
    for record in records.iter().filter(|r| r.keeper_name == keeper_name) {
        tally.record(record.status);
    }

    if tally.total() == 0 {
        return None;
    }

    let on_target = tally.saved + tally.goals;
    if on_target == 0 {
        return Some(0);
    }
    Some(percentage(tally.saved, on_target))
}

// Percentages are rounded independently and may not add up to 100.
fn outcome_distribution<'a>(records: impl Iterator<Item = &'a EventRecord>) -> Vec<OutcomeShare> {
    let mut tally = OutcomeTally::default();
    for record in records {
        tally.record(record.status);
    }

    let total = tally.total();
    if total == 0 {
        return Vec::new();
    }

    Outcome::ALL
        .iter()
        .map(|&status| {
            let count = tally.count(status);
            OutcomeShare {
                status,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

fn percentage(count: u32, total: u32) -> u32 {
    (count as f64 / total as f64 * 100.0).round() as u32
}
