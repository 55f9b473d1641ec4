use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::EventRecord;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A record paired with its time-decay weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEvent<'a> {
    pub record: &'a EventRecord,
    pub weight: f64,
}

/// One point on the scoring-explainer decay chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayPoint {
    pub time: f64,
    pub decayed_score: f64,
}

pub fn calculate_weight(event_date: NaiveDateTime, latest_date: NaiveDateTime, half_life_days: f64) -> f64 {
    let age_days = calculate_age_days(event_date, latest_date);
    apply_half_life_decay(age_days, half_life_days)
}

/// Weight of `record` relative to the newest record in `all_records`.
/// `None` when `all_records` is empty.
pub fn weight(record: &EventRecord, all_records: &[EventRecord], half_life_days: f64) -> Option<f64> {
    let latest = latest_date(all_records)?;
    Some(calculate_weight(record.date, latest, half_life_days))
}

/// Weights every record against the newest one in the same slice
pub fn apply_time_decay(records: &[EventRecord], half_life_days: f64) -> Vec<WeightedEvent<'_>> {
    let Some(latest) = latest_date(records) else {
        return Vec::new();
    };

    records
        .iter()
        .map(|record| WeightedEvent {
            record,
            weight: calculate_weight(record.date, latest, half_life_days),
        })
        .collect()
}

/// Decay of a fixed score over time, for the scoring explainer
pub fn decay_curve(original_score: f64, half_life_days: f64, elapsed_days: &[f64]) -> Vec<DecayPoint> {
    elapsed_days
        .iter()
        .map(|&time| DecayPoint {
            time,
            decayed_score: decayed_score(original_score, half_life_days, time),
        })
        .collect()
}

fn decayed_score(original_score: f64, half_life_days: f64, time: f64) -> f64 {
    if half_life_days <= 0.0 {
        return 0.0;
    }
    original_score * 0.5_f64.powf(time / half_life_days)
}

fn latest_date(records: &[EventRecord]) -> Option<NaiveDateTime> {
    records.iter().map(|r| r.date).max()
}

fn calculate_age_days(event_date: NaiveDateTime, latest_date: NaiveDateTime) -> f64 {
    let duration = latest_date.signed_duration_since(event_date);
    duration.num_milliseconds() as f64 / MILLIS_PER_DAY
}

fn apply_half_life_decay(age_days: f64, half_life_days: f64) -> f64 {
    // weight = 2^(-days_ago / half_life)
    2.0_f64.powf(-age_days / half_life_days)
}
