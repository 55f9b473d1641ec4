use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::domain::{EventRecord, Gender, MonthOption};

fn month_key_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d{4})-(\d{1,2})$").ok())
        .as_ref()
}

/// Parses `YYYY-MM` into (year, month)
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let caps = month_key_pattern()?.captures(key.trim())?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

pub fn month_key(record: &EventRecord) -> String {
    format!("{}-{:02}", record.date.year(), record.date.month())
}

/// Distinct months present in `records`, newest first
pub fn unique_months(records: &[EventRecord]) -> Vec<MonthOption> {
    let keys: BTreeSet<String> = records.iter().map(month_key).collect();

    keys.into_iter()
        .rev()
        .map(|value| {
            let label = month_label(&value).unwrap_or_else(|| value.clone());
            MonthOption { value, label }
        })
        .collect()
}

fn month_label(key: &str) -> Option<String> {
    let (year, month) = parse_month_key(key)?;
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(first_day.format("%B %Y").to_string())
}

/// Records from the given `YYYY-MM` month; an empty key keeps everything.
/// A whitespace-only key is not empty and matches nothing.
pub fn filter_by_month(records: &[EventRecord], month: &str) -> Vec<EventRecord> {
    if month.is_empty() {
        return records.to_vec();
    }

    let Some((year, month)) = parse_month_key(month) else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .cloned()
        .collect()
}

/// Records of the given gender, plus the ones with no gender recorded
pub fn filter_by_gender(records: &[EventRecord], gender: Gender) -> Vec<EventRecord> {
    records
        .iter()
        .filter(|r| r.gender.is_none_or(|g| g == gender))
        .cloned()
        .collect()
}

pub fn unique_players(records: &[EventRecord]) -> Vec<String> {
    sorted_names(records.iter().map(|r| r.shooter_name.as_str()))
}

pub fn unique_keepers(records: &[EventRecord]) -> Vec<String> {
    sorted_names(records.iter().map(|r| r.keeper_name.as_str()))
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
