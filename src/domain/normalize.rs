use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use super::models::{EventRecord, Gender, Outcome};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Row as it comes out of the sheet export or the `game_events` table.
/// Field names differ between sources, so every column accepts its known aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEventRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "Date")]
    pub date: Option<String>,
    #[serde(default, alias = "shooterName", alias = "shooter_name", alias = "Player")]
    pub player_name: Option<String>,
    #[serde(default, alias = "keeperName", alias = "Keeper")]
    pub keeper_name: Option<String>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "Remark")]
    pub remark: Option<String>,
    #[serde(default, alias = "Gender")]
    pub gender: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },
    #[error("row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: unknown status '{value}'")]
    UnknownStatus { row: usize, value: String },
    #[error("row {row}: duplicate id '{value}'")]
    DuplicateId { row: usize, value: String },
}

/// Maps one raw row to the canonical record shape.
/// `row_order` is 1-based and used as the id when the source has none.
pub fn normalize_row(raw: &RawEventRow, row_order: usize) -> Result<EventRecord, NormalizeError> {
    let date_str = required(&raw.date, row_order, "date")?;
    let shooter_name = required(&raw.player_name, row_order, "shooter name")?;
    let keeper_name = required(&raw.keeper_name, row_order, "keeper name")?;
    let status_str = required(&raw.status, row_order, "status")?;

    let date = parse_event_date(&date_str).ok_or_else(|| NormalizeError::InvalidDate {
        row: row_order,
        value: date_str.clone(),
    })?;

    let status = status_str
        .parse::<Outcome>()
        .map_err(|_| NormalizeError::UnknownStatus {
            row: row_order,
            value: status_str.clone(),
        })?;

    let id = raw
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("row-{row_order}"));

    Ok(EventRecord {
        id,
        date,
        shooter_name,
        keeper_name,
        status,
        remark: trimmed(&raw.remark),
        gender: parse_gender(&raw.gender, row_order),
    })
}

/// Normalizes every row, dropping (and logging) the ones that don't fit.
/// Ids must be unique; a repeated id keeps only its first row.
pub fn normalize_rows(rows: &[RawEventRow]) -> (Vec<EventRecord>, Vec<NormalizeError>) {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();
    let mut seen_ids = HashSet::new();

    for (idx, raw) in rows.iter().enumerate() {
        let row = idx + 1;
        let normalized = normalize_row(raw, row).and_then(|record| {
            if seen_ids.insert(record.id.clone()) {
                Ok(record)
            } else {
                Err(NormalizeError::DuplicateId { row, value: record.id })
            }
        });

        match normalized {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping {}", e);
                rejected.push(e);
            }
        }
    }

    (records, rejected)
}

pub fn parse_event_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn required(
    value: &Option<String>,
    row: usize,
    field: &'static str,
) -> Result<String, NormalizeError> {
    trimmed(value).ok_or(NormalizeError::MissingField { row, field })
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_gender(value: &Option<String>, row: usize) -> Option<Gender> {
    let value = trimmed(value)?;
    match value.parse() {
        Ok(gender) => Some(gender),
        Err(e) => {
            debug!("row {row}: ignoring {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, shooter: &str, keeper: &str, status: &str) -> RawEventRow {
        RawEventRow {
            date: Some(date.to_string()),
            player_name: Some(shooter.to_string()),
            keeper_name: Some(keeper.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_trims_names_and_lowercases_status() {
        let record = normalize_row(&raw("2025-03-04", "  Ana ", "Bo ", " GOAL"), 7).unwrap();

        assert_eq!(record.id, "row-7");
        assert_eq!(record.shooter_name, "Ana");
        assert_eq!(record.keeper_name, "Bo");
        assert_eq!(record.status, Outcome::Goal);
        assert_eq!(record.date_key(), "2025-03-04");
    }

    #[test]
    fn test_normalize_rejects_unknown_status() {
        let err = normalize_row(&raw("2025-03-04", "Ana", "Bo", "post"), 2).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnknownStatus { row: 2, value: "post".to_string() }
        );
    }

    #[test]
    fn test_normalize_rejects_blank_keeper() {
        let err = normalize_row(&raw("2025-03-04", "Ana", "   ", "goal"), 1).unwrap_err();
        assert_eq!(err, NormalizeError::MissingField { row: 1, field: "keeper name" });
    }

    #[test]
    fn test_field_aliases_are_accepted() {
        let json = r#"{"id":"e1","date":"2025-01-15T18:30:00Z","shooterName":"Ana","keeperName":"Bo","status":"saved"}"#;
        let row: RawEventRow = serde_json::from_str(json).unwrap();
        let record = normalize_row(&row, 1).unwrap();

        assert_eq!(record.id, "e1");
        assert_eq!(record.shooter_name, "Ana");
        assert_eq!(record.status, Outcome::Saved);
    }

    #[test]
    fn test_parse_event_date_formats() {
        assert!(parse_event_date("2025-01-15T18:30:00+01:00").is_some());
        assert!(parse_event_date("2025-01-15 18:30:00").is_some());
        assert!(parse_event_date("15/01/2025").is_some());
        assert!(parse_event_date("yesterday").is_none());
    }

    #[test]
    fn test_normalize_rows_collects_rejects() {
        let rows = vec![
            raw("2025-01-15", "Ana", "Bo", "goal"),
            raw("not a date", "Ana", "Bo", "goal"),
        ];

        let (records, rejected) = normalize_rows(&rows);

        assert_eq!(records.len(), 1);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn test_repeated_id_keeps_first_row() {
        let rows = vec![
            RawEventRow { id: Some("e1".to_string()), ..raw("2025-01-01", "Ana", "Bo", "goal") },
            RawEventRow { id: Some(" e1 ".to_string()), ..raw("2025-01-02", "Cy", "Bo", "saved") },
            raw("2025-01-03", "Cy", "Bo", "out"),
        ];

        let (records, rejected) = normalize_rows(&rows);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "row-3"]);
        assert_eq!(records[0].shooter_name, "Ana");
        assert_eq!(
            rejected,
            vec![NormalizeError::DuplicateId { row: 2, value: "e1".to_string() }]
        );
    }

    #[test]
    fn test_unknown_gender_is_dropped() {
        let mut row = raw("2025-01-15", "Ana", "Bo", "goal");
        row.gender = Some("Female".to_string());
        assert_eq!(normalize_row(&row, 1).unwrap().gender, Some(Gender::Female));

        row.gender = Some("n/a".to_string());
        assert_eq!(normalize_row(&row, 1).unwrap().gender, None);
    }
}
