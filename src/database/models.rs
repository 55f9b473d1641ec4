use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;

use crate::domain::{EventRecord, Gender, Outcome};

/// Row of the `game_events` table
#[derive(Debug, Clone)]
pub struct EventRow {
    pub id: String,
    pub row_order: i64,
    pub date: NaiveDateTime,
    pub player_name: String,
    pub keeper_name: String,
    pub status: String,
    pub remark: Option<String>,
    pub gender: Option<String>,
}

impl EventRow {
    pub fn from_record(record: &EventRecord, row_order: i64) -> Self {
        Self {
            id: record.id.clone(),
            row_order,
            date: record.date,
            player_name: record.shooter_name.clone(),
            keeper_name: record.keeper_name.clone(),
            status: record.status.as_str().to_string(),
            remark: record.remark.clone(),
            gender: record.gender.map(|g| g.as_str().to_string()),
        }
    }

    pub fn into_record(self) -> Result<EventRecord> {
        let status = self
            .status
            .parse::<Outcome>()
            .map_err(|e| anyhow!("Event {}: {}", self.id, e))?;
        let gender = self.gender.as_deref().and_then(|g| g.parse::<Gender>().ok());

        Ok(EventRecord {
            id: self.id,
            date: self.date,
            shooter_name: self.player_name,
            keeper_name: self.keeper_name,
            status,
            remark: self.remark,
            gender,
        })
    }
}
