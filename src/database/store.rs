use anyhow::Result;
use log::info;

use super::connection::{create_memory_pool, create_pool, get_connection, DbPool};
use super::models::EventRow;
use super::{events, setup};
use crate::domain::EventRecord;
use crate::errors::with_store_context;

/// Handle to the event table. Constructed explicitly and passed to whoever needs data.
#[derive(Clone)]
pub struct EventStore {
    pool: DbPool,
}

impl EventStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens (and if needed creates) the database file
    pub fn open(database_path: &str) -> Result<Self> {
        let store = Self::new(create_pool(database_path)?);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let store = Self::new(create_memory_pool()?);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn ensure_schema(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        setup::ensure_schema(&mut conn)
    }

    pub fn reset(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        setup::reset_database(&mut conn)
    }

    /// Makes the table hold exactly `records`, in the given order
    pub fn replace_all(&self, records: &[EventRecord]) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let tx = with_store_context(conn.transaction(), "open transaction for")?;

        let removed = events::delete_all(&tx)?;
        for (idx, record) in records.iter().enumerate() {
            events::insert_event(&tx, &EventRow::from_record(record, idx as i64 + 1))?;
        }

        with_store_context(tx.commit(), "commit")?;
        info!("Replaced {} stored events with {}", removed, records.len());
        Ok(records.len())
    }

    pub fn list_all(&self) -> Result<Vec<EventRecord>> {
        let mut conn = get_connection(&self.pool)?;
        events::list_all(&mut conn)?
            .into_iter()
            .map(EventRow::into_record)
            .collect()
    }

    pub fn count(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(events::count_events(&mut conn)? as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Outcome};
    use chrono::NaiveDate;

    fn record(id: &str, day: u32, status: Outcome) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap().and_hms_opt(17, 45, 0).unwrap(),
            shooter_name: "Ana".to_string(),
            keeper_name: "Bo".to_string(),
            status,
            remark: Some("top corner".to_string()),
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn test_replace_all_then_list_preserves_order() {
        let store = EventStore::in_memory().unwrap();
        let records = vec![
            record("b", 9, Outcome::Goal),
            record("a", 2, Outcome::Saved),
            record("c", 5, Outcome::Out),
        ];

        assert_eq!(store.replace_all(&records).unwrap(), 3);

        assert_eq!(store.list_all().unwrap(), records);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_replace_all_drops_previous_rows() {
        let store = EventStore::in_memory().unwrap();
        store.replace_all(&[record("old", 1, Outcome::Goal)]).unwrap();

        store.replace_all(&[record("new", 2, Outcome::Out)]).unwrap();

        let ids: Vec<String> = store.list_all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[test]
    fn test_reset_empties_store() {
        let store = EventStore::in_memory().unwrap();
        store.replace_all(&[record("x", 1, Outcome::Goal)]).unwrap();

        store.reset().unwrap();

        assert_eq!(store.count().unwrap(), 0);
    }
}
