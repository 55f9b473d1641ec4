use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::database::EventStore;
use crate::domain::{normalize_rows, RawEventRow};
use crate::errors::with_import_context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub read: usize,
    pub imported: usize,
    pub skipped: usize,
}

/// Loads a CSV export of the penalty sheet and makes the store match it
pub struct ImportService {
    store: EventStore,
}

impl ImportService {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }

    pub fn run(&self, csv_path: &Path) -> Result<ImportSummary> {
        info!("=== Starting Import ===");
        info!("Source: {}", csv_path.display());

        let source = csv_path.display().to_string();
        let file = with_import_context(File::open(csv_path), &source)?;
        let summary = self.import_reader(file, &source)?;

        info!("=== Import Complete ===");
        Ok(summary)
    }

    pub fn import_reader<R: Read>(&self, reader: R, source: &str) -> Result<ImportSummary> {
        // Step 1: Read raw rows
        let rows = self.read_rows(reader, source)?;
        info!("  → Read {} rows", rows.len());

        // Step 2: Normalize into canonical records
        let (records, rejected) = normalize_rows(&rows);
        if !rejected.is_empty() {
            warn!("  → Skipped {} rows that could not be normalized", rejected.len());
        }
        info!("  → {} valid records", records.len());

        // Step 3: Sync the store
        let imported = self.store.replace_all(&records)?;
        info!("  → Synced {} records", imported);

        Ok(ImportSummary {
            read: rows.len(),
            imported,
            skipped: rejected.len(),
        })
    }

    fn read_rows<R: Read>(&self, reader: R, source: &str) -> Result<Vec<RawEventRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        csv_reader
            .deserialize::<RawEventRow>()
            .enumerate()
            .map(|(idx, row)| row.with_context(|| format!("Failed to read row {} of {}", idx + 1, source)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;

    const SHEET: &str = "\
date,player_name,keeper_name,status
2025-01-15,Ana,Bo,Goal
2025-01-15, Cy ,Bo,saved
,Ana,Bo,goal
2025-01-16,Ana,Bo,crossbar
2025-02-01,Cy,Ana,OUT
";

    #[test]
    fn test_import_skips_bad_rows_and_keeps_order() {
        let store = EventStore::in_memory().unwrap();
        let service = ImportService::new(store.clone());

        let summary = service.import_reader(SHEET.as_bytes(), "sheet").unwrap();

        assert_eq!(summary, ImportSummary { read: 5, imported: 3, skipped: 2 });

        let stored = store.list_all().unwrap();
        let shooters: Vec<&str> = stored.iter().map(|r| r.shooter_name.as_str()).collect();
        assert_eq!(shooters, vec!["Ana", "Cy", "Cy"]);
        assert_eq!(stored[2].status, Outcome::Out);
    }

    #[test]
    fn test_duplicate_ids_are_skipped_not_fatal() {
        let store = EventStore::in_memory().unwrap();
        let service = ImportService::new(store.clone());
        let sheet = "id,date,player_name,keeper_name,status\n\
                     p1,2025-01-15,Ana,Bo,goal\n\
                     p1,2025-01-15,Cy,Bo,saved\n\
                     p2,2025-01-16,Cy,Bo,out\n";

        let summary = service.import_reader(sheet.as_bytes(), "sheet").unwrap();

        assert_eq!(summary, ImportSummary { read: 3, imported: 2, skipped: 1 });
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_reimport_replaces_previous_contents() {
        let store = EventStore::in_memory().unwrap();
        let service = ImportService::new(store.clone());
        service.import_reader(SHEET.as_bytes(), "sheet").unwrap();

        let smaller = "date,shooterName,keeperName,status\n2025-03-01,Dee,Eve,goal\n";
        service.import_reader(smaller.as_bytes(), "sheet").unwrap();

        assert_eq!(store.count().unwrap(), 1);
    }
}
