//! The in-memory catalog of records.
//!
//! [`Catalog`] owns every record in insertion order and hands out record ids
//! from a counter that only moves forward. Lookups are linear scans; the
//! catalog is meant for a handful of entries edited from a terminal.

use tracing::{debug, info, warn};

use crate::models::*;
use crate::persistence::{Serializer, StoreError};

pub type GameCatalog = Catalog<Games>;
pub type NoteCatalog = Catalog<Notes>;

pub struct Catalog<K: Kind> {
    records: Vec<Record<K>>,
    last_id: u32,
    serializer: Box<dyn Serializer>,
}

impl<K: Kind> Catalog<K> {
    pub fn new(serializer: impl Serializer + 'static) -> Self {
        Self {
            records: Vec::new(),
            last_id: 0,
            serializer: Box::new(serializer),
        }
    }

    fn next_id(&mut self) -> Option<u32> {
        let id = self.last_id;
        self.last_id = id.checked_add(1)?;
        Some(id)
    }

    // ============================================================
    // Record operations
    // ============================================================

    /// Appends a new record and returns the id it was given.
    ///
    /// `None` only once every id has been handed out.
    pub fn add(&mut self, input: RecordInput) -> Option<u32> {
        let Some(id) = self.next_id() else {
            warn!("No {} ids left", K::RECORD);
            return None;
        };
        debug!(id, name = %input.name, "Adding {}", K::RECORD);
        self.records.push(Record::new(id, input));
        Some(id)
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let deleted = self.records.len() != before;
        if deleted {
            debug!(id, "Deleted {}", K::RECORD);
        }
        deleted
    }

    /// Replaces name, rating and category. The archived flag and the tasks
    /// are left alone.
    pub fn update(&mut self, id: u32, input: RecordInput) -> bool {
        let Some(record) = self.find_mut(id) else {
            return false;
        };

        record.name = input.name;
        record.rating = input.rating;
        record.category = input.category;
        true
    }

    /// Archives (saves for later) a record.
    ///
    /// Returns `false` if the record does not exist or is already archived.
    pub fn archive(&mut self, id: u32) -> bool {
        match self.find_mut(id) {
            Some(record) if !record.archived => {
                record.archived = true;
                debug!(id, "Archived {}", K::RECORD);
                true
            }
            _ => false,
        }
    }

    pub fn find(&self, id: u32) -> Option<&Record<K>> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Record<K>> {
        self.records.iter_mut().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[Record<K>] {
        &self.records
    }

    pub fn active(&self) -> impl Iterator<Item = &Record<K>> {
        self.records.iter().filter(|record| !record.archived)
    }

    pub fn archived(&self) -> impl Iterator<Item = &Record<K>> {
        self.records.iter().filter(|record| record.archived)
    }

    // ============================================================
    // Listing and counting
    // ============================================================

    pub fn list_all(&self) -> String {
        if self.records.is_empty() {
            K::NO_RECORDS.to_string()
        } else {
            format_records(self.records.iter())
        }
    }

    pub fn list_active(&self) -> String {
        if self.count_active() == 0 {
            K::NO_ACTIVE.to_string()
        } else {
            format_records(self.active())
        }
    }

    pub fn list_archived(&self) -> String {
        if self.count_archived() == 0 {
            K::NO_ARCHIVED.to_string()
        } else {
            format_records(self.archived())
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn count_active(&self) -> usize {
        self.active().count()
    }

    pub fn count_archived(&self) -> usize {
        self.archived().count()
    }

    /// Records whose name contains `query`, ignoring case. Empty when nothing
    /// matches.
    pub fn search_by_name(&self, query: &str) -> String {
        let query = query.to_lowercase();
        format_records(
            self.records
                .iter()
                .filter(|record| record.name.to_lowercase().contains(&query)),
        )
    }

    // ============================================================
    // Task reports
    // ============================================================

    /// One `"<record name>: <task contents>"` line per pending task.
    ///
    /// Only an empty catalog yields the "no records" message; records with
    /// nothing pending yield an empty string.
    pub fn list_pending_tasks(&self) -> String {
        if self.records.is_empty() {
            return K::NO_RECORDS.to_string();
        }

        self.records
            .iter()
            .flat_map(|record| {
                record
                    .pending_tasks()
                    .map(move |task| format!("{}: {}\n", record.name, task.contents))
            })
            .collect()
    }

    pub fn count_pending_tasks(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.pending_tasks().count())
            .sum()
    }

    /// Tasks whose contents contain `query`, ignoring case, each shown under
    /// the id and name of its record.
    pub fn search_tasks(&self, query: &str) -> String {
        if self.records.is_empty() {
            return K::NO_RECORDS_TO_SEARCH.to_string();
        }

        let needle = query.to_lowercase();
        let mut found = String::new();
        for record in &self.records {
            for task in record.tasks() {
                if task.contents.to_lowercase().contains(&needle) {
                    found.push_str(&format!("{}: {} \n\t{}\n", record.id, record.name, task));
                }
            }
        }

        if found.is_empty() {
            K::no_tasks_found(query)
        } else {
            found
        }
    }

    // ============================================================
    // Persistence
    // ============================================================

    /// Replaces every record with the stored ones.
    ///
    /// The payload must decode to a list of records, and no record or task
    /// id may be `u32::MAX`; otherwise nothing in memory changes. Record ids
    /// handed out afterwards stay above every loaded id.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let value = self.serializer.read()?;
        let mut records: Vec<Record<K>> = serde_json::from_value(value).map_err(|e| {
            warn!("Stored {} did not decode: {}", K::RECORDS, e);
            StoreError::Decode(e)
        })?;

        for record in &mut records {
            record
                .repair_task_counter()
                .map_err(StoreError::IdOverflow)?;
        }
        let last_id = match records.iter().map(|record| record.id).max() {
            Some(max) => {
                let next = max.checked_add(1).ok_or(StoreError::IdOverflow(max))?;
                self.last_id.max(next)
            }
            None => self.last_id,
        };

        info!(count = records.len(), "Loaded {}", K::RECORDS);
        self.records = records;
        self.last_id = last_id;
        Ok(())
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let value = serde_json::to_value(&self.records).map_err(StoreError::Encode)?;
        self.serializer.write(&value)?;
        info!(count = self.records.len(), "Saved {}", K::RECORDS);
        Ok(())
    }
}

fn format_records<'a, K: Kind>(records: impl Iterator<Item = &'a Record<K>>) -> String {
    records
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
