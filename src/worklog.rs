use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WorkLogError;

/// A submitted daily work record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Log-assigned identifier, unique within one `WorkLog`.
    pub id: u64,
    /// The work day the record belongs to.
    pub date: NaiveDate,
    /// Meters of trench installed.
    pub installed_length: f64,
    pub subcontractor: String,
    pub workers: u32,
    pub notes: String,
    /// Completed network total at submission time.
    pub total_completed: f64,
    pub submitted_at: DateTime<Utc>,
}

/// Caller-supplied fields of a new or updated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecordDraft {
    pub date: NaiveDate,
    pub installed_length: f64,
    pub subcontractor: String,
    pub workers: u32,
    pub notes: String,
    pub total_completed: f64,
}

/// Aggregate totals across the whole log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalStats {
    pub total_installed: f64,
    pub total_workers: u32,
    pub record_count: usize,
}

/// Per-date aggregation feeding chart and spreadsheet exporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Meters installed across the date's records.
    pub installed_length: f64,
    /// Workers across the date's records.
    pub workers: u32,
    /// Deduplicated subcontractor names, comma-joined in submission order.
    pub subcontractors: String,
    /// Abbreviated subcontractor codes: the first two letters of each word
    /// upper-cased and concatenated ("Baran Zemin" → "BAZE"), `/`-joined.
    pub codes: String,
}

/// In-memory log of daily work records.
///
/// The log owns record identity and aggregation only; persistence belongs
/// to the caller (records serialize with serde).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WorkLog {
    records: Vec<WorkRecord>,
    next_id: u64,
}

impl WorkLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record stamped with the current time, returning its
    /// assigned id.
    pub fn add(&mut self, draft: WorkRecordDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(WorkRecord {
            id,
            date: draft.date,
            installed_length: draft.installed_length,
            subcontractor: draft.subcontractor,
            workers: draft.workers,
            notes: draft.notes,
            total_completed: draft.total_completed,
            submitted_at: Utc::now(),
        });
        id
    }

    /// Returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has that id.
    pub fn record(&self, id: u64) -> Result<&WorkRecord, WorkLogError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(WorkLogError::RecordNotFound(id))
    }

    /// Replaces the caller-supplied fields of the record with the given id,
    /// keeping its id and submission timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has that id.
    pub fn update(&mut self, id: u64, draft: WorkRecordDraft) -> Result<(), WorkLogError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(WorkLogError::RecordNotFound(id))?;
        record.date = draft.date;
        record.installed_length = draft.installed_length;
        record.subcontractor = draft.subcontractor;
        record.workers = draft.workers;
        record.notes = draft.notes;
        record.total_completed = draft.total_completed;
        Ok(())
    }

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has that id.
    pub fn delete(&mut self, id: u64) -> Result<WorkRecord, WorkLogError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(WorkLogError::RecordNotFound(id))?;
        Ok(self.records.remove(index))
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records in submission order.
    #[must_use]
    pub fn records(&self) -> &[WorkRecord] {
        &self.records
    }

    /// Number of records in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records grouped by date, date-ascending.
    #[must_use]
    pub fn records_by_date(&self) -> BTreeMap<NaiveDate, Vec<&WorkRecord>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&WorkRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped.entry(record.date).or_default().push(record);
        }
        grouped
    }

    /// Aggregate totals across the whole log.
    #[must_use]
    pub fn total_stats(&self) -> TotalStats {
        self.records.iter().fold(
            TotalStats {
                total_installed: 0.0,
                total_workers: 0,
                record_count: 0,
            },
            |acc, record| TotalStats {
                total_installed: acc.total_installed + record.installed_length,
                total_workers: acc.total_workers + record.workers,
                record_count: acc.record_count + 1,
            },
        )
    }

    /// Per-date aggregation, date-ascending, with deduplicated
    /// subcontractor names and their abbreviated codes.
    #[must_use]
    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        let mut grouped: BTreeMap<NaiveDate, (f64, u32, Vec<String>)> = BTreeMap::new();
        for record in &self.records {
            let entry = grouped.entry(record.date).or_insert((0.0, 0, Vec::new()));
            entry.0 += record.installed_length;
            entry.1 += record.workers;
            if !record.subcontractor.is_empty() && !entry.2.contains(&record.subcontractor) {
                entry.2.push(record.subcontractor.clone());
            }
        }

        grouped
            .into_iter()
            .map(|(date, (installed_length, workers, names))| DailySummary {
                date,
                installed_length,
                workers,
                subcontractors: names.join(", "),
                codes: names
                    .iter()
                    .map(|name| abbreviate(name))
                    .collect::<Vec<_>>()
                    .join("/"),
            })
            .collect()
    }
}

/// The first two letters of each word, upper-cased and concatenated.
fn abbreviate(name: &str) -> String {
    name.split_whitespace()
        .flat_map(|word| word.chars().take(2).flat_map(char::to_uppercase))
        .collect()
}
