//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered record sequence for the lifetime of one view.
//! - Expose the three mutations the edit controller needs.
//!
//! # Invariants
//! - Keys are unique within the store.
//! - Store order is insertion order; replace keeps the row position.
//! - Removing a missing key is a silent no-op.
//! - `revision` increases on every effective mutation.

use crate::model::record::{Record, RecordKey};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for key-addressed writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Replace target does not exist.
    NotFound(RecordKey),
    /// Append would violate key uniqueness.
    DuplicateKey(RecordKey),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "record not found: {key}"),
            Self::DuplicateKey(key) => write!(f, "record key already exists: {key}"),
        }
    }
}

impl Error for StoreError {}

/// Repository interface for the record store.
pub trait RecordRepository {
    /// Appends a record at the end of the store.
    fn append(&mut self, record: Record) -> StoreResult<RecordKey>;
    /// Replaces the record with the same key, keeping its position.
    fn replace(&mut self, record: Record) -> StoreResult<()>;
    /// Removes the record with `key`. Returns whether a row was removed.
    fn remove(&mut self, key: RecordKey) -> bool;
    fn get(&self, key: RecordKey) -> Option<&Record>;
    /// All records in store order.
    fn records(&self) -> &[Record];
    /// Monotonic change counter for render-side change detection.
    fn revision(&self) -> u64;
}

/// Process-memory store owned by one view instance.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordRepository {
    records: Vec<Record>,
    revision: u64,
}

impl MemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, key: RecordKey) -> Option<usize> {
        self.records.iter().position(|record| record.key == key)
    }
}

impl RecordRepository for MemoryRecordRepository {
    fn append(&mut self, record: Record) -> StoreResult<RecordKey> {
        if self.position(record.key).is_some() {
            return Err(StoreError::DuplicateKey(record.key));
        }
        let key = record.key;
        self.records.push(record);
        self.revision += 1;
        Ok(key)
    }

    fn replace(&mut self, record: Record) -> StoreResult<()> {
        let index = self
            .position(record.key)
            .ok_or(StoreError::NotFound(record.key))?;
        self.records[index] = record;
        self.revision += 1;
        Ok(())
    }

    fn remove(&mut self, key: RecordKey) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.key != key);
        let removed = self.records.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    fn get(&self, key: RecordKey) -> Option<&Record> {
        self.records.iter().find(|record| record.key == key)
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
