//! # Storage Layer
//!
//! [`QuizStore`] is the single owner of the quiz collection. It keeps the records in memory for
//! the lifetime of the session and writes the whole collection back through its
//! [`Persistence`] backend after every mutation.
//!
//! ## Backends
//!
//! - [`fs::JsonFile`]: Production storage, a JSON array in one file
//! - [`memory::MemoryPersistence`]: In-memory storage for testing
//!
//! ## Copies, Not References
//!
//! Read operations hand out clones. Nothing outside this module can reach the underlying
//! `Vec`, so callers cannot corrupt store state by mutating what they were given.
//!
//! ## Positional Ids
//!
//! A record's id is its index. `delete_by_index` shifts later records down by one.

use crate::error::{QuizError, Result};
use crate::model::{seed_records, QuizRecord};

pub mod fs;
pub mod memory;

/// Raw storage I/O for the full collection.
pub trait Persistence {
    /// Read the persisted collection.
    /// Returns Ok(None) if nothing has been persisted yet (first run).
    fn read(&self) -> Result<Option<Vec<QuizRecord>>>;

    /// Overwrite the persisted collection.
    fn write(&self, records: &[QuizRecord]) -> Result<()>;
}

pub struct QuizStore<P: Persistence> {
    backend: P,
    records: Vec<QuizRecord>,
}

impl<P: Persistence> QuizStore<P> {
    /// A store holding the seed records, not yet loaded.
    pub fn new(backend: P) -> Self {
        Self::with_records(backend, seed_records())
    }

    pub fn with_records(backend: P, records: Vec<QuizRecord>) -> Self {
        Self { backend, records }
    }

    /// Builds a seeded store and loads it from the backend.
    pub fn open(backend: P) -> Result<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the persisted one.
    /// On first run the current collection is written out as the initial state.
    pub fn load(&mut self) -> Result<()> {
        match self.backend.read()? {
            Some(records) => {
                tracing::debug!(count = records.len(), "loaded quizzes");
                self.records = records;
            }
            None => {
                tracing::info!(count = self.records.len(), "no store yet, writing initial quizzes");
                self.save()?;
            }
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.backend.write(&self.records)?;
        tracing::debug!(count = self.records.len(), "saved quizzes");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Appends a record. Empty fields are accepted here; handlers validate before calling.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<()> {
        self.records.push(QuizRecord::new(question, answer));
        self.save()
    }

    pub fn update(&mut self, id: usize, question: &str, answer: &str) -> Result<()> {
        let slot = self
            .records
            .get_mut(id)
            .ok_or(QuizError::InvalidArgument(id as i64))?;
        *slot = QuizRecord::new(question, answer);
        self.save()
    }

    pub fn get_all(&self) -> Vec<QuizRecord> {
        self.records.clone()
    }

    pub fn get_by_index(&self, id: usize) -> Result<QuizRecord> {
        self.records
            .get(id)
            .cloned()
            .ok_or(QuizError::InvalidArgument(id as i64))
    }

    /// Removes the record at `id` and returns it.
    pub fn delete_by_index(&mut self, id: usize) -> Result<QuizRecord> {
        if id >= self.records.len() {
            return Err(QuizError::InvalidArgument(id as i64));
        }
        let removed = self.records.remove(id);
        self.save()?;
        Ok(removed)
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }
}
