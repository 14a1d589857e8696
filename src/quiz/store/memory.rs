use super::Persistence;
use crate::error::{QuizError, Result};
use crate::model::QuizRecord;
use std::cell::{Cell, RefCell};

/// In-memory persistence for testing.
///
/// Uses `RefCell` since the quiz session is single-threaded, so `Persistence` can take `&self`.
#[derive(Default)]
pub struct MemoryPersistence {
    records: RefCell<Option<Vec<QuizRecord>>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds a persisted collection.
    pub fn with_records(records: Vec<QuizRecord>) -> Self {
        Self {
            records: RefCell::new(Some(records)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// What was last written, if anything.
    pub fn snapshot(&self) -> Option<Vec<QuizRecord>> {
        self.records.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Persistence for MemoryPersistence {
    fn read(&self) -> Result<Option<Vec<QuizRecord>>> {
        Ok(self.snapshot())
    }

    fn write(&self, records: &[QuizRecord]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuizError::Io(std::io::Error::other("simulated write error")));
        }
        *self.records.borrow_mut() = Some(records.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
