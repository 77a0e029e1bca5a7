// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recoverable lightbox problems.
//!
//! Misconfigurations that must never crash the host (for example a callback
//! slot that received a non-callable value) are logged through `tracing`
//! and kept in a memory-bounded [`CircularBuffer`] the host can inspect.

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{Diagnostic, DiagnosticRecord, ValueKind};

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the diagnostics log.
///
/// Cloning the handle shares the same log.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    records: Rc<RefCell<CircularBuffer<DiagnosticRecord>>>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            records: Rc::new(RefCell::new(CircularBuffer::new(capacity))),
        }
    }

    /// Logs and stores a diagnostic.
    pub fn report(&self, diagnostic: Diagnostic) {
        tracing::error!("Lightbox error: {diagnostic}");
        self.records.borrow_mut().push(DiagnosticRecord {
            at: chrono::Utc::now(),
            diagnostic,
        });
    }

    /// Returns the stored diagnostics, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.records
            .borrow()
            .iter()
            .map(|record| record.diagnostic.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
