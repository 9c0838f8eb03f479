// SPDX-License-Identifier: MPL-2.0
//! Shared recorder handle for diagnostic events.

use std::sync::{Arc, Mutex};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

/// Cloneable handle to the session's diagnostic event buffer.
///
/// Recording never fails and never blocks for long: the buffer is bounded
/// and the lock is only held for a push or a snapshot copy. A poisoned lock
/// is treated as an empty recorder rather than a panic, since diagnostics
/// must never take the application down.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    inner: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Diagnostics {
    /// Creates a recorder with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a single event, stamping it with the current time.
    pub fn record(&self, kind: DiagnosticEventKind) {
        if let Ok(mut buffer) = self.inner.lock() {
            buffer.push(DiagnosticEvent::new(kind));
        }
    }

    /// Returns a chronological copy of the buffered events.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        match self.inner.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    /// Returns true if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
