//! The shared roll history.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use dado_core::{RollEntry, RollKind};

use crate::config::HistoryConfig;

/// An in-memory, most-recent-first log of roll outcomes.
///
/// Cloning the log yields another handle to the same entries, so one
/// instance created at startup can be handed to every part of the host
/// that records or displays rolls. Every operation takes the internal lock
/// for its whole duration; the log is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Arc<Mutex<VecDeque<RollEntry>>>,
    max_entries: Option<usize>,
}

impl HistoryLog {
    /// Create an empty, unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log from configuration. A cap of zero keeps one entry.
    pub fn with_config(config: &HistoryConfig) -> Self {
        Self {
            entries: Arc::default(),
            max_entries: config.max_entries.map(|max| max.max(1)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<RollEntry>> {
        // Poisoning is recovered: entries are never mutated in place.
        self.entries
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Record an outcome as the most recent entry.
    pub fn add(&self, entry: impl Into<RollEntry>) {
        let entry = entry.into();
        let mut entries = self.lock();
        tracing::debug!(kind = %entry.kind(), formula = entry.formula(), "history add");
        entries.push_front(entry);
        if let Some(max) = self.max_entries
            && entries.len() > max
        {
            entries.truncate(max);
        }
    }

    /// Snapshot of all entries, most recent first.
    pub fn get_all(&self) -> Vec<RollEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut entries = self.lock();
        tracing::debug!(dropped = entries.len(), "history clear");
        entries.clear();
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<RollEntry> {
        self.lock().front().cloned()
    }

    /// Snapshot of the entries of one kind, most recent first.
    pub fn of_kind(&self, kind: RollKind) -> Vec<RollEntry> {
        self.lock()
            .iter()
            .filter(|e| e.kind() == kind)
            .cloned()
            .collect()
    }

    /// The configured entry cap, if any.
    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }
}
