//! Bounded log of generated designs
//!
//! Oldest entries are evicted once the capacity is reached.

use std::collections::VecDeque;

use crate::spatial::SymmetryOperation;
use crate::validation::SymmetryType;

/// One generated design
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Generator label
    pub generator: String,
    /// Size or ring count the generator ran with
    pub parameter: usize,
    /// Symmetry operation applied after generation
    pub operation: SymmetryOperation,
    /// Number of points in the final design
    pub point_count: usize,
    /// Number of connections derived for the design
    pub connection_count: usize,
    /// Whether validation recorded no errors
    pub is_valid: bool,
    /// Classified symmetry
    pub symmetry: SymmetryType,
    /// Complexity score
    pub complexity: f64,
}

/// Ordered log holding at most `capacity` entries
#[derive(Debug, Clone, PartialEq)]
pub struct DesignHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl DesignHistory {
    /// Create an empty history; a zero capacity keeps nothing
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry, evicting the oldest when full
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Maximum number of entries kept
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
