//! Per-session pagination state.
//!
//! The page size, total count, reference page and load sequence live in
//! one owned object passed between the window, the loader and the TUI;
//! the offset is always derived from the reference, never stored.

use tracing::debug;

#[derive(Debug, Clone)]
pub struct PaginationSession {
    page_size: u64,
    total_count: Option<u64>,
    reference: u64,
    load_seq: u64,
}

impl PaginationSession {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: page_size.max(1),
            total_count: None,
            reference: 1,
            load_seq: 0,
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// The page the user currently considers selected.
    pub fn reference(&self) -> u64 {
        self.reference
    }

    pub fn set_reference(&mut self, reference: u64) {
        self.reference = reference.max(1);
    }

    /// Fetch offset for the current reference page.
    pub fn offset(&self) -> u64 {
        (self.reference - 1) * self.page_size
    }

    /// Record the remote total. Only the first value sticks; the total is
    /// immutable for the session once known.
    pub fn record_total(&mut self, count: u64) {
        match self.total_count {
            None => self.total_count = Some(count),
            Some(existing) if existing != count => {
                debug!(
                    "ignoring changed remote count {} (session total is {})",
                    count, existing
                );
            }
            Some(_) => {}
        }
    }

    pub fn total_known(&self) -> bool {
        self.total_count.is_some()
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Total number of pages, once the remote count is known. Always at
    /// least 1.
    pub fn total_pages(&self) -> Option<u64> {
        self.total_count
            .map(|count| count.div_ceil(self.page_size).max(1))
    }

    /// Tag a new load with the next navigation sequence number. Responses
    /// carrying an older tag are stale and must be discarded.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// The sequence number of the most recent load.
    pub fn current_seq(&self) -> u64 {
        self.load_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.load_seq
    }
}
