//! FAQ accordion

/// Open/closed state of the FAQ list. At most one entry is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Create an accordion with every entry closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle entry `index`: closes whatever is open, then opens `index` unless it was the open
    /// one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Whether entry `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Index of the open entry, if any.
    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }
}
