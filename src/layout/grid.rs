//! Visible hour range of the week grid.

/// Inclusive `[start, end]` hour bounds defining the grid's vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Hour labels from `start` to `end` inclusive; empty when reversed.
    pub fn labels(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }

    /// Number of hour rows, which is also the divisor for vertical placement.
    pub fn slot_count(&self) -> u32 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot_count() == 0
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::new(8, 20)
    }
}
