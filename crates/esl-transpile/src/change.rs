//! Change notification.
//!
//! Passes report every successful mutation so the driver knows the unit of
//! compilation was modified. The signal carries no payload.

pub trait CodeChangeHandler {
    fn report_code_change(&mut self);
}

/// Counts reported changes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChangeTracker {
    changes: usize,
}

impl ChangeTracker {
    pub const fn new() -> Self {
        Self { changes: 0 }
    }

    pub const fn changes(&self) -> usize {
        self.changes
    }

    pub const fn has_changes(&self) -> bool {
        self.changes > 0
    }

    pub const fn reset(&mut self) {
        self.changes = 0;
    }
}

impl CodeChangeHandler for ChangeTracker {
    fn report_code_change(&mut self) {
        self.changes += 1;
    }
}
