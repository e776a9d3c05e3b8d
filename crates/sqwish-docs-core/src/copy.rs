//! State of the snippet's copy-to-clipboard affordance.

use std::time::Duration;

/// How long the "copied" indicator stays up after the last copy.
pub const DEFAULT_COPIED_FEEDBACK: Duration = Duration::from_millis(2000);

/// Visual state of the copy button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

/// Copy indicator with generation-checked reverts.
///
/// Every [`trigger`](Self::trigger) returns a ticket; only the revert
/// carrying the latest ticket moves the indicator back to idle, so an older
/// timer firing after a newer copy has no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    state: CopyState,
    generation: u64,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn is_copied(&self) -> bool {
        self.state == CopyState::Copied
    }

    /// Enter the copied state and return the ticket for its revert.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.state = CopyState::Copied;
        self.generation
    }

    /// Revert to idle if `ticket` belongs to the latest trigger.
    ///
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.state == CopyState::Idle {
            return false;
        }
        self.state = CopyState::Idle;
        true
    }
}
