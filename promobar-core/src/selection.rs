//! Reward selection tracking
use std::collections::BTreeSet;

/// Which reached rewards the shopper has acted on this session. Append-only;
/// there is no un-select operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection. Returns `true` only on the transition from
    /// unselected to selected, which is the signal consumers use to notify
    /// the host; repeat calls are no-ops.
    pub fn select(&mut self, milestone_id: &str) -> bool {
        self.selected.insert(milestone_id.to_string())
    }

    #[must_use]
    pub fn is_selected(&self, milestone_id: &str) -> bool {
        self.selected.contains(milestone_id)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
