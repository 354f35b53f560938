use tracing::debug;

use physio_core::models::document::DocumentPair;

use crate::action::Action;
use crate::reducer::reduce;

/// Owns the one live document pair. Actions are applied one at a time,
/// each fully before the next.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: DocumentPair,
    applied: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: DocumentPair) -> Self {
        Self { state, applied: 0 }
    }

    /// Build a store by applying a recorded action log to the initial state.
    pub fn replay(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut store = Self::new();
        for action in actions {
            store.dispatch(action);
        }
        store
    }

    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        self.applied += 1;
        debug!(action = name, applied = self.applied, "action applied");
    }

    pub fn state(&self) -> &DocumentPair {
        &self.state
    }

    pub fn into_state(self) -> DocumentPair {
        self.state
    }

    /// Number of actions dispatched so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }
}
