//! State machine definition
//!
//! Drawing and tick handling are a function of the current lifecycle
//! state. Resources acquired on load are released exactly once, on the
//! transition out of Running.

use super::events::Event;

/// Lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Created but not loaded; nothing may draw yet
    Uninitialized,
    /// Loaded and live; ticks drive redraws
    Running,
    /// Torn down; absorbing, nothing runs afterwards
    TornDown,
}

impl State {
    /// Check if drawing and tick handling are allowed
    pub fn drawing_allowed(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Check if this is the absorbing final state
    pub fn is_torn_down(&self) -> bool {
        matches!(self, State::TornDown)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Uninitialized, LoadComplete) => Running,
            (Running, Teardown) => TornDown,

            // TornDown is absorbing; everything else stays put
            _ => self,
        }
    }
}
