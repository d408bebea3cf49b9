//! The editable label state machine.
//!
//! Two modes, three events:
//! - `Reading` + `StartEdit` -> `Editing`
//! - `Editing` + `Cancel` -> `Reading`, value kept
//! - `Editing` + `Commit { value }` -> `Reading`, value replaced
//!
//! Every other pairing is an identity transition. The machine never fails.

mod event;
mod state;

pub use event::{EditableEvent, EventError};
pub use state::{EditMode, EditableState};

/// Identifier of the machine, used as the log target prefix.
pub const MACHINE_ID: &str = "editable";

impl EditableState {
    /// Apply `event` and return the next state.
    pub fn transition(self, event: &EditableEvent) -> Self {
        match (self.mode(), event) {
            (EditMode::Reading, EditableEvent::StartEdit) => self.with_mode(EditMode::Editing),
            (EditMode::Editing, EditableEvent::Cancel) => self.with_mode(EditMode::Reading),
            (EditMode::Editing, EditableEvent::Commit { value }) => Self::committed(value.clone()),
            _ => self,
        }
    }
}

/// Compute the state that follows `state` on `event`, leaving `state` untouched.
pub fn transition(state: &EditableState, event: &EditableEvent) -> EditableState {
    state.clone().transition(event)
}
