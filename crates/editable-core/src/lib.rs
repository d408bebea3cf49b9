//! Editable Label Core
//!
//! Platform-agnostic state machine and state container for a text label that
//! toggles between reading and editing.

pub mod input;
pub mod machine;
pub mod store;

pub use input::{LabelKey, LabelSignal, translate};
pub use machine::{EditMode, EditableEvent, EditableState, EventError, MACHINE_ID, transition};
pub use store::{EditableStore, SubscriptionId};
