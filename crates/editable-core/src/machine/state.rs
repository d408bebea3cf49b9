//! Editable label state definitions.

use std::fmt;

use serde::Serialize;

/// Display mode of an editable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// The committed value is shown as text.
    #[default]
    Reading,
    /// An input field is shown, pre-filled with the committed value.
    Editing,
}

impl EditMode {
    /// Lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Editing => "editing",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime snapshot of the editable label machine.
///
/// There is no setter: a new snapshot is produced only by
/// [`EditableState::transition`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EditableState {
    mode: EditMode,
    value: String,
}

impl EditableState {
    /// Create the initial state, reading the given seed.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            mode: EditMode::Reading,
            value: seed.into(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Committed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if the label is showing its value.
    pub fn is_reading(&self) -> bool {
        self.mode == EditMode::Reading
    }

    /// Check if the label is showing its input field.
    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Check if the machine is in the given mode.
    pub fn matches(&self, mode: EditMode) -> bool {
        self.mode == mode
    }

    pub(super) fn with_mode(self, mode: EditMode) -> Self {
        Self { mode, ..self }
    }

    pub(super) fn committed(value: String) -> Self {
        Self {
            mode: EditMode::Reading,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_reading() {
        let state = EditableState::new("edit me");
        assert_eq!(state.mode(), EditMode::Reading);
        assert_eq!(state.value(), "edit me");
        assert!(state.is_reading());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(EditMode::Reading.to_string(), "reading");
        assert_eq!(EditMode::Editing.as_str(), "editing");
        assert_eq!(EditMode::default(), EditMode::Reading);
    }

    #[test]
    fn test_snapshot_json() {
        let state = EditableState::new("hi");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"mode":"reading","value":"hi"}"#);
    }
}
