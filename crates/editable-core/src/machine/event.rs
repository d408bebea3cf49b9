//! Events accepted by the editable label machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An event sent to the editable label machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditableEvent {
    /// Switch from reading to editing.
    StartEdit,
    /// Leave editing, keeping the committed value.
    Cancel,
    /// Leave editing, replacing the committed value.
    Commit { value: String },
}

impl EditableEvent {
    /// Create a commit event carrying `value` verbatim.
    pub fn commit(value: impl Into<String>) -> Self {
        Self::Commit {
            value: value.into(),
        }
    }

    /// Wire tag of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartEdit => "start_edit",
            Self::Cancel => "cancel",
            Self::Commit { .. } => "commit",
        }
    }

    /// Decode a raw event record such as `{"type":"commit","value":"hi"}`.
    ///
    /// `"dblclick"` is accepted as another name for `"start_edit"`. Fields
    /// other than `value` are ignored, and `value` is ignored on events that
    /// carry no payload.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        let raw: RawEvent =
            serde_json::from_str(json).map_err(|e| EventError::Malformed(e.to_string()))?;

        match raw.kind.as_str() {
            "start_edit" | "dblclick" => Ok(Self::StartEdit),
            "cancel" => Ok(Self::Cancel),
            "commit" => raw
                .value
                .map(|value| Self::Commit { value })
                .ok_or(EventError::MissingValue),
            _ => Err(EventError::UnknownEvent(raw.kind)),
        }
    }

    /// Encode the event as a raw record.
    pub fn to_json(&self) -> Result<String, EventError> {
        serde_json::to_string(self).map_err(|e| EventError::Malformed(e.to_string()))
    }
}

/// Loosely typed event record, as produced by hosts that do not share our types.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Option<String>,
}

/// Errors decoding a raw event record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("commit event has no value")]
    MissingValue,
    #[error("unknown event type: {0}")]
    UnknownEvent(String),
    #[error("malformed event record: {0}")]
    Malformed(String),
}
