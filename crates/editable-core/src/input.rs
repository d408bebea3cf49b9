//! Translation of raw UI signals into machine events.

use crate::machine::EditableEvent;
use crate::store::EditableStore;

/// Keys the editable label reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Enter,
    Escape,
    Other(String),
}

impl LabelKey {
    /// Map a key name as reported by a windowing layer ("Enter", "Escape", ...).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" | "numpadenter" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            _ => Self::Other(name.to_string()),
        }
    }
}

/// A raw signal from the widget's host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSignal {
    /// Double-click on the displayed text.
    DoubleClick,
    /// The edit field lost focus. `content` is the field text at that instant.
    Blur { content: String },
    /// A key was pressed inside the edit field.
    KeyPressed { key: LabelKey, content: String },
}

/// Map a signal to the machine event it produces, if any.
pub fn translate(signal: LabelSignal) -> Option<EditableEvent> {
    match signal {
        LabelSignal::DoubleClick => Some(EditableEvent::StartEdit),
        LabelSignal::Blur { content } => Some(EditableEvent::Commit { value: content }),
        LabelSignal::KeyPressed { key, content } => match key {
            LabelKey::Enter => Some(EditableEvent::Commit { value: content }),
            LabelKey::Escape => Some(EditableEvent::Cancel),
            LabelKey::Other(_) => None,
        },
    }
}

impl EditableStore {
    /// Translate a signal and apply the resulting event.
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, signal: LabelSignal) -> bool {
        match translate(signal) {
            Some(event) => self.send(event),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{EditMode, EditableState};

    fn key(name: &str, content: &str) -> LabelSignal {
        LabelSignal::KeyPressed {
            key: LabelKey::from_name(name),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(LabelKey::from_name("Enter"), LabelKey::Enter);
        assert_eq!(LabelKey::from_name("Return"), LabelKey::Enter);
        assert_eq!(LabelKey::from_name("Escape"), LabelKey::Escape);
        assert_eq!(LabelKey::from_name("Esc"), LabelKey::Escape);
        assert_eq!(LabelKey::from_name("a"), LabelKey::Other("a".to_string()));
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(LabelSignal::DoubleClick), Some(EditableEvent::StartEdit));
        assert_eq!(
            translate(LabelSignal::Blur {
                content: "typed".to_string()
            }),
            Some(EditableEvent::commit("typed"))
        );
        assert_eq!(translate(key("Enter", "typed")), Some(EditableEvent::commit("typed")));
        assert_eq!(translate(key("Escape", "typed")), Some(EditableEvent::Cancel));
    }

    #[test]
    fn test_other_keys_produce_nothing() {
        for name in ["a", "Tab", "ArrowLeft", "Backspace", " "] {
            assert_eq!(translate(key(name, "typed")), None, "{name}");
        }
    }

    #[test]
    fn test_dispatch_edit_session() {
        let mut store = EditableStore::new("edit me");

        assert!(store.dispatch(LabelSignal::DoubleClick));
        assert_eq!(store.mode(), EditMode::Editing);

        assert!(!store.dispatch(key("x", "edit mex")));
        assert_eq!(store.value(), "edit me");

        assert!(store.dispatch(key("Enter", "hello")));
        assert_eq!(store.state(), &EditableState::new("hello"));
    }

    #[test]
    fn test_dispatch_escape_then_blur() {
        let mut store = EditableStore::new("x");
        store.dispatch(LabelSignal::DoubleClick);

        assert!(store.dispatch(key("Escape", "draft")));
        assert_eq!(store.state(), &EditableState::new("x"));

        // A blur arriving after the field is gone is ignored.
        assert!(!store.dispatch(LabelSignal::Blur {
            content: "draft".to_string()
        }));
        assert_eq!(store.value(), "x");
    }
}
