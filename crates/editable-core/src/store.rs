//! Owned state container for a single editable label.
//!
//! The store holds the only live [`EditableState`] for its widget and a list
//! of observers. State changes go through [`EditableStore::send`]; observers
//! are called after every transition that changed the state.

use std::fmt;

use crate::machine::{EditMode, EditableEvent, EditableState, EventError, MACHINE_ID};

/// Handle returned by [`EditableStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&EditableState)>;

/// State container for one editable label.
pub struct EditableStore {
    state: EditableState,
    /// Observers in subscription order.
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl EditableStore {
    /// Create a store reading `seed`.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            state: EditableState::new(seed),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &EditableState {
        &self.state
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.state.mode()
    }

    /// Committed value.
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// Apply an event. Returns `true` if the state changed.
    pub fn send(&mut self, event: EditableEvent) -> bool {
        let next = self.state.clone().transition(&event);
        if next == self.state {
            log::trace!(
                "{}: ignored {} while {}",
                MACHINE_ID,
                event.name(),
                self.state.mode()
            );
            return false;
        }

        log::debug!(
            "{}: {} -> {} on {}",
            MACHINE_ID,
            self.state.mode(),
            next.mode(),
            event.name()
        );
        self.state = next;

        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
        true
    }

    /// Decode a raw event record and apply it.
    ///
    /// A record that fails to decode leaves the state untouched.
    pub fn send_json(&mut self, json: &str) -> Result<bool, EventError> {
        match EditableEvent::from_json(json) {
            Ok(event) => Ok(self.send(event)),
            Err(e) => {
                log::warn!("{}: rejected event record: {}", MACHINE_ID, e);
                Err(e)
            }
        }
    }

    /// Register an observer called after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&EditableState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for EditableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(store: &mut EditableStore) -> (SubscriptionId, Rc<RefCell<Vec<EditableState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        (id, seen)
    }

    #[test]
    fn test_new_store() {
        let store = EditableStore::new("edit me");
        assert_eq!(store.mode(), EditMode::Reading);
        assert_eq!(store.value(), "edit me");
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn test_send_reports_change() {
        let mut store = EditableStore::new("edit me");

        assert!(store.send(EditableEvent::StartEdit));
        assert_eq!(store.mode(), EditMode::Editing);
        assert_eq!(store.value(), "edit me");

        assert!(store.send(EditableEvent::commit("hello")));
        assert_eq!(store.state(), &EditableState::new("hello"));
    }

    #[test]
    fn test_observers_see_each_change_in_order() {
        let mut store = EditableStore::new("x");
        let (_, seen) = recording(&mut store);

        store.send(EditableEvent::StartEdit);
        store.send(EditableEvent::commit("y"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_editing());
        assert_eq!(seen[0].value(), "x");
        assert_eq!(seen[1], EditableState::new("y"));
    }

    #[test]
    fn test_ignored_event_notifies_nobody() {
        let mut store = EditableStore::new("x");
        let (_, seen) = recording(&mut store);

        assert!(!store.send(EditableEvent::commit("y")));
        assert!(!store.send(EditableEvent::Cancel));
        assert_eq!(store.value(), "x");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_observers_called_in_subscription_order() {
        let mut store = EditableStore::new("x");
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = order.clone();
            store.subscribe(move |_| order.borrow_mut().push(n));
        }

        store.send(EditableEvent::StartEdit);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = EditableStore::new("x");
        let (id, seen) = recording(&mut store);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.observer_count(), 0);

        store.send(EditableEvent::StartEdit);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_send_json() {
        let mut store = EditableStore::new("edit me");

        assert_eq!(store.send_json(r#"{"type":"dblclick"}"#), Ok(true));
        assert_eq!(store.send_json(r#"{"type":"commit","value":"hi"}"#), Ok(true));
        assert_eq!(store.value(), "hi");
        assert_eq!(store.send_json(r#"{"type":"cancel"}"#), Ok(false));
    }

    #[test]
    fn test_rejected_json_leaves_state() {
        let mut store = EditableStore::new("keep");
        store.send(EditableEvent::StartEdit);
        let (_, seen) = recording(&mut store);

        assert_eq!(
            store.send_json(r#"{"type":"commit"}"#),
            Err(EventError::MissingValue)
        );
        assert!(store.state().is_editing());
        assert_eq!(store.value(), "keep");
        assert!(seen.borrow().is_empty());
    }
}
