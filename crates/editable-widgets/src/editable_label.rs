//! Editable label: strong text that turns into a single-line input on double-click.

use std::hash::Hash;

use editable_core::{EditMode, EditableStore, LabelKey, LabelSignal};
use egui::{CursorIcon, Id, Key, Label, Response, RichText, Sense, TextEdit, Ui, Widget};

use crate::{sizing, theme};

/// An egui widget bound to an [`EditableStore`].
///
/// While reading, the committed value is drawn as strong text; a double-click
/// starts editing. While editing, a text field is drawn over a draft that
/// lives in egui's temporary memory, not in the store. The draft is read once,
/// when the field loses focus: Escape cancels, Enter or a plain blur commits.
pub struct EditableLabel<'a> {
    store: &'a mut EditableStore,
    id_salt: Id,
    desired_width: f32,
    placeholder: &'a str,
}

/// Shown in place of an empty value unless overridden.
pub const DEFAULT_PLACEHOLDER: &str = "(empty)";

impl<'a> EditableLabel<'a> {
    /// Create a label bound to `store`.
    pub fn new(store: &'a mut EditableStore) -> Self {
        Self {
            store,
            id_salt: Id::new("editable_label"),
            desired_width: sizing::INPUT_WIDTH,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Distinguish several labels in the same `Ui`.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    /// Width of the edit field.
    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = width;
        self
    }

    /// Muted text shown instead of an empty value, so it can still be double-clicked.
    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    fn show_reading(self, ui: &mut Ui) -> Response {
        // Editing may have ended through the store rather than the field.
        let draft_id = ui.make_persistent_id(self.id_salt);
        ui.data_mut(|d| d.remove::<String>(draft_id));

        let text = if self.store.value().is_empty() {
            RichText::new(self.placeholder)
                .italics()
                .color(theme::TEXT_MUTED)
        } else {
            RichText::new(self.store.value())
                .strong()
                .color(theme::TEXT)
        };

        let response = ui
            .add(Label::new(text).sense(Sense::click()))
            .on_hover_cursor(CursorIcon::Text);

        if response.double_clicked() {
            self.store.dispatch(LabelSignal::DoubleClick);
        }
        response
    }

    fn show_editing(self, ui: &mut Ui) -> Response {
        let draft_id = ui.make_persistent_id(self.id_salt);
        let stored = ui.data(|d| d.get_temp::<String>(draft_id));
        let first_frame = stored.is_none();
        let mut draft = stored.unwrap_or_else(|| self.store.value().to_string());

        let response = ui.add(
            TextEdit::singleline(&mut draft)
                .id(draft_id.with("field"))
                .desired_width(self.desired_width),
        );

        if first_frame {
            response.request_focus();
        }

        if !response.lost_focus() {
            ui.data_mut(|d| d.insert_temp(draft_id, draft));
            return response;
        }

        let (escape, enter) =
            ui.input(|i| (i.key_pressed(Key::Escape), i.key_pressed(Key::Enter)));
        let signal = if escape {
            LabelSignal::KeyPressed {
                key: LabelKey::Escape,
                content: draft,
            }
        } else if enter {
            LabelSignal::KeyPressed {
                key: LabelKey::Enter,
                content: draft,
            }
        } else {
            LabelSignal::Blur { content: draft }
        };

        ui.data_mut(|d| d.remove::<String>(draft_id));
        self.store.dispatch(signal);
        response
    }
}

impl Widget for EditableLabel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        match self.store.mode() {
            EditMode::Reading => self.show_reading(ui),
            EditMode::Editing => self.show_editing(ui),
        }
    }
}
