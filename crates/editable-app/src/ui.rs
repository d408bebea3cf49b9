//! UI components using egui.

use egui::{Context, Frame, Margin, Vec2};
use editable_core::EditableStore;
use editable_widgets::{EditableLabel, section_label, separator, sizing};

use crate::shortcuts::ShortcutRegistry;

/// Instructions shown under the label.
pub const HELP_TEXT: &str =
    "Double-click to edit. Blur the input or press enter to commit. Press esc to cancel.";

/// Render the whole window: the editable label and its help text.
pub fn render_ui(ctx: &Context, store: &mut EditableStore) {
    egui::CentralPanel::default()
        .frame(
            Frame::new()
                .fill(ctx.style().visuals.panel_fill)
                .inner_margin(Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.add(EditableLabel::new(store));

            ui.add_space(sizing::SECTION_GAP);
            section_label(ui, HELP_TEXT);

            ui.add_space(sizing::SECTION_GAP);
            separator(ui);
            ui.spacing_mut().item_spacing = Vec2::new(0.0, 2.0);
            for shortcut in ShortcutRegistry::all() {
                section_label(ui, &shortcut.format());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ui_headless() {
        let ctx = Context::default();
        let mut store = EditableStore::new("edit me");

        let output = ctx.run(egui::RawInput::default(), |ctx| render_ui(ctx, &mut store));

        assert!(!output.shapes.is_empty());
        assert_eq!(store.value(), "edit me");
        assert!(store.state().is_reading());
    }
}
