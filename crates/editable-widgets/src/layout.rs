//! Layout helpers: separators, section labels.

use egui::{RichText, Separator, Stroke, Ui};

use crate::theme;

/// Draw a thin horizontal rule in the border color.
pub fn separator(ui: &mut Ui) {
    ui.scope(|ui| {
        ui.visuals_mut().widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme::BORDER);
        ui.add(Separator::default().horizontal().spacing(8.0));
    });
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(12.0).color(theme::TEXT_MUTED));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_takes_vertical_space() {
        let ctx = egui::Context::default();
        let mut used = 0.0;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let top = ui.cursor().top();
                separator(ui);
                used = ui.cursor().top() - top;
            });
        });
        assert!(used > 0.0);
    }
}
