//! egui widget components for the editable label.
//!
//! - **EditableLabel**: double-click to edit, Enter or blur to commit, Escape to cancel
//! - **Layout**: section labels, separators

pub mod editable_label;
pub mod layout;

pub use editable_label::{DEFAULT_PLACEHOLDER, EditableLabel};
pub use layout::{section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default width of the edit field
    pub const INPUT_WIDTH: f32 = 200.0;
    /// Spacing between the label and the help text
    pub const SECTION_GAP: f32 = 16.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Separator color
    pub const BORDER: Color32 = Color32::from_rgb(230, 230, 230);
}
