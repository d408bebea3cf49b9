//! Editable Label Application
//!
//! The native application shell: windowing, GPU surface and egui
//! integration around a single editable label.

mod app;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{HELP_TEXT, render_ui};
