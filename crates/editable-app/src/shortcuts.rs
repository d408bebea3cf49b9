//! Keyboard and pointer gestures understood by the editable label.

/// A gesture and what it does.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub gesture: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(gesture: &'static str, description: &'static str) -> Self {
        Self {
            gesture,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Enter  Commit the edit").
    pub fn format(&self) -> String {
        format!("{:14} {}", self.gesture, self.description)
    }
}

/// Registry of all label gestures.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Double-click", "Edit the text"),
            Shortcut::new("Enter", "Commit the edit"),
            Shortcut::new("Click away", "Commit the edit"),
            Shortcut::new("Escape", "Cancel the edit"),
        ]
    }

    /// Log all shortcuts at info level.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {}", shortcut.format());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_gesture() {
        let gestures: Vec<_> = ShortcutRegistry::all().iter().map(|s| s.gesture).collect();
        assert_eq!(gestures, ["Double-click", "Enter", "Click away", "Escape"]);
    }

    #[test]
    fn test_format() {
        let shortcut = Shortcut::new("Escape", "Cancel the edit");
        assert_eq!(shortcut.format(), "Escape         Cancel the edit");
    }
}
