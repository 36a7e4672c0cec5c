//! Key bindings for driving table views from terminal key events.
//!
//! A [`Binding`] groups the key codes that trigger one action together with
//! the short help shown to the user. Components expose their bindings
//! through the [`KeyMap`] trait so a help line can be rendered generically.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A set of keys bound to one action.
///
/// # Examples
///
/// ```rust
/// use labgrid::key::Binding;
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
///     .with_help("→/l", "next page");
///
/// assert!(next.matches(&KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)));
/// assert!(!next.matches(&KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Key codes that trigger the binding.
    pub keys: Vec<KeyCode>,
    /// Short key label for help, e.g. `"→/l"`.
    pub help: String,
    /// What the binding does, e.g. `"next page"`.
    pub description: String,
    /// Disabled bindings never match and are left out of help.
    pub enabled: bool,
}

impl Binding {
    /// Creates an enabled binding without help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true when `event` is a press (or repeat) of one of the keys.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled && event.kind != KeyEventKind::Release && self.keys.contains(&event.code)
    }
}

/// Components that expose key bindings for help rendering.
pub trait KeyMap {
    /// Bindings shown in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped in columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![self.short_help()]
    }
}

/// Renders the one-line help: `←/h prev page • →/l next page`.
pub fn short_help_view(keymap: &dyn KeyMap) -> String {
    keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled && !b.help.is_empty())
        .map(|b| format!("{} {}", b.help, b.description))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    struct Map {
        a: Binding,
        b: Binding,
    }

    impl KeyMap for Map {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.a, &self.b]
        }
    }

    #[test]
    fn test_release_does_not_match() {
        let b = Binding::new(vec![KeyCode::Enter]);
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!b.matches(&release));
        assert!(b.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding() {
        let mut b = Binding::new(vec![KeyCode::Esc]);
        b.set_enabled(false);
        assert!(!b.matches(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }

    #[test]
    fn test_short_help_view() {
        let mut map = Map {
            a: Binding::new(vec![KeyCode::Left]).with_help("←", "prev page"),
            b: Binding::new(vec![KeyCode::Right]).with_help("→", "next page"),
        };
        assert_eq!(short_help_view(&map), "← prev page • → next page");
        map.b.set_enabled(false);
        assert_eq!(short_help_view(&map), "← prev page");
        assert_eq!(map.full_help().len(), 1);
    }
}
