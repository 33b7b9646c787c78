//! Keyboard shortcuts.
//!
//! A [`ShortcutDispatcher`] is owned by whichever view is on screen. The view
//! registers its shortcuts when it is shown and deregisters them when it goes
//! away; there is no process-wide listener. Registering again replaces the
//! previous set, so one dispatcher never holds two listeners.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };
}

/// One key press. `key` is a key name as a keyboard reports it: a character
/// (`"n"`, `"K"`, `"1"`) or a named key (`"Escape"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            default_prevented: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Marks the event as consumed so it gets no default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The single printable character this event would type, if any.
    pub fn typed_char(&self) -> Option<char> {
        if self.modifiers.ctrl || self.modifiers.meta || self.modifiers.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (on, name) in [(m.ctrl, "Ctrl"), (m.meta, "Meta"), (m.alt, "Alt"), (m.shift, "Shift")] {
            if on {
                write!(f, "{}+", name)?;
            }
        }
        f.write_str(&self.key)
    }
}

pub struct Shortcut<A> {
    pub key: String,
    pub modifiers: Modifiers,
    pub action: A,
}

impl<A> Shortcut<A> {
    pub fn new(key: impl Into<String>, action: A) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            action,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Key compared without case; every modifier flag must agree exactly.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key.to_lowercase() == event.key.to_lowercase() && self.modifiers == event.modifiers
    }
}

impl<A: fmt::Debug> fmt::Debug for Shortcut<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("key", &self.key)
            .field("modifiers", &self.modifiers)
            .field("action", &self.action)
            .finish()
    }
}

pub struct ShortcutDispatcher<A> {
    shortcuts: Vec<Shortcut<A>>,
    active: bool,
}

impl<A> Default for ShortcutDispatcher<A> {
    fn default() -> Self {
        Self {
            shortcuts: Vec::new(),
            active: false,
        }
    }
}

impl<A> ShortcutDispatcher<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `shortcuts` and starts listening, replacing any earlier set.
    pub fn register(&mut self, shortcuts: Vec<Shortcut<A>>) {
        self.shortcuts = shortcuts;
        self.active = true;
    }

    /// Stops listening and forgets the registered shortcuts.
    pub fn deregister(&mut self) {
        self.shortcuts.clear();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Finds the first shortcut matching `event`. On a match the event's default
    /// handling is prevented and the action is handed back to run once. Without
    /// a match the event is left untouched.
    pub fn dispatch(&self, event: &mut KeyEvent) -> Option<&A> {
        if !self.active {
            return None;
        }
        let shortcut = self.shortcuts.iter().find(|s| s.matches(event))?;
        event.prevent_default();
        Some(&shortcut.action)
    }
}
