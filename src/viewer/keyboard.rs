/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

/// Keys the viewer cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Char(char),
    Other,
}

/// What had the keyboard focus when the key was pressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Page,
    TextInput,
    /// A button, link or other control that handles Space/Enter itself
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub target: FocusTarget,
}

impl KeyEvent {
    pub fn new(key: Key, target: FocusTarget) -> Self {
        Self { key, target }
    }

    /// Key pressed with nothing in particular focused
    pub fn on_page(key: Key) -> Self {
        Self::new(key, FocusTarget::Page)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            ' ' => Self::Space,
            '\n' | '\r' => Self::Enter,
            c => Self::Char(c),
        }
    }
}

/// Whether the key press should load the next photo.
///
/// Space and Enter act like a click on the load control, unless the control is disabled
/// or the focus is somewhere that uses those keys itself. When this returns `true` the
/// key's default action (scrolling, activating the focused element) should be suppressed.
pub fn triggers_load(event: &KeyEvent, control_enabled: bool) -> bool {
    if !control_enabled || event.target != FocusTarget::Page {
        return false;
    }
    matches!(event.key, Key::Space | Key::Enter)
}
