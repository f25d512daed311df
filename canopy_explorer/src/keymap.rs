// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts: map key presses to explorer commands.

use alloc::vec::Vec;

use crate::event::{Key, Modifiers};

/// Something the explorer can do in response to a shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Restore the initial offset and scale.
    ResetView,
    /// Zoom in one step, keeping the offset.
    ZoomIn,
    /// Zoom out one step, keeping the offset.
    ZoomOut,
    /// Expand or collapse the root.
    ToggleRoot,
    /// Expand every branch.
    ExpandAll,
    /// Collapse every branch.
    CollapseAll,
}

/// Key plus modifier requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chord {
    /// Matches when neither Ctrl nor Meta is held. Shift and Alt are ignored.
    Plain(Key),
    /// Matches when Ctrl or Meta is held.
    Command(Key),
}

impl Chord {
    /// Returns `true` if this chord matches a key press.
    #[must_use]
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        match *self {
            Self::Plain(k) => k == key && !modifiers.has_command(),
            Self::Command(k) => k == key && modifiers.has_command(),
        }
    }
}

/// Ordered list of chord bindings; the first match wins.
///
/// The default map:
///
/// | Chord                 | Command                  |
/// |-----------------------|--------------------------|
/// | `r` / `R`             | [`Command::ResetView`]   |
/// | space                 | [`Command::ToggleRoot`]  |
/// | `Escape`              | [`Command::CollapseAll`] |
/// | Ctrl/Meta + `+` / `=` | [`Command::ZoomIn`]      |
/// | Ctrl/Meta + `-`       | [`Command::ZoomOut`]     |
/// | Ctrl/Meta + `0`       | [`Command::ResetView`]   |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<(Chord, Command)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: alloc::vec![
                (Chord::Plain(Key::Char('r')), Command::ResetView),
                (Chord::Plain(Key::Char('R')), Command::ResetView),
                (Chord::Plain(Key::Space), Command::ToggleRoot),
                (Chord::Plain(Key::Escape), Command::CollapseAll),
                (Chord::Command(Key::Char('+')), Command::ZoomIn),
                (Chord::Command(Key::Char('=')), Command::ZoomIn),
                (Chord::Command(Key::Char('-')), Command::ZoomOut),
                (Chord::Command(Key::Char('0')), Command::ResetView),
            ],
        }
    }
}

impl Keymap {
    /// Creates a keymap with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Adds a binding after the existing ones.
    #[must_use]
    pub fn with_binding(mut self, chord: Chord, command: Command) -> Self {
        self.bindings.push((chord, command));
        self
    }

    /// Removes every binding for `chord`.
    pub fn unbind(&mut self, chord: Chord) {
        self.bindings.retain(|(c, _)| *c != chord);
    }

    /// Returns the command bound to a key press, if any.
    #[must_use]
    pub fn resolve(&self, key: Key, modifiers: Modifiers) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(chord, _)| chord.matches(key, modifiers))
            .map(|&(_, command)| command)
    }
}

#[cfg(test)]
mod tests {
    use super::{Chord, Command, Keymap};
    use crate::event::{Key, Modifiers};

    #[test]
    fn reset_ignores_shift_but_not_command() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.resolve(Key::Char('R'), Modifiers::SHIFT),
            Some(Command::ResetView)
        );
        assert_eq!(keymap.resolve(Key::Char('r'), Modifiers::CTRL), None);
    }

    #[test]
    fn zoom_needs_command_modifier() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(Key::Char('+'), Modifiers::empty()), None);
        assert_eq!(
            keymap.resolve(Key::Char('+'), Modifiers::CTRL | Modifiers::SHIFT),
            Some(Command::ZoomIn)
        );
        assert_eq!(
            keymap.resolve(Key::Char('='), Modifiers::META),
            Some(Command::ZoomIn)
        );
        assert_eq!(
            keymap.resolve(Key::Char('-'), Modifiers::CTRL),
            Some(Command::ZoomOut)
        );
        assert_eq!(
            keymap.resolve(Key::Char('0'), Modifiers::META),
            Some(Command::ResetView)
        );
    }

    #[test]
    fn custom_bindings_resolve_in_order() {
        let mut keymap = Keymap::empty()
            .with_binding(Chord::Plain(Key::Char('e')), Command::ExpandAll)
            .with_binding(Chord::Plain(Key::Char('e')), Command::CollapseAll);
        assert_eq!(
            keymap.resolve(Key::Char('e'), Modifiers::empty()),
            Some(Command::ExpandAll)
        );
        keymap.unbind(Chord::Plain(Key::Char('e')));
        assert_eq!(keymap.resolve(Key::Char('e'), Modifiers::empty()), None);
    }

    #[test]
    fn other_keys_are_unbound() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(Key::Other, Modifiers::all()), None);
        assert_eq!(keymap.resolve(Key::Space, Modifiers::CTRL), None);
    }
}
