// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral input events.

use kurbo::Point;

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if Ctrl or Meta is held, the platform "command" modifier.
    #[must_use]
    pub fn has_command(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// A logical key, as reported after keyboard layout mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key producing a printable character.
    Char(char),
    /// The space bar.
    Space,
    /// The escape key.
    Escape,
    /// Anything else.
    Other,
}

/// Mouse button of a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
}

/// One input event delivered to an [`Explorer`](crate::Explorer).
///
/// Positions are in view coordinates. Touch events carry the number of
/// active touches and the position of the first one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed over the explorable surface.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Pressed button.
        button: PointerButton,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp,
    /// A touch started.
    TouchStart {
        /// Number of active touches.
        touches: usize,
        /// First touch position.
        position: Point,
    },
    /// Touches moved.
    TouchMove {
        /// Number of active touches.
        touches: usize,
        /// First touch position.
        position: Point,
    },
    /// A touch ended.
    TouchEnd,
    /// The wheel turned over the surface.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical delta; negative values scroll up.
        delta_y: f64,
    },
    /// A key was pressed.
    KeyDown {
        /// The logical key.
        key: Key,
        /// Held modifiers.
        modifiers: Modifiers,
    },
}
