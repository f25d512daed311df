// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: remember where a pan started and derive offsets from it.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::begin`], passing the pointer position and the
//!    view offset at that moment.
//! 2) On each move event, call [`DragSession::offset_at`] to get the offset the view should
//!    have with the pointer at its new position.
//! 3) End the session with [`DragSession::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use canopy_viewport::DragSession;
//!
//! let mut drag = DragSession::default();
//! drag.begin(Point::new(10.0, 10.0), Vec2::new(5.0, 0.0));
//! assert!(drag.is_active());
//!
//! assert_eq!(drag.offset_at(Point::new(40.0, 40.0)), Some(Vec2::new(35.0, 30.0)));
//!
//! drag.end();
//! assert_eq!(drag.offset_at(Point::new(50.0, 50.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Anchor of an active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// Pointer position when the drag started.
    pub pointer: Point,
    /// View offset when the drag started.
    pub offset: Vec2,
}

/// Tracks an in-progress pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    anchor: Option<DragAnchor>,
}

impl DragSession {
    /// Starts a drag anchored at `pointer` with the view at `offset`.
    ///
    /// Calling this while a drag is active overwrites the anchor.
    pub fn begin(&mut self, pointer: Point, offset: Vec2) {
        self.anchor = Some(DragAnchor { pointer, offset });
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the anchor of the active drag, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }

    /// Returns the view offset for the pointer at `pointer`, or `None` when idle.
    #[must_use]
    pub fn offset_at(&self, pointer: Point) -> Option<Vec2> {
        self.anchor
            .map(|anchor| anchor.offset + (pointer - anchor.pointer))
    }

    /// Ends the drag. Safe to call when idle.
    pub fn end(&mut self) {
        self.anchor = None;
    }
}
