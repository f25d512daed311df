// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Explorer: input handling for a pannable, zoomable, collapsible tree.
//!
//! [`Explorer`] owns a [`ViewportTransform`](canopy_viewport::ViewportTransform),
//! an [`Outline`](canopy_outline::Outline), and a [`Surface`] that shows them.
//! Hosts translate their platform events into [`InputEvent`]s and feed them to
//! [`Explorer::handle`]; the explorer updates its state and writes the
//! container transform, the coordinate readout, branch indicators, and the
//! cursor back to the surface.
//!
//! - Pointer and single-touch drags pan the content. Multi-touch is ignored.
//! - The wheel zooms around the pointer.
//! - Keyboard shortcuts come from a [`Keymap`]; see its docs for the defaults.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_explorer::{Explorer, InputEvent, Key, Modifiers, Outcome, Surface};
//! use canopy_outline::{NodeKind, Outline};
//! use canopy_viewport::{ViewportConfig, ViewportTransform};
//! use kurbo::Point;
//!
//! #[derive(Default)]
//! struct Page {
//!     transform: String,
//!     readout: String,
//! }
//!
//! impl Surface<&'static str> for Page {
//!     fn set_transform(&mut self, transform: &str) {
//!         self.transform = transform.to_owned();
//!     }
//!     fn set_readout(&mut self, text: &str) {
//!         self.readout = text.to_owned();
//!     }
//! }
//!
//! let mut outline = Outline::new();
//! outline.insert_root("domains", NodeKind::Branch);
//!
//! let viewport = ViewportTransform::new(ViewportConfig::default().with_initial_scale(0.66));
//! let mut explorer = Explorer::new(viewport, outline, Page::default());
//! assert_eq!(explorer.surface().readout, "X: 0, Y: 0 | Zoom: 66%");
//!
//! let ctrl_plus = InputEvent::KeyDown { key: Key::Char('+'), modifiers: Modifiers::CTRL };
//! assert_eq!(explorer.handle(&ctrl_plus), Outcome::Handled);
//! assert_eq!(explorer.surface().readout, "X: 0, Y: 0 | Zoom: 76%");
//!
//! explorer.handle(&InputEvent::PointerMove { position: Point::new(5.0, 5.0) });
//! assert_eq!(explorer.surface().readout, "X: 0, Y: 0 | Zoom: 76%");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod explorer;
mod keymap;
mod surface;

pub use event::{InputEvent, Key, Modifiers, PointerButton};
pub use explorer::{Explorer, Outcome};
pub use keymap::{Chord, Command, Keymap};
pub use surface::{Cursor, Surface};
