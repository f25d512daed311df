// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Viewport: pan/zoom state for an explorable content container.
//!
//! This crate provides a small, headless model of a pannable and zoomable
//! view. It focuses on:
//! - Pan offset and zoom scale ([`ViewState`]) with a clamped scale range.
//! - Drag sessions that derive the offset from where the drag started.
//! - Fixed zoom steps, optionally anchored at a cursor position so the
//!   content under the cursor stays put.
//! - Rendering the state as a container transform and a coordinate readout.
//!
//! It does **not** own any content or rendering backend. Callers are
//! expected to:
//! - Translate platform input into [`ViewportTransform`] calls.
//! - Write [`ViewState::transform_css`] and [`ViewState::readout`] to their
//!   display surface after each change.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use canopy_viewport::{ViewportConfig, ViewportTransform, ZoomDirection};
//!
//! let mut view = ViewportTransform::new(ViewportConfig::default().with_initial_scale(0.66));
//!
//! // Drag the content 30px right and down.
//! view.begin_drag(Point::new(10.0, 10.0));
//! view.update_drag(Point::new(40.0, 40.0));
//! view.end_drag();
//! assert_eq!(view.offset(), Vec2::new(30.0, 30.0));
//!
//! // Zoom in around the cursor; the content under it does not move.
//! let cursor = Point::new(200.0, 120.0);
//! let under_cursor = view.view_to_world_point(cursor);
//! view.zoom(ZoomDirection::In, Some(cursor));
//! let after = view.world_to_view_point(under_cursor);
//! assert!((after - cursor).hypot() < 1e-9);
//!
//! view.reset();
//! assert_eq!(view.state().readout().to_string(), "X: 0, Y: 0 | Zoom: 66%");
//! ```
//!
//! ## Design notes
//!
//! - Offsets are kept in view pixels: a drag moves the content exactly as
//!   far as the pointer moved, whatever the scale.
//! - Zoom without an anchor (keyboard zoom) leaves the offset alone.
//! - Rotation is not modeled.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod drag;
mod state;
mod viewport;

pub use config::{ViewportConfig, ZoomDirection, ZoomStep};
pub use drag::{DragAnchor, DragSession};
pub use state::{Readout, TransformCss, ViewState};
pub use viewport::ViewportTransform;
