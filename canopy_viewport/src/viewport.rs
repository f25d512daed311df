// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::config::{ViewportConfig, ZoomDirection};
use crate::drag::DragSession;
use crate::state::ViewState;

/// Pan/zoom transform of a content container.
///
/// `ViewportTransform` owns a pan offset (in view pixels) and a uniform zoom
/// scale, and maps content ("world") coordinates into view coordinates as
///
/// ```text
/// view = origin + offset + world * scale
/// ```
///
/// where `origin` is the view position of the transform origin. It can be used to:
/// - Pan by dragging, with the offset derived from the drag anchor.
/// - Zoom in fixed steps, optionally around an anchor point that stays put.
/// - Reset to the configured initial state.
///
/// The scale is clamped into [`ViewportConfig::scale_limits`] after every mutation.
/// All mutating methods return `true` when the [`ViewState`] changed.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    config: ViewportConfig,
    origin: Point,
    offset: Vec2,
    scale: f64,
    drag: DragSession,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportTransform {
    /// Creates a transform at the configured initial scale with zero offset.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let mut vt = Self {
            config,
            origin: Point::ZERO,
            offset: Vec2::ZERO,
            scale: config.clamp_scale(config.initial_scale),
            drag: DragSession::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vt.rebuild_transforms();
        vt
    }

    /// Returns the configuration this transform was built with.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns a snapshot of the current offset and scale.
    #[must_use]
    pub fn state(&self) -> ViewState {
        ViewState::new(self.offset, self.scale)
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current pan offset in view pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the view position of the transform origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Sets the view position of the transform origin.
    ///
    /// This only affects coordinate conversion and anchored zoom; the
    /// [`ViewState`] is unchanged.
    pub fn set_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.rebuild_transforms();
        }
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Starts a drag anchored at `pointer` and the current offset.
    ///
    /// Restarting while already dragging moves the anchor.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag.begin(pointer, self.offset);
    }

    /// Moves the view so the content follows the pointer.
    ///
    /// Ignored when no drag is active.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        match self.drag.offset_at(pointer) {
            Some(offset) => self.set_offset(offset),
            None => false,
        }
    }

    /// Ends the drag session. Always safe to call.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Pans the view by a delta in view pixels.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.set_offset(self.offset + delta)
    }

    /// Sets the scale, clamped into the configured range, leaving the offset unchanged.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let clamped = self.config.clamp_scale(scale);
        if (clamped - self.scale).abs() < f64::EPSILON {
            return false;
        }
        self.scale = clamped;
        self.rebuild_transforms();
        true
    }

    /// Applies one configured zoom step.
    ///
    /// With `anchor` (a view-space point, e.g. the cursor) the content point
    /// under the anchor keeps its view position. Without it the offset is
    /// left unchanged.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: Option<Point>) -> bool {
        let old_scale = self.scale;
        let target = self.config.zoom_step.apply(old_scale, direction);
        if !self.set_scale(target) {
            return false;
        }
        if let Some(anchor) = anchor {
            // Keep `anchor - origin - offset` proportional to the scale.
            let rel = anchor - self.origin;
            let ratio = self.scale / old_scale;
            let offset = rel - (rel - self.offset) * ratio;
            self.set_offset(offset);
        }
        true
    }

    /// Restores the initial scale and a zero offset.
    ///
    /// An active drag is left alone; it continues from its original anchor.
    pub fn reset(&mut self) -> bool {
        let scale = self.config.clamp_scale(self.config.initial_scale);
        if self.offset == Vec2::ZERO && self.scale == scale {
            return false;
        }
        self.offset = Vec2::ZERO;
        self.scale = scale;
        self.rebuild_transforms();
        true
    }

    /// Returns the affine mapping content coordinates to view coordinates.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Converts a content-space point into view coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view-space point into content coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    fn set_offset(&mut self, offset: Vec2) -> bool {
        if !offset.is_finite() || offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.rebuild_transforms();
        true
    }

    fn rebuild_transforms(&mut self) {
        // Content → view: scale, then translate by origin + offset.
        self.world_to_view =
            Affine::translate(self.origin.to_vec2() + self.offset) * Affine::scale(self.scale);
        self.view_to_world = self.world_to_view.inverse();
    }
}
