// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View state snapshot and its textual renderings.

use core::fmt;

use kurbo::Vec2;

/// Pan offset and zoom scale of a view.
///
/// The offset is measured in view (screen) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Translation applied to the content before rendering.
    pub offset: Vec2,
    /// Uniform scale applied to the content.
    pub scale: f64,
}

impl ViewState {
    /// Creates a state with the given offset and scale.
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Returns a formatter for the container transform.
    ///
    /// ```rust
    /// use kurbo::Vec2;
    /// use canopy_viewport::ViewState;
    ///
    /// let state = ViewState::new(Vec2::new(12.0, -4.5), 0.66);
    /// assert_eq!(
    ///     state.transform_css(false).to_string(),
    ///     "translate(12px, -4.5px) scale(0.66)"
    /// );
    /// assert_eq!(
    ///     state.transform_css(true).to_string(),
    ///     "translate(calc(-50% + 12px), calc(-50% + -4.5px)) scale(0.66)"
    /// );
    /// ```
    #[must_use]
    pub fn transform_css(&self, centered: bool) -> TransformCss {
        TransformCss {
            state: *self,
            centered,
        }
    }

    /// Returns a formatter for the human-readable coordinate readout.
    ///
    /// Coordinates are rounded to whole pixels and the scale to a whole
    /// percentage.
    ///
    /// ```rust
    /// use kurbo::Vec2;
    /// use canopy_viewport::ViewState;
    ///
    /// let state = ViewState::new(Vec2::new(12.4, -0.3), 0.66);
    /// assert_eq!(state.readout().to_string(), "X: 12, Y: 0 | Zoom: 66%");
    /// ```
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout { state: *self }
    }
}

/// Display adapter returned by [`ViewState::transform_css`].
#[derive(Clone, Copy, Debug)]
pub struct TransformCss {
    state: ViewState,
    centered: bool,
}

impl fmt::Display for TransformCss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Vec2 { x, y } = self.state.offset;
        if self.centered {
            write!(f, "translate(calc(-50% + {x}px), calc(-50% + {y}px))")?;
        } else {
            write!(f, "translate({x}px, {y}px)")?;
        }
        write!(f, " scale({})", self.state.scale)
    }
}

/// Display adapter returned by [`ViewState::readout`].
#[derive(Clone, Copy, Debug)]
pub struct Readout {
    state: ViewState,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {:.0}, Y: {:.0} | Zoom: {:.0}%",
            whole(self.state.offset.x),
            whole(self.state.offset.y),
            whole(self.state.scale * 100.0),
        )
    }
}

// `{:.0}` rounds ties to even, so everything in `[-0.5, 0.5]` prints as a
// zero; pin those to `+0.0` so the sign never shows.
fn whole(v: f64) -> f64 {
    if v.abs() <= 0.5 { 0.0 } else { v }
}
