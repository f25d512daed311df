// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify the content (scale grows).
    In,
    /// Shrink the content (scale shrinks).
    Out,
}

/// How one zoom step changes the scale.
///
/// This enum is consulted by [`crate::ViewportTransform::zoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomStep {
    /// Add (zoom in) or subtract (zoom out) a fixed amount.
    Additive(f64),
    /// Multiply (zoom in) or divide (zoom out) by a fixed factor.
    ///
    /// Factors `<= 1.0` are treated as "no change".
    Multiplicative(f64),
}

impl ZoomStep {
    /// Returns the scale that results from applying this step to `scale`.
    ///
    /// The result is not clamped.
    #[must_use]
    pub fn apply(self, scale: f64, direction: ZoomDirection) -> f64 {
        match (self, direction) {
            (Self::Additive(step), ZoomDirection::In) => scale + step.abs(),
            (Self::Additive(step), ZoomDirection::Out) => scale - step.abs(),
            (Self::Multiplicative(factor), _) if factor <= 1.0 => scale,
            (Self::Multiplicative(factor), ZoomDirection::In) => scale * factor,
            (Self::Multiplicative(factor), ZoomDirection::Out) => scale / factor,
        }
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self::Additive(0.1)
    }
}

/// Construction parameters for a [`crate::ViewportTransform`].
///
/// The defaults match a plain page: scale `1.0`, scale range `[0.1, 5.0]`,
/// additive steps of `0.1`, and a centered content container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Scale restored by [`crate::ViewportTransform::reset`] and used at construction.
    pub initial_scale: f64,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Step applied by each zoom request.
    pub zoom_step: ZoomStep,
    /// Whether the rendered transform recenters the container on its own
    /// midpoint (`translate(calc(-50% + ..))`).
    pub centered: bool,
}

const DEFAULT_MIN_SCALE: f64 = 0.1;
const DEFAULT_MAX_SCALE: f64 = 5.0;

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: ZoomStep::default(),
            centered: true,
        }
    }
}

impl ViewportConfig {
    /// Sets the initial (and reset) scale.
    #[must_use]
    pub fn with_initial_scale(mut self, scale: f64) -> Self {
        self.initial_scale = scale;
        self
    }

    /// Sets the scale bounds.
    ///
    /// A bound that is not finite and positive is ignored and the current one
    /// kept. The pair is then normalized so that `min <= max`.
    #[must_use]
    pub fn with_scale_limits(mut self, min: f64, max: f64) -> Self {
        if is_valid_scale(min) {
            self.min_scale = min;
        }
        if is_valid_scale(max) {
            self.max_scale = max;
        }
        (self.min_scale, self.max_scale) = self.scale_limits();
        self
    }

    /// Sets the zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, step: ZoomStep) -> Self {
        self.zoom_step = step;
        self
    }

    /// Sets whether the rendered transform recenters the container.
    #[must_use]
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Returns the effective `(min, max)` scale range.
    ///
    /// The fields are public, so they are sanitized here: a bound that is not
    /// finite and positive falls back to its default, and an inverted pair is
    /// swapped.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        let min = if is_valid_scale(self.min_scale) {
            self.min_scale
        } else {
            DEFAULT_MIN_SCALE
        };
        let max = if is_valid_scale(self.max_scale) {
            self.max_scale
        } else {
            DEFAULT_MAX_SCALE
        };
        if min <= max { (min, max) } else { (max, min) }
    }

    /// Clamps `scale` into the effective range; NaN maps to the lower bound.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let (min, max) = self.scale_limits();
        if scale.is_nan() {
            min
        } else {
            scale.clamp(min, max)
        }
    }
}

fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

#[cfg(test)]
mod tests {
    use super::{ViewportConfig, ZoomDirection, ZoomStep};

    #[test]
    fn additive_step_ignores_sign() {
        let step = ZoomStep::Additive(-0.25);
        assert_eq!(step.apply(1.0, ZoomDirection::In), 1.25);
        assert_eq!(step.apply(1.0, ZoomDirection::Out), 0.75);
    }

    #[test]
    fn multiplicative_step_is_symmetric() {
        let step = ZoomStep::Multiplicative(2.0);
        let up = step.apply(1.5, ZoomDirection::In);
        assert_eq!(up, 3.0);
        assert_eq!(step.apply(up, ZoomDirection::Out), 1.5);
    }

    #[test]
    fn degenerate_factor_is_a_no_op() {
        let step = ZoomStep::Multiplicative(0.5);
        assert_eq!(step.apply(2.0, ZoomDirection::In), 2.0);
        assert_eq!(step.apply(2.0, ZoomDirection::Out), 2.0);
    }

    #[test]
    fn scale_limits_are_normalized() {
        let config = ViewportConfig::default().with_scale_limits(4.0, 0.5);
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 4.0);
        assert_eq!(config.clamp_scale(10.0), 4.0);
        assert_eq!(config.clamp_scale(0.0), 0.5);
    }

    #[test]
    fn unusable_scale_limits_are_ignored() {
        let config = ViewportConfig::default().with_scale_limits(f64::NAN, 2.0);
        assert_eq!(config.scale_limits(), (0.1, 2.0));

        let config = ViewportConfig::default().with_scale_limits(0.0, f64::INFINITY);
        assert_eq!(config.scale_limits(), (0.1, 5.0));

        let config = ViewportConfig::default().with_scale_limits(-1.0, 0.05);
        assert_eq!(config.scale_limits(), (0.05, 0.1));
    }

    #[test]
    fn clamping_tolerates_hand_built_limits() {
        let inverted = ViewportConfig {
            min_scale: 5.0,
            max_scale: 0.1,
            ..ViewportConfig::default()
        };
        assert_eq!(inverted.clamp_scale(10.0), 5.0);
        assert_eq!(inverted.clamp_scale(0.01), 0.1);

        let broken = ViewportConfig {
            min_scale: 0.0,
            max_scale: f64::NAN,
            ..ViewportConfig::default()
        };
        assert_eq!(broken.scale_limits(), (0.1, 5.0));
        assert_eq!(broken.clamp_scale(f64::NAN), 0.1);
    }
}
