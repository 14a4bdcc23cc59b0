// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parameters of one render.  Once built, a RenderConfig is not
//! mutated; every stage of the pipeline reads the same value.

use crate::buffer::CHANNELS;
use crate::colorize::BlendMode;
use crate::errors::RenderError;

/// Largest gradient sample count a render will expand.
pub const MAX_COLOR_STEP: f64 = 10_000_000.0;

/// Everything a render needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Keyword of the palette in the registry.
    pub palette: String,
    /// Center of the viewport on the real axis.
    pub x: f64,
    /// Center of the viewport on the imaginary axis.
    pub y: f64,
    /// Width of the viewport on the real axis.
    pub radius: f64,
    /// Image width before oversampling.
    pub width: usize,
    /// Image height before oversampling.
    pub height: usize,
    /// Oversampling factor applied to both dimensions.
    pub smoothness: usize,
    /// Iteration cap per point.
    pub max_iterations: usize,
    /// Requested number of gradient samples; see `color_step`.
    pub color_step: f64,
    /// Number of row workers.
    pub threads: usize,
    /// How neighbouring gradient colors are blended.
    pub blend: BlendMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            palette: "Hippi".to_string(),
            x: -0.00275,
            y: 0.78912,
            radius: 0.125689,
            width: 1024,
            height: 768,
            smoothness: 8,
            max_iterations: 800,
            color_step: 6000.0,
            threads: num_cpus::get(),
            blend: BlendMode::default(),
        }
    }
}

impl RenderConfig {
    /// Dimensions of the oversampled grid actually rendered.  Only
    /// meaningful for a config that passed `validate`.
    pub fn oversampled(&self) -> (usize, usize) {
        (self.width * self.smoothness, self.height * self.smoothness)
    }

    /// The gradient sample count actually used: never fewer than the
    /// iteration cap.
    pub fn effective_color_step(&self) -> f64 {
        self.color_step.max(self.max_iterations as f64)
    }

    /// Checks the values that would otherwise produce an empty or
    /// nonsensical render.
    pub fn validate(&self) -> Result<(), RenderError> {
        let fail = |reason: &str| Err(RenderError::InvalidConfig(reason.to_string()));
        if self.width == 0 || self.height == 0 {
            return fail("width and height must be positive");
        }
        if self.smoothness == 0 {
            return fail("smoothness must be positive");
        }
        if self.max_iterations == 0 {
            return fail("the iteration count must be positive");
        }
        if self.threads == 0 {
            return fail("at least one thread is needed");
        }
        if !(self.x.is_finite() && self.y.is_finite()) {
            return fail("the center must be a finite point");
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return fail("the radius must be a positive number");
        }
        if !self.color_step.is_finite() || self.color_step > MAX_COLOR_STEP {
            return fail("the color step must be a number no larger than 10000000");
        }
        let bytes = self
            .width
            .checked_mul(self.smoothness)
            .and_then(|width| {
                self.height
                    .checked_mul(self.smoothness)
                    .and_then(|height| width.checked_mul(height))
            })
            .and_then(|pixels| pixels.checked_mul(CHANNELS));
        if bytes.is_none() {
            return fail("the oversampled image is too large");
        }
        Ok(())
    }
}
