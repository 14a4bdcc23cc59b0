// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an escape result into a pixel color.
//!
//! The escape result is folded into a continuous index, `(cap -
//! iterations) + ln(|z|²)`.  Its integral magnitude picks two
//! neighbouring gradient colors, and those are blended.  How they are
//! blended is a choice: see [`BlendMode`].
//!
//! [`BlendMode`]: enum.BlendMode.html

use std::fmt;
use std::str::FromStr;

use crate::color::Rgba;
use crate::escape::Escape;
use crate::gradient::Gradient;

/// How two neighbouring gradient colors are mixed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Blend the packed 32-bit colors with the smoothed index itself,
    /// truncated to an integer, as the weight, in wrapping arithmetic.
    /// The weight is usually larger than one, so the result is mostly
    /// the wrapped-around sum rather than a mix of the two colors.
    /// This reproduces the historical output bit for bit.
    Reference,
    /// Blend channel by channel with the fractional part of the
    /// smoothed index as the weight.
    Smooth,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Reference
    }
}

impl FromStr for BlendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(BlendMode::Reference),
            "smooth" => Ok(BlendMode::Smooth),
            _ => Err(format!("unknown blend mode {:?}; expected reference or smooth", s)),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BlendMode::Reference => write!(f, "reference"),
            BlendMode::Smooth => write!(f, "smooth"),
        }
    }
}

/// Maps escape results onto one gradient.
pub struct Colorizer<'a> {
    gradient: &'a Gradient,
    max_iterations: usize,
    blend: BlendMode,
}

impl<'a> Colorizer<'a> {
    /// A colorizer for orbits capped at `max_iterations`.
    pub fn new(gradient: &'a Gradient, max_iterations: usize, blend: BlendMode) -> Self {
        Colorizer {
            gradient,
            max_iterations,
            blend,
        }
    }

    /// The continuous index an escape result maps to.
    pub fn smoothed(&self, escape: &Escape) -> f64 {
        (self.max_iterations as f64 - escape.iterations as f64) + escape.norm_sqr.ln()
    }

    /// The color for an escape result, or `None` if the index falls
    /// off the end of the gradient (or is not a number at all) and the
    /// pixel should be left alone.
    pub fn colorize(&self, escape: &Escape) -> Option<Rgba> {
        let smoothed = self.smoothed(escape);
        if !smoothed.is_finite() {
            return None;
        }
        let index = smoothed.abs() as usize;
        if index >= self.gradient.len().saturating_sub(1) {
            return None;
        }
        let (c1, c2) = (self.gradient[index], self.gradient[index + 1]);
        Some(match self.blend {
            BlendMode::Reference => Rgba::unpack(linear_interpolation(
                c1.pack(),
                c2.pack(),
                reference_weight(smoothed),
            )),
            BlendMode::Smooth => mix(c1, c2, smoothed.abs().fract()),
        })
    }
}

/// The weight the reference blend uses: the index truncated toward
/// zero and reinterpreted as unsigned, so -3.5 becomes `u32::MAX - 2`.
fn reference_weight(smoothed: f64) -> u32 {
    (smoothed as i64) as u32
}

fn linear_interpolation(c1: u32, c2: u32, mu: u32) -> u32 {
    c1.wrapping_mul(1_u32.wrapping_sub(mu))
        .wrapping_add(c2.wrapping_mul(mu))
}

fn mix(c1: Rgba, c2: Rgba, mu: f64) -> Rgba {
    let channel = |a: u8, b: u8| (f64::from(a) * (1.0 - mu) + f64::from(b) * mu).round() as u8;
    Rgba::rgb(channel(c1.r, c2.r), channel(c1.g, c2.g), channel(c1.b, c2.b))
}
