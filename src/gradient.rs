// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Expands a palette's few anchor colors into a dense lookup table.
//!
//! The palette is sampled at evenly spaced progress values `0, 1/N,
//! 2/N, ...` up to 1.0.  Each sample finds the pair of stops whose
//! half-open span `[lo, hi)` contains it and eases between their
//! packed colors with a cosine curve.  Because the progress value is
//! accumulated in floating point, and because a sample sitting exactly
//! on the last stop falls outside every half-open span, a gradient of
//! `N` samples comes out `N` or `N + 1` colors long.  Which one is
//! fixed for a given `N`.

use itertools::Itertools;
use std::f64::consts::PI;
use std::ops::Index;

use crate::color::Rgba;
use crate::palette::Palette;

/// A dense, immutable sequence of opaque colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    colors: Vec<Rgba>,
}

impl Gradient {
    /// Samples `palette` at steps of `1 / samples`.
    pub fn expand(palette: &Palette, samples: f64) -> Gradient {
        let positions = palette.positions();
        let packed: Vec<u32> = palette.stops.iter().map(|s| s.color.pack()).collect();
        let factor = 1.0 / samples;

        let mut colors = vec![];
        let mut progress = 0.0_f64;
        while progress <= 1.0 {
            for (j, (lo, hi)) in positions.iter().tuple_windows().enumerate() {
                if progress >= *lo && progress < *hi {
                    let mu = (progress - lo) / (hi - lo);
                    let value = cosine_interpolation(
                        f64::from(packed[j + 1]),
                        f64::from(packed[j]),
                        mu,
                    );
                    colors.push(Rgba::unpack(value as u32));
                }
            }
            progress += factor;
        }
        Gradient { colors }
    }

    /// Wraps an already resolved list of colors.
    pub fn from_colors(colors: Vec<Rgba>) -> Gradient {
        Gradient { colors }
    }

    /// Number of colors in the gradient.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if expansion produced nothing at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors, in sampling order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Index<usize> for Gradient {
    type Output = Rgba;

    fn index(&self, index: usize) -> &Rgba {
        &self.colors[index]
    }
}

/// Eases from `c1` at `mu = 0` to `c2` at `mu = 1`.
fn cosine_interpolation(c1: f64, c2: f64, mu: f64) -> f64 {
    let mu2 = (1.0 - (mu * PI).cos()) / 2.0;
    c1 * (1.0 - mu2) + c2 * mu2
}
