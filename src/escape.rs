// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration.

use num::Complex;

/// How a point's orbit ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// `|z|²` at the escaping step, or half of it when the orbit never
    /// escaped.
    pub norm_sqr: f64,
    /// The 0-based step at which `|z|²` first exceeded 4, or the cap.
    pub iterations: usize,
}

/// This is our classic iterator function: iterate `z = z² + c` from
/// the origin until `|z|²` exceeds 4 or `max_iterations` steps have
/// passed.
pub fn evaluate(c: Complex<f64>, max_iterations: usize) -> Escape {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for i in 0..max_iterations {
        let norm_sqr = z.norm_sqr();
        if norm_sqr > 4.0 {
            return Escape {
                norm_sqr,
                iterations: i,
            };
        }
        z = z * z + c;
    }
    Escape {
        norm_sqr: z.norm_sqr() / 2.0,
        iterations: max_iterations,
    }
}
