// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a render.  None of these are retried; each
//! one ends the render call that raised it.

use failure::Fail;
use std::io;

/// The failure modes of a render, from configuration through to the
/// encoded file on disk.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The requested keyword is not in the palette registry.
    #[fail(display = "palette not found: {}", _0)]
    PaletteNotFound(String),

    /// The palette expanded into too few colors to blend between.
    #[fail(display = "palette {} expanded to {} colors; at least two are needed", palette, len)]
    EmptyGradient {
        /// The palette keyword.
        palette: String,
        /// How many colors the expansion produced.
        len: usize,
    },

    /// A configuration value is out of range.
    #[fail(display = "invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// The viewport derived from the configuration cannot be mapped
    /// onto the pixel grid without producing non-finite coordinates.
    #[fail(
        display = "invalid viewport x: [{}, {}] y: [{}, {}]: {}",
        xmin, xmax, ymin, ymax, reason
    )]
    InvalidViewport {
        /// Left edge on the real axis.
        xmin: f64,
        /// Right edge on the real axis.
        xmax: f64,
        /// Lower edge on the imaginary axis.
        ymin: f64,
        /// Upper edge on the imaginary axis.
        ymax: f64,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The output image could not be created or encoded.
    #[fail(display = "could not write {}: {}", path, cause)]
    Output {
        /// The file we tried to write.
        path: String,
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },

    /// One of the row workers panicked before the buffer was complete.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}
