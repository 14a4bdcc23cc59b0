#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane for
//! which repeatedly squaring `z` and adding `c`, starting from zero,
//! never runs off to infinity.  Points outside the set do run off, and
//! how quickly they do so is the number used to color the image.
//!
//! Rather than coloring by the raw iteration count, which produces
//! visible bands, this renderer folds the final magnitude of `z` into a
//! continuous index and looks it up in a densely sampled gradient.  The
//! gradient is built from a small palette of anchor colors eased into
//! one another along a cosine curve.  The image is computed at a
//! multiple of its final size (the "smoothness") and handed back whole.
//!
//! ```no_run
//! let config = mandelbrot::RenderConfig {
//!     width: 320,
//!     height: 240,
//!     smoothness: 1,
//!     ..Default::default()
//! };
//! let buffer = mandelbrot::render(&config).unwrap();
//! mandelbrot::output::write_png("mandelbrot.png", &buffer).unwrap();
//! ```

extern crate crossbeam;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod buffer;
pub mod color;
pub mod colorize;
pub mod config;
pub mod errors;
pub mod escape;
pub mod gradient;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;

pub use buffer::PixelBuffer;
pub use color::Rgba;
pub use colorize::BlendMode;
pub use config::RenderConfig;
pub use errors::RenderError;
pub use gradient::Gradient;
pub use render::{RenderSummary, ScanlineRenderer};

use crossbeam::channel::Sender;

/// Validates `config`, then looks up the configured palette and expands
/// it into the gradient the render will use.
pub fn gradient_for(config: &RenderConfig) -> Result<Gradient, RenderError> {
    config.validate()?;
    let palette = palette::find(&config.palette)?;
    let gradient = Gradient::expand(palette, config.effective_color_step());
    debug!(
        "palette {} expanded to {} colors",
        palette.keyword,
        gradient.len()
    );
    if gradient.len() < 2 {
        return Err(RenderError::EmptyGradient {
            palette: palette.keyword.to_string(),
            len: gradient.len(),
        });
    }
    Ok(gradient)
}

/// Renders the image `config` describes.
pub fn render(config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
    let gradient = gradient_for(config)?;
    ScanlineRenderer::new(config)?.render(&gradient)
}

/// Renders the image `config` describes and announces its completion
/// on `done`.
pub fn render_with_signal(
    config: &RenderConfig,
    done: &Sender<RenderSummary>,
) -> Result<PixelBuffer, RenderError> {
    let gradient = gradient_for(config)?;
    ScanlineRenderer::new(config)?.render_with_signal(&gradient, done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny(palette: &str) -> RenderConfig {
        RenderConfig {
            palette: palette.to_string(),
            width: 12,
            height: 9,
            smoothness: 1,
            max_iterations: 60,
            color_step: 200.0,
            threads: 2,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn unknown_palette_is_an_error() {
        match render(&tiny("NoSuchPalette")) {
            Err(RenderError::PaletteNotFound(k)) => assert_eq!(k, "NoSuchPalette"),
            Err(e) => panic!("wrong error: {}", e),
            Ok(_) => panic!("rendered with a palette that does not exist"),
        }
    }

    #[test]
    fn every_palette_renders() {
        for keyword in palette::keywords() {
            let buffer = render(&tiny(keyword)).unwrap();
            assert_eq!((buffer.width(), buffer.height()), (12, 9));
        }
    }

    #[test]
    fn color_step_below_the_cap_is_raised() {
        let config = RenderConfig {
            color_step: 10.0,
            ..tiny("Grayscale")
        };
        let gradient = gradient_for(&config).unwrap();
        assert!(gradient.len() >= 60);
    }

    #[test]
    fn invalid_configuration_is_reported_before_rendering() {
        let config = RenderConfig {
            smoothness: 0,
            ..tiny("Hippi")
        };
        match render(&config) {
            Err(RenderError::InvalidConfig(_)) => (),
            Err(e) => panic!("wrong error: {}", e),
            Ok(_) => panic!("rendered a zero-sized image"),
        }
    }

    #[test]
    fn infinite_color_step_is_refused() {
        let config = RenderConfig {
            color_step: std::f64::INFINITY,
            ..tiny("Grayscale")
        };
        match render(&config) {
            Err(RenderError::InvalidConfig(_)) => (),
            Err(e) => panic!("wrong error: {}", e),
            Ok(_) => panic!("rendered with an unbounded gradient"),
        }
    }

    #[test]
    fn zero_width_is_refused_before_the_gradient_is_built() {
        let config = RenderConfig {
            width: 0,
            color_step: std::f64::INFINITY,
            ..tiny("Hippi")
        };
        let (tx, _rx) = crossbeam::channel::unbounded();
        match render_with_signal(&config, &tx) {
            Err(RenderError::InvalidConfig(_)) => (),
            Err(e) => panic!("wrong error: {}", e),
            Ok(_) => panic!("rendered a zero-width image"),
        }
    }

    #[test]
    fn signal_carries_the_final_size() {
        let (tx, rx) = crossbeam::channel::bounded(1);
        let buffer = render_with_signal(&tiny("Plan9"), &tx).unwrap();
        let summary = rx.recv().unwrap();
        assert_eq!((summary.width, summary.height), (12, 9));
        assert_eq!(summary.painted, buffer.painted());
    }
}
