// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and the rectangle of the complex plane centered on the configured
//! point.
//!
//! Two quirks of the mapping are deliberate and kept:
//!
//! * Only the upper bounds are passed through `abs()`.  When the center
//!   sits far enough left (or low) that `center + extent / 2` is
//!   negative, the upper bound flips to the positive side and the
//!   viewport stretches across the origin instead of being centered.
//! * Both axes are divided by `width - 1`.  On anything but a square
//!   grid the imaginary axis is therefore not spanned exactly from
//!   `ymin` to `ymax`.
use num::Complex;

use crate::config::RenderConfig;
use crate::errors::RenderError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a pixel in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of the oversampled grid to points on the complex plane.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    /// The oversampled grid, width by height.
    pub integral_plane: IntegralPlane,
    /// The left-lower and right-upper corners of the complex plane.
    pub complex_plane: ComplexPlane,
    // Distance from the left-lower corner to the right-upper corner,
    // real and imaginary.
    span: (f64, f64),
    // The divisor for both axes: width - 1.
    divisor: f64,
}

impl Viewport {
    /// Derives the viewport a configuration describes.
    pub fn new(config: &RenderConfig) -> Result<Viewport, RenderError> {
        let (width, height) = config.oversampled();
        Viewport::centered(
            width,
            height,
            Complex::new(config.x, config.y),
            config.radius,
        )
    }

    /// Builds a viewport of `width` by `height` pixels, `extent` wide on
    /// the real axis and scaled to the grid's aspect ratio on the
    /// imaginary axis.
    pub fn centered(
        width: usize,
        height: usize,
        center: Complex<f64>,
        extent: f64,
    ) -> Result<Viewport, RenderError> {
        let ratio = height as f64 / width as f64;
        let (xmin, xmax) = (center.re - extent / 2.0, (center.re + extent / 2.0).abs());
        let (ymin, ymax) = (
            center.im - extent * ratio / 2.0,
            (center.im + extent * ratio / 2.0).abs(),
        );

        let invalid = |reason| RenderError::InvalidViewport {
            xmin,
            xmax,
            ymin,
            ymax,
            reason,
        };

        if width < 2 || height < 1 {
            return Err(invalid("the grid must be at least two pixels wide and one high"));
        }
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(invalid("the bounds are not finite"));
        }
        if xmax <= xmin {
            return Err(invalid("the real axis collapses or is inverted"));
        }
        if ymax <= ymin {
            return Err(invalid("the imaginary axis collapses or is inverted"));
        }

        Ok(Viewport {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(Complex::new(xmin, ymin), Complex::new(xmax, ymax)),
            span: (xmax - xmin, ymax - ymin),
            divisor: (width - 1) as f64,
        })
    }

    /// The real coordinate of a column.
    pub fn column_to_re(&self, column: usize) -> f64 {
        self.complex_plane.0.re + self.span.0 * (column as f64) / self.divisor
    }

    /// The imaginary coordinate of a row.
    pub fn row_to_im(&self, row: usize) -> f64 {
        self.complex_plane.0.im + self.span.1 * (row as f64) / self.divisor
    }

    /// Given a pixel on the integral cartesian plane, map that to a
    /// point on the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.column_to_re(pixel.0), self.row_to_im(pixel.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn viewport_fails_on_negative_extent() {
        let vp = Viewport::centered(4, 4, Complex::new(1.0, 1.0), -1.0);
        assert!(vp.is_err());
    }

    #[test]
    fn viewport_fails_on_zero_extent() {
        let vp = Viewport::centered(4, 4, Complex::new(1.0, 1.0), 0.0);
        assert!(vp.is_err());
    }

    #[test]
    fn viewport_fails_on_single_column() {
        match Viewport::centered(1, 4, Complex::new(0.0, 0.0), 1.0) {
            Err(RenderError::InvalidViewport { .. }) => (),
            other => panic!("expected InvalidViewport, got {:?}", other),
        }
    }

    #[test]
    fn viewport_fails_on_non_finite_center() {
        assert!(Viewport::centered(4, 4, Complex::new(std::f64::NAN, 0.0), 1.0).is_err());
        assert!(Viewport::centered(4, 4, Complex::new(0.0, std::f64::INFINITY), 1.0).is_err());
    }

    #[test]
    fn viewport_passes_on_good_shape() {
        let vp = Viewport::centered(4, 4, Complex::new(0.5, 0.5), 1.0).unwrap();
        assert_eq!(vp.complex_plane.0, Complex::new(0.0, 0.0));
        assert_eq!(vp.complex_plane.1, Complex::new(1.0, 1.0));
        assert_eq!(vp.integral_plane.0 * vp.integral_plane.1, 16);
    }

    #[test]
    fn wide_grids_squash_the_imaginary_axis() {
        let vp = Viewport::centered(8, 4, Complex::new(1.0, 1.0), 2.0).unwrap();
        assert_eq!(vp.complex_plane.0, Complex::new(0.0, 0.5));
        assert_eq!(vp.complex_plane.1, Complex::new(2.0, 1.5));
    }

    #[test]
    fn negative_center_flips_the_upper_bounds() {
        // -2 + 0.25 = -1.75, clamped to 1.75: the viewport runs from
        // -2.25 across the origin instead of stopping at -1.75.
        let vp = Viewport::centered(4, 4, Complex::new(-2.0, -2.0), 0.5).unwrap();
        assert_eq!(vp.complex_plane.0, Complex::new(-2.25, -2.25));
        assert_eq!(vp.complex_plane.1, Complex::new(1.75, 1.75));
    }

    #[test]
    fn center_straddling_the_origin_is_not_clamped() {
        let vp = Viewport::centered(4, 4, Complex::new(-0.1, -0.1), 0.5).unwrap();
        assert!(close(vp.complex_plane.0.re, -0.35));
        assert!(close(vp.complex_plane.1.re, 0.15));
    }

    #[test]
    fn pixel_to_point_spans_the_real_axis() {
        let vp = Viewport::centered(5, 5, Complex::new(2.0, 2.0), 4.0).unwrap();
        assert_eq!(vp.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(vp.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(vp.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn rows_are_divided_by_the_width() {
        // 5 wide, 3 high: ymin..ymax is 0.4..1.6 but the row step is
        // 1.2 / 4, so the last row lands at 1.0, short of ymax.
        let vp = Viewport::centered(5, 3, Complex::new(1.0, 1.0), 2.0).unwrap();
        assert!(close(vp.row_to_im(0), 0.4));
        assert!(close(vp.row_to_im(2), 1.0));
        assert!(close(vp.complex_plane.1.im, 1.6));
    }

    #[test]
    fn tall_grids_run_past_the_upper_bound() {
        let vp = Viewport::centered(3, 5, Complex::new(0.0, 10.0), 2.0).unwrap();
        let last = vp.row_to_im(4);
        assert!(last > vp.complex_plane.1.im);
    }
}
