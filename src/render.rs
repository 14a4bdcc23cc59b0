// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The scanline renderer.
//!
//! Every row of the oversampled grid is one unit of work.  The rows are
//! handed out from a shared queue to a fixed pool of scoped worker
//! threads; each row arrives as its own `&mut [u8]`, so no two workers
//! can ever touch the same pixel and the buffer needs no locking.  The
//! scope doubles as the barrier: when it returns, every row is done.

use crossbeam::channel::Sender;
use itertools::iproduct;
use num::Complex;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::buffer::{put_pixel, PixelBuffer};
use crate::colorize::{BlendMode, Colorizer};
use crate::config::RenderConfig;
use crate::errors::RenderError;
use crate::escape::evaluate;
use crate::gradient::Gradient;
use crate::planes::{Pixel, Viewport};

/// What a finished render looked like; sent once the buffer is whole.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSummary {
    /// Width of the finished buffer.
    pub width: usize,
    /// Height of the finished buffer, which is also the number of row
    /// tasks that ran.
    pub height: usize,
    /// Pixels that received a color.
    pub painted: usize,
    /// Wall time spent filling the buffer.
    pub elapsed: Duration,
}

/// Holds the viewport and coloring parameters of one render.  Once
/// built, this object should not be mutable.
pub struct ScanlineRenderer {
    viewport: Viewport,
    max_iterations: usize,
    blend: BlendMode,
    threads: usize,
}

impl ScanlineRenderer {
    /// Validates `config` and derives its viewport.
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let viewport = Viewport::new(config)?;
        debug!(
            "viewport {:?} to {:?} over {}x{} pixels",
            viewport.complex_plane.0,
            viewport.complex_plane.1,
            viewport.integral_plane.0,
            viewport.integral_plane.1
        );
        Ok(ScanlineRenderer {
            viewport,
            max_iterations: config.max_iterations,
            blend: config.blend,
            threads: config.threads,
        })
    }

    fn colorizer<'a>(&self, gradient: &'a Gradient) -> Colorizer<'a> {
        Colorizer::new(gradient, self.max_iterations, self.blend)
    }

    fn empty_buffer(&self) -> PixelBuffer {
        PixelBuffer::new(self.viewport.integral_plane.0, self.viewport.integral_plane.1)
    }

    /// Fills one row.  Pixels whose color falls off the gradient are
    /// left as they were.
    fn render_row(&self, iy: usize, row: &mut [u8], colorizer: &Colorizer) {
        let im = self.viewport.row_to_im(iy);
        for ix in 0..self.viewport.integral_plane.0 {
            let point = Complex::new(self.viewport.column_to_re(ix), im);
            if let Some(color) = colorizer.colorize(&evaluate(point, self.max_iterations)) {
                put_pixel(row, ix, color);
            }
        }
        trace!("row {} done", iy);
    }

    /// The main function for single-threaded rendering.  Produces the
    /// same pixels as `render`, one at a time.
    pub fn render_single(&self, gradient: &Gradient) -> PixelBuffer {
        let colorizer = self.colorizer(gradient);
        let mut buffer = self.empty_buffer();
        for (row, column) in iproduct!(
            0..self.viewport.integral_plane.1,
            0..self.viewport.integral_plane.0
        ) {
            let point = self.viewport.pixel_to_point(&Pixel(column, row));
            if let Some(color) = colorizer.colorize(&evaluate(point, self.max_iterations)) {
                buffer.put(column, row, color);
            }
        }
        buffer
    }

    /// Renders every row on the worker pool and returns the finished
    /// buffer.
    pub fn render(&self, gradient: &Gradient) -> Result<PixelBuffer, RenderError> {
        self.render_timed(gradient).map(|(buffer, _)| buffer)
    }

    /// As `render`, then sends a single summary on `done` once the
    /// buffer is complete.  A receiver that has gone away is not an
    /// error.
    pub fn render_with_signal(
        &self,
        gradient: &Gradient,
        done: &Sender<RenderSummary>,
    ) -> Result<PixelBuffer, RenderError> {
        let (buffer, summary) = self.render_timed(gradient)?;
        if done.send(summary).is_err() {
            debug!("nobody is listening for the completion signal");
        }
        Ok(buffer)
    }

    fn render_timed(
        &self,
        gradient: &Gradient,
    ) -> Result<(PixelBuffer, RenderSummary), RenderError> {
        let started = Instant::now();
        let colorizer = self.colorizer(gradient);
        let mut buffer = self.empty_buffer();
        let workers = self.threads.max(1).min(buffer.height().max(1));
        info!(
            "rendering {}x{} with {} workers",
            buffer.width(),
            buffer.height(),
            workers
        );

        {
            let rows = Mutex::new(buffer.rows_mut().enumerate());
            let rows = &rows;
            let colorizer = &colorizer;
            crossbeam::scope(|spawner| {
                for _ in 0..workers {
                    spawner.spawn(move |_| loop {
                        let row = match rows.lock() {
                            Ok(mut queue) => queue.next(),
                            Err(_) => None,
                        };
                        match row {
                            Some((iy, row)) => self.render_row(iy, row, colorizer),
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .map_err(|_| RenderError::WorkerPanicked)?;
        }

        let summary = RenderSummary {
            width: buffer.width(),
            height: buffer.height(),
            painted: buffer.painted(),
            elapsed: started.elapsed(),
        };
        info!(
            "rendered {} of {} pixels in {:?}",
            summary.painted,
            buffer.len(),
            summary.elapsed
        );
        Ok((buffer, summary))
    }
}
