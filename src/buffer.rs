// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major RGBA8 pixel grid.

use std::slice::ChunksMut;

use crate::color::Rgba;

/// Bytes per pixel.
pub const CHANNELS: usize = 4;

/// A width by height grid of RGBA8 pixels, transparent black until
/// written.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            data: vec![0u8; width * height * CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// The pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * CHANNELS;
        let p = &self.data[offset..offset + CHANNELS];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Sets the pixel at column `x`, row `y`.  Out of range writes are
    /// ignored.
    pub fn put(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            let offset = y * self.width * CHANNELS;
            put_pixel(&mut self.data[offset..offset + self.width * CHANNELS], x, color);
        }
    }

    /// The rows, top to bottom, each a disjoint mutable slice of
    /// `width * 4` bytes.
    pub fn rows_mut(&mut self) -> ChunksMut<'_, u8> {
        // chunks_mut panics on zero; an empty buffer has no rows anyway.
        let stride = (self.width * CHANNELS).max(1);
        self.data.chunks_mut(stride)
    }

    /// How many pixels have been written with a non-zero alpha.
    pub fn painted(&self) -> usize {
        self.data
            .chunks(CHANNELS)
            .filter(|p| p[CHANNELS - 1] != 0)
            .count()
    }

    /// The raw bytes, row-major, R G B A.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

/// Writes `color` into column `x` of one row.
pub fn put_pixel(row: &mut [u8], x: usize, color: Rgba) {
    let offset = x * CHANNELS;
    row[offset..offset + CHANNELS].copy_from_slice(&color.to_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_transparent() {
        let b = PixelBuffer::new(3, 2);
        assert_eq!(b.len(), 6);
        assert_eq!(b.as_raw().len(), 24);
        assert_eq!(b.get(2, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(b.painted(), 0);
    }

    #[test]
    fn get_is_bounds_checked() {
        let b = PixelBuffer::new(3, 2);
        assert_eq!(b.get(3, 0), None);
        assert_eq!(b.get(0, 2), None);
    }

    #[test]
    fn put_lands_row_major() {
        let mut b = PixelBuffer::new(3, 2);
        b.put(1, 1, Rgba::new(1, 2, 3, 4));
        assert_eq!(b.get(1, 1), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(&b.as_raw()[16..20], &[1, 2, 3, 4]);
        assert_eq!(b.painted(), 1);
        b.put(5, 5, Rgba::rgb(9, 9, 9));
        assert_eq!(b.painted(), 1);
    }

    #[test]
    fn rows_are_disjoint_and_complete() {
        let mut b = PixelBuffer::new(3, 4);
        let rows: Vec<&mut [u8]> = b.rows_mut().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 12));
    }

    #[test]
    fn writes_through_rows_show_up_in_the_grid() {
        let mut b = PixelBuffer::new(2, 2);
        for (y, row) in b.rows_mut().enumerate() {
            put_pixel(row, y, Rgba::rgb(y as u8, 0, 0));
        }
        assert_eq!(b.get(0, 0), Some(Rgba::rgb(0, 0, 0)));
        assert_eq!(b.get(1, 1), Some(Rgba::rgb(1, 0, 0)));
        assert_eq!(b.get(1, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn empty_buffers_have_no_rows() {
        let mut b = PixelBuffer::new(0, 5);
        assert_eq!(b.len(), 0);
        assert_eq!(b.rows_mut().count(), 0);
    }
}
