// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished buffer to disk as a PNG.

use image::png::PNGEncoder;
use image::ColorType;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::errors::RenderError;

/// Encodes `buffer` as an RGBA8 PNG at `path`, replacing whatever was
/// there.
pub fn write_png<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let path = path.as_ref();
    encode(path, buffer).map_err(|cause| RenderError::Output {
        path: path.display().to_string(),
        cause,
    })?;
    info!("wrote {}x{} image to {}", buffer.width(), buffer.height(), path.display());
    Ok(())
}

fn encode(path: &Path, buffer: &PixelBuffer) -> Result<(), io::Error> {
    let output = File::create(path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        buffer.as_raw(),
        buffer.width() as u32,
        buffer.height() as u32,
        ColorType::RGBA(8),
    )
}
