// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colors, and the packed 32-bit layout the interpolators do their
//! arithmetic in.
//!
//! A packed color holds R, G, B and A from the most significant byte
//! to the least.  Before packing, each 8-bit channel is widened to
//! sixteen bits (`c * 0x101`) and divided back down by `0xff`.  That
//! round trip is not the identity: channels from 128 up come back one
//! larger, and a full 255 comes back as 257, a nine-bit value whose top
//! bit spills into the neighbouring byte (or off the top of the word,
//! for red).  The gradients depend on that spill, so it is kept.

/// An 8-bit-per-channel color with straight alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black; what an untouched pixel holds.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Builds a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Builds a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 0xff }
    }

    /// The channels in memory order, as they sit in a pixel buffer.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Packs the color into the interpolation layout.
    pub fn pack(self) -> u32 {
        widen(self.r) << 24 | widen(self.g) << 16 | widen(self.b) << 8 | widen(self.a)
    }

    /// Unpacks a value produced by interpolation.  The alpha byte of
    /// `packed` is ignored; the result is always opaque.
    pub fn unpack(packed: u32) -> Self {
        Rgba::rgb(
            (packed >> 24 & 0xff) as u8,
            (packed >> 16 & 0xff) as u8,
            (packed >> 8 & 0xff) as u8,
        )
    }
}

fn widen(channel: u8) -> u32 {
    (u32::from(channel) * 0x101) / 0xff
}
