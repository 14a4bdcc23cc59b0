// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The palette registry: a fixed table of named color progressions.
//! A palette is only a handful of anchor colors; `gradient` expands
//! one into the dense lookup table the colorizer reads.

use crate::color::Rgba;
use crate::errors::RenderError;

/// An anchor color at a fractional position along a palette.  A step
/// of zero anywhere but the first stop means "place me automatically."
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in [0, 1], or 0.0 for automatic placement.
    pub step: f64,
    /// The color at that position.
    pub color: Rgba,
}

const fn stop(step: f64, r: u8, g: u8, b: u8) -> ColorStop {
    ColorStop {
        step,
        color: Rgba::rgb(r, g, b),
    }
}

/// A named, ordered sequence of color stops.
#[derive(Copy, Clone, Debug)]
pub struct Palette<'a> {
    /// The name the palette is looked up by.
    pub keyword: &'a str,
    /// The anchors, in order.
    pub stops: &'a [ColorStop],
}

impl<'a> Palette<'a> {
    /// The effective position of every stop.  Unset stops after the
    /// first sit at `(index + 1) / len`, truncated to two decimals.
    pub fn positions(&self) -> Vec<f64> {
        let total = self.stops.len() as f64;
        self.stops
            .iter()
            .enumerate()
            .map(|(index, s)| {
                if s.step == 0.0 && index != 0 {
                    let ratio = (index + 1) as f64 / total;
                    ((ratio * 100.0) as i64) as f64 / 100.0
                } else {
                    s.step
                }
            })
            .collect()
    }
}

/// Every palette the renderer knows about.
pub static PALETTES: &[Palette<'static>] = &[
    Palette {
        keyword: "Hippi",
        stops: &[
            stop(0.0, 0x0b, 0x0f, 0x2a),
            stop(0.0, 0x7f, 0x2c, 0xa8),
            stop(0.0, 0xff, 0x5f, 0xa2),
            stop(0.0, 0xff, 0xd1, 0x66),
            stop(0.0, 0x06, 0xd6, 0xa0),
            stop(0.0, 0x11, 0x8a, 0xb2),
        ],
    },
    Palette {
        keyword: "Plan9",
        stops: &[
            stop(0.0, 0x00, 0x00, 0x00),
            stop(0.3, 0xea, 0xff, 0xff),
            stop(0.5, 0x9e, 0xee, 0xee),
            stop(0.8, 0xff, 0xff, 0xea),
            stop(1.0, 0x99, 0x99, 0x4c),
        ],
    },
    Palette {
        keyword: "AfternoonBlue",
        stops: &[
            stop(0.0, 0x0a, 0x1f, 0x44),
            stop(0.4, 0x3a, 0x7b, 0xd5),
            stop(0.7, 0xa8, 0xd8, 0xff),
            stop(1.0, 0xff, 0xff, 0xff),
        ],
    },
    Palette {
        keyword: "SummerBeach",
        stops: &[
            stop(0.0, 0x00, 0x2c, 0x4e),
            stop(0.0, 0x00, 0x88, 0x91),
            stop(0.0, 0xf7, 0xe6, 0xc4),
            stop(0.0, 0xf4, 0xa2, 0x59),
            stop(0.0, 0xbc, 0x4b, 0x51),
        ],
    },
    Palette {
        keyword: "Biochimist",
        stops: &[
            stop(0.0, 0x00, 0x00, 0x00),
            stop(0.2, 0x1b, 0x43, 0x32),
            stop(0.5, 0x52, 0xb7, 0x88),
            stop(0.75, 0xd8, 0xf3, 0xdc),
            stop(1.0, 0xff, 0xff, 0xff),
        ],
    },
    Palette {
        keyword: "Fiesta",
        stops: &[
            stop(0.0, 0x1a, 0x00, 0x33),
            stop(0.0, 0xe6, 0x39, 0x46),
            stop(0.0, 0xf4, 0xa2, 0x61),
            stop(0.0, 0xe9, 0xc4, 0x6a),
            stop(0.0, 0x2a, 0x9d, 0x8f),
            stop(0.0, 0x26, 0x46, 0x53),
            stop(0.0, 0xf1, 0xfa, 0xee),
        ],
    },
    Palette {
        keyword: "Grayscale",
        stops: &[stop(0.0, 0x00, 0x00, 0x00), stop(1.0, 0xff, 0xff, 0xff)],
    },
];

/// Looks a palette up by its exact keyword.
pub fn find(keyword: &str) -> Result<&'static Palette<'static>, RenderError> {
    PALETTES
        .iter()
        .find(|p| p.keyword == keyword)
        .ok_or_else(|| RenderError::PaletteNotFound(keyword.to_string()))
}

/// The keywords of every registered palette, in registry order.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_registered_palettes() {
        for keyword in keywords() {
            assert_eq!(find(keyword).unwrap().keyword, keyword);
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert!(find("hippi").is_err());
        assert!(find("Hippi ").is_err());
        match find("NoSuchPalette") {
            Err(RenderError::PaletteNotFound(k)) => assert_eq!(k, "NoSuchPalette"),
            other => panic!("expected PaletteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn registry_positions_start_at_zero_and_never_decrease() {
        for palette in PALETTES {
            assert!(palette.stops.len() >= 2, "{} is too short", palette.keyword);
            let positions = palette.positions();
            assert_eq!(positions[0], 0.0, "{}", palette.keyword);
            for pair in positions.windows(2) {
                assert!(pair[0] <= pair[1], "{}: {:?}", palette.keyword, positions);
            }
            for p in &positions {
                assert!(*p >= 0.0 && *p <= 1.0, "{}: {:?}", palette.keyword, positions);
            }
        }
    }

    #[test]
    fn unset_steps_are_placed_by_index() {
        let stops = [
            stop(0.0, 0, 0, 0),
            stop(0.0, 1, 1, 1),
            stop(0.0, 2, 2, 2),
            stop(0.0, 3, 3, 3),
            stop(0.0, 4, 4, 4),
        ];
        let palette = Palette {
            keyword: "auto",
            stops: &stops,
        };
        assert_eq!(palette.positions(), vec![0.0, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn automatic_positions_truncate_to_two_decimals() {
        let stops = [stop(0.0, 0, 0, 0), stop(0.0, 1, 1, 1), stop(0.0, 2, 2, 2)];
        let palette = Palette {
            keyword: "thirds",
            stops: &stops,
        };
        assert_eq!(palette.positions(), vec![0.0, 0.66, 1.0]);
    }

    #[test]
    fn explicit_steps_are_kept() {
        let palette = find("Plan9").unwrap();
        assert_eq!(palette.positions(), vec![0.0, 0.3, 0.5, 0.8, 1.0]);
    }
}
