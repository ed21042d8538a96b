#![forbid(unsafe_code)]

//! 8-bit palette colors.
//!
//! The display works with one byte per pixel. Index 0 is transparent; the
//! rest of the palette is a 6×6×6 color cube followed by a 24-step gray
//! ramp, so arbitrary RGB values can be mapped to a nearby palette entry
//! without a lookup table.
//!
//! # Palette layout
//!
//! ```text
//! 0          transparent
//! 1..=216    6×6×6 cube, index = 1 + 36*r + 6*g + b (levels 0,95,135,175,215,255)
//! 217..=240  gray ramp, gray = 8 + 10*(index - 217)
//! 241..=255  reserved (render as black)
//! ```

/// An 8-bit palette color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u8);

const CUBE_BASE: u8 = 1;
const GRAY_BASE: u8 = 217;
const GRAY_STEPS: u8 = 24;
const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

impl Color {
    /// The transparent color. Blitting skips it; surfaces may treat it as
    /// "unset".
    pub const TRANSPARENT: Self = Self(0);

    /// Black (cube origin).
    pub const BLACK: Self = Self(CUBE_BASE);

    /// White (cube corner).
    pub const WHITE: Self = Self(CUBE_BASE + 215);

    /// Full green (cube 0,5,0).
    pub const GREEN: Self = Self(CUBE_BASE + 30);

    /// Map an RGB triplet to the nearest palette entry.
    ///
    /// Pure grays land on the gray ramp (except near-black and near-white,
    /// which use the cube corners); everything else lands on the cube entry
    /// whose per-channel levels are closest.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        if r == g && g == b {
            if r < 8 {
                return Self::BLACK;
            }
            if r > 248 {
                return Self::WHITE;
            }
            let mut idx = (r - 8) / 10;
            if idx > GRAY_STEPS - 1 {
                idx = GRAY_STEPS - 1;
            }
            return Self(GRAY_BASE + idx);
        }

        Self(CUBE_BASE + 36 * cube_level(r) + 6 * cube_level(g) + cube_level(b))
    }

    /// Check whether this is the transparent entry.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.0 == Self::TRANSPARENT.0
    }

    /// Reconstruct the RGB triplet of this palette entry.
    ///
    /// Transparent and reserved entries decode to black.
    #[must_use]
    pub const fn rgb_triplet(self) -> (u8, u8, u8) {
        let index = self.0;
        if index >= CUBE_BASE && index < GRAY_BASE {
            let idx = index - CUBE_BASE;
            let r = LEVELS[(idx / 36) as usize];
            let g = LEVELS[((idx / 6) % 6) as usize];
            let b = LEVELS[(idx % 6) as usize];
            return (r, g, b);
        }
        if index >= GRAY_BASE && index < GRAY_BASE + GRAY_STEPS {
            let gray = 8 + 10 * (index - GRAY_BASE);
            return (gray, gray, gray);
        }
        (0, 0, 0)
    }

    /// Perceptual luminance of this entry, 0 (black) to 255 (white).
    #[must_use]
    pub const fn luminance(self) -> u8 {
        let (r, g, b) = self.rgb_triplet();
        ((2126 * r as u32 + 7152 * g as u32 + 722 * b as u32) / 10000) as u8
    }
}

/// Map an 8-bit channel value to the nearest cube level index.
///
/// The cube levels `[0, 95, 135, 175, 215, 255]` are not uniformly spaced;
/// the thresholds here are the midpoints between adjacent levels (48, 115,
/// 155, 195, 235) so each channel maps to the closest entry rather than an
/// equal-width bin.
const fn cube_level(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (v - 35) / 40
    }
}
