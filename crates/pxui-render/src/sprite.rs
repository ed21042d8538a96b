#![forbid(unsafe_code)]

//! Sprites and icon resolution.
//!
//! A [`Sprite`] is a small fixed-size palette image. Widgets never load
//! image assets themselves; they ask an [`IconProvider`] for a sprite by
//! kind and blit whatever comes back. [`PlaceholderIcons`] is the built-in
//! provider used when no asset pipeline is wired up.

use crate::color::Color;

/// Edge length of the square icons handed out by [`IconProvider`]s.
pub const ICON_SIZE: i32 = 16;

/// A fixed-size image of palette pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Sprite {
    /// Create a fully transparent sprite.
    ///
    /// # Panics
    ///
    /// Panics if width or height is not positive.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "sprite width must be > 0");
        assert!(height > 0, "sprite height must be > 0");
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    /// Create a sprite by evaluating `f` at every pixel.
    #[must_use]
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(i32, i32) -> Color) -> Self {
        let mut sprite = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                sprite.set(x, y, f(x, y));
            }
        }
        sprite
    }

    /// Sprite width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Sprite height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The color at `(x, y)`. Out-of-bounds reads are transparent.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Color::TRANSPARENT;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the color at `(x, y)`. Out-of-bounds writes are discarded.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Resolves a node kind to its icon sprite.
///
/// Implementations own the asset pipeline; the widget core only dictates
/// where and when icons are drawn.
pub trait IconProvider {
    /// The 16×16 icon for a node kind.
    fn icon(&self, kind: &str) -> &Sprite;
}

/// Built-in icon provider with procedurally drawn placeholders.
///
/// Every kind resolves to a generic item sprite; the `"move"` kind (used by
/// the position action button) gets a four-arrow cross instead.
#[derive(Debug, Clone)]
pub struct PlaceholderIcons {
    item: Sprite,
    arrows: Sprite,
}

impl PlaceholderIcons {
    /// Build the placeholder sprites.
    #[must_use]
    pub fn new() -> Self {
        Self {
            item: generic_item_sprite(),
            arrows: move_arrows_sprite(),
        }
    }
}

impl Default for PlaceholderIcons {
    fn default() -> Self {
        Self::new()
    }
}

impl IconProvider for PlaceholderIcons {
    fn icon(&self, kind: &str) -> &Sprite {
        match kind {
            "move" => &self.arrows,
            _ => &self.item,
        }
    }
}

/// A boxed outline with a diagonal accent, standing in for item textures.
fn generic_item_sprite() -> Sprite {
    let edge = Color::rgb(48, 48, 48);
    let fill = Color::rgb(175, 135, 95);
    let shine = Color::rgb(215, 175, 135);
    Sprite::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let border = x == 0 || y == 0 || x == ICON_SIZE - 1 || y == ICON_SIZE - 1;
        if border {
            edge
        } else if x == y || x == y + 1 {
            shine
        } else {
            fill
        }
    })
}

/// Four arrows pointing outward from the icon center.
fn move_arrows_sprite() -> Sprite {
    let ink = Color::rgb(32, 32, 32);
    let mid = ICON_SIZE / 2;
    let mut sprite = Sprite::new(ICON_SIZE, ICON_SIZE);
    for d in 1..ICON_SIZE - 1 {
        sprite.set(d, mid, ink);
        sprite.set(d, mid - 1, ink);
        sprite.set(mid, d, ink);
        sprite.set(mid - 1, d, ink);
    }
    // Arrowheads
    for d in 2..5 {
        sprite.set(d, mid - d, ink);
        sprite.set(d, mid + d - 1, ink);
        sprite.set(ICON_SIZE - 1 - d, mid - d, ink);
        sprite.set(ICON_SIZE - 1 - d, mid + d - 1, ink);
        sprite.set(mid - d, d, ink);
        sprite.set(mid + d - 1, d, ink);
        sprite.set(mid - d, ICON_SIZE - 1 - d, ink);
        sprite.set(mid + d - 1, ICON_SIZE - 1 - d, ink);
    }
    sprite
}

#[cfg(test)]
mod tests {
    use super::{ICON_SIZE, IconProvider, PlaceholderIcons, Sprite};
    use crate::color::Color;

    #[test]
    fn new_sprite_is_transparent() {
        let sprite = Sprite::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                assert!(sprite.get(x, y).is_transparent());
            }
        }
    }

    #[test]
    fn set_and_get() {
        let mut sprite = Sprite::new(3, 3);
        sprite.set(1, 2, Color::GREEN);
        assert_eq!(sprite.get(1, 2), Color::GREEN);
        assert!(sprite.get(0, 0).is_transparent());
    }

    #[test]
    fn out_of_bounds_reads_are_transparent() {
        let mut sprite = Sprite::new(2, 2);
        sprite.set(0, 0, Color::BLACK);
        assert!(sprite.get(-1, 0).is_transparent());
        assert!(sprite.get(0, 2).is_transparent());
        assert!(sprite.get(2, 0).is_transparent());
    }

    #[test]
    fn out_of_bounds_writes_are_discarded() {
        let mut sprite = Sprite::new(2, 2);
        sprite.set(5, 5, Color::BLACK);
        sprite.set(-1, 0, Color::BLACK);
        for y in 0..2 {
            for x in 0..2 {
                assert!(sprite.get(x, y).is_transparent());
            }
        }
    }

    #[test]
    fn from_fn_evaluates_every_pixel() {
        let sprite = Sprite::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Color::BLACK
            } else {
                Color::WHITE
            }
        });
        assert_eq!(sprite.get(0, 0), Color::BLACK);
        assert_eq!(sprite.get(1, 0), Color::WHITE);
        assert_eq!(sprite.get(0, 1), Color::WHITE);
        assert_eq!(sprite.get(1, 1), Color::BLACK);
    }

    #[test]
    #[should_panic(expected = "width must be > 0")]
    fn zero_width_panics() {
        let _ = Sprite::new(0, 4);
    }

    // --- Placeholder provider ---

    #[test]
    fn placeholder_icons_are_icon_sized() {
        let icons = PlaceholderIcons::new();
        for kind in ["entity", "seat", "move", "anything"] {
            let sprite = icons.icon(kind);
            assert_eq!(sprite.width(), ICON_SIZE);
            assert_eq!(sprite.height(), ICON_SIZE);
        }
    }

    #[test]
    fn unknown_kinds_share_the_generic_sprite() {
        let icons = PlaceholderIcons::new();
        assert_eq!(icons.icon("entity"), icons.icon("no-such-kind"));
        assert_ne!(icons.icon("move"), icons.icon("entity"));
    }

    #[test]
    fn generic_sprite_is_opaque() {
        let icons = PlaceholderIcons::new();
        let sprite = icons.icon("entity");
        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                assert!(!sprite.get(x, y).is_transparent(), "pixel {x},{y}");
            }
        }
    }

    #[test]
    fn move_sprite_keeps_transparent_corners() {
        let icons = PlaceholderIcons::new();
        let sprite = icons.icon("move");
        assert!(sprite.get(0, 0).is_transparent());
        assert!(sprite.get(ICON_SIZE - 1, ICON_SIZE - 1).is_transparent());
        // The cross itself is drawn.
        assert!(!sprite.get(ICON_SIZE / 2, 1).is_transparent());
    }
}
