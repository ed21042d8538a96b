#![forbid(unsafe_code)]

//! Rendering primitives for the pxui pixel-display toolkit.
//!
//! Everything here works on a small fixed-resolution grid of 8-bit palette
//! pixels: the [`Color`] palette, [`Sprite`] images, and the [`Surface`]
//! contract widgets draw through. [`PixelBuffer`] is the concrete in-memory
//! surface; [`SurfaceView`] carves an offset, clipped window out of any
//! surface so a widget can draw in its own local coordinates.

pub mod color;
pub mod sprite;
pub mod surface;

pub use color::Color;
pub use sprite::{ICON_SIZE, IconProvider, PlaceholderIcons, Sprite};
pub use surface::{PixelBuffer, Surface, SurfaceView};
