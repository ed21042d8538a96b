#![forbid(unsafe_code)]

//! pxui public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use pxui_core::config::{ConfigNode, Value};
pub use pxui_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use pxui_render::color::Color;
pub use pxui_render::sprite::{ICON_SIZE, IconProvider, PlaceholderIcons, Sprite};
pub use pxui_render::surface::{PixelBuffer, Surface, SurfaceView};

// --- Widget re-exports -----------------------------------------------------

pub use pxui_widgets::ancestry::{AncestryMarks, DOT_COLOR, Mark, ancestry_marks};
pub use pxui_widgets::button::{ActionButton, MenuHost, MenuItem};
pub use pxui_widgets::state::{Effect, Effects, InteractionState, SoundCue};
pub use pxui_widgets::tree::{DEFAULT_KIND, NodeId, ROW_HEIGHT, SLOT_WIDTH, Tree};

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use crate::{
        Color, ConfigNode, IconProvider, MenuHost, MenuItem, NodeId, PixelBuffer, Rect, Surface,
        Tree,
    };
}
