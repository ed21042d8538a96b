#![forbid(unsafe_code)]

//! Transient action buttons.
//!
//! While a node is activated it shows a row of buttons, one per contextual
//! menu. A button is plain data: icon kind, local pixel position, and the
//! menu it opens. Clicks dispatch through a single generic path
//! ([`crate::Tree::click_button`]) to the container's [`MenuHost`], so no
//! per-button callbacks exist.

use crate::tree::NodeId;

/// The contextual menus an action button can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Edit how the node looks.
    Appearance,
    /// Edit where the node sits.
    Position,
}

/// One transient button shown while a node is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    /// Icon kind resolved through the icon provider.
    pub icon_kind: String,
    /// Local x position within the node's bounding box.
    pub x: i32,
    /// Local y position within the node's bounding box.
    pub y: i32,
    /// Menu opened when the button is clicked.
    pub menu: MenuItem,
}

/// Container callback for routing button clicks to an editor surface.
pub trait MenuHost {
    /// Open the given contextual menu for a node.
    fn on_menu_open(&mut self, node: NodeId, item: MenuItem);
}
