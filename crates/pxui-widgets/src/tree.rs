#![forbid(unsafe_code)]

//! The attachment tree.
//!
//! One [`Tree`] owns every node of a recursively-nested configuration
//! tree. Nodes live in an arena and are addressed by stable [`NodeId`]s:
//! each node stores a parent id, an ordered list of child ids, its
//! exclusively-owned [`ConfigNode`], the grid cell the container assigned
//! it, and its interaction state.
//!
//! Structural edits never fail; a stale id is a programmer error and
//! panics. The container keeps the symmetry invariant (every non-root node
//! appears in its parent's child list) by only editing through this API.

use pxui_core::config::{ConfigNode, Value};
use pxui_core::geometry::Rect;
use pxui_render::color::Color;
use pxui_render::sprite::IconProvider;
use pxui_render::surface::Surface;

use crate::ancestry::ancestry_marks;
use crate::button::{ActionButton, MenuHost, MenuItem};
use crate::state::{Effect, Effects, InteractionState};

/// Horizontal width of one indentation slot, in pixels.
pub const SLOT_WIDTH: i32 = 17;

/// Height of one node row, in pixels.
pub const ROW_HEIGHT: i32 = 18;

/// Node kind assumed when a record carries no `type` field.
pub const DEFAULT_KIND: &str = "entity";

const TYPE_KEY: &str = "type";
const ATTACHMENTS_KEY: &str = "attachments";
const MOVE_KIND: &str = "move";

const FOCUS_FILL: Color = Color::rgb(220, 220, 220);
const ACTIVE_FILL: Color = Color::rgb(220, 255, 220);
const FOCUS_OUTLINE: Color = Color::BLACK;
const ACTIVE_OUTLINE: Color = Color::GREEN;

/// Stable handle to a node in a [`Tree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena slot index, for diagnostics.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    config: ConfigNode,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    col: i32,
    row: i32,
    state: InteractionState,
    buttons: Vec<ActionButton>,
}

impl Node {
    fn new(config: ConfigNode, parent: Option<NodeId>) -> Self {
        Self {
            config,
            children: Vec::new(),
            parent,
            col: 0,
            row: 0,
            state: InteractionState::Idle,
            buttons: Vec::new(),
        }
    }
}

/// An interactive tree of configuration nodes.
#[derive(Debug)]
pub struct Tree {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
    focused: Option<NodeId>,
}

impl Tree {
    /// Create a tree with a single empty root node.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ConfigNode::new())
    }

    /// Build a tree from a configuration record.
    ///
    /// Nested records under the `attachments` key become child nodes,
    /// recursively; each child exclusively owns its own record from then
    /// on.
    #[must_use]
    pub fn from_config(config: ConfigNode) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
            focused: None,
        };
        tree.root = tree.load(config, None);
        tree
    }

    fn load(&mut self, mut config: ConfigNode, parent: Option<NodeId>) -> NodeId {
        let nested = match config.remove(ATTACHMENTS_KEY) {
            Some(Value::Nodes(nodes)) => nodes,
            Some(other) => {
                // Not a node list; leave the value alone.
                config.set(ATTACHMENTS_KEY, other);
                Vec::new()
            }
            None => Vec::new(),
        };

        let id = self.alloc(Node::new(config, parent));
        for child_config in nested {
            let child = self.load(child_config, Some(id));
            self.node_mut(id).children.push(child);
        }
        id
    }

    /// Rebuild the nested configuration this tree represents.
    ///
    /// The inverse of [`Tree::from_config`]: every node's record is cloned
    /// and its children are stored back under the `attachments` key in
    /// child order.
    #[must_use]
    pub fn to_config(&self) -> ConfigNode {
        self.store(self.root)
    }

    fn store(&self, id: NodeId) -> ConfigNode {
        let node = self.node(id);
        let mut config = node.config.clone();
        for &child in &node.children {
            config.push_node(ATTACHMENTS_KEY, self.store(child));
        }
        config
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("stale node id")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("stale node id")
    }

    // --- Structure ---

    /// The root node. Always present.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// A tree always has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether an id refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.get(id.0).is_some_and(Option::is_some)
    }

    /// Append a new empty child to a node and return its id.
    ///
    /// The caller (container) is responsible for re-running the layout
    /// pass afterwards.
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = self.alloc(Node::new(ConfigNode::new(), Some(parent)));
        self.node_mut(parent).children.push(id);
        #[cfg(feature = "tracing")]
        tracing::trace!(parent = parent.index(), child = id.index(), "add child");
        id
    }

    /// Remove a node and its whole subtree.
    ///
    /// Any activated node in the subtree is deactivated first so its
    /// transient buttons are released deterministically; the resulting
    /// effects are returned for the caller to execute.
    ///
    /// # Panics
    ///
    /// Panics when asked to remove the root.
    pub fn remove(&mut self, id: NodeId) -> Effects {
        let parent = self.node(id).parent.expect("the root cannot be removed");

        let mut effects = Effects::new();
        let subtree = self.collect_subtree(id);
        for &doomed in &subtree {
            if self.focused == Some(doomed) {
                self.focused = None;
            }
            effects.extend(self.apply(doomed, InteractionState::blur));
        }

        self.node_mut(parent).children.retain(|&child| child != id);
        for doomed in subtree {
            self.slots[doomed.0] = None;
            self.free.push(doomed.0);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.index(), "removed subtree");
        effects
    }

    fn collect_subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = vec![id];
        let mut cursor = 0;
        while cursor < out.len() {
            out.extend(self.node(out[cursor]).children.iter().copied());
            cursor += 1;
        }
        out
    }

    /// The parent of a node; `None` only for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The ordered children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Whether a node is the last entry in its parent's child list.
    ///
    /// The root has no siblings and counts as last.
    #[must_use]
    pub fn is_last_child(&self, id: NodeId) -> bool {
        match self.node(id).parent {
            Some(parent) => self.node(parent).children.last() == Some(&id),
            None => true,
        }
    }

    /// All live node ids in depth-first order from the root.
    #[must_use]
    pub fn depth_first_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        self.walk(self.root, &mut out);
        out
    }

    fn walk(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in &self.node(id).children {
            self.walk(child, out);
        }
    }

    // --- Configuration access ---

    /// The configuration record backing a node.
    #[must_use]
    pub fn config(&self, id: NodeId) -> &ConfigNode {
        &self.node(id).config
    }

    /// Mutable access to a node's configuration record.
    pub fn config_mut(&mut self, id: NodeId) -> &mut ConfigNode {
        &mut self.node_mut(id).config
    }

    /// The node's configured kind (its `type` field).
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &str {
        self.node(id).config.str_or(TYPE_KEY, DEFAULT_KIND)
    }

    /// Set the node's kind.
    pub fn set_kind(&mut self, id: NodeId, kind: &str) {
        self.node_mut(id).config.set(TYPE_KEY, kind);
    }

    // --- Layout ---

    /// Overwrite the cached grid cell used for rendering.
    ///
    /// Pure data mutation; the caller is trusted to keep a child's row
    /// strictly greater than its parent's.
    pub fn set_cell(&mut self, id: NodeId, col: i32, row: i32) {
        let node = self.node_mut(id);
        node.col = col;
        node.row = row;
    }

    /// The cached `(column, row)` grid cell of a node.
    #[must_use]
    pub fn cell(&self, id: NodeId) -> (i32, i32) {
        let node = self.node(id);
        (node.col, node.row)
    }

    /// Assign grid cells to every node: column is depth, row is the
    /// depth-first visit index.
    pub fn layout(&mut self) {
        let mut row = 0;
        self.layout_node(self.root, 0, &mut row);
        #[cfg(feature = "tracing")]
        tracing::trace!(rows = row, "layout pass");
    }

    fn layout_node(&mut self, id: NodeId, depth: i32, row: &mut i32) {
        self.set_cell(id, depth, *row);
        *row += 1;
        let children = self.node(id).children.clone();
        for child in children {
            self.layout_node(child, depth + 1, row);
        }
    }

    // --- Focus / activation ---

    /// The currently focused node, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// The interaction state of a node.
    #[must_use]
    pub fn state(&self, id: NodeId) -> InteractionState {
        self.node(id).state
    }

    /// The transient action buttons of a node. Empty unless activated.
    #[must_use]
    pub fn buttons(&self, id: NodeId) -> &[ActionButton] {
        &self.node(id).buttons
    }

    /// Move focus to a node, blurring whichever node held it before.
    ///
    /// Effects from both the blur and the focus are returned in order.
    pub fn focus(&mut self, id: NodeId) -> Effects {
        let mut effects = Effects::new();
        if self.focused == Some(id) {
            return effects;
        }
        if let Some(prev) = self.focused.take() {
            effects.extend(self.apply(prev, InteractionState::blur));
        }
        effects.extend(self.apply(id, InteractionState::focus));
        self.focused = Some(id);
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.index(), "focus");
        effects
    }

    /// Activate a focused node, revealing its action buttons.
    pub fn activate(&mut self, id: NodeId) -> Effects {
        self.apply(id, InteractionState::activate)
    }

    /// Deactivate a node, destroying its action buttons.
    pub fn deactivate(&mut self, id: NodeId) -> Effects {
        self.apply(id, InteractionState::deactivate)
    }

    /// Take focus away from a node entirely.
    pub fn blur(&mut self, id: NodeId) -> Effects {
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.apply(id, InteractionState::blur)
    }

    /// Run one state transition and execute its node-local effects.
    ///
    /// Button spawning/clearing is interpreted here because buttons belong
    /// to the node; sound cues are returned untouched for the caller.
    fn apply(
        &mut self,
        id: NodeId,
        transition: fn(InteractionState) -> (InteractionState, Effects),
    ) -> Effects {
        let (next, effects) = transition(self.node(id).state);
        self.node_mut(id).state = next;
        for effect in &effects {
            match effect {
                Effect::SpawnButtons => self.spawn_buttons(id),
                Effect::ClearButtons => self.node_mut(id).buttons.clear(),
                Effect::PlaySound(_) => {}
            }
        }
        effects
    }

    fn spawn_buttons(&mut self, id: NodeId) {
        let px = self.node(id).col * SLOT_WIDTH + 1;
        let kind = self.kind(id).to_owned();
        self.node_mut(id).buttons = vec![
            ActionButton {
                icon_kind: kind,
                x: px,
                y: 1,
                menu: MenuItem::Appearance,
            },
            ActionButton {
                icon_kind: MOVE_KIND.to_owned(),
                x: px + SLOT_WIDTH,
                y: 1,
                menu: MenuItem::Position,
            },
        ];
    }

    /// Dispatch a click on one of a node's action buttons.
    ///
    /// Opens the button's menu through the container and returns `true`,
    /// or returns `false` when the node has no such button (e.g. it is no
    /// longer activated).
    pub fn click_button(&self, id: NodeId, index: usize, host: &mut dyn MenuHost) -> bool {
        match self.node(id).buttons.get(index) {
            Some(button) => {
                host.on_menu_open(id, button.menu);
                true
            }
            None => false,
        }
    }

    // --- Drawing ---

    /// Draw one node into its local view (one row slot, [`ROW_HEIGHT`]
    /// pixels tall).
    ///
    /// Pass order: highlight fill, ancestry marks, icon (suppressed while
    /// activated), highlight outline, action buttons on top.
    pub fn draw_node(
        &self,
        id: NodeId,
        surface: &mut impl Surface,
        icons: &impl IconProvider,
    ) {
        let node = self.node(id);
        let px = node.col * SLOT_WIDTH;
        let slot = Rect::new(px, 0, surface.width() - px, surface.height());

        match node.state {
            InteractionState::Focused => surface.fill_rect(slot, FOCUS_FILL),
            InteractionState::Activated => surface.fill_rect(slot, ACTIVE_FILL),
            InteractionState::Idle => {}
        }

        for mark in ancestry_marks(self, id) {
            surface.pixel(mark.x, mark.y, mark.color);
        }

        if !node.state.is_activated() {
            surface.blit(icons.icon(self.kind(id)), px + 1, 1);
        }

        match node.state {
            InteractionState::Focused => surface.rect_outline(slot, FOCUS_OUTLINE),
            InteractionState::Activated => surface.rect_outline(slot, ACTIVE_OUTLINE),
            InteractionState::Idle => {}
        }

        if node.state.is_activated() {
            for button in &node.buttons {
                surface.blit(icons.icon(&button.icon_kind), button.x, button.y);
            }
        }
    }

    /// Draw the whole tree, one row slot per node in depth-first order.
    pub fn render(&self, surface: &mut impl Surface, icons: &impl IconProvider) {
        let width = surface.width();
        for id in self.depth_first_ids() {
            let (_, row) = self.cell(id);
            let mut view = surface.view(Rect::new(0, row * ROW_HEIGHT, width, ROW_HEIGHT));
            self.draw_node(id, &mut view, icons);
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
