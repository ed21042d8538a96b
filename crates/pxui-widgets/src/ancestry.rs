#![forbid(unsafe_code)]

//! Ancestry guide reconstruction.
//!
//! A node's dotted guide pattern — the vertical trunk up to its parent,
//! the elbow into its own row, and the continuation lines for every
//! ancestor whose sibling chain isn't exhausted — is reconstructed from
//! nothing but stored `(column, row)` cells and child-list positions. No
//! line segments are kept anywhere.
//!
//! [`ancestry_marks`] returns the pattern as a lazy sequence of pixel
//! instructions so the algorithm can be tested without a draw surface.
//! Emission order is part of the contract: when two dots coincide, the
//! later one wins on the surface.
//!
//! Dotted lines run on a 2-pixel pitch, so a line's phase depends on the
//! row distance it spans. Each segment therefore carries a parity
//! correction: the local trunk and elbow use the row distance to the
//! immediate parent, while an ancestor's continuation line uses the
//! distance to *that ancestor's own* parent. The two bases differ on
//! purpose; they keep each ancestor's line phase-consistent independently
//! even when rows are skipped by collapsed subtrees elsewhere.

use pxui_render::color::Color;

use crate::tree::{NodeId, SLOT_WIDTH, Tree};

/// Color of every guide dot.
pub const DOT_COLOR: Color = Color::rgb(64, 64, 64);

/// One pixel of the ancestry guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Local x position within the node's bounding box. May be negative
    /// when an invariant is broken; the surface clips.
    pub x: i32,
    /// Local y position within the node's bounding box.
    pub y: i32,
    /// Dot color.
    pub color: Color,
}

/// The ancestry guide of a node as a lazy sequence of pixel marks.
///
/// The root yields nothing. For any other node the sequence is, in order:
/// the 5-dot trunk toward the parent row, the 4-dot elbow into this row,
/// 4 continuation dots when the node is not its parent's last child, and
/// then one full 9-dot run per ancestor that is not the last child of its
/// own parent, walking upward one column slot at a time.
#[must_use]
pub fn ancestry_marks<'t>(tree: &'t Tree, id: NodeId) -> AncestryMarks<'t> {
    let (col, row) = tree.cell(id);
    let Some(parent) = tree.parent(id) else {
        return AncestryMarks {
            tree,
            row,
            trunk_x: 0,
            dot_offset: 0,
            tail: false,
            parent: None,
            phase: Phase::Done,
        };
    };

    let (_, parent_row) = tree.cell(parent);
    debug_assert!(
        row > parent_row,
        "child row must be strictly greater than its parent's"
    );

    let px = col * SLOT_WIDTH;
    AncestryMarks {
        tree,
        row,
        trunk_x: px - SLOT_WIDTH + 8,
        dot_offset: (row - parent_row) & 1,
        tail: !tree.is_last_child(id),
        parent: Some(parent),
        phase: Phase::Trunk(0),
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Vertical trunk toward the parent row; dot index 0..5.
    Trunk(i32),
    /// Horizontal elbow into this node's row; dot index 1..5.
    Elbow(i32),
    /// Downward continuation toward the next sibling; dot index 5..9.
    Tail(i32),
    /// Examining `cursor` at column position `x` during the ancestor walk.
    Walk { cursor: NodeId, x: i32 },
    /// Emitting a 9-dot continuation run for an ancestor level; `cursor`
    /// is already the next node to examine.
    Run {
        cursor: NodeId,
        x: i32,
        offset: i32,
        n: i32,
    },
    Done,
}

/// Iterator returned by [`ancestry_marks`]. Finite, one pass per draw.
#[derive(Debug)]
pub struct AncestryMarks<'t> {
    tree: &'t Tree,
    /// Row of the node being drawn; every parity correction is relative
    /// to this.
    row: i32,
    trunk_x: i32,
    dot_offset: i32,
    tail: bool,
    parent: Option<NodeId>,
    phase: Phase,
}

impl AncestryMarks<'_> {
    const fn dot(x: i32, y: i32) -> Mark {
        Mark {
            x,
            y,
            color: DOT_COLOR,
        }
    }

    fn start_walk(&self) -> Phase {
        match self.parent {
            Some(parent) => Phase::Walk {
                cursor: parent,
                x: self.trunk_x - SLOT_WIDTH,
            },
            None => Phase::Done,
        }
    }
}

impl Iterator for AncestryMarks<'_> {
    type Item = Mark;

    fn next(&mut self) -> Option<Mark> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Trunk(n) => {
                    if n < 5 {
                        self.phase = Phase::Trunk(n + 1);
                        return Some(Self::dot(self.trunk_x, 2 * n + self.dot_offset));
                    }
                    self.phase = Phase::Elbow(1);
                }
                Phase::Elbow(n) => {
                    if n < 5 {
                        self.phase = Phase::Elbow(n + 1);
                        return Some(Self::dot(self.trunk_x + 2 * n, 8 + self.dot_offset));
                    }
                    self.phase = if self.tail {
                        Phase::Tail(5)
                    } else {
                        self.start_walk()
                    };
                }
                Phase::Tail(n) => {
                    if n < 9 {
                        self.phase = Phase::Tail(n + 1);
                        return Some(Self::dot(self.trunk_x, 2 * n + self.dot_offset));
                    }
                    self.phase = self.start_walk();
                }
                Phase::Walk { cursor, x } => match self.tree.parent(cursor) {
                    None => self.phase = Phase::Done,
                    Some(above) => {
                        if self.tree.is_last_child(cursor) {
                            self.phase = Phase::Walk {
                                cursor: above,
                                x: x - SLOT_WIDTH,
                            };
                        } else {
                            let (_, above_row) = self.tree.cell(above);
                            self.phase = Phase::Run {
                                cursor: above,
                                x,
                                offset: (self.row - above_row) & 1,
                                n: 0,
                            };
                        }
                    }
                },
                Phase::Run {
                    cursor,
                    x,
                    offset,
                    n,
                } => {
                    if n < 9 {
                        self.phase = Phase::Run {
                            cursor,
                            x,
                            offset,
                            n: n + 1,
                        };
                        return Some(Self::dot(x, 2 * n + offset));
                    }
                    self.phase = Phase::Walk {
                        cursor,
                        x: x - SLOT_WIDTH,
                    };
                }
            }
        }
    }
}

impl std::iter::FusedIterator for AncestryMarks<'_> {}
