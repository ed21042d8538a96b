#![forbid(unsafe_code)]

//! Interactive tree widget for small pixel displays.
//!
//! A [`Tree`] holds one node per configuration record, arranged in an
//! arena addressed by [`NodeId`]s. The container assigns each node a grid
//! cell (column and row); nodes render themselves independently from those
//! coordinates alone, reconstructing the ancestry guide pattern with
//! [`ancestry_marks`]. Focus and activation run through a small state
//! machine ([`InteractionState`]) whose transitions return side-effect
//! commands instead of performing them.

pub mod ancestry;
pub mod button;
pub mod state;
pub mod tree;

pub use ancestry::{AncestryMarks, DOT_COLOR, Mark, ancestry_marks};
pub use button::{ActionButton, MenuHost, MenuItem};
pub use state::{Effect, Effects, InteractionState, SoundCue};
pub use tree::{DEFAULT_KIND, NodeId, ROW_HEIGHT, SLOT_WIDTH, Tree};
