#![forbid(unsafe_code)]

//! Core primitives for the pxui pixel-display toolkit.
//!
//! This crate holds the pieces everything else builds on: integer geometry
//! for pixel coordinates and the [`ConfigNode`] record type that widgets
//! read their persistent state from. It knows nothing about rendering.

pub mod config;
pub mod geometry;

pub use config::{ConfigNode, Value};
pub use geometry::Rect;
