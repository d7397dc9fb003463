//! **vigil-core** — core types for guarded-grid traversal.
//!
//! This crate provides the foundational types shared by the *vigil* crates:
//! geometry primitives, board tiles, and the owned [`Board`] parsed from
//! text.

pub mod board;
pub mod error;
pub mod geom;
pub mod tile;

pub use board::{Board, SymbolPolicy};
pub use error::BoardError;
pub use geom::{Point, Range};
pub use tile::{Facing, Tile};
