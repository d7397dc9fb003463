//! Breadth-first path search on 2D grid boards.
//!
//! All searches run through [`PathRange`], which owns and reuses its internal
//! caches so that repeated queries incur zero allocations after warm-up.
//! Neighbor enumeration is supplied by a [`Pather`]; [`cardinal`] helps
//! implement one with the fixed [`CARDINAL`] expansion order.

mod bfs;
mod distance;
mod neighbors;
mod pathrange;
mod traits;

pub use distance::manhattan;
pub use neighbors::{CARDINAL, cardinal};
pub use pathrange::PathRange;
pub use traits::Pather;
