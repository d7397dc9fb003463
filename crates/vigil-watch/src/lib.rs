//! Guarded-grid route finding.
//!
//! Stationary guards each watch a straight line of cells in the direction
//! they face. [`WatchMap`] marks those cells on a copy of the board, and
//! [`Solver`] then searches the unwatched cells breadth-first for the
//! shortest route from the agent `A` to the bottom-right corner.
//!
//! ```
//! let sol = vigil_watch::solve(&["A....", "..^..", "..>..", "..X..", "X...."]).unwrap();
//! assert!(sol.reachable);
//! assert_eq!(sol.path_len(), 9);
//! ```

mod config;
mod error;
mod overlay;
mod solve;
mod watch;

pub use config::SolveConfig;
pub use error::SolveError;
pub use overlay::{EXPLORED, GOAL, ROUTE};
pub use solve::{Solution, Solver, is_reachable, solve};
pub use watch::{Guard, WatchMap};
