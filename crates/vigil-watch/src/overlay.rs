//! Plain-text overlay of a [`Solution`] for terminals and logs.
//!
//! Drawn in layers over the marked board: explored cells as `o`, then route
//! cells as `#`, then the agent `A` and the goal `G` on top.

use vigil_core::Point;

use crate::solve::Solution;

/// Explored, off-route cell.
pub const EXPLORED: char = 'o';
/// Route cell.
pub const ROUTE: char = '#';
/// Goal cell.
pub const GOAL: char = 'G';

impl Solution {
    /// Render the marked board with the search trace and route overlaid.
    ///
    /// Points outside the board are skipped.
    pub fn overlay(&self) -> String {
        let cols = self.board.cols();
        let mut cells: Vec<char> = self.board.iter().map(|(_, t)| t.symbol()).collect();
        let mut put = |p: Point, ch: char| {
            if self.board.contains(p) {
                cells[p.row() as usize * cols + p.col() as usize] = ch;
            }
        };

        for &p in &self.explored {
            put(p, EXPLORED);
        }
        for &p in &self.path {
            put(p, ROUTE);
        }
        put(self.goal(), GOAL);
        put(self.start(), 'A');

        cells
            .chunks(cols)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
