//! Guard line-of-sight marking.
//!
//! Every guard watches a straight ray in the direction it faces. The ray
//! advances one cell at a time and stops at the board edge, at a wall, or at
//! another guard; the blocking cell itself is not marked. Every cell the ray
//! passes over becomes [`Tile::Observed`], including the agent's own cell.
//!
//! Marking only ever turns cells into `Observed` and rays are never stopped
//! by `Observed` cells, so the result does not depend on the order guards are
//! processed in, and marking an already-marked board changes nothing.

use vigil_core::{Board, Facing, Point, Tile};

/// A guard located on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guard {
    pub pos: Point,
    pub facing: Facing,
    /// Number of cells covered by this guard's ray.
    pub reach: usize,
}

/// A board with every guard's line of sight marked.
#[derive(Debug, Clone)]
pub struct WatchMap {
    board: Board,
    guards: Vec<Guard>,
}

impl WatchMap {
    /// Mark a copy of `board`. The given board is left untouched.
    pub fn mark(board: &Board) -> Self {
        Self::new(board.clone())
    }

    /// Mark `board` in place, taking ownership of it as the working copy.
    pub fn new(board: Board) -> Self {
        let mut wm = Self {
            guards: board
                .iter()
                .filter_map(|(pos, t)| {
                    t.facing().map(|facing| Guard {
                        pos,
                        facing,
                        reach: 0,
                    })
                })
                .collect(),
            board,
        };
        for i in 0..wm.guards.len() {
            let guard = wm.guards[i];
            wm.guards[i].reach = wm.cast(guard);
        }
        log::debug!(
            "marked {} board: {} guards, {} observed cells",
            wm.board.bounds(),
            wm.guards.len(),
            wm.board.count(Tile::Observed)
        );
        wm
    }

    /// Walk one guard's ray, marking cells until something blocks it.
    fn cast(&mut self, guard: Guard) -> usize {
        let step = guard.facing.delta();
        let mut p = guard.pos + step;
        let mut reach = 0;
        while let Some(t) = self.board.at(p) {
            if t.blocks_sight() {
                break;
            }
            self.board.set(p, Tile::Observed);
            reach += 1;
            p = p + step;
        }
        log::trace!("guard {} facing {:?} covers {reach} cells", guard.pos, guard.facing);
        reach
    }

    /// The marked board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the map, returning the marked board.
    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// The agent's start cell, which may itself be watched.
    #[inline]
    pub fn agent(&self) -> Point {
        self.board.agent()
    }

    /// Guards in row-major order.
    #[inline]
    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    /// Whether `p` is watched by some guard.
    #[inline]
    pub fn is_observed(&self, p: Point) -> bool {
        self.board.at(p) == Some(Tile::Observed)
    }

    /// Observed cells in row-major order.
    pub fn observed(&self) -> impl Iterator<Item = Point> + '_ {
        self.board
            .iter()
            .filter(|&(_, t)| t == Tile::Observed)
            .map(|(p, _)| p)
    }
}
