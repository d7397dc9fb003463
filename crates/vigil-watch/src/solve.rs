//! Safe-route solving: mark guard sight lines, then search the unwatched
//! cells breadth-first from the agent to the bottom-right goal.

use vigil_core::{Board, Point, Tile};
use vigil_paths::{PathRange, Pather, cardinal};

use crate::config::SolveConfig;
use crate::error::SolveError;
use crate::watch::WatchMap;

/// Outcome of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Whether the goal can be reached without entering a watched cell.
    pub reachable: bool,
    /// Cells dequeued by the search, in order. Empty when the start or goal
    /// is watched, since no search runs.
    pub explored: Vec<Point>,
    /// Shortest route, start and goal inclusive. Empty when unreachable.
    pub path: Vec<Point>,
    /// The working board with watched cells marked.
    pub board: Board,
}

impl Solution {
    /// Number of cells on the route (0 when unreachable).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// The agent's start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.board.agent()
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.board.goal()
    }
}

/// Neighbors the agent may step into: unwatched empty cells, plus the goal
/// whatever its tile.
struct UnobservedPather<'a> {
    board: &'a Board,
    goal: Point,
}

impl Pather for UnobservedPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        cardinal(p, buf, |q| {
            q == self.goal || self.board.at(q) == Some(Tile::Empty)
        });
    }
}

/// Reusable solver. Search buffers are kept between calls; no other state
/// carries over from one solve to the next.
pub struct Solver {
    config: SolveConfig,
    pr: PathRange,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolveConfig::default())
    }
}

impl Solver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolveConfig) -> Self {
        Self {
            config,
            pr: PathRange::new(Default::default()),
        }
    }

    /// The solver configuration.
    #[inline]
    pub fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// Parse row strings and solve.
    pub fn solve<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<Solution, SolveError> {
        let board = Board::from_rows_with(rows, self.config.symbols)?;
        Ok(self.solve_board(&board))
    }

    /// Parse newline-separated text and solve.
    pub fn solve_str(&mut self, s: &str) -> Result<Solution, SolveError> {
        let board = Board::parse_with(s, self.config.symbols)?;
        Ok(self.solve_board(&board))
    }

    /// Solve an already-validated board. The board itself is not modified.
    pub fn solve_board(&mut self, board: &Board) -> Solution {
        let watch = WatchMap::mark(board);
        let start = board.agent();
        let goal = board.goal();

        if watch.is_observed(start) || watch.is_observed(goal) {
            log::debug!("start {start} or goal {goal} is watched, no search");
            return Solution {
                reachable: false,
                explored: Vec::new(),
                path: Vec::new(),
                board: watch.into_board(),
            };
        }

        if self.pr.range() != board.bounds() {
            self.pr.set_range(board.bounds());
        }
        let pather = UnobservedPather {
            board: watch.board(),
            goal,
        };
        let reachable = self.pr.bfs_path(&pather, start, goal).is_some();
        let explored = self.pr.explored().to_vec();
        let path = self.pr.path().to_vec();
        log::debug!(
            "solved {} board from {start}: reachable = {reachable}, explored {}, path {}",
            board.bounds(),
            explored.len(),
            path.len()
        );

        Solution {
            reachable,
            explored,
            path,
            board: watch.into_board(),
        }
    }
}

/// Solve a grid given as row strings, with the default configuration.
pub fn solve<S: AsRef<str>>(rows: &[S]) -> Result<Solution, SolveError> {
    Solver::default().solve(rows)
}

/// Whether the agent can reach the goal unseen.
pub fn is_reachable<S: AsRef<str>>(rows: &[S]) -> Result<bool, SolveError> {
    solve(rows).map(|s| s.reachable)
}
