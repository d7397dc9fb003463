//! The [`Board`] type — an owned 2D grid of [`Tile`]s.
//!
//! A board is parsed from text, one line per row:
//!
//! ```text
//! A....
//! ..^..
//! ..>..
//! ..X..
//! X....
//! ```
//!
//! Unlike a shared grid view, cloning a `Board` copies its cells. Solving
//! always works on such a copy, so the caller's board is never touched.

use std::fmt;

use crate::error::BoardError;
use crate::geom::{Point, Range};
use crate::tile::Tile;

/// How to treat characters outside the board alphabet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SymbolPolicy {
    /// Read unknown symbols as [`Tile::Empty`] and log a warning.
    #[default]
    Lenient,
    /// Reject unknown symbols with [`BoardError::UnrecognizedSymbol`].
    Strict,
}

/// A rectangular board with exactly one agent start cell.
///
/// With the `serde` feature a board is stored as its row strings plus the
/// agent start, and deserializing runs the same checks as parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardRows", into = "BoardRows")
)]
pub struct Board {
    cells: Vec<Tile>,
    bounds: Range,
    agent: Point,
}

/// Cells read from rows, before the agent rule is applied.
struct Scan {
    cells: Vec<Tile>,
    bounds: Range,
    agent: Option<Point>,
}

/// Board dimensions as coordinates.
fn dims(rows: usize, cols: usize) -> Result<(i32, i32), BoardError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(h), Ok(w)) => Ok((h, w)),
        _ => Err(BoardError::TooLarge { rows, cols }),
    }
}

impl Board {
    /// Parse a board from text with [`SymbolPolicy::Lenient`].
    ///
    /// Empty lines before the first row and after the last one are skipped.
    /// Every other line is a row, whitespace included.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        Self::parse_with(s, SymbolPolicy::default())
    }

    /// Parse a board from text using the given symbol policy.
    pub fn parse_with(s: &str, policy: SymbolPolicy) -> Result<Self, BoardError> {
        let lines: Vec<&str> = s
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
            return Err(BoardError::Empty);
        };
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        Self::from_rows_with(&lines[first..=last], policy)
    }

    /// Build a board from row strings with [`SymbolPolicy::Lenient`].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        Self::from_rows_with(rows, SymbolPolicy::default())
    }

    /// Build a board from row strings using the given symbol policy.
    pub fn from_rows_with<S: AsRef<str>>(
        rows: &[S],
        policy: SymbolPolicy,
    ) -> Result<Self, BoardError> {
        let scan = Self::scan(rows, policy)?;
        let agent = scan.agent.ok_or(BoardError::MissingAgent)?;
        Ok(Self {
            cells: scan.cells,
            bounds: scan.bounds,
            agent,
        })
    }

    /// Rebuild a board from rows and a recorded agent start.
    ///
    /// Unknown symbols are rejected. The rows may come from an already
    /// marked board, where the agent cell reads `*`; otherwise the single
    /// `A` must sit at `agent`.
    pub fn from_parts<S: AsRef<str>>(rows: &[S], agent: Point) -> Result<Self, BoardError> {
        let scan = Self::scan(rows, SymbolPolicy::Strict)?;
        let board = Self {
            cells: scan.cells,
            bounds: scan.bounds,
            agent,
        };
        match scan.agent {
            Some(found) if found == agent => Ok(board),
            Some(found) => Err(BoardError::AgentMismatch {
                recorded: agent,
                found,
            }),
            None if board.at(agent) == Some(Tile::Observed) => Ok(board),
            None => Err(BoardError::MissingAgent),
        }
    }

    fn scan<S: AsRef<str>>(rows: &[S], policy: SymbolPolicy) -> Result<Scan, BoardError> {
        let width = match rows.first() {
            Some(r) => r.as_ref().chars().count(),
            None => return Err(BoardError::Empty),
        };
        if width == 0 {
            return Err(BoardError::Empty);
        }
        let (h, w) = dims(rows.len(), width)?;

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut agent: Option<Point> = None;

        for ((y, row), py) in rows.iter().enumerate().zip(0..h) {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(BoardError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (ch, px) in row.chars().zip(0..w) {
                let pos = Point::at(py, px);
                let tile = match (Tile::from_symbol(ch), policy) {
                    (Some(t), _) => t,
                    (None, SymbolPolicy::Lenient) => {
                        log::warn!("unrecognized symbol {ch:?} at {pos}, reading it as empty");
                        Tile::Empty
                    }
                    (None, SymbolPolicy::Strict) => {
                        return Err(BoardError::UnrecognizedSymbol { ch, pos });
                    }
                };
                if tile == Tile::Agent {
                    if let Some(first) = agent {
                        return Err(BoardError::MultipleAgents { first, second: pos });
                    }
                    agent = Some(pos);
                }
                cells.push(tile);
            }
        }

        Ok(Scan {
            cells,
            bounds: Range::new(0, 0, w, h),
            agent,
        })
    }

    /// The bounding range (rows × columns).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (x = columns, y = rows).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The agent's start cell.
    #[inline]
    pub fn agent(&self) -> Point {
        self.agent
    }

    /// The goal cell: the bottom-right corner, whatever its tile.
    #[inline]
    pub fn goal(&self) -> Point {
        self.bounds.max.shift(-1, -1)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.cols() + p.x as usize)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    ///
    /// The recorded agent position is not updated; it always names the
    /// start cell the board was built with.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.cells[i] = tile;
        }
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Count how many cells equal the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Row `y` rendered as symbols.
    pub fn row_string(&self, y: usize) -> String {
        let w = self.cols();
        self.cells[y * w..(y + 1) * w]
            .iter()
            .map(|t| t.symbol())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            if y > 0 {
                writeln!(f)?;
            }
            f.write_str(&self.row_string(y))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Serialized form of a [`Board`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardRows {
    rows: Vec<String>,
    agent: Point,
}

#[cfg(feature = "serde")]
impl From<Board> for BoardRows {
    fn from(b: Board) -> Self {
        Self {
            rows: (0..b.rows()).map(|y| b.row_string(y)).collect(),
            agent: b.agent,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRows> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRows) -> Result<Self, Self::Error> {
        Board::from_parts(&repr.rows, repr.agent)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::parse("A.<\nX.v").unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn marked_board_round_trip() {
        let mut b = Board::parse("A.<\nX.v").unwrap();
        b.set(Point::at(0, 0), Tile::Observed);
        b.set(Point::at(0, 1), Tile::Observed);
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert_eq!(back.agent(), Point::at(0, 0));
    }

    #[test]
    fn stored_as_rows() {
        let b = Board::parse("A.\n.X").unwrap();
        let value = serde_json::to_value(&b).unwrap();
        assert_eq!(value["rows"], serde_json::json!(["A.", ".X"]));
        assert_eq!(value["agent"], serde_json::json!({ "x": 0, "y": 0 }));
    }

    #[test]
    fn invalid_input_is_rejected() {
        // Fewer cells than the rows describe.
        let cells_and_bounds = r#"{"cells":["Agent"],"bounds":{"min":{"x":0,"y":0},"max":{"x":3,"y":3}},"agent":{"x":0,"y":0}}"#;
        assert!(serde_json::from_str::<Board>(cells_and_bounds).is_err());

        let ragged = r#"{"rows":["A..",".."],"agent":{"x":0,"y":0}}"#;
        assert!(serde_json::from_str::<Board>(ragged).is_err());

        let agent_outside = r#"{"rows":["..","*."],"agent":{"x":9,"y":9}}"#;
        assert!(serde_json::from_str::<Board>(agent_outside).is_err());

        let agent_moved = r#"{"rows":["A.",".."],"agent":{"x":1,"y":1}}"#;
        let err = serde_json::from_str::<Board>(agent_moved).unwrap_err();
        assert!(err.to_string().contains("agent recorded at (1, 1)"));
    }

    #[test]
    fn policy_snake_case() {
        let json = serde_json::to_string(&SymbolPolicy::Strict).unwrap();
        assert_eq!(json, "\"strict\"");
    }
}
