//! The [`Tile`] type — the state of a single board cell.

use crate::geom::Point;

/// Direction a guard is facing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    Right,
    Up,
    Down,
}

impl Facing {
    /// All four facings.
    pub const ALL: [Facing; 4] = [Facing::Left, Facing::Right, Facing::Up, Facing::Down];

    /// Unit step along this facing.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Facing::Left => Point::new(-1, 0),
            Facing::Right => Point::new(1, 0),
            Facing::Up => Point::new(0, -1),
            Facing::Down => Point::new(0, 1),
        }
    }

    /// The guard symbol for this facing.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Facing::Left => '<',
            Facing::Right => '>',
            Facing::Up => '^',
            Facing::Down => 'v',
        }
    }
}

/// A board cell.
///
/// `Observed` is an overlay produced by guard marking. It only ever replaces
/// `Empty` or `Agent`; walls and guards are never overlaid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Guard(Facing),
    Agent,
    Observed,
}

impl Tile {
    /// Parse a board symbol. Returns `None` for characters outside the
    /// alphabet.
    pub const fn from_symbol(ch: char) -> Option<Tile> {
        Some(match ch {
            '.' => Tile::Empty,
            'X' => Tile::Wall,
            '<' => Tile::Guard(Facing::Left),
            '>' => Tile::Guard(Facing::Right),
            '^' => Tile::Guard(Facing::Up),
            'v' => Tile::Guard(Facing::Down),
            'A' => Tile::Agent,
            '*' => Tile::Observed,
            _ => return None,
        })
    }

    /// The board symbol for this tile.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => 'X',
            Tile::Guard(f) => f.symbol(),
            Tile::Agent => 'A',
            Tile::Observed => '*',
        }
    }

    /// Whether this tile stops a guard's line of sight.
    #[inline]
    pub const fn blocks_sight(self) -> bool {
        matches!(self, Tile::Wall | Tile::Guard(_))
    }

    /// The facing if this tile is a guard.
    #[inline]
    pub const fn facing(self) -> Option<Facing> {
        match self {
            Tile::Guard(f) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for ch in ".X<>^vA*".chars() {
            let t = Tile::from_symbol(ch).unwrap();
            assert_eq!(t.symbol(), ch);
        }
        assert_eq!(Tile::from_symbol('?'), None);
        assert_eq!(Tile::from_symbol(' '), None);
    }

    #[test]
    fn only_walls_and_guards_block() {
        assert!(Tile::Wall.blocks_sight());
        for f in Facing::ALL {
            assert!(Tile::Guard(f).blocks_sight());
        }
        assert!(!Tile::Empty.blocks_sight());
        assert!(!Tile::Agent.blocks_sight());
        assert!(!Tile::Observed.blocks_sight());
    }

    #[test]
    fn facing_deltas() {
        assert_eq!(Facing::Left.delta(), Point::at(0, -1));
        assert_eq!(Facing::Right.delta(), Point::at(0, 1));
        assert_eq!(Facing::Up.delta(), Point::at(-1, 0));
        assert_eq!(Facing::Down.delta(), Point::at(1, 0));
    }
}
