use std::collections::VecDeque;

use vigil_core::{Point, Range};

/// Sentinel parent index for the search origin and unreached cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for path searches on a grid rectangle.
///
/// `PathRange` owns the search caches (visited marks, parent links, queue,
/// explored trace) so that repeated searches over boards of the same size
/// incur no allocations after the first use.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A cell is visited in the current search when `seen[i] == generation`.
    pub(crate) seen: Vec<u32>,
    pub(crate) generation: u32,
    pub(crate) parents: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    // results of the last search
    pub(crate) explored: Vec<Point>,
    pub(crate) path: Vec<Point>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            seen: vec![0; len],
            generation: 0,
            parents: vec![NO_PARENT; len],
            queue: VecDeque::with_capacity(len),
            explored: Vec::new(),
            path: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity only the generation
    /// counter is bumped. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.explored.clear();
        self.path.clear();

        if new_len <= self.seen.len() {
            self.next_generation();
            return;
        }

        self.seen.clear();
        self.seen.resize(new_len, 0);
        self.generation = 0;
        self.parents.clear();
        self.parents.resize(new_len, NO_PARENT);
        self.queue = VecDeque::with_capacity(new_len);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Cells dequeued by the last search, in dequeue order.
    #[inline]
    pub fn explored(&self) -> &[Point] {
        &self.explored
    }

    /// Path found by the last search, origin and target inclusive. Empty
    /// when the target was not reached.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Start a fresh visited set.
    pub(crate) fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale marks could alias the new generation.
            self.seen.iter_mut().for_each(|s| *s = 0);
            self.generation = 1;
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
