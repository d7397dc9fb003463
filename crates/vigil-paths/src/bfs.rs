use vigil_core::Point;

use crate::PathRange;
use crate::pathrange::NO_PARENT;
use crate::traits::Pather;

impl PathRange {
    /// Breadth-first search for a shortest path from `from` to `to`.
    ///
    /// Every step costs 1. Nodes are expanded in the order the pather yields
    /// neighbors, so the explored trace is reproducible for a given pather.
    /// The search stops as soon as `to` is dequeued.
    ///
    /// Returns the path, `from` and `to` inclusive, or `None` if `to` cannot
    /// be reached. Either way [`explored`](Self::explored) holds every
    /// dequeued cell in order.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<&[Point]> {
        self.next_generation();
        self.explored.clear();
        self.path.clear();
        self.queue.clear();

        let fi = self.idx(from)?;
        let ti = self.idx(to)?;
        self.seen[fi] = self.generation;
        self.parents[fi] = NO_PARENT;
        self.queue.push_back(fi);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            let cp = self.point(ci);
            self.explored.push(cp);
            if ci == ti {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen[ni] == self.generation {
                    continue;
                }
                self.seen[ni] = self.generation;
                self.parents[ni] = ci;
                self.queue.push_back(ni);
            }
            // Each cell is enqueued at most once.
            debug_assert!(self.queue.len() <= self.rng.len());
        }

        self.nbuf = nbuf;
        log::trace!(
            "bfs {from} -> {to}: explored {} cells, found = {found}",
            self.explored.len()
        );
        if !found {
            return None;
        }

        let mut i = ti;
        loop {
            let p = self.point(i);
            self.path.push(p);
            if i == fi {
                break;
            }
            i = self.parents[i];
        }
        self.path.reverse();
        Some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::cardinal;
    use vigil_core::Range;

    struct Walls {
        rng: Range,
        walls: Vec<Point>,
    }

    impl Walls {
        fn new(rows: usize, cols: usize, walls: &[Point]) -> Self {
            Self {
                rng: Range::with_size(rows, cols),
                walls: walls.to_vec(),
            }
        }
    }

    impl Pather for Walls {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            cardinal(p, buf, |q| self.rng.contains(q) && !self.walls.contains(&q));
        }
    }

    #[test]
    fn open_grid_shortest() {
        let w = Walls::new(5, 5, &[]);
        let mut pr = PathRange::new(w.rng);
        let path = pr.bfs_path(&w, Point::at(0, 0), Point::at(4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Point::at(0, 0));
        assert_eq!(path[8], Point::at(4, 4));
        for pair in path.windows(2) {
            assert_eq!(crate::manhattan(pair[0], pair[1]), 1);
        }
        // Down is expanded first, so the path runs down the first column.
        assert_eq!(path[1], Point::at(1, 0));
        assert_eq!(path[4], Point::at(4, 0));
        assert_eq!(*pr.explored().last().unwrap(), Point::at(4, 4));
    }

    #[test]
    fn explored_starts_with_origin_in_order() {
        let w = Walls::new(3, 3, &[]);
        let mut pr = PathRange::new(w.rng);
        pr.bfs_path(&w, Point::at(1, 1), Point::at(2, 2));
        let explored = pr.explored();
        assert_eq!(
            &explored[..5],
            &[
                Point::at(1, 1),
                Point::at(2, 1),
                Point::at(0, 1),
                Point::at(1, 2),
                Point::at(1, 0),
            ]
        );
    }

    #[test]
    fn unreachable_exhausts_frontier() {
        let w = Walls::new(3, 3, &[Point::at(0, 1), Point::at(1, 0)]);
        let mut pr = PathRange::new(w.rng);
        assert!(pr.bfs_path(&w, Point::at(0, 0), Point::at(2, 2)).is_none());
        assert_eq!(pr.explored(), &[Point::at(0, 0)]);
        assert!(pr.path().is_empty());
    }

    #[test]
    fn detours_around_wall() {
        // . . .
        // X X .
        // . . .
        let w = Walls::new(3, 3, &[Point::at(1, 0), Point::at(1, 1)]);
        let mut pr = PathRange::new(w.rng);
        let path = pr.bfs_path(&w, Point::at(0, 0), Point::at(2, 0)).unwrap();
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn origin_is_target() {
        let w = Walls::new(1, 1, &[]);
        let mut pr = PathRange::new(w.rng);
        let path = pr.bfs_path(&w, Point::ZERO, Point::ZERO).unwrap();
        assert_eq!(path, &[Point::ZERO]);
        assert_eq!(pr.explored(), &[Point::ZERO]);
    }

    #[test]
    fn out_of_range_endpoints() {
        let w = Walls::new(2, 2, &[]);
        let mut pr = PathRange::new(w.rng);
        assert!(pr.bfs_path(&w, Point::at(5, 5), Point::at(1, 1)).is_none());
        assert!(pr.bfs_path(&w, Point::at(0, 0), Point::at(-1, 1)).is_none());
        assert!(pr.explored().is_empty());
    }

    #[test]
    fn repeated_searches_are_identical() {
        let w = Walls::new(6, 4, &[Point::at(2, 1), Point::at(3, 2)]);
        let mut pr = PathRange::new(w.rng);
        let first = pr.bfs_path(&w, Point::at(0, 0), Point::at(5, 3)).unwrap().to_vec();
        let first_explored = pr.explored().to_vec();
        let second = pr.bfs_path(&w, Point::at(0, 0), Point::at(5, 3)).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(first_explored, pr.explored());
    }
}
