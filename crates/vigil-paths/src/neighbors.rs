use vigil_core::Point;

/// Cardinal expansion order: down, up, right, left.
///
/// Search traces depend on this order, so it must not change.
pub const CARDINAL: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Append the cardinal neighbors of `p` to `buf` in [`CARDINAL`] order,
/// keeping only those for which `keep` returns `true`.
#[inline]
pub fn cardinal(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for d in CARDINAL {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}
