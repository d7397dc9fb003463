use vigil_core::Point;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the enterable neighbors of `p` into `buf`, in the order they
    /// should be expanded. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
