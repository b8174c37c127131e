use crate::geom::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected unit-cost grid this is both admissible and consistent,
/// and equals the length of a shortest path when there are no obstacles.
/// The result is widened to `u64`, so any two `i32` points have a
/// representable distance.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Whether `a` and `b` are 4-connected neighbours.
#[inline]
pub fn is_adjacent_4(a: Point, b: Point) -> bool {
    manhattan(a, b) == 1
}
