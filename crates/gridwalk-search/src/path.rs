use gridwalk_core::{Point, is_adjacent_4};

use crate::arena::Arena;

/// Walk backreferences from `goal` to the root and return the points in
/// start-to-goal order.
///
/// A root entry yields a single-point path.
pub(crate) fn reconstruct(arena: &Arena, goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(idx) = cur {
        let entry = &arena[idx];
        path.push(entry.pos);
        cur = entry.previous;
    }
    path.reverse();
    path
}

/// Whether `path` is a 4-connected walk from `start` to `finish`.
///
/// An empty path is never valid; callers treat it as "unreachable".
pub fn is_valid_path(path: &[Point], start: Point, finish: Point) -> bool {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) if first == start && last == finish => {
            path.windows(2).all(|w| is_adjacent_4(w[0], w[1]))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_single_node() {
        let mut arena = Arena::new();
        let root = arena.push(Point::new(4, 4), None);
        assert_eq!(reconstruct(&arena, root), vec![Point::new(4, 4)]);
    }

    #[test]
    fn reconstruct_follows_parents_not_insertion_order() {
        let mut arena = Arena::new();
        let root = arena.push(Point::new(0, 0), None);
        let _left = arena.push(Point::new(-1, 0), Some(root));
        let right = arena.push(Point::new(1, 0), Some(root));
        let _stray = arena.push(Point::new(0, 1), Some(root));
        let goal = arena.push(Point::new(2, 0), Some(right));
        assert_eq!(
            reconstruct(&arena, goal),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn valid_path_checks_endpoints_and_steps() {
        let s = Point::new(0, 0);
        let f = Point::new(1, 1);
        assert!(is_valid_path(&[s, Point::new(1, 0), f], s, f));
        assert!(is_valid_path(&[s], s, s));
        assert!(!is_valid_path(&[], s, f));
        assert!(!is_valid_path(&[s, f], s, f)); // diagonal
        assert!(!is_valid_path(&[Point::new(1, 0), f], s, f));
        assert!(!is_valid_path(&[s, Point::new(1, 0)], s, f));
    }
}
