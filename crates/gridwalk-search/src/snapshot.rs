use std::ops::Deref;

use gridwalk_core::Point;

/// Exploration state at one instant of a search.
///
/// `visited` is in expansion order and never holds the same point twice.
/// `frontier` is the frontier as it was when the snapshot was taken; some
/// strategies leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSnapshot {
    pub start: Point,
    pub visited: Vec<Point>,
    pub frontier: Vec<Point>,
}

impl SearchSnapshot {
    /// The snapshot taken before anything has been expanded.
    pub fn initial(start: Point, frontier: Vec<Point>) -> Self {
        Self {
            start,
            visited: Vec::new(),
            frontier,
        }
    }
}

/// The final state of a search, with the path it found.
///
/// Derefs to the [`SearchSnapshot`] it extends. `path` runs from `start` to
/// the target, or is empty if the target was never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedSearch {
    pub snapshot: SearchSnapshot,
    pub path: Vec<Point>,
}

impl CompletedSearch {
    /// Whether the target was reached.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps in the path, or `None` when unreachable.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

impl Deref for CompletedSearch {
    type Target = SearchSnapshot;

    fn deref(&self) -> &SearchSnapshot {
        &self.snapshot
    }
}

/// One element of a replay stream: either progress or the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState<'a> {
    InProgress(&'a SearchSnapshot),
    Complete(&'a CompletedSearch),
}

impl<'a> SearchState<'a> {
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, SearchState::Complete(_))
    }

    /// The exploration state, regardless of completion.
    pub fn snapshot(&self) -> &'a SearchSnapshot {
        match *self {
            SearchState::InProgress(s) => s,
            SearchState::Complete(c) => &c.snapshot,
        }
    }

    /// The path, if this is the completed state.
    pub fn path(&self) -> Option<&'a [Point]> {
        match *self {
            SearchState::InProgress(_) => None,
            SearchState::Complete(c) => Some(&c.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(path: Vec<Point>) -> CompletedSearch {
        CompletedSearch {
            snapshot: SearchSnapshot::initial(Point::new(0, 0), vec![]),
            path,
        }
    }

    #[test]
    fn steps_counts_edges_not_nodes() {
        assert_eq!(completed(vec![]).steps(), None);
        assert_eq!(completed(vec![Point::new(0, 0)]).steps(), Some(0));
        let c = completed(vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(c.steps(), Some(1));
        assert!(c.found());
    }

    #[test]
    fn state_exposes_snapshot_and_path() {
        let snap = SearchSnapshot::initial(Point::new(2, 2), vec![Point::new(2, 2)]);
        let done = completed(vec![Point::new(0, 0)]);

        let progress = SearchState::InProgress(&snap);
        assert!(!progress.is_complete());
        assert_eq!(progress.snapshot().frontier, vec![Point::new(2, 2)]);
        assert_eq!(progress.path(), None);

        let finished = SearchState::Complete(&done);
        assert!(finished.is_complete());
        assert_eq!(finished.snapshot().start, Point::new(0, 0));
        assert_eq!(finished.path(), Some(&[Point::new(0, 0)][..]));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn completed_search_round_trip() {
        let c = CompletedSearch {
            snapshot: SearchSnapshot {
                start: Point::new(0, 0),
                visited: vec![Point::new(0, 0)],
                frontier: vec![Point::new(-1, 0), Point::new(0, -1)],
            },
            path: vec![Point::new(0, 0), Point::new(1, 0)],
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: CompletedSearch = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
