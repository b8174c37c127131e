use gridwalk_core::Point;

use crate::snapshot::{CompletedSearch, SearchSnapshot};

/// Receives progress snapshots while a search runs.
///
/// Called synchronously and in order from inside
/// [`SearchAlgorithm::search`]. Implementations should be cheap and must not
/// start another search on the same strategy.
pub trait SnapshotSink {
    fn on_snapshot(&mut self, snapshot: SearchSnapshot);
}

impl<F: FnMut(SearchSnapshot)> SnapshotSink for F {
    fn on_snapshot(&mut self, snapshot: SearchSnapshot) {
        self(snapshot)
    }
}

impl SnapshotSink for Vec<SearchSnapshot> {
    fn on_snapshot(&mut self, snapshot: SearchSnapshot) {
        self.push(snapshot);
    }
}

/// A grid search strategy.
///
/// Implementors are 4-connected unit-cost searches that differ only in how
/// they order their frontier.
pub trait SearchAlgorithm {
    /// Human-readable name of the strategy.
    fn title(&self) -> &'static str;

    /// Search from `start` to `finish`, emitting snapshots along the way.
    ///
    /// Deterministic for a given pair of points. An unreachable target is
    /// reported through an empty [`CompletedSearch::path`].
    fn search(&mut self, start: Point, finish: Point) -> CompletedSearch;
}
