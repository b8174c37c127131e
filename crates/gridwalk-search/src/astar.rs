use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridwalk_core::{Point, manhattan};

use crate::algorithm::Algorithm;
use crate::arena::{Arena, Visited};
use crate::config::{CadenceGate, SearchConfig};
use crate::path::reconstruct;
use crate::snapshot::{CompletedSearch, SearchSnapshot};
use crate::traits::{SearchAlgorithm, SnapshotSink};

/// Frontier entry carrying its costs, ordered for a min-heap on
/// `estimated_total_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    idx: usize,
    actual_cost: u64,
    estimated_total_cost: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Ties go to
        // the deeper entry, then to the older one.
        other
            .estimated_total_cost
            .cmp(&self.estimated_total_cost)
            .then(self.actual_cost.cmp(&other.actual_cost))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search with the Manhattan heuristic.
///
/// Every edge costs 1 and the heuristic is consistent, so the first time the
/// target is dequeued its path is a shortest one. Snapshots from this
/// strategy only report visited points; their frontier is always empty.
pub struct AStar<S> {
    sink: S,
    config: SearchConfig,
}

impl<S: SnapshotSink> AStar<S> {
    /// Create a strategy that reports progress to `sink`.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, SearchConfig::default())
    }

    pub fn with_config(sink: S, config: SearchConfig) -> Self {
        Self { sink, config }
    }

    /// Give back the sink, with whatever it collected.
    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    fn estimate_remaining(from: Point, to: Point) -> u64 {
        manhattan(from, to)
    }
}

impl<S: SnapshotSink> SearchAlgorithm for AStar<S> {
    fn title(&self) -> &'static str {
        Algorithm::AStar.title()
    }

    fn search(&mut self, start: Point, finish: Point) -> CompletedSearch {
        log::debug!("astar: searching {} -> {}", start, finish);

        let mut arena = Arena::new();
        let mut open: BinaryHeap<Candidate> = BinaryHeap::new();
        open.push(Candidate {
            idx: arena.push(start, None),
            actual_cost: 0,
            estimated_total_cost: Self::estimate_remaining(start, finish),
        });
        let mut visited = Visited::default();
        let mut gate = CadenceGate::new(self.config.cadence);

        self.sink.on_snapshot(SearchSnapshot::initial(start, Vec::new()));
        let mut emitted = 1usize;

        let mut target = None;
        while let Some(current) = open.pop() {
            let cp = arena.pos(current.idx);

            // Stale duplicate.
            if visited.contains(cp) {
                continue;
            }

            if cp == finish {
                target = Some(current.idx);
                break;
            }

            visited.insert(cp);
            let next_cost = current.actual_cost + 1;
            for np in cp.neighbors_4() {
                open.push(Candidate {
                    idx: arena.push(np, Some(current.idx)),
                    actual_cost: next_cost,
                    estimated_total_cost: next_cost + Self::estimate_remaining(np, finish),
                });
            }

            let distance = manhattan(start, cp);
            if gate.admit(distance) {
                log::trace!(
                    "astar: snapshot at distance {} ({} visited, f={})",
                    distance,
                    visited.len(),
                    current.estimated_total_cost
                );
                self.sink.on_snapshot(SearchSnapshot {
                    start,
                    visited: visited.to_vec(),
                    frontier: Vec::new(),
                });
                emitted += 1;
            }
        }

        let path = match target {
            Some(idx) => reconstruct(&arena, idx),
            None => Vec::new(),
        };

        log::debug!(
            "astar: {} after {} expansions ({} entries, {} snapshots, path {})",
            if target.is_some() { "found" } else { "exhausted" },
            visited.len(),
            arena.len(),
            emitted,
            path.len()
        );

        CompletedSearch {
            snapshot: SearchSnapshot {
                start,
                visited: visited.into_vec(),
                frontier: Vec::new(),
            },
            path,
        }
    }
}
