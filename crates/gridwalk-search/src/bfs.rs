use std::collections::VecDeque;

use gridwalk_core::{Point, manhattan};

use crate::algorithm::Algorithm;
use crate::arena::{Arena, Visited};
use crate::config::{CadenceGate, SearchConfig};
use crate::path::reconstruct;
use crate::snapshot::{CompletedSearch, SearchSnapshot};
use crate::traits::{SearchAlgorithm, SnapshotSink};

/// Breadth-first search with a FIFO frontier.
///
/// Expands the grid one distance ring at a time. A point may be queued
/// several times before its first expansion; later copies are skipped when
/// dequeued.
pub struct BreadthFirst<S> {
    sink: S,
    config: SearchConfig,
}

impl<S: SnapshotSink> BreadthFirst<S> {
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
}

impl<S: SnapshotSink> SearchAlgorithm for BreadthFirst<S> {
    fn title(&self) -> &'static str {
        Algorithm::BreadthFirst.title()
    }

    fn search(&mut self, start: Point, finish: Point) -> CompletedSearch {
        log::debug!("bfs: searching {} -> {}", start, finish);

        let mut arena = Arena::new();
        let mut frontier: VecDeque<usize> = VecDeque::new();
        frontier.push_back(arena.push(start, None));
        let mut visited = Visited::default();
        let mut gate = CadenceGate::new(self.config.cadence);

        self.sink.on_snapshot(SearchSnapshot::initial(start, vec![start]));
        let mut emitted = 1usize;

        let mut target = None;
        while let Some(ci) = frontier.pop_front() {
            let current = arena.pos(ci);

            if visited.contains(current) {
                continue;
            }

            if current == finish {
                target = Some(ci);
                break;
            }

            visited.insert(current);
            for n in current.neighbors_4() {
                frontier.push_back(arena.push(n, Some(ci)));
            }

            let distance = manhattan(start, current);
            if gate.admit(distance) {
                log::trace!(
                    "bfs: snapshot at ring {} ({} visited, {} queued)",
                    distance,
                    visited.len(),
                    frontier.len()
                );
                self.sink.on_snapshot(SearchSnapshot {
                    start,
                    visited: visited.to_vec(),
                    frontier: arena.positions(&frontier),
                });
                emitted += 1;
            }
        }

        let path = match target {
            Some(idx) => reconstruct(&arena, idx),
            None => Vec::new(),
        };

        log::debug!(
            "bfs: {} after {} expansions ({} entries, {} snapshots, path {})",
            if target.is_some() { "found" } else { "exhausted" },
            visited.len(),
            arena.len(),
            emitted,
            path.len()
        );

        CompletedSearch {
            snapshot: SearchSnapshot {
                start,
                frontier: arena.positions(&frontier),
                visited: visited.into_vec(),
            },
            path,
        }
    }
}
