//! Grid search algorithms that record their own progress.
//!
//! Both strategies run over an unbounded, obstacle-free, 4-connected lattice
//! of unit-cost cells:
//!
//! - **Breadth-first** search ([`BreadthFirst`]), FIFO frontier
//! - **A\*** search ([`AStar`]), frontier ordered by estimated total cost
//!   with the [`manhattan`](gridwalk_core::manhattan) heuristic
//!
//! While running, a strategy hands [`SearchSnapshot`]s to the
//! [`SnapshotSink`] it was built with, then returns a [`CompletedSearch`].
//! A [`Recording`] captures both so a renderer can replay them later with a
//! [`Playback`] cursor.
//!
//! ```
//! use gridwalk_core::Point;
//! use gridwalk_search::{BreadthFirst, SearchAlgorithm, SearchSnapshot};
//!
//! let mut snapshots: Vec<SearchSnapshot> = Vec::new();
//! let mut bfs = BreadthFirst::new(|s: SearchSnapshot| snapshots.push(s));
//! let result = bfs.search(Point::new(0, 0), Point::new(3, 0));
//! drop(bfs);
//! assert_eq!(result.path.len(), 4);
//! assert!(!snapshots.is_empty());
//! ```
//!
//! There is no iteration cap: a target that cannot be reached on unbounded
//! terrain keeps the search running forever.

mod algorithm;
mod arena;
mod astar;
mod bfs;
mod config;
mod path;
mod recording;
mod snapshot;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use config::{SearchConfig, SnapshotCadence};
pub use path::is_valid_path;
pub use recording::{Playback, Recording};
pub use snapshot::{CompletedSearch, SearchSnapshot, SearchState};
pub use traits::{SearchAlgorithm, SnapshotSink};
