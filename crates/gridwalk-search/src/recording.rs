//! Captured searches and a cursor for replaying them.
//!
//! A [`Recording`] is fully materialized before playback begins; the search
//! itself never waits on the consumer.

use gridwalk_core::Point;

use crate::algorithm::Algorithm;
use crate::config::SearchConfig;
use crate::snapshot::{CompletedSearch, SearchSnapshot, SearchState};

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

/// Every snapshot of one search run, followed by its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    pub algorithm: Algorithm,
    pub finish: Point,
    pub snapshots: Vec<SearchSnapshot>,
    pub result: CompletedSearch,
}

impl Recording {
    /// Run `algorithm` from `start` to `finish` and keep everything it emits.
    pub fn capture(
        algorithm: Algorithm,
        config: SearchConfig,
        start: Point,
        finish: Point,
    ) -> Self {
        let mut snapshots = Vec::new();
        let result = algorithm
            .build(|s: SearchSnapshot| snapshots.push(s), config)
            .search(start, finish);
        log::debug!(
            "recorded {} frames for {} {} -> {}",
            snapshots.len() + 1,
            algorithm,
            start,
            finish
        );
        Self {
            algorithm,
            finish,
            snapshots,
            result,
        }
    }

    /// Number of frames: the snapshots plus the completed result.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len() + 1
    }

    /// A recording always holds at least its result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Frame `i`, where the last frame is the completed result.
    pub fn frame(&self, i: usize) -> Option<SearchState<'_>> {
        match i.cmp(&self.snapshots.len()) {
            std::cmp::Ordering::Less => Some(SearchState::InProgress(&self.snapshots[i])),
            std::cmp::Ordering::Equal => Some(SearchState::Complete(&self.result)),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// All frames in replay order.
    pub fn frames(&self) -> impl Iterator<Item = SearchState<'_>> {
        self.snapshots
            .iter()
            .map(SearchState::InProgress)
            .chain(std::iter::once(SearchState::Complete(&self.result)))
    }

    /// A playback cursor positioned on the first frame.
    pub fn playback(&self) -> Playback<'_> {
        Playback {
            recording: self,
            fidx: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// Frame cursor over a [`Recording`], driven by the caller's own clock.
#[derive(Debug, Clone, Copy)]
pub struct Playback<'a> {
    recording: &'a Recording,
    fidx: usize,
}

impl<'a> Playback<'a> {
    /// The frame under the cursor.
    pub fn current(&self) -> SearchState<'a> {
        match self.recording.frame(self.fidx) {
            Some(state) => state,
            None => SearchState::Complete(&self.recording.result),
        }
    }

    /// Index of the current frame.
    #[inline]
    pub fn position(&self) -> usize {
        self.fidx
    }

    /// Move to the next frame. Returns `false` if already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.fidx += 1;
        true
    }

    /// Move to the previous frame. Returns `false` if already on the first.
    pub fn rewind(&mut self) -> bool {
        if self.fidx == 0 {
            return false;
        }
        self.fidx -= 1;
        true
    }

    /// Jump to frame `i`, clamped to the last frame.
    pub fn seek(&mut self, i: usize) {
        self.fidx = i.min(self.recording.len() - 1);
    }

    /// Whether the cursor is on the completed result.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.fidx + 1 >= self.recording.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording() -> Recording {
        Recording::capture(
            Algorithm::BreadthFirst,
            SearchConfig::default(),
            Point::new(0, 0),
            Point::new(2, 1),
        )
    }

    #[test]
    fn frames_end_with_the_result() {
        let rec = recording();
        let frames: Vec<SearchState<'_>> = rec.frames().collect();
        assert_eq!(frames.len(), rec.len());
        assert!(frames[..frames.len() - 1].iter().all(|f| !f.is_complete()));
        let last = frames[frames.len() - 1];
        assert!(last.is_complete());
        assert_eq!(last.path().map(<[Point]>::len), Some(4));
        assert_eq!(rec.frame(rec.len()), None);
    }

    #[test]
    fn trivial_search_has_two_frames() {
        let p = Point::new(3, 3);
        let rec = Recording::capture(Algorithm::AStar, SearchConfig::default(), p, p);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.snapshots.len(), 1);
        assert_eq!(rec.result.path, vec![p]);
    }

    #[test]
    fn playback_steps_and_clamps() {
        let rec = recording();
        let mut pb = rec.playback();
        assert_eq!(pb.position(), 0);
        assert!(!pb.rewind());
        assert!(!pb.current().is_complete());

        let mut steps = 0;
        while pb.advance() {
            steps += 1;
        }
        assert_eq!(steps, rec.len() - 1);
        assert!(pb.is_finished());
        assert!(pb.current().is_complete());

        assert!(pb.rewind());
        assert!(!pb.is_finished());

        pb.seek(10_000);
        assert_eq!(pb.position(), rec.len() - 1);
        pb.seek(0);
        assert_eq!(pb.current().snapshot().visited.len(), 0);
    }
}
