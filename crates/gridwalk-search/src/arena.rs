use std::collections::HashSet;
use std::ops::Index;

use gridwalk_core::Point;

// ---------------------------------------------------------------------------
// Backreference arena
// ---------------------------------------------------------------------------

/// A discovered point plus the entry it was expanded from.
///
/// `previous` is an index into the owning [`Arena`]; `None` marks the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) pos: Point,
    pub(crate) previous: Option<usize>,
}

/// Per-search storage for frontier entries.
///
/// Entries are appended once, when a neighbour is generated, and live until
/// the search returns. Frontiers hold indices into the arena, so parent links
/// stay valid for as long as any descendant needs them.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    entries: Vec<Entry>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a new entry and return its index.
    #[inline]
    pub(crate) fn push(&mut self, pos: Point, previous: Option<usize>) -> usize {
        let idx = self.entries.len();
        self.entries.push(Entry { pos, previous });
        idx
    }

    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Point {
        self.entries[idx].pos
    }

    /// Positions of the given entries, in iteration order.
    pub(crate) fn positions<'a>(&self, idxs: impl IntoIterator<Item = &'a usize>) -> Vec<Point> {
        idxs.into_iter().map(|&i| self.pos(i)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Index<usize> for Arena {
    type Output = Entry;

    #[inline]
    fn index(&self, idx: usize) -> &Entry {
        &self.entries[idx]
    }
}

// ---------------------------------------------------------------------------
// Visited set
// ---------------------------------------------------------------------------

/// Expanded points, in expansion order, with constant-time membership.
#[derive(Debug, Default)]
pub(crate) struct Visited {
    order: Vec<Point>,
    seen: HashSet<Point>,
}

impl Visited {
    #[inline]
    pub(crate) fn contains(&self, p: Point) -> bool {
        self.seen.contains(&p)
    }

    /// Mark `p` visited. Returns `false` if it already was.
    pub(crate) fn insert(&mut self, p: Point) -> bool {
        if !self.seen.insert(p) {
            return false;
        }
        self.order.push(p);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn to_vec(&self) -> Vec<Point> {
        self.order.clone()
    }

    pub(crate) fn into_vec(self) -> Vec<Point> {
        self.order
    }
}
