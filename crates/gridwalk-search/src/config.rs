/// How often a strategy hands a snapshot to its sink.
///
/// Cadence only shapes the progress stream; the completed result is the
/// same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotCadence {
    /// One snapshot per distance ring: emit only when the node just expanded
    /// is strictly farther (Manhattan) from the start than the node that
    /// triggered the previous snapshot.
    #[default]
    PerRing,
    /// One snapshot after every expansion.
    EveryExpansion,
}

/// Options shared by every search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub cadence: SnapshotCadence,
}

impl SearchConfig {
    /// Config with the given cadence.
    pub fn with_cadence(cadence: SnapshotCadence) -> Self {
        Self { cadence }
    }
}

/// Tracks the last snapshotted distance and decides when to emit.
///
/// `last_distance` starts empty, so the first expansion (distance 0) always
/// passes.
#[derive(Debug)]
pub(crate) struct CadenceGate {
    cadence: SnapshotCadence,
    last_distance: Option<u64>,
}

impl CadenceGate {
    pub(crate) fn new(cadence: SnapshotCadence) -> Self {
        Self {
            cadence,
            last_distance: None,
        }
    }

    /// Whether a snapshot should follow the expansion of a node `distance`
    /// steps (Manhattan) from the start.
    pub(crate) fn admit(&mut self, distance: u64) -> bool {
        let admit = match self.cadence {
            SnapshotCadence::PerRing => self.last_distance.is_none_or(|last| distance > last),
            SnapshotCadence::EveryExpansion => true,
        };
        if admit {
            self.last_distance = Some(distance);
        }
        admit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_ring_admits_first_node_of_each_ring() {
        let mut gate = CadenceGate::new(SnapshotCadence::PerRing);
        let admitted: Vec<bool> = [0, 1, 1, 1, 2, 1, 2, 3]
            .into_iter()
            .map(|d| gate.admit(d))
            .collect();
        assert_eq!(
            admitted,
            vec![true, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn per_ring_handles_distances_past_i32() {
        let mut gate = CadenceGate::new(SnapshotCadence::PerRing);
        let far = u64::from(u32::MAX) + 5;
        assert!(gate.admit(far));
        assert!(!gate.admit(far));
        assert!(gate.admit(far + 1));
    }

    #[test]
    fn every_expansion_admits_everything() {
        let mut gate = CadenceGate::new(SnapshotCadence::EveryExpansion);
        assert!([0, 0, 3, 1].into_iter().all(|d| gate.admit(d)));
    }

    #[test]
    fn default_is_per_ring() {
        assert_eq!(SearchConfig::default().cadence, SnapshotCadence::PerRing);
    }
}
