//! Identity-keyed snapshot diffing.
//!
//! [`diff`] computes the operation sequence transforming one snapshot
//! into another. The sequence is stable and deterministic: deletions
//! first (in old-snapshot order), then insertions (in new-snapshot
//! order), then moves (in new-snapshot order). Diffing a snapshot
//! against itself yields an empty sequence, and replaying the output
//! with [`apply`] reproduces the new ordering exactly.
//!
//! A retained item is reported as a move only if its order relative to
//! the other retained items changed. The stationary set is a longest
//! increasing subsequence of old positions taken in new order, so the
//! move count is minimal.

use std::collections::HashMap;

use crate::catalog::TutorialId;
use crate::queue::snapshot::QueueSnapshot;

/// One edit in a reconciliation sequence.
///
/// `Insert` indices and `Move` targets are positions in the new
/// snapshot; deletions are keyed by id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    Delete { id: TutorialId },
    Insert { id: TutorialId, index: usize },
    Move { id: TutorialId, to: usize },
}

/// Computes the edit sequence from `old` to `new`.
pub fn diff(old: &QueueSnapshot, new: &QueueSnapshot) -> Vec<DiffOp> {
    let old_positions: HashMap<TutorialId, usize> = old
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id, index))
        .collect();
    let new_positions: HashMap<TutorialId, usize> = new
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id, index))
        .collect();

    let mut ops = Vec::new();

    for item in old.items() {
        if !new_positions.contains_key(&item.id) {
            ops.push(DiffOp::Delete { id: item.id });
        }
    }

    for (index, item) in new.items().iter().enumerate() {
        if !old_positions.contains_key(&item.id) {
            ops.push(DiffOp::Insert { id: item.id, index });
        }
    }

    // Retained items in new order, each with its old position.
    let retained: Vec<(TutorialId, usize, usize)> = new
        .items()
        .iter()
        .enumerate()
        .filter_map(|(new_index, item)| {
            old_positions
                .get(&item.id)
                .map(|&old_index| (item.id, old_index, new_index))
        })
        .collect();

    let positions: Vec<usize> = retained.iter().map(|&(_, old_index, _)| old_index).collect();
    let stationary = stationary_mask(&positions);

    for (i, &(id, _, new_index)) in retained.iter().enumerate() {
        if !stationary[i] {
            ops.push(DiffOp::Move { id, to: new_index });
        }
    }

    ops
}

/// Replays an edit sequence against an ordering equal to `old`.
///
/// Batch semantics: deleted and moving ids are lifted out first, then
/// insertions and moves land at their target indices in ascending
/// order. Target indices are unique by construction, so the result is
/// exactly the new ordering.
pub fn apply(old: &[TutorialId], ops: &[DiffOp]) -> Vec<TutorialId> {
    let mut lifted: Vec<TutorialId> = Vec::new();
    let mut placements: Vec<(usize, TutorialId)> = Vec::new();

    for op in ops {
        match *op {
            DiffOp::Delete { id } => lifted.push(id),
            DiffOp::Insert { id, index } => placements.push((index, id)),
            DiffOp::Move { id, to } => {
                lifted.push(id);
                placements.push((to, id));
            }
        }
    }

    let mut result: Vec<TutorialId> = old
        .iter()
        .copied()
        .filter(|id| !lifted.contains(id))
        .collect();

    placements.sort_by_key(|&(index, _)| index);
    for (index, id) in placements {
        let at = index.min(result.len());
        result.insert(at, id);
    }

    result
}

/// Marks a longest strictly increasing subsequence of `positions`.
///
/// Patience algorithm with predecessor reconstruction; the values are
/// distinct (they are positions), so ties cannot occur and the result
/// is deterministic.
fn stationary_mask(positions: &[usize]) -> Vec<bool> {
    let n = positions.len();
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        let slot = tails.partition_point(|&j| positions[j] < positions[i]);
        if slot > 0 {
            prev[i] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(i);
        } else {
            tails[slot] = i;
        }
    }

    let mut mask = vec![false; n];
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        mask[i] = true;
        cursor = prev[i];
    }
    mask
}
