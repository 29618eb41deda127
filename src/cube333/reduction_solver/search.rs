//! Meet in the middle breadth first search between a start state and a set of goal states.

use log::debug;

use super::adjacency::AdjacencyTable;
use super::store::{CubeStore, SearchNode};
use super::Stage;
use crate::cube333::moves::Move333;
use crate::cube333::BitCube;
use crate::error::SolveError;
use crate::moves::MoveSequence;

/// Grow a frontier from `start` and one from the goal states in `targets`, one node per side per
/// round, until a state reached from both sides gives a sequence that `accept` takes.
///
/// Sequences recorded in `targets` lead from a goal state to the stored state, so the returned
/// sequence takes `start` to one of the goal states. Fails with [`SolveError::Exhausted`] once
/// both queues are empty.
pub(super) fn bidirectional_search(
    stage: Stage,
    start: BitCube,
    mut targets: CubeStore,
    moves: &AdjacencyTable,
    mut accept: impl FnMut(&MoveSequence<Move333>) -> bool,
) -> Result<MoveSequence<Move333>, SolveError> {
    let mut starts = CubeStore::new();
    starts.add(SearchNode::root(start));
    let mut rejected = 0usize;

    loop {
        let from_start = starts.dequeue();
        if let Some(node) = &from_start {
            for &m in moves.successors(node.last) {
                let next = node.advance(m);
                let cube = next.cube;
                if !starts.add(next) {
                    continue;
                }
                if let (Some(forward), Some(backward)) =
                    (starts.sequence_for(&cube), targets.sequence_for(&cube))
                {
                    let candidate = MoveSequence::merge(&forward.0, &backward.0);
                    if accept(&candidate) {
                        log_meeting(stage, &starts, &targets, rejected, &candidate);
                        return Ok(candidate);
                    }
                    rejected += 1;
                }
            }
        }

        let from_target = targets.dequeue();
        if let Some(node) = &from_target {
            for &m in moves.successors(node.last) {
                let next = node.advance(m);
                let cube = next.cube;
                if !targets.add(next) {
                    continue;
                }
                if let (Some(forward), Some(backward)) =
                    (starts.sequence_for(&cube), targets.sequence_for(&cube))
                {
                    let candidate = MoveSequence::merge(&forward.0, &backward.0);
                    if accept(&candidate) {
                        log_meeting(stage, &starts, &targets, rejected, &candidate);
                        return Ok(candidate);
                    }
                    rejected += 1;
                }
            }
        }

        if from_start.is_none() && from_target.is_none() {
            debug!(
                "{stage}: exhausted after {} start states and {} target states",
                starts.len(),
                targets.len()
            );
            return Err(SolveError::Exhausted { stage });
        }
    }
}

fn log_meeting(
    stage: Stage,
    starts: &CubeStore,
    targets: &CubeStore,
    rejected: usize,
    solution: &MoveSequence<Move333>,
) {
    debug!(
        "{stage}: met after {} start states and {} target states ({rejected} meetings rejected), {} moves",
        starts.len(),
        targets.len(),
        solution.len()
    );
}
