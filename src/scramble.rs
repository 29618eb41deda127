//! Random scrambles.

use rand::Rng;

use crate::cube333::moves::Move333;
use crate::cube333::reduction_solver::AdjacencyTable;
use crate::moves::MoveSequence;

/// A random sequence of `length` moves. No move shares a face with the one before it, and a move
/// is never followed by its opposite face when that face comes later in U, D, L, R, B, F order,
/// so no two neighbouring moves could be merged or swapped into a shorter or earlier form.
pub fn scramble<R: Rng + ?Sized>(length: usize, rng: &mut R) -> MoveSequence<Move333> {
    let table = AdjacencyTable::all_moves();
    let mut moves = Vec::with_capacity(length);
    let mut last = None;
    for _ in 0..length {
        let choices = table.successors(last);
        let m = choices[rng.gen_range(0..choices.len())];
        moves.push(m);
        last = Some(m);
    }
    MoveSequence(moves)
}

/// A random scramble from the thread local generator.
pub fn random_scramble(length: usize) -> MoveSequence<Move333> {
    scramble(length, &mut rand::thread_rng())
}
