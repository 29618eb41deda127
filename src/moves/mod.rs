//! Moves and move sequences, independent of how a puzzle stores its state.

/// What two adjacent moves reduce to. See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// Nothing is left, as in `R R'`.
    NoMove,
    /// A single move is left, as in `R R` giving `R2`.
    OneMove(M),
    /// Both moves stay, as in `R U`.
    TwoMove(M, M),
}

/// A generator of a puzzle group raised to some power, such as `R2`.
///
/// Two kinds of relation are known to sequences built from moves: every move has a finite order
/// (`cancel`), and some pairs of moves commute (`commutes_with`). Both are used when simplifying
/// a sequence.
pub trait Move: Eq + Clone {
    /// The move that undoes this one.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Whether the two moves can swap places when adjacent. Must be transitive.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Reduce `self` followed by `b`.
    ///
    /// ```rust
    /// # fn main() {
    /// use cube_reduce::mv;
    /// use cube_reduce::cube333::Face;
    /// use cube_reduce::cube333::moves::Move333;
    /// use cube_reduce::moves::{Cancellation, Move};
    ///
    /// assert!(mv!(R, 1).cancel(mv!(U, 3)) == Cancellation::TwoMove(mv!(R, 1), mv!(U, 3)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 1)) == Cancellation::OneMove(mv!(R, 2)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 3)) == Cancellation::NoMove);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move. The empty
/// sequence is the identity.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }

    /// Append another sequence to the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The sequence that undoes this one: the moves reversed and each inverted.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Stitch together two halves of a meet in the middle search: `forward` leads from the start
    /// to the meeting point and `backward` leads from the goal to the meeting point, so the
    /// result is `forward` followed by the inverse of `backward`.
    pub fn merge(forward: &[M], backward: &[M]) -> Self {
        Self(
            forward
                .iter()
                .cloned()
                .chain(backward.iter().rev().map(|m| m.clone().inverse()))
                .collect(),
        )
    }

    /// Merge and remove moves until no further reduction is possible, looking past moves that
    /// commute. Only used to tidy sequences for display; the resulting state is unchanged.
    pub fn cancel(mut self) -> Self {
        let mut reduced: Vec<M> = Vec::new();

        for next in self.0.drain(..) {
            // `reduced` has no reductions left, so `next` can only combine with the nearest move
            // reachable by commuting. Whatever it combines into goes on the end.
            let mut combined = false;

            for i in (0..reduced.len()).rev() {
                match reduced[i].clone().cancel(next.clone()) {
                    Cancellation::NoMove => {
                        reduced.remove(i);
                        combined = true;
                    }
                    Cancellation::OneMove(m) => {
                        reduced.remove(i);
                        reduced.push(m);
                        combined = true;
                    }
                    Cancellation::TwoMove(..) => {}
                }

                if combined || !next.commutes_with(&reduced[i]) {
                    break;
                }
            }

            if !combined {
                reduced.push(next);
            }
        }

        Self(reduced)
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<M: Move> IntoIterator for MoveSequence<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, M: Move> IntoIterator for &'a MoveSequence<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
