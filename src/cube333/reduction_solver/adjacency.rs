//! Which moves may follow which during a search.

use crate::cube333::moves::{Htm, Move333, MoveGenerator, NO_MOVE};

/// Successor lists for a fixed set of allowed moves.
///
/// A move is never followed by a move on the same face, and a move on an even indexed face (U, L
/// or B) is never followed by a move on the opposite face. Opposite faces commute, so this keeps
/// exactly one ordering of each such pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    first: Vec<Move333>,
    // indexed by move code - 1
    after: Vec<Vec<Move333>>,
}

/// Whether `next` may directly follow `prev` in a generated sequence.
pub fn may_follow(prev: Move333, next: Move333) -> bool {
    let (p, n) = (prev.face.index(), next.face.index());
    p != n && !(p % 2 == 0 && n == p + 1)
}

impl AdjacencyTable {
    /// Build the table for the given moves. The order of `allowed` is kept in every list.
    pub fn new(allowed: &[Move333]) -> Self {
        let after = Htm::MOVE_LIST
            .iter()
            .map(|&prev| {
                allowed
                    .iter()
                    .copied()
                    .filter(|&next| may_follow(prev, next))
                    .collect()
            })
            .collect();

        Self {
            first: allowed.to_vec(),
            after,
        }
    }

    /// The table over every move.
    pub fn all_moves() -> Self {
        Self::new(Htm::MOVE_LIST)
    }

    /// The moves that may come after `last`, or every allowed move when there is no previous
    /// move. A previous move that turns nothing (count a multiple of 4) counts as no move.
    pub fn successors(&self, last: Option<Move333>) -> &[Move333] {
        match last.map(Move333::code) {
            None | Some(NO_MOVE) => &self.first,
            Some(code) => &self.after[code as usize - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mv;

    use proptest::prelude::*;

    #[test]
    fn small_table() {
        let table = AdjacencyTable::new(&[mv!(U, 1), mv!(D, 1), mv!(L, 1)]);
        assert_eq!(table.successors(None), &[mv!(U, 1), mv!(D, 1), mv!(L, 1)]);
        assert_eq!(table.successors(Some(mv!(U, 1))), &[mv!(L, 1)]);
        assert_eq!(table.successors(Some(mv!(D, 1))), &[mv!(U, 1), mv!(L, 1)]);
        assert_eq!(table.successors(Some(mv!(L, 1))), &[mv!(U, 1), mv!(D, 1)]);
        // moves outside the allowed set still have a list
        assert_eq!(
            table.successors(Some(mv!(R, 3))),
            &[mv!(U, 1), mv!(D, 1), mv!(L, 1)]
        );
        assert_eq!(
            table.successors(Some(mv!(F, 2))),
            &[mv!(U, 1), mv!(D, 1), mv!(L, 1)]
        );
    }

    #[test]
    fn wrapped_counts() {
        let table = AdjacencyTable::all_moves();
        assert_eq!(table.successors(Some(mv!(R, 4))), table.successors(None));
        assert_eq!(table.successors(Some(mv!(R, 0))), table.successors(None));
        assert_eq!(
            table.successors(Some(mv!(L, 5))),
            table.successors(Some(mv!(L, 1)))
        );
    }

    #[test]
    fn full_table_sizes() {
        let table = AdjacencyTable::all_moves();
        assert_eq!(table.successors(None).len(), 18);
        for m in Htm::MOVE_LIST {
            let expected = if m.face.index() % 2 == 0 { 12 } else { 15 };
            assert_eq!(table.successors(Some(*m)).len(), expected, "{m}");
        }
    }

    #[test]
    fn keeps_allowed_order() {
        let allowed = [mv!(R, 3), mv!(U, 1), mv!(R, 1), mv!(U, 2)];
        let table = AdjacencyTable::new(&allowed);
        assert_eq!(table.successors(None), &allowed);
        assert_eq!(table.successors(Some(mv!(U, 3))), &[mv!(R, 3), mv!(R, 1)]);
    }

    proptest! {
        #[test]
        fn successors_follow_rule(last in any::<Move333>()) {
            let table = AdjacencyTable::all_moves();
            for next in table.successors(Some(last)) {
                prop_assert_ne!(next.face, last.face);
                if last.face.index() % 2 == 0 {
                    prop_assert_ne!(next.face, last.face.opposite());
                }
            }
        }
    }
}
