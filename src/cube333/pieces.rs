//! Lookups from a sticker slot to the other stickers of the same piece.

use super::moves::Move333;
use super::{BitCube, Face};
use crate::mv;

// Indexed by face then by edge slot / 2, giving the other sticker of that edge.
const EDGE_PARTNERS: [[(Face, usize); 4]; 6] = {
    use Face::*;
    [
        [(L, 6), (F, 6), (R, 6), (B, 6)],
        [(L, 2), (B, 2), (R, 2), (F, 2)],
        [(B, 4), (D, 0), (F, 0), (U, 0)],
        [(F, 4), (D, 4), (B, 0), (U, 4)],
        [(R, 4), (D, 2), (L, 0), (U, 6)],
        [(L, 4), (D, 6), (R, 0), (U, 2)],
    ]
};

// Indexed by face then by corner slot / 2, giving the next sticker clockwise around that corner.
const CLOCKWISE_CORNERS: [[(Face, usize); 4]; 6] = {
    use Face::*;
    [
        [(F, 7), (R, 7), (B, 7), (L, 7)],
        [(B, 3), (R, 3), (F, 3), (L, 3)],
        [(D, 1), (F, 1), (U, 1), (B, 5)],
        [(D, 5), (B, 1), (U, 5), (F, 5)],
        [(D, 3), (L, 1), (U, 7), (R, 5)],
        [(D, 7), (R, 1), (U, 3), (L, 5)],
    ]
};

// 1 UBL, 2 UBR, 3 UFR, 4 UFL, 5 DBL, 6 DBR, 7 DFR, 8 DFL
const CORNER_POSITIONS: [[u8; 4]; 6] = [
    [4, 3, 2, 1],
    [5, 6, 7, 8],
    [5, 8, 4, 1],
    [7, 6, 2, 3],
    [6, 5, 1, 2],
    [8, 7, 3, 4],
];

/// The indicator word built from the U corners of a cube in the two generator group.
const TWO_GEN_CORNER_CYCLE: u32 = 0x30905060;

fn is_edge_slot(slot: usize) -> bool {
    slot < 8 && slot % 2 == 0
}

fn is_corner_slot(slot: usize) -> bool {
    slot < 8 && slot % 2 == 1
}

impl BitCube {
    /// The colour of the other sticker on the edge at `slot` of `face`, or 0 if `slot` is not an
    /// edge slot.
    pub fn related_edge(&self, face: Face, slot: usize) -> u32 {
        if !is_edge_slot(slot) {
            return 0;
        }
        let (other, other_slot) = EDGE_PARTNERS[face.index()][slot / 2];
        self.sticker(other, other_slot)
    }

    /// The colour found stepping clockwise around the corner at `slot` of `face`, or 0 if `slot`
    /// is not a corner slot.
    pub fn clockwise_related_corner(&self, face: Face, slot: usize) -> u32 {
        if !is_corner_slot(slot) {
            return 0;
        }
        let (other, other_slot) = CLOCKWISE_CORNERS[face.index()][slot / 2];
        self.sticker(other, other_slot)
    }

    /// Find the corner whose sticker coloured `colour` has `clockwise` as its clockwise
    /// neighbour, returning its position.
    fn find_corner(&self, colour: u32, clockwise: u32) -> Option<u8> {
        Face::ARRAY.into_iter().find_map(|face| {
            (1..8).step_by(2).find_map(|slot| {
                (self.sticker(face, slot) == colour
                    && self.clockwise_related_corner(face, slot) == clockwise)
                    .then(|| corner_position(face, slot))
            })
        })
    }

    /// Whether the cube can be finished with only U and R turns, given that the 2x2x3 block on
    /// the left (the DL, FL and BL edges and the DFL and DBL corners) is solved.
    ///
    /// With the left block solved, membership of the U/R group is decided by the corners: the
    /// two right hand D corners are brought home on a private copy, after which the four U
    /// corners must be a cyclic shift of the solved arrangement.
    pub fn is_two_gen_reachable_given_left_block(&self) -> bool {
        let mut working = *self;

        let d = Face::D.colour();
        let fix_dfr: &[Move333] = match working.find_corner(d, Face::F.colour()) {
            Some(1) => &[mv!(U, 1), mv!(R, 1)],
            Some(2) => &[mv!(R, 1)],
            Some(3) => &[mv!(R, 2)],
            Some(4) => &[mv!(U, 2), mv!(R, 1)],
            Some(7) => &[mv!(R, 3)],
            _ => &[],
        };
        working = working.make_moves(fix_dfr);

        // DFR now sits in DBR; bringing DBR home also pushes it on to DFR
        let fix_dbr: &[Move333] = match working.find_corner(d, Face::R.colour()) {
            Some(1) => &[mv!(U, 1), mv!(R, 1)],
            Some(2) => &[mv!(R, 1)],
            Some(3) => &[mv!(U, 3), mv!(R, 1)],
            Some(4) => &[mv!(U, 2), mv!(R, 1)],
            Some(7) => &[mv!(R, 1), mv!(U, 1), mv!(R, 1), mv!(U, 3), mv!(R, 2)],
            _ => &[],
        };
        working = working.make_moves(fix_dbr);

        let u = Face::U.colour();
        let mut indicator = 0;
        for slot in (1..8).step_by(2) {
            let shift = 4 * slot;
            let corner = working.sticker(Face::U, slot);
            let clockwise = working.clockwise_related_corner(Face::U, slot);

            let colour = if corner == u {
                clockwise
            } else if clockwise != u {
                corner
            } else {
                // the U sticker is anticlockwise of this one, name the corner by its third side
                match corner {
                    0x9 => Face::L.colour(),
                    0x5 => Face::B.colour(),
                    0x6 => Face::R.colour(),
                    0x3 => Face::F.colour(),
                    _ => 0,
                }
            };
            indicator |= colour << shift;
        }

        (0..4).any(|i| indicator.rotate_right(8 * i) == TWO_GEN_CORNER_CYCLE)
    }
}

/// The position (1..=8) of the corner with a sticker at `slot` of `face`. All three stickers of a
/// corner give the same position. Returns 0 if `slot` is not a corner slot.
pub fn corner_position(face: Face, slot: usize) -> u8 {
    if !is_corner_slot(slot) {
        return 0;
    }
    CORNER_POSITIONS[face.index()][slot / 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::Move333;
    use crate::moves::MoveSequence;

    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn edge_partners_pair_up() {
        for face in Face::ARRAY {
            for slot in (0..8).step_by(2) {
                let (other, other_slot) = EDGE_PARTNERS[face.index()][slot / 2];
                assert_eq!(EDGE_PARTNERS[other.index()][other_slot / 2], (face, slot));
                assert_eq!(
                    BitCube::SOLVED.related_edge(face, slot),
                    other.colour(),
                    "{face:?} {slot}"
                );
            }
        }
    }

    #[test]
    fn corners_cycle_in_three() {
        for face in Face::ARRAY {
            for slot in (1..8).step_by(2) {
                let a = CLOCKWISE_CORNERS[face.index()][slot / 2];
                let b = CLOCKWISE_CORNERS[a.0.index()][a.1 / 2];
                let c = CLOCKWISE_CORNERS[b.0.index()][b.1 / 2];
                assert_eq!(c, (face, slot));
                let position = corner_position(face, slot);
                assert!((1..=8).contains(&position));
                assert_eq!(corner_position(a.0, a.1), position);
                assert_eq!(corner_position(b.0, b.1), position);
            }
        }
    }

    #[test]
    fn corner_positions_are_distinct() {
        let mut seen = [0; 9];
        for face in Face::ARRAY {
            for slot in (1..8).step_by(2) {
                seen[corner_position(face, slot) as usize] += 1;
            }
        }
        assert_eq!(seen, [0, 3, 3, 3, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn wrong_slot_kind_is_empty() {
        assert_eq!(BitCube::SOLVED.related_edge(Face::U, 1), 0);
        assert_eq!(BitCube::SOLVED.related_edge(Face::U, 8), 0);
        assert_eq!(BitCube::SOLVED.clockwise_related_corner(Face::U, 0), 0);
        assert_eq!(corner_position(Face::F, 2), 0);
    }

    #[test]
    fn solved_clockwise_corners() {
        let cube = BitCube::SOLVED;
        assert_eq!(cube.clockwise_related_corner(Face::U, 1), Face::F.colour());
        assert_eq!(cube.clockwise_related_corner(Face::U, 3), Face::R.colour());
        assert_eq!(cube.clockwise_related_corner(Face::U, 5), Face::B.colour());
        assert_eq!(cube.clockwise_related_corner(Face::U, 7), Face::L.colour());
    }

    #[test]
    fn two_gen_solved() {
        assert!(BitCube::SOLVED.is_two_gen_reachable_given_left_block());
    }

    #[test]
    fn two_gen_broken_by_l_turn() {
        // R U' R' U R' U' keeps the left block, the final L breaks two gen membership
        let cube = BitCube::SOLVED.make_moves(&MoveSequence(vec![
            mv!(R, 1),
            mv!(U, 3),
            mv!(R, 3),
            mv!(U, 1),
            mv!(R, 3),
            mv!(U, 3),
            mv!(L, 1),
        ]));
        assert!(!cube.is_two_gen_reachable_given_left_block());
    }

    fn two_gen_move() -> impl Strategy<Value = Move333> {
        (prop_oneof![Just(Face::U), Just(Face::R)], 1..=3u8)
            .prop_map(|(face, count)| Move333 { face, count })
    }

    proptest! {
        #[test]
        fn two_gen_states_pass(mvs in vec(two_gen_move(), 0..40).prop_map(MoveSequence)) {
            let cube = BitCube::SOLVED.make_moves(&mvs);
            prop_assert!(cube.is_two_gen_reachable_given_left_block());
        }

        #[test]
        fn related_stickers_follow_pieces(mvs in vec(any::<Move333>(), 0..25).prop_map(MoveSequence)) {
            let cube = BitCube::SOLVED.make_moves(&mvs);
            for face in Face::ARRAY {
                for slot in (0..8).step_by(2) {
                    let edge = cube.sticker(face, slot);
                    let other = cube.related_edge(face, slot);
                    let opposite = Face::ARRAY
                        .iter()
                        .find(|f| f.colour() == edge)
                        .map(|f| f.opposite().colour());
                    prop_assert_ne!(edge, other);
                    prop_assert_ne!(Some(other), opposite);
                }
                for slot in (1..8).step_by(2) {
                    let a = cube.sticker(face, slot);
                    let b = cube.clockwise_related_corner(face, slot);
                    prop_assert_ne!(a, b);
                }
            }
        }
    }
}
