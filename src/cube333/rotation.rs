//! Face turns as constant time bit operations on the face words.
//!
//! A turn rotates the turning face's own word by one slot pair (8 bits) per quarter turn, and
//! cycles a ring of three stickers on each of the four neighbouring faces. Not every neighbour
//! stores its ring in the same slots, so each neighbour is first rotated into the turning face's
//! frame, the ring is exchanged under a shared mask, and the result is rotated back.

use super::{BitCube, Face};

/// The data needed to turn one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TurnRecipe {
    /// Bits of an aligned neighbour that do not move.
    pub keep: u32,
    /// The neighbours in the order a clockwise turn carries stickers, paired with the right
    /// rotation that aligns each of them to this face's frame.
    pub ring: [(Face, u32); 4],
}

/// One recipe per face, indexed by `Face`.
pub(super) const RECIPES: [TurnRecipe; 6] = [
    // U
    TurnRecipe {
        keep: 0x000F_FFFF,
        ring: [(Face::B, 0), (Face::R, 0), (Face::F, 0), (Face::L, 0)],
    },
    // D
    TurnRecipe {
        keep: 0xFFFF_000F,
        ring: [(Face::B, 0), (Face::L, 0), (Face::F, 0), (Face::R, 0)],
    },
    // L
    TurnRecipe {
        keep: 0x0FFF_FF00,
        ring: [(Face::U, 0), (Face::F, 0), (Face::D, 0), (Face::B, 16)],
    },
    // R
    TurnRecipe {
        keep: 0xFF00_0FFF,
        ring: [(Face::U, 0), (Face::B, 16), (Face::D, 0), (Face::F, 0)],
    },
    // B
    TurnRecipe {
        keep: 0x000F_FFFF,
        ring: [(Face::U, 0), (Face::L, 8), (Face::D, 16), (Face::R, 24)],
    },
    // F
    TurnRecipe {
        keep: 0x000F_FFFF,
        ring: [(Face::U, 16), (Face::R, 8), (Face::D, 0), (Face::L, 24)],
    },
];

impl BitCube {
    /// Turn `face` clockwise by `count` quarter turns. Counts are taken mod 4.
    pub(super) fn turn(self, face: Face, count: u8) -> BitCube {
        let count = (count % 4) as usize;
        let recipe = &RECIPES[face.index()];
        let old = self.faces;
        let mut faces = old;

        faces[face.index()] = old[face.index()].rotate_right(8 * count as u32);

        let aligned = recipe
            .ring
            .map(|(side, align)| old[side.index()].rotate_right(align));
        for (i, &(side, align)) in recipe.ring.iter().enumerate() {
            let incoming = aligned[(i + 4 - count) % 4];
            faces[side.index()] =
                ((recipe.keep & aligned[i]) | (!recipe.keep & incoming)).rotate_left(align);
        }

        BitCube { faces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_neighbours() {
        for face in Face::ARRAY {
            let recipe = RECIPES[face.index()];
            for (side, align) in recipe.ring {
                assert_ne!(side, face);
                assert_ne!(side, face.opposite());
                assert_eq!(align % 8, 0);
            }
            // the four neighbours are distinct
            let mut sides = recipe.ring.map(|(side, _)| side);
            sides.sort();
            assert!(sides.windows(2).all(|w| w[0] != w[1]));
        }
    }

    #[test]
    fn ring_masks_move_three_stickers() {
        for recipe in RECIPES {
            assert_eq!((!recipe.keep).count_ones(), 12);
        }
    }

    #[test]
    fn zero_turn_is_identity() {
        let cube = BitCube::SOLVED.turn(Face::R, 1).turn(Face::U, 1);
        for face in Face::ARRAY {
            assert_eq!(cube.turn(face, 0), cube);
            assert_eq!(cube.turn(face, 4), cube);
        }
    }

    #[test]
    fn opposite_face_untouched() {
        let cube = BitCube::SOLVED.turn(Face::F, 1).turn(Face::L, 3);
        for face in Face::ARRAY {
            let turned = cube.turn(face, 1);
            assert_eq!(turned.face(face.opposite()), cube.face(face.opposite()));
        }
    }
}
