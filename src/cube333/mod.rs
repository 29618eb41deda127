//! The 3x3x3 cube stored as one 32 bit word per face.
//!
//! Every face word holds eight 4 bit colour nibbles, one per sticker slot, running clockwise
//! around the face and alternating edge and corner stickers. Slot `n` lives at bit shift `4 * n`,
//! so the even slots are edges and the odd slots are corners. Centres are fixed and not stored.

pub mod moves;
pub mod reduction_solver;

mod pieces;
mod rotation;

pub use pieces::corner_position;

use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face of the cube. The discriminant is the index of the face's word in a `BitCube` and the
/// face part of a move code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up (yellow)
    U = 0,
    /// Down (white)
    D = 1,
    /// Left (red)
    L = 2,
    /// Right (orange)
    R = 3,
    /// Back (blue)
    B = 4,
    /// Front (green)
    F = 5,
}

impl Face {
    /// All faces, in index order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::B, Face::F];

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::F => Face::B,
        }
    }

    /// The colour nibble of this face's stickers on a solved cube.
    pub const fn colour(self) -> u32 {
        match self {
            Face::U => 0xC,
            Face::D => 0xA,
            Face::L => 0x3,
            Face::R => 0x5,
            Face::B => 0x9,
            Face::F => 0x6,
        }
    }

    /// The index of this face's word in a `BitCube`.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Face, TryFromIntToEnumError> {
        Face::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// Mask selecting the nibble of a single sticker slot once shifted down.
pub const STICKER_MASK: u32 = 0xF;

/// A cube state. Two cubes are equal exactly when all six face words are equal; how a state was
/// reached is not part of it.
///
/// Nothing checks that a state built with `from_faces` is physically reachable. Masked states
/// (with some stickers zeroed) are valid values and are rotated like any other.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitCube {
    faces: [u32; 6],
}

impl BitCube {
    /// The solved cube.
    pub const SOLVED: BitCube = BitCube {
        faces: [
            0xCCCCCCCC, 0xAAAAAAAA, 0x33333333, 0x55555555, 0x99999999, 0x66666666,
        ],
    };

    /// The cube with every sticker zeroed.
    pub const EMPTY: BitCube = BitCube { faces: [0; 6] };

    /// Build a cube from six face words in U, D, L, R, B, F order.
    pub const fn from_faces(faces: [u32; 6]) -> BitCube {
        BitCube { faces }
    }

    /// The six face words in U, D, L, R, B, F order.
    pub const fn faces(&self) -> [u32; 6] {
        self.faces
    }

    /// The word of a single face.
    pub const fn face(&self, face: Face) -> u32 {
        self.faces[face.index()]
    }

    /// The colour nibble at a sticker slot (0..8), or 0 if the slot is out of range.
    pub fn sticker(&self, face: Face, slot: usize) -> u32 {
        if slot >= 8 {
            return 0;
        }
        (self.face(face) >> (4 * slot)) & STICKER_MASK
    }

    /// Set the nibble at a sticker slot (0..8). Out of range slots are ignored.
    pub fn set_sticker(&mut self, face: Face, slot: usize, colour: u32) {
        if slot >= 8 {
            return;
        }
        let shift = 4 * slot;
        let word = &mut self.faces[face.index()];
        *word = (*word & !(STICKER_MASK << shift)) | ((colour & STICKER_MASK) << shift);
    }

    /// Whether this is the solved cube.
    pub fn is_solved(&self) -> bool {
        *self == BitCube::SOLVED
    }
}

impl Default for BitCube {
    fn default() -> Self {
        BitCube::SOLVED
    }
}

impl std::fmt::Debug for BitCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [u, d, l, r, b, fr] = self.faces;
        write!(
            f,
            "BitCube {{ U: {u:#010X}, D: {d:#010X}, L: {l:#010X}, R: {r:#010X}, B: {b:#010X}, F: {fr:#010X} }}"
        )
    }
}

fn colour_char(nibble: u32) -> char {
    match nibble {
        0xC => 'Y',
        0xA => 'W',
        0x3 => 'R',
        0x5 => 'O',
        0x9 => 'B',
        0x6 => 'G',
        0x0 => '-',
        _ => '?',
    }
}

// Slots in reading order for a face drawn in the net, `None` being the centre.
const NET_ROWS: [[Option<usize>; 3]; 3] = [
    [Some(7), Some(6), Some(5)],
    [Some(0), None, Some(4)],
    [Some(1), Some(2), Some(3)],
];

impl BitCube {
    fn net_row(&self, face: Face, row: usize) -> String {
        NET_ROWS[row]
            .iter()
            .map(|slot| match slot {
                Some(slot) => colour_char(self.sticker(face, *slot)),
                None => colour_char(face.colour()),
            })
            .collect()
    }
}

/// Draws the unfolded cube: U on top, then L F R B, then D.
impl std::fmt::Display for BitCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            writeln!(f, "    {}", self.net_row(Face::U, row))?;
        }
        for row in 0..3 {
            let middle = [Face::L, Face::F, Face::R, Face::B]
                .map(|face| self.net_row(face, row))
                .join(" ");
            writeln!(f, "{middle}")?;
        }
        for row in 0..3 {
            writeln!(f, "    {}", self.net_row(Face::D, row))?;
        }
        Ok(())
    }
}
