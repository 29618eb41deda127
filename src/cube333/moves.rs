//! Face turns of the 3x3x3 and their integer codes.

use super::{BitCube, Face};
use crate::error::TryFromIntToEnumError;
use crate::moves::{Cancellation, Move, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face turn. `count` is the number of clockwise quarter turns, so an anticlockwise move has a
/// count of 3.
///
/// Moves cross the crate boundary as integer codes 1..=18: `(code - 1) % 6` is the face index
/// and `(code - 1) / 6 + 1` is the count. Code 0 stands for "no move".
///
/// Counts outside 1..=3 are taken mod 4 wherever a move is turned or encoded, so a count of 4 (or
/// 0) is the identity and has code 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub face: Face,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

/// The code used for "no previous move".
pub const NO_MOVE: u8 = 0;

impl Move333 {
    /// The integer code of this move, or `NO_MOVE` when the count is a multiple of 4.
    pub fn code(self) -> u8 {
        match self.count % 4 {
            0 => NO_MOVE,
            count => (count - 1) * 6 + self.face as u8 + 1,
        }
    }

    /// The move with the given code, or `None` for the sentinel 0 and anything above 18.
    pub fn from_code(code: u8) -> Option<Move333> {
        Move333::try_from(code).ok()
    }
}

impl TryFrom<u8> for Move333 {
    type Error = TryFromIntToEnumError;

    fn try_from(code: u8) -> Result<Move333, TryFromIntToEnumError> {
        if code == NO_MOVE || code > 18 {
            return Err(TryFromIntToEnumError::OutOfBounds);
        }
        Ok(Move333 {
            face: Face::try_from((code - 1) % 6)?,
            count: (code - 1) / 6 + 1,
        })
    }
}

impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        mv.code() as usize
    }
}

/// The code of the inverse of the move with code `code`. Out of range codes (including the
/// sentinel) give the sentinel.
pub fn inverse_code(code: u8) -> u8 {
    match Move333::try_from(code) {
        Ok(mv) => mv.inverse().code(),
        Err(_) => NO_MOVE,
    }
}

impl Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            face: self.face,
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.face == b.face || self.face.opposite() == b.face
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face == b.face {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 {
                    face: self.face,
                    count,
                })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// written in notation rather than as a struct
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "{:?}", self.face),
            3 => write!(f, "{:?}'", self.face),
            _ => write!(f, "{:?}{}", self.face, self.count),
        }
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A trait to classify a type as a move generator, a set of moves that generates some subgroup of
/// the cube group.
pub trait MoveGenerator {
    /// The number of moves in `MOVE_LIST`.
    const SIZE: usize;
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

/// Create a move by specifying a face and a quarter turn count. Note that you do not need to
/// specify for example Face::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($face:ident, $count: expr) => {
        $crate::cube333::moves::Move333 {
            face: $crate::cube333::Face::$face,
            count: $count,
        }
    };
}

/// Type for Half Turn Metric. The list is in code order, so `MOVE_LIST[code - 1]` has that code.
pub struct Htm;

impl MoveGenerator for Htm {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(U, 1),
        mv!(D, 1),
        mv!(L, 1),
        mv!(R, 1),
        mv!(B, 1),
        mv!(F, 1),
        mv!(U, 2),
        mv!(D, 2),
        mv!(L, 2),
        mv!(R, 2),
        mv!(B, 2),
        mv!(F, 2),
        mv!(U, 3),
        mv!(D, 3),
        mv!(L, 3),
        mv!(R, 3),
        mv!(B, 3),
        mv!(F, 3),
    ];
}

impl BitCube {
    /// Apply an algorithm to a cube.
    pub fn make_moves<'a>(self, mvs: impl IntoIterator<Item = &'a Move333>) -> BitCube {
        mvs.into_iter().fold(self, |c, &m| c.make_move(m))
    }

    /// Apply a move to a cube.
    pub fn make_move(self, mv: Move333) -> BitCube {
        self.turn(mv.face, mv.count)
    }

    /// Apply the move with the given code. The sentinel and out of range codes leave the cube
    /// unchanged.
    pub fn rotate_code(self, code: u8) -> BitCube {
        match Move333::from_code(code) {
            Some(mv) => self.make_move(mv),
            None => self,
        }
    }

    /// Apply a sequence of move codes, skipping any that are not moves.
    pub fn rotate_codes(self, codes: &[u8]) -> BitCube {
        codes.iter().fold(self, |c, &code| c.rotate_code(code))
    }
}

impl MoveSequence<Move333> {
    /// The integer codes of the moves in this sequence.
    pub fn codes(&self) -> Vec<u8> {
        self.iter().map(|m| m.code()).collect()
    }

    /// Build a sequence from integer codes, dropping anything that is not a move.
    pub fn from_codes(codes: &[u8]) -> Self {
        codes.iter().filter_map(|&c| Move333::from_code(c)).collect()
    }
}
