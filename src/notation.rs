//! Converting moves to and from standard notation (`U`, `U2`, `U'`, ...).

use std::str::FromStr;

use crate::cube333::moves::{Move333, NO_MOVE};
use crate::cube333::reduction_solver::Stage;
use crate::cube333::Face;
use crate::error::ParseMoveError;
use crate::moves::MoveSequence;

// Indexed by move code. Code 0 has no name.
const MOVE_NAMES: [&str; 19] = [
    "", "U", "D", "L", "R", "B", "F", "U2", "D2", "L2", "R2", "B2", "F2", "U'", "D'", "L'", "R'",
    "B'", "F'",
];

/// The notation for a move code, or the empty string for the sentinel and out of range codes.
pub fn move_to_string(code: u8) -> &'static str {
    MOVE_NAMES.get(code as usize).copied().unwrap_or(MOVE_NAMES[NO_MOVE as usize])
}

/// The notation for each code in a list.
pub fn sequence_to_strings(codes: &[u8]) -> Vec<&'static str> {
    codes.iter().map(|&code| move_to_string(code)).collect()
}

/// A sequence written out for people, e.g. `U, R2, F'`.
pub fn describe_sequence(seq: &MoveSequence<Move333>) -> String {
    if seq.is_empty() {
        return "No turns needed!".to_string();
    }
    sequence_to_strings(&seq.codes()).join(", ")
}

/// What is left to do once a stage has finished.
pub fn group_description(stage: Stage) -> String {
    let faces: Vec<String> = stage
        .remaining_faces()
        .iter()
        .map(|face| format!("{face:?}"))
        .collect();
    match faces.as_slice() {
        [] => "The cube is solved.".to_string(),
        [face] => format!("The cube can be solved from here with only the {face} face."),
        [init @ .., last] => format!(
            "The cube can be solved from here with only the {} and {last} faces.",
            init.join(", ")
        ),
    }
}

impl FromStr for Move333 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move333, ParseMoveError> {
        let mut chars = s.trim().chars();
        let face = match chars.next() {
            None => return Err(ParseMoveError::Empty),
            Some('U') => Face::U,
            Some('D') => Face::D,
            Some('L') => Face::L,
            Some('R') => Face::R,
            Some('B') => Face::B,
            Some('F') => Face::F,
            Some(c) => return Err(ParseMoveError::InvalidFace(c)),
        };
        let count = match chars.as_str() {
            "" | "1" => 1,
            "2" | "2'" => 2,
            "'" | "3" => 3,
            other => return Err(ParseMoveError::InvalidAmount(other.to_string())),
        };
        Ok(Move333 { face, count })
    }
}

/// Moves may be separated by whitespace, commas or both.
impl FromStr for MoveSequence<Move333> {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, ParseMoveError> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<Move333>)
            .collect()
    }
}

impl std::fmt::Display for MoveSequence<Move333> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for m in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
            first = false;
        }
        Ok(())
    }
}
