//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube333::reduction_solver::Stage;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error type for reading moves written in standard notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// there was no move to read
    #[error("expected a move but found nothing")]
    Empty,
    /// the move did not start with one of U, D, L, R, B or F
    #[error("'{0}' is not a face")]
    InvalidFace(char),
    /// the text after the face was not empty, 2 or '
    #[error("'{0}' is not a turn amount")]
    InvalidAmount(String),
}

/// Error type for a solver stage that could not bring the cube into its subgroup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// both search frontiers ran out of states without meeting
    #[error("search for {stage} ran out of states, the cube is not solvable")]
    Exhausted {
        /// the stage that failed
        stage: Stage,
    },
    /// none of the moves the stage tries reached its subgroup
    #[error("no move reaches {stage}, the cube was not in the expected subgroup")]
    NotInSubgroup {
        /// the stage that failed
        stage: Stage,
    },
}
