//! A 3x3x3 cube solver that works by reducing the cube through a chain of subgroups, together
//! with a compact bit packed cube representation, move notation and scrambling.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
pub mod notation;
pub mod scramble;
