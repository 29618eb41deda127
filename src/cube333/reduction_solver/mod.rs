//! A solver that takes the cube through a chain of nested subgroups, each generated by fewer
//! faces than the last:
//!
//! ```text
//! <U, D, L, R, B, F>       any state
//! <U, D, L, R>             G4, edges oriented
//! <U, L, R>                G3, edges oriented and the DF and DB edges placed
//! <U, R>                   G2, the left 2x2x3 block solved
//! <U>                      G1
//! {}                       G0, solved
//! ```
//!
//! The first three stages only look at the stickers that define their subgroup, masking the
//! rest away, and meet in the middle between the masked cube and the masked goal. Every stage
//! is a breadth first search so stage solutions are short, but the total is not optimal.

mod adjacency;
mod search;
mod store;

pub use adjacency::{may_follow, AdjacencyTable};
pub use store::{CubeStore, SearchNode};

use log::{debug, trace};

use super::moves::Move333;
use super::{BitCube, Face};
use crate::error::SolveError;
use crate::moves::MoveSequence;
use crate::mv;

/// A subgroup a stage of the solver finishes in. The stage that reaches `G4` is the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Every edge oriented.
    G4,
    /// Edges oriented with the DF and DB edges in place.
    G3,
    /// The left 2x2x3 block solved and the rest reachable with U and R.
    G2,
    /// Solved apart from the U layer.
    G1,
    /// Solved.
    G0,
}

impl Stage {
    /// Every stage in solving order.
    pub const ALL: [Stage; 5] = [Stage::G4, Stage::G3, Stage::G2, Stage::G1, Stage::G0];

    /// The faces that can finish the cube once this stage is done.
    pub fn remaining_faces(self) -> &'static [Face] {
        match self {
            Stage::G4 => &[Face::U, Face::R, Face::L, Face::D],
            Stage::G3 => &[Face::U, Face::R, Face::L],
            Stage::G2 => &[Face::U, Face::R],
            Stage::G1 => &[Face::U],
            Stage::G0 => &[],
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The sequences found by each stage of a solve, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Each stage with the moves it used.
    pub stages: Vec<(Stage, MoveSequence<Move333>)>,
}

impl Solution {
    /// The whole solution as one sequence.
    pub fn moves(&self) -> MoveSequence<Move333> {
        self.stages
            .iter()
            .flat_map(|(_, seq)| seq.iter().copied())
            .collect()
    }

    /// The total number of moves.
    pub fn len(&self) -> usize {
        self.stages.iter().map(|(_, seq)| seq.len()).sum()
    }

    /// Whether no stage needed any moves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const U_TURNS: &[Move333] = &[mv!(U, 1), mv!(U, 2), mv!(U, 3)];

// Moves are listed in code order so ties between equally short solutions break the same way
// every time.
const G4_MOVES: &[Move333] = &[
    mv!(U, 1),
    mv!(D, 1),
    mv!(L, 1),
    mv!(R, 1),
    mv!(F, 1),
    mv!(U, 2),
    mv!(D, 2),
    mv!(L, 2),
    mv!(R, 2),
    mv!(F, 2),
    mv!(U, 3),
    mv!(D, 3),
    mv!(L, 3),
    mv!(R, 3),
    mv!(F, 3),
];

const G3_MOVES: &[Move333] = &[
    mv!(U, 1),
    mv!(D, 1),
    mv!(L, 1),
    mv!(R, 1),
    mv!(U, 2),
    mv!(D, 2),
    mv!(L, 2),
    mv!(R, 2),
    mv!(U, 3),
    mv!(D, 3),
    mv!(L, 3),
    mv!(R, 3),
];

const G2_MOVES: &[Move333] = &[
    mv!(U, 1),
    mv!(L, 1),
    mv!(R, 1),
    mv!(U, 2),
    mv!(L, 2),
    mv!(R, 2),
    mv!(U, 3),
    mv!(L, 3),
    mv!(R, 3),
];

const G1_MOVES: &[Move333] = &[
    mv!(U, 1),
    mv!(U, 2),
    mv!(U, 3),
    mv!(R, 1),
    mv!(R, 2),
    mv!(R, 3),
];

/// A stage that searches on a masked cube.
trait MaskedStage {
    const STAGE: Stage;
    /// The mask of every cube in the stage's subgroup.
    const TARGET: BitCube;
    /// Moves that can end the stage; the search grows its goal side from the target turned by
    /// each of them.
    const CLOSING_MOVES: &'static [Move333];
    const MOVES: &'static [Move333];

    fn mask(cube: &BitCube) -> BitCube;

    /// A check on the full cube that a masked solution must also pass.
    fn accepts(_cube: &BitCube) -> bool {
        true
    }
}

/// Keep the stickers for which `keep` returns a colour, zeroing the rest.
fn mask_stickers(cube: &BitCube, keep: impl Fn(Face, usize, u32) -> Option<u32>) -> BitCube {
    let mut masked = BitCube::EMPTY;
    for face in Face::ARRAY {
        for slot in 0..8 {
            if let Some(colour) = keep(face, slot, cube.sticker(face, slot)) {
                masked.set_sticker(face, slot, colour);
            }
        }
    }
    masked
}

const WILDCARD: u32 = 0xF;

struct OrientEdges;
struct PlaceLineEdges;
struct BuildLeftBlock;

impl MaskedStage for OrientEdges {
    const STAGE: Stage = Stage::G4;
    const TARGET: BitCube = BitCube::from_faces([
        0x0F0F0F0F, 0x0F0F0F0F, 0, 0, 0x000F000F, 0x000F000F,
    ]);
    const CLOSING_MOVES: &'static [Move333] = &[mv!(F, 1), mv!(F, 3)];
    const MOVES: &'static [Move333] = G4_MOVES;

    // The U or D sticker of every edge, and the F or B sticker of the middle layer edges. All
    // are marked the same so only orientation is seen.
    fn mask(cube: &BitCube) -> BitCube {
        let (u, d) = (Face::U.colour(), Face::D.colour());
        let (f, b) = (Face::F.colour(), Face::B.colour());
        let (l, r) = (Face::L.colour(), Face::R.colour());
        mask_stickers(cube, |face, slot, colour| {
            if slot % 2 == 1 {
                return None;
            }
            let partner = cube.related_edge(face, slot);
            let keep = colour == u
                || colour == d
                || ((colour == f || colour == b) && (partner == l || partner == r));
            keep.then_some(WILDCARD)
        })
    }
}

impl MaskedStage for PlaceLineEdges {
    const STAGE: Stage = Stage::G3;
    const TARGET: BitCube = BitCube::from_faces([0, 0, 0, 0, 0x900, 0x600]);
    const CLOSING_MOVES: &'static [Move333] = &[mv!(D, 1), mv!(D, 2), mv!(D, 3)];
    const MOVES: &'static [Move333] = G3_MOVES;

    // The F or B sticker of the DF and DB edges.
    fn mask(cube: &BitCube) -> BitCube {
        let d = Face::D.colour();
        let (f, b) = (Face::F.colour(), Face::B.colour());
        mask_stickers(cube, |face, slot, colour| {
            let keep = slot % 2 == 0
                && (colour == f || colour == b)
                && cube.related_edge(face, slot) == d;
            keep.then_some(colour)
        })
    }
}

impl MaskedStage for BuildLeftBlock {
    const STAGE: Stage = Stage::G2;
    const TARGET: BitCube = BitCube::from_faces([0, 0xA, 0, 0, 0x99000, 0x66]);
    const CLOSING_MOVES: &'static [Move333] = &[mv!(L, 1), mv!(L, 2), mv!(L, 3)];
    const MOVES: &'static [Move333] = G2_MOVES;

    // The non L sticker of the DL, BL and FL edges, plus the B sticker of DBL and the F sticker
    // of DFL. UL is left out since the U layer is still free.
    fn mask(cube: &BitCube) -> BitCube {
        let (u, d, l) = (Face::U.colour(), Face::D.colour(), Face::L.colour());
        let (f, b) = (Face::F.colour(), Face::B.colour());
        mask_stickers(cube, |face, slot, colour| {
            let keep = if slot % 2 == 0 {
                colour != u && cube.related_edge(face, slot) == l
            } else {
                let clockwise = cube.clockwise_related_corner(face, slot);
                (colour == b && clockwise == l) || (colour == f && clockwise == d)
            };
            keep.then_some(colour)
        })
    }

    fn accepts(cube: &BitCube) -> bool {
        cube.is_two_gen_reachable_given_left_block()
    }
}

/// Solves the cube one subgroup at a time. Building one precomputes the move tables for every
/// stage, after which it can solve any number of cubes.
#[derive(Debug, Clone)]
pub struct ReductionSolver {
    g4_moves: AdjacencyTable,
    g3_moves: AdjacencyTable,
    g2_moves: AdjacencyTable,
    g1_moves: AdjacencyTable,
}

impl Default for ReductionSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ReductionSolver {
    /// Create a solver.
    pub fn new() -> Self {
        Self {
            g4_moves: AdjacencyTable::new(OrientEdges::MOVES),
            g3_moves: AdjacencyTable::new(PlaceLineEdges::MOVES),
            g2_moves: AdjacencyTable::new(BuildLeftBlock::MOVES),
            g1_moves: AdjacencyTable::new(G1_MOVES),
        }
    }

    /// Obtain a solving sequence for the cube, split by stage. Applying [`Solution::moves`] to
    /// the cube solves it.
    pub fn solve(&self, cube: &BitCube) -> Result<Solution, SolveError> {
        let mut cube = *cube;
        let mut stages = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let seq = self.solve_stage(stage, &cube)?;
            debug!("{stage}: {} moves", seq.len());
            cube = cube.make_moves(&seq);
            stages.push((stage, seq));
        }
        Ok(Solution { stages })
    }

    /// Run a single stage. The cube must already be in the previous stage's subgroup.
    pub fn solve_stage(
        &self,
        stage: Stage,
        cube: &BitCube,
    ) -> Result<MoveSequence<Move333>, SolveError> {
        match stage {
            Stage::G4 => self.solve_to_g4(cube),
            Stage::G3 => self.solve_to_g3(cube),
            Stage::G2 => self.solve_to_g2(cube),
            Stage::G1 => self.solve_to_g1(cube),
            Stage::G0 => self.solve_to_g0(cube),
        }
    }

    /// Orient every edge, so that the cube can be solved without quarter turns of F or B.
    pub fn solve_to_g4(&self, cube: &BitCube) -> Result<MoveSequence<Move333>, SolveError> {
        self.solve_masked::<OrientEdges>(cube, &self.g4_moves)
    }

    /// Place the DF and DB edges, so that the cube can be solved with U, L and R. Expects a cube
    /// in G4.
    pub fn solve_to_g3(&self, cube: &BitCube) -> Result<MoveSequence<Move333>, SolveError> {
        self.solve_masked::<PlaceLineEdges>(cube, &self.g3_moves)
    }

    /// Build the left 2x2x3 block, such that the rest can be solved with U and R. Expects a cube
    /// in G3.
    pub fn solve_to_g2(&self, cube: &BitCube) -> Result<MoveSequence<Move333>, SolveError> {
        self.solve_masked::<BuildLeftBlock>(cube, &self.g2_moves)
    }

    /// Solve everything but the U layer's rotation. Expects a cube in G2.
    pub fn solve_to_g1(&self, cube: &BitCube) -> Result<MoveSequence<Move333>, SolveError> {
        if cube.is_solved() {
            return Ok(MoveSequence::new());
        }

        // any U turn of the solved cube is good enough, so all of them are goals
        let mut targets = CubeStore::new();
        for &m in U_TURNS {
            targets.add(SearchNode {
                cube: BitCube::SOLVED.make_move(m),
                sequence: MoveSequence::new(),
                last: Some(m),
            });
        }
        targets.add(SearchNode::root(BitCube::SOLVED));

        if targets.contains(cube) {
            trace!("{}: only a U turn away from solved", Stage::G1);
            return Ok(MoveSequence::new());
        }

        search::bidirectional_search(Stage::G1, *cube, targets, &self.g1_moves, |_| true)
    }

    /// Finish the cube with a U turn. Expects a cube in G1.
    pub fn solve_to_g0(&self, cube: &BitCube) -> Result<MoveSequence<Move333>, SolveError> {
        if cube.is_solved() {
            return Ok(MoveSequence::new());
        }
        U_TURNS
            .iter()
            .find(|&&m| cube.make_move(m).is_solved())
            .map(|&m| MoveSequence(vec![m]))
            .ok_or(SolveError::NotInSubgroup { stage: Stage::G0 })
    }

    fn solve_masked<S: MaskedStage>(
        &self,
        cube: &BitCube,
        moves: &AdjacencyTable,
    ) -> Result<MoveSequence<Move333>, SolveError> {
        let start = S::mask(cube);
        if start == S::TARGET && S::accepts(cube) {
            trace!("{}: already in the subgroup", S::STAGE);
            return Ok(MoveSequence::new());
        }

        let mut targets = CubeStore::new();
        let goal = SearchNode::root(S::TARGET);
        for &m in S::CLOSING_MOVES {
            targets.add(goal.advance(m));
        }

        if let Some(closing) = targets.sequence_for(&start) {
            let shortcut = closing.clone().inverse();
            if S::accepts(&cube.make_moves(&shortcut)) {
                trace!("{}: one move from the subgroup", S::STAGE);
                return Ok(shortcut);
            }
        }

        search::bidirectional_search(S::STAGE, start, targets, moves, |seq| {
            S::accepts(&cube.make_moves(seq))
        })
    }
}
