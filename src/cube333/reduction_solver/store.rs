//! The frontier of one side of a bidirectional search.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use fnv::FnvHashMap;

use crate::cube333::moves::Move333;
use crate::cube333::{BitCube, Face};
use crate::moves::MoveSequence;

/// A state waiting to be expanded, with the moves that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The (usually masked) state.
    pub cube: BitCube,
    /// The moves from the side's root to this state.
    pub sequence: MoveSequence<Move333>,
    /// The move that produced this state, used to pick successors.
    pub last: Option<Move333>,
}

impl SearchNode {
    /// A node with no history.
    pub fn root(cube: BitCube) -> Self {
        Self {
            cube,
            sequence: MoveSequence::new(),
            last: None,
        }
    }

    /// The node reached by applying `m`.
    pub fn advance(&self, m: Move333) -> Self {
        let mut sequence = self.sequence.clone();
        sequence.0.push(m);
        Self {
            cube: self.cube.make_move(m),
            sequence,
            last: Some(m),
        }
    }
}

// Words of a state in the order they are used as trie keys.
const KEY_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::B, Face::L, Face::D];

/// Maps states to the first sequence recorded for them.
///
/// The map is a six level trie keyed on one face word per level. The first five levels live in
/// `branches`, an arena addressed by index with the root at 0; the last level's maps live in
/// `leaves` and hold the sequences.
#[derive(Debug, Clone)]
struct StateTrie {
    branches: Vec<FnvHashMap<u32, usize>>,
    leaves: Vec<FnvHashMap<u32, MoveSequence<Move333>>>,
}

impl StateTrie {
    fn new() -> Self {
        Self {
            branches: vec![FnvHashMap::default()],
            leaves: Vec::new(),
        }
    }

    fn leaf_index(&self, cube: &BitCube) -> Option<usize> {
        KEY_ORDER[..5]
            .iter()
            .try_fold(0, |node, face| self.branches[node].get(&cube.face(*face)).copied())
    }

    /// Insert unless the state is already present. Returns whether it was inserted.
    fn insert(&mut self, cube: &BitCube, sequence: &MoveSequence<Move333>) -> bool {
        let mut node = 0;
        for (depth, face) in KEY_ORDER[..5].iter().enumerate() {
            let key = cube.face(*face);
            let existing = self.branches[node].get(&key).copied();
            node = match existing {
                Some(next) => next,
                None => {
                    let next = if depth < 4 {
                        self.branches.push(FnvHashMap::default());
                        self.branches.len() - 1
                    } else {
                        self.leaves.push(FnvHashMap::default());
                        self.leaves.len() - 1
                    };
                    self.branches[node].insert(key, next);
                    next
                }
            };
        }

        match self.leaves[node].entry(cube.face(KEY_ORDER[5])) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(sequence.clone());
                true
            }
        }
    }

    fn get(&self, cube: &BitCube) -> Option<&MoveSequence<Move333>> {
        let leaf = self.leaf_index(cube)?;
        self.leaves[leaf].get(&cube.face(KEY_ORDER[5]))
    }
}

/// A set of seen states together with a FIFO queue of states still to expand.
#[derive(Debug, Clone)]
pub struct CubeStore {
    seen: StateTrie,
    queue: VecDeque<SearchNode>,
    len: usize,
}

impl Default for CubeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            seen: StateTrie::new(),
            queue: VecDeque::new(),
            len: 0,
        }
    }

    /// Record a node if its state has not been seen before, queueing it for expansion. Returns
    /// whether the node was new. A state keeps the sequence it was first added with.
    pub fn add(&mut self, node: SearchNode) -> bool {
        if !self.seen.insert(&node.cube, &node.sequence) {
            return false;
        }
        self.len += 1;
        self.queue.push_back(node);
        true
    }

    /// Whether the state has been added.
    pub fn contains(&self, cube: &BitCube) -> bool {
        self.seen.get(cube).is_some()
    }

    /// Take the oldest node off the queue. The state stays in the store.
    pub fn dequeue(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    /// The sequence recorded for a state, if it was ever added.
    pub fn sequence_for(&self, cube: &BitCube) -> Option<&MoveSequence<Move333>> {
        self.seen.get(cube)
    }

    /// The number of distinct states added.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes waiting to be expanded.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mv;

    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn first_writer_wins() {
        let mut store = CubeStore::new();
        let cube = BitCube::SOLVED.make_move(mv!(R, 1));
        let first = SearchNode {
            cube,
            sequence: MoveSequence(vec![mv!(R, 1)]),
            last: Some(mv!(R, 1)),
        };
        let second = SearchNode {
            cube,
            sequence: MoveSequence(vec![mv!(R, 3), mv!(R, 2)]),
            last: Some(mv!(R, 2)),
        };

        assert!(store.add(first.clone()));
        assert!(!store.add(second));
        assert_eq!(store.len(), 1);
        assert_eq!(store.sequence_for(&cube), Some(&first.sequence));
        assert_eq!(store.dequeue(), Some(first));
        assert_eq!(store.dequeue(), None);
        // dequeueing does not forget the state
        assert!(store.contains(&cube));
    }

    #[test]
    fn missing_states() {
        let mut store = CubeStore::new();
        assert!(store.is_empty());
        assert!(!store.contains(&BitCube::SOLVED));
        assert_eq!(store.sequence_for(&BitCube::SOLVED), None);

        store.add(SearchNode::root(BitCube::SOLVED));
        let d = BitCube::SOLVED.make_move(mv!(D, 1));
        // differs only in the last key word
        let mut only_d = BitCube::SOLVED;
        only_d.set_sticker(Face::D, 0, 0xC);
        assert!(!store.contains(&only_d));
        assert!(!store.contains(&d));
        assert!(store.contains(&BitCube::SOLVED));
    }

    #[test]
    fn fifo_order() {
        let mut store = CubeStore::new();
        let root = SearchNode::root(BitCube::SOLVED);
        let nodes = [mv!(U, 1), mv!(F, 2), mv!(L, 3)].map(|m| root.advance(m));
        for node in &nodes {
            assert!(store.add(node.clone()));
        }
        assert_eq!(store.queued(), 3);
        for node in nodes {
            assert_eq!(store.dequeue(), Some(node));
        }
    }

    #[test]
    fn advance() {
        let node = SearchNode::root(BitCube::SOLVED).advance(mv!(B, 2));
        assert_eq!(node.cube, BitCube::SOLVED.make_move(mv!(B, 2)));
        assert_eq!(node.sequence, MoveSequence(vec![mv!(B, 2)]));
        assert_eq!(node.last, Some(mv!(B, 2)));
    }

    proptest! {
        #[test]
        fn behaves_like_a_map(seqs in vec(vec(any::<Move333>(), 0..6), 0..40)) {
            let mut store = CubeStore::new();
            let mut reference = std::collections::HashMap::new();
            for seq in seqs {
                let node = SearchNode {
                    cube: BitCube::SOLVED.make_moves(&seq),
                    sequence: MoveSequence(seq),
                    last: None,
                };
                let new = !reference.contains_key(&node.cube);
                if new {
                    reference.insert(node.cube, node.sequence.clone());
                }
                prop_assert_eq!(store.add(node), new);
            }
            prop_assert_eq!(store.len(), reference.len());
            for (cube, sequence) in &reference {
                prop_assert_eq!(store.sequence_for(cube), Some(sequence));
            }
        }
    }
}
