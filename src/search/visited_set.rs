use smallvec::{smallvec, SmallVec};

const WORD_BITS: usize = u64::BITS as usize;

/// Index of a point within one optimisation run, i.e. its position in the
/// deduplicated request.
pub type PointIndex = usize;

/// A fixed size bitset over the points of one run. Two sets with the same
/// members compare and hash equal no matter in which order the members were
/// added.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VisitedSet {
    words: SmallVec<[u64; 1]>,
}

impl VisitedSet {
    /// An empty set able to hold indices `0..num_points`.
    pub fn new(num_points: usize) -> Self {
        let num_words = num_points.div_ceil(WORD_BITS).max(1);
        Self {
            words: smallvec![0; num_words],
        }
    }

    /// A copy of this set with `index` added. The original is left untouched.
    pub fn with(&self, index: PointIndex) -> Self {
        let mut words = self.words.clone();
        words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        Self { words }
    }

    pub fn contains(&self, index: PointIndex) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| word & (1u64 << (index % WORD_BITS)) != 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Indices in `0..num_points` that are not in the set, ascending.
    pub fn missing(&self, num_points: usize) -> impl Iterator<Item = PointIndex> + '_ {
        (0..num_points).filter(move |&i| !self.contains(i))
    }
}

impl std::fmt::Debug for VisitedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: Vec<PointIndex> = (0..self.words.len() * WORD_BITS)
            .filter(|&i| self.contains(i))
            .collect();
        f.debug_set().entries(members).finish()
    }
}
