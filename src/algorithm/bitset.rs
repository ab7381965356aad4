use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which indices of `0..capacity` are taken
///
/// Used to record committed rows and columns during assignment and to check
/// that orderings visit every index exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexBitset {
    bits: BitVec,
    capacity: usize,
}

impl IndexBitset {
    /// Create a bitset with no indices present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert an index
    ///
    /// Returns `true` if the index was newly inserted, `false` if it was
    /// already present or out of range
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test index membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of indices present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether every index of `0..capacity` is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Whether no index is present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Upper bound (exclusive) on storable indices
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Present indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for IndexBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for index in self.bits.iter_ones() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        write!(f, "}}")
    }
}
