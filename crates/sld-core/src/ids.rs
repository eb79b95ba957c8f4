use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable index of a component inside one built graph.
///
/// - `u32` keeps adjacency tables small
/// - `NonZero` enables `Option<NodeIx>` to be pointer-optimized
///
/// Indices are only meaningful for the graph that issued them; the public
/// identity of a component is its string id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIx(NonZeroU32);

impl NodeIx {
    /// Create an index from a 0-based position by storing position+1.
    ///
    /// Returns `None` only for `u32::MAX`, which no realistic diagram reaches.
    pub fn from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Recover the 0-based position.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Position as a slice index.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for NodeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIx({})", self.index())
    }
}

impl fmt::Display for NodeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
