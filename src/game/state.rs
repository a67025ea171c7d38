use crate::lattice::Edge;

/// The set of claimed edges, regardless of who claimed them.
/// Bit i is set iff edge i has been played, so a lattice may use at most
/// `State::BITS` edges and the whole state space indexes a flat table.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State(u32);

impl State {
    pub const BITS: u32 = u32::BITS;

    pub fn empty() -> Self {
        Self(0)
    }
    /// the lowest `n` bits set
    pub fn full(n: usize) -> Self {
        Self(((1u64 << n) - 1) as u32)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn has(&self, edge: Edge) -> bool {
        (self.0 >> u8::from(edge)) & 1 == 1
    }
    pub fn with(&self, edge: Edge) -> Self {
        *self | edge.mask()
    }
    /// subset test: every bit of `other` is set here
    pub fn covers(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
    /// position in a flat table of all 2^n states
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// unclaimed edges among the first `n`, in increasing id order
    pub fn open(self, n: usize) -> impl Iterator<Item = Edge> {
        (0..n as u8)
            .map(Edge::from)
            .filter(move |edge| !self.has(*edge))
    }
}

impl std::ops::BitOr for State {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
impl std::ops::BitAnd for State {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// u32 isomorphism
impl From<u32> for State {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<State> for u32 {
    fn from(s: State) -> Self {
        s.0
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_masks() {
        assert_eq!(u32::from(State::full(0)), 0);
        assert_eq!(u32::from(State::full(3)), 0b111);
        assert_eq!(u32::from(State::full(18)), 0x3FFFF);
        assert_eq!(u32::from(State::full(32)), u32::MAX);
    }

    #[test]
    fn open_edges() {
        let state = State::from(0b10110u32);
        let open = state.open(6).map(u8::from).collect::<Vec<_>>();
        assert_eq!(open, vec![0, 3, 5]);
        assert_eq!(State::full(6).open(6).count(), 0);
    }

    #[test]
    fn claiming() {
        let state = State::empty().with(Edge::from(3u8)).with(Edge::from(0u8));
        assert_eq!(u32::from(state), 0b1001);
        assert_eq!(state.size(), 2);
        assert!(state.has(Edge::from(3u8)));
        assert!(!state.has(Edge::from(1u8)));
        assert!(state.covers(State::from(0b1000u32)));
        assert!(!state.covers(State::from(0b1010u32)));
    }
}
