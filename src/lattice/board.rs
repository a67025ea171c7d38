use super::direction::Direction;
use super::edge::Edge;
use super::point::Point;
use super::triangle::Triangle;
use super::vertex::Vertex;
use crate::BoardError;
use crate::Height;
use crate::Score;
use crate::game::State;
use std::collections::BTreeMap;

/// The immutable lattice. Built once, then shared read-only by every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: Height,
    endpoints: Vec<(Vertex, Vertex)>,
    lookup: BTreeMap<(Vertex, Vertex), Edge>,
    triangles: Vec<Triangle>,
}

impl Board {
    /// Number the vertices, then the edges, then collect the unit triangles.
    pub fn new(height: Height) -> Result<Self, BoardError> {
        if height == 0 {
            return Err(BoardError::Degenerate);
        }
        let edges = Self::edges_for(height);
        if edges > State::BITS as usize {
            return Err(BoardError::TooManyEdges {
                height,
                edges,
                width: State::BITS,
            });
        }
        let mut endpoints = Vec::with_capacity(edges);
        let mut lookup = BTreeMap::new();
        for point in Point::all(height) {
            for direction in Direction::all() {
                let other = point.step(*direction);
                if other.contains(height) {
                    let u = Vertex::from(point);
                    let v = Vertex::from(other);
                    let edge = Edge::from(endpoints.len() as u8);
                    endpoints.push((u, v));
                    lookup.insert((u, v), edge);
                    lookup.insert((v, u), edge);
                }
            }
        }
        let mut board = Self {
            height,
            endpoints,
            lookup,
            triangles: Vec::new(),
        };
        board.triangles = board.enumerate();
        log::debug!(
            "lattice of height {}: {} vertices, {} edges, {} triangles",
            board.height,
            board.vertex_count(),
            board.edge_count(),
            board.triangles.len()
        );
        Ok(board)
    }

    /// each point is the bottom-right corner of at most one upward
    /// triangle and the top-left corner of at most one downward triangle
    fn enumerate(&self) -> Vec<Triangle> {
        let mut triangles = Vec::new();
        for point in Point::all(self.height) {
            let corners = [
                (point.shift(-1, -1), point.shift(0, -1)),
                (point.shift(1, 1), point.shift(0, 1)),
            ];
            for (a, b) in corners {
                if a.contains(self.height) && b.contains(self.height) {
                    if let Some(triangle) = self.triangle(point, a, b) {
                        triangles.push(triangle);
                    }
                }
            }
        }
        triangles
    }

    fn triangle(&self, p: Point, a: Point, b: Point) -> Option<Triangle> {
        let p = Vertex::from(p);
        let a = Vertex::from(a);
        let b = Vertex::from(b);
        [(p, a), (a, b), (p, b)]
            .into_iter()
            .map(|(u, v)| self.lookup(u, v))
            .collect::<Option<Vec<Edge>>>()
            .map(|edges| edges.into_iter().collect::<Triangle>())
    }

    /// edges in a lattice of the given height: three per unit of the
    /// triangular number below it
    pub const fn edges_for(height: Height) -> usize {
        3 * height * height.saturating_sub(1) / 2
    }

    pub fn height(&self) -> Height {
        self.height
    }
    pub fn vertex_count(&self) -> usize {
        self.height * (self.height + 1) / 2
    }
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.endpoints.len()).map(|i| Edge::from(i as u8))
    }
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
    /// every edge claimed
    pub fn full(&self) -> State {
        State::full(self.edge_count())
    }

    /// the vertex pair an edge was registered with, in traversal order
    pub fn endpoints(&self, edge: Edge) -> (Vertex, Vertex) {
        self.endpoints[usize::from(edge)]
    }
    /// symmetric: (u, v) and (v, u) name the same edge
    pub fn lookup(&self, u: Vertex, v: Vertex) -> Option<Edge> {
        self.lookup.get(&(u, v)).copied()
    }

    /// triangles completed by going from `before` to `after`
    pub fn delta(&self, before: State, after: State) -> Score {
        self.triangles
            .iter()
            .filter(|t| !t.complete(before) && t.complete(after))
            .count() as Score
    }
    /// claim one edge, returning the child state and the points it scores
    pub fn claim(&self, state: State, edge: Edge) -> (State, Score) {
        let child = state.with(edge);
        (child, self.delta(state, child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Board {
        Board::new(crate::HEIGHT).expect("standard lattice")
    }

    #[test]
    fn dimensions() {
        let board = standard();
        assert_eq!(board.vertex_count(), 10);
        assert_eq!(board.edge_count(), 18);
        assert_eq!(board.triangles().len(), 9);
        assert_eq!(Board::edges_for(crate::HEIGHT), 18);
    }

    #[test]
    fn deterministic() {
        assert_eq!(standard(), standard());
    }

    #[test]
    fn edge_numbering() {
        let board = standard();
        let expected: [(usize, usize); 18] = [
            (1, 2),
            (1, 3),
            (2, 4),
            (2, 5),
            (2, 3),
            (3, 5),
            (3, 6),
            (4, 7),
            (4, 8),
            (4, 5),
            (5, 8),
            (5, 9),
            (5, 6),
            (6, 9),
            (6, 10),
            (7, 8),
            (8, 9),
            (9, 10),
        ];
        for (edge, (u, v)) in board.edges().zip(expected) {
            assert_eq!(board.endpoints(edge), (Vertex::from(u), Vertex::from(v)));
        }
    }

    #[test]
    fn triangle_numbering() {
        let board = standard();
        let expected: [[u8; 3]; 9] = [
            [0, 1, 4],
            [2, 3, 9],
            [5, 6, 12],
            [7, 8, 15],
            [3, 4, 5],
            [10, 11, 16],
            [13, 14, 17],
            [8, 9, 10],
            [11, 12, 13],
        ];
        for (triangle, edges) in board.triangles().iter().zip(expected) {
            let mask = edges.into_iter().map(Edge::from).collect::<Triangle>();
            assert_eq!(*triangle, mask);
        }
    }

    #[test]
    fn symmetric_lookup() {
        let board = standard();
        for edge in board.edges() {
            let (u, v) = board.endpoints(edge);
            assert_eq!(board.lookup(u, v), Some(edge));
            assert_eq!(board.lookup(v, u), Some(edge));
        }
        assert_eq!(board.lookup(Vertex::from(1usize), Vertex::from(4usize)), None);
        assert_eq!(board.lookup(Vertex::from(1usize), Vertex::from(1usize)), None);
        assert_eq!(board.lookup(Vertex::from(10usize), Vertex::from(11usize)), None);
    }

    #[test]
    fn triangles_are_closed_loops() {
        let board = standard();
        for triangle in board.triangles() {
            assert_eq!(triangle.mask().size(), 3);
            let mut degree = BTreeMap::<Vertex, usize>::new();
            for edge in board.edges().filter(|e| triangle.borders(*e)) {
                let (u, v) = board.endpoints(edge);
                *degree.entry(u).or_default() += 1;
                *degree.entry(v).or_default() += 1;
            }
            assert_eq!(degree.len(), 3);
            assert!(degree.values().all(|d| *d == 2));
        }
    }

    #[test]
    fn delta_is_bounded() {
        let board = standard();
        for seed in [0u32, 0x0F0F0, 0x15555, 0x2AAAA, 0x3FFF0, 0x1B3D7] {
            let state = State::from(seed) & board.full();
            for edge in state.open(board.edge_count()) {
                let (child, delta) = board.claim(state, edge);
                assert_eq!(child.size(), state.size() + 1);
                assert!((0..=2).contains(&delta));
            }
        }
    }

    #[test]
    fn delta_counts_both_sides() {
        let board = standard();
        // edge 4 (2-3) borders triangles {0,1,4} and {3,4,5}
        let before = State::from(0b0000_0000_0000_1011u32) | Edge::from(5u8).mask();
        assert_eq!(board.claim(before, Edge::from(4u8)).1, 2);
        assert_eq!(board.claim(State::empty(), Edge::from(4u8)).1, 0);
    }

    #[test]
    fn minimal_lattices() {
        let single = Board::new(1).expect("single vertex");
        assert_eq!(single.edge_count(), 0);
        assert!(single.triangles().is_empty());
        let one = Board::new(2).expect("one triangle");
        assert_eq!(one.vertex_count(), 3);
        assert_eq!(one.edge_count(), 3);
        assert_eq!(one.triangles().len(), 1);
        assert_eq!(one.triangles()[0].mask(), one.full());
    }

    #[test]
    fn too_many_edges() {
        assert!(Board::new(5).is_ok());
        assert_eq!(
            Board::new(6),
            Err(BoardError::TooManyEdges {
                height: 6,
                edges: 45,
                width: 32,
            })
        );
        assert_eq!(Board::new(0), Err(BoardError::Degenerate));
    }
}
