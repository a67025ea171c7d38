use crate::Height;
use thiserror::Error;

/// Errors raised while laying out the lattice. These are configuration
/// mistakes: no game on such a board could ever be represented.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A lattice needs at least one row.
    #[error("lattice height must be positive")]
    Degenerate,
    /// The lattice has more edges than a state mask has bits.
    #[error("lattice of height {height} has {edges} edges, but states only hold {width} bits")]
    TooManyEdges {
        /// Requested lattice height.
        height: Height,
        /// Edges the lattice would need.
        edges: usize,
        /// Usable bits in a state mask.
        width: u32,
    },
}

/// Errors raised while reading a batch of games. Any of these aborts the
/// whole batch; there is no per-game recovery.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The input ended before a required integer.
    #[error("unexpected end of input while reading {what}")]
    Missing {
        /// Which value was expected.
        what: &'static str,
    },
    /// A token could not be read as the required integer.
    #[error("expected {what}, found {token:?}")]
    Malformed {
        /// Which value was expected.
        what: &'static str,
        /// The offending token.
        token: String,
    },
    /// A forced move names two vertices that share no edge.
    #[error("game {game}: vertices {u} and {v} are not joined by an edge")]
    UnknownEdge {
        /// 1-based game number.
        game: usize,
        /// First vertex id.
        u: usize,
        /// Second vertex id.
        v: usize,
    },
    /// A forced move repeats an edge already played in the same game.
    #[error("game {game}: edge {u}-{v} is played twice")]
    DuplicateMove {
        /// 1-based game number.
        game: usize,
        /// First vertex id.
        u: usize,
        /// Second vertex id.
        v: usize,
    },
}

/// Any fatal error the solver can report.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Board(#[from] BoardError),
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = Error::from(InputError::DuplicateMove { game: 2, u: 1, v: 3 });
        assert_eq!(
            error.to_string(),
            "input error: game 2: edge 1-3 is played twice"
        );
        let error = Error::from(BoardError::TooManyEdges {
            height: 6,
            edges: 45,
            width: 32,
        });
        assert!(error.to_string().starts_with("configuration error: "));
    }
}
