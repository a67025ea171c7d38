use super::tokens::Tokens;
use crate::InputError;
use crate::lattice::Board;
use crate::lattice::Vertex;
use crate::search::Evaluation;
use crate::search::Opening;

use super::report::Report;

/// One numbered game of a batch, its opening resolved to edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    number: usize,
    opening: Opening,
}

impl Game {
    pub fn new(number: usize, opening: Opening) -> Self {
        Self { number, opening }
    }

    /// read a move count and that many vertex pairs
    pub fn parse(number: usize, tokens: &mut Tokens, board: &Board) -> Result<Self, InputError> {
        let moves = tokens.next::<usize>("forced move count")?;
        let mut opening = Opening::new();
        for _ in 0..moves {
            let u = tokens.next::<usize>("vertex id")?;
            let v = tokens.next::<usize>("vertex id")?;
            let edge = board
                .lookup(Vertex::from(u), Vertex::from(v))
                .ok_or(InputError::UnknownEdge { game: number, u, v })?;
            if !opening.push(edge) {
                return Err(InputError::DuplicateMove { game: number, u, v });
            }
        }
        Ok(Self { number, opening })
    }

    pub fn number(&self) -> usize {
        self.number
    }
    pub fn opening(&self) -> &Opening {
        &self.opening
    }
    pub fn report(&self, evaluation: Evaluation) -> Report {
        log::debug!("game {}: value {}", self.number, evaluation.score);
        Report::new(self.number, evaluation)
    }
}
