use super::game::Game;
use super::report::Report;
use super::tokens::Tokens;
use crate::InputError;
use crate::lattice::Board;
use crate::search::Engine;
use crate::search::Oracle;
use crate::search::Solver;
use crate::search::Table;
use rayon::prelude::*;

/// Every game of one input, validated against the lattice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch(Vec<Game>);

impl Batch {
    /// Read and validate the whole input. The first bad token, unknown
    /// edge or repeated move rejects the batch outright.
    pub fn parse(input: &str, board: &Board) -> Result<Self, InputError> {
        let mut tokens = Tokens::from(input);
        let count = tokens.next::<usize>("game count")?;
        let games = (1..=count)
            .map(|number| Game::parse(number, &mut tokens, board))
            .collect::<Result<Vec<_>, _>>()?;
        match tokens.remaining() {
            0 => {}
            n => log::debug!("ignoring {} trailing tokens", n),
        }
        Ok(Self(games))
    }

    pub fn games(&self) -> &[Game] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Solve games one after another with a single engine instance.
    pub fn solve(&self, board: &Board, engine: Engine) -> Vec<Report> {
        log::info!("solving {} games with {} engine", self.len(), engine);
        match engine {
            Engine::Memo => self.run(&mut Solver::new(board)),
            Engine::Table => self.run(&mut Table::new(board)),
        }
    }

    /// Solve games in parallel. Each memo worker owns its own cache;
    /// the table is built once and shared.
    pub fn solve_par(&self, board: &Board, engine: Engine) -> Vec<Report> {
        log::info!(
            "solving {} games with {} engine on {} threads",
            self.len(),
            engine,
            rayon::current_num_threads()
        );
        match engine {
            Engine::Memo => self
                .0
                .par_iter()
                .map_init(
                    || Solver::new(board),
                    |solver, game| game.report(solver.evaluate(game.opening())),
                )
                .collect(),
            Engine::Table => {
                let table = Table::new(board);
                self.0
                    .par_iter()
                    .map(|game| game.report(table.answer(game.opening())))
                    .collect()
            }
        }
    }

    fn run<O>(&self, oracle: &mut O) -> Vec<Report>
    where
        O: Oracle,
    {
        self.0
            .iter()
            .map(|game| game.report(oracle.evaluate(game.opening())))
            .collect()
    }
}

impl From<Vec<Game>> for Batch {
    fn from(games: Vec<Game>) -> Self {
        Self(games)
    }
}
