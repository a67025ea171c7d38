//! Batch input and report output around the search engines.
//!
//! Input is a whitespace-separated token stream: the number of games, then
//! for each game the number of forced moves followed by that many vertex
//! id pairs. The whole batch is validated before anything is solved.

mod batch;
mod game;
mod report;
mod tokens;

pub use batch::*;
pub use game::*;
pub use report::*;
pub use tokens::*;
