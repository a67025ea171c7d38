//! Optimal-play search over edge subsets.
//!
//! Two engines answer the same question. `Solver` is the memoized negamax
//! that replays a forced opening and then explores freely, resetting its
//! cache per game. `Table` solves every state once, bottom-up, and answers
//! each game by replaying its opening against the finished table.

mod cache;
mod candidate;
mod engine;
mod opening;
mod oracle;
mod solver;
mod table;

pub use cache::*;
pub use candidate::*;
pub use engine::*;
pub use opening::*;
pub use oracle::*;
pub use solver::*;
pub use table::*;
