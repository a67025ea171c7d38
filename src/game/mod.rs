mod outcome;
mod player;
mod state;

pub use outcome::*;
pub use player::*;
pub use state::*;
