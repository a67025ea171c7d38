use super::player::Player;
use crate::Score;
use serde::Serialize;

/// Result of optimal play, decided by the sign of the first mover's differential.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win(Player),
    Tie,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Win(player) => Some(*player),
            Self::Tie => None,
        }
    }
}

impl From<Score> for Outcome {
    fn from(score: Score) -> Self {
        match score.signum() {
            1 => Self::Win(Player::A),
            -1 => Self::Win(Player::B),
            _ => Self::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win(player) => write!(f, "{} wins.", player),
            Self::Tie => write!(f, "Tie game."),
        }
    }
}
