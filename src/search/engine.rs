/// Which search answers the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Engine {
    /// memoized negamax, cache reset per game
    #[default]
    Memo,
    /// every state solved once, openings replayed against it
    Table,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memo => write!(f, "memo"),
            Self::Table => write!(f, "table"),
        }
    }
}
