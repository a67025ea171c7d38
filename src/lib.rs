//! Exhaustive solver for the triangle-completion edge game.
//!
//! Two players alternately claim edges of a fixed triangular lattice.
//! Completing one or more unit triangles scores for the mover and grants
//! another move; any other claim passes the turn. Given a forced opening,
//! we compute the optimal-play score differential and classify the game.
#![allow(dead_code)]

pub mod batch;
pub mod error;
pub mod game;
pub mod lattice;
pub mod search;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Score differentials, from the perspective of whoever is to move.
pub type Score = i32;
/// Rows of the triangular lattice.
pub type Height = usize;

// ============================================================================
// LATTICE PARAMETERS
// ============================================================================
/// Rows in the playing lattice. 10 vertices, 18 edges, 9 unit triangles.
pub const HEIGHT: Height = 4;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Cache sentinel for states whose value has not been computed yet.
/// Far below any reachable differential, which is bounded by the triangle count.
pub const UNSOLVED: Score = -1000;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, so stdout only ever carries reports.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    // a second initialization (e.g. from tests) keeps the first logger
    let _ = simplelog::CombinedLogger::init(vec![term]);
}
