//! The fixed triangular lattice: vertex numbering, edge numbering,
//! and the unit triangles expressed as edge masks.
//!
//! Vertices sit at skewed coordinates (x, y) with 0 <= x <= y < height,
//! the apex at the origin, y growing downward and x growing rightward.

mod board;
mod direction;
mod edge;
mod point;
mod triangle;
mod vertex;

pub use board::*;
pub use direction::*;
pub use edge::*;
pub use point::*;
pub use triangle::*;
pub use vertex::*;
