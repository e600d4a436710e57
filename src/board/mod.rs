//! Board model: immutable-shape data types with basic queries.
pub mod allegiance;
pub use allegiance::*;

pub mod direction;
pub use direction::*;

pub mod grid;
pub use grid::*;

pub mod piece;
pub use piece::*;

pub mod position;
pub use position::*;

pub mod state;
pub use state::*;
