//! Game rules: move validation, laser propagation, and the authoritative game.
pub mod game;
pub use game::*;

pub mod laser;
pub use laser::*;

pub mod movement;
pub use movement::*;
