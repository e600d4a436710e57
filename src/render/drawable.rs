use crate::board::*;
use crate::rules::MoveKind;

/// One thing a renderer should put on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Beam polyline, drawn up to `progress` (0..=1) of its total length.
    Laser { path: Vec<Position>, progress: f32 },
    Piece(Piece),
    Selection(Position),
    /// Arrow for a legal option of the piece at `position`.
    Indicator { position: Position, option: MoveKind },
    Turn(Allegiance),
    GameOver(Allegiance),
}

impl Drawable {
    /// Painter's order: lower layers are drawn first.
    pub fn layer(&self) -> u8 {
        match self {
            Self::Laser { .. } => 0,
            Self::Piece(_) => 1,
            Self::Selection(_) => 2,
            Self::Indicator { .. } => 3,
            Self::Turn(_) => 4,
            Self::GameOver(_) => 5,
        }
    }
}

/// Anything that can present a frame of drawables.
pub trait Renderer {
    fn render(&mut self, frame: &[Drawable]);
}
