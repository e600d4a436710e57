use super::*;
use crate::board::*;

/// Builder for one frame of drawables.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    drawables: Vec<Drawable>,
}

impl From<&BoardState> for Scene {
    fn from(board: &BoardState) -> Self {
        Self {
            drawables: board.pieces().iter().copied().map(Drawable::Piece).collect(),
        }
    }
}

impl Scene {
    /// Highlight a piece and overlay its legal options for `player`.
    pub fn select(mut self, board: &BoardState, position: Position, player: Allegiance) -> Self {
        self.drawables.push(Drawable::Selection(position));
        self.drawables.extend(
            board
                .options(position, player)
                .into_iter()
                .map(|option| Drawable::Indicator { position, option }),
        );
        self
    }
    pub fn laser(mut self, path: &[Position], progress: f32) -> Self {
        self.drawables.push(Drawable::Laser {
            path: path.to_vec(),
            progress: progress.clamp(0.0, 1.0),
        });
        self
    }
    pub fn turn(mut self, allegiance: Allegiance) -> Self {
        self.drawables.push(Drawable::Turn(allegiance));
        self
    }
    pub fn winner(mut self, allegiance: Allegiance) -> Self {
        self.drawables.push(Drawable::GameOver(allegiance));
        self
    }
    /// Drawables in painter's order.
    pub fn build(mut self) -> Vec<Drawable> {
        self.drawables.sort_by_key(Drawable::layer);
        self.drawables
    }
}
