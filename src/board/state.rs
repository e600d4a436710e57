use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Ordered collection of live pieces on a grid.
///
/// Order is insertion order and carries no game meaning, but indices are
/// stable for the duration of one controller turn so a laser hit can name
/// the struck piece by index. Cloning yields an independent snapshot; every
/// hand-off between tasks is such a clone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    pieces: Vec<Piece>,
}

impl BoardState {
    pub fn new(grid: Grid, pieces: Vec<Piece>) -> Self {
        debug_assert!(pieces.iter().all(|p| grid.contains(p.position)));
        Self { grid, pieces }
    }
    pub fn grid(&self) -> Grid {
        self.grid
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    pub fn len(&self) -> usize {
        self.pieces.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.pieces.iter().position(|p| p.position == position)
    }
    pub fn at(&self, position: Position) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == position)
    }
    pub fn is_occupied(&self, position: Position) -> bool {
        self.at(position).is_some()
    }
    pub fn kings(&self, allegiance: Allegiance) -> usize {
        self.pieces
            .iter()
            .filter(|p| p.allegiance == allegiance)
            .filter(|p| p.kind.is_king())
            .count()
    }
    pub fn owned(&self, allegiance: Allegiance) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.allegiance == allegiance)
    }
}

impl BoardState {
    pub(crate) fn piece_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(index)
    }
    pub(crate) fn remove(&mut self, index: usize) -> Piece {
        self.pieces.remove(index)
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.grid.rows {
            for x in 0..self.grid.cols {
                let glyph = match self.at(Position::new(x, y)) {
                    None => '.',
                    Some(piece) => glyph(piece),
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Single-character label; uppercase for red, lowercase for blue.
pub fn glyph(piece: &Piece) -> char {
    let c = match piece.kind {
        PieceKind::King => 'k',
        PieceKind::Wall { stacked: true } => 'w',
        PieceKind::Wall { stacked: false } => 'v',
        PieceKind::TwoSided { dir: Axis::NE } => '\\',
        PieceKind::TwoSided { dir: Axis::SE } => '/',
        PieceKind::OneSided { dir: Facing::NE } => 'a',
        PieceKind::OneSided { dir: Facing::SE } => 'b',
        PieceKind::OneSided { dir: Facing::SW } => 'c',
        PieceKind::OneSided { dir: Facing::NW } => 'd',
    };
    match piece.allegiance {
        Allegiance::Red => c.to_ascii_uppercase(),
        Allegiance::Blue => c,
    }
}
