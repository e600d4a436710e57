use super::*;
use crate::COLS;
use crate::ROWS;
use serde::Deserialize;
use serde::Serialize;

/// Board dimensions. Every algorithm reads bounds from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,
        }
    }
}

impl Grid {
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }
    pub const fn contains(&self, p: Position) -> bool {
        0 <= p.x && p.x < self.cols && 0 <= p.y && p.y < self.rows
    }
    /// Cell count; zero for degenerate dimensions.
    pub const fn area(&self) -> usize {
        let cols = if self.cols > 0 { self.cols as usize } else { 0 };
        let rows = if self.rows > 0 { self.rows as usize } else { 0 };
        cols.saturating_mul(rows)
    }
    /// Off-board cell and heading each side's laser enters from.
    /// Red fires down from beyond its back (top) edge at the west corner;
    /// Blue fires up from beyond its back (bottom) edge at the east corner.
    pub const fn origin(&self, player: Allegiance) -> (Position, Heading) {
        match player {
            Allegiance::Red => (Position::new(0, -1), Heading::S),
            Allegiance::Blue => (Position::new(self.cols - 1, self.rows), Heading::N),
        }
    }
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Position::new(x, y)))
    }
}
