use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Integer cell coordinate. May lie off the grid, e.g. a laser origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    /// Straight-line distance. Beam segments are axis-aligned, so this is exact for them.
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add<Compass> for Position {
    type Output = Self;
    fn add(self, dir: Compass) -> Self {
        let (dx, dy) = dir.vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::ops::Add<Heading> for Position {
    type Output = Self;
    fn add(self, dir: Heading) -> Self {
        self + Compass::from(dir)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
