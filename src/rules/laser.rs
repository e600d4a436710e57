use crate::board::*;
use serde::Deserialize;
use serde::Serialize;

/// Terminal effect of a beam on the piece it stopped at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Index into [`BoardState::pieces`] of the struck piece.
    pub index: usize,
    /// Demoted form the piece survives as, or None if it is removed.
    pub replacement: Option<PieceKind>,
}

/// Full trace of one laser shot.
///
/// `path` starts at the off-board origin and ends either at the struck cell
/// or at the first off-board cell the beam reached. Points in between are
/// exactly the bounce cells, so consecutive pairs are straight segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserResult {
    pub path: Vec<Position>,
    pub hit: Option<Hit>,
}

impl LaserResult {
    pub fn terminus(&self) -> Position {
        self.path[self.path.len() - 1]
    }
    /// Cells where the beam changed direction.
    pub fn bounces(&self) -> &[Position] {
        match self.path.len() {
            0..=2 => &[],
            n => &self.path[1..n - 1],
        }
    }
    pub fn segments(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Fire `player`'s laser across `board` and trace it to its end.
/// Pure: the caller decides what to do with the hit.
pub fn fire(player: Allegiance, board: &BoardState) -> LaserResult {
    let grid = board.grid();
    let (mut at, mut heading) = grid.origin(player);
    let mut path = vec![at];
    for _ in 0..grid.area().saturating_mul(4).saturating_add(4) {
        at = at + heading;
        if !grid.contains(at) {
            path.push(at);
            return LaserResult { path, hit: None };
        }
        let Some(index) = board.index_of(at) else {
            continue;
        };
        path.push(at);
        match board.pieces()[index].kind.deflect(heading) {
            Deflection::Reflect(next) => heading = next,
            Deflection::Replace(kind) => {
                let hit = Hit {
                    index,
                    replacement: Some(kind),
                };
                return LaserResult {
                    path,
                    hit: Some(hit),
                };
            }
            Deflection::Absorb => {
                let hit = Hit {
                    index,
                    replacement: None,
                };
                return LaserResult {
                    path,
                    hit: Some(hit),
                };
            }
        }
    }
    log::warn!("{} laser exceeded step bound at {}", player, at);
    LaserResult { path, hit: None }
}
