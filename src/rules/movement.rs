use crate::Arbitrary;
use crate::board::*;
use serde::Deserialize;
use serde::Serialize;

/// What a move does to the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Shift(Compass),
    Rotate(Spin),
}

impl MoveKind {
    /// Every option in display order: eight shifts, then both spins.
    pub fn all() -> impl Iterator<Item = Self> {
        Compass::all()
            .into_iter()
            .map(Self::Shift)
            .chain(Spin::all().into_iter().map(Self::Rotate))
    }
}

impl Arbitrary for MoveKind {
    fn random() -> Self {
        match rand::random_range(0..10) {
            0 | 1 => Self::Rotate(Spin::random()),
            _ => Self::Shift(Compass::random()),
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shift(dir) => write!(f, "{}", dir),
            Self::Rotate(spin) => write!(f, "{}", spin),
        }
    }
}

impl TryFrom<&str> for MoveKind {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Spin::try_from(s)
            .map(Self::Rotate)
            .or_else(|_| Compass::try_from(s).map(Self::Shift))
            .map_err(|_| "invalid move kind")
    }
}

/// A proposed move: which piece, and what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: Position,
    pub kind: MoveKind,
}

impl Move {
    pub const fn new(piece: Position, kind: MoveKind) -> Self {
        Self { piece, kind }
    }
    pub const fn shift(piece: Position, dir: Compass) -> Self {
        Self::new(piece, MoveKind::Shift(dir))
    }
    pub const fn rotate(piece: Position, spin: Spin) -> Self {
        Self::new(piece, MoveKind::Rotate(spin))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.piece, self.kind)
    }
}

/// Reasons a move is refused. Always recoverable: the board is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMove {
    Vacant(Position),
    NotYours(Position),
    OutOfBounds(Position),
    Occupied(Position),
    Unrotatable(Position),
    OutOfTurn(Allegiance),
    GameOver,
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vacant(p) => write!(f, "no piece at {}", p),
            Self::NotYours(p) => write!(f, "piece at {} belongs to the opponent", p),
            Self::OutOfBounds(p) => write!(f, "target {} is off the board", p),
            Self::Occupied(p) => write!(f, "target {} is occupied", p),
            Self::Unrotatable(p) => write!(f, "piece at {} cannot rotate", p),
            Self::OutOfTurn(a) => write!(f, "it is not {}'s turn", a),
            Self::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for InvalidMove {}

impl BoardState {
    /// Validate `mv` for `player` and return the moved board.
    /// Success or failure is the whole contract; `self` is never modified.
    pub fn apply(&self, mv: Move, player: Allegiance) -> Result<BoardState, InvalidMove> {
        let index = self.check(mv, player)?;
        let mut next = self.clone();
        let piece = next.piece_mut(index).ok_or(InvalidMove::Vacant(mv.piece))?;
        match mv.kind {
            MoveKind::Shift(dir) => piece.position = mv.piece + dir,
            MoveKind::Rotate(spin) => {
                piece.kind = piece
                    .kind
                    .rotate(spin)
                    .ok_or(InvalidMove::Unrotatable(mv.piece))?
            }
        }
        Ok(next)
    }
    /// Legality predicate shared by validation and UI affordances.
    /// Returns the index of the piece the move would act on.
    pub fn check(&self, mv: Move, player: Allegiance) -> Result<usize, InvalidMove> {
        let index = self.index_of(mv.piece).ok_or(InvalidMove::Vacant(mv.piece))?;
        let piece = &self.pieces()[index];
        if piece.allegiance != player {
            return Err(InvalidMove::NotYours(mv.piece));
        }
        match mv.kind {
            MoveKind::Shift(dir) => {
                let target = mv.piece + dir;
                if !self.grid().contains(target) {
                    return Err(InvalidMove::OutOfBounds(target));
                }
                if self.is_occupied(target) {
                    return Err(InvalidMove::Occupied(target));
                }
            }
            MoveKind::Rotate(_) => {
                if !piece.kind.is_rotatable() {
                    return Err(InvalidMove::Unrotatable(mv.piece));
                }
            }
        }
        Ok(index)
    }
    pub fn is_legal(&self, mv: Move, player: Allegiance) -> bool {
        self.check(mv, player).is_ok()
    }
    /// Legal options for the piece at `position`, for move-indicator overlays.
    pub fn options(&self, position: Position, player: Allegiance) -> Vec<MoveKind> {
        MoveKind::all()
            .filter(|kind| self.is_legal(Move::new(position, *kind), player))
            .collect()
    }
    /// Every legal move for `player`.
    pub fn legal(&self, player: Allegiance) -> Vec<Move> {
        self.owned(player)
            .flat_map(|piece| {
                self.options(piece.position, player)
                    .into_iter()
                    .map(move |kind| Move::new(piece.position, kind))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Allegiance = Allegiance::Red;
    const BLUE: Allegiance = Allegiance::Blue;

    fn board() -> BoardState {
        BoardState::new(
            Grid::default(),
            vec![
                Piece::new(Position::new(5, 0), RED, PieceKind::King),
                Piece::new(Position::new(6, 0), RED, PieceKind::Wall { stacked: true }),
                Piece::new(Position::new(5, 1), RED, PieceKind::OneSided { dir: Facing::NE }),
                Piece::new(Position::new(0, 0), RED, PieceKind::TwoSided { dir: Axis::SE }),
                Piece::new(Position::new(4, 7), BLUE, PieceKind::King),
            ],
        )
    }

    #[test]
    fn shift_moves_only_that_piece() {
        let before = board();
        for dir in Compass::all() {
            let mv = Move::shift(Position::new(5, 1), dir);
            let Ok(after) = before.apply(mv, RED) else {
                continue;
            };
            let (dx, dy) = dir.vector();
            assert_eq!(after.pieces()[2].position, Position::new(5 + dx, 1 + dy));
            for (i, (a, b)) in before.pieces().iter().zip(after.pieces()).enumerate() {
                if i != 2 {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn rejects_vacant_and_foreign() {
        let board = board();
        assert_eq!(
            board.apply(Move::shift(Position::new(3, 3), Compass::N), RED),
            Err(InvalidMove::Vacant(Position::new(3, 3)))
        );
        assert_eq!(
            board.apply(Move::shift(Position::new(4, 7), Compass::N), RED),
            Err(InvalidMove::NotYours(Position::new(4, 7)))
        );
    }

    #[test]
    fn rejects_out_of_bounds_and_occupied() {
        let board = board();
        assert_eq!(
            board.apply(Move::shift(Position::new(5, 0), Compass::N), RED),
            Err(InvalidMove::OutOfBounds(Position::new(5, -1)))
        );
        assert_eq!(
            board.apply(Move::shift(Position::new(5, 0), Compass::E), RED),
            Err(InvalidMove::Occupied(Position::new(6, 0)))
        );
        assert_eq!(
            board.apply(Move::shift(Position::new(0, 0), Compass::W), RED),
            Err(InvalidMove::OutOfBounds(Position::new(-1, 0)))
        );
    }

    #[test]
    fn kings_and_walls_do_not_rotate() {
        let board = board();
        for spin in Spin::all() {
            assert_eq!(
                board.apply(Move::rotate(Position::new(5, 0), spin), RED),
                Err(InvalidMove::Unrotatable(Position::new(5, 0)))
            );
            assert_eq!(
                board.apply(Move::rotate(Position::new(6, 0), spin), RED),
                Err(InvalidMove::Unrotatable(Position::new(6, 0)))
            );
        }
    }

    #[test]
    fn rotations_cycle() {
        let start = board();
        let spun = (0..4).try_fold(start.clone(), |b, _| {
            b.apply(Move::rotate(Position::new(5, 1), Spin::Cw), RED)
        });
        assert_eq!(spun.as_ref(), Ok(&start));
        let once = start
            .apply(Move::rotate(Position::new(5, 1), Spin::Cw), RED)
            .unwrap();
        assert_eq!(once.pieces()[2].kind, PieceKind::OneSided { dir: Facing::SE });
        let mirrored = (0..2).try_fold(start.clone(), |b, _| {
            b.apply(Move::rotate(Position::new(0, 0), Spin::Cw), RED)
        });
        assert_eq!(mirrored.as_ref(), Ok(&start));
        let toggled = start
            .apply(Move::rotate(Position::new(0, 0), Spin::Ccw), RED)
            .unwrap();
        assert_eq!(toggled.pieces()[3].kind, PieceKind::TwoSided { dir: Axis::NE });
    }

    #[test]
    fn failed_apply_leaves_board_alone() {
        let board = board();
        let copy = board.clone();
        let _ = board.apply(Move::shift(Position::new(5, 0), Compass::E), RED);
        assert_eq!(board, copy);
    }

    #[test]
    fn options_match_predicate() {
        let board = board();
        let king = board.options(Position::new(5, 0), RED);
        assert!(!king.iter().any(|k| matches!(k, MoveKind::Rotate(_))));
        assert!(king.contains(&MoveKind::Shift(Compass::W)));
        assert!(!king.contains(&MoveKind::Shift(Compass::E)));
        assert!(!king.contains(&MoveKind::Shift(Compass::S)));
        let mirror = board.options(Position::new(5, 1), RED);
        assert!(mirror.contains(&MoveKind::Rotate(Spin::Cw)));
        assert!(board.options(Position::new(4, 7), RED).is_empty());
        for mv in board.legal(RED) {
            assert!(board.apply(mv, RED).is_ok());
        }
        assert!(board.legal(BLUE).iter().all(|m| m.piece == Position::new(4, 7)));
    }

    #[test]
    fn move_kind_names() {
        assert_eq!(MoveKind::try_from("ccw"), Ok(MoveKind::Rotate(Spin::Ccw)));
        assert_eq!(MoveKind::try_from("se"), Ok(MoveKind::Shift(Compass::SE)));
        assert!(MoveKind::try_from("up").is_err());
        assert_eq!(MoveKind::all().count(), 10);
    }
}
