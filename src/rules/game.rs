use super::*;
use crate::FIRST;
use crate::board::*;

/// Lifecycle of a match. `Finished` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Finished(Allegiance),
}

/// Everything one accepted move produced, for callers that animate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turnover {
    pub mover: Allegiance,
    pub mv: Move,
    /// Board after the move but before the laser resolved.
    pub moved: BoardState,
    pub laser: LaserResult,
    pub status: Status,
}

/// Authoritative game: the board, whose turn it is, and whether it is over.
/// Exclusively owned by the controller; everyone else sees clones of `board`.
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    turn: Allegiance,
    status: Status,
}

impl Game {
    pub fn new(board: BoardState) -> Self {
        let status = match winner(&board) {
            Some(w) => Status::Finished(w),
            None => Status::InProgress,
        };
        Self {
            board,
            turn: FIRST,
            status,
        }
    }
    pub fn board(&self) -> &BoardState {
        &self.board
    }
    pub fn turn(&self) -> Allegiance {
        self.turn
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn winner(&self) -> Option<Allegiance> {
        match self.status {
            Status::Finished(w) => Some(w),
            Status::InProgress => None,
        }
    }
    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }
    /// Apply, fire, capture, settle, advance. Returns false with no state
    /// change if the move is refused.
    pub fn try_move(&mut self, mv: Move) -> bool {
        self.play(mv).is_ok()
    }
    /// Same as [`Game::try_move`], reporting what happened.
    pub fn play(&mut self, mv: Move) -> Result<Turnover, InvalidMove> {
        if self.is_finished() {
            return Err(InvalidMove::GameOver);
        }
        let mover = self.turn;
        let moved = self.board.apply(mv, mover)?;
        let laser = fire(mover, &moved);
        let mut board = moved.clone();
        if let Some(hit) = laser.hit {
            resolve(&mut board, hit);
        }
        self.board = board;
        match winner(&self.board) {
            Some(w) => {
                log::info!("{} wins after {} {}", w, mover, mv);
                self.status = Status::Finished(w);
            }
            None => self.turn = mover.opponent(),
        }
        Ok(Turnover {
            mover,
            mv,
            moved,
            laser,
            status: self.status,
        })
    }
}

/// Apply a laser hit to `board`: demote the piece or remove it.
pub fn resolve(board: &mut BoardState, hit: Hit) {
    match hit.replacement {
        Some(kind) => {
            if let Some(piece) = board.piece_mut(hit.index) {
                log::debug!("{} demoted to {}", piece, kind);
                piece.kind = kind;
            }
        }
        None if hit.index < board.len() => {
            let piece = board.remove(hit.index);
            log::debug!("{} captured", piece);
        }
        None => log::warn!("hit index {} out of range", hit.index),
    }
}

/// The side whose king alone survives, if any.
/// Two kings standing, or none at all, is no winner.
pub fn winner(board: &BoardState) -> Option<Allegiance> {
    match (
        board.kings(Allegiance::Red) > 0,
        board.kings(Allegiance::Blue) > 0,
    ) {
        (true, false) => Some(Allegiance::Red),
        (false, true) => Some(Allegiance::Blue),
        _ => None,
    }
}
