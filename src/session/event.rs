use crate::board::*;
use crate::render::Drawable;
use crate::rules::*;

/// Audio signals raised while a beam animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Once, when the beam animation starts.
    Fired,
    /// Once per bounce, when the beam front reaches the mirror.
    Struck(Position),
    /// Once, when the beam lands on the piece it captures or demotes.
    Captured(Position),
}

/// Everything a peer tells its [`super::Player`] about.
/// Front-ends render frames, play cues, and ignore the rest as they like.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Started {
        allegiance: Allegiance,
        opponent: String,
        board: BoardState,
    },
    Frame(Vec<Drawable>),
    Cue(Cue),
    Rejected {
        mv: Move,
        reason: InvalidMove,
    },
    Moved {
        mover: Allegiance,
        mv: Move,
    },
    Settled(BoardState),
    GameOver(Allegiance),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started {
                allegiance,
                opponent,
                ..
            } => write!(f, "playing {} against {}", allegiance, opponent),
            Self::Frame(frame) => write!(f, "frame of {}", frame.len()),
            Self::Cue(cue) => write!(f, "cue {:?}", cue),
            Self::Rejected { mv, reason } => write!(f, "rejected {}: {}", mv, reason),
            Self::Moved { mover, mv } => write!(f, "{} moved {}", mover, mv),
            Self::Settled(board) => write!(f, "settled with {} pieces", board.len()),
            Self::GameOver(winner) => write!(f, "{} wins", winner),
        }
    }
}
