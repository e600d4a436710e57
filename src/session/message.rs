use crate::board::*;
use crate::rules::*;
use tokio::sync::oneshot;

/// Controller → peer. Every payload is an owned snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerMessage {
    /// Sent once per peer at match start.
    Init {
        state: BoardState,
        allegiance: Allegiance,
        opponent_name: String,
    },
    /// The move the other side just made, pre-laser. Peers re-derive the shot.
    OpponentMove { mv: Move },
}

/// Peer → controller. Replies travel back on a oneshot.
#[derive(Debug)]
pub enum Request {
    /// Submit a move for the sender's allegiance.
    Move {
        mv: Move,
        reply: oneshot::Sender<Result<(), InvalidMove>>,
    },
    /// Authoritative board after `ply` applied moves, or None if not reached yet.
    Query {
        ply: usize,
        reply: oneshot::Sender<Option<BoardState>>,
    },
}

/// A request tagged with the seat it came from.
pub type Envelope = (Allegiance, Request);

impl ServerMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::OpponentMove { .. } => "opponent move",
        }
    }
}

impl std::fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init {
                allegiance,
                opponent_name,
                ..
            } => write!(f, "init as {} vs {}", allegiance, opponent_name),
            Self::OpponentMove { mv } => write!(f, "opponent move {}", mv),
        }
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move { mv, .. } => write!(f, "move {}", mv),
            Self::Query { ply, .. } => write!(f, "query ply {}", ply),
        }
    }
}
