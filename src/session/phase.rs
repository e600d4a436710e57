use crate::board::*;
use crate::rules::*;

/// Where one peer is in the turn cycle. Every variant owns its board.
///
/// ```text
/// AwaitInit ──Init──▶ MyTurn ──Submitted──▶ Animating ──Settled──▶ WaitRemoteTurn
///                       ▲  └─Rejected─┘                  │                │
///                       └────────────Settled─────────────┘◀─OpponentMoved─┘
///                                         Settled with a winner ──▶ Terminal
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitInit,
    /// Our move. The board is the settled position.
    MyTurn(BoardState),
    /// Beam in flight. The board is moved but not yet lasered.
    Animating(BoardState, Allegiance),
    /// The opponent is choosing.
    WaitRemoteTurn(BoardState, Allegiance),
    /// Absorbing.
    Terminal(BoardState, Allegiance),
}

/// What the peer driver observed since the last transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Init {
        board: BoardState,
        allegiance: Allegiance,
    },
    /// The controller accepted our move.
    Submitted(Move),
    /// The move was refused, locally or by the controller.
    Rejected(Move),
    /// Authoritative board after the animated move.
    Settled(BoardState),
    OpponentMoved(Move),
}

/// An input arrived that the current phase cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolViolation {
    pub phase: &'static str,
    pub input: &'static str,
}

impl std::fmt::Display for ProtocolViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "protocol violation: {} during {}", self.input, self.phase)
    }
}

impl std::error::Error for ProtocolViolation {}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitInit => "await init",
            Self::MyTurn(_) => "my turn",
            Self::Animating(..) => "animating",
            Self::WaitRemoteTurn(..) => "wait remote turn",
            Self::Terminal(..) => "terminal",
        }
    }
    pub fn board(&self) -> Option<&BoardState> {
        match self {
            Self::AwaitInit => None,
            Self::MyTurn(board)
            | Self::Animating(board, _)
            | Self::WaitRemoteTurn(board, _)
            | Self::Terminal(board, _) => Some(board),
        }
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(..))
    }
    /// Pure transition for the peer playing `me`.
    pub fn next(self, me: Allegiance, input: Input) -> Result<Self, ProtocolViolation> {
        let violation = ProtocolViolation {
            phase: self.name(),
            input: input.name(),
        };
        match (self, input) {
            (Self::AwaitInit, Input::Init { board, allegiance }) if allegiance == me => {
                Ok(match winner(&board) {
                    Some(w) => Self::Terminal(board, w),
                    None if crate::FIRST == me => Self::MyTurn(board),
                    None => Self::WaitRemoteTurn(board, crate::FIRST),
                })
            }
            (Self::MyTurn(board), Input::Submitted(mv)) => board
                .apply(mv, me)
                .map(|moved| Self::Animating(moved, me))
                .map_err(|_| violation),
            (Self::MyTurn(board), Input::Rejected(_)) => Ok(Self::MyTurn(board)),
            (Self::Animating(_, mover), Input::Settled(board)) => Ok(match winner(&board) {
                Some(w) => Self::Terminal(board, w),
                None if mover == me => Self::WaitRemoteTurn(board, me.opponent()),
                None => Self::MyTurn(board),
            }),
            (Self::WaitRemoteTurn(board, remote), Input::OpponentMoved(mv)) => board
                .apply(mv, remote)
                .map(|moved| Self::Animating(moved, remote))
                .map_err(|_| violation),
            (terminal @ Self::Terminal(..), _) => Ok(terminal),
            _ => Err(violation),
        }
    }
}

impl Input {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Submitted(_) => "submitted",
            Self::Rejected(_) => "rejected",
            Self::Settled(_) => "settled",
            Self::OpponentMoved(_) => "opponent moved",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Animating(_, mover) => write!(f, "animating {}", mover),
            Self::WaitRemoteTurn(_, remote) => write!(f, "waiting on {}", remote),
            Self::Terminal(_, winner) => write!(f, "{} won", winner),
            other => write!(f, "{}", other.name()),
        }
    }
}
