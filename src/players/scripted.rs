use crate::board::*;
use crate::rules::Move;
use crate::session::*;
use std::collections::VecDeque;
use tokio::sync::mpsc::*;

/// Plays a fixed list of moves in order, then the first legal move.
/// Optionally forwards every event it sees, for tests and replays.
#[derive(Debug, Default)]
pub struct Scripted {
    moves: VecDeque<Move>,
    events: Option<UnboundedSender<Event>>,
}

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            events: None,
        }
    }
    /// Same as [`Scripted::new`], plus a receiver of everything notified.
    pub fn observed(moves: impl IntoIterator<Item = Move>) -> (Self, UnboundedReceiver<Event>) {
        let (tx, rx) = unbounded_channel();
        let player = Self {
            events: Some(tx),
            ..Self::new(moves)
        };
        (player, rx)
    }
}

#[async_trait::async_trait]
impl Player for Scripted {
    async fn decide(&mut self, board: &BoardState, allegiance: Allegiance) -> Move {
        let next = self
            .moves
            .pop_front()
            .or_else(|| board.legal(allegiance).first().copied());
        match next {
            Some(mv) => mv,
            None => {
                log::warn!("{} script exhausted with no legal move", allegiance);
                std::future::pending().await
            }
        }
    }

    async fn notify(&mut self, event: &Event) {
        if let Some(ref events) = self.events {
            let _ = events.send(event.clone());
        }
    }
}
