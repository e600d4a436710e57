use super::event::*;
use crate::board::*;
use crate::rules::Move;

/// Trait for whatever picks moves and presents the game on one side.
/// Implementations can be terminal humans, GUI front-ends, scripted test doubles, etc.
///
/// The peer only calls [`Player::decide`] during its own turn, and validates
/// the answer before submitting it. Picking and drawing stay on this side of
/// the seam; the core never does hit-testing or rendering itself.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Choose a move for `allegiance` on `board`.
    async fn decide(&mut self, board: &BoardState, allegiance: Allegiance) -> Move;
    /// Receive frames, audio cues, and lifecycle notifications.
    async fn notify(&mut self, event: &Event);
}
