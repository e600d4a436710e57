use super::*;
use crate::board::*;
use crate::render::*;
use crate::rules::*;
use tokio::sync::mpsc::*;

/// Drives one [`Player`] through the turn cycle.
///
/// Each loop performs the effects of the current [`Phase`] (ask the player,
/// animate a shot, wait for the opponent), turns what happened into an
/// [`Input`], and lets [`Phase::next`] decide where to go. The peer keeps
/// its own board for animation, but always adopts the controller's
/// snapshot once a shot settles.
pub struct Peer {
    me: Allegiance,
    ply: usize,
    player: Box<dyn Player>,
    inbox: UnboundedReceiver<ServerMessage>,
    server: Box<dyn Server>,
    animation: AnimationConfig,
}

impl Peer {
    pub fn new(
        me: Allegiance,
        player: Box<dyn Player>,
        inbox: UnboundedReceiver<ServerMessage>,
        server: Box<dyn Server>,
        animation: AnimationConfig,
    ) -> Self {
        Self {
            me,
            ply: 0,
            player,
            inbox,
            server,
            animation,
        }
    }

    /// Play until the game ends and return the winner.
    pub async fn run(mut self) -> anyhow::Result<Allegiance> {
        let mut phase = Phase::AwaitInit;
        loop {
            let input = match &phase {
                Phase::AwaitInit => self.greet().await?,
                Phase::MyTurn(board) => self.decide(board).await?,
                Phase::Animating(board, mover) => self.animate(board, *mover).await?,
                Phase::WaitRemoteTurn(board, remote) => self.wait(board, *remote).await?,
                Phase::Terminal(board, winner) => {
                    self.conclude(board, *winner).await;
                    return Ok(*winner);
                }
            };
            phase = phase.next(self.me, input)?;
            log::trace!("[peer {}] {}", self.me, phase);
        }
    }
}

impl Peer {
    async fn recv(&mut self) -> anyhow::Result<ServerMessage> {
        self.inbox
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("[peer {}] controller hung up", self.me))
    }

    async fn greet(&mut self) -> anyhow::Result<Input> {
        match self.recv().await? {
            ServerMessage::Init {
                state,
                allegiance,
                opponent_name,
            } => {
                log::debug!("[peer {}] playing {} vs {}", self.me, allegiance, opponent_name);
                self.player
                    .notify(&Event::Started {
                        allegiance,
                        opponent: opponent_name,
                        board: state.clone(),
                    })
                    .await;
                Ok(Input::Init {
                    board: state,
                    allegiance,
                })
            }
            message => Err(ProtocolViolation {
                phase: "await init",
                input: message.name(),
            }
            .into()),
        }
    }

    async fn decide(&mut self, board: &BoardState) -> anyhow::Result<Input> {
        let frame = Scene::from(board).turn(self.me).build();
        self.player.notify(&Event::Frame(frame)).await;
        let mv = self.player.decide(board, self.me).await;
        let verdict = match board.check(mv, self.me) {
            Err(reason) => Err(reason),
            Ok(_) => self.server.submit(mv).await?,
        };
        match verdict {
            Ok(()) => {
                log::debug!("[peer {}] submitted {}", self.me, mv);
                self.player.notify(&Event::Moved { mover: self.me, mv }).await;
                Ok(Input::Submitted(mv))
            }
            Err(reason) => {
                log::debug!("[peer {}] {} refused: {}", self.me, mv, reason);
                self.player.notify(&Event::Rejected { mv, reason }).await;
                Ok(Input::Rejected(mv))
            }
        }
    }

    /// Play the shot locally, then adopt the controller's settled board.
    async fn animate(&mut self, moved: &BoardState, mover: Allegiance) -> anyhow::Result<Input> {
        let laser = fire(mover, moved);
        let beam = Beam::from(&laser);
        self.player.notify(&Event::Cue(Cue::Fired)).await;
        let mut reached = 0.0;
        for i in 1..=self.animation.frames() {
            if !self.animation.frame.is_zero() {
                tokio::time::sleep(self.animation.frame).await;
            }
            let progress = self.animation.progress(i);
            for bounce in beam.crossed(reached, progress) {
                self.player.notify(&Event::Cue(Cue::Struck(bounce))).await;
            }
            reached = progress;
            let frame = Scene::from(moved).laser(beam.path(), progress).build();
            self.player.notify(&Event::Frame(frame)).await;
        }
        if laser.hit.is_some() {
            self.player
                .notify(&Event::Cue(Cue::Captured(laser.terminus())))
                .await;
        }
        self.ply += 1;
        let settled = self.server.query(self.ply).await?;
        self.player.notify(&Event::Settled(settled.clone())).await;
        Ok(Input::Settled(settled))
    }

    async fn wait(&mut self, board: &BoardState, remote: Allegiance) -> anyhow::Result<Input> {
        let frame = Scene::from(board).turn(remote).build();
        self.player.notify(&Event::Frame(frame)).await;
        match self.recv().await? {
            ServerMessage::OpponentMove { mv } => {
                log::debug!("[peer {}] {} played {}", self.me, remote, mv);
                self.player.notify(&Event::Moved { mover: remote, mv }).await;
                Ok(Input::OpponentMoved(mv))
            }
            message => Err(ProtocolViolation {
                phase: "wait remote turn",
                input: message.name(),
            }
            .into()),
        }
    }

    async fn conclude(&mut self, board: &BoardState, winner: Allegiance) {
        log::info!("[peer {}] game over, {} wins", self.me, winner);
        let frame = Scene::from(board).winner(winner).build();
        self.player.notify(&Event::Frame(frame)).await;
        self.player.notify(&Event::GameOver(winner)).await;
    }
}
