use super::*;
use crate::board::*;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinSet;

/// Wires one controller and two peers together and runs them to completion.
pub struct Match {
    board: BoardState,
    animation: AnimationConfig,
    seats: Vec<(Allegiance, String, Box<dyn Player>)>,
}

enum Finish {
    Controller(Outcome),
    Peer(Allegiance),
}

impl Match {
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            animation: AnimationConfig::default(),
            seats: Vec::new(),
        }
    }
    pub fn animation(self, animation: AnimationConfig) -> Self {
        Self { animation, ..self }
    }
    pub fn sit<P>(mut self, allegiance: Allegiance, name: impl Into<String>, player: P) -> Self
    where
        P: Player + 'static,
    {
        self.seats.push((allegiance, name.into(), Box::new(player)));
        self
    }

    /// Run until the game ends and every task has wound down.
    /// If any task fails, the rest are aborted and the first error returned.
    pub async fn run(self) -> anyhow::Result<Outcome> {
        let mut controller = Controller::new(self.board);
        let mut tasks = JoinSet::new();
        for (allegiance, name, player) in self.seats {
            let (tx, rx) = unbounded_channel();
            let link = controller.seat(allegiance, name, tx)?;
            let peer = Peer::new(allegiance, player, rx, Box::new(link), self.animation);
            tasks.spawn(async move { peer.run().await.map(Finish::Peer) });
        }
        tasks.spawn(async move { controller.run().await.map(Finish::Controller) });
        let mut outcome = None;
        let mut winners = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(anyhow::Error::from).and_then(|finish| finish) {
                Ok(Finish::Controller(o)) => outcome = Some(o),
                Ok(Finish::Peer(w)) => winners.push(w),
                Err(e) => {
                    log::error!("match aborted: {}", e);
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }
        let outcome = outcome.ok_or_else(|| anyhow::anyhow!("controller produced no outcome"))?;
        anyhow::ensure!(
            winners.iter().all(|w| *w == outcome.winner),
            "peers disagree with controller on the winner"
        );
        Ok(outcome)
    }
}
