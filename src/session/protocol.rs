use super::*;
use crate::board::*;
use crate::rules::*;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

/// Peer-facing view of the controller.
///
/// The outer `anyhow::Result` is transport failure (the controller is gone);
/// the inner result of [`Server::submit`] is the controller's verdict.
#[async_trait::async_trait]
pub trait Server: Send + Sync {
    async fn submit(&self, mv: Move) -> anyhow::Result<Result<(), InvalidMove>>;
    async fn query(&self, ply: usize) -> anyhow::Result<BoardState>;
}

/// Controller-facing view of a peer. Fire and forget.
pub trait Client: Send {
    fn send(&self, message: ServerMessage) -> anyhow::Result<()>;
}

impl Client for UnboundedSender<ServerMessage> {
    fn send(&self, message: ServerMessage) -> anyhow::Result<()> {
        UnboundedSender::send(self, message).map_err(|_| anyhow::anyhow!("peer inbox closed"))
    }
}

/// In-process [`Server`] bound to one seat. Dropping every link lets the
/// controller wind down.
#[derive(Debug, Clone)]
pub struct Link {
    seat: Allegiance,
    outbox: UnboundedSender<Envelope>,
}

impl Link {
    pub(crate) fn new(seat: Allegiance, outbox: UnboundedSender<Envelope>) -> Self {
        Self { seat, outbox }
    }
    fn post(&self, request: Request) -> anyhow::Result<()> {
        self.outbox
            .send((self.seat, request))
            .map_err(|_| anyhow::anyhow!("controller closed"))
    }
}

#[async_trait::async_trait]
impl Server for Link {
    async fn submit(&self, mv: Move) -> anyhow::Result<Result<(), InvalidMove>> {
        let (reply, verdict) = oneshot::channel();
        self.post(Request::Move { mv, reply })?;
        Ok(verdict.await?)
    }
    async fn query(&self, ply: usize) -> anyhow::Result<BoardState> {
        let (reply, snapshot) = oneshot::channel();
        self.post(Request::Query { ply, reply })?;
        let seat = self.seat;
        snapshot
            .await?
            .ok_or_else(|| anyhow::anyhow!("{} queried ply {} before it was played", seat, ply))
    }
}
