use super::*;
use crate::board::*;
use crate::rules::*;
use tokio::sync::mpsc::*;

/// Authoritative side of a match.
///
/// Owns the only [`Game`], validates and applies moves in arrival order,
/// and relays each accepted move to the other seat. Peers never see the
/// game itself, only board snapshots: `snapshots[k]` is the settled board
/// after `k` accepted moves, which is what ply-addressed queries return.
///
/// After the game ends the controller keeps answering queries until every
/// [`Link`] is dropped, then returns the [`Outcome`].
pub struct Controller {
    game: Game,
    history: Vec<Move>,
    snapshots: Vec<BoardState>,
    seats: Vec<Seat>,
    inbox: UnboundedReceiver<Envelope>,
    outbox: Option<UnboundedSender<Envelope>>,
}

struct Seat {
    allegiance: Allegiance,
    name: String,
    client: Box<dyn Client>,
}

/// Final record of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Allegiance,
    pub history: Vec<Move>,
    pub board: BoardState,
}

impl Controller {
    pub fn new(board: BoardState) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            game: Game::new(board.clone()),
            history: Vec::new(),
            snapshots: vec![board],
            seats: Vec::new(),
            inbox: rx,
            outbox: Some(tx),
        }
    }

    /// Register the peer playing `allegiance` and hand back its link.
    pub fn seat<C>(
        &mut self,
        allegiance: Allegiance,
        name: impl Into<String>,
        client: C,
    ) -> anyhow::Result<Link>
    where
        C: Client + 'static,
    {
        anyhow::ensure!(
            self.seats.iter().all(|s| s.allegiance != allegiance),
            "{} is already seated",
            allegiance
        );
        let outbox = self
            .outbox
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("controller already running"))?;
        self.seats.push(Seat {
            allegiance,
            name: name.into(),
            client: Box::new(client),
        });
        Ok(Link::new(allegiance, outbox.clone()))
    }

    pub async fn run(mut self) -> anyhow::Result<Outcome> {
        drop(self.outbox.take());
        self.greet()?;
        while let Some((who, request)) = self.inbox.recv().await {
            log::trace!("[controller] {} sent {}", who, request);
            match request {
                Request::Move { mv, reply } => {
                    let verdict = self.handle(who, mv);
                    let _ = reply.send(verdict);
                }
                Request::Query { ply, reply } => {
                    let _ = reply.send(self.snapshots.get(ply).cloned());
                }
            }
        }
        let moves = self.history.len();
        let winner = self
            .game
            .winner()
            .ok_or_else(|| anyhow::anyhow!("peers left after {} moves with no winner", moves))?;
        log::info!("[controller] closed after {} moves, {} won", self.history.len(), winner);
        Ok(Outcome {
            winner,
            history: self.history,
            board: self.game.board().clone(),
        })
    }
}

impl Controller {
    fn greet(&self) -> anyhow::Result<()> {
        for allegiance in Allegiance::all() {
            let opponent = self
                .find(allegiance.opponent())
                .ok_or_else(|| anyhow::anyhow!("no peer seated for {}", allegiance.opponent()))?;
            self.unicast(
                allegiance,
                ServerMessage::Init {
                    state: self.game.board().clone(),
                    allegiance,
                    opponent_name: opponent.name.clone(),
                },
            );
        }
        Ok(())
    }

    fn handle(&mut self, who: Allegiance, mv: Move) -> Result<(), InvalidMove> {
        if self.game.is_finished() {
            log::debug!("[controller] {} moved {} after the game ended", who, mv);
            return Err(InvalidMove::GameOver);
        }
        if self.game.turn() != who {
            log::warn!("[controller] {} moved {} out of turn", who, mv);
            return Err(InvalidMove::OutOfTurn(who));
        }
        let turnover = self
            .game
            .play(mv)
            .inspect_err(|e| log::info!("[controller] rejected {} {}: {}", who, mv, e))?;
        let bounces = turnover.laser.bounces().len();
        log::info!("[controller] {} played {} ({} bounces)", who, mv, bounces);
        self.history.push(mv);
        self.snapshots.push(self.game.board().clone());
        self.unicast(who.opponent(), ServerMessage::OpponentMove { mv });
        Ok(())
    }

    fn find(&self, allegiance: Allegiance) -> Option<&Seat> {
        self.seats.iter().find(|s| s.allegiance == allegiance)
    }

    fn unicast(&self, allegiance: Allegiance, message: ServerMessage) {
        match self.find(allegiance) {
            Some(seat) => {
                log::debug!("[controller] -> {} {}", allegiance, message);
                if let Err(e) = seat.client.send(message) {
                    log::warn!("[controller] {} unreachable: {}", allegiance, e);
                }
            }
            None => log::warn!("[controller] no peer seated for {}", allegiance),
        }
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
                Piece::new(Position::new(1, 4), BLUE, PieceKind::King),
            ],
        )
    }

    struct Table {
        red: Link,
        blue: Link,
        red_inbox: UnboundedReceiver<ServerMessage>,
        blue_inbox: UnboundedReceiver<ServerMessage>,
        task: tokio::task::JoinHandle<anyhow::Result<Outcome>>,
    }

    fn table() -> Table {
        let mut controller = Controller::new(board());
        let (red_tx, red_inbox) = unbounded_channel();
        let (blue_tx, blue_inbox) = unbounded_channel();
        let red = controller.seat(RED, "ruby", red_tx).unwrap();
        let blue = controller.seat(BLUE, "sapphire", blue_tx).unwrap();
        Table {
            red,
            blue,
            red_inbox,
            blue_inbox,
            task: tokio::spawn(controller.run()),
        }
    }

    #[tokio::test]
    async fn greets_both_seats() {
        let mut t = table();
        assert_eq!(
            t.red_inbox.recv().await,
            Some(ServerMessage::Init {
                state: board(),
                allegiance: RED,
                opponent_name: "sapphire".to_string(),
            })
        );
        match t.blue_inbox.recv().await {
            Some(ServerMessage::Init {
                allegiance,
                opponent_name,
                ..
            }) => {
                assert_eq!(allegiance, BLUE);
                assert_eq!(opponent_name, "ruby");
            }
            other => panic!("expected init, got {:?}", other),
        }
        t.task.abort();
    }

    #[tokio::test]
    async fn enforces_turn_order_and_relays() {
        let mut t = table();
        let _ = t.red_inbox.recv().await;
        let _ = t.blue_inbox.recv().await;
        let theirs = Move::shift(Position::new(1, 4), Compass::W);
        assert_eq!(t.blue.submit(theirs).await.unwrap(), Err(InvalidMove::OutOfTurn(BLUE)));
        let illegal = Move::shift(Position::new(5, 0), Compass::N);
        assert!(matches!(t.red.submit(illegal).await.unwrap(), Err(InvalidMove::OutOfBounds(_))));
        let ours = Move::shift(Position::new(5, 0), Compass::W);
        assert_eq!(t.red.submit(ours).await.unwrap(), Ok(()));
        assert_eq!(t.blue_inbox.recv().await, Some(ServerMessage::OpponentMove { mv: ours }));
        assert!(t.red_inbox.try_recv().is_err());
        assert_eq!(t.blue.submit(theirs).await.unwrap(), Ok(()));
        assert_eq!(t.red_inbox.recv().await, Some(ServerMessage::OpponentMove { mv: theirs }));
        t.task.abort();
    }

    #[tokio::test]
    async fn queries_are_addressed_by_ply() {
        let mut t = table();
        let _ = t.red_inbox.recv().await;
        let first = Move::shift(Position::new(5, 0), Compass::W);
        let second = Move::shift(Position::new(1, 4), Compass::W);
        t.red.submit(first).await.unwrap().unwrap();
        t.blue.submit(second).await.unwrap().unwrap();
        assert_eq!(t.red.query(0).await.unwrap(), board());
        let one = t.red.query(1).await.unwrap();
        assert_eq!(one.pieces()[0].position, Position::new(4, 0));
        assert_eq!(one.pieces()[1].position, Position::new(1, 4));
        let two = t.blue.query(2).await.unwrap();
        assert_eq!(two.pieces()[1].position, Position::new(0, 4));
        assert!(t.blue.query(3).await.is_err());
        t.task.abort();
    }

    #[tokio::test]
    async fn finishes_when_links_drop() {
        let mut t = table();
        let _ = t.red_inbox.recv().await;
        let _ = t.blue_inbox.recv().await;
        let moves = [
            (RED, Move::shift(Position::new(5, 0), Compass::W)),
            (BLUE, Move::shift(Position::new(1, 4), Compass::W)),
            (RED, Move::shift(Position::new(4, 0), Compass::E)),
        ];
        for (who, mv) in moves {
            let link = if who == RED { &t.red } else { &t.blue };
            assert_eq!(link.submit(mv).await.unwrap(), Ok(()));
        }
        let last = Move::shift(Position::new(0, 4), Compass::E);
        assert_eq!(t.blue.submit(last).await.unwrap(), Err(InvalidMove::GameOver));
        assert_eq!(t.blue.query(3).await.unwrap().kings(BLUE), 0);
        let Table { red, blue, task, .. } = t;
        drop(red);
        drop(blue);
        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome.winner, RED);
        assert_eq!(outcome.history, moves.map(|(_, mv)| mv).to_vec());
        assert_eq!(outcome.board.len(), 1);
    }

    #[tokio::test]
    async fn abandoned_game_is_an_error() {
        let t = table();
        let Table { red, blue, task, .. } = t;
        drop(red);
        drop(blue);
        assert!(task.await.unwrap().is_err());
    }

    #[test]
    fn seats_are_unique() {
        let mut controller = Controller::new(board());
        let (tx, _rx) = unbounded_channel::<ServerMessage>();
        assert!(controller.seat(RED, "a", tx.clone()).is_ok());
        assert!(controller.seat(RED, "b", tx).is_err());
    }
}
