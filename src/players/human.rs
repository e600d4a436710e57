use super::*;
use crate::board::*;
use crate::render::*;
use crate::rules::*;
use crate::session::*;
use colored::*;
use dialoguer::Select;

/// Hot-seat terminal player. Picks a piece, then one of its legal options.
///
/// Only draws what concerns its own seat, so two humans sharing a terminal
/// do not print every frame twice.
#[derive(Debug, Default)]
pub struct Human {
    me: Option<Allegiance>,
    mover: Option<Allegiance>,
    terminal: Terminal,
}

impl Human {
    fn mine(&self, allegiance: Allegiance) -> bool {
        self.me == Some(allegiance)
    }
    fn pick(&self, board: &BoardState, allegiance: Allegiance) -> Option<Position> {
        let movable = board
            .owned(allegiance)
            .filter(|p| !board.options(p.position, allegiance).is_empty())
            .map(|p| p.position)
            .collect::<Vec<Position>>();
        let labels = movable
            .iter()
            .filter_map(|p| board.at(*p))
            .map(|p| format!("{} {} at {}", glyph(p), p.kind, p.position))
            .collect::<Vec<String>>();
        let selection = Select::new()
            .with_prompt(format!("{} select a piece", allegiance))
            .report(false)
            .items(labels.as_slice())
            .default(0)
            .interact()
            .unwrap();
        movable.get(selection).copied()
    }
    fn option(
        &mut self,
        board: &BoardState,
        allegiance: Allegiance,
        position: Position,
    ) -> Option<MoveKind> {
        let frame = Scene::from(board)
            .select(board, position, allegiance)
            .turn(allegiance)
            .build();
        self.terminal.render(&frame);
        let options = board.options(position, allegiance);
        let labels = options
            .iter()
            .map(|o| match o {
                MoveKind::Shift(dir) => format!("move {}", dir),
                MoveKind::Rotate(spin) => format!("rotate {}", spin),
            })
            .chain(std::iter::once("back".to_string()))
            .collect::<Vec<String>>();
        let name = board.at(position).map(|p| p.kind.name()).unwrap_or("piece");
        let selection = Select::new()
            .with_prompt(format!("{} at {}", name, position))
            .report(false)
            .items(labels.as_slice())
            .default(0)
            .interact()
            .unwrap();
        options.get(selection).copied()
    }
}

#[async_trait::async_trait]
impl Player for Human {
    async fn decide(&mut self, board: &BoardState, allegiance: Allegiance) -> Move {
        loop {
            let Some(position) = self.pick(board, allegiance) else {
                continue;
            };
            if let Some(kind) = self.option(board, allegiance, position) {
                return Move::new(position, kind);
            }
        }
    }

    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Started {
                allegiance,
                opponent,
                board,
            } => {
                self.me = Some(*allegiance);
                self.terminal.resize(board.grid());
                println!("{} vs {}", allegiance.to_string().bold(), opponent);
            }
            Event::Moved { mover, mv } => {
                self.mover = Some(*mover);
                if self.mine(*mover) {
                    println!("{} plays {}", mover, mv);
                }
            }
            Event::Frame(frame) => {
                let ours = frame.iter().any(|d| match d {
                    Drawable::Turn(a) => self.mine(*a),
                    Drawable::GameOver(_) => self.me == self.mover,
                    Drawable::Laser { progress, .. } => *progress >= 1.0 && self.me == self.mover,
                    _ => false,
                });
                if ours {
                    self.terminal.render(frame);
                }
            }
            Event::Cue(Cue::Captured(position)) if self.me == self.mover => {
                println!("{}", format!("hit at {}", position).yellow());
            }
            Event::Rejected { mv, reason } => {
                println!("{}", format!("{} refused: {}", mv, reason).red());
            }
            _ => {}
        }
    }
}
