use crate::board::*;
use crate::render::*;
use crate::rules::MoveKind;
use colored::*;
use std::collections::HashMap;
use std::collections::HashSet;

/// Draws frames as colored text grids on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    grid: Grid,
}

impl Terminal {
    pub fn resize(&mut self, grid: Grid) {
        self.grid = grid;
    }
}

impl Renderer for Terminal {
    fn render(&mut self, frame: &[Drawable]) {
        let mut pieces = HashMap::new();
        let mut lit = HashSet::new();
        let mut targets = HashSet::new();
        let mut selected = None;
        let mut banner = Vec::new();
        for drawable in frame {
            match drawable {
                Drawable::Laser { path, progress } => lit.extend(cells(path, *progress)),
                Drawable::Piece(piece) => {
                    pieces.insert(piece.position, *piece);
                }
                Drawable::Selection(position) => selected = Some(*position),
                Drawable::Indicator { position, option } => match option {
                    MoveKind::Shift(dir) => {
                        targets.insert(*position + *dir);
                    }
                    MoveKind::Rotate(_) => {}
                },
                Drawable::Turn(a) => banner.push(format!("{} to move", paint(*a, &a.to_string()))),
                Drawable::GameOver(a) => {
                    banner.push(format!("{} wins!", paint(*a, &a.to_string()).bold()))
                }
            }
        }
        let mut out = String::new();
        for y in 0..self.grid.rows {
            for x in 0..self.grid.cols {
                let at = Position::new(x, y);
                let cell = match pieces.get(&at) {
                    Some(piece) => {
                        let text = paint(piece.allegiance, &glyph(piece).to_string());
                        match (selected == Some(at), lit.contains(&at)) {
                            (true, _) => text.bold().underline(),
                            (false, true) => text.on_yellow(),
                            (false, false) => text,
                        }
                    }
                    None if targets.contains(&at) => "+".green(),
                    None if lit.contains(&at) => "*".yellow(),
                    None => ".".dimmed(),
                };
                out.push_str(&format!("{} ", cell));
            }
            out.push('\n');
        }
        for line in banner {
            out.push_str(&line);
            out.push('\n');
        }
        println!("{}", out);
    }
}

fn paint(allegiance: Allegiance, text: &str) -> ColoredString {
    match allegiance {
        Allegiance::Red => text.red(),
        Allegiance::Blue => text.blue(),
    }
}

/// Cells covered by the first `progress` of an axis-aligned beam path.
fn cells(path: &[Position], progress: f32) -> Vec<Position> {
    let limit = Beam::new(path.to_vec()).length() * progress;
    let mut travelled = 0.0;
    let mut covered = Vec::new();
    for w in path.windows(2) {
        let dx = (w[1].x - w[0].x).signum();
        let dy = (w[1].y - w[0].y).signum();
        let mut at = w[0];
        while at != w[1] {
            at = Position::new(at.x + dx, at.y + dy);
            travelled += 1.0;
            if travelled > limit {
                return covered;
            }
            covered.push(at);
        }
    }
    covered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_beam_covers_prefix() {
        let path = [(0, -1), (0, 3), (6, 3)].map(Position::from).to_vec();
        assert!(cells(&path, 0.0).is_empty());
        assert_eq!(cells(&path, 0.2).len(), 2);
        let all = cells(&path, 1.0);
        assert_eq!(all.len(), 10);
        assert_eq!(all.last(), Some(&Position::new(6, 3)));
        assert!(all.contains(&Position::new(0, 3)));
    }
}
