use super::*;
use crate::board::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

const CLASSIC: &str = include_str!("../../layouts/classic.json");

/// One piece as written in a layout file. Kind-specific fields are optional
/// here and checked against `kind` during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub x: i32,
    pub y: i32,
    pub allegiance: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct File {
    name: String,
    #[serde(default = "cols")]
    cols: i32,
    #[serde(default = "rows")]
    rows: i32,
    pieces: Vec<Record>,
}

fn cols() -> i32 {
    crate::COLS
}
fn rows() -> i32 {
    crate::ROWS
}

impl TryFrom<&Record> for Piece {
    type Error = LayoutError;
    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let allegiance = Allegiance::try_from(record.allegiance.as_str())
            .map_err(|_| LayoutError::UnknownAllegiance(record.allegiance.clone()))?;
        let kind = match record.kind.as_str() {
            "king" => PieceKind::King,
            "wall" => PieceKind::Wall {
                stacked: record.stacked.ok_or_else(|| LayoutError::MissingField {
                    kind: record.kind.clone(),
                    field: "stacked",
                })?,
            },
            "one-sided" => PieceKind::OneSided {
                dir: Facing::try_from(record.direction()?).map_err(|_| record.misdirected())?,
            },
            "two-sided" => PieceKind::TwoSided {
                dir: Axis::try_from(record.direction()?).map_err(|_| record.misdirected())?,
            },
            other => return Err(LayoutError::UnknownPieceKind(other.to_string())),
        };
        Ok(Piece::new(Position::new(record.x, record.y), allegiance, kind))
    }
}

impl From<&Piece> for Record {
    fn from(piece: &Piece) -> Self {
        let (dir, stacked) = match piece.kind {
            PieceKind::OneSided { dir } => (Some(dir.to_string()), None),
            PieceKind::TwoSided { dir } => (Some(dir.to_string()), None),
            PieceKind::Wall { stacked } => (None, Some(stacked)),
            PieceKind::King => (None, None),
        };
        Self {
            x: piece.position.x,
            y: piece.position.y,
            allegiance: piece.allegiance.to_string(),
            kind: piece.kind.name().to_string(),
            dir,
            stacked,
        }
    }
}

impl Record {
    fn direction(&self) -> Result<&str, LayoutError> {
        self.dir.as_deref().ok_or_else(|| LayoutError::MissingField {
            kind: self.kind.clone(),
            field: "dir",
        })
    }
    fn misdirected(&self) -> LayoutError {
        LayoutError::UnknownDirection {
            kind: self.kind.clone(),
            dir: self.dir.clone().unwrap_or_default(),
        }
    }
}

/// A named, validated starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    board: BoardState,
}

impl Layout {
    /// The built-in demonstration layout.
    pub fn classic() -> Self {
        Self::parse(CLASSIC).expect("built-in layout is valid")
    }
    /// Look up a built-in layout by name.
    pub fn named(name: &str) -> Result<Self, LayoutError> {
        match name {
            "classic" => Self::parse(CLASSIC),
            other => Err(LayoutError::UnknownLayout(other.to_string())),
        }
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
            .inspect(|l| log::info!("loaded layout {} from {:?}", l.name, path.as_ref()))
    }
    pub fn parse(json: &str) -> Result<Self, LayoutError> {
        let file = serde_json::from_str::<File>(json)?;
        let sides = 1..=crate::MAX_SIDE;
        if !sides.contains(&file.cols) || !sides.contains(&file.rows) {
            return Err(LayoutError::Dimensions {
                cols: file.cols,
                rows: file.rows,
            });
        }
        let grid = Grid::new(file.cols, file.rows);
        let mut seen = HashSet::new();
        let pieces = file
            .pieces
            .iter()
            .map(Piece::try_from)
            .map(|piece| {
                let piece = piece?;
                if !grid.contains(piece.position) {
                    return Err(LayoutError::OutOfBounds(piece.position));
                }
                if !seen.insert(piece.position) {
                    return Err(LayoutError::Overlap(piece.position));
                }
                Ok(piece)
            })
            .collect::<Result<Vec<Piece>, LayoutError>>()?;
        let board = BoardState::new(grid, pieces);
        for allegiance in Allegiance::all() {
            match board.kings(allegiance) {
                1 => continue,
                count => return Err(LayoutError::Kings { allegiance, count }),
            }
        }
        Ok(Self {
            name: file.name,
            board,
        })
    }
    pub fn to_json(&self) -> String {
        let file = File {
            name: self.name.clone(),
            cols: self.board.grid().cols,
            rows: self.board.grid().rows,
            pieces: self.board.pieces().iter().map(Record::from).collect(),
        };
        serde_json::to_string_pretty(&file).expect("serialize layout")
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// A fresh copy of the starting board.
    pub fn board(&self) -> BoardState {
        self.board.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINGS: &str = r#"
        { "x": 5, "y": 0, "allegiance": "red", "kind": "king" },
        { "x": 4, "y": 7, "allegiance": "blue", "kind": "king" }"#;

    /// One piece at (1,1) followed by both kings.
    fn one(kind: &str, extra: &str) -> String {
        format!(
            r#"{{ "name": "t", "pieces": [
                {{ "x": 1, "y": 1, "allegiance": "red", "kind": "{}"{} }},{} ] }}"#,
            kind, extra, KINGS
        )
    }
    fn sized(cols: i32, rows: i32) -> String {
        format!(
            r#"{{ "name": "t", "cols": {}, "rows": {}, "pieces": [{}] }}"#,
            cols, rows, KINGS
        )
    }

    #[test]
    fn classic_matches_reference() {
        let layout = Layout::classic();
        let board = layout.board();
        assert_eq!(layout.name(), "classic");
        assert_eq!(board.grid(), Grid::new(10, 8));
        assert_eq!(board.len(), 14);
        assert_eq!(board.kings(Allegiance::Red), 1);
        assert_eq!(board.kings(Allegiance::Blue), 1);
        assert_eq!(
            board.at(Position::new(7, 0)).map(|p| p.kind),
            Some(PieceKind::TwoSided { dir: Axis::SE })
        );
        assert_eq!(Layout::named("classic").ok(), Some(layout));
    }

    #[test]
    fn unknown_kind_is_fatal() {
        let err = Layout::parse(&one("bishop", "")).unwrap_err();
        assert!(matches!(err, LayoutError::UnknownPieceKind(ref k) if k == "bishop"));
    }

    #[test]
    fn kind_specific_fields() {
        assert!(matches!(
            Layout::parse(&one("one-sided", "")),
            Err(LayoutError::MissingField { field: "dir", .. })
        ));
        assert!(matches!(
            Layout::parse(&one("two-sided", r#", "dir": "nw""#)),
            Err(LayoutError::UnknownDirection { .. })
        ));
        assert!(matches!(
            Layout::parse(&one("wall", "")),
            Err(LayoutError::MissingField { field: "stacked", .. })
        ));
        let wall = Layout::parse(&one("wall", r#", "stacked": true"#)).unwrap();
        assert_eq!(wall.board().pieces()[0].kind, PieceKind::Wall { stacked: true });
        let mirror = Layout::parse(&one("one-sided", r#", "dir": "nw""#)).unwrap();
        assert_eq!(
            mirror.board().pieces()[0].kind,
            PieceKind::OneSided { dir: Facing::NW }
        );
    }

    #[test]
    fn rejects_bad_placement() {
        let off = r#"{ "name": "t", "cols": 2, "rows": 2, "pieces": [
            { "x": 2, "y": 0, "allegiance": "red", "kind": "king" } ] }"#;
        assert!(matches!(Layout::parse(off), Err(LayoutError::OutOfBounds(_))));
        let twice = r#"{ "name": "t", "pieces": [
            { "x": 0, "y": 0, "allegiance": "red", "kind": "king" },
            { "x": 0, "y": 0, "allegiance": "blue", "kind": "king" } ] }"#;
        assert!(matches!(Layout::parse(twice), Err(LayoutError::Overlap(_))));
        let side = r#"{ "name": "t", "pieces": [
            { "x": 0, "y": 0, "allegiance": "green", "kind": "king" } ] }"#;
        assert!(matches!(Layout::parse(side), Err(LayoutError::UnknownAllegiance(_))));
        assert!(matches!(Layout::parse("{"), Err(LayoutError::Parse(_))));
        assert!(matches!(Layout::named("nope"), Err(LayoutError::UnknownLayout(_))));
    }

    #[test]
    fn each_side_needs_exactly_one_king() {
        let lonely = r#"{ "name": "t", "pieces": [
            { "x": 5, "y": 0, "allegiance": "red", "kind": "king" } ] }"#;
        assert!(matches!(
            Layout::parse(lonely),
            Err(LayoutError::Kings { allegiance: Allegiance::Blue, count: 0 })
        ));
        let crowded = one("king", "");
        assert!(matches!(
            Layout::parse(&crowded),
            Err(LayoutError::Kings { allegiance: Allegiance::Red, count: 2 })
        ));
        assert!(matches!(
            Layout::parse(r#"{ "name": "t", "pieces": [] }"#),
            Err(LayoutError::Kings { count: 0, .. })
        ));
    }

    #[test]
    fn board_size_is_bounded() {
        for (cols, rows) in [(0, 8), (10, -3), (100_000, 100_000), (crate::MAX_SIDE + 1, 8)] {
            assert!(matches!(
                Layout::parse(&sized(cols, rows)),
                Err(LayoutError::Dimensions { .. })
            ));
        }
        let largest = Layout::parse(&sized(crate::MAX_SIDE, crate::MAX_SIDE)).unwrap();
        assert_eq!(largest.board().grid().area(), 256 * 256);
    }

    #[test]
    fn json_survives_a_round_trip() {
        let layout = Layout::classic();
        let again = Layout::parse(&layout.to_json()).unwrap();
        assert_eq!(again, layout);
    }
}
