use crate::board::Allegiance;
use crate::board::Position;

/// Fatal problems with board-load data. A match cannot start from a bad layout.
#[derive(Debug)]
pub enum LayoutError {
    UnknownLayout(String),
    UnknownPieceKind(String),
    UnknownAllegiance(String),
    UnknownDirection { kind: String, dir: String },
    MissingField { kind: String, field: &'static str },
    Dimensions { cols: i32, rows: i32 },
    Kings { allegiance: Allegiance, count: usize },
    OutOfBounds(Position),
    Overlap(Position),
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLayout(s) => write!(f, "unknown layout: {}", s),
            Self::UnknownPieceKind(s) => write!(f, "unknown piece kind: {}", s),
            Self::UnknownAllegiance(s) => write!(f, "unknown allegiance: {}", s),
            Self::UnknownDirection { kind, dir } => write!(f, "{} cannot face {}", kind, dir),
            Self::MissingField { kind, field } => write!(f, "{} is missing `{}`", kind, field),
            Self::Dimensions { cols, rows } => write!(f, "bad board size {}x{}", cols, rows),
            Self::Kings { allegiance, count } => {
                write!(f, "{} has {} kings, needs exactly one", allegiance, count)
            }
            Self::OutOfBounds(p) => write!(f, "piece at {} is off the board", p),
            Self::Overlap(p) => write!(f, "two pieces at {}", p),
            Self::Parse(e) => write!(f, "malformed layout: {}", e),
            Self::Io(e) => write!(f, "cannot read layout: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
