use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// One of the eight compass directions a piece may shift in.
/// Screen convention: `y` grows southward, so north is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    pub const fn all() -> [Self; 8] {
        [
            Self::N,
            Self::NE,
            Self::E,
            Self::SE,
            Self::S,
            Self::SW,
            Self::W,
            Self::NW,
        ]
    }
    /// Unit vector `(dx, dy)`.
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Self::N => (0, -1),
            Self::NE => (1, -1),
            Self::E => (1, 0),
            Self::SE => (1, 1),
            Self::S => (0, 1),
            Self::SW => (-1, 1),
            Self::W => (-1, 0),
            Self::NW => (-1, -1),
        }
    }
}

impl From<Heading> for Compass {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::N => Self::N,
            Heading::E => Self::E,
            Heading::S => Self::S,
            Heading::W => Self::W,
        }
    }
}

impl Arbitrary for Compass {
    fn random() -> Self {
        Self::all()[rand::random_range(0..8)]
    }
}

/// Direction of travel of a laser beam. Beams only ever move orthogonally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    N,
    E,
    S,
    W,
}

impl Heading {
    pub const fn all() -> [Self; 4] {
        [Self::N, Self::E, Self::S, Self::W]
    }
    pub const fn reverse(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::E => Self::W,
            Self::S => Self::N,
            Self::W => Self::E,
        }
    }
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Self::N => (0, -1),
            Self::E => (1, 0),
            Self::S => (0, 1),
            Self::W => (-1, 0),
        }
    }
}

/// Diagonal a one-sided piece's reflective face points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    NE,
    SE,
    SW,
    NW,
}

impl Facing {
    pub const fn all() -> [Self; 4] {
        [Self::NE, Self::SE, Self::SW, Self::NW]
    }
    /// The horizontal and vertical headings the face opens toward.
    /// A beam travelling against one of them leaves along the other.
    pub const fn components(self) -> (Heading, Heading) {
        match self {
            Self::NE => (Heading::E, Heading::N),
            Self::SE => (Heading::E, Heading::S),
            Self::SW => (Heading::W, Heading::S),
            Self::NW => (Heading::W, Heading::N),
        }
    }
    pub const fn rotate(self, spin: Spin) -> Self {
        match (self, spin) {
            (Self::NE, Spin::Cw) => Self::SE,
            (Self::SE, Spin::Cw) => Self::SW,
            (Self::SW, Spin::Cw) => Self::NW,
            (Self::NW, Spin::Cw) => Self::NE,
            (Self::NE, Spin::Ccw) => Self::NW,
            (Self::NW, Spin::Ccw) => Self::SW,
            (Self::SW, Spin::Ccw) => Self::SE,
            (Self::SE, Spin::Ccw) => Self::NE,
        }
    }
}

/// Diagonal a two-sided mirror lies along, named by one of its two faces.
/// `NE` reflects off its north-east and south-west faces; `SE` off south-east and north-west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    NE,
    SE,
}

impl Axis {
    pub const fn faces(self) -> [Facing; 2] {
        match self {
            Self::NE => [Facing::NE, Facing::SW],
            Self::SE => [Facing::SE, Facing::NW],
        }
    }
    /// Only two orientations exist, so either spin toggles.
    pub const fn rotate(self, _: Spin) -> Self {
        match self {
            Self::NE => Self::SE,
            Self::SE => Self::NE,
        }
    }
}

/// Rotation sense for a rotate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    pub const fn all() -> [Self; 2] {
        [Self::Cw, Self::Ccw]
    }
}

impl Arbitrary for Spin {
    fn random() -> Self {
        Self::all()[rand::random_range(0..2)]
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
            Self::W => "w",
            Self::NW => "nw",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Compass::from(*self))
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NE => write!(f, "ne"),
            Self::SE => write!(f, "se"),
            Self::SW => write!(f, "sw"),
            Self::NW => write!(f, "nw"),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NE => write!(f, "ne"),
            Self::SE => write!(f, "se"),
        }
    }
}

impl std::fmt::Display for Spin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cw => write!(f, "cw"),
            Self::Ccw => write!(f, "ccw"),
        }
    }
}

impl TryFrom<&str> for Compass {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or("invalid compass direction")
    }
}

impl TryFrom<&str> for Facing {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|d| d.to_string() == s)
            .ok_or("invalid facing")
    }
}

impl TryFrom<&str> for Axis {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "ne" => Ok(Self::NE),
            "se" => Ok(Self::SE),
            _ => Err("invalid axis"),
        }
    }
}

impl TryFrom<&str> for Spin {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "cw" => Ok(Self::Cw),
            "ccw" => Ok(Self::Ccw),
            _ => Err("invalid spin"),
        }
    }
}
