use serde::Deserialize;
use serde::Serialize;

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allegiance {
    Red,
    Blue,
}

impl Allegiance {
    pub const fn all() -> [Self; 2] {
        [Self::Red, Self::Blue]
    }
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

impl std::fmt::Display for Allegiance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

impl TryFrom<&str> for Allegiance {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            _ => Err("invalid allegiance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for a in Allegiance::all() {
            assert_ne!(a, a.opponent());
            assert_eq!(a, a.opponent().opponent());
        }
    }

    #[test]
    fn display_parses_back() {
        for a in Allegiance::all() {
            assert_eq!(Allegiance::try_from(a.to_string().as_str()), Ok(a));
        }
        assert!(Allegiance::try_from("green").is_err());
    }
}
