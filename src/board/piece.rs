use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Closed set of piece variants, each carrying its orientation where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PieceKind {
    OneSided { dir: Facing },
    TwoSided { dir: Axis },
    King,
    Wall { stacked: bool },
}

/// What a piece does to a beam that runs into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    /// Beam turns and keeps travelling from this cell.
    Reflect(Heading),
    /// Beam stops; the piece survives in a demoted form.
    Replace(PieceKind),
    /// Beam stops; the piece is removed.
    Absorb,
}

impl PieceKind {
    /// Reaction to a beam travelling along `incoming` when it enters this piece's cell.
    pub fn deflect(&self, incoming: Heading) -> Deflection {
        match *self {
            Self::OneSided { dir } => {
                let (horizontal, vertical) = dir.components();
                if incoming == horizontal.reverse() {
                    Deflection::Reflect(vertical)
                } else if incoming == vertical.reverse() {
                    Deflection::Reflect(horizontal)
                } else {
                    Deflection::Absorb
                }
            }
            Self::TwoSided { dir } => dir
                .faces()
                .into_iter()
                .map(|face| Self::OneSided { dir: face }.deflect(incoming))
                .find(|d| matches!(d, Deflection::Reflect(_)))
                .unwrap_or(Deflection::Absorb),
            Self::King => Deflection::Absorb,
            Self::Wall { stacked: true } => Deflection::Replace(Self::Wall { stacked: false }),
            Self::Wall { stacked: false } => Deflection::Absorb,
        }
    }
    pub fn is_king(&self) -> bool {
        matches!(self, Self::King)
    }
    pub fn is_rotatable(&self) -> bool {
        matches!(self, Self::OneSided { .. } | Self::TwoSided { .. })
    }
    /// Orientation after a rotate move, or None for kinds that cannot turn.
    pub fn rotate(&self, spin: Spin) -> Option<Self> {
        match *self {
            Self::OneSided { dir } => Some(Self::OneSided {
                dir: dir.rotate(spin),
            }),
            Self::TwoSided { dir } => Some(Self::TwoSided {
                dir: dir.rotate(spin),
            }),
            Self::King | Self::Wall { .. } => None,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::OneSided { .. } => "one-sided",
            Self::TwoSided { .. } => "two-sided",
            Self::King => "king",
            Self::Wall { .. } => "wall",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneSided { dir } => write!(f, "one-sided {}", dir),
            Self::TwoSided { dir } => write!(f, "two-sided {}", dir),
            Self::King => write!(f, "king"),
            Self::Wall { stacked: true } => write!(f, "stacked wall"),
            Self::Wall { stacked: false } => write!(f, "wall"),
        }
    }
}

/// A live piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub position: Position,
    pub allegiance: Allegiance,
    #[serde(flatten)]
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(position: Position, allegiance: Allegiance, kind: PieceKind) -> Self {
        Self {
            position,
            allegiance,
            kind,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.allegiance, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(dir: Facing) -> PieceKind {
        PieceKind::OneSided { dir }
    }

    #[test]
    fn one_sided_ne_table() {
        let ne = one(Facing::NE);
        assert_eq!(ne.deflect(Heading::W), Deflection::Reflect(Heading::N));
        assert_eq!(ne.deflect(Heading::S), Deflection::Reflect(Heading::E));
        assert_eq!(ne.deflect(Heading::E), Deflection::Absorb);
        assert_eq!(ne.deflect(Heading::N), Deflection::Absorb);
    }

    #[test]
    fn one_sided_other_facings() {
        assert_eq!(one(Facing::SE).deflect(Heading::W), Deflection::Reflect(Heading::S));
        assert_eq!(one(Facing::SE).deflect(Heading::N), Deflection::Reflect(Heading::E));
        assert_eq!(one(Facing::SW).deflect(Heading::E), Deflection::Reflect(Heading::S));
        assert_eq!(one(Facing::SW).deflect(Heading::N), Deflection::Reflect(Heading::W));
        assert_eq!(one(Facing::NW).deflect(Heading::E), Deflection::Reflect(Heading::N));
        assert_eq!(one(Facing::NW).deflect(Heading::S), Deflection::Reflect(Heading::W));
    }

    #[test]
    fn one_sided_reflects_exactly_two_headings() {
        for f in Facing::all() {
            let reflected = Heading::all()
                .into_iter()
                .filter(|h| matches!(one(f).deflect(*h), Deflection::Reflect(_)))
                .count();
            assert_eq!(reflected, 2);
        }
    }

    #[test]
    fn reflections_turn_ninety_degrees() {
        for f in Facing::all() {
            for h in Heading::all() {
                if let Deflection::Reflect(out) = one(f).deflect(h) {
                    assert_ne!(out, h);
                    assert_ne!(out, h.reverse());
                }
            }
        }
    }

    #[test]
    fn two_sided_never_absorbs() {
        for dir in [Axis::NE, Axis::SE] {
            for h in Heading::all() {
                assert!(matches!(
                    PieceKind::TwoSided { dir }.deflect(h),
                    Deflection::Reflect(_)
                ));
            }
        }
        let ne = PieceKind::TwoSided { dir: Axis::NE };
        assert_eq!(ne.deflect(Heading::W), Deflection::Reflect(Heading::N));
        assert_eq!(ne.deflect(Heading::E), Deflection::Reflect(Heading::S));
        let se = PieceKind::TwoSided { dir: Axis::SE };
        assert_eq!(se.deflect(Heading::W), Deflection::Reflect(Heading::S));
        assert_eq!(se.deflect(Heading::E), Deflection::Reflect(Heading::N));
    }

    #[test]
    fn walls_and_kings() {
        for h in Heading::all() {
            assert_eq!(PieceKind::King.deflect(h), Deflection::Absorb);
            assert_eq!(
                PieceKind::Wall { stacked: true }.deflect(h),
                Deflection::Replace(PieceKind::Wall { stacked: false })
            );
            assert_eq!(PieceKind::Wall { stacked: false }.deflect(h), Deflection::Absorb);
        }
    }

    #[test]
    fn rotation_cycles() {
        let start = one(Facing::SW);
        let four = (0..4).try_fold(start, |k, _| k.rotate(Spin::Cw));
        assert_eq!(four, Some(start));
        let mirror = PieceKind::TwoSided { dir: Axis::SE };
        let two = (0..2).try_fold(mirror, |k, _| k.rotate(Spin::Cw));
        assert_eq!(two, Some(mirror));
        assert_eq!(PieceKind::King.rotate(Spin::Cw), None);
        assert_eq!(PieceKind::Wall { stacked: true }.rotate(Spin::Ccw), None);
    }
}
