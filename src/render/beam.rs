use crate::board::Position;
use crate::rules::LaserResult;

/// Distance bookkeeping for animating a beam along its path.
///
/// Progress is a fraction of the total path length, so a renderer can draw
/// the beam partially and the audio layer can tell when each bounce is
/// reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    path: Vec<Position>,
    /// Cumulative distance at the end of each segment.
    reach: Vec<f32>,
}

impl From<&LaserResult> for Beam {
    fn from(result: &LaserResult) -> Self {
        Self::new(result.path.clone())
    }
}

impl Beam {
    pub fn new(path: Vec<Position>) -> Self {
        let reach = path
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .scan(0.0, |acc, d| {
                *acc += d;
                Some(*acc)
            })
            .collect();
        Self { path, reach }
    }
    pub fn path(&self) -> &[Position] {
        &self.path
    }
    pub fn length(&self) -> f32 {
        self.reach.last().copied().unwrap_or(0.0)
    }
    /// Fraction of the total length at which each bounce is reached.
    pub fn fractions(&self) -> Vec<f32> {
        let total = self.length();
        let n = self.reach.len().saturating_sub(1);
        self.reach[..n]
            .iter()
            .map(|d| if total > 0.0 { d / total } else { 1.0 })
            .collect()
    }
    /// Bounce cells whose fraction lies in `(from, to]`.
    pub fn crossed(&self, from: f32, to: f32) -> Vec<Position> {
        self.fractions()
            .into_iter()
            .zip(self.path.iter().skip(1))
            .filter(|(f, _)| from < *f && *f <= to)
            .map(|(_, p)| *p)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam() -> Beam {
        // 4 down, 6 across, 10 up: total 20
        Beam::new(
            [(0, -1), (0, 3), (6, 3), (6, -7)]
                .map(Position::from)
                .to_vec(),
        )
    }

    #[test]
    fn lengths_and_fractions() {
        let beam = beam();
        assert_eq!(beam.length(), 20.0);
        assert_eq!(beam.fractions(), vec![0.2, 0.5]);
    }

    #[test]
    fn crossings_fire_once_each() {
        let beam = beam();
        let steps = [0.0, 0.1, 0.2, 0.35, 0.6, 1.0];
        let crossed = steps
            .windows(2)
            .flat_map(|w| beam.crossed(w[0], w[1]))
            .collect::<Vec<_>>();
        assert_eq!(crossed, vec![Position::new(0, 3), Position::new(6, 3)]);
        assert_eq!(beam.crossed(0.0, 1.0).len(), 2);
        assert!(beam.crossed(0.5, 1.0).is_empty());
    }

    #[test]
    fn straight_beam_has_no_bounces() {
        let beam = Beam::new(vec![Position::new(0, -1), Position::new(0, 8)]);
        assert!(beam.fractions().is_empty());
        assert!(beam.crossed(0.0, 1.0).is_empty());
    }
}
