use std::time::Duration;

/// Pacing for local beam animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Wall-clock time for the beam to travel its whole path.
    pub duration: Duration,
    /// Interval between frames.
    pub frame: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(crate::ANIMATION_MILLIS),
            frame: Duration::from_millis(crate::FRAME_MILLIS),
        }
    }
}

impl AnimationConfig {
    /// No waiting at all: one frame per shot.
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            frame: Duration::ZERO,
        }
    }
    pub fn millis(duration: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration),
            ..Self::default()
        }
    }
    /// Number of frames in one animation, at least one.
    pub fn frames(&self) -> usize {
        match self.frame.is_zero() {
            true => 1,
            false => (self.duration.as_micros() / self.frame.as_micros()).max(1) as usize,
        }
    }
    /// Progress fraction after frame `i` of [`AnimationConfig::frames`].
    pub fn progress(&self, i: usize) -> f32 {
        i as f32 / self.frames() as f32
    }
}
