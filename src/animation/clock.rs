/// Independent elapsed-time counters driven by the frame delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeline {
    /// Rotation and translation legs.
    Motion,
    /// Gravity legs.
    Gravity,
}

/// Tracks time since the start of the current leg on each [`Timeline`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    motion: f32,
    gravity: f32,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates `dt` seconds into both timelines.
    pub fn advance(&mut self, dt: f32) {
        self.motion += dt;
        self.gravity += dt;
    }

    /// Zeroes one timeline when a new leg starts.
    pub fn reset(&mut self, timeline: Timeline) {
        *self.slot_mut(timeline) = 0.0;
    }

    /// Takes `seconds` off one timeline, keeping whatever lies beyond them.
    pub fn rewind(&mut self, timeline: Timeline, seconds: f32) {
        let slot = self.slot_mut(timeline);
        *slot = (*slot - seconds).max(0.0);
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self, timeline: Timeline) -> f32 {
        match timeline {
            Timeline::Motion => self.motion,
            Timeline::Gravity => self.gravity,
        }
    }

    /// `elapsed / duration`, unclamped. `duration` must be positive.
    #[inline]
    #[must_use]
    pub fn fraction(&self, timeline: Timeline, duration: f32) -> f32 {
        debug_assert!(duration > 0.0, "animation duration must be positive");
        self.elapsed(timeline) / duration
    }

    fn slot_mut(&mut self, timeline: Timeline) -> &mut f32 {
        match timeline {
            Timeline::Motion => &mut self.motion,
            Timeline::Gravity => &mut self.gravity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timelines_reset_independently() {
        let mut clock = AnimationClock::new();
        clock.advance(0.25);
        clock.reset(Timeline::Motion);
        clock.advance(0.25);

        assert_eq!(clock.elapsed(Timeline::Motion), 0.25);
        assert_eq!(clock.elapsed(Timeline::Gravity), 0.5);
        assert_eq!(clock.fraction(Timeline::Gravity, 2.0), 0.25);
    }

    #[test]
    fn rewind_keeps_the_remainder() {
        let mut clock = AnimationClock::new();
        clock.advance(2.5);
        clock.rewind(Timeline::Gravity, 2.0);

        assert_eq!(clock.elapsed(Timeline::Gravity), 0.5);
        assert_eq!(clock.elapsed(Timeline::Motion), 2.5);

        clock.rewind(Timeline::Motion, 4.0);
        assert_eq!(clock.elapsed(Timeline::Motion), 0.0);
    }
}
