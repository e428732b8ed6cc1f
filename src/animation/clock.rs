//! Animation clock
//!
//! One accumulator shared by every effect. It only moves while something
//! is animating and is zeroed whenever a jump would be visible.

/// Accumulated animation time
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct AnimationClock {
    time: f32,
}

impl AnimationClock {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance by an already speed-scaled delta
    pub fn advance(&mut self, delta: f32) {
        if delta.is_finite() && delta > 0.0 {
            self.time += delta;
        }
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
