//! Entrance/exit animation timers

use super::form_state::Outcome;
use std::time::{Duration, Instant};

/// Easing curve applied to a transition's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Smooth deceleration
    CubicOut,
    /// Overshoots slightly before settling, a stand-in for a spring
    BackOut,
}

/// A time-boxed animation
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Card fade/slide in (500ms)
    pub const FORM_ENTER: Duration = Duration::from_millis(500);
    /// Dialog pop in/out (300ms)
    pub const DIALOG: Duration = Duration::from_millis(300);

    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self::starting_at(Instant::now(), duration, easing)
    }

    pub fn starting_at(start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Linear progress at `now` (0.0 to 1.0)
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress at `now`
    pub fn eased_at(&self, now: Instant) -> f32 {
        let t = self.progress_at(now);
        match self.easing {
            Easing::CubicOut => simple_easing::cubic_out(t),
            Easing::BackOut => simple_easing::back_out(t),
        }
    }

    pub fn eased(&self) -> f32 {
        self.eased_at(Instant::now())
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete_at(Instant::now())
    }
}

/// Dialog playing its exit animation after dismissal. Holds its own copy of
/// the outcome since the form state no longer exposes one.
#[derive(Debug, Clone, Copy)]
pub struct DialogExit {
    pub outcome: Outcome,
    pub transition: Transition,
}
