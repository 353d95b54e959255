//! Card motion played after a gesture is released.
//!
//! Motion is purely visual. The store has already been updated by the time a
//! motion starts; the renderer just samples an offset until it finishes.

use crate::domain::{DragVector, Outcome, Restaurant};
use std::time::{Duration, Instant};

/// Vertical distance a wishlisted or skipped card travels.
pub const VERTICAL_FLING: f64 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub enum MotionKind {
    /// A classified card leaving the screen
    SwipeOut { item: Restaurant, outcome: Outcome },
    /// A cancelled card returning to rest
    SpringBack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardMotion {
    pub kind: MotionKind,
    from: DragVector,
    to: DragVector,
    started: Instant,
    duration: Duration,
}

impl CardMotion {
    /// Flings `item` off-screen in the direction of `outcome`.
    ///
    /// Horizontal exits travel `screen_width` units; vertical ones a fixed
    /// distance.
    pub fn swipe_out(
        item: Restaurant,
        outcome: Outcome,
        from: DragVector,
        screen_width: f64,
        started: Instant,
        duration: Duration,
    ) -> Self {
        let to = match outcome {
            Outcome::Like => DragVector::new(screen_width, 0.0),
            Outcome::Reject => DragVector::new(-screen_width, 0.0),
            Outcome::Wishlist => DragVector::new(0.0, -VERTICAL_FLING),
            Outcome::Skip => DragVector::new(0.0, VERTICAL_FLING),
        };
        Self {
            kind: MotionKind::SwipeOut { item, outcome },
            from,
            to,
            started,
            duration,
        }
    }

    pub fn spring_back(from: DragVector, started: Instant, duration: Duration) -> Self {
        Self {
            kind: MotionKind::SpringBack,
            from,
            to: DragVector::ZERO,
            started,
            duration,
        }
    }

    /// Fraction of the motion elapsed at `now`, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Card offset at `now`. Swipes accelerate away linearly; the spring
    /// eases out as it settles.
    pub fn offset(&self, now: Instant) -> DragVector {
        let t = self.progress(now);
        let eased = match self.kind {
            MotionKind::SwipeOut { .. } => t,
            MotionKind::SpringBack => 1.0 - (1.0 - t).powi(3),
        };
        self.from.lerp(self.to, eased)
    }
}
