//! Drag gesture interpretation.
//!
//! A drag is tracked as a cumulative displacement from the point where the
//! pointer went down. Nothing is decided while the pointer moves; on release
//! the final displacement is run through a fixed, ordered decision table.

use super::deck::DeckStore;
use super::models::Decision;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default horizontal distance a drag must exceed to like or reject.
pub const HORIZONTAL_THRESHOLD: f64 = 120.0;
/// Default vertical distance a drag must exceed to wishlist or skip.
pub const VERTICAL_THRESHOLD: f64 = 100.0;

/// Cumulative pointer displacement in logical units.
///
/// Positive `dx` is rightwards, positive `dy` is downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DragVector {
    pub dx: f64,
    pub dy: f64,
}

impl DragVector {
    pub const ZERO: DragVector = DragVector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Linear interpolation towards `target`, `t` in `0.0..=1.0`.
    pub fn lerp(self, target: DragVector, t: f64) -> DragVector {
        DragVector {
            dx: self.dx + (target.dx - self.dx) * t,
            dy: self.dy + (target.dy - self.dy) * t,
        }
    }
}

/// Distances a release must strictly exceed to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            horizontal: HORIZONTAL_THRESHOLD,
            vertical: VERTICAL_THRESHOLD,
        }
    }
}

/// Maps a released drag to a decision, ignoring store state.
///
/// First match wins: right, left, up, down, otherwise cancel. Horizontal
/// intent beats vertical on a diagonal drag. Comparisons are strict, so a
/// drag landing exactly on a threshold cancels.
///
/// # Examples
///
/// ```
/// use snackswipe::domain::{decide, Decision, DragVector, Thresholds};
///
/// let t = Thresholds::default();
/// assert_eq!(decide(DragVector::new(150.0, -150.0), &t), Decision::Like);
/// assert_eq!(decide(DragVector::new(120.0, 0.0), &t), Decision::Cancel);
/// ```
pub fn decide(drag: DragVector, thresholds: &Thresholds) -> Decision {
    if drag.dx > thresholds.horizontal {
        Decision::Like
    } else if drag.dx < -thresholds.horizontal {
        Decision::Reject
    } else if drag.dy < -thresholds.vertical {
        Decision::Wishlist
    } else if drag.dy > thresholds.vertical {
        Decision::Skip
    } else {
        Decision::Cancel
    }
}

/// Maps a released drag to a decision, honouring the store's state.
///
/// An empty deck or zero energy always cancels, whatever the displacement.
pub fn resolve(drag: DragVector, thresholds: &Thresholds, store: &DeckStore) -> Decision {
    if !store.can_classify() {
        return Decision::Cancel;
    }
    decide(drag, thresholds)
}

/// Per-gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No pointer interaction in progress
    Idle,
    /// Pointer is down and the drag vector is live
    Dragging,
    /// Decision taken on release, while the store is being updated
    Resolved(Decision),
}

/// Single-pointer gesture state machine feeding a [`DeckStore`].
///
/// Guarantees at most one `classify` or `reset` call per completed gesture:
/// a release without a preceding pointer-down is ignored.
///
/// # Examples
///
/// ```
/// use snackswipe::domain::{DeckStore, Decision, GestureClassifier, Thresholds, DATASET};
///
/// let mut store = DeckStore::new(DATASET.to_vec(), 15);
/// let mut gesture = GestureClassifier::new(Thresholds::default());
///
/// gesture.on_drag_start();
/// gesture.on_drag_update(80.0, 0.0);
/// assert_eq!(gesture.on_drag_end(150.0, 0.0, &mut store), Some(Decision::Like));
/// assert_eq!(store.liked().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    thresholds: Thresholds,
    phase: GesturePhase,
    drag: DragVector,
    last_decision: Option<Decision>,
}

impl GestureClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            phase: GesturePhase::Idle,
            drag: DragVector::ZERO,
            last_decision: None,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Live drag vector; zero whenever no gesture is in progress.
    pub fn drag(&self) -> DragVector {
        self.drag
    }

    /// Decision of the most recently released gesture.
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Pointer went down. A second pointer-down mid-drag restarts the gesture.
    pub fn on_drag_start(&mut self) {
        debug!(previous = ?self.phase, "drag started");
        self.phase = GesturePhase::Dragging;
        self.drag = DragVector::ZERO;
    }

    /// Pointer moved; `dx`/`dy` are cumulative from the gesture's start point.
    pub fn on_drag_update(&mut self, dx: f64, dy: f64) {
        if !self.is_dragging() {
            return;
        }
        trace!(dx, dy, "drag update");
        self.drag = DragVector::new(dx, dy);
    }

    /// Pointer released at cumulative displacement (`dx`, `dy`).
    ///
    /// Resolves the gesture, then either classifies the current item or
    /// resets, and returns to `Idle`. Returns `None` if no gesture was in
    /// progress.
    pub fn on_drag_end(&mut self, dx: f64, dy: f64, store: &mut DeckStore) -> Option<Decision> {
        if !self.is_dragging() {
            return None;
        }

        let decision = resolve(DragVector::new(dx, dy), &self.thresholds, store);
        self.phase = GesturePhase::Resolved(decision);
        match decision.outcome() {
            Some(outcome) => {
                store.classify(outcome);
            }
            None => store.reset(),
        }

        debug!(dx, dy, ?decision, "drag resolved");
        self.finish(decision);
        Some(decision)
    }

    /// Drops an in-progress gesture without classifying, as if it had been
    /// released at rest. Returns whether a gesture was active.
    pub fn abort(&mut self, store: &DeckStore) -> bool {
        if !self.is_dragging() {
            return false;
        }
        debug!(drag = ?self.drag, "drag aborted");
        self.phase = GesturePhase::Resolved(Decision::Cancel);
        store.reset();
        self.finish(Decision::Cancel);
        true
    }

    fn finish(&mut self, decision: Decision) {
        self.last_decision = Some(decision);
        self.drag = DragVector::ZERO;
        self.phase = GesturePhase::Idle;
    }
}

/// Display-only tilt of a dragged card.
///
/// Maps horizontal displacement linearly from `-input_range..=input_range`
/// onto `-max_degrees..=max_degrees`, clamped outside that domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationCurve {
    pub input_range: f64,
    pub max_degrees: f64,
}

impl Default for RotationCurve {
    fn default() -> Self {
        Self {
            input_range: 200.0,
            max_degrees: 10.0,
        }
    }
}

impl RotationCurve {
    pub fn degrees_for(&self, dx: f64) -> f64 {
        let t = (dx / self.input_range).clamp(-1.0, 1.0);
        t * self.max_degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, Outcome, Restaurant};
    use rstest::rstest;

    fn item(id: &'static str) -> Restaurant {
        Restaurant {
            id,
            name: id,
            cuisine: "Test",
            price: 100,
            tags: &["t"],
            popularity: 0,
            hidden: false,
            position: Coordinates::new(12.97, 77.59),
        }
    }

    fn abc(energy: u32) -> DeckStore {
        DeckStore::new(vec![item("A"), item("B"), item("C")], energy)
    }

    fn release(
        gesture: &mut GestureClassifier,
        store: &mut DeckStore,
        dx: f64,
        dy: f64,
    ) -> Option<Decision> {
        gesture.on_drag_start();
        gesture.on_drag_update(dx / 2.0, dy / 2.0);
        gesture.on_drag_end(dx, dy, store)
    }

    #[rstest]
    #[case::right(150.0, 0.0, Decision::Like)]
    #[case::left(-150.0, 0.0, Decision::Reject)]
    #[case::up(0.0, -150.0, Decision::Wishlist)]
    #[case::down(0.0, 150.0, Decision::Skip)]
    #[case::at_rest(0.0, 0.0, Decision::Cancel)]
    #[case::right_beats_up(150.0, -150.0, Decision::Like)]
    #[case::left_beats_down(-150.0, 150.0, Decision::Reject)]
    #[case::up_beats_down_range(50.0, -150.0, Decision::Wishlist)]
    #[case::horizontal_boundary(120.0, 0.0, Decision::Cancel)]
    #[case::just_past_horizontal(121.0, 0.0, Decision::Like)]
    #[case::negative_horizontal_boundary(-120.0, 0.0, Decision::Cancel)]
    #[case::just_past_negative_horizontal(-121.0, 0.0, Decision::Reject)]
    #[case::vertical_boundary_up(0.0, -100.0, Decision::Cancel)]
    #[case::just_past_vertical_up(0.0, -101.0, Decision::Wishlist)]
    #[case::vertical_boundary_down(0.0, 100.0, Decision::Cancel)]
    #[case::just_past_vertical_down(0.0, 101.0, Decision::Skip)]
    #[case::short_diagonal(119.0, 99.0, Decision::Cancel)]
    fn decision_table(#[case] dx: f64, #[case] dy: f64, #[case] expected: Decision) {
        assert_eq!(decide(DragVector::new(dx, dy), &Thresholds::default()), expected);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds {
            horizontal: 10.0,
            vertical: 5.0,
        };
        assert_eq!(decide(DragVector::new(11.0, 0.0), &t), Decision::Like);
        assert_eq!(decide(DragVector::new(0.0, 6.0), &t), Decision::Skip);
    }

    #[test]
    fn test_guard_precedes_table_without_energy() {
        let mut store = abc(0);
        let mut gesture = GestureClassifier::new(Thresholds::default());

        assert_eq!(release(&mut gesture, &mut store, 150.0, 0.0), Some(Decision::Cancel));
        assert_eq!(store.deck().len(), 3);
        assert!(store.liked().is_empty());
        assert_eq!(store.energy(), 0);
    }

    #[test]
    fn test_guard_precedes_table_on_empty_deck() {
        let mut store = DeckStore::new(Vec::new(), 15);
        let mut gesture = GestureClassifier::new(Thresholds::default());

        assert_eq!(release(&mut gesture, &mut store, 0.0, 150.0), Some(Decision::Cancel));
        assert_eq!(store.energy(), 15);
        assert!(store.skipped().is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut store = abc(15);
        let mut gesture = GestureClassifier::new(Thresholds::default());

        assert_eq!(release(&mut gesture, &mut store, 150.0, 0.0), Some(Decision::Like));
        assert_eq!(store.liked().iter().map(|r| r.id).collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(store.deck().iter().map(|r| r.id).collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(store.energy(), 14);
        assert_eq!(store.peek_current().map(|r| r.id), Some("B"));

        assert_eq!(release(&mut gesture, &mut store, 0.0, -150.0), Some(Decision::Wishlist));
        assert_eq!(store.wishlisted().iter().map(|r| r.id).collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(store.deck().iter().map(|r| r.id).collect::<Vec<_>>(), vec!["C"]);
        assert_eq!(store.energy(), 13);
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let mut store = abc(15);
        let mut gesture = GestureClassifier::new(Thresholds::default());

        assert_eq!(release(&mut gesture, &mut store, 60.0, -40.0), Some(Decision::Cancel));
        assert_eq!(store.peek_current().map(|r| r.id), Some("A"));
        assert_eq!(store.energy(), 15);
    }

    #[test]
    fn test_phase_transitions() {
        let mut store = abc(15);
        let mut gesture = GestureClassifier::new(Thresholds::default());
        assert_eq!(gesture.phase(), GesturePhase::Idle);

        gesture.on_drag_start();
        assert_eq!(gesture.phase(), GesturePhase::Dragging);
        assert_eq!(gesture.drag(), DragVector::ZERO);

        gesture.on_drag_update(30.0, -12.5);
        assert_eq!(gesture.drag(), DragVector::new(30.0, -12.5));

        gesture.on_drag_end(-200.0, 0.0, &mut store);
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert_eq!(gesture.last_decision(), Some(Decision::Reject));
        assert_eq!(gesture.drag(), DragVector::ZERO);

        gesture.on_drag_start();
        assert_eq!(gesture.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn test_updates_ignored_when_not_dragging() {
        let mut gesture = GestureClassifier::new(Thresholds::default());
        gesture.on_drag_update(50.0, 50.0);
        assert_eq!(gesture.drag(), DragVector::ZERO);
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_release_without_gesture_is_ignored() {
        let mut store = abc(15);
        let mut gesture = GestureClassifier::new(Thresholds::default());

        assert_eq!(gesture.on_drag_end(150.0, 0.0, &mut store), None);

        gesture.on_drag_start();
        assert!(gesture.on_drag_end(150.0, 0.0, &mut store).is_some());
        assert_eq!(gesture.on_drag_end(150.0, 0.0, &mut store), None);

        assert_eq!(store.liked().len(), 1);
        assert_eq!(store.energy(), 14);
    }

    #[test]
    fn test_abort_cancels_without_classifying() {
        let store = abc(15);
        let mut gesture = GestureClassifier::new(Thresholds::default());
        assert!(!gesture.abort(&store));

        gesture.on_drag_start();
        gesture.on_drag_update(300.0, 0.0);
        assert!(gesture.abort(&store));

        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert_eq!(gesture.drag(), DragVector::ZERO);
        assert_eq!(gesture.last_decision(), Some(Decision::Cancel));
        assert_eq!(store.deck().len(), 3);
        assert_eq!(store.energy(), 15);
    }

    #[test]
    fn test_restart_mid_drag_zeroes_vector() {
        let mut gesture = GestureClassifier::new(Thresholds::default());
        gesture.on_drag_start();
        gesture.on_drag_update(70.0, 10.0);
        gesture.on_drag_start();
        assert_eq!(gesture.drag(), DragVector::ZERO);
        assert!(gesture.is_dragging());
    }

    #[test]
    fn test_exhaustion_through_gestures() {
        let mut store = abc(15);
        let mut gesture = GestureClassifier::new(Thresholds::default());
        for _ in 0..3 {
            assert_eq!(release(&mut gesture, &mut store, 0.0, 150.0), Some(Decision::Skip));
        }
        assert!(store.peek_current().is_none());
        assert_eq!(release(&mut gesture, &mut store, 0.0, 150.0), Some(Decision::Cancel));
        assert_eq!(store.collection(Outcome::Skip).len(), 3);
        assert_eq!(store.total(), 3);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(100.0, 5.0)]
    #[case(-100.0, -5.0)]
    #[case(200.0, 10.0)]
    #[case(-200.0, -10.0)]
    #[case(450.0, 10.0)]
    #[case(-1000.0, -10.0)]
    fn rotation_curve(#[case] dx: f64, #[case] degrees: f64) {
        let curve = RotationCurve::default();
        assert!((curve.degrees_for(dx) - degrees).abs() < 1e-9);
    }

    #[test]
    fn test_lerp() {
        let from = DragVector::new(100.0, -40.0);
        assert_eq!(from.lerp(DragVector::ZERO, 0.0), from);
        assert_eq!(from.lerp(DragVector::ZERO, 1.0), DragVector::ZERO);
        assert_eq!(from.lerp(DragVector::ZERO, 0.5), DragVector::new(50.0, -20.0));
    }
}
