//! Application state for the swipe deck screen.
//!
//! `App` wires the gesture classifier to the deck store and carries the
//! UI-only state around them: mode, status line, pointer origin and the card
//! motion currently playing.

use super::motion::{CardMotion, MotionKind};
use crate::domain::{
    Decision, DeckStore, DragVector, GestureClassifier, MapSnapshot, Outcome, Restaurant,
    SwipeConfig, DATASET,
};
use crate::infrastructure::InfraError;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Deck is interactive
    Normal,
    /// Help screen is displayed
    Help,
    /// CSV export dialog is open
    ExportCsv,
    /// Map export dialog is open
    ExportMap,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use snackswipe::application::App;
///
/// let app = App::default();
/// assert_eq!(app.current().map(|r| r.name), Some("Spice Route"));
/// assert_eq!(app.store.energy(), 15);
/// ```
#[derive(Debug)]
pub struct App {
    /// Deck, outcome collections and energy
    pub store: DeckStore,
    /// Gesture state machine for the pointer
    pub gesture: GestureClassifier,
    pub config: SwipeConfig,
    /// Full listing catalog, for the map
    catalog: Vec<Restaurant>,
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Input buffer for filename entry
    pub filename_input: String,
    /// Cursor position within the filename buffer
    pub cursor_position: usize,
    /// Terminal cell where the current pointer drag began
    pub pointer_origin: Option<(u16, u16)>,
    /// Card motion currently playing, if any
    pub motion: Option<CardMotion>,
    /// Terminal width in columns, used for the off-screen fling distance
    pub viewport_width: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl App {
    /// Builds the app over the bundled catalog.
    pub fn new(config: SwipeConfig) -> Self {
        Self::with_catalog(DATASET.to_vec(), config)
    }

    /// Builds the app over `catalog`, which is also the initial deck order.
    pub fn with_catalog(catalog: Vec<Restaurant>, config: SwipeConfig) -> Self {
        Self {
            store: DeckStore::new(catalog.clone(), config.starting_energy),
            gesture: GestureClassifier::new(config.thresholds()),
            config,
            catalog,
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
            filename_input: String::new(),
            cursor_position: 0,
            pointer_origin: None,
            motion: None,
            viewport_width: 80,
        }
    }

    pub fn current(&self) -> Option<&Restaurant> {
        self.store.peek_current()
    }

    pub fn catalog(&self) -> &[Restaurant] {
        &self.catalog
    }

    /// Snapshot for the map: every location, current one highlighted.
    pub fn map_snapshot(&self) -> MapSnapshot {
        MapSnapshot::new(&self.catalog, self.current())
    }

    pub fn on_drag_start(&mut self) {
        self.motion = None;
        self.gesture.on_drag_start();
    }

    pub fn on_drag_update(&mut self, dx: f64, dy: f64) {
        self.gesture.on_drag_update(dx, dy);
    }

    /// Releases the active gesture and starts the matching card motion.
    ///
    /// Returns `None` if no gesture was in progress.
    pub fn on_drag_end(&mut self, dx: f64, dy: f64, now: Instant) -> Option<Decision> {
        let departing = self.current().copied();
        let decision = self.gesture.on_drag_end(dx, dy, &mut self.store)?;
        let from = DragVector::new(dx, dy);

        self.motion = match (decision.outcome(), departing) {
            (Some(outcome), Some(item)) => Some(CardMotion::swipe_out(
                item,
                outcome,
                from,
                self.screen_width_units(),
                now,
                self.config.swipe_duration(),
            )),
            (None, Some(_)) => {
                Some(CardMotion::spring_back(from, now, self.config.spring_duration()))
            }
            (_, None) => None,
        };
        self.status_message = self.describe(decision, departing.as_ref());
        Some(decision)
    }

    fn describe(&self, decision: Decision, item: Option<&Restaurant>) -> Option<String> {
        let name = item.map(|r| r.name)?;
        match decision.outcome() {
            Some(outcome) => Some(format!("{} → {}", name, outcome.heading())),
            None if self.store.energy() == 0 => Some("Out of energy".to_string()),
            None => None,
        }
    }

    /// Pointer went down on terminal cell (`column`, `row`).
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        self.pointer_origin = Some((column, row));
        self.on_drag_start();
    }

    pub fn pointer_drag(&mut self, column: u16, row: u16) {
        if let Some(drag) = self.displacement(column, row) {
            self.on_drag_update(drag.dx, drag.dy);
        }
    }

    pub fn pointer_up(&mut self, column: u16, row: u16, now: Instant) -> Option<Decision> {
        let drag = self.displacement(column, row)?;
        self.pointer_origin = None;
        self.on_drag_end(drag.dx, drag.dy, now)
    }

    /// Abandons any drag in progress without classifying. The card returns
    /// to rest and the store is left untouched.
    pub fn cancel_drag(&mut self, now: Instant) {
        self.pointer_origin = None;
        let from = self.gesture.drag();
        if self.gesture.abort(&self.store) && self.current().is_some() {
            self.motion = Some(CardMotion::spring_back(from, now, self.config.spring_duration()));
        }
    }

    /// Cumulative displacement from the pointer origin, in logical units.
    fn displacement(&self, column: u16, row: u16) -> Option<DragVector> {
        let (origin_col, origin_row) = self.pointer_origin?;
        Some(DragVector::new(
            (f64::from(column) - f64::from(origin_col)) * self.config.cell_width_units,
            (f64::from(row) - f64::from(origin_row)) * self.config.cell_height_units,
        ))
    }

    /// Keyboard swipe: a full drag in the direction of `outcome`, fed through
    /// the same classifier as pointer gestures.
    pub fn swipe(&mut self, outcome: Outcome, now: Instant) -> Option<Decision> {
        let drag = self.keyboard_drag(outcome);
        self.pointer_origin = None;
        self.on_drag_start();
        self.on_drag_update(drag.dx, drag.dy);
        self.on_drag_end(drag.dx, drag.dy, now)
    }

    fn keyboard_drag(&self, outcome: Outcome) -> DragVector {
        let thresholds = self.gesture.thresholds();
        let h = thresholds.horizontal * 1.5;
        let v = thresholds.vertical * 1.5;
        match outcome {
            Outcome::Like => DragVector::new(h, 0.0),
            Outcome::Reject => DragVector::new(-h, 0.0),
            Outcome::Wishlist => DragVector::new(0.0, -v),
            Outcome::Skip => DragVector::new(0.0, v),
        }
    }

    /// Drops the card motion once it has played out.
    pub fn tick(&mut self, now: Instant) {
        if self.motion.as_ref().is_some_and(|m| m.is_finished(now)) {
            self.motion = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Card shown on screen: the departing card while it flies off,
    /// otherwise the current one.
    pub fn displayed_card(&self) -> Option<&Restaurant> {
        match &self.motion {
            Some(CardMotion {
                kind: MotionKind::SwipeOut { item, .. },
                ..
            }) => Some(item),
            _ => self.current(),
        }
    }

    /// Outcome of the card currently flying off, if any.
    pub fn departing_outcome(&self) -> Option<Outcome> {
        match &self.motion {
            Some(CardMotion {
                kind: MotionKind::SwipeOut { outcome, .. },
                ..
            }) => Some(*outcome),
            _ => None,
        }
    }

    /// Offset of the displayed card at `now`.
    pub fn card_offset(&self, now: Instant) -> DragVector {
        match &self.motion {
            Some(motion) => motion.offset(now),
            None => self.gesture.drag(),
        }
    }

    /// Tilt of the displayed card at `now`, in degrees.
    pub fn card_rotation(&self, now: Instant) -> f64 {
        self.config.rotation().degrees_for(self.card_offset(now).dx)
    }

    fn screen_width_units(&self) -> f64 {
        f64::from(self.viewport_width) * self.config.cell_width_units
    }

    pub fn update_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    /// Summary of the current card for the clipboard.
    pub fn current_summary(&self) -> Option<String> {
        self.current().map(Restaurant::summary)
    }

    pub fn set_copy_result(&mut self, result: Result<String, InfraError>) {
        self.status_message = Some(match result {
            Ok(text) => format!("Copied: {}", text),
            Err(error) => format!("Copy failed: {}", error),
        });
    }

    /// Switches to CSV export mode to prompt for a filename.
    pub fn start_csv_export(&mut self) {
        self.cancel_drag(Instant::now());
        self.mode = AppMode::ExportCsv;
        self.filename_input = "snackswipe.csv".to_string();
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    /// Switches to map export mode to prompt for a filename.
    pub fn start_map_export(&mut self) {
        self.cancel_drag(Instant::now());
        self.mode = AppMode::ExportMap;
        self.filename_input = "snackswipe-map.html".to_string();
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    /// Opens the help popup, dropping any drag in progress.
    pub fn open_help(&mut self) {
        self.cancel_drag(Instant::now());
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    /// Cancels filename input and returns to normal mode.
    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Filename typed by the user, falling back to the mode's default.
    pub fn get_export_filename(&self) -> String {
        if !self.filename_input.trim().is_empty() {
            return self.filename_input.trim().to_string();
        }
        match self.mode {
            AppMode::ExportMap => "snackswipe-map.html".to_string(),
            _ => "snackswipe.csv".to_string(),
        }
    }

    /// Records the result of an export and returns to normal mode.
    pub fn set_export_result(&mut self, result: Result<PathBuf, InfraError>) {
        match result {
            Ok(path) => {
                info!(path = %path.display(), "export written");
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(error) => {
                self.status_message = Some(format!("Export failed: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }
}
