use crate::application::{App, AppMode};
use crate::domain::Outcome;
use crate::infrastructure::{ClipboardService, MapExporter, OutcomeExporter};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::path::Path;
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::ExportCsv | AppMode::ExportMap => Self::handle_filename_input_mode(app, key),
        }
    }

    /// Left-button drags on the screen are card gestures. Outside normal
    /// mode only a release is handled, and it cancels the drag.
    pub fn handle_mouse_event(app: &mut App, event: MouseEvent) {
        if !matches!(app.mode, AppMode::Normal) {
            if let MouseEventKind::Up(MouseButton::Left) = event.kind {
                app.cancel_drag(Instant::now());
            }
            return;
        }
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.pointer_down(event.column, event.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                app.pointer_drag(event.column, event.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                app.pointer_up(event.column, event.row, Instant::now());
            }
            _ => {}
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('e') = key {
                app.start_csv_export();
            }
            return;
        }

        let now = Instant::now();
        match key {
            KeyCode::Right | KeyCode::Char('l') => {
                app.swipe(Outcome::Like, now);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.swipe(Outcome::Reject, now);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.swipe(Outcome::Wishlist, now);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.swipe(Outcome::Skip, now);
            }
            KeyCode::Char('y') => match app.current_summary() {
                Some(text) => {
                    let result = ClipboardService::copy(text);
                    app.set_copy_result(result);
                }
                None => app.status_message = Some("Nothing to copy".to_string()),
            },
            KeyCode::Char('m') => {
                app.start_map_export();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            KeyCode::Esc => {
                app.status_message = None;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_filename_input_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_export_filename();
                let path = Path::new(&filename);
                let result = match app.mode {
                    AppMode::ExportMap => MapExporter::export_html(&app.map_snapshot(), path),
                    _ => OutcomeExporter::export_csv(&app.store, path),
                };
                app.set_export_result(result);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                    app.filename_input.remove(app.cursor_position);
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.filename_input.len() {
                    app.filename_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.filename_input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.len();
            }
            KeyCode::Char(c) if c.is_ascii() => {
                app.filename_input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }
}
