use crate::application::{App, AppMode};
use crate::domain::{Decision, MapSnapshot, Outcome, Restaurant, decide};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Clear, List, ListItem, Paragraph,
    },
    Frame,
};
use std::time::Instant;

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 8;

pub fn render_ui(f: &mut Frame, app: &App) {
    let now = Instant::now();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CARD_HEIGHT + 4), Constraint::Min(6)])
        .split(body[0]);

    render_card(f, app, left[0], now);
    render_map(f, &app.map_snapshot(), left[1]);
    render_outcomes(f, app, body[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut text = format!(
        "SnackSwipe Pro | Energy: {} | Cards left: {}",
        app.store.energy(),
        app.store.deck().len()
    );
    if let Some(decision) = app.gesture.last_decision() {
        let label = decision.outcome().map_or("Cancelled", Outcome::heading);
        text.push_str(&format!(" | Last: {}", label));
    }
    let header = Paragraph::new(text).style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn decision_color(decision: Decision) -> Color {
    match decision {
        Decision::Like => Color::Green,
        Decision::Reject => Color::Red,
        Decision::Wishlist => Color::Yellow,
        Decision::Skip => Color::Gray,
        Decision::Cancel => Color::White,
    }
}

fn render_card(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let Some(item) = app.displayed_card() else {
        let empty = Paragraph::new("Deck Finished")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Deck"));
        f.render_widget(empty, area);
        return;
    };

    let offset = app.card_offset(now);
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let shift_x = (offset.dx / app.config.cell_width_units).round() as i32;
    let shift_y = (offset.dy / app.config.cell_height_units).round() as i32;
    let x = i32::from(area.x) + i32::from(area.width.saturating_sub(width) / 2) + shift_x;
    let y = i32::from(area.y) + i32::from(area.height.saturating_sub(height) / 2) + shift_y;

    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    let card_area = Rect::new(x, y, width, height).intersection(area);
    if card_area.is_empty() {
        return;
    }

    let preview = if let Some(outcome) = app.departing_outcome() {
        outcome.into()
    } else if app.gesture.is_dragging() {
        decide(offset, app.gesture.thresholds())
    } else {
        Decision::Cancel
    };
    let tilt = format!(" {:+.1}° ", app.card_rotation(now));

    let card = Paragraph::new(card_lines(item))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", item.name))
                .title_top(Line::from(tilt).right_aligned())
                .border_style(Style::default().fg(decision_color(preview))),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(card, card_area);
}

fn card_lines(item: &Restaurant) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Cuisine: {}", item.cuisine)),
        Line::from(format!("Price: ₹{}", item.price)),
        Line::from(format!("Tags: {}", item.tags.join(", "))),
        Line::from(""),
        Line::styled(
            "→ Like | ← Reject | ↑ Wishlist | ↓ Skip",
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn render_map(f: &mut Frame, snapshot: &MapSnapshot, area: Rect) {
    let (x_bounds, y_bounds) = snapshot.bounds(0.002);
    let inactive: Vec<(f64, f64)> = snapshot
        .markers
        .iter()
        .filter(|m| !m.active)
        .map(|m| (m.position.lng, m.position.lat))
        .collect();
    let active: Vec<(f64, f64)> = snapshot
        .active_marker()
        .map(|m| vec![(m.position.lng, m.position.lat)])
        .unwrap_or_default();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Map"))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &inactive,
                color: Color::Blue,
            });
            ctx.draw(&Points {
                coords: &active,
                color: Color::Red,
            });
            for marker in &snapshot.markers {
                let style = if marker.active {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::LightBlue)
                };
                let label = Line::styled(marker.name, style);
                ctx.print(marker.position.lng, marker.position.lat, label);
            }
        });
    f.render_widget(canvas, area);
}

fn outcome_style(outcome: Outcome) -> Style {
    Style::default().fg(decision_color(outcome.into()))
}

fn render_outcomes(f: &mut Frame, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (outcome, section) in Outcome::ALL.into_iter().zip(sections.iter()) {
        let items = app.store.collection(outcome);
        let list = List::new(items.iter().map(|r| ListItem::new(r.summary())))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} ({})", outcome.heading(), items.len()))
                    .border_style(outcome_style(outcome)),
            )
            .style(Style::default().fg(Color::Gray));
        f.render_widget(list, *section);
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Drag or ←→↑↓ to swipe | y: copy | Ctrl+E: export CSV | m: export map | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::ExportCsv => format!("Export CSV as: {} (Enter to export, Esc to cancel)", app.filename_input),
        AppMode::ExportMap => format!("Export map as: {} (Enter to export, Esc to cancel)", app.filename_input),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
            AppMode::ExportMap => Style::default().fg(Color::Yellow),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("SnackSwipe Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"SNACKSWIPE CONTROLS

=== SWIPING ===
Drag the card with the mouse and let go:
  right         Like
  left          Reject
  up            Wishlist
  down          Skip
A short drag springs back without spending energy.
Sideways drags win over vertical ones when both are long enough.

Arrow keys (or l/h/k/j) swipe right/left/up/down directly.

=== ENERGY ===
Every swipe costs one energy. At zero the deck stops moving.

=== MAP ===
Every listing is plotted; the current card is red.

=== EXPORT ===
Ctrl+E          Export liked/wishlist/rejected/skipped lists as CSV
m               Export an HTML map of all listings
y               Copy the current card to the clipboard

=== OTHER ===
F1 or ?         Show this help (scroll with ↑↓, PgUp/PgDn, Home)
Esc             Clear the status message
q               Quit

Config is read from snackswipe.json in the working directory, logs go
to snackswipe.log (filter with RUST_LOG)."#
}
