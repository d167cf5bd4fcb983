use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Stylize,
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{Block, Borders, Clear, LineGauge, Paragraph},
    Frame,
};
use yearprog_core::app::ProgressSnapshot;
use yearprog_core::ports::Clock;

use crate::app::App;

const PANEL_WIDTH: u16 = 34;
const PANEL_HEIGHT: u16 = 10;

pub fn render<C: Clock>(app: &App<C>, f: &mut Frame) {
    let snapshot = app.clock.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Progress
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_progress(app, &snapshot, f, chunks[0]);
    render_footer(app, f, chunks[1]);

    if app.debug_controls() {
        render_debug_panel(&snapshot, f, chunks[0]);
    }
}

fn render_progress<C: Clock>(app: &App<C>, snapshot: &ProgressSnapshot, f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(snapshot.percent_label()).bold(),
        Line::from(snapshot.year_label()).fg(Color::DarkGray),
    ];

    if app.settings.ui.show_breakdown || app.settings.ui.show_totals {
        lines.push(Line::from(""));
    }
    if app.settings.ui.show_breakdown {
        lines.push(Line::from(snapshot.breakdown().to_string()).fg(Color::Gray));
    }
    if app.settings.ui.show_totals {
        lines.push(Line::from(snapshot.totals_label()).fg(Color::DarkGray));
    }

    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let progress = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(progress, rows[1]);
}

fn render_footer<C: Clock>(app: &App<C>, f: &mut Frame, area: Rect) {
    let mut spans = vec![
        "Press ".into(),
        "q".fg(Color::Yellow).add_modifier(Modifier::BOLD),
        " to quit".into(),
    ];
    if app.debug_controls() {
        spans.push(", ".into());
        spans.push("←→ [] {}".fg(Color::Yellow).add_modifier(Modifier::BOLD));
        spans.push(" speed".into());
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));
    f.render_widget(footer, area);
}

/// Bottom-right overlay with the developer controls
fn render_debug_panel(snapshot: &ProgressSnapshot, f: &mut Frame, area: Rect) {
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    let panel = Rect::new(
        area.right().saturating_sub(width),
        area.bottom().saturating_sub(height),
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Debug Controls")
        .style(Style::default().fg(Color::White).bg(Color::Black));
    let inner = block.inner(panel);

    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // + 1 Day
            Constraint::Length(1), // + 1 Month
            Constraint::Length(1),
            Constraint::Length(1), // speed label
            Constraint::Length(1), // slider
            Constraint::Length(1),
            Constraint::Length(1), // reset
            Constraint::Min(0),
        ])
        .split(inner);

    let key = |k: &'static str| k.fg(Color::Yellow).add_modifier(Modifier::BOLD);

    f.render_widget(Paragraph::new(Line::from(vec![key("[d]"), " + 1 Day".into()])), rows[0]);
    f.render_widget(Paragraph::new(Line::from(vec![key("[m]"), " + 1 Month".into()])), rows[1]);
    f.render_widget(
        Paragraph::new(Line::from(snapshot.speed_label()).fg(Color::Gray)),
        rows[3],
    );

    let slider = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(snapshot.speed.ratio());
    f.render_widget(slider, rows[4]);

    f.render_widget(
        Paragraph::new(Line::from(vec![key("[r]"), " Reset".fg(Color::Red)])),
        rows[6],
    );
}
