use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use stopwatch_core::{hms_cs, LapStats};

use crate::app::{App, TargetField};

/// Render one frame: time readout, target line, split list, statistics,
/// status, and the key footer.
pub fn draw(frame: &mut Frame, app: &App) {
    let [time_area, target_area, splits_area, stats_area, status_area, footer_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    draw_time(frame, time_area, app);
    draw_target(frame, target_area, app);
    draw_splits(frame, splits_area, app);
    draw_stats(frame, stats_area, app);
    draw_status(frame, status_area, app);
    draw_footer(frame, footer_area, app);
}

fn draw_time(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.watch.is_running() {
        Style::new().green().bold()
    } else {
        Style::new().bold()
    };
    let readout = Line::styled(hms_cs(app.watch.elapsed_ms()), style);
    let block = Block::bordered().title("LAPWATCH");
    frame.render_widget(Paragraph::new(readout).centered().block(block), area);
}

fn draw_target(frame: &mut Frame, area: Rect, app: &App) {
    let field_style = |field: TargetField| {
        if app.editing == Some(field) {
            Style::new().reversed()
        } else {
            Style::new()
        }
    };
    let spans = vec![
        Span::raw(" Target "),
        Span::styled(app.target.hours.clone(), field_style(TargetField::Hours)),
        Span::raw(":"),
        Span::styled(app.target.minutes.clone(), field_style(TargetField::Minutes)),
        Span::raw(":"),
        Span::styled(app.target.seconds.clone(), field_style(TargetField::Seconds)),
    ];
    let mut line = Line::from(spans);
    if app.editing.is_none() && app.watch.target_ms() == 0 {
        line = line.dim();
    }
    frame.render_widget(line, area);
}

fn draw_splits(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title("Splits");
    // Newest first, clipped to what fits inside the border.
    let visible = area.height.saturating_sub(2) as usize;
    let splits = app.watch.splits();
    let lines: Vec<Line> = if splits.is_empty() {
        vec![Line::raw("No splits yet").dim()]
    } else {
        splits
            .iter()
            .rev()
            .take(visible)
            .map(|s| Line::raw(format!("#{:<3} {}   lap {}", s.id, s.total_label, s.lap_label)))
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let line = match LapStats::from_splits(app.watch.splits()) {
        Some(stats) => Line::raw(format!(
            " Avg {}   Best {}   Worst {}",
            hms_cs(stats.average_ms),
            hms_cs(stats.best_ms),
            hms_cs(stats.worst_ms)
        )),
        None => Line::raw(" No lap statistics yet").dim(),
    };
    frame.render_widget(line, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = &app.status {
        let line = Line::styled(format!(" {status}"), Style::new().yellow());
        frame.render_widget(line, area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let keys = if app.editing.is_some() {
        " 0-9 set digit   Tab/arrows move   Enter/Esc done"
    } else {
        " Space start/stop   s split   r reset   t target   e export   q quit"
    };
    frame.render_widget(Line::raw(keys).dim(), area);
}
