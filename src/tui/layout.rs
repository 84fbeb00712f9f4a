use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::ColorConfig;
use crate::presenter::EarthquakeRow;
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Earthquake list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_list(frame, app, chunks[0], colors);
    render_status_bar(frame, app, chunks[1], colors);
}

fn render_list(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let TuiApp {
        earthquakes,
        rows,
        list_state,
        index,
        ..
    } = app;

    let items: Vec<ListItem> = earthquakes
        .iter()
        .enumerate()
        .map(|(position, quake)| ListItem::new(row_line(rows.row(position, quake), colors)))
        .collect();

    let title = format!(
        " Earthquakes ({}) [{}/{}] ",
        earthquakes.len(),
        (*index + 1).min(earthquakes.len()),
        earthquakes.len()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

fn row_line(row: &EarthquakeRow, colors: &ColorConfig) -> Line<'static> {
    let badge = Style::default()
        .fg(Color::White)
        .bg(colors.magnitude_color(row.bucket))
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(format!(" {} ", row.magnitude), badge),
        Span::raw("  "),
        Span::styled(row.offset.clone(), Style::default().fg(colors.offset)),
        Span::raw(" "),
        Span::styled(
            row.primary_location.clone(),
            Style::default()
                .fg(colors.location)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(row.date.clone(), Style::default().fg(colors.date)),
        Span::raw("  "),
        Span::styled(row.time.clone(), Style::default().fg(colors.time)),
    ])
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.is_loading {
        "Fetching earthquakes...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        "j/k:Nav  n/p:Page  Enter/o:Open  R:Refresh  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
