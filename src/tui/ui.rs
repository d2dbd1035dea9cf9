//! UI Rendering
//!
//! Main layout and per-route dispatch.

use crate::filter::{JOB_TYPES, LOCATIONS};
use crate::navigation::Route;
use crate::tui::app::{App, ListingFocus};
use crate::tui::theme::Theme;
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Route body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    match &app.route {
        Route::Listing => render_listing(frame, chunks[1], app),
        Route::Job(_) => widgets::render_job_detail(frame, chunks[1], app),
        Route::CreateJob => widgets::render_job_form(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    if app.show_help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let account = match &app.account {
        Some(email) => Span::styled(format!("  ● {}", email), Theme::success()),
        None => Span::styled("  ○ signed out", Theme::text_dim()),
    };

    let title_text = vec![Line::from(vec![
        Span::raw("💼 "),
        Span::styled("Job Board", Theme::title()),
        Span::styled(format!(" · {}", app.route.title()), Theme::text_secondary()),
        account,
    ])];

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .style(Style::default()),
        );

    frame.render_widget(title, area);
}

fn render_listing(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filter_bar(frame, chunks[0], app);
    widgets::render_job_list(frame, chunks[1], app);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let search_block = focus_block(" Search ", app.focus == ListingFocus::Search);
    let inner = search_block.inner(columns[0]);
    frame.render_widget(search_block, columns[0]);
    frame.render_widget(&app.search, inner);

    render_selector(
        frame,
        columns[1],
        " Location ",
        LOCATIONS[app.location_index % LOCATIONS.len()],
        app.focus == ListingFocus::Location,
    );
    render_selector(
        frame,
        columns[2],
        " Job Type ",
        JOB_TYPES[app.job_type_index % JOB_TYPES.len()],
        app.focus == ListingFocus::JobType,
    );
}

fn render_selector(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let style = if focused { Theme::selected() } else { Theme::text() };
    let paragraph = Paragraph::new(Line::from(Span::styled(format!("◀ {} ▶", value), style)))
        .alignment(Alignment::Center)
        .block(focus_block(title, focused));
    frame.render_widget(paragraph, area);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = match &app.route {
        Route::Listing => widgets::lifecycle_span("Jobs", app.listing.lifecycle()),
        Route::Job(_) => widgets::lifecycle_span("Job", app.detail.lifecycle()),
        Route::CreateJob => widgets::lifecycle_span("Post", app.form.lifecycle()),
    };

    let shortcuts: Vec<(&str, &str)> = match &app.route {
        Route::Listing => vec![
            ("[Enter]", " Open "),
            ("[/]", " Search "),
            ("[Tab]", " Filters "),
            ("[n]", " Post job "),
            ("[r]", " Reload "),
        ],
        Route::Job(_) => vec![("[Esc]", " Back "), ("[↑/↓]", " Scroll ")],
        Route::CreateJob => vec![("[Enter]", " Submit "), ("[Esc]", " Back ")],
    };

    let mut spans = vec![status, Span::raw(" │ ")];
    for (key, desc) in shortcuts {
        spans.push(Span::styled(key, Theme::shortcut_key()));
        spans.push(Span::styled(desc, Theme::shortcut_desc()));
    }
    spans.push(Span::styled("[F1]", Theme::shortcut_key()));
    spans.push(Span::styled(" Help", Theme::shortcut_desc()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let rows = [
        ("Enter        ", "Open job / Submit form"),
        ("Tab/Shift+Tab", "Move between filters or fields"),
        ("←/→          ", "Change location, job type"),
        ("↑/↓  j/k     ", "Move selection / Scroll"),
        ("/            ", "Search jobs"),
        ("n  Ctrl+N    ", "Post a new job"),
        ("r  F5        ", "Reload"),
        ("Ctrl+R       ", "Reset the form"),
        ("Esc          ", "Back / Close"),
        ("Ctrl+Q  q    ", "Quit"),
        ("Ctrl+C       ", "Force quit"),
    ];

    let mut help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
    ];
    for (key, desc) in rows {
        help_lines.push(Line::from(vec![
            Span::styled(key, Theme::shortcut_key()),
            Span::raw(" "),
            Span::styled(desc, Theme::text()),
        ]));
    }
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled("Press any key to close", Theme::text_dim())));

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 60, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 30);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }
}
