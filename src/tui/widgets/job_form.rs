//! Job Form Widget
//!
//! The posting form: one row per field with its inline error, the success
//! banner and the submit error.

use crate::state::{FormField, Lifecycle};
use crate::tui::app::App;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_job_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Post a New Job ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Banner / submit error
            Constraint::Min(10),   // Fields
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    render_notice(frame, chunks[0], app);
    render_fields(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let line = if form.banner_visible() {
        Line::from(Span::styled(
            format!(" {} Job posted successfully! ", Icons::COMPLETE),
            Theme::badge_success(),
        ))
    } else if let Some(error) = form.submit_error() {
        Line::from(Span::styled(format!("{} {}", Icons::ERROR, error), Theme::error()))
    } else {
        Line::from(Span::styled(
            "Fill in the details below to post a new job opportunity",
            Theme::text_secondary(),
        ))
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let current = app.current_field();
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = field == current;
        let label_style = if focused { Theme::selected() } else { Theme::text_secondary() };
        let marker = if focused { Icons::SELECTED } else { " " };

        let value = form.value(field);
        let value_span = if field == FormField::JobType || (field.is_choice() && !value.is_empty()) {
            Span::styled(format!("◀ {} ▶", value), Theme::text())
        } else if field.is_choice() {
            Span::styled(format!("◀ {} ▶", placeholder(field)), Theme::placeholder())
        } else if value.is_empty() && !focused {
            Span::styled(placeholder(field), Theme::placeholder())
        } else {
            Span::styled(value.to_string(), Theme::text())
        };

        let mut spans = vec![
            Span::styled(format!("{} {:<20}", marker, field.label()), label_style),
            value_span,
        ];
        if focused && !field.is_choice() {
            spans.push(Span::styled(Icons::CURSOR, Theme::active()));
        }
        lines.push(Line::from(spans));

        if let Some(error) = form.field_error(field) {
            lines.push(Line::from(Span::styled(format!("{:<23}{}", "", error), Theme::error())));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let submit_label = if app.form.lifecycle() == Lifecycle::Pending {
        " Posting Job... "
    } else {
        " Post Job "
    };

    let line = Line::from(vec![
        Span::styled("[Enter]", Theme::shortcut_key()),
        Span::styled(submit_label, Theme::shortcut_desc()),
        Span::styled("[Tab]", Theme::shortcut_key()),
        Span::styled(" Next field ", Theme::shortcut_desc()),
        Span::styled("[←/→]", Theme::shortcut_key()),
        Span::styled(" Choose ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+R]", Theme::shortcut_key()),
        Span::styled(" Reset ", Theme::shortcut_desc()),
        Span::styled("[Esc]", Theme::shortcut_key()),
        Span::styled(" Back", Theme::shortcut_desc()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Title => "e.g., Senior React Developer",
        FormField::Company => "e.g., TechCorp Inc.",
        FormField::Location => "e.g., Gurugram, Noida",
        FormField::Salary => "e.g., 6 - 7 lpa",
        FormField::Education => "Select education level",
        FormField::Description => "Describe the role and responsibilities",
        FormField::Skills => "e.g., React, JavaScript, Node.js, AWS (comma separated)",
        FormField::JobType => "",
    }
}
