//! Job Detail Widget

use crate::format::{long_date, salary_label, skill_tags};
use crate::models::Job;
use crate::state::DetailView;
use crate::tui::app::App;
use crate::tui::theme::{company_icon, Icons, Theme};
use crate::tui::widgets::render_message;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_job_detail(frame: &mut Frame, area: Rect, app: &App) {
    match app.detail.view() {
        DetailView::Idle => render_message(
            frame,
            area,
            "Job Details",
            "No job selected",
            Theme::text_secondary(),
            Some("[Esc] Back to Jobs"),
        ),
        DetailView::Loading => render_message(
            frame,
            area,
            "Job Details",
            "Loading job details...",
            Theme::active(),
            None,
        ),
        DetailView::Failed(message) => render_message(
            frame,
            area,
            "Error",
            message,
            Theme::error(),
            Some("[Esc] Back to Jobs"),
        ),
        DetailView::NotFound => render_message(
            frame,
            area,
            "Job Not Found",
            "The job you're looking for doesn't exist.",
            Theme::warning(),
            Some("[Esc] Back to Jobs"),
        ),
        DetailView::Found(job) => render_found(frame, area, job, app.detail_scroll),
    }
}

fn render_found(frame: &mut Frame, area: Rect, job: &Job, scroll: u16) {
    let block = Block::default()
        .title(" Job Details ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", company_icon(&job.company))),
            Span::styled(job.title.clone(), Theme::title()),
        ]),
        Line::from(Span::styled(job.company.clone(), Theme::heading())),
        Line::from(vec![
            Span::styled(format!("{} {}", Icons::LOCATION, job.location), Theme::text_secondary()),
            Span::raw("  "),
            Span::styled(format!(" {} ", job.job_type), Theme::badge_primary()),
        ]),
        Line::from(""),
    ];

    lines.push(section("Job Description"));
    for paragraph in job.description.lines() {
        lines.push(Line::from(Span::styled(paragraph.to_string(), Theme::text())));
    }
    lines.push(Line::from(""));

    if let Some(skills) = job.skills.as_deref() {
        let tags = skill_tags(skills);
        if !tags.is_empty() {
            lines.push(section("Required Skills"));
            let mut spans = Vec::new();
            for tag in tags {
                spans.push(Span::styled(format!(" {} ", tag), Theme::tag()));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
    }

    if let Some(education) = job.education.as_deref().filter(|e| !e.is_empty()) {
        lines.push(section("Education Requirements"));
        lines.push(Line::from(Span::styled(education.to_string(), Theme::text())));
        lines.push(Line::from(""));
    }

    lines.push(section("Job Information"));
    if let Some(created) = job.created_at {
        lines.push(meta_line("Posted Date", long_date(created)));
    }
    lines.push(meta_line("Job Type", job.job_type.to_string()));
    lines.push(meta_line("Location", job.location.clone()));
    if let Some(salary) = job.salary.as_deref().filter(|s| !s.is_empty()) {
        lines.push(meta_line("Salary", salary_label(salary)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), Theme::heading()))
}

fn meta_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12} ", label), Theme::text_secondary()),
        Span::styled(value, Theme::text()),
    ])
}
