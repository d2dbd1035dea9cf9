//! Job List Widget
//!
//! Cards for the visible subset of the listing.

use crate::format::{relative_age, salary_label, skill_preview};
use crate::models::Job;
use crate::state::{Lifecycle, LISTING_ERROR};
use crate::tui::app::{App, ListingFocus};
use crate::tui::theme::{company_icon, Icons, Theme};
use crate::tui::widgets::render_message;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render_job_list(frame: &mut Frame, area: Rect, app: &App) {
    match app.listing.lifecycle() {
        Lifecycle::Idle | Lifecycle::Pending => {
            render_message(frame, area, "Jobs", "Loading jobs...", Theme::active(), None);
            return;
        }
        Lifecycle::Failed => {
            render_message(
                frame,
                area,
                "Jobs",
                LISTING_ERROR,
                Theme::error(),
                Some("Press r to try again"),
            );
            return;
        }
        Lifecycle::Success => {}
    }

    let visible = app.listing.visible();
    if visible.is_empty() {
        render_message(
            frame,
            area,
            "Jobs",
            "No jobs found matching your criteria",
            Theme::text_secondary(),
            Some("Try adjusting your search or filters"),
        );
        return;
    }

    let title = format!(" {} {} found ", visible.len(), if visible.len() == 1 { "job" } else { "jobs" });
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if app.focus == ListingFocus::Jobs {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let width = block.inner(area).width as usize;
    let items: Vec<ListItem> = visible.iter().map(|job| job_card(job, width)).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::highlight())
        .highlight_symbol(Icons::SELECTED);

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn job_card(job: &Job, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", company_icon(&job.company))),
        Span::styled(job.title.clone(), Theme::title()),
        Span::raw("  "),
        Span::styled(format!(" {} ", job.job_type), Theme::badge_primary()),
    ])];

    let mut meta = vec![
        Span::styled(job.company.clone(), Theme::text()),
        Span::styled(format!("  {} {}", Icons::LOCATION, job.location), Theme::text_secondary()),
    ];
    if let Some(salary) = job.salary.as_deref().filter(|s| !s.is_empty()) {
        meta.push(Span::styled(
            format!("  {} {}", Icons::SALARY, salary_label(salary)),
            Theme::salary(),
        ));
    }
    lines.push(Line::from(meta));

    if let Some(skills) = job.skills.as_deref() {
        let (shown, more) = skill_preview(skills);
        if !shown.is_empty() {
            let mut spans = vec![Span::styled("Skills: ", Theme::text_dim())];
            for tag in shown {
                spans.push(Span::styled(format!(" {} ", tag), Theme::tag()));
                spans.push(Span::raw(" "));
            }
            if let Some(more) = more {
                spans.push(Span::styled(more, Theme::text_secondary()));
            }
            lines.push(Line::from(spans));
        }
    }

    if let Some(created) = job.created_at {
        lines.push(Line::from(Span::styled(
            format!("Posted {}", relative_age(created, Utc::now())),
            Theme::text_dim(),
        )));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(width.saturating_sub(2)),
        Theme::border(),
    )));

    ListItem::new(lines)
}
