//! Status Widget
//!
//! Lifecycle indicator and the centered placeholder shown while a screen
//! is loading or has failed.

use crate::state::Lifecycle;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Icon and label for one request lifecycle, e.g. `● Loading`
pub fn lifecycle_span(name: &str, lifecycle: Lifecycle) -> Span<'static> {
    let (icon, style) = match lifecycle {
        Lifecycle::Idle => (Icons::PENDING, Theme::pending()),
        Lifecycle::Pending => (Icons::ACTIVE, Theme::active()),
        Lifecycle::Success => (Icons::COMPLETE, Theme::complete()),
        Lifecycle::Failed => (Icons::ERROR, Theme::error()),
    };
    Span::styled(format!("{} {}: {}", icon, name, lifecycle.label()), style)
}

/// Boxed, centered message with an optional hint line underneath
pub fn render_message(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    // push the text towards the vertical middle
    for _ in 0..inner.height.saturating_sub(2) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(message.to_string(), style)));
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(hint.to_string(), Theme::text_dim())));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
