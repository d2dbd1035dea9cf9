//! Display helpers shared by the TUI and the command line output

use chrono::{DateTime, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Posting age relative to `now`: "1 day ago", "3 days ago", "2 weeks ago",
/// then a plain date once a month has passed.
pub fn relative_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - created).num_milliseconds().abs();
    // partial days round up
    let days = (elapsed_ms + DAY_MS - 1) / DAY_MS;

    match days {
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => {
            let weeks = d / 7;
            format!("{} week{} ago", weeks, if weeks > 1 { "s" } else { "" })
        }
        _ => short_date(created),
    }
}

/// `01/05/2025`
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// `January 5, 2025`
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn salary_label(salary: &str) -> String {
    format!("{} Lpa", salary.trim())
}

/// Split a comma separated skills string into tags
pub fn skill_tags(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// First three tags plus a "+N more" marker for the rest
pub fn skill_preview(skills: &str) -> (Vec<&str>, Option<String>) {
    let tags = skill_tags(skills);
    let rest = tags.len().saturating_sub(3);
    let shown = tags.into_iter().take(3).collect();
    (shown, (rest > 0).then(|| format!("+{} more", rest)))
}

/// Shorten `text` to at most `max` characters, marking the cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
