//! Stateless text views
//!
//! Every function here reads already-computed view-model state and returns
//! the lines to print. Nothing in this module mutates state or does I/O.

pub mod about;
pub mod degrees;
pub mod employment;
pub mod faculty;
pub mod footer;
pub mod nav;
pub mod news;

use ischool_core::SectionState;

/// Rendering knobs shared by all views
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub width: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { width: 80 }
    }
}

/// Title with an underline of matching length
pub fn heading(title: &str, underline: char) -> Vec<String> {
    vec![
        title.to_string(),
        underline.to_string().repeat(title.chars().count()),
    ]
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let width = width.saturating_sub(indent.len()).max(10);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(format!("{indent}{current}"));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(format!("{indent}{current}"));
    }
    lines
}

/// Cut `s` to at most `max_chars`, marking the cut with `...`
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Boxed detail view drawn on top of a section.
/// Body lines wider than the box are wrapped; unbreakable words are truncated.
pub fn overlay(title: &str, body: &[String], opts: &ViewOptions) -> Vec<String> {
    let inner = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
        .min(opts.width.saturating_sub(4));
    let rule = format!("+{}+", "-".repeat(inner + 2));
    let title = truncate(title, inner);

    let mut lines = vec![rule.clone(), format!("| {title:<inner$} |"), rule.clone()];
    for line in body {
        if line.chars().count() <= inner {
            lines.push(format!("| {line:<inner$} |"));
            continue;
        }
        for piece in wrap(line, inner, "") {
            let piece = truncate(&piece, inner);
            lines.push(format!("| {piece:<inner$} |"));
        }
    }
    lines.push(rule);
    lines.push("  (dismiss to close)".to_string());
    lines
}

/// Placeholder or error block for a section that has no data to show yet.
/// Returns `None` once data is loaded.
pub fn status_block<T>(state: &SectionState<T>, loading: &str) -> Option<Vec<String>> {
    match state {
        SectionState::Loading => Some(vec![loading.to_string()]),
        SectionState::Errored(message) => Some(vec![format!("Error: {message}")]),
        SectionState::Loaded(_) => None,
    }
}
