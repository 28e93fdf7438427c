//! Small shared render helpers: progress bars, option lists, buttons.

use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// A `[████░░░░] 7/20` style progress line.
pub fn progress_line(current: u32, total: u32, width: u16) -> Line<'static> {
    let bar_width = width.saturating_sub(10).max(4) as u32;
    let filled = if total > 0 {
        (current.min(total) * bar_width) / total
    } else {
        0
    };
    Line::from(vec![
        Span::styled("█".repeat(filled as usize), Theme::progress_filled()),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled) as usize),
            Theme::progress_empty(),
        ),
        Span::styled(format!(" {}/{}", current, total), Theme::text_muted()),
    ])
}

/// A percentage bar like `▰▰▰▰▱▱▱▱ 50%`.
pub fn percent_line(percent: u8, width: u16) -> Line<'static> {
    let bar_width = width.saturating_sub(7).max(4) as u32;
    let filled = (percent.min(100) as u32 * bar_width) / 100;
    Line::from(vec![
        Span::styled("▰".repeat(filled as usize), Theme::progress_filled()),
        Span::styled(
            "▱".repeat(bar_width.saturating_sub(filled) as usize),
            Theme::progress_empty(),
        ),
        Span::styled(format!(" {:>3}%", percent), Theme::text()),
    ])
}

/// One selectable option row, with an optional multi-select checkbox.
pub fn option_row(
    emoji: Option<&str>,
    text: &str,
    selected: bool,
    checked: Option<bool>,
) -> Line<'static> {
    let mut spans = Vec::new();
    spans.push(Span::raw(if selected { " ❯ " } else { "   " }));
    if let Some(checked) = checked {
        spans.push(Span::styled(
            if checked { "[x] " } else { "[ ] " },
            if checked {
                Theme::option_checked()
            } else {
                Theme::text_muted()
            },
        ));
    }
    if let Some(emoji) = emoji {
        spans.push(Span::raw(format!("{} ", emoji)));
    }
    let style = if selected {
        Theme::option_selected()
    } else {
        Theme::option_normal()
    };
    spans.push(Span::styled(text.to_string(), style));
    Line::from(spans)
}

/// A primary-button line rendered as a filled chip.
pub fn button_line(label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Theme::button()
    } else {
        Theme::button_disabled()
    };
    Line::from(Span::styled(format!("  {}  ", label), style))
}

/// Render a footer hint row: alternating key / description spans.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(format!(" {}  ", desc), Theme::text_secondary()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Word-wrap `text` to `width` columns. Used where a `Paragraph` with
/// trailing layout is not enough (e.g. to know the height in advance).
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width_and_newlines() {
        let lines = wrap_text("one two three\n\nfour", 9);
        assert_eq!(lines, vec!["one two", "three", "", "four"]);
    }

    #[test]
    fn percent_line_is_full_at_100() {
        let line = percent_line(100, 20);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("100%"));
        assert!(!text.contains('▱'));
    }
}
