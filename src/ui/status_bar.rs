use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if !state.store.user_name.is_empty() {
        parts.push(Span::styled(
            format!(" [{}] ", state.store.user_name),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", status_line(state)),
        Theme::status_bar(),
    ));

    let screen_name = match &state.screen {
        Screen::Onboarding => "ONBOARDING",
        Screen::Results => "RESULTS",
        Screen::Paywall => "PAYWALL",
        Screen::Signup => "SIGNUP",
        Screen::Upsell => "OFFER",
        Screen::Main(tab) => tab.title(),
        Screen::CourseDetail { .. } => "COURSE",
        Screen::Lesson { .. } => "LESSON",
    };
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + screen_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", screen_name.to_uppercase()),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn status_line(state: &AppState) -> String {
    let unique: std::collections::HashSet<&str> = state
        .store
        .completed_lessons
        .iter()
        .map(|c| c.lesson_id.as_str())
        .collect();
    let total: usize = state
        .content
        .courses
        .iter()
        .flat_map(|c| &c.levels)
        .map(|l| l.lessons.len())
        .sum();
    let mut s = format!("Lessons: {}/{}", unique.len(), total);
    if state.store.has_ai_bundle {
        s.push_str(" | AI Bundle");
    }
    s
}
