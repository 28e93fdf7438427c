use crate::app::state::AppState;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 56);
    let mut lines: Vec<Line> = Vec::new();

    let initial = state
        .store
        .user_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    lines.push(Line::from(vec![
        Span::styled(format!(" ({}) ", initial), Theme::badge()),
        Span::raw(" "),
        Span::styled(state.store.user_name.clone(), Theme::title()),
    ]));
    lines.push(Line::from(Span::styled(
        format!("     {}", state.store.user_email),
        Theme::text_muted(),
    )));
    lines.push(Line::default());

    if !state.store.user_goal.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" Goal       ", Theme::text_secondary()),
            Span::styled(state.store.user_goal.clone(), Theme::text()),
        ]));
    }
    if !state.store.daily_time.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" Daily time ", Theme::text_secondary()),
            Span::styled(state.store.daily_time.clone(), Theme::text()),
        ]));
    }
    lines.push(Line::default());

    // Raw record counts on purpose; repeat completions count again here.
    lines.push(Line::from(Span::styled("Your stats", Theme::heading())));
    for (label, value) in [
        (
            "Lessons completed",
            state.store.completed_lessons.len().to_string(),
        ),
        (
            "Prompts discovered",
            state.store.discovered_prompts.len().to_string(),
        ),
        (
            "AI Bundle",
            if state.store.has_ai_bundle {
                "owned".to_string()
            } else {
                "not purchased".to_string()
            },
        ),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<20}", label), Theme::text_secondary()),
            Span::styled(value, Theme::text()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Subscription active — thanks for learning with us!",
        Theme::success_text(),
    )));

    frame.render_widget(Paragraph::new(lines), body);
    widgets::render_hints(
        frame,
        app_layout.footer,
        &[("r", "reset progress"), ("Tab", "switch tab"), ("q", "quit")],
    );
}
