use crate::app::state::AppState;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Home tab: the learning path through the first course, one lesson per
/// row. Lessons unlock in order; everything past the first unfinished
/// lesson is shown locked.
pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 64);
    let mut lines: Vec<Line> = Vec::new();

    let greeting = if state.store.user_name.is_empty() {
        "Welcome back!".to_string()
    } else {
        format!("Welcome back, {}!", state.store.user_name)
    };
    lines.push(Line::from(Span::styled(greeting, Theme::title())));
    if !state.store.user_goal.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" Goal: {}", state.store.user_goal),
            Theme::text_muted(),
        )));
    }
    lines.push(Line::default());

    let Some(course) = state.content.courses.first() else {
        lines.push(Line::from(Span::styled(
            "No courses available.",
            Theme::text_muted(),
        )));
        frame.render_widget(Paragraph::new(lines), body);
        return;
    };

    lines.push(Line::from(Span::styled(
        format!("{} {}", course.icon, course.title),
        Theme::heading(),
    )));
    let ids = state.content.lesson_ids(course);
    lines.push(widgets::percent_line(
        state.store.lesson_progress(&course.id, &ids),
        body.width.min(40),
    ));
    lines.push(Line::default());

    let lessons: Vec<_> = course
        .levels
        .iter()
        .flat_map(|l| &l.lessons)
        .collect();
    let next_index = lessons
        .iter()
        .position(|l| !state.store.is_lesson_completed(&l.id))
        .unwrap_or(lessons.len());

    for (i, lesson) in lessons.iter().enumerate() {
        let completed = state.store.is_lesson_completed(&lesson.id);
        let selected = i == state.cursors.home;
        let marker = if selected { " ❯ " } else { "   " };
        let (icon, style) = if completed {
            ("✓", Theme::completed())
        } else if i <= next_index {
            ("○", if selected {
                Theme::option_selected()
            } else {
                Theme::option_normal()
            })
        } else {
            ("🔒", Theme::locked())
        };
        lines.push(Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(format!("{} {}", icon, lesson.title), style),
        ]));
        if selected {
            lines.push(Line::from(Span::styled(
                format!("       {}", lesson.subtitle),
                Theme::text_muted(),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), body);
    widgets::render_hints(
        frame,
        app_layout.footer,
        &[
            ("↑↓", "lesson"),
            ("Enter", "open"),
            ("Tab", "switch tab"),
            ("q", "quit"),
        ],
    );
}
