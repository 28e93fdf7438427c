use crate::app::state::AppState;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState, course_id: &str) {
    let body = layout::centered_column(app_layout.body, 64);
    let Some(course) = state.content.find_course(course_id) else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Course not found.",
                Theme::error_text(),
            ))),
            body,
        );
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("← ", Theme::text_muted()),
            Span::styled(format!("{} {}", course.icon, course.title), Theme::title()),
        ])),
        app_layout.header,
    );

    let mut lines: Vec<Line> = Vec::new();
    let ids = state.content.lesson_ids(course);
    lines.push(widgets::percent_line(
        state.store.lesson_progress(&course.id, &ids),
        body.width.min(44),
    ));
    lines.push(Line::default());

    let mut index = 0usize;
    for level in &course.levels {
        lines.push(Line::from(Span::styled(
            level.title.clone(),
            Theme::heading(),
        )));
        lines.push(Line::from(Span::styled(
            format!(" {}", level.subtitle),
            Theme::text_muted(),
        )));
        for lesson in &level.lessons {
            let completed = state.store.is_lesson_completed(&lesson.id);
            let selected = index == state.cursors.course_lessons;
            let marker = if selected { " ❯ " } else { "   " };
            let (icon, style) = if completed {
                ("✓", Theme::completed())
            } else if selected {
                ("○", Theme::option_selected())
            } else {
                ("○", Theme::option_normal())
            };
            lines.push(Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(format!("{} {}", icon, lesson.title), style),
                Span::styled(format!("  {}", lesson.subtitle), Theme::text_muted()),
            ]));
            index += 1;
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), body);
    widgets::render_hints(
        frame,
        app_layout.footer,
        &[("↑↓", "lesson"), ("Enter", "open"), ("Esc", "back")],
    );
}
