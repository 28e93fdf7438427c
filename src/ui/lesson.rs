use crate::app::state::{AppState, LessonPhase};
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState, lesson_id: &str) {
    let body = layout::centered_column(app_layout.body, 72);
    let Some(lesson) = state.content.find_lesson(lesson_id) else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Lesson not found.",
                Theme::error_text(),
            ))),
            body,
        );
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("← ", Theme::text_muted()),
            Span::styled(lesson.title.clone(), Theme::title()),
        ])),
        app_layout.header,
    );

    let width = body.width.saturating_sub(2) as usize;
    match state.lesson.phase {
        LessonPhase::Read => render_read(frame, body, state, lesson, width),
        LessonPhase::Exercise => render_exercise(frame, body, state, lesson, width),
        LessonPhase::Result => render_result(frame, body, state, lesson, width),
        LessonPhase::Congratulations => render_congratulations(frame, body, lesson, width),
    }

    let hints: &[(&str, &str)] = match state.lesson.phase {
        LessonPhase::Read => &[("↑↓", "scroll"), ("Enter", "continue"), ("Esc", "back")],
        LessonPhase::Exercise => &[("↑↓", "answer"), ("Enter", "check"), ("Esc", "back")],
        LessonPhase::Result => &[("Enter", "continue"), ("Esc", "back")],
        LessonPhase::Congratulations => &[("Enter", "finish")],
    };
    widgets::render_hints(frame, app_layout.footer, hints);
}

fn render_read(
    frame: &mut Frame,
    body: Rect,
    state: &AppState,
    lesson: &crate::content::Lesson,
    width: usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        lesson.subtitle.clone(),
        Theme::text_secondary(),
    )));
    lines.push(Line::default());
    for l in widgets::wrap_text(&lesson.content, width) {
        lines.push(Line::from(Span::styled(l, Theme::text())));
    }
    lines.push(Line::default());
    let label = if lesson.exercises.is_empty() {
        "Complete lesson"
    } else {
        "Try it yourself"
    };
    lines.push(widgets::button_line(label, true));

    frame.render_widget(
        Paragraph::new(lines).scroll((state.lesson.scroll, 0)),
        body,
    );
}

fn render_exercise(
    frame: &mut Frame,
    body: Rect,
    state: &AppState,
    lesson: &crate::content::Lesson,
    width: usize,
) {
    let Some(exercise) = lesson.exercises.first() else {
        return;
    };
    let mut lines: Vec<Line> = Vec::new();

    for l in widgets::wrap_text(&exercise.scenario, width) {
        lines.push(Line::from(Span::styled(l, Theme::text_secondary())));
    }
    lines.push(Line::default());

    // The prompt under construction, with the blank filled by the
    // highlighted answer.
    let (before, after) = exercise.template_parts();
    let filler = state
        .lesson
        .selected
        .and_then(|i| state.lesson.answer_options.get(i))
        .map(|s| s.as_str())
        .unwrap_or("______");
    let assembled = format!("{}[{}]{}", before, filler, after);
    for l in widgets::wrap_text(&assembled, width) {
        lines.push(Line::from(Span::styled(l, Theme::input_text())));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Pick the missing piece:",
        Theme::heading(),
    )));
    for (i, option) in state.lesson.answer_options.iter().enumerate() {
        let selected = state.lesson.selected == Some(i);
        lines.push(widgets::option_row(None, option, selected, None));
    }

    frame.render_widget(Paragraph::new(lines), body);
}

fn render_result(
    frame: &mut Frame,
    body: Rect,
    state: &AppState,
    lesson: &crate::content::Lesson,
    width: usize,
) {
    let Some(exercise) = lesson.exercises.first() else {
        return;
    };
    let mut lines: Vec<Line> = Vec::new();

    if state.lesson.is_correct {
        lines.push(Line::from(Span::styled(
            " ✓ Correct!",
            Theme::success_text(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(" ✗ Not quite — the answer was \"{}\"", exercise.correct_answer),
            Theme::error_text(),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Here's what the AI replied:",
        Theme::heading(),
    )));
    lines.push(Line::default());
    for l in widgets::wrap_text(&exercise.ai_response, width) {
        lines.push(Line::from(Span::styled(format!(" {}", l), Theme::text())));
    }
    lines.push(Line::default());
    lines.push(widgets::button_line("Continue", true));

    frame.render_widget(
        Paragraph::new(lines).scroll((state.lesson.scroll, 0)),
        body,
    );
}

fn render_congratulations(
    frame: &mut Frame,
    body: Rect,
    lesson: &crate::content::Lesson,
    width: usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "🎉 Lesson complete!",
        Theme::title(),
    )));
    lines.push(Line::default());

    if let Some(exercise) = lesson.exercises.first() {
        lines.push(Line::from(Span::styled(
            "New prompt unlocked:",
            Theme::text_secondary(),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!(" ✨ {}", exercise.prompt.name), Theme::option_checked()),
            Span::styled(format!("  [{}]", exercise.prompt.ai_tool), Theme::badge()),
        ]));
        lines.push(Line::default());
        for l in widgets::wrap_text(&exercise.prompt.template, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("   {}", l),
                Theme::text_muted(),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Find it any time in the Prompts tab.",
            Theme::text_secondary(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Nice work — on to the next one.",
            Theme::text(),
        )));
    }
    lines.push(Line::default());
    lines.push(widgets::button_line("Back to course", true));

    frame.render_widget(Paragraph::new(lines), body);
}
