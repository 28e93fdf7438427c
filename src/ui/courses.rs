use crate::app::state::AppState;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 64);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("All courses", Theme::title())));
    lines.push(Line::default());

    for (i, course) in state.content.courses.iter().enumerate() {
        let selected = i == state.cursors.courses;
        let marker = if selected { " ❯ " } else { "   " };
        let style = if selected {
            Theme::option_selected()
        } else {
            Theme::option_normal()
        };
        lines.push(Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(format!("{} {}", course.icon, course.title), style),
        ]));
        let ids = state.content.lesson_ids(course);
        let mut progress = widgets::percent_line(
            state.store.lesson_progress(&course.id, &ids),
            body.width.min(44),
        );
        progress.spans.insert(0, Span::raw("   "));
        lines.push(progress);
        if selected {
            for l in widgets::wrap_text(&course.description, body.width.saturating_sub(5) as usize)
            {
                lines.push(Line::from(Span::styled(
                    format!("   {}", l),
                    Theme::text_muted(),
                )));
            }
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), body);
    widgets::render_hints(
        frame,
        app_layout.footer,
        &[("↑↓", "course"), ("Enter", "open"), ("Tab", "switch tab")],
    );
}
