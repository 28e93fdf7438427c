use crate::app::state::AppState;
use crate::content::QuestionKind;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let Some(question) = state.content.onboarding.questions.get(state.onboarding.index) else {
        return;
    };
    let total = state.content.onboarding.total_steps;

    // Header: back marker + questionnaire progress
    let mut header = vec![Span::styled(
        if state.onboarding.index > 0 { " ‹ " } else { "   " },
        Theme::text_secondary(),
    )];
    header.extend(widgets::progress_line(question.step, total, app_layout.header.width.saturating_sub(4)).spans);
    frame.render_widget(Paragraph::new(Line::from(header)), app_layout.header);

    let body = layout::centered_column(app_layout.body, 70);
    let width = body.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if question.kind == QuestionKind::Interstitial {
        lines.push(Line::default());
        if question.show_logo {
            lines.push(Line::from(Span::styled("  skillpath", Theme::logo())));
            lines.push(Line::default());
        }
        if let Some(badge) = &question.badge {
            lines.push(Line::from(Span::styled(
                format!("  ⭐ {}", badge),
                Theme::badge(),
            )));
            lines.push(Line::default());
        }
        for l in widgets::wrap_text(&question.title, width) {
            lines.push(Line::from(Span::styled(format!("  {}", l), Theme::title())));
        }
        lines.push(Line::default());
        if let Some(body_text) = &question.body {
            for l in widgets::wrap_text(body_text, width) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", l),
                    Theme::text_secondary(),
                )));
            }
            lines.push(Line::default());
        }
        lines.push(widgets::button_line(
            question.button_text.as_deref().unwrap_or("Continue"),
            true,
        ));
    } else {
        for l in widgets::wrap_text(&question.title, width) {
            lines.push(Line::from(Span::styled(l, Theme::title())));
        }
        if let Some(subtitle) = &question.subtitle {
            for l in widgets::wrap_text(subtitle, width) {
                lines.push(Line::from(Span::styled(l, Theme::text_secondary())));
            }
        }
        lines.push(Line::default());

        let multi = question.kind == QuestionKind::MultiSelect;
        for (i, option) in question.options.iter().enumerate() {
            let checked = multi.then(|| {
                state
                    .onboarding
                    .multi_selected
                    .iter()
                    .any(|v| v == &option.text)
            });
            lines.push(widgets::option_row(
                option.emoji.as_deref(),
                &option.text,
                i == state.onboarding.selected,
                checked,
            ));
        }
        if multi {
            lines.push(Line::default());
            lines.push(widgets::button_line(
                question.button_text.as_deref().unwrap_or("Continue"),
                !state.onboarding.multi_selected.is_empty(),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines), body);

    let hints: &[(&str, &str)] = match question.kind {
        QuestionKind::Interstitial => &[("Enter", "continue"), ("←", "back")],
        QuestionKind::SingleSelect => &[("↑↓", "choose"), ("Enter", "select"), ("←", "back")],
        QuestionKind::MultiSelect => &[
            ("↑↓", "move"),
            ("Space", "toggle"),
            ("Enter", "continue"),
            ("←", "back"),
        ],
    };
    widgets::render_hints(frame, app_layout.footer, hints);
}
