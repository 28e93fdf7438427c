use crate::app::state::AppState;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Prompt library tab. Prompts are earned by finishing lesson exercises;
/// locked entries show only their name.
pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 64);
    let mut lines: Vec<Line> = Vec::new();

    let discovered = state
        .content
        .prompts
        .iter()
        .filter(|p| is_discovered(state, p.id.as_deref()))
        .count();
    lines.push(Line::from(Span::styled("Prompt library", Theme::title())));
    lines.push(Line::from(Span::styled(
        format!(
            "{} of {} prompts discovered",
            discovered,
            state.content.prompts.len()
        ),
        Theme::text_secondary(),
    )));
    lines.push(Line::default());

    for (i, prompt) in state.content.prompts.iter().enumerate() {
        let unlocked = is_discovered(state, prompt.id.as_deref());
        let selected = i == state.cursors.prompts;
        let marker = if selected { " ❯ " } else { "   " };
        if unlocked {
            let style = if selected {
                Theme::option_selected()
            } else {
                Theme::option_normal()
            };
            lines.push(Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(prompt.name.clone(), style),
                Span::styled(format!("  [{}]", prompt.ai_tool), Theme::badge()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(format!("🔒 {}", prompt.name), Theme::locked()),
            ]));
        }
    }

    // Template preview for the selected prompt, when unlocked.
    if let Some(prompt) = state.content.prompts.get(state.cursors.prompts) {
        if is_discovered(state, prompt.id.as_deref()) {
            lines.push(Line::default());
            for l in widgets::wrap_text(&prompt.template, body.width.saturating_sub(3) as usize) {
                lines.push(Line::from(Span::styled(
                    format!("   {}", l),
                    Theme::text_muted(),
                )));
            }
            if !prompt.tags.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("   #{}", prompt.tags.join(" #")),
                    Theme::text_secondary(),
                )));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), body);
    widgets::render_hints(
        frame,
        app_layout.footer,
        &[("↑↓", "prompt"), ("Tab", "switch tab")],
    );
}

fn is_discovered(state: &AppState, prompt_id: Option<&str>) -> bool {
    prompt_id.is_some_and(|id| state.store.is_prompt_discovered(id))
}
