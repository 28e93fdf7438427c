use crate::app::state::AppState;
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Limited offer expires in ", Theme::text_secondary()),
            Span::styled(state.upsell.timer_text(), Theme::badge()),
        ])),
        app_layout.header,
    );

    let body = layout::centered_column(app_layout.body, 64);
    let width = body.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if state.upsell.phase == 1 {
        lines.push(Line::default());
        for l in widgets::wrap_text("Don't miss your chance to succeed with AI!", width) {
            lines.push(Line::from(Span::styled(l, Theme::title())));
        }
        lines.push(Line::default());
        for l in widgets::wrap_text(
            "Many people miss out on the upside because they lack the prompting skills required to get the most out of AI tools.",
            width,
        ) {
            lines.push(Line::from(Span::styled(l, Theme::text_secondary())));
        }
        lines.push(Line::default());
        for l in widgets::wrap_text(
            "We want you to succeed, which is why we're offering an additional discount on the AI Bundle.",
            width,
        ) {
            lines.push(Line::from(Span::styled(l, Theme::text())));
        }
        lines.push(Line::default());
        lines.push(widgets::button_line("Got it", true));
    } else {
        lines.push(Line::from(Span::styled(
            "Get the AI Bundle now with up to 60% off!",
            Theme::title(),
        )));
        lines.push(Line::default());
        for l in widgets::wrap_text(
            "Access 30,000+ prompts for ChatGPT, Claude, Gemini & Midjourney to automate, create, and scale.",
            width,
        ) {
            lines.push(Line::from(Span::styled(l, Theme::text())));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" $49.99 ", Style::default().fg(Theme::DANGER).add_modifier(Modifier::CROSSED_OUT)),
            Span::styled(" $19.99 ", Theme::success_text()),
            Span::styled(" one-time", Theme::text_muted()),
        ]));
        lines.push(Line::default());
        lines.push(widgets::button_line("Get the bundle", true));
    }

    frame.render_widget(Paragraph::new(lines), body);
    widgets::render_hints(
        frame,
        app_layout.footer,
        &[("Enter", "continue"), ("Esc", "skip")],
    );
}
