use crate::app::state::{AppState, PaywallPhase, Plan};
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 64);
    let width = body.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    match state.paywall.phase {
        PaywallPhase::Guide => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Here's what you get",
                Theme::title(),
            )));
            lines.push(Line::default());
            for (icon, text) in [
                ("📚", "All courses, levels, and lessons — no locked content"),
                ("🧪", "Hands-on exercises with instant feedback"),
                ("✨", "A growing prompt library you unlock as you learn"),
            ] {
                lines.push(Line::from(Span::styled(
                    format!(" {} {}", icon, text),
                    Theme::text(),
                )));
                lines.push(Line::default());
            }
            lines.push(widgets::button_line("Continue", true));
        }
        PaywallPhase::Plans => {
            lines.push(Line::from(Span::styled("Choose your plan", Theme::title())));
            lines.push(Line::default());
            for plan in [Plan::Monthly, Plan::Weekly] {
                let selected = state.paywall.plan == plan;
                let marker = if selected { "●" } else { "○" };
                let style = if selected {
                    Theme::option_selected()
                } else {
                    Theme::option_normal()
                };
                lines.push(Line::from(Span::styled(
                    format!(" {} {} ", marker, plan.label()),
                    style,
                )));
                if plan == Plan::Monthly {
                    lines.push(Line::from(Span::styled(
                        "     Most popular — save 37%",
                        Theme::badge(),
                    )));
                }
                lines.push(Line::default());
            }
            for l in widgets::wrap_text(
                "Cancel anytime. This demo does not charge anything — the subscription is simulated.",
                width,
            ) {
                lines.push(Line::from(Span::styled(l, Theme::text_muted())));
            }
            lines.push(Line::default());
            lines.push(widgets::button_line("Subscribe", true));
        }
    }

    frame.render_widget(Paragraph::new(lines), body);

    if state.paywall.confirming {
        render_confirmation(frame, app_layout.body, state);
    }

    let hints: &[(&str, &str)] = if state.paywall.confirming {
        &[("Enter", "confirm"), ("Esc", "cancel")]
    } else {
        match state.paywall.phase {
            PaywallPhase::Guide => &[("Enter", "continue")],
            PaywallPhase::Plans => &[("↑↓", "plan"), ("Enter", "subscribe"), ("Esc", "back")],
        }
    };
    widgets::render_hints(frame, app_layout.footer, hints);
}

fn render_confirmation(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup = layout::centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Confirm subscription ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!(" Plan: {}", state.paywall.plan.label()),
            Theme::text(),
        )),
        Line::default(),
        Line::from(Span::styled(
            " Start your subscription? (Enter / Esc)",
            Theme::text_secondary(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
