use crate::app::state::{AppState, ResultsPhase};
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use chrono::{Datelike, Local, Months};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 64);
    let width = body.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    match state.results.phase {
        ResultsPhase::Summary => {
            let target = Local::now()
                .date_naive()
                .checked_add_months(Months::new(6))
                .unwrap_or_else(|| Local::now().date_naive());

            lines.push(Line::default());
            for l in widgets::wrap_text(
                "Based on your answers, we expect you to gain the necessary skills and become an AI power user by",
                width,
            ) {
                lines.push(Line::from(Span::styled(l, Theme::text())));
            }
            lines.push(Line::from(Span::styled(
                format!("{} {}", month_name(target.month()), target.year()),
                Theme::heading(),
            )));
            lines.push(Line::default());
            if !state.store.user_goal.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Your goal: ", Theme::text_secondary()),
                    Span::styled(state.store.user_goal.clone(), Theme::badge()),
                ]));
                lines.push(Line::default());
            }

            // Four-month skill ramp, red to green
            let now = Local::now().date_naive();
            let mut chart: Vec<Span> = Vec::new();
            for i in 0..4u32 {
                let month = now
                    .checked_add_months(Months::new(i))
                    .map(|d| month_name(d.month()))
                    .unwrap_or("—");
                let color = match i {
                    0 => Theme::DANGER,
                    1 | 2 => Theme::WARNING,
                    _ => Theme::SUCCESS,
                };
                chart.push(Span::styled(
                    format!("{:<4}{} ", month, "▂▄▆█".chars().nth(i as usize).unwrap_or('█')),
                    Style::default().fg(color),
                ));
            }
            lines.push(Line::from(chart));
            lines.push(Line::default());
            lines.push(widgets::button_line("Continue", true));
        }
        ResultsPhase::Loading => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Building your personal plan...",
                Theme::title(),
            )));
            lines.push(Line::default());
            lines.push(widgets::percent_line(
                state.results.progress,
                body.width.saturating_sub(4),
            ));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Analyzing your answers and matching lessons",
                Theme::text_muted(),
            )));
        }
        ResultsPhase::Complete => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Your plan is ready! 🎉", Theme::success_text())));
            lines.push(Line::default());
            lines.push(widgets::percent_line(100, body.width.saturating_sub(4)));
            lines.push(Line::default());
            for l in widgets::wrap_text(
                "We picked a course sequence that fits your goal and your daily time budget.",
                width,
            ) {
                lines.push(Line::from(Span::styled(l, Theme::text_secondary())));
            }
            lines.push(Line::default());
            lines.push(widgets::button_line("See my plan", true));
        }
    }

    frame.render_widget(Paragraph::new(lines), body);

    let hints: &[(&str, &str)] = match state.results.phase {
        ResultsPhase::Loading => &[],
        _ => &[("Enter", "continue")],
    };
    widgets::render_hints(frame, app_layout.footer, hints);
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
