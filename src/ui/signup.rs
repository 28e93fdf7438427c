use crate::app::state::{AppState, SignupField, TextField};
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let body = layout::centered_column(app_layout.body, 56);

    let title = if state.signup.step == 1 {
        "Create your account"
    } else {
        "Choose a password"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, Theme::title()))),
        Rect::new(body.x, body.y, body.width, 1),
    );

    let mut y = body.y + 2;
    if state.signup.step == 1 {
        y = render_field(
            frame, body, y,
            "Email",
            &state.signup.email,
            state.signup.focus == SignupField::Email,
            false,
        );
        if !state.signup.email.text.is_empty() && !state.signup.email_valid() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " Please enter a valid email",
                    Theme::error_text(),
                ))),
                Rect::new(body.x, y, body.width, 1),
            );
        }
        y += 1;
        y = render_field(
            frame, body, y,
            "Name",
            &state.signup.name,
            state.signup.focus == SignupField::Name,
            false,
        );
        y += 1;
        frame.render_widget(
            Paragraph::new(widgets::button_line(
                "Continue",
                state.signup.can_submit_step1(),
            )),
            Rect::new(body.x, y, body.width, 1),
        );
        y += 2;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "By continuing you agree to the Terms and Privacy Policy.",
                Theme::text_muted(),
            ))),
            Rect::new(body.x, y, body.width, 1),
        );
    } else {
        y = render_field(
            frame, body, y,
            "Password",
            &state.signup.password,
            state.signup.focus == SignupField::Password,
            true,
        );
        y += 1;
        y = render_field(
            frame, body, y,
            "Confirm password",
            &state.signup.confirm,
            state.signup.focus == SignupField::Confirm,
            true,
        );
        y += 1;

        let rules = state.signup.password_rules();
        for (ok, label) in [
            (rules.min_length, "At least 6 characters"),
            (rules.has_lowercase, "Contains a lowercase letter"),
            (rules.has_number, "Contains a number"),
            (rules.passwords_match, "Passwords match"),
        ] {
            let (mark, style) = if ok {
                ("✓", Theme::completed())
            } else {
                ("✗", Theme::text_muted())
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" {} {}", mark, label),
                    style,
                ))),
                Rect::new(body.x, y, body.width, 1),
            );
            y += 1;
        }
        y += 1;
        frame.render_widget(
            Paragraph::new(widgets::button_line(
                "Create account",
                state.signup.can_submit_step2(),
            )),
            Rect::new(body.x, y, body.width, 1),
        );
    }

    let hints: &[(&str, &str)] = if state.signup.step == 1 {
        &[("Tab", "next field"), ("Enter", "continue")]
    } else {
        &[("Tab", "next field"), ("Enter", "create"), ("Esc", "back")]
    };
    widgets::render_hints(frame, app_layout.footer, hints);
}

/// Render one labeled input box; returns the y below it. Masks the text
/// for password fields and places the terminal cursor when focused.
fn render_field(
    frame: &mut Frame,
    body: Rect,
    y: u16,
    label: &str,
    field: &TextField,
    focused: bool,
    mask: bool,
) -> u16 {
    let area = Rect::new(body.x, y, body.width, 3);
    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown: String = if mask {
        "•".repeat(field.text.chars().count())
    } else {
        field.text.clone()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(shown.clone(), Theme::input_text()))),
        inner,
    );

    if focused {
        let prefix = if mask {
            field.text[..field.cursor].chars().count()
        } else {
            field.text[..field.cursor].width()
        };
        let cursor_x = inner.x + prefix as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }

    y + 3
}
