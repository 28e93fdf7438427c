mod course_detail;
mod courses;
mod home;
mod layout;
mod lesson;
mod onboarding;
mod paywall;
mod profile;
mod prompts;
mod results;
mod signup;
mod status_bar;
mod tab_bar;
mod theme;
mod upsell;
mod widgets;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    match &state.screen {
        Screen::Onboarding => onboarding::render(frame, &app_layout, state),
        Screen::Results => results::render(frame, &app_layout, state),
        Screen::Paywall => paywall::render(frame, &app_layout, state),
        Screen::Signup => signup::render(frame, &app_layout, state),
        Screen::Upsell => upsell::render(frame, &app_layout, state),
        Screen::Main(tab) => {
            tab_bar::render(frame, app_layout.header, *tab);
            match tab {
                crate::app::state::Tab::Home => home::render(frame, &app_layout, state),
                crate::app::state::Tab::Courses => courses::render(frame, &app_layout, state),
                crate::app::state::Tab::Prompts => prompts::render(frame, &app_layout, state),
                crate::app::state::Tab::Profile => profile::render(frame, &app_layout, state),
            }
        }
        Screen::CourseDetail { course_id } => {
            course_detail::render(frame, &app_layout, state, course_id)
        }
        Screen::Lesson { lesson_id } => lesson::render(frame, &app_layout, state, lesson_id),
    }

    status_bar::render(frame, app_layout.status_bar, state);
}
