//! Event handling.
//!
//! One entry point, [`handle_event`], routes terminal input to the
//! per-screen key handlers and drives the tick-based animations. The
//! handlers mutate [`AppState`] directly and return [`Action`]s for the
//! side effects the main loop owns (journal writes, quitting).

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::store::Answer;
use crate::content::{Exercise, QuestionKind};
use crate::logging::ProgressEvent;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::RngExt;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        AppEvent::Terminal(CEvent::Resize(_, _)) => {
            state.dirty = true;
            vec![]
        }
        AppEvent::Terminal(_) => vec![],
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return vec![Action::Quit];
    }

    match state.screen.clone() {
        Screen::Onboarding => handle_onboarding_key(state, key),
        Screen::Results => handle_results_key(state, key),
        Screen::Paywall => handle_paywall_key(state, key),
        Screen::Signup => handle_signup_key(state, key),
        Screen::Upsell => handle_upsell_key(state, key),
        Screen::Main(tab) => handle_main_key(state, tab, key),
        Screen::CourseDetail { course_id } => handle_course_key(state, &course_id, key),
        Screen::Lesson { lesson_id } => handle_lesson_key(state, &lesson_id, key),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    match &state.screen {
        Screen::Results if state.results.phase == ResultsPhase::Loading => {
            // Climb to 89, hold for a beat, then snap to done.
            if state.results.progress < 89 {
                state.results.progress = (state.results.progress + 2).min(89);
            } else {
                state.results.hold_ticks += 1;
                let hold = state.ticks_per_second() * 3 / 2;
                if state.results.hold_ticks >= hold {
                    state.results.phase = ResultsPhase::Complete;
                    state.results.progress = 100;
                }
            }
            state.dirty = true;
        }
        Screen::Upsell => {
            state.upsell.ticks += 1;
            if state.upsell.ticks >= state.ticks_per_second() {
                state.upsell.ticks = 0;
                if state.upsell.seconds_left > 0 {
                    state.upsell.seconds_left -= 1;
                    state.dirty = true;
                }
            }
        }
        _ => {}
    }
    vec![]
}

// --- Onboarding ---

fn handle_onboarding_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let questions = state.content.onboarding.questions.clone();
    let Some(question) = questions.get(state.onboarding.index) else {
        return vec![];
    };
    let option_count = question.options.len();

    match key.code {
        KeyCode::Up => {
            if state.onboarding.selected > 0 {
                state.onboarding.selected -= 1;
            }
        }
        KeyCode::Down => {
            if option_count > 0 && state.onboarding.selected + 1 < option_count {
                state.onboarding.selected += 1;
            }
        }
        KeyCode::Left | KeyCode::Backspace => {
            if state.onboarding.index > 0 {
                state.onboarding.index -= 1;
                state.onboarding.selected = 0;
                state.onboarding.multi_selected.clear();
                if let Some(prev) = questions.get(state.onboarding.index) {
                    state.store.set_current_onboarding_step(prev.step);
                }
            }
        }
        KeyCode::Char(' ') if question.kind == QuestionKind::MultiSelect => {
            if let Some(option) = question.options.get(state.onboarding.selected) {
                let text = option.text.clone();
                let multi = &mut state.onboarding.multi_selected;
                if let Some(pos) = multi.iter().position(|v| v == &text) {
                    multi.remove(pos);
                } else {
                    multi.push(text);
                }
            }
        }
        KeyCode::Enter => match question.kind {
            QuestionKind::Interstitial => {
                return advance_onboarding(state, questions.len());
            }
            QuestionKind::SingleSelect => {
                if let Some(option) = question.options.get(state.onboarding.selected) {
                    let answer = option.text.clone();
                    state
                        .store
                        .set_onboarding_answer(question.step, Answer::Single(answer.clone()));
                    match question.store_as.as_deref() {
                        Some("goal") => state.store.set_user_goal(answer),
                        Some("dailyTime") => state.store.set_daily_time(answer),
                        _ => {}
                    }
                    return advance_onboarding(state, questions.len());
                }
            }
            QuestionKind::MultiSelect => {
                if !state.onboarding.multi_selected.is_empty() {
                    let values = state.onboarding.multi_selected.clone();
                    state
                        .store
                        .set_onboarding_answer(question.step, Answer::Multi(values));
                    return advance_onboarding(state, questions.len());
                }
            }
        },
        _ => {}
    }
    vec![]
}

fn advance_onboarding(state: &mut AppState, question_count: usize) -> Vec<Action> {
    if state.onboarding.index + 1 < question_count {
        state.onboarding.index += 1;
        state.onboarding.selected = 0;
        state.onboarding.multi_selected.clear();
        let step = state
            .content
            .onboarding
            .questions
            .get(state.onboarding.index)
            .map(|q| q.step)
            .unwrap_or(1);
        state.store.set_current_onboarding_step(step);
        vec![]
    } else {
        state.store.complete_onboarding();
        state.navigate(Screen::Results);
        vec![Action::Journal(ProgressEvent::OnboardingCompleted)]
    }
}

// --- Results ---

fn handle_results_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter {
        match state.results.phase {
            ResultsPhase::Summary => {
                state.results.phase = ResultsPhase::Loading;
                state.results.progress = 0;
                state.results.hold_ticks = 0;
            }
            // Ignore input while the plan animation runs.
            ResultsPhase::Loading => {}
            ResultsPhase::Complete => state.navigate(Screen::Paywall),
        }
    }
    vec![]
}

// --- Paywall ---

fn handle_paywall_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if state.paywall.confirming {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.paywall.confirming = false;
                state.store.subscribe();
                state.navigate(Screen::Signup);
                return vec![Action::Journal(ProgressEvent::Subscribed {
                    plan: state.paywall.plan.label().to_string(),
                })];
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.paywall.confirming = false;
            }
            _ => {}
        }
        return vec![];
    }

    match state.paywall.phase {
        PaywallPhase::Guide => {
            if key.code == KeyCode::Enter {
                state.paywall.phase = PaywallPhase::Plans;
            }
        }
        PaywallPhase::Plans => match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                state.paywall.plan = match state.paywall.plan {
                    Plan::Monthly => Plan::Weekly,
                    Plan::Weekly => Plan::Monthly,
                };
            }
            KeyCode::Enter => {
                state.paywall.confirming = true;
            }
            KeyCode::Esc => {
                state.paywall.phase = PaywallPhase::Guide;
            }
            _ => {}
        },
    }
    vec![]
}

// --- Signup ---

fn handle_signup_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let focus = state.signup.focus;

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.signup.focus = if state.signup.step == 1 {
                match focus {
                    SignupField::Email => SignupField::Name,
                    _ => SignupField::Email,
                }
            } else {
                match focus {
                    SignupField::Password => SignupField::Confirm,
                    _ => SignupField::Password,
                }
            };
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.signup.focus = if state.signup.step == 1 {
                match focus {
                    SignupField::Name => SignupField::Email,
                    _ => SignupField::Name,
                }
            } else {
                match focus {
                    SignupField::Confirm => SignupField::Password,
                    _ => SignupField::Confirm,
                }
            };
            return vec![];
        }
        KeyCode::Esc => {
            if state.signup.step == 2 {
                state.signup.step = 1;
                state.signup.focus = SignupField::Email;
            }
            return vec![];
        }
        KeyCode::Enter => {
            if state.signup.step == 1 {
                if state.signup.can_submit_step1() {
                    state.signup.step = 2;
                    state.signup.focus = SignupField::Password;
                }
            } else if state.signup.can_submit_step2() {
                let name = state.signup.name.text.trim().to_string();
                let email = state.signup.email.text.trim().to_string();
                state.store.sign_up(name.clone(), email.clone());
                state.navigate(Screen::Upsell);
                return vec![Action::Journal(ProgressEvent::SignedUp { name, email })];
            }
            return vec![];
        }
        _ => {}
    }

    let field = match focus {
        SignupField::Email => &mut state.signup.email,
        SignupField::Name => &mut state.signup.name,
        SignupField::Password => &mut state.signup.password,
        SignupField::Confirm => &mut state.signup.confirm,
    };
    match key.code {
        KeyCode::Char(c) => field.insert_char(c),
        KeyCode::Backspace => field.delete_back(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
    vec![]
}

// --- Upsell ---

fn handle_upsell_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            if state.upsell.phase == 1 {
                state.upsell.phase = 2;
                vec![]
            } else {
                state.store.purchase_ai_bundle();
                state.store.mark_upsell_seen();
                state.navigate(Screen::Main(Tab::Home));
                vec![Action::Journal(ProgressEvent::BundlePurchased)]
            }
        }
        KeyCode::Esc | KeyCode::Char('s') => {
            state.store.mark_upsell_seen();
            state.navigate(Screen::Main(Tab::Home));
            vec![Action::Journal(ProgressEvent::UpsellSkipped)]
        }
        _ => vec![],
    }
}

// --- Main tabs ---

fn handle_main_key(state: &mut AppState, tab: Tab, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return vec![Action::Quit];
        }
        KeyCode::Tab => {
            state.navigate(Screen::Main(tab.next()));
            return vec![];
        }
        KeyCode::BackTab => {
            state.navigate(Screen::Main(tab.prev()));
            return vec![];
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            state.navigate(Screen::Main(Tab::ALL[idx]));
            return vec![];
        }
        _ => {}
    }

    match tab {
        Tab::Home => handle_home_key(state, key),
        Tab::Courses => handle_courses_key(state, key),
        Tab::Prompts => handle_prompts_key(state, key),
        Tab::Profile => handle_profile_key(state, key),
    }
}

/// Home shows the lesson path through the first course. Lessons unlock
/// in order; Enter is ignored on locked ones.
fn handle_home_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let lessons: Vec<(String, bool)> = state
        .content
        .courses
        .first()
        .map(|c| {
            c.levels
                .iter()
                .flat_map(|l| &l.lessons)
                .map(|l| (l.id.clone(), state.store.is_lesson_completed(&l.id)))
                .collect()
        })
        .unwrap_or_default();
    let next_index = lessons
        .iter()
        .position(|(_, done)| !done)
        .unwrap_or(lessons.len());

    match key.code {
        KeyCode::Up => state.cursors.home = state.cursors.home.saturating_sub(1),
        KeyCode::Down => {
            if !lessons.is_empty() && state.cursors.home + 1 < lessons.len() {
                state.cursors.home += 1;
            }
        }
        KeyCode::Enter => {
            let index = state.cursors.home;
            if index <= next_index {
                if let Some((lesson_id, _)) = lessons.get(index) {
                    open_lesson(state, lesson_id.clone());
                }
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_courses_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let count = state.content.courses.len();
    match key.code {
        KeyCode::Up => state.cursors.courses = state.cursors.courses.saturating_sub(1),
        KeyCode::Down => {
            if count > 0 && state.cursors.courses + 1 < count {
                state.cursors.courses += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(course) = state.content.courses.get(state.cursors.courses) {
                let course_id = course.id.clone();
                state.cursors.course_lessons = 0;
                state.navigate(Screen::CourseDetail { course_id });
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_prompts_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let count = state.content.prompts.len();
    match key.code {
        KeyCode::Up => state.cursors.prompts = state.cursors.prompts.saturating_sub(1),
        KeyCode::Down => {
            if count > 0 && state.cursors.prompts + 1 < count {
                state.cursors.prompts += 1;
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_profile_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Char('r') {
        state.store.reset();
        state.onboarding = OnboardingUi::default();
        state.results = ResultsUi::default();
        state.paywall = PaywallUi::default();
        state.signup = SignupUi::default();
        state.upsell = UpsellUi::default();
        state.lesson = LessonUi::default();
        state.cursors = ListCursors::default();
        let screen = Screen::from_gates(&state.store);
        state.navigate(screen);
        return vec![Action::Journal(ProgressEvent::AppReset)];
    }
    vec![]
}

// --- Course detail ---

fn handle_course_key(state: &mut AppState, course_id: &str, key: KeyEvent) -> Vec<Action> {
    let lesson_ids: Vec<String> = state
        .content
        .find_course(course_id)
        .map(|c| {
            c.levels
                .iter()
                .flat_map(|l| &l.lessons)
                .map(|l| l.id.clone())
                .collect()
        })
        .unwrap_or_default();

    match key.code {
        KeyCode::Esc => {
            state.navigate(Screen::Main(Tab::Courses));
        }
        KeyCode::Up => {
            state.cursors.course_lessons = state.cursors.course_lessons.saturating_sub(1);
        }
        KeyCode::Down => {
            if !lesson_ids.is_empty() && state.cursors.course_lessons + 1 < lesson_ids.len() {
                state.cursors.course_lessons += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(lesson_id) = lesson_ids.get(state.cursors.course_lessons) {
                open_lesson(state, lesson_id.clone());
            }
        }
        _ => {}
    }
    vec![]
}

fn open_lesson(state: &mut AppState, lesson_id: String) {
    let options = state
        .content
        .find_lesson(&lesson_id)
        .and_then(|l| l.exercises.first())
        .map(shuffled_answers)
        .unwrap_or_default();
    state.lesson = LessonUi {
        answer_options: options,
        ..LessonUi::default()
    };
    state.navigate(Screen::Lesson { lesson_id });
}

/// Correct answer mixed with the distractors in random order.
fn shuffled_answers(exercise: &Exercise) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(exercise.wrong_answers.len() + 1);
    options.push(exercise.correct_answer.clone());
    options.extend(exercise.wrong_answers.iter().cloned());

    let mut rng = rand::rng();
    for i in (1..options.len()).rev() {
        let j = rng.random_range(0..=i);
        options.swap(i, j);
    }
    options
}

// --- Lesson ---

fn handle_lesson_key(state: &mut AppState, lesson_id: &str, key: KeyEvent) -> Vec<Action> {
    let back_screen = state
        .content
        .course_of_lesson(lesson_id)
        .map(|c| Screen::CourseDetail {
            course_id: c.id.clone(),
        })
        .unwrap_or(Screen::Main(Tab::Courses));

    if key.code == KeyCode::Esc {
        state.navigate(back_screen);
        return vec![];
    }

    let Some(lesson) = state.content.find_lesson(lesson_id) else {
        return vec![];
    };
    let exercise = lesson.exercises.first().cloned();

    match state.lesson.phase {
        LessonPhase::Read => match key.code {
            KeyCode::Up => state.lesson.scroll = state.lesson.scroll.saturating_sub(1),
            KeyCode::Down => state.lesson.scroll = state.lesson.scroll.saturating_add(1),
            KeyCode::Enter => {
                if exercise.is_some() {
                    state.lesson.phase = LessonPhase::Exercise;
                } else {
                    // No exercise: reading the lesson completes it.
                    state.store.complete_lesson(lesson_id);
                    state.navigate(back_screen);
                    return vec![Action::Journal(ProgressEvent::LessonCompleted {
                        lesson_id: lesson_id.to_string(),
                    })];
                }
            }
            _ => {}
        },
        LessonPhase::Exercise => match key.code {
            KeyCode::Up => {
                state.lesson.selected = Some(match state.lesson.selected {
                    Some(i) if i > 0 => i - 1,
                    Some(i) => i,
                    None => 0,
                });
            }
            KeyCode::Down => {
                let count = state.lesson.answer_options.len();
                state.lesson.selected = Some(match state.lesson.selected {
                    Some(i) if i + 1 < count => i + 1,
                    Some(i) => i,
                    None => 0,
                });
            }
            KeyCode::Enter => {
                if let (Some(i), Some(ex)) = (state.lesson.selected, &exercise) {
                    if let Some(answer) = state.lesson.answer_options.get(i) {
                        state.lesson.is_correct = answer == &ex.correct_answer;
                        state.lesson.phase = LessonPhase::Result;
                    }
                }
            }
            _ => {}
        },
        LessonPhase::Result => {
            if key.code == KeyCode::Enter {
                state.lesson.phase = LessonPhase::Congratulations;
            }
        }
        LessonPhase::Congratulations => {
            if key.code == KeyCode::Enter {
                let mut actions = Vec::new();
                state.store.complete_lesson(lesson_id);
                actions.push(Action::Journal(ProgressEvent::LessonCompleted {
                    lesson_id: lesson_id.to_string(),
                }));
                if let Some(ex) = &exercise {
                    state.store.discover_prompt(&ex.prompt.name, &ex.id);
                    actions.push(Action::Journal(ProgressEvent::PromptDiscovered {
                        prompt_id: ex.prompt.name.clone(),
                        exercise_id: ex.id.clone(),
                    }));
                }
                state.navigate(back_screen);
                return actions;
            }
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::ContentLibrary;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default(), ContentLibrary::load().unwrap())
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn walk_onboarding(state: &mut AppState) {
        let count = state.content.onboarding.questions.len();
        for _ in 0..count {
            let question = &state.content.onboarding.questions[state.onboarding.index];
            if question.kind == QuestionKind::MultiSelect {
                handle_event(state, press(KeyCode::Char(' ')));
            }
            handle_event(state, press(KeyCode::Enter));
        }
    }

    #[test]
    fn app_opens_on_onboarding() {
        let state = test_state();
        assert_eq!(state.screen, Screen::Onboarding);
    }

    #[test]
    fn answering_every_question_completes_onboarding() {
        let mut state = test_state();
        walk_onboarding(&mut state);

        assert!(state.store.has_completed_onboarding);
        assert_eq!(state.screen, Screen::Results);
    }

    #[test]
    fn single_select_answer_is_recorded_for_the_step() {
        let mut state = test_state();
        let question = state.content.onboarding.questions[0].clone();
        assert_eq!(question.kind, QuestionKind::SingleSelect);

        handle_event(&mut state, press(KeyCode::Down));
        handle_event(&mut state, press(KeyCode::Enter));

        let expected = question.options[1].text.clone();
        assert_eq!(
            state.store.onboarding_answers.get(&question.step),
            Some(&Answer::Single(expected))
        );
        assert_eq!(state.onboarding.index, 1);
    }

    #[test]
    fn goal_and_daily_time_answers_fill_profile_fields() {
        let mut state = test_state();
        walk_onboarding(&mut state);

        assert!(!state.store.user_goal.is_empty());
        assert!(!state.store.daily_time.is_empty());
    }

    #[test]
    fn back_returns_to_the_previous_question() {
        let mut state = test_state();
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.onboarding.index, 1);

        handle_event(&mut state, press(KeyCode::Left));
        assert_eq!(state.onboarding.index, 0);
        assert_eq!(state.store.current_onboarding_step, 1);
    }

    #[test]
    fn multi_select_needs_at_least_one_option() {
        let mut state = test_state();
        let multi_index = state
            .content
            .onboarding
            .questions
            .iter()
            .position(|q| q.kind == QuestionKind::MultiSelect)
            .expect("content has a multi-select question");
        state.onboarding.index = multi_index;

        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.onboarding.index, multi_index);

        handle_event(&mut state, press(KeyCode::Char(' ')));
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.onboarding.index, multi_index + 1);
        let step = state.content.onboarding.questions[multi_index].step;
        assert!(matches!(
            state.store.onboarding_answers.get(&step),
            Some(Answer::Multi(v)) if v.len() == 1
        ));
    }

    #[test]
    fn paywall_confirmation_subscribes_and_moves_to_signup() {
        let mut state = test_state();
        state.store.complete_onboarding();
        state.navigate(Screen::Paywall);

        handle_event(&mut state, press(KeyCode::Enter)); // guide -> plans
        handle_event(&mut state, press(KeyCode::Enter)); // open confirmation
        assert!(state.paywall.confirming);
        handle_event(&mut state, press(KeyCode::Enter)); // confirm

        assert!(state.store.has_subscribed);
        assert_eq!(state.screen, Screen::Signup);
    }

    #[test]
    fn signup_flow_stores_trimmed_name_and_email() {
        let mut state = test_state();
        state.navigate(Screen::Signup);

        for c in "ann@x.com".chars() {
            handle_event(&mut state, press(KeyCode::Char(c)));
        }
        handle_event(&mut state, press(KeyCode::Tab));
        for c in "Ann ".chars() {
            handle_event(&mut state, press(KeyCode::Char(c)));
        }
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.signup.step, 2);

        for c in "abc123".chars() {
            handle_event(&mut state, press(KeyCode::Char(c)));
        }
        handle_event(&mut state, press(KeyCode::Tab));
        for c in "abc123".chars() {
            handle_event(&mut state, press(KeyCode::Char(c)));
        }
        handle_event(&mut state, press(KeyCode::Enter));

        assert!(state.store.has_signed_up);
        assert_eq!(state.store.user_name, "Ann");
        assert_eq!(state.store.user_email, "ann@x.com");
        assert_eq!(state.screen, Screen::Upsell);
    }

    #[test]
    fn incomplete_signup_stays_on_step_one() {
        let mut state = test_state();
        state.navigate(Screen::Signup);

        for c in "not-an-email".chars() {
            handle_event(&mut state, press(KeyCode::Char(c)));
        }
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.signup.step, 1);
        assert!(!state.store.has_signed_up);
    }

    #[test]
    fn skipping_the_upsell_reaches_the_main_app() {
        let mut state = test_state();
        state.navigate(Screen::Upsell);

        handle_event(&mut state, press(KeyCode::Esc));
        assert!(state.store.has_seen_upsell);
        assert!(!state.store.has_ai_bundle);
        assert_eq!(state.screen, Screen::Main(Tab::Home));
    }

    #[test]
    fn purchasing_the_bundle_sets_both_flags() {
        let mut state = test_state();
        state.navigate(Screen::Upsell);

        handle_event(&mut state, press(KeyCode::Enter)); // pitch -> offer
        handle_event(&mut state, press(KeyCode::Enter)); // purchase
        assert!(state.store.has_ai_bundle);
        assert!(state.store.has_seen_upsell);
        assert_eq!(state.screen, Screen::Main(Tab::Home));
    }

    #[test]
    fn upsell_countdown_ticks_down_by_seconds() {
        let mut state = test_state();
        state.navigate(Screen::Upsell);
        assert_eq!(state.upsell.seconds_left, 600);

        for _ in 0..state.ticks_per_second() {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert_eq!(state.upsell.seconds_left, 599);
    }

    #[test]
    fn results_animation_holds_then_completes() {
        let mut state = test_state();
        state.navigate(Screen::Results);
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.results.phase, ResultsPhase::Loading);

        // Enough ticks to climb to 89 and sit through the hold.
        for _ in 0..200 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert_eq!(state.results.phase, ResultsPhase::Complete);
        assert_eq!(state.results.progress, 100);

        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.screen, Screen::Paywall);
    }

    #[test]
    fn finishing_a_lesson_records_completion_and_prompt() {
        let mut state = test_state();
        let course = state.content.courses[0].clone();
        let lesson = course.levels[0].lessons[0].clone();
        let exercise = lesson.exercises[0].clone();
        open_lesson(&mut state, lesson.id.clone());
        assert_eq!(state.lesson.phase, LessonPhase::Read);

        handle_event(&mut state, press(KeyCode::Enter)); // read -> exercise
        assert_eq!(state.lesson.phase, LessonPhase::Exercise);

        // Move the cursor onto the correct answer.
        let correct = state
            .lesson
            .answer_options
            .iter()
            .position(|o| o == &exercise.correct_answer)
            .unwrap();
        state.lesson.selected = Some(correct);
        handle_event(&mut state, press(KeyCode::Enter)); // check
        assert_eq!(state.lesson.phase, LessonPhase::Result);
        assert!(state.lesson.is_correct);

        handle_event(&mut state, press(KeyCode::Enter)); // result -> congrats
        handle_event(&mut state, press(KeyCode::Enter)); // finish

        assert!(state.store.is_lesson_completed(&lesson.id));
        assert!(state.store.is_prompt_discovered(&exercise.prompt.name));
        assert_eq!(
            state.screen,
            Screen::CourseDetail {
                course_id: course.id.clone()
            }
        );
    }

    #[test]
    fn wrong_answer_still_finishes_the_lesson() {
        let mut state = test_state();
        let lesson = state.content.courses[0].levels[0].lessons[0].clone();
        let exercise = lesson.exercises[0].clone();
        open_lesson(&mut state, lesson.id.clone());

        handle_event(&mut state, press(KeyCode::Enter));
        let wrong = state
            .lesson
            .answer_options
            .iter()
            .position(|o| o != &exercise.correct_answer)
            .unwrap();
        state.lesson.selected = Some(wrong);
        handle_event(&mut state, press(KeyCode::Enter));
        assert!(!state.lesson.is_correct);

        handle_event(&mut state, press(KeyCode::Enter));
        handle_event(&mut state, press(KeyCode::Enter));
        assert!(state.store.is_lesson_completed(&lesson.id));
    }

    #[test]
    fn shuffled_answers_keep_every_option() {
        let exercise = ContentLibrary::load().unwrap().courses[0].levels[0].lessons[0].exercises[0]
            .clone();
        let mut options = shuffled_answers(&exercise);
        options.sort();
        let mut expected: Vec<String> = exercise.wrong_answers.clone();
        expected.push(exercise.correct_answer.clone());
        expected.sort();
        assert_eq!(options, expected);
    }

    #[test]
    fn profile_reset_returns_to_onboarding() {
        let mut state = test_state();
        state.store.complete_onboarding();
        state.store.subscribe();
        state.store.sign_up("Ann", "ann@x.com");
        state.store.mark_upsell_seen();
        state.navigate(Screen::Main(Tab::Profile));

        handle_event(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.store, crate::app::store::AppStore::new());
        assert_eq!(state.screen, Screen::Onboarding);
    }

    #[test]
    fn home_opens_the_next_unlocked_lesson() {
        let mut state = test_state();
        state.navigate(Screen::Main(Tab::Home));

        let first_id = state.content.courses[0].levels[0].lessons[0].id.clone();
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.screen, Screen::Lesson { lesson_id: first_id });

        // Second lesson is locked until the first is completed.
        let mut state = test_state();
        state.navigate(Screen::Main(Tab::Home));
        handle_event(&mut state, press(KeyCode::Down));
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.screen, Screen::Main(Tab::Home));
    }

    #[test]
    fn tab_key_cycles_the_main_tabs() {
        let mut state = test_state();
        state.navigate(Screen::Main(Tab::Home));

        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.screen, Screen::Main(Tab::Courses));
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.screen, Screen::Main(Tab::Prompts));
        handle_event(&mut state, press(KeyCode::Char('1')));
        assert_eq!(state.screen, Screen::Main(Tab::Home));
    }
}
