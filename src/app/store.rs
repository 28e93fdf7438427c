//! Application state store.
//!
//! One mutable aggregate holding everything the screens read and write:
//! the four funnel gates (onboarding, subscription, signup, upsell),
//! onboarding answers, profile fields, and the lesson-completion and
//! prompt-discovery records. Owned by [`crate::app::state::AppState`] and
//! mutated only through the methods below. Nothing here persists across
//! runs and nothing can fail.

use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// A single onboarding answer: one choice, or the checked options of a
/// multi-select question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCompletion {
    pub lesson_id: String,
    pub completed_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPrompt {
    pub prompt_id: String,
    pub exercise_id: String,
    pub discovered_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppStore {
    pub has_completed_onboarding: bool,
    pub has_subscribed: bool,
    pub has_signed_up: bool,
    pub has_seen_upsell: bool,

    pub onboarding_answers: BTreeMap<u32, Answer>,
    pub current_onboarding_step: u32,
    pub user_goal: String,
    pub daily_time: String,

    pub user_name: String,
    pub user_email: String,

    pub completed_lessons: Vec<LessonCompletion>,
    pub discovered_prompts: Vec<DiscoveredPrompt>,
    pub has_ai_bundle: bool,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    /// The starting snapshot: every gate closed, the questionnaire on
    /// step 1, nothing recorded.
    pub fn new() -> Self {
        Self {
            has_completed_onboarding: false,
            has_subscribed: false,
            has_signed_up: false,
            has_seen_upsell: false,
            onboarding_answers: BTreeMap::new(),
            current_onboarding_step: 1,
            user_goal: String::new(),
            daily_time: String::new(),
            user_name: String::new(),
            user_email: String::new(),
            completed_lessons: Vec::new(),
            discovered_prompts: Vec::new(),
            has_ai_bundle: false,
        }
    }

    /// Record the answer for a questionnaire step. Last write wins.
    pub fn set_onboarding_answer(&mut self, step: u32, answer: Answer) {
        self.onboarding_answers.insert(step, answer);
    }

    pub fn set_current_onboarding_step(&mut self, step: u32) {
        self.current_onboarding_step = step;
    }

    pub fn complete_onboarding(&mut self) {
        self.has_completed_onboarding = true;
    }

    pub fn set_user_goal(&mut self, goal: impl Into<String>) {
        self.user_goal = goal.into();
    }

    pub fn set_daily_time(&mut self, time: impl Into<String>) {
        self.daily_time = time.into();
    }

    pub fn subscribe(&mut self) {
        self.has_subscribed = true;
    }

    /// Flip the signup gate and store name and email together.
    pub fn sign_up(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.has_signed_up = true;
        self.user_name = name.into();
        self.user_email = email.into();
    }

    pub fn mark_upsell_seen(&mut self) {
        self.has_seen_upsell = true;
    }

    pub fn purchase_ai_bundle(&mut self) {
        self.has_ai_bundle = true;
    }

    /// Append a completion record. Repeated calls for the same lesson
    /// append again; `is_lesson_completed` and `lesson_progress` dedupe by
    /// id, but the raw record count (shown on the profile screen) grows.
    pub fn complete_lesson(&mut self, lesson_id: impl Into<String>) {
        self.completed_lessons.push(LessonCompletion {
            lesson_id: lesson_id.into(),
            completed_at: Local::now(),
        });
    }

    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.completed_lessons
            .iter()
            .any(|c| c.lesson_id == lesson_id)
    }

    pub fn discover_prompt(
        &mut self,
        prompt_id: impl Into<String>,
        exercise_id: impl Into<String>,
    ) {
        self.discovered_prompts.push(DiscoveredPrompt {
            prompt_id: prompt_id.into(),
            exercise_id: exercise_id.into(),
            discovered_at: Local::now(),
        });
    }

    pub fn is_prompt_discovered(&self, prompt_id: &str) -> bool {
        self.discovered_prompts
            .iter()
            .any(|p| p.prompt_id == prompt_id)
    }

    /// Percentage of `lesson_ids` with at least one completion record,
    /// rounded to the nearest integer. Returns 0 for an empty list.
    ///
    /// The course id is carried for symmetry with the callers but the
    /// computation only looks at the supplied lesson list; course lesson
    /// ids are globally unique in the shipped content.
    pub fn lesson_progress(&self, _course_id: &str, lesson_ids: &[&str]) -> u8 {
        if lesson_ids.is_empty() {
            return 0;
        }
        let completed = lesson_ids
            .iter()
            .filter(|id| self.is_lesson_completed(id))
            .count();
        ((completed as f64 / lesson_ids.len() as f64) * 100.0).round() as u8
    }

    /// Restore every field to its starting value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_has_default_state() {
        let store = AppStore::new();
        assert!(!store.has_completed_onboarding);
        assert!(!store.has_subscribed);
        assert!(!store.has_signed_up);
        assert!(!store.has_seen_upsell);
        assert!(!store.has_ai_bundle);
        assert!(store.onboarding_answers.is_empty());
        assert_eq!(store.current_onboarding_step, 1);
        assert_eq!(store.user_goal, "");
        assert_eq!(store.daily_time, "");
        assert_eq!(store.user_name, "");
        assert_eq!(store.user_email, "");
        assert!(store.completed_lessons.is_empty());
        assert!(store.discovered_prompts.is_empty());
    }

    #[test]
    fn default_matches_the_starting_snapshot() {
        assert_eq!(AppStore::default(), AppStore::new());
        assert_eq!(AppStore::default().current_onboarding_step, 1);
    }

    #[test]
    fn records_onboarding_answers() {
        let mut store = AppStore::new();
        store.set_onboarding_answer(1, Answer::Single("Always".into()));
        store.set_onboarding_answer(2, Answer::Single("I struggle a lot".into()));

        assert_eq!(
            store.onboarding_answers.get(&1),
            Some(&Answer::Single("Always".into()))
        );
        assert_eq!(
            store.onboarding_answers.get(&2),
            Some(&Answer::Single("I struggle a lot".into()))
        );
    }

    #[test]
    fn last_answer_per_step_wins() {
        let mut store = AppStore::new();
        store.set_onboarding_answer(3, Answer::Single("Rarely".into()));
        store.set_onboarding_answer(4, Answer::Multi(vec!["Email".into()]));
        store.set_onboarding_answer(3, Answer::Single("Often".into()));

        assert_eq!(
            store.onboarding_answers.get(&3),
            Some(&Answer::Single("Often".into()))
        );
        assert_eq!(store.onboarding_answers.len(), 2);
    }

    #[test]
    fn gate_setters_are_idempotent() {
        let mut store = AppStore::new();
        store.complete_onboarding();
        store.complete_onboarding();
        store.subscribe();
        store.mark_upsell_seen();
        store.purchase_ai_bundle();

        assert!(store.has_completed_onboarding);
        assert!(store.has_subscribed);
        assert!(store.has_seen_upsell);
        assert!(store.has_ai_bundle);
    }

    #[test]
    fn sign_up_sets_flag_and_profile_together() {
        let mut store = AppStore::new();
        store.sign_up("Test User", "test@example.com");

        assert!(store.has_signed_up);
        assert_eq!(store.user_name, "Test User");
        assert_eq!(store.user_email, "test@example.com");
    }

    #[test]
    fn tracks_lesson_completion() {
        let mut store = AppStore::new();
        assert!(!store.is_lesson_completed("chatgpt-1-1"));

        store.complete_lesson("chatgpt-1-1");
        assert!(store.is_lesson_completed("chatgpt-1-1"));
    }

    #[test]
    fn duplicate_completions_append_records() {
        let mut store = AppStore::new();
        store.complete_lesson("l1");
        store.complete_lesson("l1");

        assert!(store.is_lesson_completed("l1"));
        assert_eq!(store.completed_lessons.len(), 2);
    }

    #[test]
    fn tracks_discovered_prompts() {
        let mut store = AppStore::new();
        assert!(!store.is_prompt_discovered("prompt-email"));

        store.discover_prompt("prompt-email", "exercise-1");
        assert!(store.is_prompt_discovered("prompt-email"));
        assert_eq!(store.discovered_prompts[0].exercise_id, "exercise-1");
    }

    #[test]
    fn lesson_progress_rounds_to_nearest_percent() {
        let mut store = AppStore::new();
        let lessons = ["l1", "l2", "l3", "l4"];

        assert_eq!(store.lesson_progress("course-1", &lessons), 0);

        store.complete_lesson("l1");
        store.complete_lesson("l2");
        assert_eq!(store.lesson_progress("course-1", &lessons), 50);

        let three = ["l1", "l5", "l6"];
        assert_eq!(store.lesson_progress("course-1", &three), 33);
    }

    #[test]
    fn lesson_progress_of_empty_list_is_zero() {
        let store = AppStore::new();
        assert_eq!(store.lesson_progress("anything", &[]), 0);
    }

    #[test]
    fn duplicate_completions_do_not_skew_progress() {
        let mut store = AppStore::new();
        store.complete_lesson("l1");
        store.complete_lesson("l1");
        let lessons = ["l1", "l2"];
        assert_eq!(store.lesson_progress("course-1", &lessons), 50);
    }

    #[test]
    fn reset_restores_the_default_snapshot() {
        let mut store = AppStore::new();
        store.sign_up("Test", "test@test.com");
        store.complete_onboarding();
        store.subscribe();
        store.set_user_goal("Career growth");
        store.complete_lesson("l1");
        store.discover_prompt("p1", "e1");
        store.purchase_ai_bundle();

        store.reset();
        assert_eq!(store, AppStore::new());
    }
}
