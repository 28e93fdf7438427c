pub mod model;

use anyhow::{Context, Result};
use std::collections::HashSet;
use thiserror::Error;

pub use model::*;

/// Cross-document consistency problems in the embedded content. These
/// are authoring mistakes, caught once at startup.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("onboarding step {found} out of order (expected {expected})")]
    StepOutOfOrder { expected: u32, found: u32 },
    #[error("duplicate lesson id {0}")]
    DuplicateLessonId(String),
    #[error("exercise {exercise} rewards prompt {prompt}, which is not in the library")]
    UnknownRewardPrompt { exercise: String, prompt: String },
}

const ONBOARDING_JSON: &str = include_str!("../../content/onboarding.json");
const COURSES_JSON: &str = include_str!("../../content/courses.json");
const PROMPTS_JSON: &str = include_str!("../../content/prompts.json");

/// The three static content documents, parsed once at startup.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    pub onboarding: OnboardingContent,
    pub courses: Vec<Course>,
    pub prompts: Vec<PromptTemplate>,
}

impl ContentLibrary {
    pub fn load() -> Result<Self> {
        let onboarding: OnboardingContent = serde_json::from_str(ONBOARDING_JSON)
            .context("Failed to parse onboarding content")?;
        let courses: CoursesContent =
            serde_json::from_str(COURSES_JSON).context("Failed to parse course content")?;
        let prompts: PromptsContent =
            serde_json::from_str(PROMPTS_JSON).context("Failed to parse prompt content")?;
        let library = Self {
            onboarding,
            courses: courses.courses,
            prompts: prompts.prompts,
        };
        library.validate().context("Invalid embedded content")?;
        Ok(library)
    }

    fn validate(&self) -> std::result::Result<(), ContentError> {
        for (i, question) in self.onboarding.questions.iter().enumerate() {
            let expected = i as u32 + 1;
            if question.step != expected {
                return Err(ContentError::StepOutOfOrder {
                    expected,
                    found: question.step,
                });
            }
        }

        let mut lesson_ids = HashSet::new();
        let library_ids: HashSet<&str> =
            self.prompts.iter().filter_map(|p| p.id.as_deref()).collect();
        for course in &self.courses {
            for lesson in course.levels.iter().flat_map(|l| &l.lessons) {
                if !lesson_ids.insert(lesson.id.as_str()) {
                    return Err(ContentError::DuplicateLessonId(lesson.id.clone()));
                }
                for exercise in &lesson.exercises {
                    if !library_ids.contains(exercise.prompt.name.as_str()) {
                        return Err(ContentError::UnknownRewardPrompt {
                            exercise: exercise.id.clone(),
                            prompt: exercise.prompt.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Search every course for a lesson by id.
    pub fn find_lesson(&self, id: &str) -> Option<&Lesson> {
        self.courses
            .iter()
            .flat_map(|c| &c.levels)
            .flat_map(|l| &l.lessons)
            .find(|l| l.id == id)
    }

    /// The course a lesson belongs to.
    pub fn course_of_lesson(&self, lesson_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| {
            c.levels
                .iter()
                .flat_map(|l| &l.lessons)
                .any(|l| l.id == lesson_id)
        })
    }

    /// All lesson ids of a course in level/lesson order. This is the
    /// denominator set for the course's progress percentage.
    pub fn lesson_ids<'a>(&self, course: &'a Course) -> Vec<&'a str> {
        course
            .levels
            .iter()
            .flat_map(|l| &l.lessons)
            .map(|l| l.id.as_str())
            .collect()
    }

    pub fn question_at_step(&self, step: u32) -> Option<&OnboardingQuestion> {
        self.onboarding.questions.iter().find(|q| q.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn library() -> ContentLibrary {
        ContentLibrary::load().expect("embedded content parses")
    }

    #[test]
    fn onboarding_has_twenty_sequential_steps() {
        let content = library();
        assert_eq!(content.onboarding.questions.len(), 20);
        assert_eq!(content.onboarding.total_steps, 20);
        for (i, q) in content.onboarding.questions.iter().enumerate() {
            assert_eq!(q.step, i as u32 + 1);
        }
    }

    #[test]
    fn every_non_interstitial_question_has_options() {
        for q in &library().onboarding.questions {
            match q.kind {
                QuestionKind::Interstitial => assert!(q.options.is_empty()),
                _ => assert!(q.options.len() >= 2, "step {} lacks options", q.step),
            }
        }
    }

    #[test]
    fn profile_fields_come_from_the_final_questions() {
        let content = library();
        assert_eq!(
            content.question_at_step(19).and_then(|q| q.store_as.as_deref()),
            Some("goal")
        );
        assert_eq!(
            content.question_at_step(20).and_then(|q| q.store_as.as_deref()),
            Some("dailyTime")
        );
    }

    #[test]
    fn catalog_has_courses_with_unique_lesson_ids() {
        let content = library();
        assert!(content.courses.len() >= 5);

        let mut course_ids = HashSet::new();
        let mut lesson_ids = HashSet::new();
        for course in &content.courses {
            assert!(course_ids.insert(course.id.as_str()), "{}", course.id);
            for level in &course.levels {
                for lesson in &level.lessons {
                    assert!(lesson_ids.insert(lesson.id.as_str()), "{}", lesson.id);
                    assert!(!lesson.content.is_empty());
                }
            }
        }
    }

    #[test]
    fn first_course_lessons_all_carry_an_exercise() {
        let content = library();
        for lesson in content.courses[0].levels.iter().flat_map(|l| &l.lessons) {
            let exercise = lesson
                .exercises
                .first()
                .unwrap_or_else(|| panic!("{} has no exercise", lesson.id));
            assert!(exercise.prompt_template.contains("[___]"));
            assert!(!exercise.wrong_answers.is_empty());
            assert!(!exercise.correct_answer.is_empty());
        }
    }

    #[test]
    fn exercise_rewards_exist_in_the_prompt_library() {
        let content = library();
        let library_ids: HashSet<&str> = content
            .prompts
            .iter()
            .filter_map(|p| p.id.as_deref())
            .collect();
        for course in &content.courses {
            for exercise in course
                .levels
                .iter()
                .flat_map(|l| &l.lessons)
                .flat_map(|l| &l.exercises)
            {
                assert!(
                    library_ids.contains(exercise.prompt.name.as_str()),
                    "reward {} missing from the library",
                    exercise.prompt.name
                );
            }
        }
    }

    #[test]
    fn prompt_library_entries_are_unique_and_complete() {
        let content = library();
        let mut ids = HashSet::new();
        for prompt in &content.prompts {
            if let Some(id) = &prompt.id {
                assert!(ids.insert(id.as_str()), "{}", id);
            }
            assert!(!prompt.name.is_empty());
            assert!(!prompt.template.is_empty());
            assert!(!prompt.ai_tool.is_empty());
        }
    }

    #[test]
    fn lookup_helpers_agree_with_the_catalog() {
        let content = library();
        let course = &content.courses[0];
        let lesson = &course.levels[0].lessons[0];

        assert_eq!(content.find_course(&course.id).unwrap().id, course.id);
        assert_eq!(content.find_lesson(&lesson.id).unwrap().id, lesson.id);
        assert_eq!(content.course_of_lesson(&lesson.id).unwrap().id, course.id);
        assert!(content.find_course("nope").is_none());

        let ids = content.lesson_ids(course);
        assert_eq!(ids[0], lesson.id);
        let total: usize = course.levels.iter().map(|l| l.lessons.len()).sum();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn template_parts_split_on_the_blank() {
        let content = library();
        let exercise = &content.courses[0].levels[0].lessons[0].exercises[0];
        let (before, after) = exercise.template_parts();
        assert_eq!(
            format!("{}[___]{}", before, after),
            exercise.prompt_template
        );
    }
}
