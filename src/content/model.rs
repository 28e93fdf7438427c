//! Typed model for the static content documents.
//!
//! Three read-only JSON documents drive the app: the onboarding
//! questionnaire, the course catalog, and the prompt template library.
//! The screens trust these shapes; deserialization is the only validation.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingContent {
    pub questions: Vec<OnboardingQuestion>,
    pub total_steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "single-select")]
    SingleSelect,
    #[serde(rename = "multi-select")]
    MultiSelect,
    #[serde(rename = "interstitial")]
    Interstitial,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingQuestion {
    pub step: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub show_logo: bool,
    #[serde(default)]
    pub badge: Option<String>,
    /// Routes the answer into a profile field ("goal" or "dailyTime").
    #[serde(default)]
    pub store_as: Option<String>,
    #[serde(default)]
    pub options: Vec<OnboardingOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingOption {
    #[serde(default)]
    pub emoji: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoursesContent {
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: u32,
    pub levels: Vec<Level>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub order: u32,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Read,
    Listen,
    Video,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub order: u32,
    pub content_type: LessonKind,
    pub content: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    FillInBlank,
    MultipleChoice,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    pub scenario: String,
    /// Prompt text with a `[___]` marker where the answer goes.
    pub prompt_template: String,
    pub blank_index: u32,
    pub correct_answer: String,
    pub wrong_answers: Vec<String>,
    pub ai_response: String,
    pub prompt: PromptTemplate,
}

impl Exercise {
    /// The prompt template split around the `[___]` blank marker.
    pub fn template_parts(&self) -> (&str, &str) {
        match self.prompt_template.split_once("[___]") {
            Some((before, after)) => (before, after),
            None => (self.prompt_template.as_str(), ""),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptsContent {
    pub prompts: Vec<PromptTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub template: String,
    pub ai_tool: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}
