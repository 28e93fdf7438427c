use crate::app::store::AppStore;
use crate::config::AppConfig;
use crate::content::ContentLibrary;

/// Which surface is on screen. The funnel screens come first; `Main` is
/// the tabbed app behind the gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Results,
    Paywall,
    Signup,
    Upsell,
    Main(Tab),
    CourseDetail { course_id: String },
    Lesson { lesson_id: String },
}

impl Screen {
    /// The first unfinished funnel stage decides where the app opens.
    /// Checked in fixed priority: onboarding, subscription, signup,
    /// upsell, then the main app.
    pub fn from_gates(store: &AppStore) -> Self {
        if !store.has_completed_onboarding {
            Screen::Onboarding
        } else if !store.has_subscribed {
            Screen::Paywall
        } else if !store.has_signed_up {
            Screen::Signup
        } else if !store.has_seen_upsell {
            Screen::Upsell
        } else {
            Screen::Main(Tab::Home)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Courses,
    Prompts,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Courses, Tab::Prompts, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Courses => "Courses",
            Tab::Prompts => "Prompts",
            Tab::Profile => "Profile",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Home => Tab::Courses,
            Tab::Courses => Tab::Prompts,
            Tab::Prompts => Tab::Profile,
            Tab::Profile => Tab::Home,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Home => Tab::Profile,
            Tab::Courses => Tab::Home,
            Tab::Prompts => Tab::Courses,
            Tab::Profile => Tab::Prompts,
        }
    }
}

/// Single-line text field for the signup form. Cursor is a byte offset
/// kept on char boundaries.
#[derive(Debug, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Transient onboarding wizard state. `index` is the 0-based position in
/// the question list; the step number shown to the user comes from the
/// question itself.
#[derive(Debug, Default)]
pub struct OnboardingUi {
    pub index: usize,
    pub selected: usize,
    pub multi_selected: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsPhase {
    Summary,
    Loading,
    Complete,
}

/// Results screen: static summary, then an animated "building your plan"
/// percentage that climbs to 89, holds, and snaps to 100.
#[derive(Debug)]
pub struct ResultsUi {
    pub phase: ResultsPhase,
    pub progress: u8,
    pub hold_ticks: u32,
}

impl Default for ResultsUi {
    fn default() -> Self {
        Self {
            phase: ResultsPhase::Summary,
            progress: 0,
            hold_ticks: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaywallPhase {
    Guide,
    Plans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Monthly,
    Weekly,
}

impl Plan {
    pub fn label(&self) -> &'static str {
        match self {
            Plan::Monthly => "1 month — $19.99",
            Plan::Weekly => "1 week — $7.99",
        }
    }
}

#[derive(Debug)]
pub struct PaywallUi {
    pub phase: PaywallPhase,
    pub plan: Plan,
    pub confirming: bool,
}

impl Default for PaywallUi {
    fn default() -> Self {
        Self {
            phase: PaywallPhase::Guide,
            plan: Plan::Monthly,
            confirming: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Email,
    Name,
    Password,
    Confirm,
}

/// Two-step signup form. Step 1 collects name and email, step 2 a
/// password that is validated but never stored.
#[derive(Debug)]
pub struct SignupUi {
    pub step: u8,
    pub focus: SignupField,
    pub email: TextField,
    pub name: TextField,
    pub password: TextField,
    pub confirm: TextField,
}

impl Default for SignupUi {
    fn default() -> Self {
        Self {
            step: 1,
            focus: SignupField::Email,
            email: TextField::new(),
            name: TextField::new(),
            password: TextField::new(),
            confirm: TextField::new(),
        }
    }
}

impl SignupUi {
    pub fn email_valid(&self) -> bool {
        let email = self.email.text.trim();
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !email.contains(char::is_whitespace)
    }

    pub fn password_rules(&self) -> PasswordRules {
        let pw = &self.password.text;
        PasswordRules {
            min_length: pw.len() >= 6,
            has_lowercase: pw.chars().any(|c| c.is_ascii_lowercase()),
            has_number: pw.chars().any(|c| c.is_ascii_digit()),
            passwords_match: !self.confirm.text.is_empty() && *pw == self.confirm.text,
        }
    }

    pub fn can_submit_step1(&self) -> bool {
        !self.name.text.trim().is_empty() && self.email_valid()
    }

    pub fn can_submit_step2(&self) -> bool {
        self.password_rules().all_met()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordRules {
    pub min_length: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub passwords_match: bool,
}

impl PasswordRules {
    pub fn all_met(&self) -> bool {
        self.min_length && self.has_lowercase && self.has_number && self.passwords_match
    }
}

/// Upsell screen: pitch, then the offer with a ten-minute countdown.
#[derive(Debug)]
pub struct UpsellUi {
    pub phase: u8,
    pub seconds_left: u32,
    pub ticks: u32,
}

impl Default for UpsellUi {
    fn default() -> Self {
        Self {
            phase: 1,
            seconds_left: 600,
            ticks: 0,
        }
    }
}

impl UpsellUi {
    pub fn timer_text(&self) -> String {
        format!("{:02}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonPhase {
    Read,
    Exercise,
    Result,
    Congratulations,
}

#[derive(Debug)]
pub struct LessonUi {
    pub phase: LessonPhase,
    /// Correct answer and distractors, shuffled once per lesson visit.
    pub answer_options: Vec<String>,
    pub selected: Option<usize>,
    pub is_correct: bool,
    pub scroll: u16,
}

impl Default for LessonUi {
    fn default() -> Self {
        Self {
            phase: LessonPhase::Read,
            answer_options: Vec::new(),
            selected: None,
            is_correct: false,
            scroll: 0,
        }
    }
}

/// Cursor positions for the list-style surfaces.
#[derive(Debug, Default)]
pub struct ListCursors {
    pub home: usize,
    pub courses: usize,
    pub prompts: usize,
    pub profile: usize,
    pub course_lessons: usize,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: AppStore,
    pub content: ContentLibrary,
    pub screen: Screen,

    pub onboarding: OnboardingUi,
    pub results: ResultsUi,
    pub paywall: PaywallUi,
    pub signup: SignupUi,
    pub upsell: UpsellUi,
    pub lesson: LessonUi,
    pub cursors: ListCursors,

    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, content: ContentLibrary) -> Self {
        let store = AppStore::new();
        let screen = Screen::from_gates(&store);
        Self {
            config,
            store,
            content,
            screen,
            onboarding: OnboardingUi::default(),
            results: ResultsUi::default(),
            paywall: PaywallUi::default(),
            signup: SignupUi::default(),
            upsell: UpsellUi::default(),
            lesson: LessonUi::default(),
            cursors: ListCursors::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.dirty = true;
    }

    /// How many ticks make up one second at the configured tick rate.
    pub fn ticks_per_second(&self) -> u32 {
        (1000 / self.config.ui.tick_rate_ms.max(1)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::AppStore;

    #[test]
    fn first_false_gate_decides_the_screen() {
        let mut store = AppStore::new();
        assert_eq!(Screen::from_gates(&store), Screen::Onboarding);

        store.complete_onboarding();
        assert_eq!(Screen::from_gates(&store), Screen::Paywall);

        store.subscribe();
        assert_eq!(Screen::from_gates(&store), Screen::Signup);

        store.sign_up("Ann", "ann@x.com");
        assert_eq!(Screen::from_gates(&store), Screen::Upsell);

        store.mark_upsell_seen();
        assert_eq!(Screen::from_gates(&store), Screen::Main(Tab::Home));
    }

    #[test]
    fn gate_priority_ignores_later_gates() {
        let mut store = AppStore::new();
        store.subscribe();
        store.mark_upsell_seen();
        // Onboarding still unfinished, so it wins.
        assert_eq!(Screen::from_gates(&store), Screen::Onboarding);
    }

    #[test]
    fn email_validation_accepts_plain_addresses() {
        let mut ui = SignupUi::default();
        for c in "ann@example.com".chars() {
            ui.email.insert_char(c);
        }
        assert!(ui.email_valid());
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        for bad in ["", "ann", "ann@", "@x.com", "ann@com", "a b@x.com"] {
            let mut ui = SignupUi::default();
            for c in bad.chars() {
                ui.email.insert_char(c);
            }
            assert!(!ui.email_valid(), "accepted {bad:?}");
        }
    }

    #[test]
    fn password_rules_require_length_lowercase_digit_and_match() {
        let mut ui = SignupUi::default();
        for c in "abc123".chars() {
            ui.password.insert_char(c);
        }
        assert!(!ui.password_rules().all_met());

        for c in "abc123".chars() {
            ui.confirm.insert_char(c);
        }
        assert!(ui.password_rules().all_met());
    }

    #[test]
    fn text_field_edits_on_char_boundaries() {
        let mut field = TextField::new();
        for c in "héllo".chars() {
            field.insert_char(c);
        }
        field.move_left();
        field.delete_back();
        assert_eq!(field.text, "hélo");
        field.move_end();
        assert_eq!(field.cursor, field.text.len());
    }
}
