//! Progress journaling to disk.
//!
//! When enabled, appends one line per notable learning event to a daily
//! log file named `progress_<date>.log` in the configured log directory
//! (default: `~/.local/share/skillpath/logs/`). Writes are best-effort;
//! journaling never fails the app.

use crate::config::LoggingConfig;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// A learning event worth a line in the journal.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    OnboardingCompleted,
    Subscribed { plan: String },
    SignedUp { name: String, email: String },
    UpsellSkipped,
    BundlePurchased,
    LessonCompleted { lesson_id: String },
    PromptDiscovered { prompt_id: String, exercise_id: String },
    AppReset,
}

impl ProgressEvent {
    fn describe(&self) -> String {
        match self {
            ProgressEvent::OnboardingCompleted => "onboarding completed".to_string(),
            ProgressEvent::Subscribed { plan } => format!("subscribed ({})", plan),
            ProgressEvent::SignedUp { name, email } => {
                format!("signed up as {} <{}>", name, email)
            }
            ProgressEvent::UpsellSkipped => "upsell dismissed".to_string(),
            ProgressEvent::BundlePurchased => "AI bundle purchased".to_string(),
            ProgressEvent::LessonCompleted { lesson_id } => {
                format!("lesson completed: {}", lesson_id)
            }
            ProgressEvent::PromptDiscovered {
                prompt_id,
                exercise_id,
            } => format!("prompt discovered: {} (via {})", prompt_id, exercise_id),
            ProgressEvent::AppReset => "app reset to factory state".to_string(),
        }
    }
}

/// Appends progress events to daily journal files.
///
/// The handle for the current day is cached for the lifetime of the
/// journal. Falls back to `/dev/null` if the file cannot be created.
pub struct ProgressJournal {
    enabled: bool,
    log_dir: String,
    timestamp_format: String,
    handle: Option<(String, File)>,
}

impl ProgressJournal {
    pub fn new(config: &LoggingConfig, timestamp_format: &str) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            timestamp_format: timestamp_format.to_string(),
            handle: None,
        }
    }

    /// Write one journal line. No-op when journaling is disabled.
    pub fn log_event(&mut self, event: &ProgressEvent) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let date = now.format("%Y-%m-%d").to_string();
        let filename = format!("progress_{}.log", date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(self.log_dir.trim_start_matches("~/"))
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let stale = match &self.handle {
            Some((name, _)) => name != &filename,
            None => true,
        };
        if stale {
            let _ = fs::create_dir_all(&log_dir);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_dir.join(&filename))
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                });
            self.handle = Some((filename, file));
        }

        if let Some((_, file)) = &mut self.handle {
            let line = format!(
                "[{}] {}",
                now.format(&self.timestamp_format),
                event.describe()
            );
            let _ = writeln!(file, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(tag: &str) -> (LoggingConfig, PathBuf) {
        let dir = std::env::temp_dir().join(format!("skillpath-journal-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = LoggingConfig {
            enabled: true,
            log_dir: dir.to_string_lossy().into_owned(),
        };
        (config, dir)
    }

    fn today_file(dir: &PathBuf) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        dir.join(format!("progress_{}.log", date))
    }

    #[test]
    fn journal_lines_use_the_configured_timestamp_format() {
        let (config, dir) = temp_config("fmt");
        let mut journal = ProgressJournal::new(&config, "%Y");
        journal.log_event(&ProgressEvent::OnboardingCompleted);

        let contents = fs::read_to_string(today_file(&dir)).unwrap();
        let year = chrono::Local::now().format("%Y").to_string();
        assert!(
            contents.starts_with(&format!("[{}] onboarding completed", year)),
            "unexpected journal line: {contents:?}"
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn disabled_journal_writes_nothing() {
        let (mut config, dir) = temp_config("off");
        config.enabled = false;
        let mut journal = ProgressJournal::new(&config, "%H:%M");
        journal.log_event(&ProgressEvent::AppReset);

        assert!(!today_file(&dir).exists());
    }
}
