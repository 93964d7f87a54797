//! Progress reporting while a debate submission is outstanding

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use janus_application::SubmitProgress;
use janus_domain::{DebateOutcome, PlatformCatalog, PlatformId};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the selected platforms are "thinking"
pub struct ProgressReporter {
    catalog: PlatformCatalog,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(catalog: PlatformCatalog) -> Self {
        Self {
            catalog,
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// "ChatGPT, Claude and Gemini are thinking..."
    fn thinking_message(&self, platforms: &[PlatformId]) -> String {
        let names: Vec<&str> = platforms
            .iter()
            .map(|id| self.catalog.display_name(id))
            .collect();
        let who = match names.as_slice() {
            [] => return "Thinking...".to_string(),
            [one] => return format!("{} is thinking...", one),
            [init @ .., last] => format!("{} and {}", init.join(", "), last),
        };
        format!("{} are thinking...", who)
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut s| s.take())
    }
}

impl SubmitProgress for ProgressReporter {
    fn on_submit_start(&self, platforms: &[PlatformId]) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(self.thinking_message(platforms));
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_submit_complete(&self, outcome: &DebateOutcome) {
        if let Some(pb) = self.take_spinner() {
            let summary = if outcome.is_degraded() {
                format!("{} simulated responses (backend unavailable)", outcome.responses.len())
                    .yellow()
                    .to_string()
            } else {
                format!(
                    "{} responses ({} live)",
                    outcome.responses.len(),
                    outcome.live_count()
                )
                .green()
                .to_string()
            };
            pb.finish_with_message(summary);
        }
    }

    fn on_submit_failed(&self, message: &str) {
        if let Some(pb) = self.take_spinner() {
            pb.abandon_with_message(format!("{} {}", "x".red(), message));
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl SubmitProgress for SimpleProgress {
    fn on_submit_start(&self, platforms: &[PlatformId]) {
        let ids: Vec<&str> = platforms.iter().map(|p| p.as_str()).collect();
        println!("{} Asking {}", "->".cyan(), ids.join(", ").bold());
    }

    fn on_submit_complete(&self, outcome: &DebateOutcome) {
        println!(
            "  {} {} responses ({} live)",
            "v".green(),
            outcome.responses.len(),
            outcome.live_count()
        );
    }

    fn on_submit_failed(&self, message: &str) {
        println!("  {} {}", "x".red(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_message() {
        let reporter = ProgressReporter::new(PlatformCatalog::builtin());
        let ids = |v: &[&str]| v.iter().map(|s| PlatformId::new(s)).collect::<Vec<_>>();

        assert_eq!(
            reporter.thinking_message(&ids(&["chatgpt", "claude", "gemini"])),
            "ChatGPT, Claude and Gemini are thinking..."
        );
        assert_eq!(
            reporter.thinking_message(&ids(&["grok"])),
            "Grok is thinking..."
        );
        assert_eq!(reporter.thinking_message(&[]), "Thinking...");
    }
}
