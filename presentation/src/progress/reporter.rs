//! Progress reporting for triage calls

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use triage_application::{NoProgress, TriageProgressNotifier};
use triage_domain::TriagePhase;

/// Reports progress with a spinner while the provider call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageProgressNotifier for ProgressReporter {
    fn on_phase_change(&self, phase: TriagePhase, provider: &str) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };

        match phase {
            TriagePhase::Idle => {}
            TriagePhase::InFlight => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(format!("Asking {}...", provider.bold()));
                pb.enable_steady_tick(Duration::from_millis(100));
                *slot = Some(pb);
            }
            TriagePhase::Completed => {
                if let Some(pb) = slot.take() {
                    pb.finish_and_clear();
                }
            }
            TriagePhase::Failed => {
                if let Some(pb) = slot.take() {
                    pb.abandon_with_message(format!("{} {} did not answer", "x".red(), provider));
                }
            }
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr.
///
/// Used when stderr is redirected, where a spinner would litter the log
/// with carriage returns.
pub struct SimpleProgress;

impl SimpleProgress {
    fn line(phase: TriagePhase, provider: &str) -> Option<String> {
        match phase {
            TriagePhase::Idle => None,
            TriagePhase::InFlight => Some(format!("{} Asking {}...", "->".cyan(), provider.bold())),
            TriagePhase::Completed => Some(format!("  {} {}", "v".green(), provider)),
            TriagePhase::Failed => Some(format!("  {} {} (failed)", "x".red(), provider)),
        }
    }
}

impl TriageProgressNotifier for SimpleProgress {
    fn on_phase_change(&self, phase: TriagePhase, provider: &str) {
        if let Some(line) = Self::line(phase, provider) {
            eprintln!("{}", line);
        }
    }
}

/// Which progress display a run gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// `--quiet`: nothing.
    Hidden,
    /// Interactive stderr: animated spinner.
    Spinner,
    /// Redirected stderr: one plain line per phase.
    Lines,
}

impl ProgressMode {
    pub fn detect(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => Self::Hidden,
            (false, true) => Self::Spinner,
            (false, false) => Self::Lines,
        }
    }

    pub fn notifier(self) -> Arc<dyn TriageProgressNotifier> {
        match self {
            Self::Hidden => Arc::new(NoProgress),
            Self::Spinner => Arc::new(ProgressReporter::new()),
            Self::Lines => Arc::new(SimpleProgress),
        }
    }
}
