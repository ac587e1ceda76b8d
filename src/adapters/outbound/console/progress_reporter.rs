use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// Uses an indicatif spinner while a dependency tree is walked, since the
/// number of modules is not known up front.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> Option<ProgressBar> {
        let mut slot = self.spinner.lock().ok()?;
        if let Some(spinner) = slot.as_ref() {
            return Some(spinner.clone());
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("   {spinner:.green} {pos} module(s) - {msg}")
        {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(spinner.clone());
        Some(spinner)
    }

    fn finish_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_module(&self, visited: usize, identity: &str) {
        if let Some(spinner) = self.get_or_create_spinner() {
            spinner.set_position(visited as u64);
            spinner.set_message(identity.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}
