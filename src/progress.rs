//! Spinner display for network probes

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while candidate sources are probed
pub struct ProbeSpinner {
    spinner: ProgressBar,
}

impl ProbeSpinner {
    pub fn new(package: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(format!("Probing sources for '{}'...", package));
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner }
    }

    /// Clear the spinner line, leaving the terminal clean for the prompt
    pub fn finish(self) {
        self.spinner.finish_and_clear();
    }
}
