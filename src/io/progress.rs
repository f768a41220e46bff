//! Progress display for parameter sweeps

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per generated design
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar for `steps` designs labelled with the generator name
    pub fn new(steps: usize, label: &str) -> Self {
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(SWEEP_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden(steps: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(steps as u64);
        Self { bar }
    }

    /// Show what the current step is working on
    pub fn start_step(&self, count: usize) {
        self.bar.set_message(format!("count {count}"));
    }

    /// Mark the current step as complete
    pub fn complete_step(&self) {
        self.bar.inc(1);
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
