//! Search progress display driven by search events

use crate::algorithm::executor::{Improvement, SearchObserver, Termination};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the candidate budget, showing the best score so far
pub struct ProgressManager {
    bar: ProgressBar,
    rule_count: usize,
    best_score: Option<usize>,
    improvements: usize,
}

impl ProgressManager {
    /// Progress bar drawn to stderr
    pub fn new(rule_count: usize) -> Self {
        Self::with_bar(ProgressBar::new(0), rule_count)
    }

    /// Progress tracking without any terminal output
    pub fn hidden(rule_count: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), rule_count)
    }

    fn with_bar(bar: ProgressBar, rule_count: usize) -> Self {
        bar.set_style(PROGRESS_STYLE.clone());
        Self {
            bar,
            rule_count,
            best_score: None,
            improvements: 0,
        }
    }

    /// Candidates scored so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Candidate budget
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Best score reported so far
    pub const fn best_score(&self) -> Option<usize> {
        self.best_score
    }

    /// Number of improvements reported
    pub const fn improvements(&self) -> usize {
        self.improvements
    }

    /// Whether the bar has been finished
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl SearchObserver for ProgressManager {
    fn on_start(&mut self, budget: u64) {
        self.bar.set_length(budget);
        self.bar.set_position(0);
        self.bar.set_message(format!("best -/{}", self.rule_count));
    }

    fn on_progress(&mut self, evaluated: u64) {
        self.bar.set_position(evaluated);
    }

    fn on_improvement(&mut self, improvement: &Improvement) {
        self.best_score = Some(improvement.score);
        self.improvements += 1;
        self.bar.set_position(improvement.evaluated);
        self.bar
            .set_message(format!("best {}/{}", improvement.score, self.rule_count));
    }

    fn on_finish(&mut self, termination: Termination, evaluated: u64) {
        self.bar.set_position(evaluated);
        let best = self
            .best_score
            .map_or_else(|| "-".to_string(), |score| score.to_string());
        self.bar.finish_with_message(format!(
            "best {best}/{} ({termination:?})",
            self.rule_count
        ));
    }
}
