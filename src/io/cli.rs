//! Command-line interface for solving a tile puzzle

use crate::algorithm::executor::{
    ScoringMode, SearchConfig, SearchOutcome, SilentObserver, Termination,
};
use crate::algorithm::interrupt::Interrupt;
use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_LOG_LEVEL};
use crate::io::error::Result;
use crate::io::image::export_layout_png;
use crate::io::logging::init_logging;
use crate::io::progress::ProgressManager;
use crate::io::puzzle::Puzzle;
use clap::Parser;
use log::{LevelFilter, info};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "tilefit")]
#[command(
    author,
    version,
    about = "Find the tile arrangement satisfying the most edge rules"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle file to solve (the bundled puzzle when omitted)
    #[arg(value_name = "PUZZLE")]
    pub puzzle: Option<PathBuf>,

    /// Maximum number of candidates to evaluate
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Stop checking a candidate at its first violated rule (faster, approximate)
    #[arg(short, long)]
    pub early_abort: bool,

    /// Do not pin the first tile to place A
    #[arg(long)]
    pub no_anchor: bool,

    /// Give up after this many seconds and report the best so far
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Also write the solved layout as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Pixel size of one character cell in the PNG image
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value_t = DEFAULT_LOG_LEVEL)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Search parameters selected by the flags
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            mode: if self.early_abort {
                ScoringMode::EarlyAbort
            } else {
                ScoringMode::Exhaustive
            },
            limit: self.limit,
            anchor_first_tile: !self.no_anchor,
        }
    }

    /// Cancellation signal honouring `--timeout`
    pub fn interrupt(&self) -> Interrupt {
        self.timeout.map_or_else(Interrupt::new, |seconds| {
            Interrupt::new().with_timeout(Duration::from_secs(seconds))
        })
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads the requested puzzle, solves it and reports the result
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Install logging, then solve and print
    ///
    /// # Errors
    ///
    /// Returns an error if logging cannot be installed, or if solving fails
    /// (see [`PuzzleRunner::process`]).
    pub fn run(&self) -> Result<()> {
        init_logging(self.cli.log_level)?;
        self.process()
    }

    /// Solve the puzzle and print the report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle cannot be loaded or parsed, the engine
    /// rejects it, or PNG export fails.
    pub fn process(&self) -> Result<()> {
        let puzzle = self.load_puzzle()?;
        let report = self.solve(&puzzle)?;

        // Allow print for the solver's primary output
        #[allow(clippy::print_stdout)]
        {
            println!("{report}");
        }
        Ok(())
    }

    /// Solve `puzzle` and return the printable report
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the puzzle or PNG export fails.
    pub fn solve(&self, puzzle: &Puzzle) -> Result<String> {
        let engine = puzzle.engine(self.cli.search_config())?;
        info!(
            "searching {} candidates for {} tiles and {} rules",
            engine.space().len(),
            puzzle.tiles().len(),
            puzzle.rules().len()
        );

        let interrupt = self.cli.interrupt();
        let outcome = if self.cli.should_show_progress() {
            let mut progress = ProgressManager::new(puzzle.rules().len());
            engine.run(&interrupt, &mut progress)
        } else {
            engine.run(&interrupt, &mut SilentObserver)
        };

        if let Some(path) = &self.cli.png {
            export_layout_png(
                &outcome.arrangement,
                puzzle.layout(),
                self.cli.cell_size,
                path,
            )?;
            info!("layout image written to {}", path.display());
        }

        Ok(format_report(puzzle, &outcome))
    }

    fn load_puzzle(&self) -> Result<Puzzle> {
        self.cli
            .puzzle
            .as_deref()
            .map_or_else(Puzzle::bundled, Puzzle::from_path)
    }
}

/// Dump, score line and violated rules of a search outcome
pub fn format_report(puzzle: &Puzzle, outcome: &SearchOutcome<'_>) -> String {
    let mut report = outcome.arrangement.dump(puzzle.layout());
    report.push_str(&format!(
        "\nscore {}/{} after {} candidates ({})",
        outcome.score,
        outcome.rule_count,
        outcome.candidates_evaluated,
        termination_label(outcome)
    ));
    if !outcome.violations.is_empty() {
        let violated: Vec<String> = outcome.violations.iter().map(ToString::to_string).collect();
        report.push_str(&format!("\nviolated: {}", violated.join(" ")));
    }
    report
}

const fn termination_label(outcome: &SearchOutcome<'_>) -> &'static str {
    match outcome.termination {
        Termination::Perfect => "all rules satisfied",
        Termination::Exhausted => "search exhausted",
        Termination::LimitReached => "candidate limit reached, best so far",
        Termination::Interrupted => "interrupted, best so far",
    }
}
