//! Search over the candidate space with scoring modes and progress events

use crate::{
    algorithm::arrangement::{Arrangement, Evaluation},
    algorithm::enumeration::{Candidate, CandidateSpace},
    algorithm::interrupt::Interrupt,
    algorithm::rules::Rule,
    io::configuration::{MAX_PLACES, PROGRESS_REPORT_INTERVAL},
    io::error::{Result, TileFitError, invalid_parameter},
    spatial::Tile,
};
use log::{debug, info};

/// How each candidate is scored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Stop checking a candidate at its first violated rule
    ///
    /// Candidates are then ranked by partial scores taken at different points
    /// of the rule list, so a candidate with a higher full score can lose to
    /// one that merely failed later. Fast, but approximate.
    EarlyAbort,
    /// Check every rule for every candidate
    #[default]
    Exhaustive,
}

impl ScoringMode {
    /// Whether rule checking stops at the first violation
    pub const fn aborts_early(self) -> bool {
        matches!(self, Self::EarlyAbort)
    }
}

/// Search parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Candidate scoring mode
    pub mode: ScoringMode,
    /// Maximum number of candidates to evaluate
    pub limit: Option<u64>,
    /// Pin tile 0 unrotated to the first place
    pub anchor_first_tile: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Exhaustive,
            limit: None,
            anchor_first_tile: true,
        }
    }
}

/// Why a search stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A candidate satisfied every rule
    Perfect,
    /// Every candidate was evaluated
    Exhausted,
    /// The candidate limit was reached first
    LimitReached,
    /// The interrupt fired first
    Interrupted,
}

impl Termination {
    /// Whether the whole space was covered or a perfect candidate found
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Perfect | Self::Exhausted)
    }
}

/// A new best candidate found during the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Improvement {
    /// Index of the candidate in the enumeration
    pub candidate_index: u64,
    /// Score used for ranking
    pub score: usize,
    /// Violations found while scoring
    pub violation_count: usize,
    /// Candidates evaluated so far, this one included
    pub evaluated: u64,
}

/// Receives search events, e.g. to drive a progress display
///
/// Every method defaults to doing nothing.
pub trait SearchObserver {
    /// Search begins with `budget` candidates at most
    fn on_start(&mut self, _budget: u64) {}

    /// `evaluated` candidates have been scored
    fn on_progress(&mut self, _evaluated: u64) {}

    /// A strictly better candidate was found
    fn on_improvement(&mut self, _improvement: &Improvement) {}

    /// Search ended
    fn on_finish(&mut self, _termination: Termination, _evaluated: u64) {}
}

/// Observer ignoring every event
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {}

/// Best arrangement found by a search
#[derive(Clone, Debug)]
pub struct SearchOutcome<'a> {
    /// Satisfied rules of the best arrangement, all rules checked
    pub score: usize,
    /// Score the search ranked the best arrangement by
    ///
    /// Equal to `score` in exhaustive mode; may be lower with early abort.
    pub ranking_score: usize,
    /// Total number of rules
    pub rule_count: usize,
    /// The best arrangement
    pub arrangement: Arrangement<'a>,
    /// Every rule the best arrangement violates
    pub violations: Vec<Rule>,
    /// Number of candidates scored
    pub candidates_evaluated: u64,
    /// Why the search stopped
    pub termination: Termination,
}

impl SearchOutcome<'_> {
    /// Whether every rule is satisfied
    pub const fn is_perfect(&self) -> bool {
        self.score == self.rule_count
    }
}

/// Exhaustive search over tile orders and rotations
///
/// Holds no state between runs; the same inputs always give the same outcome.
#[derive(Clone, Debug)]
pub struct SearchEngine<'a> {
    tiles: &'a [Tile],
    rules: &'a [Rule],
    config: SearchConfig,
    space: CandidateSpace,
}

impl<'a> SearchEngine<'a> {
    /// Prepare a search over `tiles` constrained by `rules`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no tiles, or more tiles than places
    /// - Tiles differ in size
    /// - A rule names a place without a tile
    pub fn new(tiles: &'a [Tile], rules: &'a [Rule], config: SearchConfig) -> Result<Self> {
        if tiles.is_empty() {
            return Err(invalid_parameter(
                "tiles",
                &0,
                &"at least one tile is required",
            ));
        }
        if tiles.len() > MAX_PLACES {
            return Err(invalid_parameter(
                "tiles",
                &tiles.len(),
                &format!("at most {MAX_PLACES} tiles fit the layout"),
            ));
        }

        let size = tiles.first().map_or(0, Tile::size);
        if let Some(tile) = tiles.iter().find(|tile| tile.size() != size) {
            return Err(TileFitError::DimensionMismatch {
                context: "tile size",
                expected: size,
                found: tile.size(),
            });
        }

        for rule in rules {
            if let Some(place) = rule
                .places()
                .into_iter()
                .find(|place| place.index() >= tiles.len())
            {
                return Err(invalid_parameter(
                    "rules",
                    rule,
                    &format!("place {place} has no tile"),
                ));
            }
        }

        Ok(Self {
            tiles,
            rules,
            config,
            space: CandidateSpace::new(tiles.len(), config.anchor_first_tile),
        })
    }

    /// Search parameters
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Candidates the search walks through
    pub const fn space(&self) -> &CandidateSpace {
        &self.space
    }

    /// Arrangement described by `candidate`
    pub fn arrangement(&self, candidate: &Candidate) -> Arrangement<'a> {
        Arrangement::from_order(self.tiles, &candidate.order, &candidate.rotations)
    }

    /// Run to completion without cancellation or events
    pub fn search(&self) -> SearchOutcome<'a> {
        self.run(&Interrupt::new(), &mut SilentObserver)
    }

    /// Walk the candidate space and return the best arrangement
    ///
    /// Stops at the first perfect candidate, at the candidate limit, or when
    /// `interrupt` fires; the best candidate so far is returned in all cases.
    pub fn run(
        &self,
        interrupt: &Interrupt,
        observer: &mut dyn SearchObserver,
    ) -> SearchOutcome<'a> {
        let rule_count = self.rules.len();
        let early_abort = self.config.mode.aborts_early();
        let total = self.space.len();
        observer.on_start(self.config.limit.map_or(total, |limit| limit.min(total)));

        let mut best: Option<(Arrangement<'a>, usize)> = None;
        let mut evaluated = 0_u64;
        let mut termination = Termination::Exhausted;

        for candidate in self.space.iter() {
            if interrupt.is_triggered() {
                termination = Termination::Interrupted;
                break;
            }
            if self.config.limit.is_some_and(|limit| evaluated >= limit) {
                termination = Termination::LimitReached;
                break;
            }

            let arrangement = self.arrangement(&candidate);
            let evaluation = arrangement.check(self.rules, early_abort);
            evaluated += 1;
            if evaluated.is_multiple_of(PROGRESS_REPORT_INTERVAL) {
                observer.on_progress(evaluated);
            }

            let improved = best
                .as_ref()
                .is_none_or(|(_, best_score)| evaluation.score > *best_score);
            if !improved {
                continue;
            }

            let improvement = Improvement {
                candidate_index: candidate.index,
                score: evaluation.score,
                violation_count: evaluation.violations.len(),
                evaluated,
            };
            debug!(
                "candidate {} scores {}/{rule_count} ({} violations)",
                improvement.candidate_index, improvement.score, improvement.violation_count
            );
            observer.on_improvement(&improvement);

            let perfect = evaluation.is_perfect(rule_count);
            best = Some((arrangement, evaluation.score));
            if perfect {
                termination = Termination::Perfect;
                break;
            }
        }

        observer.on_progress(evaluated);
        observer.on_finish(termination, evaluated);

        let (arrangement, ranking_score) = best.unwrap_or_else(|| self.fallback());
        let Evaluation { score, violations } = arrangement.check(self.rules, false);
        info!(
            "search stopped ({termination:?}) after {evaluated} candidates, best {score}/{rule_count}"
        );

        SearchOutcome {
            score,
            ranking_score,
            rule_count,
            arrangement,
            violations,
            candidates_evaluated: evaluated,
            termination,
        }
    }

    // Used when nothing was evaluated: the first candidate, scored in full.
    fn fallback(&self) -> (Arrangement<'a>, usize) {
        let arrangement = self
            .space
            .candidate(0)
            .map_or_else(|| Arrangement::identity(self.tiles), |c| self.arrangement(&c));
        let score = arrangement.check(self.rules, false).score;
        (arrangement, score)
    }
}
