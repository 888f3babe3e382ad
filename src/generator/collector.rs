//! Unique batch collection - drive generation until enough unique names

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use super::candidate;
use super::themes::{self, WordTheme};
use super::{apply_case, CharsetSpec};
use crate::config_error;
use crate::error::Result;
use crate::types::{BatchRequest, BatchResult, CaseRule, GenerationMethod, Separator, StopReason};

/// A batch may use at most `count * 15` generation attempts
pub const ATTEMPT_MULTIPLIER: u64 = 15;

/// Fixed wall-clock budget for one batch run
pub const TIME_LIMIT: Duration = Duration::from_secs(10);

/// Collection progress info, reported once per attempt
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub attempts: u64,
    pub max_attempts: u64,
    pub unique: usize,
    pub target: usize,
    pub elapsed: Duration,
}

/// Resolved generation source
///
/// Method parameters are bound once at construction: theme lookup and charset
/// assembly happen here, not per draw.
pub(super) enum CandidateSource {
    Words {
        theme: &'static WordTheme,
        separator: Separator,
        number: bool,
    },
    Random(CharsetSpec),
}

impl CandidateSource {
    pub(super) fn from_request(request: &BatchRequest) -> Result<Self> {
        match request.method {
            GenerationMethod::AdjectiveNoun | GenerationMethod::AdjectiveNounNumber => {
                let theme = themes::theme(&request.theme).ok_or_else(|| {
                    config_error!(
                        "unknown theme '{}', expected one of: {}",
                        request.theme,
                        themes::theme_names().join(", ")
                    )
                })?;
                Ok(Self::Words {
                    theme,
                    separator: request.separator,
                    number: request.method == GenerationMethod::AdjectiveNounNumber,
                })
            }
            GenerationMethod::RandomChars => Ok(Self::Random(request.charset)),
        }
    }

    pub(super) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            CandidateSource::Words {
                theme,
                separator,
                number: false,
            } => candidate::adjective_noun(rng, theme, *separator),
            CandidateSource::Words {
                theme,
                separator,
                number: true,
            } => candidate::adjective_noun_number(rng, theme, *separator),
            CandidateSource::Random(spec) => candidate::random_chars(rng, spec),
        }
    }
}

/// Unique batch collector
///
/// Repeatedly draws candidates, applies the case rule, deduplicates, and stops
/// at the target count, the attempt cap, or the time cap. Falling short is
/// partial success reported through [`StopReason`], never an error.
pub struct BatchCollector {
    source: CandidateSource,
    case_rule: CaseRule,
    target: usize,
    max_attempts: u64,
    time_limit: Duration,
}

impl BatchCollector {
    /// Create a collector with the fixed attempt and time policy
    pub fn new(request: &BatchRequest) -> Result<Self> {
        // saturate so an out-of-range count reaches validation instead of
        // overflowing the cap first
        let max_attempts = (request.count as u64).saturating_mul(ATTEMPT_MULTIPLIER);
        Self::with_limits(request, max_attempts, TIME_LIMIT)
    }

    /// Create a collector with explicit caps
    pub fn with_limits(
        request: &BatchRequest,
        max_attempts: u64,
        time_limit: Duration,
    ) -> Result<Self> {
        request.validate()?;
        let source = CandidateSource::from_request(request)?;

        Ok(Self {
            source,
            case_rule: request.case_rule,
            target: request.count,
            max_attempts,
            time_limit,
        })
    }

    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Run the collection loop to a terminal state
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> BatchResult {
        self.run_with_progress(rng, |_| {})
    }

    /// Run the collection loop, reporting progress after every attempt
    pub fn run_with_progress<R, F>(&self, rng: &mut R, on_progress: F) -> BatchResult
    where
        R: Rng + ?Sized,
        F: Fn(&BatchProgress),
    {
        let started = Instant::now();
        let mut seen = HashSet::new();
        let mut usernames = Vec::new();
        let mut attempts = 0u64;

        let stop_reason = loop {
            attempts += 1;
            let name = apply_case(&self.source.draw(rng), self.case_rule);
            if seen.insert(name.clone()) {
                usernames.push(name);
            }

            on_progress(&BatchProgress {
                attempts,
                max_attempts: self.max_attempts,
                unique: usernames.len(),
                target: self.target,
                elapsed: started.elapsed(),
            });

            // stop checks in fixed order: attempt cap, time cap, target
            if attempts >= self.max_attempts {
                break StopReason::AttemptCap;
            }
            if started.elapsed() >= self.time_limit {
                break StopReason::TimeCap;
            }
            if usernames.len() >= self.target {
                break StopReason::Complete;
            }
        };

        let elapsed = started.elapsed();
        let result = BatchResult {
            usernames,
            requested: self.target,
            attempts,
            stop_reason,
            elapsed,
            generated_at: Utc::now(),
        };

        if result.target_met() {
            info!(
                unique = result.usernames.len(),
                attempts = result.attempts,
                stop_reason = %result.stop_reason,
                elapsed_ms = elapsed.as_millis() as u64,
                "batch complete"
            );
        } else {
            warn!(
                unique = result.usernames.len(),
                requested = result.requested,
                attempts = result.attempts,
                stop_reason = %result.stop_reason,
                elapsed_ms = elapsed.as_millis() as u64,
                "batch stopped short of target"
            );
        }

        result
    }
}
