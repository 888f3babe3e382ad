//! Core types and structures for alias-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config_error;
use crate::error::Result;
use crate::generator::themes;
use crate::generator::{CharsetSpec, MAX_LENGTH, MIN_LENGTH};

/// Smallest batch a request may ask for
pub const MIN_COUNT: usize = 1;

/// Largest batch a request may ask for
pub const MAX_COUNT: usize = 100;

/// Username generation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    AdjectiveNoun,
    AdjectiveNounNumber,
    RandomChars,
}

impl GenerationMethod {
    /// Word-based methods draw from a theme and honor the separator;
    /// `RandomChars` ignores both.
    pub fn is_word_based(&self) -> bool {
        matches!(self, Self::AdjectiveNoun | Self::AdjectiveNounNumber)
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMethod::AdjectiveNoun => write!(f, "adjective + noun"),
            GenerationMethod::AdjectiveNounNumber => write!(f, "adjective + noun + number"),
            GenerationMethod::RandomChars => write!(f, "random characters"),
        }
    }
}

/// Separator placed between the adjective and the noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    None,
    Underscore,
    Hyphen,
    Dot,
}

impl Separator {
    /// The literal text inserted between words
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Underscore => "_",
            Separator::Hyphen => "-",
            Separator::Dot => ".",
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Separator::None => write!(f, "none"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Capitalization applied to every candidate after generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseRule {
    Lowercase,
    Uppercase,
    /// Capitalize each run between separator characters independently
    TitleCase,
    /// Keep the candidate exactly as generated
    Original,
}

impl std::fmt::Display for CaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseRule::Lowercase => write!(f, "lowercase"),
            CaseRule::Uppercase => write!(f, "UPPERCASE"),
            CaseRule::TitleCase => write!(f, "TitleCase"),
            CaseRule::Original => write!(f, "Original"),
        }
    }
}

/// Which terminal state ended a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Collected the requested number of unique usernames
    Complete,
    /// Hit the derived attempt cap before the target
    AttemptCap,
    /// Hit the wall-clock budget before the target
    TimeCap,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Complete => write!(f, "complete"),
            StopReason::AttemptCap => write!(f, "attempt cap"),
            StopReason::TimeCap => write!(f, "time cap"),
        }
    }
}

/// Configuration for one batch of usernames
///
/// Flat on purpose: the method decides which fields are consumed, the rest are
/// carried along untouched (a word-based request never reads `charset`, a
/// random-chars request never reads `theme` or `separator`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub method: GenerationMethod,
    pub count: usize,
    pub theme: String,
    pub separator: Separator,
    pub case_rule: CaseRule,
    pub charset: CharsetSpec,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            method: GenerationMethod::AdjectiveNoun,
            count: 10,
            theme: "Default".to_string(),
            separator: Separator::None,
            case_rule: CaseRule::TitleCase,
            charset: CharsetSpec::default(),
        }
    }
}

impl BatchRequest {
    /// Check the request bounds before any generation work
    ///
    /// Only the parameter subset the method consumes is validated; a word-based
    /// request with an out-of-range `charset.length` is still valid.
    pub fn validate(&self) -> Result<()> {
        if self.count < MIN_COUNT || self.count > MAX_COUNT {
            return Err(config_error!(
                "target count must be between {} and {}, got {}",
                MIN_COUNT,
                MAX_COUNT,
                self.count
            ));
        }

        if self.method.is_word_based() {
            if themes::theme(&self.theme).is_none() {
                return Err(config_error!(
                    "unknown theme '{}', expected one of: {}",
                    self.theme,
                    themes::theme_names().join(", ")
                ));
            }
        } else if self.charset.length < MIN_LENGTH || self.charset.length > MAX_LENGTH {
            return Err(config_error!(
                "username length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                self.charset.length
            ));
        }

        Ok(())
    }
}

/// Outcome of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Unique usernames in discovery order
    pub usernames: Vec<String>,
    /// How many the request asked for
    pub requested: usize,
    /// Generation attempts consumed (collisions included)
    pub attempts: u64,
    /// Terminal state that ended the run
    pub stop_reason: StopReason,
    /// Wall time the run took
    pub elapsed: Duration,
    pub generated_at: DateTime<Utc>,
}

impl BatchResult {
    /// Whether the requested count was reached
    ///
    /// Derived from the counts rather than the stop reason: a batch that finds
    /// its last unique name on the final allowed attempt stops with
    /// [`StopReason::AttemptCap`] but still met its target.
    pub fn target_met(&self) -> bool {
        self.usernames.len() >= self.requested
    }

    /// How many usernames short of the target the run fell
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.usernames.len())
    }

    /// Plain-text serialization: one username per line
    pub fn to_text(&self) -> String {
        self.usernames.join("\n")
    }
}
