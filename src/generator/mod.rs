//! Username generation engine - themed word pairs and random characters
//!
//! Three methods: adjective + noun, adjective + noun + number, random
//! characters from a configurable pool. Uniqueness within a batch is the
//! collector's job; single draws are stateless.

mod candidate;
mod casing;
mod collector;
pub mod themes;

pub use casing::apply_case;
pub use collector::{BatchCollector, BatchProgress};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BatchRequest, BatchResult};
use self::collector::CandidateSource;

/// Shortest random-characters username
pub const MIN_LENGTH: usize = 4;

/// Longest random-characters username
pub const MAX_LENGTH: usize = 24;

/// Lowercase letter class (a-z)
pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Uppercase letter class (A-Z)
pub const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Digit class (0-9)
pub const DIGITS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Symbol class - the 32 ASCII punctuation characters
pub const SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-',
    '.', '/', ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^',
    '_', '`', '{', '|', '}', '~',
];

/// Character pool for random-character generation
///
/// Class toggles are independent and the assembled pool keeps a fixed order:
/// lowercase, uppercase, digits, symbols. Selecting no class at all is not an
/// error - the pool falls back to lowercase + digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetSpec {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Output length in characters
    pub length: usize,
}

impl Default for CharsetSpec {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            length: 10,
        }
    }
}

impl CharsetSpec {
    /// Assemble the character pool, applying the empty-selection fallback
    pub fn chars(&self) -> Vec<char> {
        let mut pool = Vec::new();
        if self.lowercase {
            pool.extend_from_slice(LOWERCASE);
        }
        if self.uppercase {
            pool.extend_from_slice(UPPERCASE);
        }
        if self.digits {
            pool.extend_from_slice(DIGITS);
        }
        if self.symbols {
            pool.extend_from_slice(SYMBOLS);
        }

        if pool.is_empty() {
            pool.extend_from_slice(LOWERCASE);
            pool.extend_from_slice(DIGITS);
        }

        pool
    }

    /// True when every class toggle is off and the fallback pool applies
    pub fn is_empty_selection(&self) -> bool {
        !(self.lowercase || self.uppercase || self.digits || self.symbols)
    }

    pub fn pool_size(&self) -> usize {
        self.chars().len()
    }

    /// Distinct strings this pool can produce at the configured length
    pub fn total_combinations(&self) -> u128 {
        (self.pool_size() as u128)
            .checked_pow(self.length as u32)
            .unwrap_or(u128::MAX)
    }
}

/// Generate a single raw candidate for the request
///
/// Validates the request first. No case transform and no uniqueness tracking:
/// this is one draw from the request's candidate space.
pub fn generate_one(request: &BatchRequest) -> Result<String> {
    request.validate()?;
    let source = CandidateSource::from_request(request)?;
    Ok(source.draw(&mut rand::thread_rng()))
}

/// Run a full batch under the fixed attempt and time policy
pub fn generate_batch(request: &BatchRequest) -> Result<BatchResult> {
    Ok(BatchCollector::new(request)?.run(&mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_charset_pool() {
        let spec = CharsetSpec::default();
        assert!(spec.lowercase && spec.uppercase && spec.digits);
        assert!(!spec.symbols);
        assert_eq!(spec.length, 10);
        // 26 + 26 + 10
        assert_eq!(spec.pool_size(), 62);
    }

    #[test]
    fn test_pool_keeps_class_order() {
        let spec = CharsetSpec {
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: false,
            length: 8,
        };
        let pool = spec.chars();
        assert_eq!(pool.len(), 36);
        assert_eq!(pool[0], 'a');
        assert_eq!(pool[25], 'z');
        assert_eq!(pool[26], '0');
        assert_eq!(pool[35], '9');
    }

    #[test]
    fn test_empty_selection_falls_back() {
        let spec = CharsetSpec {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            length: 6,
        };
        assert!(spec.is_empty_selection());

        let pool = spec.chars();
        assert_eq!(pool.len(), 36);
        assert!(pool.iter().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_symbol_class_is_ascii_punctuation() {
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_total_combinations() {
        let spec = CharsetSpec {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
            length: 4,
        };
        assert_eq!(spec.total_combinations(), 26u128.pow(4));

        // 94-char pool at max length saturates instead of overflowing
        let huge = CharsetSpec {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            length: MAX_LENGTH,
        };
        assert_eq!(huge.total_combinations(), u128::MAX);
    }
}
