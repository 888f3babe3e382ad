//! Single-candidate construction
//!
//! One raw candidate per call, no uniqueness tracking. Everything is generic
//! over `rand::Rng` so callers can pass `thread_rng()` or a seeded RNG for
//! reproducible output.

use rand::Rng;

use super::themes::WordTheme;
use super::CharsetSpec;
use crate::types::Separator;

/// Draw one adjective + noun pair joined by the separator
///
/// Independent uniform draws with replacement from each list.
pub fn adjective_noun<R: Rng + ?Sized>(
    rng: &mut R,
    theme: &WordTheme,
    separator: Separator,
) -> String {
    let adjective = theme.adjectives[rng.gen_range(0..theme.adjectives.len())];
    let noun = theme.nouns[rng.gen_range(0..theme.nouns.len())];
    format!("{}{}{}", adjective, separator.as_str(), noun)
}

/// Adjective + noun with a number from 1-999 glued onto the noun
///
/// The number never takes a separator in front of it, whatever separator the
/// words use.
pub fn adjective_noun_number<R: Rng + ?Sized>(
    rng: &mut R,
    theme: &WordTheme,
    separator: Separator,
) -> String {
    let base = adjective_noun(rng, theme, separator);
    let number: u32 = rng.gen_range(1..=999);
    format!("{}{}", base, number)
}

/// Draw `length` characters from the spec's pool, with replacement
pub fn random_chars<R: Rng + ?Sized>(rng: &mut R, spec: &CharsetSpec) -> String {
    let pool = spec.chars();
    (0..spec.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::themes;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_adjective_noun_draws_from_theme() {
        let mut rng = StdRng::seed_from_u64(7);
        let theme = themes::theme("Default").unwrap();
        for _ in 0..50 {
            let name = adjective_noun(&mut rng, theme, Separator::Hyphen);
            let (adj, noun) = name.split_once('-').unwrap();
            assert!(theme.adjectives.contains(&adj), "unexpected adjective {}", adj);
            assert!(theme.nouns.contains(&noun), "unexpected noun {}", noun);
        }
    }

    #[test]
    fn test_no_separator_concatenates() {
        // a constant RNG always picks index 0 from both lists
        let mut rng = StepRng::new(0, 0);
        let theme = themes::theme("Default").unwrap();
        assert_eq!(adjective_noun(&mut rng, theme, Separator::None), "QuickFox");
    }

    #[test]
    fn test_number_suffix_is_glued() {
        let mut rng = StdRng::seed_from_u64(42);
        let theme = themes::theme("Fantasy").unwrap();
        for _ in 0..50 {
            let name = adjective_noun_number(&mut rng, theme, Separator::Underscore);

            let suffix: String = name
                .chars()
                .rev()
                .take_while(|c| c.is_ascii_digit())
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            let number: u32 = suffix.parse().unwrap();
            assert!((1..=999).contains(&number), "number {} out of range", number);

            // exactly one separator, between the words and never before the digits
            assert_eq!(name.matches('_').count(), 1);
            let noun_part = name.split('_').nth(1).unwrap();
            assert!(noun_part.chars().next().unwrap().is_ascii_alphabetic());
        }
    }

    #[test]
    fn test_random_chars_length_and_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let spec = CharsetSpec {
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: false,
            length: 12,
        };
        let pool = spec.chars();
        for _ in 0..50 {
            let name = random_chars(&mut rng, &spec);
            assert_eq!(name.chars().count(), 12);
            assert!(name.chars().all(|c| pool.contains(&c)));
        }
    }

    #[test]
    fn test_random_chars_with_symbols() {
        let mut rng = StdRng::seed_from_u64(11);
        let spec = CharsetSpec {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            length: 24,
        };
        let pool = spec.chars();
        assert_eq!(pool.len(), 94);
        let name = random_chars(&mut rng, &spec);
        assert_eq!(name.chars().count(), 24);
        assert!(name.chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn test_nothing_selected_uses_fallback_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        let spec = CharsetSpec {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            length: 6,
        };
        let name = random_chars(&mut rng, &spec);
        assert_eq!(name.len(), 6);
        assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
