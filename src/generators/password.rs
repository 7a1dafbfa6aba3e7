// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::models::GenerationOptions;

/// Fixed class alphabets, in canonical order.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?/~";

fn pick<R: Rng>(rng: &mut R, alphabet: &[u8]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}

/// Generate a password from an explicit random source.
///
/// The pool concatenates enabled classes in canonical order (uppercase,
/// lowercase, digits, symbols). With no class enabled the result is empty.
/// One character per enabled class is then drawn from that class's own
/// alphabet and overwrites the leading positions, so every enabled class
/// is represented in the output. When more classes are enabled than the
/// requested length, the result is the guaranteed characters themselves,
/// i.e. the output length is max(length, enabled classes).
pub fn generate_with_rng<R: Rng>(options: &GenerationOptions, rng: &mut R) -> String {
    let mut pool = Vec::new();
    if options.include_uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if options.include_lowercase {
        pool.extend_from_slice(LOWERCASE);
    }
    if options.include_digits {
        pool.extend_from_slice(DIGITS);
    }
    if options.include_symbols {
        pool.extend_from_slice(SYMBOLS);
    }

    if pool.is_empty() {
        return String::new();
    }

    let dist = Uniform::from(0..pool.len());
    let body: String = (0..options.length)
        .map(|_| pool[dist.sample(rng)] as char)
        .collect();

    // One guaranteed character per enabled class, canonical order.
    let mut guaranteed = String::new();
    if options.include_uppercase {
        guaranteed.push(pick(rng, UPPERCASE));
    }
    if options.include_lowercase {
        guaranteed.push(pick(rng, LOWERCASE));
    }
    if options.include_digits {
        guaranteed.push(pick(rng, DIGITS));
    }
    if options.include_symbols {
        guaranteed.push(pick(rng, SYMBOLS));
    }

    let rest: String = body.chars().skip(guaranteed.len()).collect();
    guaranteed + &rest
}

/// Generate a password with the thread-local RNG.
pub fn generate(options: &GenerationOptions) -> String {
    generate_with_rng(options, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn opts(
        length: usize,
        upper: bool,
        lower: bool,
        digits: bool,
        symbols: bool,
    ) -> GenerationOptions {
        GenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_symbols: symbols,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn no_enabled_classes_yields_empty_string() {
        let result = generate_with_rng(&opts(16, false, false, false, false), &mut rng());
        assert!(result.is_empty());
    }

    #[test]
    fn single_class_output_stays_inside_its_alphabet() {
        let result = generate_with_rng(&opts(32, false, false, true, false), &mut rng());
        assert_eq!(result.len(), 32);
        assert!(result.bytes().all(|b| DIGITS.contains(&b)));
    }

    #[test]
    fn every_enabled_class_is_represented() {
        let result = generate_with_rng(&opts(16, true, true, true, true), &mut rng());
        assert_eq!(result.len(), 16);
        assert!(result.bytes().any(|b| UPPERCASE.contains(&b)));
        assert!(result.bytes().any(|b| LOWERCASE.contains(&b)));
        assert!(result.bytes().any(|b| DIGITS.contains(&b)));
        assert!(result.bytes().any(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn guaranteed_prefix_follows_canonical_order() {
        let result = generate_with_rng(&opts(16, true, true, true, true), &mut rng());
        let bytes = result.as_bytes();
        assert!(UPPERCASE.contains(&bytes[0]));
        assert!(LOWERCASE.contains(&bytes[1]));
        assert!(DIGITS.contains(&bytes[2]));
        assert!(SYMBOLS.contains(&bytes[3]));
    }

    #[test]
    fn length_never_exceeds_max_of_length_and_classes() {
        // four classes, requested length below the class count
        let result = generate_with_rng(&opts(2, true, true, true, true), &mut rng());
        assert_eq!(result.len(), 4);

        let result = generate_with_rng(&opts(20, true, true, true, true), &mut rng());
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn zero_length_yields_only_guaranteed_characters() {
        let result = generate_with_rng(&opts(0, true, false, true, false), &mut rng());
        assert_eq!(result.len(), 2);
        assert!(UPPERCASE.contains(&result.as_bytes()[0]));
        assert!(DIGITS.contains(&result.as_bytes()[1]));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let options = opts(24, true, true, true, true);
        let first = generate_with_rng(&options, &mut ChaCha8Rng::seed_from_u64(42));
        let second = generate_with_rng(&options, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn thread_rng_output_stays_in_pool_at_requested_length() {
        let options = opts(14, true, true, false, false);
        let result = generate(&options);
        assert_eq!(result.len(), 14);
        assert!(result
            .bytes()
            .all(|b| UPPERCASE.contains(&b) || LOWERCASE.contains(&b)));
    }
}
