//! Digit sources for candidate generation.
//!
//! Production uses `rand`'s `SmallRng` (xoshiro256++), which is fast and
//! works with WASM; entropy comes from `getrandom` (browser crypto API).
//! Tests swap in a seeded RNG or a scripted digit sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed decimal digits.
pub trait DigitSource {
    /// Next digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

/// A seedable RNG producing digits.
///
/// Can be seeded for deterministic replay, or created from system entropy.
pub struct DigitRng {
    inner: SmallRng,
}

impl DigitRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy-backed otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::from_seed)
    }
}

impl Default for DigitRng {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitSource for DigitRng {
    #[inline(always)]
    fn next_digit(&mut self) -> u8 {
        self.inner.random_range(0..10)
    }
}

/// Replays a fixed digit script, cycling when it runs out.
///
/// Values are reduced mod 10; an empty script yields zeros.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDigits {
    digits: Vec<u8>,
    index: usize,
}

impl ScriptedDigits {
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        Self {
            digits: digits.into(),
            index: 0,
        }
    }

    /// Script taken from the ASCII digits of `s`; other characters are skipped.
    pub fn from_str_digits(s: &str) -> Self {
        Self::new(
            s.bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect::<Vec<_>>(),
        )
    }

    /// How many digits have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> u8 {
        if self.digits.is_empty() {
            return 0;
        }
        let d = self.digits[self.index % self.digits.len()] % 10;
        self.index += 1;
        d
    }
}

/// A string of `len` digits drawn from `source`.
pub fn random_digits<R: DigitSource + ?Sized>(source: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + source.next_digit()))
        .collect()
}
