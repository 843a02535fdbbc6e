//! Random valid number generation.
//!
//! Candidates keep the first three digits of the oracle's example number
//! and fill the rest with random digits. Numbering plans allocate ranges by
//! prefix, so most completions land in a valid range and the rejection loop
//! usually accepts within a handful of attempts. The loop is still capped by
//! `GeneratorConfig::max_attempts`.

use tracing::{debug, trace, warn};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::oracle::NumberingOracle;
use crate::rng::{random_digits, DigitRng, DigitSource};
use crate::types::{NumberType, PhoneNumberCandidate, Region};

/// Leading digits copied verbatim from the example number.
pub const PREFIX_LEN: usize = 3;

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub candidate: PhoneNumberCandidate,
    /// The type that was requested (not the inferred one, which may be the wildcard).
    pub number_type: NumberType,
    /// How many candidates were tried, including the accepted one.
    pub attempts: u32,
}

/// Produces valid example numbers by random search against an oracle.
pub struct RandomValidNumberGenerator<O> {
    oracle: O,
    config: GeneratorConfig,
}

impl<O: NumberingOracle> RandomValidNumberGenerator<O> {
    pub fn new(oracle: O, config: GeneratorConfig) -> Self {
        Self { oracle, config }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A fresh digit source honouring `config.seed`.
    pub fn digit_source(&self) -> DigitRng {
        DigitRng::from_optional_seed(self.config.seed)
    }

    /// Generate one valid number of `number_type` in `region`.
    ///
    /// `Ok(None)` when the oracle has no example for the pair, which is a
    /// normal outcome (e.g. regions without mobile numbering).
    pub fn generate(
        &self,
        number_type: NumberType,
        region: &Region,
    ) -> GenerateResult<Option<PhoneNumberCandidate>> {
        let mut rng = self.digit_source();
        Ok(self
            .generate_with(number_type, region, &mut rng)?
            .map(|generated| generated.candidate))
    }

    /// Same as [`generate`](Self::generate), drawing digits from `source`.
    pub fn generate_with<R: DigitSource + ?Sized>(
        &self,
        number_type: NumberType,
        region: &Region,
        source: &mut R,
    ) -> GenerateResult<Option<Generated>> {
        let Some(example) = self.oracle.example_number(number_type, region) else {
            debug!(%region, %number_type, "no example number");
            return Ok(None);
        };

        let (Some(prefix), Some(remaining_len)) =
            (example.prefix(PREFIX_LEN), example.remaining_len(PREFIX_LEN))
        else {
            warn!(
                %region,
                %number_type,
                example = %example.national_number,
                "example number shorter than the fixed prefix"
            );
            return Ok(None);
        };

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;

            let mut national_number = String::with_capacity(example.len());
            national_number.push_str(prefix);
            national_number.push_str(&random_digits(&mut *source, remaining_len));
            let candidate = PhoneNumberCandidate::new(example.country_code.clone(), national_number);

            match self.oracle.validate(&candidate, region) {
                Err(reason) => {
                    trace!(%region, %candidate, %reason, "candidate rejected");
                }
                Ok(()) => {
                    let inferred = self.oracle.infer_type(&candidate);
                    if inferred.matches(number_type) {
                        debug!(%region, %number_type, %candidate, attempts, "candidate accepted");
                        return Ok(Some(Generated {
                            candidate,
                            number_type,
                            attempts,
                        }));
                    }
                    trace!(%region, %candidate, %inferred, "candidate has wrong type");
                }
            }

            if attempts >= self.config.max_attempts {
                warn!(%region, %number_type, attempts, "search exhausted");
                return Err(GenerateError::SearchExhausted {
                    region: region.clone(),
                    number_type,
                    attempts,
                });
            }
        }
    }

    /// Try `preferred` types in order; the first one with an example wins.
    ///
    /// Some regions have no mobile numbering, so callers typically pass
    /// `[MOBILE, FIXED_LINE]`.
    pub fn generate_preferred<R: DigitSource + ?Sized>(
        &self,
        preferred: &[NumberType],
        region: &Region,
        source: &mut R,
    ) -> GenerateResult<Option<Generated>> {
        for &number_type in preferred {
            if let Some(generated) = self.generate_with(number_type, region, &mut *source)? {
                return Ok(Some(generated));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{NumberingRule, StaticOracle};
    use crate::rng::ScriptedDigits;

    fn config(max_attempts: u32) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts,
            seed: None,
        }
    }

    /// US: 201 + 7 digits, the fourth digit must not be 0 or 1.
    /// TA: fixed line only, four digits starting with 8.
    /// XS: example too short for the prefix. XT: mobile range overlapping a fixed-line one.
    fn plan() -> StaticOracle {
        let mut oracle = StaticOracle::new()
            .with_region("US", "1")
            .with_region("TA", "290")
            .with_region("XS", "999")
            .with_region("XT", "998")
            .with_rule(
                "TA",
                NumberingRule::new(NumberType::FixedLine, "8", 4).with_example("8999"),
            )
            .with_rule("XS", NumberingRule::new(NumberType::Mobile, "1", 2).with_example("12"))
            .with_rule("XT", NumberingRule::new(NumberType::FixedLine, "7771", 5))
            .with_rule(
                "XT",
                NumberingRule::new(NumberType::Mobile, "777", 5).with_example("77712"),
            );
        for d in 2..=9 {
            oracle = oracle.with_rule(
                "US",
                NumberingRule::new(NumberType::FixedLineOrMobile, format!("201{d}"), 10),
            );
        }
        oracle
            .with_rule(
                "US",
                NumberingRule::new(NumberType::FixedLine, "2015", 10).with_example("2015550123"),
            )
            .with_rule(
                "US",
                NumberingRule::new(NumberType::Mobile, "2015", 10).with_example("2015550123"),
            )
    }

    #[test]
    fn test_no_example_is_absent() {
        let generator = RandomValidNumberGenerator::new(plan(), config(10));
        let mut digits = ScriptedDigits::new(vec![5]);
        let result = generator
            .generate_with(NumberType::Mobile, &Region::new("TA"), &mut digits)
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(digits.drawn(), 0);
    }

    #[test]
    fn test_keeps_prefix_and_length() {
        let generator = RandomValidNumberGenerator::new(plan(), config(100));
        let mut digits = ScriptedDigits::from_str_digits("9876543");
        let generated = generator
            .generate_with(NumberType::Mobile, &Region::new("US"), &mut digits)
            .unwrap()
            .unwrap();

        assert_eq!(generated.candidate, PhoneNumberCandidate::new("1", "2019876543"));
        assert_eq!(generated.attempts, 1);
        assert_eq!(generated.number_type, NumberType::Mobile);
    }

    #[test]
    fn test_rejects_until_valid() {
        let generator = RandomValidNumberGenerator::new(plan(), config(100));
        // First two candidates start their suffix with 0 and 1 (invalid), the third with 4.
        let mut digits = ScriptedDigits::from_str_digits("0000000 1111111 4444444");
        let generated = generator
            .generate_with(NumberType::FixedLine, &Region::new("US"), &mut digits)
            .unwrap()
            .unwrap();

        assert_eq!(generated.candidate.national_number, "2014444444");
        assert_eq!(generated.attempts, 3);
    }

    #[test]
    fn test_wrong_type_is_retried() {
        let generator = RandomValidNumberGenerator::new(plan(), config(100));
        // 77710 is valid but falls in the fixed-line range; 77725 is mobile.
        let mut digits = ScriptedDigits::from_str_digits("10 25");
        let generated = generator
            .generate_with(NumberType::Mobile, &Region::new("XT"), &mut digits)
            .unwrap()
            .unwrap();
        assert_eq!(generated.candidate.national_number, "77725");
        assert_eq!(generated.attempts, 2);
    }

    #[test]
    fn test_search_exhausted() {
        let generator = RandomValidNumberGenerator::new(plan(), config(5));
        let mut digits = ScriptedDigits::new(vec![0]);
        let err = generator
            .generate_with(NumberType::Mobile, &Region::new("US"), &mut digits)
            .unwrap_err();

        assert_eq!(
            err,
            GenerateError::SearchExhausted {
                region: Region::new("US"),
                number_type: NumberType::Mobile,
                attempts: 5,
            }
        );
    }

    #[test]
    fn test_short_example_is_absent() {
        let generator = RandomValidNumberGenerator::new(plan(), config(10));
        let result = generator.generate(NumberType::Mobile, &Region::new("XS")).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_zero_remaining_digits() {
        let oracle = StaticOracle::new()
            .with_region("XZ", "997")
            .with_rule("XZ", NumberingRule::new(NumberType::FixedLine, "123", 3).with_example("123"));
        let generator = RandomValidNumberGenerator::new(oracle, config(10));
        let generated = generator
            .generate_with(NumberType::FixedLine, &Region::new("XZ"), &mut ScriptedDigits::default())
            .unwrap()
            .unwrap();
        assert_eq!(generated.candidate, PhoneNumberCandidate::new("997", "123"));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let seeded = GeneratorConfig {
            max_attempts: 1_000,
            seed: Some(42),
        };
        let generator = RandomValidNumberGenerator::new(plan(), seeded);
        let us = Region::new("US");
        let first = generator.generate(NumberType::Mobile, &us).unwrap();
        let second = generator.generate(NumberType::Mobile, &us).unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_results_satisfy_oracle() {
        let generator = RandomValidNumberGenerator::new(plan(), config(1_000));
        let us = Region::new("US");
        let mut rng = DigitRng::from_seed(7);
        for _ in 0..50 {
            let generated = generator
                .generate_with(NumberType::Mobile, &us, &mut rng)
                .unwrap()
                .unwrap();
            let candidate = &generated.candidate;
            assert_eq!(candidate.national_number.len(), 10);
            assert!(candidate.national_number.starts_with("201"));
            assert_eq!(generator.oracle().validate(candidate, &us), Ok(()));
            assert!(generator.oracle().infer_type(candidate).matches(NumberType::Mobile));
        }
    }

    #[test]
    fn test_preferred_falls_back() {
        let generator = RandomValidNumberGenerator::new(plan(), config(100));
        let mut digits = ScriptedDigits::from_str_digits("5");
        let generated = generator
            .generate_preferred(
                &[NumberType::Mobile, NumberType::FixedLine],
                &Region::new("TA"),
                &mut digits,
            )
            .unwrap()
            .unwrap();
        assert_eq!(generated.number_type, NumberType::FixedLine);
        assert_eq!(generated.candidate, PhoneNumberCandidate::new("290", "8995"));

        let none = generator
            .generate_preferred(&[NumberType::TollFree], &Region::new("TA"), &mut digits)
            .unwrap();
        assert_eq!(none, None);
    }
}
