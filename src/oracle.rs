//! Numbering oracle: the authority on example numbers, validity and types.
//!
//! The generator never interprets numbering plans itself; it only asks an
//! oracle. `StaticOracle` is a small in-memory plan made of prefix rules,
//! used for custom plans and tests. The libphonenumber-backed oracle lives
//! in `metadata.rs`.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::types::{ExampleNumber, NumberType, PhoneNumberCandidate, Region};

/// Why the oracle refused a candidate. Always a retry signal for the generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("unparseable number: {0}")]
    Unparseable(String),

    #[error("not a valid number")]
    InvalidNumber,

    #[error("number belongs to {found}, not {expected}")]
    WrongRegion { expected: Region, found: Region },

    #[error("region not supported")]
    UnknownRegion,
}

/// Read-only view of a numbering plan.
///
/// All methods take `&self`: generation never mutates oracle state, so the
/// same oracle can serve any number of independent `generate` calls.
pub trait NumberingOracle {
    /// Every region this oracle can produce examples for.
    fn supported_regions(&self) -> Vec<Region>;

    /// Reference number of `number_type` in `region`, if the plan has one.
    fn example_number(&self, number_type: NumberType, region: &Region) -> Option<ExampleNumber>;

    /// Check that `candidate` is a valid number of `region`.
    fn validate(&self, candidate: &PhoneNumberCandidate, region: &Region) -> Result<(), Rejection>;

    /// Type of `candidate`, `UNKNOWN` when no range claims it.
    fn infer_type(&self, candidate: &PhoneNumberCandidate) -> NumberType;
}

/// One allocated range: numbers of `length` digits starting with `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingRule {
    pub number_type: NumberType,
    pub prefix: String,
    pub length: usize,
    pub example: Option<String>,
}

impl NumberingRule {
    pub fn new(number_type: NumberType, prefix: impl Into<String>, length: usize) -> Self {
        Self {
            number_type,
            prefix: prefix.into(),
            length,
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    #[inline]
    fn matches(&self, national_number: &str) -> bool {
        national_number.len() == self.length && national_number.starts_with(&self.prefix)
    }
}

#[derive(Debug, Clone)]
struct RegionPlan {
    country_code: String,
    rules: Vec<NumberingRule>,
}

/// In-memory numbering plan built from prefix rules.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    regions: BTreeMap<Region, RegionPlan>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `region` under `country_code`. Re-adding a region keeps its rules.
    pub fn with_region(mut self, region: impl Into<Region>, country_code: impl Into<String>) -> Self {
        let country_code = country_code.into();
        self.regions
            .entry(region.into())
            .and_modify(|plan| plan.country_code = country_code.clone())
            .or_insert_with(|| RegionPlan {
                country_code,
                rules: Vec::new(),
            });
        self
    }

    /// Add a rule to a region previously added with [`with_region`](Self::with_region).
    /// Rules for unknown regions are ignored.
    pub fn with_rule(mut self, region: impl Into<Region>, rule: NumberingRule) -> Self {
        if let Some(plan) = self.regions.get_mut(&region.into()) {
            plan.rules.push(rule);
        }
        self
    }

    /// Regions sharing `country_code` whose rules claim `national_number`.
    fn claiming_regions<'a>(
        &'a self,
        country_code: &'a str,
        national_number: &'a str,
    ) -> impl Iterator<Item = (&'a Region, &'a NumberingRule)> + 'a {
        self.regions
            .iter()
            .filter(move |(_, plan)| plan.country_code == country_code)
            .flat_map(move |(region, plan)| {
                plan.rules
                    .iter()
                    .filter(move |rule| rule.matches(national_number))
                    .map(move |rule| (region, rule))
            })
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl NumberingOracle for StaticOracle {
    fn supported_regions(&self) -> Vec<Region> {
        self.regions.keys().cloned().collect()
    }

    fn example_number(&self, number_type: NumberType, region: &Region) -> Option<ExampleNumber> {
        let plan = self.regions.get(region)?;
        let wanted = match number_type {
            NumberType::FixedLineOrMobile => NumberType::FixedLine,
            other => other,
        };
        plan.rules
            .iter()
            .filter(|rule| rule.number_type == wanted)
            .find_map(|rule| rule.example.as_deref())
            .map(|example| ExampleNumber::new(plan.country_code.clone(), example))
    }

    fn validate(&self, candidate: &PhoneNumberCandidate, region: &Region) -> Result<(), Rejection> {
        if !all_digits(&candidate.country_code) || !all_digits(&candidate.national_number) {
            return Err(Rejection::Unparseable(candidate.e164()));
        }
        if !self.regions.contains_key(region) {
            return Err(Rejection::UnknownRegion);
        }

        let mut other = None;
        for (owner, _) in self.claiming_regions(&candidate.country_code, &candidate.national_number) {
            if owner == region {
                return Ok(());
            }
            other.get_or_insert(owner);
        }

        match other {
            Some(found) => Err(Rejection::WrongRegion {
                expected: region.clone(),
                found: found.clone(),
            }),
            None => Err(Rejection::InvalidNumber),
        }
    }

    fn infer_type(&self, candidate: &PhoneNumberCandidate) -> NumberType {
        self.claiming_regions(&candidate.country_code, &candidate.national_number)
            .map(|(_, rule)| rule.number_type)
            .next()
            .unwrap_or(NumberType::Unknown)
    }
}
