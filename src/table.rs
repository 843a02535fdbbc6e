//! Example table: one mobile and one fixed-line number per supported region.
//!
//! This is the data the demo page renders; no markup is produced here.

use serde::Serialize;
use std::fmt;

use crate::error::GenerateError;
use crate::generator::RandomValidNumberGenerator;
use crate::oracle::NumberingOracle;
use crate::rng::DigitSource;
use crate::types::{NumberType, PhoneNumberCandidate, Region};

/// One cell of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExampleCell {
    Number(PhoneNumberCandidate),
    /// The region has no numbers of this type.
    NotApplicable,
    /// No valid candidate within the attempt cap.
    Exhausted { attempts: u32 },
}

impl ExampleCell {
    pub fn number(&self) -> Option<&PhoneNumberCandidate> {
        match self {
            ExampleCell::Number(candidate) => Some(candidate),
            _ => None,
        }
    }
}

impl fmt::Display for ExampleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleCell::Number(candidate) => candidate.fmt(f),
            ExampleCell::NotApplicable => f.write_str("N/A"),
            ExampleCell::Exhausted { attempts } => write!(f, "not found after {attempts} attempts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRow {
    pub region: Region,
    pub mobile: ExampleCell,
    pub fixed_line: ExampleCell,
}

fn cell<O, R>(
    generator: &RandomValidNumberGenerator<O>,
    number_type: NumberType,
    region: &Region,
    source: &mut R,
) -> ExampleCell
where
    O: NumberingOracle,
    R: DigitSource + ?Sized,
{
    match generator.generate_with(number_type, region, source) {
        Ok(Some(generated)) => ExampleCell::Number(generated.candidate),
        Ok(None) => ExampleCell::NotApplicable,
        Err(GenerateError::SearchExhausted { attempts, .. }) => ExampleCell::Exhausted { attempts },
    }
}

/// Build the table for every supported region, sorted by region code.
///
/// An exhausted search only marks its own cell; the rest of the table is
/// still filled.
pub fn build_example_table<O, R>(
    generator: &RandomValidNumberGenerator<O>,
    source: &mut R,
) -> Vec<ExampleRow>
where
    O: NumberingOracle,
    R: DigitSource + ?Sized,
{
    let mut regions = generator.oracle().supported_regions();
    regions.sort();
    regions
        .into_iter()
        .map(|region| {
            let mobile = cell(generator, NumberType::Mobile, &region, &mut *source);
            let fixed_line = cell(generator, NumberType::FixedLine, &region, &mut *source);
            ExampleRow {
                region,
                mobile,
                fixed_line,
            }
        })
        .collect()
}
