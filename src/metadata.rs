//! Oracle backed by libphonenumber metadata (the `phonenumber` crate).
//!
//! Numbers are matched against the descriptor patterns of the region in
//! question, on the national number exactly as generated. Going through
//! `PhoneNumber` would drop significant leading zeros (IT, SM, BJ, ...) and
//! resolve shared calling codes to the first matching region, so a valid AX
//! number would be judged Finnish.

use std::collections::BTreeSet;

use phonenumber::metadata::{Database, Descriptor, Metadata, DATABASE};

use crate::oracle::{NumberingOracle, Rejection};
use crate::types::{ExampleNumber, NumberType, PhoneNumberCandidate, Region};

/// Highest ITU country calling code.
const MAX_CALLING_CODE: u16 = 999;

/// Numbering oracle over the bundled libphonenumber database.
#[derive(Clone, Copy)]
pub struct MetadataOracle {
    database: &'static Database,
}

impl MetadataOracle {
    pub fn new() -> Self {
        Self { database: &DATABASE }
    }

    /// Region metadata sharing `code`, in database order.
    fn regions_for(&self, code: u16) -> Vec<&'static Metadata> {
        self.database
            .region(&code)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| self.database.by_id(id))
            .collect()
    }
}

impl Default for MetadataOracle {
    fn default() -> Self {
        Self::new()
    }
}

fn descriptor(meta: &Metadata, number_type: NumberType) -> Option<&Descriptor> {
    let descriptors = meta.descriptors();
    match number_type {
        NumberType::FixedLine | NumberType::FixedLineOrMobile => descriptors.fixed_line(),
        NumberType::Mobile => descriptors.mobile(),
        NumberType::TollFree => descriptors.toll_free(),
        NumberType::PremiumRate => descriptors.premium_rate(),
        NumberType::SharedCost => descriptors.shared_cost(),
        NumberType::Voip => descriptors.voip(),
        NumberType::PersonalNumber => descriptors.personal_number(),
        NumberType::Pager => descriptors.pager(),
        NumberType::Uan => descriptors.uan(),
        NumberType::Voicemail => descriptors.voicemail(),
        NumberType::Unknown => None,
    }
}

fn has_match(meta: &Metadata, number_type: NumberType, national: &str) -> bool {
    descriptor(meta, number_type).is_some_and(|d| d.is_match(national))
}

/// Type of `national` within one region, `UNKNOWN` if the region has no range for it.
///
/// Special-rate ranges are checked before fixed and mobile ones; a number in
/// both a fixed and a mobile range is `FIXED_LINE_OR_MOBILE`.
fn type_in(meta: &Metadata, national: &str) -> NumberType {
    if !meta.descriptors().general().is_match(national) {
        return NumberType::Unknown;
    }

    const SPECIAL: [NumberType; 8] = [
        NumberType::PremiumRate,
        NumberType::TollFree,
        NumberType::SharedCost,
        NumberType::Voip,
        NumberType::PersonalNumber,
        NumberType::Pager,
        NumberType::Uan,
        NumberType::Voicemail,
    ];
    if let Some(special) = SPECIAL.into_iter().find(|&t| has_match(meta, t, national)) {
        return special;
    }

    match (
        has_match(meta, NumberType::FixedLine, national),
        has_match(meta, NumberType::Mobile, national),
    ) {
        (true, true) => NumberType::FixedLineOrMobile,
        (true, false) => NumberType::FixedLine,
        (false, true) => NumberType::Mobile,
        (false, false) => NumberType::Unknown,
    }
}

fn is_region_id(id: &str) -> bool {
    id.len() == 2 && id.bytes().all(|b| b.is_ascii_uppercase())
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Calling code of `candidate`, or why it cannot be read.
fn calling_code(candidate: &PhoneNumberCandidate) -> Result<u16, Rejection> {
    if !all_digits(&candidate.national_number) {
        return Err(Rejection::Unparseable(candidate.e164()));
    }
    candidate
        .country_code
        .parse::<u16>()
        .ok()
        .filter(|_| all_digits(&candidate.country_code))
        .ok_or_else(|| Rejection::Unparseable(candidate.e164()))
}

impl NumberingOracle for MetadataOracle {
    fn supported_regions(&self) -> Vec<Region> {
        (1..=MAX_CALLING_CODE)
            .filter_map(|code| self.database.by_code(&code))
            .flatten()
            .map(Metadata::id)
            .filter(|id| is_region_id(id))
            .map(Region::new)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn example_number(&self, number_type: NumberType, region: &Region) -> Option<ExampleNumber> {
        let meta = self.database.by_id(region.as_str())?;
        let example = descriptor(meta, number_type)?.example()?;
        Some(ExampleNumber::new(meta.country_code().to_string(), example))
    }

    fn validate(&self, candidate: &PhoneNumberCandidate, region: &Region) -> Result<(), Rejection> {
        let Some(meta) = self.database.by_id(region.as_str()) else {
            return Err(Rejection::UnknownRegion);
        };
        let code = calling_code(candidate)?;
        let national = candidate.national_number.as_str();

        if meta.country_code() != code {
            return match self.regions_for(code).first() {
                Some(other) => Err(Rejection::WrongRegion {
                    expected: region.clone(),
                    found: Region::new(other.id()),
                }),
                None => Err(Rejection::InvalidNumber),
            };
        }
        if type_in(meta, national) == NumberType::Unknown {
            return Err(Rejection::InvalidNumber);
        }
        Ok(())
    }

    fn infer_type(&self, candidate: &PhoneNumberCandidate) -> NumberType {
        let Ok(code) = calling_code(candidate) else {
            return NumberType::Unknown;
        };
        self.regions_for(code)
            .into_iter()
            .map(|meta| type_in(meta, &candidate.national_number))
            .find(|&t| t != NumberType::Unknown)
            .unwrap_or(NumberType::Unknown)
    }
}
