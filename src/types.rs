//! Core value types shared by the oracle, the generator and the table.
//!
//! Numbers are kept as digit strings, never integers: national numbers may
//! carry significant leading zeros (e.g. Italian fixed lines).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseNumberTypeError;

/// Region identifier for a numbering plan (`"US"`, `"GB"`, `"TA"`, ...).
///
/// Opaque: the only structure assumed is ordering, used for sorted listings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Category of phone service, using the oracle's tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    FixedLine,
    Mobile,
    /// Wildcard reported for plans where fixed and mobile ranges overlap.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberType {
    pub const ALL: [NumberType; 12] = [
        NumberType::FixedLine,
        NumberType::Mobile,
        NumberType::FixedLineOrMobile,
        NumberType::TollFree,
        NumberType::PremiumRate,
        NumberType::SharedCost,
        NumberType::Voip,
        NumberType::PersonalNumber,
        NumberType::Pager,
        NumberType::Uan,
        NumberType::Voicemail,
        NumberType::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::Mobile => "MOBILE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::Voip => "VOIP",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::Pager => "PAGER",
            NumberType::Uan => "UAN",
            NumberType::Voicemail => "VOICEMAIL",
            NumberType::Unknown => "UNKNOWN",
        }
    }

    /// True if a number inferred as `self` satisfies a request for `requested`.
    ///
    /// `FIXED_LINE_OR_MOBILE` matches any requested type.
    pub fn matches(self, requested: NumberType) -> bool {
        self == requested || self == NumberType::FixedLineOrMobile
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberType {
    type Err = ParseNumberTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        NumberType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseNumberTypeError(s.to_string()))
    }
}

/// A generated `(country code, national number)` pair under test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberCandidate {
    pub country_code: String,
    pub national_number: String,
}

impl PhoneNumberCandidate {
    pub fn new(country_code: impl Into<String>, national_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            national_number: national_number.into(),
        }
    }

    /// `+{cc}{nn}` with no separators.
    pub fn e164(&self) -> String {
        format!("+{}{}", self.country_code, self.national_number)
    }

    /// Link to the libphonenumber web parser for this number.
    pub fn parser_link(&self) -> String {
        format!(
            "https://libphonenumber.appspot.com/phonenumberparser?number=%2B{}{}",
            self.country_code, self.national_number
        )
    }
}

impl fmt::Display for PhoneNumberCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.country_code, self.national_number)
    }
}

/// Reference number for a `(region, type)` pair, as supplied by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleNumber {
    pub country_code: String,
    pub national_number: String,
}

impl ExampleNumber {
    pub fn new(country_code: impl Into<String>, national_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            national_number: national_number.into(),
        }
    }

    /// Number of digits in the national number.
    pub fn len(&self) -> usize {
        self.national_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.national_number.is_empty()
    }

    /// The leading `len` digits, or `None` if the number is shorter.
    pub fn prefix(&self, len: usize) -> Option<&str> {
        self.national_number.get(..len)
    }

    /// Digits left after a `prefix_len` prefix; `None` when the example is too short.
    pub fn remaining_len(&self, prefix_len: usize) -> Option<usize> {
        self.len().checked_sub(prefix_len)
    }
}
