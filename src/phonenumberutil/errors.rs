// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::IntoStaticStr;
use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Region code is not present in the active metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported region: {0}")]
pub struct UnsupportedRegionError(pub String);

/// A metadata batch was rejected by `use_meta`. The previously active
/// metadata stays in place.
#[derive(Debug, Error)]
pub enum InvalidMetadataError {
    #[error("Malformed region code '{0}'")]
    MalformedRegionCode(String),
    #[error("Region {0} appears more than once in the batch")]
    DuplicateRegion(String),
    #[error("Region {region} has invalid country calling code {country_code}")]
    InvalidCountryCallingCode { region: String, country_code: i32 },
    #[error("Region {0} has no possible lengths")]
    EmptyPossibleLengths(String),
    #[error("Region {region} has impossible national number length {length}")]
    InvalidPossibleLength { region: String, length: u32 },
    #[error("Region {region} has invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        region: String,
        pattern: String,
        #[source]
        source: InvalidRegexError,
    },
    #[error("Region {region} has format template '{template}' without a first group")]
    MalformedFormatTemplate { region: String, template: String },
}

/// Failure reasons of `validate_phone_number`. These are returned as data,
/// an invalid number is an expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, IntoStaticStr)]
pub enum ValidationError {
    /// The country calling code is not the one of the claimed region.
    #[error("The number has a country calling code of another region")]
    #[strum(serialize = "COUNTRY_CODE_MISMATCH")]
    CountryCodeMismatch,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    #[strum(serialize = "PHN_NUMBER_TOO_SHORT")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region,\
    shorter than the longest valid numbers for this region, and does not\
    itself have a number length that matches valid numbers for this region\
    ")]
    #[strum(serialize = "PHN_NUMBER_INVALID_LENGTH")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    #[strum(serialize = "PHN_NUMBER_TOO_LONG")]
    TooLong,
    /// The length is possible but the digits don't form a valid number.
    #[error("The number does not match the numbering plan of this region")]
    #[strum(serialize = "PHN_NUMBER_INVALID_PATTERN")]
    InvalidPattern,
}

impl ValidationError {
    /// Stable code of the failure, e.g. `PHN_NUMBER_TOO_SHORT`.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{0}")]
    UnsupportedRegion(#[from] UnsupportedRegionError),
    #[error("No region is known for country calling code '{0}'")]
    UnknownCallingCode(String),
    #[error("Region {region} does not use country calling code '{country_code}'")]
    CountryCodeMismatch { region: String, country_code: String },
    /// The number may well be valid, there is just no template for it.
    #[error("No format rule matches the number")]
    NoMatchingFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsYouTypeError {
    #[error("No region set")]
    NoRegionSet,
    #[error("{0}")]
    UnsupportedRegion(#[from] UnsupportedRegionError),
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),
}

/// Errors of a [`crate::MetadataLoader`].
#[derive(Debug, Error)]
pub enum MetadataLoadError {
    #[error("No metadata for region {0}")]
    UnknownRegion(String),
    #[error("{0}")]
    InvalidMetadata(#[from] InvalidMetadataError),
}

#[cfg(test)]
mod tests {
    use super::{UnsupportedRegionError, ValidationError};

    #[test]
    fn validation_error_codes() {
        assert_eq!(ValidationError::TooShort.code(), "PHN_NUMBER_TOO_SHORT");
        assert_eq!(ValidationError::TooLong.code(), "PHN_NUMBER_TOO_LONG");
        assert_eq!(ValidationError::InvalidPattern.code(), "PHN_NUMBER_INVALID_PATTERN");
        assert_eq!(ValidationError::InvalidLength.code(), "PHN_NUMBER_INVALID_LENGTH");
        assert_eq!(ValidationError::CountryCodeMismatch.code(), "COUNTRY_CODE_MISMATCH");
    }

    #[test]
    fn unsupported_region_message() {
        let err = UnsupportedRegionError("TR".to_owned());
        assert!(err.to_string().starts_with("Unsupported region"));
        assert!(err.to_string().contains("TR"));
    }
}
