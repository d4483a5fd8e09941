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

//! Validation and classification of national numbers. Everything in here is
//! a pure function of its arguments and the metadata snapshot.

use std::sync::Arc;

use log::trace;

use super::{
    PhoneNumberType,
    errors::{UnsupportedRegionError, ValidationError},
    helper_functions::{get_number_desc_by_type, parse_country_calling_code, test_number_length},
    metadata_store::MetadataSnapshot,
    pattern_matcher::PatternMatcher,
};
use crate::metadata::{PhoneNumber, RegionMetadata};

/// A number accepted by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNumber {
    pub region_code: String,
    /// National significant number, national prefix removed.
    pub national_number: String,
    pub number_type: PhoneNumberType,
}

/// Outcome of a validation: an invalid number is data, not an error.
pub type ValidationResult = Result<ValidNumber, ValidationError>;

/// Checks `phone_number` against the numbering plan of `region_code`.
///
/// The outer error is raised only for a region that is not loaded. Checks
/// run in order: calling code, possible lengths, national number pattern.
/// The error reported is the one of the digits as supplied; their national
/// prefix is dropped only when that makes an otherwise failing number valid.
pub fn validate(
    snapshot: &MetadataSnapshot,
    matcher: &PatternMatcher,
    phone_number: &PhoneNumber,
    region_code: &str,
) -> Result<ValidationResult, UnsupportedRegionError> {
    let metadata = snapshot.get(region_code)?;
    Ok(validate_for_metadata(matcher, phone_number, &metadata))
}

fn validate_for_metadata(
    matcher: &PatternMatcher,
    phone_number: &PhoneNumber,
    metadata: &RegionMetadata,
) -> ValidationResult {
    if parse_country_calling_code(&phone_number.country_code) != Some(metadata.country_code) {
        trace!(
            "Calling code '{}' is not the one of {}",
            phone_number.country_code, metadata.region_code
        );
        return Err(ValidationError::CountryCodeMismatch);
    }

    let supplied = phone_number.national_number.as_str();
    let national_number = match check_national_number(supplied, metadata, matcher) {
        Ok(()) => supplied,
        // The digits may have been dialled with the national prefix, they are
        // accepted if what follows the prefix is a valid number.
        Err(err) => match strip_national_prefix(supplied, metadata, matcher) {
            Some(stripped) if check_national_number(stripped, metadata, matcher).is_ok() => {
                trace!("Number '{supplied}' valid without its national prefix");
                stripped
            }
            _ => return Err(err),
        },
    };

    let number_type = get_number_type_helper(national_number, metadata, matcher);
    Ok(ValidNumber {
        region_code: metadata.region_code.clone(),
        national_number: national_number.to_owned(),
        number_type,
    })
}

/// Length first, then the national number pattern.
fn check_national_number(
    national_number: &str,
    metadata: &RegionMetadata,
    matcher: &PatternMatcher,
) -> Result<(), ValidationError> {
    test_number_length(national_number, metadata, PhoneNumberType::Unknown)?;
    if !matcher.matches_pattern(national_number, metadata) {
        trace!(
            "Number '{national_number}' doesn't match the national number pattern of {}",
            metadata.region_code
        );
        return Err(ValidationError::InvalidPattern);
    }
    Ok(())
}

/// The digits after a leading national prefix, e.g. `1212345678` for GB
/// `01212345678`. `None` when there is no prefix or nothing follows it.
fn strip_national_prefix<'a>(
    national_number: &'a str,
    metadata: &RegionMetadata,
    matcher: &PatternMatcher,
) -> Option<&'a str> {
    let stripped = match (&metadata.national_prefix_for_parsing, &metadata.national_prefix) {
        (Some(pattern), _) => matcher.consume_prefix(national_number, pattern),
        (None, Some(prefix)) if !prefix.is_empty() => national_number.strip_prefix(prefix.as_str()),
        _ => None,
    };
    stripped.filter(|s| !s.is_empty())
}

/// Classifies a national number. Specific types are tried in a fixed order,
/// the first one matching wins.
pub(super) fn get_number_type_helper(
    national_number: &str,
    metadata: &RegionMetadata,
    matcher: &PatternMatcher,
) -> PhoneNumberType {
    if !matcher.matches_pattern(national_number, metadata) {
        trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
        return PhoneNumberType::Unknown;
    }
    let is_number_matching_type = |number_type: PhoneNumberType| {
        get_number_desc_by_type(metadata, number_type)
            .is_some_and(|desc| matcher.matches_desc(national_number, desc))
    };

    for number_type in [
        PhoneNumberType::PremiumRate,
        PhoneNumberType::TollFree,
        PhoneNumberType::SharedCost,
        PhoneNumberType::VoIP,
        PhoneNumberType::PersonalNumber,
        PhoneNumberType::Pager,
        PhoneNumberType::UAN,
        PhoneNumberType::VoiceMail,
    ] {
        if is_number_matching_type(number_type) {
            trace!("Number '{national_number}' is of type {number_type:?}.");
            return number_type;
        }
    }

    if is_number_matching_type(PhoneNumberType::FixedLine) {
        if metadata.same_mobile_and_fixed_line_pattern() {
            trace!("Number '{national_number}': fixed-line and mobile patterns equal,\
             number is fixed-line or mobile");
            return PhoneNumberType::FixedLineOrMobile;
        } else if is_number_matching_type(PhoneNumberType::Mobile) {
            trace!("Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                    still fixed-line or mobile"
            );
            return PhoneNumberType::FixedLineOrMobile;
        }
        trace!("Number '{national_number}' is a fixed line number.");
        return PhoneNumberType::FixedLine;
    }
    // Otherwise, test to see if the number is mobile. Only do this if certain
    // that the patterns for mobile and fixed line aren't the same.
    if !metadata.same_mobile_and_fixed_line_pattern() && is_number_matching_type(PhoneNumberType::Mobile) {
        trace!("Number '{national_number}' is a mobile number.");
        return PhoneNumberType::Mobile;
    }
    trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
    PhoneNumberType::Unknown
}

/// Finds the region a number belongs to among the regions sharing its
/// calling code: by the region's leading digits when it has some, else by
/// the number having a known type there.
pub fn get_region_for_number(
    snapshot: &MetadataSnapshot,
    matcher: &PatternMatcher,
    phone_number: &PhoneNumber,
) -> Option<Arc<RegionMetadata>> {
    let country_calling_code = parse_country_calling_code(&phone_number.country_code)?;
    let region_codes = snapshot.regions_by_calling_code(country_calling_code);
    if region_codes.is_empty() {
        trace!("Missing/invalid country calling code ({})", country_calling_code);
        return None;
    }
    if let [region_code] = region_codes {
        return snapshot.get(region_code).ok();
    }
    let national_number = phone_number.national_number.as_str();
    for region_code in region_codes {
        // Region codes come from the calling code index of the same snapshot.
        let Ok(metadata) = snapshot.get(region_code) else {
            continue;
        };
        if let Some(leading_digits) = &metadata.leading_digits {
            if matcher.matches_prefix(national_number, leading_digits) {
                return Some(metadata);
            }
        } else if get_number_type_helper(national_number, &metadata, matcher) != PhoneNumberType::Unknown {
            return Some(metadata);
        }
    }
    None
}

/// Type of the number in the region it belongs to, `Unknown` when no region
/// claims it.
pub fn get_number_type(
    snapshot: &MetadataSnapshot,
    matcher: &PatternMatcher,
    phone_number: &PhoneNumber,
) -> PhoneNumberType {
    match get_region_for_number(snapshot, matcher, phone_number) {
        Some(metadata) => get_number_type_helper(&phone_number.national_number, &metadata, matcher),
        None => PhoneNumberType::Unknown,
    }
}

/// True if the number is valid in the region it belongs to.
pub fn is_valid_number(
    snapshot: &MetadataSnapshot,
    matcher: &PatternMatcher,
    phone_number: &PhoneNumber,
) -> bool {
    get_region_for_number(snapshot, matcher, phone_number)
        .is_some_and(|metadata| validate_for_metadata(matcher, phone_number, &metadata).is_ok())
}
