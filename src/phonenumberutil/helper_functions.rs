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

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::{
    metadata::{NumberDesc, RegionMetadata},
    string_util::is_ascii_digits,
};

use super::{
    PhoneNumberFormat, PhoneNumberType, ValidationError,
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN, RFC3966_PREFIX},
};

/// Returns the description inside the metadata of the appropriate type, if
/// the region has numbers of that type at all.
pub(super) fn get_number_desc_by_type(
    metadata: &RegionMetadata,
    phone_number_type: PhoneNumberType,
) -> Option<&NumberDesc> {
    match phone_number_type {
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => {
            metadata.number_types.get(&PhoneNumberType::FixedLine)
        }
        // The non-type has no description of its own, the general one is used
        PhoneNumberType::Unknown => None,
        number_type => metadata.number_types.get(&number_type),
    }
}

/// A helper function that is used by Format.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    if let PhoneNumberFormat::National = number_format {
        return;
    }
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match number_format {
        PhoneNumberFormat::E164 => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);

            *formatted_number = new_str;
        }
        PhoneNumberFormat::RFC3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );

            *formatted_number = new_str;
        }
        // here code is already returned
        PhoneNumberFormat::National => {}
    }
}

/// Parses the digits of a country calling code. Calling codes are one to
/// three digits and never start with zero.
pub(super) fn parse_country_calling_code(country_code: &str) -> Option<i32> {
    if country_code.is_empty()
        || country_code.len() > MAX_LENGTH_COUNTRY_CODE
        || !is_ascii_digits(country_code)
        || country_code.starts_with('0')
    {
        return None;
    }
    country_code.parse().ok()
}

/// Returns the types we have metadata for based on the RegionMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(
    metadata: &RegionMetadata,
    types: &mut HashSet<PhoneNumberType>,
) {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| get_number_desc_by_type(metadata, *number_type).is_some())
        .for_each(|number_type| {
            types.insert(number_type);
        });
}

/// Helper method to check a number against possible lengths for this number
/// type, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &RegionMetadata,
    phone_number_type: PhoneNumberType,
) -> Result<(), ValidationError> {
    // Where a sub-description (e.g. fixed-line) has the same possible lengths
    // as the region, they are missing, so we fall back to the region's.
    let lengths_of = |desc: Option<&NumberDesc>| -> Vec<u32> {
        match desc {
            Some(desc) if !desc.possible_lengths.is_empty() => desc.possible_lengths.clone(),
            _ => phone_metadata.possible_lengths.clone(),
        }
    };

    let desc_for_type = get_number_desc_by_type(phone_metadata, phone_number_type);
    if desc_for_type.is_none() {
        match phone_number_type {
            PhoneNumberType::Unknown => {}
            // The rare case has been encountered where no fixedLine data is available
            // (true for some non-geographical entities), so we just check mobile.
            PhoneNumberType::FixedLineOrMobile => {
                return test_number_length(phone_number, phone_metadata, PhoneNumberType::Mobile);
            }
            // The type is not suported at all
            _ => return Err(ValidationError::InvalidLength),
        }
    }
    let mut possible_lengths = lengths_of(desc_for_type);
    if phone_number_type == PhoneNumberType::FixedLineOrMobile {
        if let Some(mobile_desc) = get_number_desc_by_type(phone_metadata, PhoneNumberType::Mobile) {
            possible_lengths.extend(lengths_of(Some(mobile_desc)));
        }
    }
    possible_lengths.sort_unstable();
    possible_lengths.dedup();

    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.first(), possible_lengths.last())
    else {
        return Err(ValidationError::InvalidLength);
    };

    let actual_length = phone_number.chars().count() as u32;
    if minimum_length > actual_length {
        Err(ValidationError::TooShort)
    } else if maximum_length < actual_length {
        Err(ValidationError::TooLong)
    } else if possible_lengths.contains(&actual_length) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength)
    }
}
