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

use super::{
    PhoneNumberFormat,
    errors::FormatError,
    helper_functions::{parse_country_calling_code, prefix_number_with_country_calling_code},
    metadata_store::MetadataSnapshot,
    pattern_matcher::PatternMatcher,
};
use crate::metadata::{PhoneNumber, RegionMetadata};

/// Formats `phone_number` in `number_format`.
///
/// The rules come from `region_code` when given, else from the main region
/// of the number's calling code. Regions without rules of their own borrow
/// the main region's. A given region must use the number's calling code.
pub fn format(
    snapshot: &MetadataSnapshot,
    matcher: &PatternMatcher,
    phone_number: &PhoneNumber,
    number_format: PhoneNumberFormat,
    region_code: Option<&str>,
) -> Result<String, FormatError> {
    let region_metadata = region_code.map(|code| snapshot.get(code)).transpose()?;
    let country_calling_code = parse_country_calling_code(&phone_number.country_code)
        .ok_or_else(|| FormatError::UnknownCallingCode(phone_number.country_code.clone()))?;
    if let Some(metadata) = &region_metadata {
        if metadata.country_code != country_calling_code {
            return Err(FormatError::CountryCodeMismatch {
                region: metadata.region_code.clone(),
                country_code: phone_number.country_code.clone(),
            });
        }
    }
    let mut formatted_number = phone_number.national_number.clone();

    if let PhoneNumberFormat::E164 = number_format {
        // Early exit for E164 case since no formatting of the national number
        // needs to be applied.
        prefix_number_with_country_calling_code(
            country_calling_code,
            PhoneNumberFormat::E164,
            &mut formatted_number,
        );
        return Ok(formatted_number);
    }

    let metadata = match region_metadata {
        Some(metadata) => metadata,
        None => snapshot
            .main_region_for_calling_code(country_calling_code)
            .ok_or_else(|| FormatError::UnknownCallingCode(phone_number.country_code.clone()))?,
    };
    let metadata = snapshot.format_rules_region(metadata);

    formatted_number = format_nsn(&phone_number.national_number, &metadata, matcher, number_format)?;
    prefix_number_with_country_calling_code(country_calling_code, number_format, &mut formatted_number);
    Ok(formatted_number)
}

/// Formats a national significant number without the calling code.
fn format_nsn(
    number: &str,
    metadata: &RegionMetadata,
    matcher: &PatternMatcher,
    number_format: PhoneNumberFormat,
) -> Result<String, FormatError> {
    match number_format {
        PhoneNumberFormat::National => {
            let formatting_pattern = matcher
                .select_format_rule(number, metadata)
                .ok_or(FormatError::NoMatchingFormat)?;
            let template = matcher.national_template(formatting_pattern, metadata);
            Ok(matcher.render_with_template(number, &formatting_pattern.pattern, &template))
        }
        _ => {
            // When the international formatting rules are present, national-only
            // rules are not eligible.
            let available_formats = metadata
                .format_rules
                .iter()
                .filter(|rule| PatternMatcher::is_international_format_available(rule));
            let formatting_pattern = matcher
                .choose_formatting_pattern_for_number(available_formats, number)
                .ok_or(FormatError::NoMatchingFormat)?;
            Ok(matcher.render(number, formatting_pattern, number_format))
        }
    }
}
