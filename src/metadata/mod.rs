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

//! In-memory shape of the per-region numbering plan data.
//!
//! Records are built by an external loader (see [`crate::MetadataLoader`])
//! and handed to the engine as one batch. Nothing in here touches regexes:
//! patterns are kept as text and compiled lazily by the matcher.

mod collection;

use std::collections::HashMap;

pub use collection::MetadataCollection;

use crate::phonenumberutil::PhoneNumberType;

/// Pattern data for one class of numbers (fixed line, mobile, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberDesc {
    pub national_number_pattern: String,
    /// Empty means the lengths of the region's general description apply.
    pub possible_lengths: Vec<u32>,
}

impl NumberDesc {
    pub fn new(national_number_pattern: impl Into<String>) -> Self {
        Self {
            national_number_pattern: national_number_pattern.into(),
            possible_lengths: Vec::new(),
        }
    }

    pub fn with_possible_lengths(mut self, possible_lengths: impl Into<Vec<u32>>) -> Self {
        self.possible_lengths = possible_lengths.into();
        self
    }
}

/// A single formatting template.
///
/// `pattern` splits the national number into capturing groups which the
/// templates reference as `$1`, `$2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRule {
    pub pattern: String,
    /// A rule is eligible only when one of these matches the start of the
    /// number. Empty means the rule applies to any leading digits.
    pub leading_digits_patterns: Vec<String>,
    pub national_format_template: String,
    /// `None` falls back to the national template without parentheses,
    /// `Some("NA")` excludes the rule from international output.
    pub international_format_template: Option<String>,
    /// Overrides the region's rule. May use `$NP` and `$FG` placeholders.
    pub national_prefix_formatting_rule: Option<String>,
}

impl FormatRule {
    pub fn new(pattern: impl Into<String>, national_format_template: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            leading_digits_patterns: Vec::new(),
            national_format_template: national_format_template.into(),
            international_format_template: None,
            national_prefix_formatting_rule: None,
        }
    }

    pub fn with_leading_digits(mut self, leading_digits: impl Into<String>) -> Self {
        self.leading_digits_patterns.push(leading_digits.into());
        self
    }

    pub fn with_international_format(mut self, template: impl Into<String>) -> Self {
        self.international_format_template = Some(template.into());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }
}

/// Numbering plan of one region.
///
/// The order of `format_rules` is their priority: whenever several rules
/// could format a number, the one declared first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMetadata {
    pub region_code: String,
    pub country_code: i32,
    /// Marks the region whose rules are used for every region sharing
    /// `country_code` (US for NANPA, RU for +7, GB for +44).
    pub main_country_for_code: bool,
    pub national_number_pattern: String,
    pub possible_lengths: Vec<u32>,
    pub national_prefix: Option<String>,
    /// Regex consumed at the start of a dialled number to remove the
    /// national prefix. Defaults to `national_prefix` taken literally.
    pub national_prefix_for_parsing: Option<String>,
    /// Default for rules which carry no formatting rule of their own.
    pub national_prefix_formatting_rule: Option<String>,
    /// Distinguishes this region from others sharing its calling code.
    pub leading_digits: Option<String>,
    pub format_rules: Vec<FormatRule>,
    pub number_types: HashMap<PhoneNumberType, NumberDesc>,
}

impl RegionMetadata {
    pub fn new(
        region_code: impl Into<String>,
        country_code: i32,
        national_number_pattern: impl Into<String>,
        possible_lengths: impl Into<Vec<u32>>,
    ) -> Self {
        Self {
            region_code: region_code.into(),
            country_code,
            main_country_for_code: false,
            national_number_pattern: national_number_pattern.into(),
            possible_lengths: possible_lengths.into(),
            national_prefix: None,
            national_prefix_for_parsing: None,
            national_prefix_formatting_rule: None,
            leading_digits: None,
            format_rules: Vec::new(),
            number_types: HashMap::new(),
        }
    }

    pub fn main_country_for_code(mut self) -> Self {
        self.main_country_for_code = true;
        self
    }

    pub fn with_national_prefix(mut self, national_prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(national_prefix.into());
        self
    }

    pub fn with_national_prefix_for_parsing(mut self, pattern: impl Into<String>) -> Self {
        self.national_prefix_for_parsing = Some(pattern.into());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn with_leading_digits(mut self, leading_digits: impl Into<String>) -> Self {
        self.leading_digits = Some(leading_digits.into());
        self
    }

    pub fn with_format_rule(mut self, rule: FormatRule) -> Self {
        self.format_rules.push(rule);
        self
    }

    pub fn with_number_type(mut self, number_type: PhoneNumberType, desc: NumberDesc) -> Self {
        self.number_types.insert(number_type, desc);
        self
    }

    /// National prefix rule for `rule`, falling back to the region default.
    pub fn national_prefix_formatting_rule_for<'a>(&'a self, rule: &'a FormatRule) -> Option<&'a str> {
        rule.national_prefix_formatting_rule
            .as_deref()
            .or(self.national_prefix_formatting_rule.as_deref())
    }

    /// Fixed-line and mobile numbers can't be told apart when their patterns
    /// are identical; such numbers are reported as `FixedLineOrMobile`.
    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        match (
            self.number_types.get(&PhoneNumberType::FixedLine),
            self.number_types.get(&PhoneNumberType::Mobile),
        ) {
            (Some(fixed_line), Some(mobile)) => {
                fixed_line.national_number_pattern == mobile.national_number_pattern
            }
            _ => false,
        }
    }
}

/// A phone number split into its calling code and national significant number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneNumber {
    /// Digits of the country calling code, without `+`.
    pub country_code: String,
    /// Digits only, no formatting characters.
    pub national_number: String,
}

impl PhoneNumber {
    pub fn new(country_code: impl Into<String>, national_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            national_number: national_number.into(),
        }
    }
}
