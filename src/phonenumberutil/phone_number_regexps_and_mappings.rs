// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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


use regex::Regex;

use crate::{phonenumberutil::helper_constants::VALID_PUNCTUATION, regexp_cache::RegexCache};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Cache of the metadata patterns used with capturing groups.
    pub regexp_cache: RegexCache,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// The first_group_capturing_pattern was originally set to $1 but there
    /// are some countries for which the first group is not used in the
    /// national pattern (e.g. Argentina) so the $1 group does not match
    /// correctly. Therefore, we use \d, so that the first group actually
    /// used in the pattern will be matched.
    pub first_group_capturing_pattern: Regex,

    /// A pattern that is used to determine if a format rule is eligible to be
    /// used by the as-you-type formatter. It is eligible when the template
    /// contains groups of the dollar sign followed by a single digit,
    /// separated by valid phone number punctuation. This prevents invalid
    /// punctuation (such as the star sign in Israeli star numbers) getting
    /// into the output of the formatter.
    pub is_format_eligible_as_you_type_formatting_regex: Regex,

    /// Character classes such as `[2-9]` inside a format pattern; replaced
    /// by `\d` to build a pattern matching any digits of the same shape.
    pub character_class_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        Self {
            regexp_cache: RegexCache::with_capacity(128),
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION))
                .expect("Invalid constant pattern!"),
            first_group_capturing_pattern: Regex::new("(\\$\\d)")
                .expect("Invalid constant pattern!"),
            is_format_eligible_as_you_type_formatting_regex: Regex::new(
                &format!("[{}]*\\$1[{}]*(\\$\\d[{}]*)*", VALID_PUNCTUATION, VALID_PUNCTUATION, VALID_PUNCTUATION)
            ).expect("Invalid constant pattern!"),
            character_class_pattern: Regex::new("\\[([^\\[\\]])*\\]")
                .expect("Invalid constant pattern!"),
        }
    }
}
