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

use log::{debug, trace};

use crate::{
    PhoneNumberFormat,
    metadata::RegionMetadata,
    phonenumberutil::pattern_matcher::PatternMatcher,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsYouTypeState {
    /// No region set yet, digits are rejected.
    #[default]
    NoRegion,
    /// Digits are formatted with the first remaining candidate rule.
    Collecting,
    /// No rule can format the digits, they are echoed as typed until the
    /// session is cleared.
    Overflow,
}

/// Everything a session knows about the digits typed so far.
///
/// Transitions never mutate a state, they produce the next one, so a state
/// can be kept around and replayed against the same region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatterState {
    state: AsYouTypeState,
    digits: String,
    /// Leading digits taken as the national prefix, empty if none was typed.
    national_prefix: String,
    /// Indices into the format rules of the region, in declaration order.
    candidates: Vec<usize>,
}

impl FormatterState {
    /// State of a session without a region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state for `region`: empty buffer, every rule usable for
    /// incremental formatting is a candidate.
    pub fn for_region(region: &RegionMetadata, matcher: &PatternMatcher) -> Self {
        let candidates = region
            .format_rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| matcher.is_rule_eligible_for_as_you_type(rule))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        debug!(
            "As-you-type session for {}: {} of {} rules eligible",
            region.region_code,
            candidates.len(),
            region.format_rules.len()
        );
        Self {
            state: AsYouTypeState::Collecting,
            digits: String::new(),
            national_prefix: String::new(),
            candidates,
        }
    }

    pub fn state(&self) -> AsYouTypeState {
        self.state
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn national_prefix(&self) -> &str {
        &self.national_prefix
    }

    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Appends an ASCII digit and renders the buffer.
    ///
    /// A buffer starting with the region's national prefix has the prefix held
    /// aside; the rules see only the digits after it. Candidates only ever
    /// shrink: a rule dropped for a shorter buffer is never reconsidered. Once
    /// none is left the state is `Overflow` and the raw digits are returned.
    pub fn accept_digit(
        &self,
        digit: char,
        region: &RegionMetadata,
        matcher: &PatternMatcher,
    ) -> (FormatterState, String) {
        let mut digits = String::with_capacity(self.digits.len() + 1);
        digits.push_str(&self.digits);
        digits.push(digit);

        if self.state == AsYouTypeState::Overflow {
            let output = digits.clone();
            return (
                Self {
                    state: AsYouTypeState::Overflow,
                    digits,
                    national_prefix: self.national_prefix.clone(),
                    candidates: Vec::new(),
                },
                output,
            );
        }

        let mut national_prefix = self.national_prefix.clone();
        if national_prefix.is_empty() {
            if let Some(prefix) = region.national_prefix.as_deref().filter(|p| !p.is_empty()) {
                if prefix.starts_with(digits.as_str()) {
                    if digits.len() == prefix.len() {
                        trace!("'{digits}' taken as national prefix of {}", region.region_code);
                        national_prefix = digits.clone();
                    }
                    // Nothing to format until a digit follows the prefix
                    let output = digits.clone();
                    return (
                        Self {
                            state: AsYouTypeState::Collecting,
                            digits,
                            national_prefix,
                            candidates: self.candidates.clone(),
                        },
                        output,
                    );
                }
            }
        }
        let national_number = &digits[national_prefix.len()..];

        let candidates = self
            .candidates
            .iter()
            .copied()
            .filter(|index| {
                region
                    .format_rules
                    .get(*index)
                    .is_some_and(|rule| matcher.is_rule_prefix_compatible(national_number, rule))
            })
            .collect::<Vec<_>>();

        let Some(rule) = candidates.first().and_then(|index| region.format_rules.get(*index)) else {
            debug!("No format rule fits '{digits}' in {}, echoing digits", region.region_code);
            let output = digits.clone();
            return (
                Self {
                    state: AsYouTypeState::Overflow,
                    digits,
                    national_prefix,
                    candidates,
                },
                output,
            );
        };

        let output = if national_prefix.is_empty() {
            matcher.render(national_number, rule, PhoneNumberFormat::National)
        } else {
            matcher.render_after_national_prefix(national_number, &national_prefix, rule, region)
        };
        trace!("'{digits}' rendered as '{output}' with pattern {}", rule.pattern);
        (
            Self {
                state: AsYouTypeState::Collecting,
                digits,
                national_prefix,
                candidates,
            },
            output,
        )
    }
}
