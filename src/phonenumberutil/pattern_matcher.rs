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

use std::borrow::Cow;

use log::{error, trace};

use super::{
    PhoneNumberFormat,
    format_template::{self, fill, tokenize},
    helper_constants::{
        FIRST_GROUP_PLACEHOLDER, FIRST_GROUP_REFERENCE, LONGEST_PHONE_NUMBER_TEMPLATE,
        NATIONAL_PREFIX_PLACEHOLDER, NO_INTERNATIONAL_FORMAT,
    },
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    interfaces::MatcherApi,
    metadata::{FormatRule, NumberDesc, RegionMetadata},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::InvalidRegexError,
};

/// Matching of national numbers against region metadata, and rendering of
/// format templates.
///
/// Holds no metadata of its own; the only state is the cache of compiled
/// patterns, so one instance serves every metadata generation.
pub struct PatternMatcher {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions.
    reg_exps: PhoneNumberRegExpsAndMappings,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
        }
    }

    /// True iff the digit count of the number is one of the possible lengths.
    pub fn matches_length(&self, national_number: &str, metadata: &RegionMetadata) -> bool {
        let actual_length = national_number.chars().count() as u32;
        metadata.possible_lengths.contains(&actual_length)
    }

    /// Full match against the region's national number pattern.
    pub fn matches_pattern(&self, national_number: &str, metadata: &RegionMetadata) -> bool {
        self.matcher_api
            .match_national_number(national_number, &metadata.national_number_pattern, false)
    }

    /// Checks a number against one number type description. Possible lengths
    /// are used to avoid checking the pattern when they don't match; absent
    /// lengths mean they are those of the region.
    pub fn matches_desc(&self, national_number: &str, desc: &NumberDesc) -> bool {
        let actual_length = national_number.chars().count() as u32;
        if !desc.possible_lengths.is_empty() && !desc.possible_lengths.contains(&actual_length) {
            return false;
        }
        self.matcher_api
            .match_national_number(national_number, &desc.national_number_pattern, false)
    }

    /// True if the start of the number matches `pattern`.
    pub fn matches_prefix(&self, national_number: &str, pattern: &str) -> bool {
        self.matcher_api.match_national_number(national_number, pattern, true)
    }

    /// Returns the rest of the number after the part `pattern` matches at its
    /// start. An empty match consumes nothing and counts as no match.
    pub(crate) fn consume_prefix<'n>(&self, national_number: &'n str, pattern: &str) -> Option<&'n str> {
        let regex = match self.reg_exps.regexp_cache.get_regex(pattern) {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                return None;
            }
        };
        let consumed = regex.find_start(national_number)?;
        if consumed.is_empty() {
            return None;
        }
        Some(&national_number[consumed.end()..])
    }

    fn matches_leading_digits(&self, national_number: &str, rule: &FormatRule) -> bool {
        rule.leading_digits_patterns.is_empty()
            || rule
                .leading_digits_patterns
                .iter()
                .any(|pattern| self.matches_prefix(national_number, pattern))
    }

    /// Returns the first rule, in declaration order, whose pattern matches
    /// the whole number and whose leading digits match its start.
    pub fn select_format_rule<'m>(
        &self,
        national_number: &str,
        metadata: &'m RegionMetadata,
    ) -> Option<&'m FormatRule> {
        self.choose_formatting_pattern_for_number(metadata.format_rules.iter(), national_number)
    }

    pub(crate) fn choose_formatting_pattern_for_number<'m>(
        &self,
        available_formats: impl IntoIterator<Item = &'m FormatRule>,
        national_number: &str,
    ) -> Option<&'m FormatRule> {
        for format in available_formats {
            if !self.matches_leading_digits(national_number, format) {
                continue;
            }
            if self
                .matcher_api
                .match_national_number(national_number, &format.pattern, false)
            {
                trace!("Number '{national_number}' formatted with pattern {}", format.pattern);
                return Some(format);
            }
        }
        None
    }

    /// Renders the number with the rule's template for `number_format`.
    ///
    /// National style uses the national template as declared (the national
    /// prefix is the formatter's business), international and RFC3966 use the
    /// international one. Numbers too short for the pattern are split by the
    /// widths of its groups and trailing empty groups are omitted.
    pub fn render(
        &self,
        national_number: &str,
        rule: &FormatRule,
        number_format: PhoneNumberFormat,
    ) -> String {
        match number_format {
            PhoneNumberFormat::E164 => national_number.to_owned(),
            PhoneNumberFormat::National => {
                self.render_with_template(national_number, &rule.pattern, &rule.national_format_template)
            }
            PhoneNumberFormat::International => {
                let template = Self::international_template(rule);
                self.render_with_template(national_number, &rule.pattern, &template)
            }
            PhoneNumberFormat::RFC3966 => {
                let template = Self::international_template(rule);
                let formatted = self.render_with_template(national_number, &rule.pattern, &template);
                self.to_rfc3966_separators(&formatted).into_owned()
            }
        }
    }

    pub(crate) fn render_with_template(&self, national_number: &str, pattern: &str, template: &str) -> String {
        let tokens = tokenize(template);
        match self.reg_exps.regexp_cache.get_full_match_regex(pattern) {
            Ok(regex) => {
                if let Some(captures) = regex.captures(national_number) {
                    let groups = (1..captures.len())
                        .map(|i| captures.get(i).map_or("", |m| m.as_str()))
                        .collect::<Vec<_>>();
                    return fill(&tokens, &groups, true);
                }
            }
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                return national_number.to_owned();
            }
        }

        // Partial number, slices must fall on char boundaries
        if !national_number.is_ascii() {
            return national_number.to_owned();
        }
        let Some(widths) = self.group_widths(pattern) else {
            return national_number.to_owned();
        };
        let mut groups = Vec::with_capacity(widths.len());
        let mut rest = national_number;
        for width in widths {
            let take = width.min(rest.len());
            groups.push(&rest[..take]);
            rest = &rest[take..];
        }
        if !rest.is_empty() {
            trace!("Number '{national_number}' is longer than pattern {pattern}");
            return national_number.to_owned();
        }
        fill(&tokens, &groups, false)
    }

    /// Widths of the capturing groups of `pattern` in its longest form. The
    /// pattern is made digit-generic first so that e.g. `(1\d{2})` has a
    /// width even though it never matches nines.
    pub(crate) fn group_widths(&self, pattern: &str) -> Option<Vec<usize>> {
        let generic = self.reg_exps.character_class_pattern.replace_all(pattern, "\\d");
        let generic = format_template::generalize_standalone_digits(&generic);
        let regex = match self.reg_exps.regexp_cache.get_regex(&generic) {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid regex! {}: {}", generic, err);
                return None;
            }
        };
        let captures = regex.captures_start(LONGEST_PHONE_NUMBER_TEMPLATE)?;
        Some(
            (1..captures.len())
                .map(|i| captures.get(i).map_or(0, |m| m.len()))
                .collect(),
        )
    }

    /// Template for international output, `None` when the rule is national-only.
    pub(crate) fn international_template(rule: &FormatRule) -> Cow<'_, str> {
        match rule.international_format_template.as_deref() {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(format_template::international_from_national(
                &rule.national_format_template,
            )),
        }
    }

    pub(crate) fn is_international_format_available(rule: &FormatRule) -> bool {
        rule.international_format_template.as_deref() != Some(NO_INTERNATIONAL_FORMAT)
    }

    /// National template of `rule` with the national prefix formatting rule
    /// merged into its first group, e.g. `$1 $2 $3` + `0$1` -> `0$1 $2 $3`.
    pub(crate) fn national_template<'r>(
        &self,
        rule: &'r FormatRule,
        metadata: &RegionMetadata,
    ) -> Cow<'r, str> {
        let template = Cow::Borrowed(rule.national_format_template.as_str());
        let Some(prefix_rule) = metadata.national_prefix_formatting_rule_for(rule) else {
            return template;
        };
        let Some(prefix_rule) = Self::resolve_national_prefix_formatting_rule(
            prefix_rule,
            metadata.national_prefix.as_deref(),
        ) else {
            return template;
        };
        // The rule is used as a replacement string, its `$1` expands to the
        // first group reference matched in the template.
        self.reg_exps
            .first_group_capturing_pattern
            .replace(&rule.national_format_template, prefix_rule.as_str())
    }

    /// Renders a national number typed after its national prefix. The prefix
    /// goes where the national prefix formatting rule puts it, or in front
    /// followed by a space when the rule doesn't place it.
    pub(crate) fn render_after_national_prefix(
        &self,
        national_number: &str,
        national_prefix: &str,
        rule: &FormatRule,
        metadata: &RegionMetadata,
    ) -> String {
        let rule_places_prefix = metadata.national_prefix.as_deref() == Some(national_prefix)
            && metadata
                .national_prefix_formatting_rule_for(rule)
                .is_some_and(|prefix_rule| prefix_rule.contains(NATIONAL_PREFIX_PLACEHOLDER));
        if rule_places_prefix {
            let template = self.national_template(rule, metadata);
            return self.render_with_template(national_number, &rule.pattern, &template);
        }
        let rendered = self.render(national_number, rule, PhoneNumberFormat::National);
        fast_cat::concat_str!(national_prefix, " ", &rendered)
    }

    /// Replaces `$NP` with the national prefix and `$FG` with `$1`. A rule
    /// needing a national prefix in a region without one is dropped.
    fn resolve_national_prefix_formatting_rule(
        rule: &str,
        national_prefix: Option<&str>,
    ) -> Option<String> {
        if rule.is_empty() {
            return None;
        }
        let rule = if rule.contains(NATIONAL_PREFIX_PLACEHOLDER) {
            match national_prefix {
                Some(prefix) if !prefix.is_empty() => rule.replace(NATIONAL_PREFIX_PLACEHOLDER, prefix),
                // We don't want to have a rule for how to format the national prefix if
                // there isn't one.
                _ => return None,
            }
        } else {
            rule.to_owned()
        };
        Some(rule.replace(FIRST_GROUP_PLACEHOLDER, FIRST_GROUP_REFERENCE))
    }

    /// Leading punctuation is dropped and every run of separators becomes `-`.
    pub(crate) fn to_rfc3966_separators<'b>(&self, formatted: &'b str) -> Cow<'b, str> {
        let mut formatted = Cow::Borrowed(formatted);
        // First consume any leading punctuation, if any was present.
        if let Some(separator) = self.reg_exps.separator_pattern.find_start(&formatted) {
            let end = separator.end();
            formatted = Cow::Owned(formatted[end..].to_owned());
        }
        // Then replace all separators with a "-".
        if let Cow::Owned(s) = self.reg_exps.separator_pattern.replace_all(&formatted, "-") {
            formatted = Cow::Owned(s);
        }
        formatted
    }

    /// A rule can drive the as-you-type formatter when its national template
    /// is made of group references and punctuation only, and its pattern has
    /// a derivable group layout.
    pub fn is_rule_eligible_for_as_you_type(&self, rule: &FormatRule) -> bool {
        self.reg_exps
            .is_format_eligible_as_you_type_formatting_regex
            .full_match(&rule.national_format_template)
            && self.group_widths(&rule.pattern).is_some()
    }

    /// Incremental counterpart of [`Self::select_format_rule`]: the digits
    /// typed so far may still become a number formatted by `rule`.
    pub fn is_rule_prefix_compatible(&self, prefix: &str, rule: &FormatRule) -> bool {
        let leading_digits_possible = rule.leading_digits_patterns.is_empty()
            || rule.leading_digits_patterns.iter().any(|pattern| {
                self.matches_prefix(prefix, pattern) || self.matcher_api.is_viable_prefix(prefix, pattern)
            });
        leading_digits_possible && self.matcher_api.is_viable_prefix(prefix, &rule.pattern)
    }

    pub(crate) fn check_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.matcher_api.check_pattern(pattern)
    }

    pub(crate) fn check_prefix_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.matcher_api.check_prefix_pattern(pattern)
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
