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


use log::error;
use super::regex_util::{PrefixViability, RegexConsume};

use crate::{interfaces, regexp_cache::{InvalidRegexError, PrefixAutomatonCache, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
    automaton_cache: PrefixAutomatonCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(128),
            automaton_cache: PrefixAutomatonCache::with_capacity(64),
        }
    }

    fn match_number(
        &self, phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool
    ) -> Result<bool, InvalidRegexError> {
        // find first occurrence
        if allow_prefix_match {
            let regexp = self.cache.get_regex(number_pattern)?;
            Ok(regexp.matches_start(phone_number))
        } else {
            let regexp = self.cache.get_full_match_regex(number_pattern)?;
            Ok(regexp.is_match(phone_number))
        }
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self, number: &str,
        national_number_pattern: &str,
        allow_prefix_match: bool
    ) -> bool {
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", national_number_pattern, err);
                false
            }
        }
    }

    fn is_viable_prefix(&self, prefix: &str, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        match self.automaton_cache.get_automaton(pattern) {
            Ok(dfa) => dfa.is_viable_prefix(prefix),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                false
            }
        }
    }

    fn check_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.cache.get_full_match_regex(pattern)?;
        self.cache.get_regex(pattern)?;
        Ok(())
    }

    fn check_prefix_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.check_pattern(pattern)?;
        self.automaton_cache.get_automaton(pattern)?;
        Ok(())
    }
}
