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

use std::sync::Arc;

use dec_from_char::DecimalExtended;
use log::debug;

use super::formatter_state::{AsYouTypeState, FormatterState};
use crate::{
    errors::AsYouTypeError,
    metadata::RegionMetadata,
    phonenumberutil::phonenumberutil::PhoneNumberUtil,
};

/// The region a session was set to, and the region whose rules it formats
/// with (the same one unless the region has no rules of its own).
#[derive(Debug, Clone)]
struct ActiveRegion {
    region: Arc<RegionMetadata>,
    rules: Arc<RegionMetadata>,
}

/// Formats a phone number digit by digit, as it is being typed.
///
/// A session pins the metadata of its region when the region is set; loading
/// new metadata afterwards does not affect it until `set_region` is called
/// again. Sessions are cheap and meant to be used by one input field each.
pub struct AsYouTypeFormatter<'a> {
    util: &'a PhoneNumberUtil,
    region: Option<ActiveRegion>,
    state: FormatterState,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub(crate) fn new(util: &'a PhoneNumberUtil) -> Self {
        Self {
            util,
            region: None,
            state: FormatterState::new(),
        }
    }

    /// Starts formatting for `region_code`, dropping any typed digits.
    pub fn set_region(&mut self, region_code: &str) -> Result<(), AsYouTypeError> {
        let snapshot = self.util.snapshot();
        let region = snapshot.get(region_code)?;
        let rules = snapshot.format_rules_region(Arc::clone(&region));
        self.state = FormatterState::for_region(&rules, self.util.matcher());
        self.region = Some(ActiveRegion { region, rules });
        Ok(())
    }

    /// Drops the typed digits and starts over with the same region.
    pub fn clear(&mut self) {
        self.state = match &self.region {
            Some(active) => FormatterState::for_region(&active.rules, self.util.matcher()),
            None => FormatterState::new(),
        };
    }

    /// Appends one digit and returns the whole number formatted so far.
    ///
    /// Any Unicode decimal digit is accepted and taken as its ASCII value.
    pub fn input_digit(&mut self, digit: char) -> Result<String, AsYouTypeError> {
        let Some(active) = &self.region else {
            return Err(AsYouTypeError::NoRegionSet);
        };
        let normalized = normalize_digit(digit).ok_or(AsYouTypeError::NotADigit(digit))?;
        let (state, output) = self.state.accept_digit(normalized, &active.rules, self.util.matcher());
        if state.state() != self.state.state() {
            debug!("As-you-type state {:?} -> {:?}", self.state.state(), state.state());
        }
        self.state = state;
        Ok(output)
    }

    pub fn state(&self) -> AsYouTypeState {
        self.state.state()
    }

    /// Digits typed since the last `clear` or `set_region`, ASCII only.
    pub fn digits(&self) -> &str {
        self.state.digits()
    }

    /// National prefix found at the start of the digits, empty if none.
    pub fn national_prefix(&self) -> &str {
        self.state.national_prefix()
    }

    /// Indices of the format rules still able to format the digits.
    pub fn candidates(&self) -> &[usize] {
        self.state.candidates()
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region.as_ref().map(|active| active.region.region_code.as_str())
    }
}

fn normalize_digit(digit: char) -> Option<char> {
    if digit.is_ascii_digit() {
        return Some(digit);
    }
    if !digit.is_decimal_utf8() {
        return None;
    }
    let mut buf = [0u8; 4];
    dec_from_char::normalize_decimals(digit.encode_utf8(&mut buf))
        .chars()
        .next()
        .filter(|c| c.is_ascii_digit())
}
