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

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use log::{debug, warn};

use super::{
    PhoneNumberFormat, PhoneNumberType,
    errors::{FormatError, InvalidMetadataError, MetadataLoadError, UnsupportedRegionError},
    formatter,
    helper_functions::get_supported_types_for_metadata,
    metadata_store::{MetadataSnapshot, MetadataStore},
    pattern_matcher::PatternMatcher,
    validator::{self, ValidationResult},
};
use crate::{
    asyoutypeformatter::AsYouTypeFormatter,
    i18n,
    interfaces::MetadataLoader,
    metadata::{PhoneNumber, RegionMetadata},
};

/// Entry point of the engine: owns the active metadata and the pattern
/// caches, and offers validation, formatting and as-you-type sessions on
/// top of them.
///
/// Every call reads one metadata snapshot, so it is safe to call
/// [`PhoneNumberUtil::use_meta`] while other threads format numbers.
pub struct PhoneNumberUtil {
    /// Active metadata, replaced as a whole by every load.
    store: MetadataStore,

    /// Compiled pattern caches, shared by all metadata generations.
    matcher: PatternMatcher,
}

impl PhoneNumberUtil {
    /// Creates an instance without any metadata. Nothing is supported
    /// until [`PhoneNumberUtil::use_meta`] is called.
    pub fn new() -> Self {
        Self {
            store: MetadataStore::new(),
            matcher: PatternMatcher::new(),
        }
    }

    pub fn new_for_metadata(
        metadata: impl IntoIterator<Item = RegionMetadata>,
    ) -> Result<Self, InvalidMetadataError> {
        let instance = Self::new();
        instance.use_meta(metadata)?;
        Ok(instance)
    }

    /// Replaces the active metadata with `metadata`. The batch is checked as
    /// a whole; if any record is invalid nothing changes.
    pub fn use_meta(
        &self,
        metadata: impl IntoIterator<Item = RegionMetadata>,
    ) -> Result<(), InvalidMetadataError> {
        self.store
            .load(metadata.into_iter().collect(), &self.matcher)
            .map(|_| ())
            .inspect_err(|err| warn!("Metadata rejected, keeping the current one: {err}"))
    }

    /// Asks `loader` for the given regions (and the regions sharing their
    /// calling codes) and uses the result as the active metadata.
    pub fn load_regions(
        &self,
        loader: &impl MetadataLoader,
        region_codes: &[&str],
    ) -> Result<(), MetadataLoadError> {
        let metadata = loader.load_metadata(region_codes)?;
        debug!("Loader returned {} regions for {:?}", metadata.len(), region_codes);
        self.use_meta(metadata)?;
        Ok(())
    }

    /// Generation of the active metadata; 0 before the first load.
    pub fn metadata_generation(&self) -> u64 {
        self.store.generation()
    }

    /// The active metadata. Holding the snapshot keeps it alive across loads.
    pub fn snapshot(&self) -> Arc<MetadataSnapshot> {
        self.store.snapshot()
    }

    pub(crate) fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Region codes in load order.
    pub fn get_supported_regions(&self) -> Vec<String> {
        self.snapshot()
            .supported_regions()
            .map(str::to_owned)
            .collect()
    }

    /// Calling code, as a string of digits, to the regions using it. The main
    /// region of every calling code comes first.
    pub fn country_code_to_region_code_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut buf = itoa::Buffer::new();
        self.snapshot()
            .calling_code_index()
            .map(|(code, regions)| (buf.format(code).to_owned(), regions.to_vec()))
            .collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.snapshot().supported_calling_codes().collect()
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> Result<i32, UnsupportedRegionError> {
        self.snapshot()
            .get(region_code)
            .map(|metadata| metadata.country_code)
    }

    /// Returns the region codes that match the specific country calling code.
    /// In the case of no region code being found, the list is empty.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<String> {
        self.snapshot()
            .regions_by_calling_code(country_calling_code)
            .to_vec()
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> String {
        self.snapshot()
            .regions_by_calling_code(country_calling_code)
            .first()
            .cloned()
            .unwrap_or_else(|| i18n::RegionCode::get_unknown().to_owned())
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.snapshot()
            .get(region_code)
            .ok()
            .map(|metadata| {
                let mut types = HashSet::new();
                get_supported_types_for_metadata(&metadata, &mut types);
                types
            })
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    /// Returns the national dialling prefix of a region, e.g. "0" for GB.
    /// With `strip_non_digits` a "~" (wait for dial tone) is removed.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        self.snapshot()
            .get(region_code)
            .ok()
            .and_then(|metadata| {
                let mut prefix = metadata.national_prefix.clone()?;
                if strip_non_digits {
                    prefix = prefix.replace("~", "");
                }
                Some(prefix)
            })
            .or_else(|| {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                None
            })
    }

    /// Formats with the rules of the main region of the number's calling code.
    pub fn format(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<String, FormatError> {
        formatter::format(&self.snapshot(), &self.matcher, phone_number, number_format, None)
    }

    /// Formats with the rules of `region_code`, or of its calling code's main
    /// region when it has none.
    pub fn format_for_region(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        region_code: &str,
    ) -> Result<String, FormatError> {
        formatter::format(
            &self.snapshot(),
            &self.matcher,
            phone_number,
            number_format,
            Some(region_code),
        )
    }

    /// Validates the number against the plan of `region_code`. Only an
    /// unsupported region is an error; an invalid number is reported in the
    /// returned [`ValidationResult`].
    ///
    /// Besides `PHN_NUMBER_TOO_SHORT`, `PHN_NUMBER_TOO_LONG`,
    /// `PHN_NUMBER_INVALID_PATTERN` and `COUNTRY_CODE_MISMATCH`, a number whose
    /// length lies between the shortest and longest possible lengths without
    /// being one of them fails with `PHN_NUMBER_INVALID_LENGTH`
    /// ([`crate::ValidationError::InvalidLength`]).
    pub fn validate_phone_number(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> Result<ValidationResult, UnsupportedRegionError> {
        validator::validate(&self.snapshot(), &self.matcher, phone_number, region_code)
    }

    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        validator::is_valid_number(&self.snapshot(), &self.matcher, phone_number)
    }

    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        validator::get_number_type(&self.snapshot(), &self.matcher, phone_number)
    }

    /// Region the number belongs to among those sharing its calling code,
    /// the unknown region if none claims it.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> String {
        validator::get_region_for_number(&self.snapshot(), &self.matcher, phone_number)
            .map(|metadata| metadata.region_code.clone())
            .unwrap_or_else(|| i18n::RegionCode::get_unknown().to_owned())
    }

    /// A new as-you-type session. Call `set_region` on it before typing.
    pub fn get_as_you_type_formatter(&self) -> AsYouTypeFormatter<'_> {
        AsYouTypeFormatter::new(self)
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
