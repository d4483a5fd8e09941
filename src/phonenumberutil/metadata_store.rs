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
    collections::{HashMap, HashSet, VecDeque},
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use arc_swap::ArcSwap;
use log::{debug, trace, warn};

use super::{
    errors::{InvalidMetadataError, UnsupportedRegionError},
    format_template::{TemplateToken, tokenize},
    helper_constants::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN},
    pattern_matcher::PatternMatcher,
};
use crate::{
    i18n::RegionCode,
    metadata::RegionMetadata,
    regexp_cache::InvalidRegexError,
};

/// One immutable generation of loaded metadata.
///
/// Every operation works on a single snapshot, so a concurrent load never
/// mixes two generations within one call.
#[derive(Debug, Default)]
pub struct MetadataSnapshot {
    generation: u64,

    /// Records in load order.
    regions: Vec<Arc<RegionMetadata>>,

    /// A mapping from a region code to the index of its RegionMetadata.
    region_to_metadata_map: HashMap<String, usize>,

    /// A mapping from a country calling code to the region codes which share
    /// it. Note regions under NANPA share the country calling code 1 and
    /// Russia and Kazakhstan share the country calling code 7. The main region
    /// comes first. This is implemented as a sorted vector to achieve better
    /// performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
}

impl MetadataSnapshot {
    fn build(
        generation: u64,
        records: Vec<RegionMetadata>,
    ) -> Result<Self, InvalidMetadataError> {
        let mut region_to_metadata_map = HashMap::with_capacity(records.len());
        let mut regions = Vec::with_capacity(records.len());
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        let mut codes_with_main_region = HashSet::<i32>::new();

        for metadata in records {
            let region_code = metadata.region_code.clone();
            if region_to_metadata_map.contains_key(&region_code) {
                return Err(InvalidMetadataError::DuplicateRegion(region_code));
            }
            let country_calling_code = metadata.country_code;

            let mut main_country_code = metadata.main_country_for_code;
            if main_country_code && !codes_with_main_region.insert(country_calling_code) {
                warn!(
                    "Region {} is flagged main for calling code {} which already has one; ignoring the flag",
                    region_code, country_calling_code
                );
                main_country_code = false;
            }

            if let Some(calling_code_in) = country_calling_code_to_region_map.get_mut(&country_calling_code) {
                if main_country_code {
                    calling_code_in.push_front(region_code.clone());
                } else {
                    calling_code_in.push_back(region_code.clone());
                }
            } else {
                // For most country calling codes, there will be only one region code.
                let mut list_with_region_code = VecDeque::new();
                list_with_region_code.push_back(region_code.clone());
                country_calling_code_to_region_map.insert(country_calling_code, list_with_region_code);
            }

            region_to_metadata_map.insert(region_code, regions.len());
            regions.push(Arc::new(metadata));
        }

        let mut country_calling_code_to_region_code_map = country_calling_code_to_region_map
            .into_iter()
            .map(|(k, v)| (k, Vec::from(v)))
            .collect::<Vec<_>>();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_code_map.sort_by_key(|(a, _)| *a);

        Ok(Self {
            generation,
            regions,
            region_to_metadata_map,
            country_calling_code_to_region_code_map,
        })
    }

    /// Number of the load which produced this snapshot, 0 before any load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, region_code: &str) -> Result<Arc<RegionMetadata>, UnsupportedRegionError> {
        self.region_to_metadata_map
            .get(region_code)
            .map(|index| Arc::clone(&self.regions[*index]))
            .ok_or_else(|| UnsupportedRegionError(region_code.to_owned()))
    }

    pub fn contains(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    /// Region codes sharing the calling code, main region first. Empty if the
    /// calling code is unknown.
    pub fn regions_by_calling_code(&self, country_calling_code: i32) -> &[String] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn main_region_for_calling_code(&self, country_calling_code: i32) -> Option<Arc<RegionMetadata>> {
        self.regions_by_calling_code(country_calling_code)
            .first()
            .and_then(|region_code| self.get(region_code).ok())
    }

    /// The region itself when it has format rules, else the main region of
    /// its calling code. All NANPA formatting rules are contained by US, and
    /// the same applies to the other shared calling codes.
    pub fn format_rules_region(&self, metadata: Arc<RegionMetadata>) -> Arc<RegionMetadata> {
        if !metadata.format_rules.is_empty() {
            return metadata;
        }
        match self.main_region_for_calling_code(metadata.country_code) {
            Some(main) => {
                trace!("Region {} has no format rules, using those of {}", metadata.region_code, main.region_code);
                main
            }
            None => metadata,
        }
    }

    /// Region codes in load order.
    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|metadata| metadata.region_code.as_str())
    }

    /// Calling codes in ascending order, each with its regions, main first.
    pub fn calling_code_index(&self) -> impl Iterator<Item = (i32, &[String])> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, regions)| (*code, regions.as_slice()))
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }
}

/// Holder of the active [`MetadataSnapshot`].
///
/// Readers take the current snapshot with [`MetadataStore::snapshot`] without
/// locking; a load builds a whole new snapshot and swaps it in.
pub struct MetadataStore {
    current: ArcSwap<MetadataSnapshot>,
    generation: AtomicU64,
    /// Keeps generations in the order they are stored.
    write_lock: Mutex<()>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(MetadataSnapshot::default()),
            generation: AtomicU64::new(0),
            write_lock: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> Arc<MetadataSnapshot> {
        self.current.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Validates the batch and replaces the active metadata with it. Returns
    /// the generation of the new snapshot. On error the previous snapshot
    /// stays active.
    pub fn load(
        &self,
        records: Vec<RegionMetadata>,
        matcher: &PatternMatcher,
    ) -> Result<u64, InvalidMetadataError> {
        for metadata in &records {
            check_region(metadata, matcher)?;
        }
        let region_count = records.len();

        // Poisoning only means another load panicked half-way, the store
        // itself is still consistent.
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let generation = self.generation.load(Ordering::Acquire) + 1;
        let snapshot = MetadataSnapshot::build(generation, records)?;
        self.current.store(Arc::new(snapshot));
        self.generation.store(generation, Ordering::Release);

        debug!("Loaded metadata for {region_count} regions, generation {generation}");
        Ok(generation)
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_pattern(region: &str, pattern: &str, source: InvalidRegexError) -> InvalidMetadataError {
    InvalidMetadataError::InvalidPattern {
        region: region.to_owned(),
        pattern: pattern.to_owned(),
        source,
    }
}

fn check_lengths(region: &str, lengths: &[u32]) -> Result<(), InvalidMetadataError> {
    match lengths
        .iter()
        .find(|length| !(MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(*length))
    {
        Some(length) => Err(InvalidMetadataError::InvalidPossibleLength {
            region: region.to_owned(),
            length: *length,
        }),
        None => Ok(()),
    }
}

fn check_template(region: &str, template: &str) -> Result<(), InvalidMetadataError> {
    if tokenize(template).contains(&TemplateToken::Group(1)) {
        Ok(())
    } else {
        Err(InvalidMetadataError::MalformedFormatTemplate {
            region: region.to_owned(),
            template: template.to_owned(),
        })
    }
}

/// Rejects anything the engine could not use later. Compiling the patterns
/// here also warms the matcher caches.
fn check_region(metadata: &RegionMetadata, matcher: &PatternMatcher) -> Result<(), InvalidMetadataError> {
    let region = metadata.region_code.as_str();
    if !RegionCode::is_well_formed(region) {
        return Err(InvalidMetadataError::MalformedRegionCode(region.to_owned()));
    }
    if !(1..=999).contains(&metadata.country_code) {
        return Err(InvalidMetadataError::InvalidCountryCallingCode {
            region: region.to_owned(),
            country_code: metadata.country_code,
        });
    }
    if metadata.possible_lengths.is_empty() {
        return Err(InvalidMetadataError::EmptyPossibleLengths(region.to_owned()));
    }
    check_lengths(region, &metadata.possible_lengths)?;

    let check = |pattern: &str| {
        matcher
            .check_pattern(pattern)
            .map_err(|source| invalid_pattern(region, pattern, source))
    };
    let check_prefix = |pattern: &str| {
        matcher
            .check_prefix_pattern(pattern)
            .map_err(|source| invalid_pattern(region, pattern, source))
    };

    check(&metadata.national_number_pattern)?;
    if let Some(pattern) = &metadata.national_prefix_for_parsing {
        check(pattern)?;
    }
    if let Some(pattern) = &metadata.leading_digits {
        check(pattern)?;
    }
    for desc in metadata.number_types.values() {
        check(&desc.national_number_pattern)?;
        check_lengths(region, &desc.possible_lengths)?;
    }
    for rule in &metadata.format_rules {
        check(&rule.pattern)?;
        check_prefix(&rule.pattern)?;
        for leading_digits in &rule.leading_digits_patterns {
            check(leading_digits)?;
            check_prefix(leading_digits)?;
        }
        check_template(region, &rule.national_format_template)?;
        if let Some(template) = &rule.international_format_template {
            if PatternMatcher::is_international_format_available(rule) {
                check_template(region, template)?;
            }
        }
    }
    Ok(())
}
