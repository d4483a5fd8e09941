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

use log::trace;

use crate::{
    interfaces::MetadataLoader,
    phonenumberutil::errors::MetadataLoadError,
};

use super::RegionMetadata;

/// All known region records kept in memory, handing out the subset a caller
/// asks for.
#[derive(Debug, Clone, Default)]
pub struct MetadataCollection {
    metadata: Vec<RegionMetadata>,
}

impl MetadataCollection {
    pub fn new(metadata: Vec<RegionMetadata>) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &[RegionMetadata] {
        &self.metadata
    }

    fn find(&self, region_code: &str) -> Option<&RegionMetadata> {
        self.metadata.iter().find(|m| m.region_code == region_code)
    }
}

impl FromIterator<RegionMetadata> for MetadataCollection {
    fn from_iter<T: IntoIterator<Item = RegionMetadata>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl MetadataLoader for MetadataCollection {
    /// Each requested region is followed by every region sharing its calling
    /// code, so loading "BS" also brings in "US". Duplicates keep their first
    /// position.
    fn load_metadata(&self, region_codes: &[&str]) -> Result<Vec<RegionMetadata>, MetadataLoadError> {
        let mut batch: Vec<RegionMetadata> = Vec::with_capacity(region_codes.len());
        let push_unique = |metadata: &RegionMetadata, batch: &mut Vec<RegionMetadata>| {
            if !batch.iter().any(|m| m.region_code == metadata.region_code) {
                batch.push(metadata.clone());
            }
        };

        for &region_code in region_codes {
            let Some(requested) = self.find(region_code) else {
                return Err(MetadataLoadError::UnknownRegion(region_code.to_owned()));
            };
            push_unique(requested, &mut batch);
            for sibling in self
                .metadata
                .iter()
                .filter(|m| m.country_code == requested.country_code)
            {
                trace!(
                    "Region {} pulled in by {} (calling code {})",
                    sibling.region_code, region_code, requested.country_code
                );
                push_unique(sibling, &mut batch);
            }
        }
        Ok(batch)
    }
}
