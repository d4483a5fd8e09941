use crate::{
    metadata::RegionMetadata,
    phonenumberutil::errors::MetadataLoadError,
    regexp_cache::InvalidRegexError,
};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the given pattern. With `allow_prefix_match` the pattern
    /// only has to match a prefix of the number.
    fn match_national_number(&self, number: &str, pattern: &str, allow_prefix_match: bool) -> bool;

    /// Returns whether `prefix` can still be extended into a string that the
    /// pattern matches in full.
    fn is_viable_prefix(&self, prefix: &str, pattern: &str) -> bool;

    /// Compiles the pattern (warming any cache) and reports syntax errors.
    fn check_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError>;

    /// Like `check_pattern`, for patterns that are also matched incrementally.
    fn check_prefix_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError>;
}

/// Source of region metadata. Implementations decide where the records come
/// from; the engine only needs the fully built batch.
///
/// Requesting a region must also return every region sharing its country
/// calling code.
pub trait MetadataLoader {
    fn load_metadata(&self, region_codes: &[&str]) -> Result<Vec<RegionMetadata>, MetadataLoadError>;
}
