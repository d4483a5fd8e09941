mod interfaces;
mod regexp_cache;
mod regex_based_matcher;
pub mod asyoutypeformatter;
pub mod i18n;
pub mod metadata;
mod phonenumberutil;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use asyoutypeformatter::{AsYouTypeFormatter, AsYouTypeState, FormatterState};
pub use interfaces::MetadataLoader;
pub use metadata::{FormatRule, MetadataCollection, NumberDesc, PhoneNumber, RegionMetadata};
pub use phonenumberutil::{
    PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberType, ValidNumber, ValidationResult,
    errors::{self, AsYouTypeError, FormatError, InvalidMetadataError, MetadataLoadError, UnsupportedRegionError, ValidationError},
    formatter,
    metadata_store::{MetadataSnapshot, MetadataStore},
    pattern_matcher::PatternMatcher,
    phonenumberutil::PhoneNumberUtil,
    validator,
};
pub use regexp_cache::InvalidRegexError;
