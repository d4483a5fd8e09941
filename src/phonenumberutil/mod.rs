mod helper_constants;
mod helper_functions;
mod format_template;
pub mod errors;
pub mod enums;
pub mod formatter;
pub mod metadata_store;
pub mod pattern_matcher;
pub mod phonenumberutil;
pub mod validator;
mod phone_number_regexps_and_mappings;

use std::sync::LazyLock;

pub use enums::{PhoneNumberFormat, PhoneNumberType};
pub use errors::{
    AsYouTypeError, FormatError, InvalidMetadataError, MetadataLoadError, UnsupportedRegionError,
    ValidationError,
};
pub use validator::{ValidNumber, ValidationResult};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Shared instance. It starts without metadata; load some with
/// [`PhoneNumberUtil::use_meta`] before use.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
