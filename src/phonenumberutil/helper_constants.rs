// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: u32 = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: u32 = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
// Acceptable punctuation found in phone numbers, ready to be put inside a
// regex character class. This consists of dash characters, white space
// characters, full stops, slashes, square brackets, parentheses and tildes.
// Full-width variants are also present.
pub const VALID_PUNCTUATION: &'static str = "\\-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_PREFIX: &'static str = "tel:";

/// Placeholders of a national prefix formatting rule.
pub const NATIONAL_PREFIX_PLACEHOLDER: &'static str = "$NP";
pub const FIRST_GROUP_PLACEHOLDER: &'static str = "$FG";
pub const FIRST_GROUP_REFERENCE: &'static str = "$1";

/// International format value marking a rule as national-only.
pub const NO_INTERNATIONAL_FORMAT: &'static str = "NA";

// A long enough string of nines that any format pattern, once its digit
// classes are made generic, matches its longest form against it. Used to
// derive group widths for numbers that are still being typed.
pub const LONGEST_PHONE_NUMBER_TEMPLATE: &'static str = "999999999999999";
