use crate::{AsYouTypeError, AsYouTypeFormatter, AsYouTypeState, UnsupportedRegionError};

use super::{get_phone_util, region_code::RegionCode};

fn type_all(formatter: &mut AsYouTypeFormatter<'_>, digits: &str) -> Vec<String> {
    digits
        .chars()
        .map(|digit| formatter.input_digit(digit).unwrap())
        .collect()
}

#[test]
fn us_number_typed_digit_by_digit() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::us()).unwrap();

    assert_eq!(
        type_all(&mut formatter, "9192823456"),
        [
            "9",
            "91",
            "919",
            "919-2",
            "919-28",
            "919-282",
            "919-2823",
            "(919) 282-34",
            "(919) 282-345",
            "(919) 282-3456",
        ]
    );
    assert_eq!(formatter.state(), AsYouTypeState::Collecting);
    assert_eq!(formatter.digits(), "9192823456");
}

#[test]
fn too_many_digits_are_echoed() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::us()).unwrap();

    let outputs = type_all(&mut formatter, "91928234567");
    assert_eq!(outputs.last().unwrap(), "91928234567");
    assert_eq!(formatter.state(), AsYouTypeState::Overflow);
    assert!(formatter.candidates().is_empty());

    assert_eq!(formatter.input_digit('8').unwrap(), "919282345678");
    assert_eq!(formatter.state(), AsYouTypeState::Overflow);
}

#[test]
fn clear_starts_over() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::us()).unwrap();
    type_all(&mut formatter, "91928234567");

    formatter.clear();
    assert_eq!(formatter.state(), AsYouTypeState::Collecting);
    assert_eq!(formatter.digits(), "");
    assert_eq!(formatter.input_digit('9').unwrap(), "9");
    assert_eq!(formatter.region_code(), Some("US"));
}

#[test]
fn output_grows_while_the_rule_is_kept() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::gb()).unwrap();

    let mut previous_output = String::new();
    let mut previous_rule = None;
    for digit in "1212345678".chars() {
        let output = formatter.input_digit(digit).unwrap();
        let rule = formatter.candidates().first().copied();
        if rule == previous_rule {
            assert!(
                output.starts_with(&previous_output),
                "'{output}' does not extend '{previous_output}'"
            );
        }
        previous_output = output;
        previous_rule = rule;
    }
    assert_eq!(previous_output, "121 234 5678");
}

#[test]
fn candidates_never_come_back() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::ru()).unwrap();

    let mut previous = formatter.candidates().to_vec();
    for digit in "9123456789".chars() {
        formatter.input_digit(digit).unwrap();
        assert!(formatter.candidates().iter().all(|index| previous.contains(index)));
        previous = formatter.candidates().to_vec();
    }
}

#[test]
fn ru_switches_rule_when_the_short_one_no_longer_fits() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::ru()).unwrap();

    assert_eq!(
        type_all(&mut formatter, "9123456789"),
        [
            "9",
            "91",
            "912",
            "912-3",
            "912-34",
            "912-34-5",
            "912-34-56",
            "912 345-67",
            "912 345-67-8",
            "912 345-67-89",
        ]
    );
    assert_eq!(formatter.candidates(), [1]);
}

#[test]
fn region_without_rules_types_with_main_region_rules() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::bs()).unwrap();
    assert_eq!(formatter.region_code(), Some("BS"));

    let outputs = type_all(&mut formatter, "2423570000");
    assert_eq!(outputs[5], "242-357");
    assert_eq!(outputs.last().unwrap(), "(242) 357-0000");
}

#[test]
fn digits_before_region_are_rejected() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    assert_eq!(formatter.state(), AsYouTypeState::NoRegion);
    assert_eq!(formatter.region_code(), None);
    assert_eq!(formatter.input_digit('1'), Err(AsYouTypeError::NoRegionSet));

    formatter.clear();
    assert_eq!(formatter.state(), AsYouTypeState::NoRegion);
    assert_eq!(formatter.input_digit('1'), Err(AsYouTypeError::NoRegionSet));
}

#[test]
fn unsupported_region_is_rejected() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    assert_eq!(
        formatter.set_region(RegionCode::tr()),
        Err(AsYouTypeError::UnsupportedRegion(UnsupportedRegionError("TR".to_owned())))
    );
    assert_eq!(formatter.state(), AsYouTypeState::NoRegion);
}

#[test]
fn non_digits_leave_the_session_untouched() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::us()).unwrap();
    type_all(&mut formatter, "919");

    assert_eq!(formatter.input_digit('a'), Err(AsYouTypeError::NotADigit('a')));
    assert_eq!(formatter.input_digit('-'), Err(AsYouTypeError::NotADigit('-')));
    assert_eq!(formatter.digits(), "919");
    assert_eq!(formatter.input_digit('2').unwrap(), "919-2");
}

#[test]
fn full_width_digits_are_accepted() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::us()).unwrap();
    assert_eq!(formatter.input_digit('\u{FF19}').unwrap(), "9");
    assert_eq!(formatter.input_digit('\u{FF11}').unwrap(), "91");
    assert_eq!(formatter.digits(), "91");
}

#[test]
fn session_keeps_its_metadata_after_reload() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::us()).unwrap();
    type_all(&mut formatter, "919");

    let gb_only = super::test_metadata::test_metadata()
        .metadata()
        .iter()
        .filter(|metadata| metadata.country_code == 44)
        .cloned()
        .collect::<Vec<_>>();
    phone_util.use_meta(gb_only).unwrap();

    assert_eq!(formatter.input_digit('2').unwrap(), "919-2");
    assert!(formatter.set_region(RegionCode::us()).is_err());
}

#[test]
fn au_mobile_typed_with_national_prefix() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::au()).unwrap();

    assert_eq!(
        type_all(&mut formatter, "0412345678"),
        [
            "0",
            "04",
            "041",
            "0412",
            "0412 3",
            "0412 34",
            "0412 345",
            "0412 345 6",
            "0412 345 67",
            "0412 345 678",
        ]
    );
    assert_eq!(formatter.state(), AsYouTypeState::Collecting);
    assert_eq!(formatter.national_prefix(), "0");
    assert_eq!(formatter.digits(), "0412345678");
}

#[test]
fn national_prefix_follows_the_rule_that_formats_the_number() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();

    formatter.set_region(RegionCode::gb()).unwrap();
    let outputs = type_all(&mut formatter, "01212345678");
    assert_eq!(outputs[1], "01");
    assert_eq!(outputs[3], "0121");
    assert_eq!(outputs.last().unwrap(), "0121 234 5678");

    formatter.set_region(RegionCode::ru()).unwrap();
    let outputs = type_all(&mut formatter, "89123456789");
    assert_eq!(outputs[1], "8 9");
    assert_eq!(outputs[7], "8 912-34-56");
    assert_eq!(outputs[8], "8 (912) 345-67");
    assert_eq!(outputs.last().unwrap(), "8 (912) 345-67-89");

    formatter.set_region(RegionCode::us()).unwrap();
    let outputs = type_all(&mut formatter, "19192823456");
    assert_eq!(outputs[0], "1");
    assert_eq!(outputs[7], "1 919-2823");
    assert_eq!(outputs.last().unwrap(), "1 (919) 282-3456");
    assert_eq!(formatter.state(), AsYouTypeState::Collecting);
}

#[test]
fn clear_forgets_the_national_prefix() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter();
    formatter.set_region(RegionCode::au()).unwrap();
    type_all(&mut formatter, "04");
    formatter.clear();
    assert_eq!(formatter.national_prefix(), "");
    assert_eq!(formatter.input_digit('4').unwrap(), "4");
}
