use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phoneplan::{FormatRule, NumberDesc, PhoneNumber, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil, RegionMetadata};

fn setup_util() -> PhoneNumberUtil {
    let us = RegionMetadata::new("US", 1, "[2-9]\\d{9}", [10])
        .main_country_for_code()
        .with_national_prefix("1")
        .with_national_prefix_for_parsing("1")
        .with_number_type(PhoneNumberType::FixedLine, NumberDesc::new("[2-9]\\d{2}[2-9]\\d{6}"))
        .with_number_type(PhoneNumberType::Mobile, NumberDesc::new("[2-9]\\d{2}[2-9]\\d{6}"))
        .with_format_rule(
            FormatRule::new("(\\d{3})(\\d{4})", "$1-$2")
                .with_leading_digits("[24-9]|3(?:[02-9]|1[1-9])")
                .with_international_format("NA"),
        )
        .with_format_rule(
            FormatRule::new("(\\d{3})(\\d{3})(\\d{4})", "($1) $2-$3")
                .with_leading_digits("[2-9]")
                .with_international_format("$1-$2-$3"),
        );
    let gb = RegionMetadata::new("GB", 44, "[1-357-9]\\d{9}", [10])
        .main_country_for_code()
        .with_national_prefix("0")
        .with_national_prefix_formatting_rule("$NP$FG")
        .with_number_type(PhoneNumberType::FixedLine, NumberDesc::new("[12]\\d{9}"))
        .with_number_type(PhoneNumberType::Mobile, NumberDesc::new("7[1-57-9]\\d{8}"))
        .with_format_rule(FormatRule::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3").with_leading_digits("2"))
        .with_format_rule(FormatRule::new("(\\d{4})(\\d{6})", "$1 $2").with_leading_digits("7"))
        .with_format_rule(FormatRule::new("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3").with_leading_digits("1"));
    PhoneNumberUtil::new_for_metadata([us, gb]).unwrap()
}

fn setup_numbers() -> Vec<(PhoneNumber, &'static str)> {
    vec![
        (PhoneNumber::new("1", "6502530000"), "US"),
        (PhoneNumber::new("1", "8002530000"), "US"),
        (PhoneNumber::new("44", "2087654321"), "GB"),
        (PhoneNumber::new("44", "7400123456"), "GB"),
        (PhoneNumber::new("44", "1212345678"), "GB"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let phone_util = setup_util();
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Formatting");
    for number_format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
        PhoneNumberFormat::RFC3966,
    ] {
        group.bench_function(format!("format({:?})", number_format), |b| {
            b.iter(|| {
                for (number, _) in &numbers {
                    phone_util
                        .format(black_box(number), black_box(number_format))
                        .unwrap();
                }
            })
        });
    }
    group.finish();
}

fn validation_benchmark(c: &mut Criterion) {
    let phone_util = setup_util();
    let numbers = setup_numbers();

    c.bench_function("validate_phone_number", |b| {
        b.iter(|| {
            for (number, region_code) in &numbers {
                let _ = phone_util
                    .validate_phone_number(black_box(number), black_box(region_code))
                    .unwrap();
            }
        })
    });
}

criterion_group!(benches, formatting_benchmark, validation_benchmark);
criterion_main!(benches);
