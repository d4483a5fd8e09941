mod region_code;
mod as_you_type_formatter_tests;

use crate::PhoneNumberUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
}

/// A util loaded with the whole test metadata.
pub(crate) fn get_phone_util() -> PhoneNumberUtil {
    init_logger();
    PhoneNumberUtil::new_for_metadata(test_metadata::test_metadata().metadata().to_vec())
        .expect("Test metadata should be valid")
}
