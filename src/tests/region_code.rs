pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn au() -> &'static str {
        "AU"
    }

    pub fn bs() -> &'static str {
        "BS"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn gg() -> &'static str {
        "GG"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    /// Well formed, but never part of the test metadata.
    pub fn tr() -> &'static str {
        "TR"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
