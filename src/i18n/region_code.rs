pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region codes are two uppercase ASCII letters (ISO 3166-1 alpha-2 style).
    /// The unknown region is never a valid metadata key.
    pub fn is_well_formed(region_code: &str) -> bool {
        region_code.len() == 2
            && region_code.bytes().all(|b| b.is_ascii_uppercase())
            && region_code != Self::get_unknown()
    }
}
