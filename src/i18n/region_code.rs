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

    /// Whether `code` looks like a region code: two ASCII letters, or three
    /// digits for UN M.49 areas.
    pub fn is_well_formed(code: &str) -> bool {
        match code.len() {
            2 => code.bytes().all(|b| b.is_ascii_alphabetic()),
            3 => code.bytes().all(|b| b.is_ascii_digit()),
            _ => false,
        }
    }
}
