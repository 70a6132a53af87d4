pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn gp() -> &'static str {
        "GP"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn je() -> &'static str {
        "JE"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn va() -> &'static str {
        "VA"
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
