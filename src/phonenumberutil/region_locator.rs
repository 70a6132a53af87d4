// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::trace;
use serde::Deserialize;

use crate::i18n;

/// Raw form of the locator data file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorRecord {
    /// Region code -> country calling code.
    #[serde(default)]
    pub calling_codes: BTreeMap<String, u16>,
    /// Country calling code -> region owning the code when several regions
    /// share it.
    #[serde(default)]
    pub main_regions: BTreeMap<String, String>,
    /// Mobile country code -> region code.
    #[serde(default)]
    pub mcc: BTreeMap<String, String>,
    /// Country calling code -> national number prefix -> region code.
    #[serde(default)]
    pub area_regions: BTreeMap<String, BTreeMap<String, String>>,
    /// Region code -> region whose numbering data it uses.
    #[serde(default)]
    pub shared_plans: BTreeMap<String, String>,
    /// Country calling code -> codes of territories sharing its geography.
    #[serde(default)]
    pub territories: BTreeMap<String, Vec<u16>>,
}

/// Maps between country calling codes, region codes, mobile country codes
/// and area-code specific sub-regions.
#[derive(Debug, Default)]
pub struct RegionLocator {
    region_to_calling_code: HashMap<String, u16>,
    /// Sorted by calling code, so lookups are a binary search.
    calling_code_to_region: Vec<(u16, String)>,
    mcc_to_region: HashMap<String, String>,
    area_regions: HashMap<u16, Vec<(String, String)>>,
    shared_plans: HashMap<String, String>,
    territories: HashSet<(u16, u16)>,
}

impl RegionLocator {
    pub fn from_record(record: LocatorRecord) -> Self {
        let mut calling_code_to_region = BTreeMap::<u16, String>::new();
        for (region, code) in &record.calling_codes {
            // BTreeMap iteration is sorted, so without a main region the
            // alphabetically first region keeps the code.
            calling_code_to_region
                .entry(*code)
                .or_insert_with(|| region.to_owned());
        }
        for (code, region) in &record.main_regions {
            if let Ok(code) = code.parse::<u16>() {
                calling_code_to_region.insert(code, region.to_owned());
            }
        }

        let mut area_regions = HashMap::new();
        for (code, prefixes) in record.area_regions {
            let Ok(code) = code.parse::<u16>() else {
                continue;
            };
            let mut prefixes = prefixes.into_iter().collect::<Vec<_>>();
            // longest prefix first
            prefixes.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then(a.cmp(b)));
            area_regions.insert(code, prefixes);
        }

        let mut territories = HashSet::new();
        for (code, others) in &record.territories {
            let Ok(code) = code.parse::<u16>() else {
                continue;
            };
            for other in others {
                territories.insert((code, *other));
                territories.insert((*other, code));
            }
        }

        Self {
            region_to_calling_code: record.calling_codes.into_iter().collect(),
            calling_code_to_region: calling_code_to_region.into_iter().collect(),
            mcc_to_region: record.mcc.into_iter().collect(),
            area_regions,
            shared_plans: record.shared_plans.into_iter().collect(),
            territories,
        }
    }

    /// Region of a mobile country code, e.g. `"310"` -> `"US"`.
    pub fn region_for_mcc(&self, mcc: &str) -> Option<&str> {
        self.mcc_to_region.get(mcc).map(String::as_str)
    }

    /// Main region of a country calling code, or the unknown region.
    pub fn region_for_calling_code(&self, calling_code: &str) -> &str {
        calling_code
            .parse::<u16>()
            .ok()
            .and_then(|code| {
                self.calling_code_to_region
                    .binary_search_by_key(&code, |(code, _)| *code)
                    .ok()
            })
            .map(|index| self.calling_code_to_region[index].1.as_str())
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    pub fn calling_code_for_region(&self, region: &str) -> Option<u16> {
        self.region_to_calling_code.get(region).copied()
    }

    /// Region of a number given its country calling code and national digits
    /// (area code followed by the subscriber number). Regions that share a
    /// calling code with a larger one are told apart by the longest matching
    /// national prefix; otherwise the main region of the code is returned.
    pub fn region_for_national_number(&self, calling_code: &str, national_number: &str) -> &str {
        if let Some(prefixes) = calling_code
            .parse::<u16>()
            .ok()
            .and_then(|code| self.area_regions.get(&code))
        {
            if let Some((prefix, region)) = prefixes
                .iter()
                .find(|(prefix, _)| national_number.starts_with(prefix.as_str()))
            {
                trace!("National number '{national_number}' matched prefix '{prefix}' -> {region}");
                return region;
            }
        }
        self.region_for_calling_code(calling_code)
    }

    /// Region whose data files describe `region`. Most regions own their
    /// data, territories reuse the data of their main region.
    pub fn data_region<'a>(&'a self, region: &'a str) -> &'a str {
        self.shared_plans
            .get(region)
            .map(String::as_str)
            .unwrap_or(region)
    }

    /// Whether two different calling codes belong to territories that share
    /// geography and dialing habits, e.g. France and its overseas
    /// departments.
    pub fn are_territories(&self, first: &str, second: &str) -> bool {
        match (first.parse::<u16>(), second.parse::<u16>()) {
            (Ok(first), Ok(second)) => self.territories.contains(&(first, second)),
            _ => false,
        }
    }

    pub fn calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.calling_code_to_region.iter().map(|(code, _)| *code)
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_calling_code.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> RegionLocator {
        let record: LocatorRecord = serde_json::from_str(
            r#"{
                "callingCodes": {"US": 1, "CA": 1, "FR": 33, "GP": 590, "IT": 39, "SM": 378},
                "mainRegions": {"1": "US"},
                "mcc": {"310": "US", "302": "CA"},
                "areaRegions": {"1": {"204": "CA"}, "33": {"590": "GP", "5": "FR"}},
                "sharedPlans": {"CA": "US"},
                "territories": {"33": [590], "39": [378]}
            }"#,
        )
        .unwrap();
        RegionLocator::from_record(record)
    }

    #[test]
    fn resolves_calling_codes_both_ways() {
        let locator = locator();
        assert_eq!(locator.region_for_calling_code("1"), "US");
        assert_eq!(locator.region_for_calling_code("33"), "FR");
        assert_eq!(locator.region_for_calling_code("999"), "ZZ");
        assert_eq!(locator.region_for_calling_code("abc"), "ZZ");
        assert_eq!(locator.calling_code_for_region("CA"), Some(1));
        assert_eq!(locator.calling_code_for_region("ZZ"), None);
        assert_eq!(locator.calling_codes().collect::<Vec<_>>(), vec![1, 33, 39, 378, 590]);
    }

    #[test]
    fn longest_area_prefix_wins() {
        let locator = locator();
        assert_eq!(locator.region_for_national_number("33", "590123456"), "GP");
        assert_eq!(locator.region_for_national_number("33", "512345678"), "FR");
        assert_eq!(locator.region_for_national_number("33", "145678901"), "FR");
        assert_eq!(locator.region_for_national_number("1", "2045551212"), "CA");
        assert_eq!(locator.region_for_national_number("1", "6505551212"), "US");
    }

    #[test]
    fn territories_are_symmetric() {
        let locator = locator();
        assert!(locator.are_territories("33", "590"));
        assert!(locator.are_territories("590", "33"));
        assert!(locator.are_territories("378", "39"));
        assert!(!locator.are_territories("33", "39"));
    }

    #[test]
    fn mcc_and_shared_plans() {
        let locator = locator();
        assert_eq!(locator.region_for_mcc("302"), Some("CA"));
        assert_eq!(locator.region_for_mcc("999"), None);
        assert_eq!(locator.data_region("CA"), "US");
        assert_eq!(locator.data_region("FR"), "FR");
    }
}
