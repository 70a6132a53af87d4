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

use std::{borrow::Cow, collections::HashMap};

use futures::{
    FutureExt,
    future::{self, BoxFuture},
};
use serde::de::DeserializeOwned;

use crate::{
    interfaces::DataLoader,
    phonenumberutil::{LoadError, LocatorRecord, RegionRecord},
};

const LOCATOR: &str = include_str!("../../resources/locator.json");

const REGIONS: &[(&str, &str)] = &[
    ("US", include_str!("../../resources/regions/US.json")),
    ("GB", include_str!("../../resources/regions/GB.json")),
    ("DE", include_str!("../../resources/regions/DE.json")),
    ("FR", include_str!("../../resources/regions/FR.json")),
    ("IT", include_str!("../../resources/regions/IT.json")),
];

/// Region key of the locator document in error messages.
const LOCATOR_KEY: &str = "locator";

/// Loader over JSON documents held in memory, either compiled in or
/// supplied by the caller.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    locator: Cow<'static, str>,
    regions: HashMap<String, Cow<'static, str>>,
}

impl JsonLoader {
    /// Data shipped with the crate.
    pub fn embedded() -> Self {
        Self {
            locator: Cow::Borrowed(LOCATOR),
            regions: REGIONS
                .iter()
                .map(|(region, json)| (region.to_string(), Cow::Borrowed(*json)))
                .collect(),
        }
    }

    /// Loader over caller supplied documents. Region keys are matched
    /// case-insensitively.
    pub fn new<R, K, V>(locator: impl Into<Cow<'static, str>>, regions: R) -> Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Cow<'static, str>>,
    {
        Self {
            locator: locator.into(),
            regions: regions
                .into_iter()
                .map(|(region, json)| (region.as_ref().to_ascii_uppercase(), json.into()))
                .collect(),
        }
    }
}

fn decode<T: DeserializeOwned>(region: &str, json: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|err| LoadError::Malformed {
        region: region.to_owned(),
        message: err.to_string(),
    })
}

impl DataLoader for JsonLoader {
    fn load_region<'a>(
        &'a self,
        region: &'a str,
    ) -> BoxFuture<'a, Result<Option<RegionRecord>, LoadError>> {
        let result = match self.regions.get(region) {
            Some(json) => decode(region, json).map(Some),
            None => Ok(None),
        };
        future::ready(result).boxed()
    }

    fn load_locator(&self) -> BoxFuture<'_, Result<LocatorRecord, LoadError>> {
        future::ready(decode(LOCATOR_KEY, &self.locator)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn embedded_documents_decode() {
        let loader = JsonLoader::embedded();
        let locator = block_on(loader.load_locator()).unwrap();
        assert_eq!(locator.calling_codes.get("US"), Some(&1));
        for (region, _) in REGIONS {
            let record = block_on(loader.load_region(region)).unwrap();
            assert!(record.is_some(), "no data for {region}");
        }
    }

    #[test]
    fn unknown_regions_have_no_data() {
        let loader = JsonLoader::embedded();
        assert!(block_on(loader.load_region("QQ")).unwrap().is_none());
    }

    #[test]
    fn malformed_documents_are_reported() {
        let loader = JsonLoader::new("{}", [("xx", "{not json")]);
        assert!(matches!(
            block_on(loader.load_region("XX")),
            Err(LoadError::Malformed { region, .. }) if region == "XX"
        ));
        assert!(block_on(loader.load_locator()).is_ok());
    }
}
