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

use std::sync::Arc;

use futures::executor::block_on;
use log::{debug, trace};

use super::{
    comparisons,
    errors::{LoadError, ParseError},
    normalizer::{self, NormalizeOptions},
    parsed_number::ParsedNumber,
    parser::Parser,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    region_data::RegionData,
    region_locator::RegionLocator,
    state_table::StateTable,
};
use crate::{i18n, interfaces::DataLoader, metadata::JsonLoader, region_data_cache::RegionDataCache};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

pub struct PhoneNumberUtil {
    /// Helper class holding useful regular expressions.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// Calling code, mobile country code and territory mappings. Shared
    /// with the cache, which needs it to resolve regions that reuse the
    /// data of another region.
    locator: Arc<RegionLocator>,

    /// Table that reads a country calling code after an IDD prefix. Built
    /// once from every calling code the locator knows.
    idd_table: StateTable,

    /// Region data, loaded on first use.
    cache: RegionDataCache,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        match Self::with_loader(Arc::new(JsonLoader::embedded())) {
            Ok(instance) => instance,
            Err(err) => {
                let err_message = format!("Could not load compiled-in region data: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Engine over the data of `loader`. Blocks until the locator is loaded.
    pub fn with_loader(loader: Arc<dyn DataLoader>) -> std::result::Result<Self, LoadError> {
        block_on(Self::with_loader_async(loader))
    }

    pub async fn with_loader_async(
        loader: Arc<dyn DataLoader>,
    ) -> std::result::Result<Self, LoadError> {
        let locator = Arc::new(RegionLocator::from_record(loader.load_locator().await?));
        let idd_table = StateTable::for_calling_codes(locator.calling_codes());
        debug!(
            "Loaded locator with {} calling codes",
            locator.calling_codes().count()
        );
        Ok(Self {
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            cache: RegionDataCache::new(loader, locator.clone()),
            locator,
            idd_table,
        })
    }

    fn parser(&self) -> Parser<'_> {
        Parser {
            reg_exps: &self.reg_exps,
            locator: &self.locator,
            idd_table: &self.idd_table,
            cache: &self.cache,
        }
    }

    /// Region a number typed on this phone is read in: the region of the
    /// network's mobile country code when known, else the locale's region.
    fn region_for_hints(&self, locale: &str, mcc: Option<&str>) -> String {
        match mcc.and_then(|mcc| self.locator.region_for_mcc(mcc)) {
            Some(region) => region.to_owned(),
            None => i18n::region_from_locale(locale),
        }
    }

    /// Splits free-form `text` into its dialing fields.
    ///
    /// `locale` (e.g. `"en-US"`, or a bare region code) and `mcc` tell where
    /// the number is dialed from; `mcc` wins when it is known. A number that
    /// does not fit the region's plan is returned with `invalid` set. Errors
    /// only come from broken region data.
    pub fn parse(&self, text: &str, locale: &str, mcc: Option<&str>) -> Result<ParsedNumber> {
        block_on(self.parse_async(text, locale, mcc))
    }

    pub async fn parse_async(
        &self,
        text: &str,
        locale: &str,
        mcc: Option<&str>,
    ) -> Result<ParsedNumber> {
        let region = self.region_for_hints(locale, mcc);
        self.parser().parse(text, &region).await
    }

    /// Renders `number` with a named style of its region's templates.
    pub fn format(&self, number: &ParsedNumber, style: &str, partial: bool) -> String {
        number.format(style, partial)
    }

    /// Digits to dial for `number` in the situation described by
    /// `options`.
    pub fn normalize(&self, number: &ParsedNumber, options: &NormalizeOptions) -> String {
        block_on(self.normalize_async(number, options))
    }

    pub async fn normalize_async(&self, number: &ParsedNumber, options: &NormalizeOptions) -> String {
        normalizer::normalize(&self.parser(), number, options).await
    }

    /// Likelihood in percent that both numbers reach the same phone.
    pub fn compare(&self, first: &ParsedNumber, second: &ParsedNumber) -> u8 {
        let score = comparisons::compare(&self.locator, first, second);
        trace!("'{}' vs '{}': {}", first, second, score);
        score
    }

    /// Region `number` rings in. National numbers of regions that share a
    /// calling code are told apart by their area code.
    pub fn region_for_number<'a>(&'a self, number: &'a ParsedNumber) -> &'a str {
        let calling_code = match &number.country_code {
            Some(code) => code.clone(),
            None => match self.locator.calling_code_for_region(number.destination_region()) {
                Some(code) => itoa::Buffer::new().format(code).to_owned(),
                None => return number.destination_region(),
            },
        };
        let mobile_prefix = number.mobile_prefix.as_deref().unwrap_or_default();
        let area_code = number.area_code.as_deref().unwrap_or_default();
        let subscriber_number = number.subscriber_number.as_deref().unwrap_or_default();
        let national = fast_cat::concat_str!(mobile_prefix, area_code, subscriber_number);
        let by_area = self
            .locator
            .region_for_national_number(&calling_code, &national);
        if by_area != self.locator.region_for_calling_code(&calling_code) {
            by_area
        } else {
            number.destination_region()
        }
    }

    pub fn region_for_mcc(&self, mcc: &str) -> Option<&str> {
        self.locator.region_for_mcc(mcc)
    }

    /// Main region of a calling code, `"ZZ"` when the code is unknown.
    pub fn region_for_calling_code(&self, calling_code: &str) -> &str {
        self.locator.region_for_calling_code(calling_code)
    }

    pub fn calling_code_for_region(&self, region: &str) -> Option<u16> {
        self.locator.calling_code_for_region(&region.to_ascii_uppercase())
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.locator.supported_regions()
    }

    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.locator.calling_codes()
    }

    /// Plan, state table and formats of `region`, loading them if needed.
    pub async fn region_data(&self, region: &str) -> std::result::Result<Arc<RegionData>, LoadError> {
        self.cache.get(region).await
    }
}
