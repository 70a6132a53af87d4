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

use log::{debug, trace, warn};

use super::{
    enums::{DialingStyle, NetworkType},
    helper_constants::{NANPA_COUNTRY_CODE, PLUS_SIGN, US_IDD_CODE, US_REGION},
    numbering_plan::NumberingPlan,
    parsed_number::ParsedNumber,
    parser::Parser,
    region_data::RegionData,
};
use crate::i18n::{self, RegionCode};

/// Dialing context a number is rewritten for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Locale of the phone's owner, e.g. `"en-US"`.
    pub home_locale: String,
    /// Locale of the place the phone is at. Ignored when `current_mcc`
    /// names a known region.
    pub current_locale: Option<String>,
    /// Mobile country code of the network the phone is attached to.
    pub current_mcc: Option<String>,
    pub network_type: NetworkType,
    /// Area code assumed for local numbers of the home region.
    pub default_area_code: Option<String>,
    /// Rewrite the number so it dials correctly from the current network.
    pub assisted_dialing: bool,
    /// The number addresses a text message rather than a call.
    pub sms: bool,
    /// The number is being typed by hand.
    pub manual_dialing: bool,
}

impl NormalizeOptions {
    pub fn new(home_locale: &str) -> Self {
        Self {
            home_locale: home_locale.to_owned(),
            ..Default::default()
        }
    }
}

/// Regions and plans a normalization decides on.
struct Context {
    home_region: String,
    current_region: String,
    current_plan: NumberingPlan,
    destination_region: String,
    destination_code: Option<String>,
}

fn idd_prefix(network_type: NetworkType, current_plan: &NumberingPlan) -> String {
    match network_type {
        NetworkType::Umts => PLUS_SIGN.to_owned(),
        NetworkType::Cdma => current_plan.idd_code().to_owned(),
    }
}

fn fill_default_area_code(number: &mut ParsedNumber, context: &Context, options: &NormalizeOptions) {
    if number.has_prefix()
        || number.country_code.is_some()
        || number.subscriber_number.is_none()
        || context.destination_region != context.home_region
    {
        return;
    }
    if let Some(area_code) = &options.default_area_code {
        trace!("Adding default area code {area_code}");
        number.area_code = Some(area_code.clone());
    }
}

/// Writes the number in international form with the given IDD prefix.
fn make_international(number: &mut ParsedNumber, context: &Context, idd_prefix: String) {
    let Some(calling_code) = &context.destination_code else {
        debug!("No calling code for {}, keeping national form", context.destination_region);
        return;
    };
    number.country_code = Some(calling_code.clone());
    number.idd_prefix = Some(idd_prefix);
    let plan = number.destination_plan();
    if plan.skip_trunk() {
        number.trunk_access = None;
    } else if plan.trunk_required()
        && !plan.trunk_code().is_empty()
        && number.has_prefix()
        && number.trunk_access.is_none()
    {
        number.trunk_access = Some(plan.trunk_code().to_owned());
    }
}

/// Writes the number as dialed inside its own country.
fn make_domestic(number: &mut ParsedNumber) {
    number.idd_prefix = None;
    number.country_code = None;
    let plan = number.destination_plan();
    let trunk_needed = plan.trunk_required() || plan.dialing_style() == DialingStyle::Closed;
    if trunk_needed
        && !plan.trunk_code().is_empty()
        && number.has_prefix()
        && number.trunk_access.is_none()
    {
        number.trunk_access = Some(plan.trunk_code().to_owned());
    }
}

/// A number without any prefix whose subscriber part is too long to be
/// local may be an international number typed without its `+`.
async fn reparse_as_international(parser: &Parser<'_>, number: &ParsedNumber) -> Option<ParsedNumber> {
    if number.trunk_access.is_some() || number.idd_prefix.is_some() {
        return None;
    }
    let max = number.destination_plan().max_local_length()?;
    if number.subscriber_number.as_ref()?.len() <= max {
        return None;
    }
    let digits = number.to_string();
    let text = fast_cat::concat_str!(PLUS_SIGN, &digits);
    match parser.parse(&text, number.region()).await {
        Ok(reparsed)
            if reparsed.has_destination()
                && reparsed.destination_region() != RegionCode::get_unknown() =>
        {
            debug!("'{}' reads as international number '{}'", number, text);
            Some(reparsed)
        }
        Ok(_) => None,
        Err(err) => {
            warn!("Could not reparse '{text}': {err}");
            None
        }
    }
}

async fn reparse_in_region(parser: &Parser<'_>, number: &ParsedNumber, region: &str) -> Option<ParsedNumber> {
    match parser.parse(&number.to_string(), region).await {
        Ok(reparsed) if reparsed.is_valid() => {
            debug!("'{}' is valid when read in {}", number, region);
            Some(reparsed)
        }
        Ok(_) => None,
        Err(err) => {
            warn!("Could not reparse '{number}' in {region}: {err}");
            None
        }
    }
}

/// Rewrites `number` into the digits to dial under `options`. Never fails:
/// when the number cannot be improved it comes back as it is.
pub(super) async fn normalize(
    parser: &Parser<'_>,
    number: &ParsedNumber,
    options: &NormalizeOptions,
) -> String {
    let home_region = i18n::region_from_locale(&options.home_locale);
    let current_region = options
        .current_mcc
        .as_deref()
        .and_then(|mcc| parser.locator.region_for_mcc(mcc))
        .map(str::to_owned)
        .or_else(|| options.current_locale.as_deref().map(i18n::region_from_locale))
        .unwrap_or_else(|| home_region.clone());

    let mut number = match reparse_as_international(parser, number).await {
        Some(reparsed) => reparsed,
        None => number.clone(),
    };
    if number.invalid && number.region() != current_region {
        if let Some(reparsed) = reparse_in_region(parser, &number, &current_region).await {
            number = reparsed;
        }
    }
    if number.subscriber_number.is_none() || number.emergency.is_some() {
        return number.to_string();
    }

    let current_data = match parser.cache.get(&current_region).await {
        Ok(data) => data,
        Err(err) => {
            warn!("{err}, using the default plan for {current_region}");
            Arc::new(RegionData::fallback(&current_region))
        }
    };
    let destination_region = number.destination_region().to_owned();
    let destination_code = number.country_code.clone().or_else(|| {
        parser
            .locator
            .calling_code_for_region(&destination_region)
            .map(|code| itoa::Buffer::new().format(code).to_owned())
    });
    let context = Context {
        home_region,
        current_plan: current_data.plan().clone(),
        destination_region,
        destination_code,
        current_region,
    };
    trace!(
        "Normalizing '{}' for {} (home {}) towards {}",
        number, context.current_region, context.home_region, context.destination_region
    );

    if !options.assisted_dialing {
        fill_default_area_code(&mut number, &context, options);
        if number.country_code.is_some() || number.has_prefix() {
            make_international(
                &mut number,
                &context,
                idd_prefix(options.network_type, &context.current_plan),
            );
        }
        return number.to_string();
    }

    let untouched_prefixes = !number.has_prefix()
        && number.country_code.is_none()
        && number.idd_prefix.is_none()
        && number.trunk_access.is_none();
    if options.manual_dialing && untouched_prefixes {
        trace!("Leaving manually dialed local number '{number}' alone");
        return number.to_string();
    }

    let current_code = parser
        .locator
        .calling_code_for_region(&context.current_region)
        .map(|code| itoa::Buffer::new().format(code).to_owned());
    let roaming = match (&current_code, &context.destination_code) {
        (Some(current), Some(destination)) => current != destination,
        _ => context.current_region != context.destination_region,
    };

    if roaming {
        fill_default_area_code(&mut number, &context, options);
        let us_sms_gateway = options.sms
            && context.home_region == US_REGION
            && context.current_region != US_REGION;
        let prefix = if us_sms_gateway {
            let mut buffer = itoa::Buffer::new();
            if context.destination_code.as_deref() == Some(buffer.format(NANPA_COUNTRY_CODE)) {
                PLUS_SIGN.to_owned()
            } else {
                US_IDD_CODE.to_owned()
            }
        } else {
            idd_prefix(options.network_type, &context.current_plan)
        };
        make_international(&mut number, &context, prefix);
    } else {
        if number.destination_plan().dialing_style() == DialingStyle::Closed {
            fill_default_area_code(&mut number, &context, options);
        }
        make_domestic(&mut number);
    }
    number.to_string()
}
