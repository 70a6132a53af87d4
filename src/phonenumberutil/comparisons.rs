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

use log::trace;

use super::{
    helper_constants::{
        AREA_CODE_MISSING_PENALTY, COUNTRY_CODE_MISSING_PENALTY, FULL_PENALTY,
        MOBILE_PREFIX_MISSING_PENALTY, SERVICE_CODE_MISSING_PENALTY,
    },
    parsed_number::ParsedNumber,
    region_locator::RegionLocator,
};

/// Score in percent that keeps shrinking as penalties apply.
struct Score(u32);

impl Score {
    fn penalize(&mut self, penalty: u32, reason: &str) {
        if penalty == 0 {
            return;
        }
        trace!("Penalty {penalty} for {reason}");
        self.0 = self.0 * FULL_PENALTY.saturating_sub(penalty) / FULL_PENALTY;
    }
}

/// Penalty for one optional field: nothing when both sides agree, `missing`
/// when only one side has it, the full penalty when both have it and differ.
fn field_penalty(first: Option<&str>, second: Option<&str>, missing: u32) -> u32 {
    match (first, second) {
        (Some(first), Some(second)) if first != second => FULL_PENALTY,
        (Some(_), None) | (None, Some(_)) => missing,
        _ => 0,
    }
}

fn country_code_penalty(locator: &RegionLocator, first: &ParsedNumber, second: &ParsedNumber) -> u32 {
    // a national number belongs to the calling code of its region
    let implied = |number: &ParsedNumber| -> Option<String> {
        locator
            .calling_code_for_region(number.destination_region())
            .map(|code| itoa::Buffer::new().format(code).to_owned())
    };
    let first_code = first.country_code.clone().or_else(|| implied(first));
    let second_code = second.country_code.clone().or_else(|| implied(second));
    let one_implied = first.country_code.is_some() != second.country_code.is_some();

    match (first_code, second_code) {
        (Some(first_code), Some(second_code)) if first_code != second_code => {
            // territories share their geography with the larger country
            match (locator.are_territories(&first_code, &second_code), one_implied) {
                (false, _) => FULL_PENALTY,
                (true, true) => COUNTRY_CODE_MISSING_PENALTY,
                (true, false) => 0,
            }
        }
        (Some(_), Some(_)) if one_implied => COUNTRY_CODE_MISSING_PENALTY,
        (Some(_), Some(_)) | (None, None) => 0,
        // region without a calling code on one side
        _ => COUNTRY_CODE_MISSING_PENALTY,
    }
}

/// How likely two parsed numbers reach the same phone, from 0 to 100.
pub(super) fn compare(locator: &RegionLocator, first: &ParsedNumber, second: &ParsedNumber) -> u8 {
    if first.subscriber_number != second.subscriber_number || first.extension != second.extension {
        trace!("Subscriber numbers or extensions differ");
        return 0;
    }
    // short codes reach different services even without a subscriber number
    if first.emergency != second.emergency || first.vsc != second.vsc {
        trace!("Emergency or service codes differ");
        return 0;
    }

    // the most significant prefix must never disagree
    let prefix = |number: &ParsedNumber| {
        number
            .area_code
            .clone()
            .or_else(|| number.service_code.clone())
            .or_else(|| number.mobile_prefix.clone())
    };
    if let (Some(first_prefix), Some(second_prefix)) = (prefix(first), prefix(second)) {
        if first_prefix != second_prefix {
            trace!("Prefixes '{first_prefix}' and '{second_prefix}' differ");
            return 0;
        }
    }

    let mut score = Score(100);
    score.penalize(country_code_penalty(locator, first, second), "country code");
    score.penalize(
        field_penalty(
            first.service_code.as_deref(),
            second.service_code.as_deref(),
            SERVICE_CODE_MISSING_PENALTY,
        ),
        "service code",
    );
    score.penalize(
        field_penalty(
            first.mobile_prefix.as_deref(),
            second.mobile_prefix.as_deref(),
            MOBILE_PREFIX_MISSING_PENALTY,
        ),
        "mobile prefix",
    );
    score.penalize(
        field_penalty(
            first.area_code.as_deref(),
            second.area_code.as_deref(),
            AREA_CODE_MISSING_PENALTY,
        ),
        "area code",
    );
    score.0.min(100) as u8
}
