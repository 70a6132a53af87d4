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

use std::borrow::Cow;

use super::{
    helper_constants::{EXTENSION_SEPARATORS, PLUS_SIGN, RFC3966_PREFIX, START_MARKER},
    numbering_plan::NumberingPlan,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    state_table::DigitClass,
};
use crate::{macros::owned_from_cow_or, string_util::strip_cow_prefix_ignore_case};

/// Whether `c` survives input normalization.
fn is_significant(c: char) -> bool {
    (c != START_MARKER && DigitClass::of_char(c).is_some()) || EXTENSION_SEPARATORS.contains(&c)
}

/// Whether the dialed characters of `number` start with `+` or the plan's
/// international access code.
fn is_international(number: &str, plan: &NumberingPlan) -> bool {
    let dialed: String = number
        .chars()
        .filter(|c| DigitClass::of_char(*c).is_some())
        .take(plan.idd_code().len().max(PLUS_SIGN.len()))
        .collect();
    let idd = plan.idd_code();
    dialed.starts_with(PLUS_SIGN) || (!idd.is_empty() && dialed.starts_with(idd))
}

/// Turns free-form text into the string the state machine scans: decimal
/// digits of any script become ASCII, a `tel:` scheme is dropped, written
/// extension labels become `x`, formatting characters are removed and the
/// start marker is put in front.
///
/// Switchboard extensions written after a hyphen are only recognized in
/// national numbers. The hyphen of an international number belongs to the
/// grouping of another country.
pub(super) fn normalize_input(
    text: &str,
    plan: &NumberingPlan,
    reg_exps: &PhoneNumberRegExpsAndMappings,
) -> String {
    let folded = dec_from_char::normalize_decimals(text);
    let trimmed = folded.trim();
    let number = strip_cow_prefix_ignore_case(Cow::Borrowed(trimmed), RFC3966_PREFIX)
        .unwrap_or(Cow::Borrowed(trimmed));

    let number = owned_from_cow_or!(
        reg_exps.extension_label_pattern.replace_all(&number, "x"),
        number.to_string()
    );
    let number = if plan.find_extensions() && !is_international(&number, plan) {
        owned_from_cow_or!(
            reg_exps
                .trailing_extension_pattern
                .replace(&number, "${1}x${2}"),
            number.clone()
        )
    } else {
        number
    };

    let mut normalized = String::with_capacity(number.len() + 1);
    normalized.push(START_MARKER);
    normalized.extend(number.chars().filter(|c| is_significant(*c)));
    normalized
}

/// Drops pauses and extension markers in front of the first dialed
/// character. The state machine steps over them, so they belong to no field.
pub(super) fn skip_leading_separators(number: &str) -> &str {
    number.trim_start_matches(EXTENSION_SEPARATORS)
}

/// Digits of a number that a person dials: everything but the start marker.
pub(super) fn strip_start_marker(number: &str) -> (&str, usize) {
    match number.strip_prefix(START_MARKER) {
        Some(stripped) => (stripped, START_MARKER.len_utf8()),
        None => (number, 0),
    }
}
