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

//! Extraction logic run when the parser reaches a leaf of a state table.
//!
//! Every handler gets the number still to be parsed (without a start
//! marker) and the count of its leading characters the table path matched.
//! It fills fields of the parse result and tells the driver how to go on.

use log::trace;

use super::{
    enums::{Field, Handler},
    helper_constants::{EXTENSION_MARKERS, EXTENSION_SEPARATORS, PLUS_SIGN},
    helper_types::{Resume, Step, TableId},
    numbering_plan::NumberingPlan,
    parsed_number::ParsedNumber,
};

pub(super) fn run<'a>(
    handler: Handler,
    number: &'a str,
    matched: usize,
    parsed: &mut ParsedNumber,
    plan: &NumberingPlan,
) -> Step<'a> {
    let matched = matched.min(number.len());
    trace!(
        "Handler '{}' on '{}' (matched {}) under {}",
        handler.as_ref(), number, matched, plan.region()
    );
    match handler {
        Handler::Trunk => trunk(number, matched, parsed, plan),
        Handler::Plus => plus(number, matched, parsed, plan),
        Handler::Idd => idd(number, matched, parsed, plan),
        Handler::Country => country(number, matched, parsed, plan),
        Handler::Cic | Handler::Cic2 | Handler::Cic3 => {
            field_then_restart(Field::Cic, handler, number, matched, parsed, plan)
        }
        Handler::Vsc => field_then_restart(Field::Vsc, handler, number, matched, parsed, plan),
        Handler::Service
        | Handler::Service2
        | Handler::Service3
        | Handler::Service4
        | Handler::Personal
        | Handler::Special
        | Handler::Premium => {
            field_then_subscriber(Field::ServiceCode, handler, number, matched, parsed, plan)
        }
        Handler::Cell => {
            field_then_subscriber(Field::MobilePrefix, handler, number, matched, parsed, plan)
        }
        Handler::Area => area(number, matched, parsed, plan),
        Handler::Emergency => emergency(number, matched, parsed, plan),
        Handler::Start => Step::Continue {
            resume: Resume::Root,
            remainder: number,
        },
        Handler::Local => {
            subscriber_number(number, parsed, plan);
            Step::Done
        }
        Handler::None => {
            subscriber_number(number, parsed, plan);
            if matched > 0 && matched < number.len() {
                trace!("No leaf after {matched} characters of '{number}', marking invalid");
                parsed.invalid = true;
            }
            Step::Done
        }
    }
}

/// Length of the leading run of `number` that is not an extension or pause.
fn digit_run(number: &str) -> usize {
    number.find(EXTENSION_SEPARATORS).unwrap_or(number.len())
}

/// End of a field of configured `length` given how far the table matched.
fn field_end(length: i32, matched: usize, number: &str) -> usize {
    let end = if length > 0 {
        length as usize
    } else {
        matched + length.unsigned_abs() as usize
    };
    end.min(digit_run(number))
}

/// Length of the trunk code in front of `number` that the table path
/// walked through, if it is still to be recorded.
fn pending_trunk(number: &str, matched: usize, parsed: &ParsedNumber, plan: &NumberingPlan) -> usize {
    let trunk = plan.trunk_code();
    if parsed.trunk_access.is_none()
        && !trunk.is_empty()
        && number.starts_with(trunk)
        && matched > trunk.len()
    {
        trunk.len()
    } else {
        0
    }
}

/// Records the trunk code found by [`pending_trunk`] and returns what
/// follows it.
fn take_trunk<'a>(
    number: &'a str,
    matched: usize,
    parsed: &mut ParsedNumber,
    plan: &NumberingPlan,
) -> (&'a str, usize) {
    let trunk_len = pending_trunk(number, matched, parsed, plan);
    if trunk_len > 0 {
        parsed.set_field(Field::TrunkAccess, number[..trunk_len].to_owned());
    }
    (&number[trunk_len..], matched - trunk_len)
}

/// Everything left is the subscriber number, optionally followed by an
/// extension starting at the first pause or extension marker.
pub(super) fn subscriber_number(number: &str, parsed: &mut ParsedNumber, plan: &NumberingPlan) {
    if number.is_empty() {
        return;
    }
    let (digits, rest) = number.split_at(digit_run(number));
    if !digits.is_empty() {
        parsed.push_subscriber_digits(digits);
    }
    let extension = rest.strip_prefix(EXTENSION_MARKERS).unwrap_or(rest);
    if !extension.is_empty() {
        parsed.set_field(Field::Extension, extension.to_owned());
    }

    let subscriber_len = parsed.subscriber_number.as_ref().map_or(0, String::len);
    if let Some(max) = plan.max_local_length() {
        if subscriber_len > max {
            trace!("Subscriber number of '{number}' is longer than {max} digits");
            parsed.invalid = true;
        }
    }
}

/// A handler that meets its field already filled gives up on the structure
/// of the rest of the number.
fn already_set<'a>(
    field: Field,
    number: &'a str,
    parsed: &mut ParsedNumber,
    plan: &NumberingPlan,
) -> Option<Step<'a>> {
    if parsed.field(field).is_none() {
        return None;
    }
    trace!("Field '{}' is already set, '{}' is the subscriber number", field.as_ref(), number);
    subscriber_number(number, parsed, plan);
    Some(Step::Done)
}

fn trunk<'a>(number: &'a str, matched: usize, parsed: &mut ParsedNumber, plan: &NumberingPlan) -> Step<'a> {
    if let Some(step) = already_set(Field::TrunkAccess, number, parsed, plan) {
        return step;
    }
    let length = match plan.trunk_code().len() {
        0 => matched,
        length => length.min(number.len()),
    };
    parsed.set_field(Field::TrunkAccess, number[..length].to_owned());
    Step::Continue {
        resume: Resume::Root,
        remainder: &number[length..],
    }
}

fn plus<'a>(number: &'a str, matched: usize, parsed: &mut ParsedNumber, plan: &NumberingPlan) -> Step<'a> {
    if let Some(step) = already_set(Field::IddPrefix, number, parsed, plan) {
        return step;
    }
    parsed.set_field(Field::IddPrefix, PLUS_SIGN.to_owned());
    Step::SwitchTable {
        table: TableId::Idd,
        remainder: &number[matched.max(PLUS_SIGN.len())..],
    }
}

fn idd<'a>(number: &'a str, matched: usize, parsed: &mut ParsedNumber, plan: &NumberingPlan) -> Step<'a> {
    if let Some(step) = already_set(Field::IddPrefix, number, parsed, plan) {
        return step;
    }
    parsed.set_field(Field::IddPrefix, number[..matched].to_owned());
    Step::SwitchTable {
        table: TableId::Idd,
        remainder: &number[matched..],
    }
}

fn country<'a>(number: &'a str, matched: usize, parsed: &mut ParsedNumber, plan: &NumberingPlan) -> Step<'a> {
    if let Some(step) = already_set(Field::CountryCode, number, parsed, plan) {
        return step;
    }
    let calling_code = number[..matched].to_owned();
    parsed.set_field(Field::CountryCode, calling_code.clone());
    Step::SwitchRegion {
        calling_code,
        remainder: &number[matched..],
    }
}

fn emergency<'a>(number: &'a str, matched: usize, parsed: &mut ParsedNumber, plan: &NumberingPlan) -> Step<'a> {
    if let Some(step) = already_set(Field::Emergency, number, parsed, plan) {
        return step;
    }
    parsed.set_field(Field::Emergency, number[..matched].to_owned());
    Step::Continue {
        resume: Resume::Root,
        remainder: &number[matched..],
    }
}

/// Prefix codes dialed in front of a complete number (carrier selection,
/// star codes): the rest is parsed as a new number.
fn field_then_restart<'a>(
    field: Field,
    handler: Handler,
    number: &'a str,
    matched: usize,
    parsed: &mut ParsedNumber,
    plan: &NumberingPlan,
) -> Step<'a> {
    if let Some(step) = already_set(field, number, parsed, plan) {
        return step;
    }
    let end = field_end(plan.field_lengths().for_handler(handler), matched, number);
    if end == 0 {
        subscriber_number(number, parsed, plan);
        return Step::Done;
    }
    parsed.set_field(field, number[..end].to_owned());
    Step::Continue {
        resume: Resume::Start,
        remainder: &number[end..],
    }
}

fn field_then_subscriber<'a>(
    field: Field,
    handler: Handler,
    number: &'a str,
    matched: usize,
    parsed: &mut ParsedNumber,
    plan: &NumberingPlan,
) -> Step<'a> {
    if let Some(step) = already_set(field, number, parsed, plan) {
        return step;
    }
    let (rest, matched) = take_trunk(number, matched, parsed, plan);
    let end = field_end(plan.field_lengths().for_handler(handler), matched, rest);
    if end > 0 {
        parsed.set_field(field, rest[..end].to_owned());
    }
    subscriber_number(&rest[end..], parsed, plan);
    Step::Done
}

fn area<'a>(number: &'a str, matched: usize, parsed: &mut ParsedNumber, plan: &NumberingPlan) -> Step<'a> {
    if let Some(step) = already_set(Field::AreaCode, number, parsed, plan) {
        return step;
    }
    let local_length = digit_run(number);
    let trunk_len = pending_trunk(number, matched, parsed, plan);
    let max_local = plan.max_local_length();

    // Short numbers without any prefix may be dialed inside the area.
    if trunk_len == 0
        && !plan.trunk_code().is_empty()
        && !plan.context_free()
        && parsed.trunk_access.is_none()
        && parsed.mobile_prefix.is_none()
        && parsed.country_code.is_none()
        && max_local.is_some_and(|max| local_length <= max)
    {
        trace!("'{number}' is short enough to be a local number");
        subscriber_number(number, parsed, plan);
        return Step::Done;
    }

    let mut length = plan.field_lengths().area_code;
    if plan.extended_area_codes() && length > 0 {
        length = length.max((matched - trunk_len) as i32);
    }
    let end = trunk_len + field_end(length, matched - trunk_len, &number[trunk_len..]);

    if max_local.is_some_and(|max| local_length - end > max) {
        trace!("Local part of '{number}' overflows the local number length");
        subscriber_number(number, parsed, plan);
        parsed.invalid = true;
        return Step::Done;
    }

    let (rest, _) = take_trunk(number, matched, parsed, plan);
    let end = end - trunk_len;
    if end > 0 {
        parsed.set_field(Field::AreaCode, rest[..end].to_owned());
    }
    subscriber_number(&rest[end..], parsed, plan);
    Step::Done
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::phonenumberutil::region_data::RegionData;

    fn plan(json: &str) -> NumberingPlan {
        serde_json::from_str(json).unwrap()
    }

    fn us_plan() -> NumberingPlan {
        plan(
            r#"{"region": "US", "trunkCode": "1", "iddCode": "011", "dialingPlan": "closed",
                "skipTrunk": true,
                "fieldLengths": {"areaCode": 3, "serviceCode": 3, "cic": 7, "maxLocalLength": 7}}"#,
        )
    }

    fn parsed() -> ParsedNumber {
        ParsedNumber::new(Arc::new(RegionData::fallback("US")))
    }

    #[test]
    fn area_strips_walked_through_trunk() {
        let mut number = parsed();
        let step = run(Handler::Area, "16505551212", 4, &mut number, &us_plan());
        assert_eq!(step, Step::Done);
        assert_eq!(number.trunk_access.as_deref(), Some("1"));
        assert_eq!(number.area_code.as_deref(), Some("650"));
        assert_eq!(number.subscriber_number.as_deref(), Some("5551212"));
        assert!(number.is_valid());
    }

    #[test]
    fn short_numbers_are_local() {
        let mut number = parsed();
        run(Handler::Area, "5551212", 1, &mut number, &us_plan());
        assert_eq!(number.area_code, None);
        assert_eq!(number.subscriber_number.as_deref(), Some("5551212"));
    }

    #[test]
    fn overflowing_local_part_is_invalid() {
        let mut number = parsed();
        run(Handler::Area, "6505551212999999999999", 1, &mut number, &us_plan());
        assert_eq!(number.area_code, None);
        assert_eq!(number.subscriber_number.as_deref(), Some("6505551212999999999999"));
        assert!(number.invalid);
    }

    #[test]
    fn variable_lengths_follow_the_match() {
        let de = plan(r#"{"region": "DE", "fieldLengths": {"maxLocalLength": 8, "premium": -1}}"#);
        let mut number = parsed();
        number.country_code = Some("49".to_owned());
        run(Handler::Area, "891234567", 2, &mut number, &de);
        assert_eq!(number.area_code.as_deref(), Some("89"));
        assert_eq!(number.subscriber_number.as_deref(), Some("1234567"));

        let mut number = parsed();
        run(Handler::Premium, "09001234567", 3, &mut number, &de);
        assert_eq!(number.trunk_access.as_deref(), Some("0"));
        assert_eq!(number.service_code.as_deref(), Some("900"));
        assert_eq!(number.subscriber_number.as_deref(), Some("1234567"));
    }

    #[test]
    fn extended_area_codes_take_the_longer_match() {
        let fr = plan(
            r#"{"region": "FR", "extendedAreaCodes": true,
                "fieldLengths": {"areaCode": 1, "maxLocalLength": 8}}"#,
        );
        let mut number = parsed();
        run(Handler::Area, "0590123456", 4, &mut number, &fr);
        assert_eq!(number.trunk_access.as_deref(), Some("0"));
        assert_eq!(number.area_code.as_deref(), Some("590"));
        assert_eq!(number.subscriber_number.as_deref(), Some("123456"));

        let mut number = parsed();
        run(Handler::Area, "0145678901", 2, &mut number, &fr);
        assert_eq!(number.area_code.as_deref(), Some("1"));
        assert_eq!(number.subscriber_number.as_deref(), Some("45678901"));
    }

    #[test]
    fn prefix_codes_restart_the_number() {
        let mut number = parsed();
        let step = run(Handler::Cic, "10102886505551212", 3, &mut number, &us_plan());
        assert_eq!(
            step,
            Step::Continue {
                resume: Resume::Start,
                remainder: "6505551212"
            }
        );
        assert_eq!(number.cic.as_deref(), Some("1010288"));
        assert_eq!(number.trunk_access, None);

        let mut number = parsed();
        let step = run(Handler::Vsc, "*676505551212", 3, &mut number, &us_plan());
        assert_eq!(step.remainder(), "6505551212");
        assert_eq!(number.vsc.as_deref(), Some("*67"));
    }

    #[test]
    fn international_prefixes_switch_tables() {
        let mut number = parsed();
        let step = run(Handler::Plus, "+49891234567", 1, &mut number, &us_plan());
        assert_eq!(
            step,
            Step::SwitchTable {
                table: TableId::Idd,
                remainder: "49891234567"
            }
        );
        let step = run(Handler::Country, "49891234567", 2, &mut number, &us_plan());
        assert_eq!(
            step,
            Step::SwitchRegion {
                calling_code: "49".to_owned(),
                remainder: "891234567"
            }
        );
        assert_eq!(number.idd_prefix.as_deref(), Some("+"));
        assert_eq!(number.country_code.as_deref(), Some("49"));

        // a second country code is not a country code
        let step = run(Handler::Country, "4412", 2, &mut number, &us_plan());
        assert_eq!(step, Step::Done);
        assert_eq!(number.subscriber_number.as_deref(), Some("4412"));
    }

    #[test]
    fn extensions_split_at_the_first_marker() {
        let mut number = parsed();
        subscriber_number("5551212x123", &mut number, &us_plan());
        assert_eq!(number.subscriber_number.as_deref(), Some("5551212"));
        assert_eq!(number.extension.as_deref(), Some("123"));

        let mut number = parsed();
        subscriber_number("5551212,,4#", &mut number, &us_plan());
        assert_eq!(number.extension.as_deref(), Some(",,4#"));
    }

    #[test]
    fn none_marks_partial_matches_invalid() {
        let mut number = parsed();
        run(Handler::None, "123", 0, &mut number, &us_plan());
        assert!(number.is_valid());

        let mut number = parsed();
        run(Handler::None, "99912", 2, &mut number, &us_plan());
        assert!(number.invalid);
        assert_eq!(number.subscriber_number.as_deref(), Some("99912"));
    }
}
