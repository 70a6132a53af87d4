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

use std::{fmt, sync::Arc};

use strum::IntoEnumIterator;

use super::{
    enums::Field,
    formatter,
    helper_constants::EXTENSION_SEPARATORS,
    numbering_plan::NumberingPlan,
    region_data::RegionData,
};

/// A dialed string decomposed into its parts.
///
/// Every input digit ends up in exactly one field, so [`Display`] gives back
/// the dialable digits in order. A number that does not fit its numbering
/// plan is still decomposed as far as possible and flagged `invalid`.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone)]
pub struct ParsedNumber {
    pub vsc: Option<String>,
    pub cic: Option<String>,
    pub idd_prefix: Option<String>,
    pub country_code: Option<String>,
    pub trunk_access: Option<String>,
    pub emergency: Option<String>,
    pub mobile_prefix: Option<String>,
    pub service_code: Option<String>,
    pub area_code: Option<String>,
    pub subscriber_number: Option<String>,
    /// Extension digits. An `x` marker is not stored, any other pause
    /// character is kept in front of the digits.
    pub extension: Option<String>,
    pub invalid: bool,

    /// Fields in the order the parser filled them.
    order: Vec<Field>,
    /// Region the number was parsed under.
    data: Arc<RegionData>,
    /// Region named by the country code, if the number has one.
    destination: Option<Arc<RegionData>>,
}

impl ParsedNumber {
    pub(crate) fn new(data: Arc<RegionData>) -> Self {
        Self {
            vsc: None,
            cic: None,
            idd_prefix: None,
            country_code: None,
            trunk_access: None,
            emergency: None,
            mobile_prefix: None,
            service_code: None,
            area_code: None,
            subscriber_number: None,
            extension: None,
            invalid: false,
            order: Vec::new(),
            data,
            destination: None,
        }
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Vsc => self.vsc.as_deref(),
            Field::Cic => self.cic.as_deref(),
            Field::IddPrefix => self.idd_prefix.as_deref(),
            Field::CountryCode => self.country_code.as_deref(),
            Field::TrunkAccess => self.trunk_access.as_deref(),
            Field::Emergency => self.emergency.as_deref(),
            Field::MobilePrefix => self.mobile_prefix.as_deref(),
            Field::ServiceCode => self.service_code.as_deref(),
            Field::AreaCode => self.area_code.as_deref(),
            Field::SubscriberNumber => self.subscriber_number.as_deref(),
            Field::Extension => self.extension.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Vsc => &mut self.vsc,
            Field::Cic => &mut self.cic,
            Field::IddPrefix => &mut self.idd_prefix,
            Field::CountryCode => &mut self.country_code,
            Field::TrunkAccess => &mut self.trunk_access,
            Field::Emergency => &mut self.emergency,
            Field::MobilePrefix => &mut self.mobile_prefix,
            Field::ServiceCode => &mut self.service_code,
            Field::AreaCode => &mut self.area_code,
            Field::SubscriberNumber => &mut self.subscriber_number,
            Field::Extension => &mut self.extension,
        }
    }

    /// Stores `value` in `field` and remembers where in the input it was
    /// found.
    pub(crate) fn set_field(&mut self, field: Field, value: String) {
        *self.slot_mut(field) = Some(value);
        self.record(field);
    }

    pub(crate) fn push_subscriber_digits(&mut self, digits: &str) {
        self.subscriber_number
            .get_or_insert_with(String::new)
            .push_str(digits);
        self.record(Field::SubscriberNumber);
    }

    fn record(&mut self, field: Field) {
        if !self.order.contains(&field) {
            self.order.push(field);
        }
    }

    /// Present fields in the order they were dialed. Fields set from outside
    /// the parser go in front of the first parsed field that is dialed after
    /// them.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        let mut ordered = self.order.clone();
        for field in Field::iter().filter(|field| !self.order.contains(field)) {
            let at = ordered
                .iter()
                .position(|placed| *placed > field)
                .unwrap_or(ordered.len());
            ordered.insert(at, field);
        }
        ordered
            .into_iter()
            .filter_map(move |field| self.field(field).map(|value| (field, value)))
    }

    pub fn is_valid(&self) -> bool {
        !self.invalid
    }

    /// Region the number was parsed under.
    pub fn region(&self) -> &str {
        self.data.region()
    }

    /// Region the number is routed to: the region of its country code, or
    /// the parse region for national numbers.
    pub fn destination_region(&self) -> &str {
        self.destination_data().region()
    }

    pub fn plan(&self) -> &NumberingPlan {
        self.data.plan()
    }

    pub fn destination_plan(&self) -> &NumberingPlan {
        self.destination_data().plan()
    }

    pub(crate) fn data(&self) -> &Arc<RegionData> {
        &self.data
    }

    pub(crate) fn destination_data(&self) -> &Arc<RegionData> {
        self.destination.as_ref().unwrap_or(&self.data)
    }

    pub(crate) fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    pub(crate) fn set_destination(&mut self, destination: Arc<RegionData>) {
        self.destination = Some(destination);
    }

    /// Whether the number carries an area code, a service code or a mobile
    /// prefix.
    pub fn has_prefix(&self) -> bool {
        self.area_code.is_some() || self.service_code.is_some() || self.mobile_prefix.is_some()
    }

    /// Renders the number with the named style of its region. `partial`
    /// selects the templates meant for a number that is still being typed.
    pub fn format(&self, style: &str, partial: bool) -> String {
        formatter::format(self, style, partial)
    }
}

impl PartialEq for ParsedNumber {
    fn eq(&self, other: &Self) -> bool {
        self.invalid == other.invalid
            && self.region() == other.region()
            && self.destination_region() == other.destination_region()
            && Field::iter().all(|field| self.field(field) == other.field(field))
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.fields() {
            if field == Field::Extension && !value.starts_with(EXTENSION_SEPARATORS) {
                f.write_str("x")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number() -> ParsedNumber {
        ParsedNumber::new(Arc::new(RegionData::fallback("US")))
    }

    #[test]
    fn joins_fields_in_dialing_order() {
        let mut number = number();
        number.subscriber_number = Some("5551212".to_owned());
        number.area_code = Some("650".to_owned());
        number.trunk_access = Some("1".to_owned());
        number.cic = Some("1010288".to_owned());
        assert_eq!(number.to_string(), "101028816505551212");
        assert_eq!(
            number.fields().map(|(field, _)| field).collect::<Vec<_>>(),
            vec![Field::Cic, Field::TrunkAccess, Field::AreaCode, Field::SubscriberNumber]
        );
    }

    #[test]
    fn joins_parsed_fields_in_input_order() {
        let mut number = number();
        number.set_field(Field::Emergency, "112".to_owned());
        number.set_field(Field::TrunkAccess, "0".to_owned());
        number.push_subscriber_digits("148524");
        assert_eq!(number.to_string(), "1120148524");

        // fields added later still go where they are dialed
        number.idd_prefix = Some("+".to_owned());
        number.country_code = Some("49".to_owned());
        assert_eq!(number.to_string(), "+491120148524");
        number.trunk_access = None;
        assert_eq!(number.to_string(), "+49112148524");
    }

    #[test]
    fn extension_marker_is_restored_when_joining() {
        let mut number = number();
        number.subscriber_number = Some("5551212".to_owned());
        number.extension = Some("123".to_owned());
        assert_eq!(number.to_string(), "5551212x123");

        number.extension = Some("w123".to_owned());
        assert_eq!(number.to_string(), "5551212w123");
    }

    #[test]
    fn slots_and_prefix_detection() {
        let mut number = number();
        assert!(!number.has_prefix());
        *number.slot_mut(Field::MobilePrefix) = Some("151".to_owned());
        assert_eq!(number.field(Field::MobilePrefix), Some("151"));
        assert!(number.has_prefix());
        assert_eq!(number.region(), "US");
        assert_eq!(number.destination_region(), "US");
    }

    #[test]
    fn equality_ignores_shared_data_identity() {
        let mut first = number();
        let mut second = number();
        first.subscriber_number = Some("5551212".to_owned());
        second.subscriber_number = Some("5551212".to_owned());
        assert_eq!(first, second);
        second.invalid = true;
        assert_ne!(first, second);
    }
}
