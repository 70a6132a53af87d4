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

use serde::Deserialize;
use strum::{AsRefStr, EnumIter, EnumString};

/// Whether the area code of a region may be left out for calls inside the
/// same area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialingStyle {
    /// **Open plan.**
    /// Local calls can be dialed with the subscriber number only.
    /// Example: Germany, `1234567` inside Munich.
    #[default]
    Open,
    /// **Closed plan.**
    /// The area code is part of every number and always dialed.
    /// Example: France, `01 45 67 89 01` even inside Paris.
    Closed,
}

/// Kind of mobile network the phone is attached to. It decides how the
/// international prefix is written when a number is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkType {
    /// CDMA networks need the IDD code of the network the phone is on,
    /// e.g. `011` in the US.
    Cdma,
    /// UMTS/GSM networks all understand the `+` prefix.
    #[default]
    Umts,
}

/// The typed parts a dialed string can be decomposed into.
///
/// The declaration order is the order in which the parts are dialed, and
/// therefore the order used when a number is joined back into a string or
/// formatted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    /// Vertical service code ("star code"), e.g. `*67`.
    Vsc,
    /// Carrier identification code, e.g. `1010288`.
    Cic,
    /// `+` or the dialed international access code, e.g. `011`.
    IddPrefix,
    CountryCode,
    TrunkAccess,
    Emergency,
    MobilePrefix,
    ServiceCode,
    AreaCode,
    SubscriberNumber,
    Extension,
}

/// Terminal states of a state table. Every leaf of a table names one of these
/// and the parser dispatches on it when the leaf is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Handler {
    Trunk,
    Plus,
    Idd,
    Country,
    Cic,
    Service,
    Area,
    Vsc,
    Cell,
    Personal,
    Special,
    Premium,
    Emergency,
    Service2,
    Service3,
    Service4,
    Cic2,
    Cic3,
    Start,
    Local,
    None,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::{Field, Handler};

    #[test]
    fn handler_names_round_trip() {
        assert_eq!(Handler::iter().count(), 21);
        for handler in Handler::iter() {
            assert_eq!(Handler::from_str(handler.as_ref()), Ok(handler));
        }
        assert_eq!(Handler::from_str("service2"), Ok(Handler::Service2));
        assert!(Handler::from_str("mobile").is_err());
    }

    #[test]
    fn field_names_use_data_spelling() {
        assert_eq!(Field::IddPrefix.as_ref(), "iddPrefix");
        assert_eq!(Field::from_str("subscriberNumber"), Ok(Field::SubscriberNumber));
        assert_eq!(Field::iter().next(), Some(Field::Vsc));
        assert_eq!(Field::iter().last(), Some(Field::Extension));
    }
}
