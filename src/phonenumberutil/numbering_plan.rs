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

use super::{
    enums::{DialingStyle, Handler},
    helper_constants::{DEFAULT_IDD_CODE, DEFAULT_TRUNK_CODE},
};

/// Lengths of the fields a handler cuts out of a number.
///
/// A positive value is a fixed number of digits. Zero (the default) means
/// the field ends where the state table stopped matching, and a negative
/// value `-n` means "where the table stopped, plus `n` more digits".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldLengths {
    pub area_code: i32,
    pub cic: i32,
    pub cic2: i32,
    pub cic3: i32,
    pub mobile_prefix: i32,
    pub service_code: i32,
    pub service2: i32,
    pub service3: i32,
    pub service4: i32,
    pub personal: i32,
    pub special: i32,
    pub premium: i32,
    pub vsc: i32,
    /// Longest subscriber number that can be dialed without an area code.
    /// Zero disables the check.
    pub max_local_length: i32,
}

impl FieldLengths {
    /// Length setting consulted by the given handler. Handlers that do not
    /// cut a sized field get `0`.
    pub fn for_handler(&self, handler: Handler) -> i32 {
        match handler {
            Handler::Area => self.area_code,
            Handler::Cic => self.cic,
            Handler::Cic2 => self.cic2,
            Handler::Cic3 => self.cic3,
            Handler::Cell => self.mobile_prefix,
            Handler::Service => self.service_code,
            Handler::Service2 => self.service2,
            Handler::Service3 => self.service3,
            Handler::Service4 => self.service4,
            Handler::Personal => self.personal,
            Handler::Special => self.special,
            Handler::Premium => self.premium,
            Handler::Vsc => self.vsc,
            Handler::Trunk
            | Handler::Plus
            | Handler::Idd
            | Handler::Country
            | Handler::Emergency
            | Handler::Start
            | Handler::Local
            | Handler::None => 0,
        }
    }
}

/// Dialing metadata of one region. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberingPlan {
    #[serde(default)]
    region: String,
    #[serde(default = "default_trunk_code")]
    trunk_code: String,
    #[serde(default = "default_idd_code")]
    idd_code: String,
    #[serde(default, rename = "dialingPlan")]
    dialing_style: DialingStyle,
    #[serde(default)]
    field_lengths: FieldLengths,
    #[serde(default)]
    trunk_required: bool,
    #[serde(default)]
    skip_trunk: bool,
    #[serde(default)]
    extended_area_codes: bool,
    #[serde(default)]
    context_free: bool,
    #[serde(default)]
    find_extensions: bool,
    #[serde(default)]
    common_format_chars: String,
}

fn default_trunk_code() -> String {
    DEFAULT_TRUNK_CODE.to_owned()
}

fn default_idd_code() -> String {
    DEFAULT_IDD_CODE.to_owned()
}

impl NumberingPlan {
    /// Plan used for regions without data: open dialing, trunk `0`, IDD
    /// `00`, no fixed field lengths and no flags.
    pub fn default_for(region: &str) -> Self {
        Self {
            region: region.to_owned(),
            trunk_code: default_trunk_code(),
            idd_code: default_idd_code(),
            dialing_style: DialingStyle::Open,
            field_lengths: FieldLengths::default(),
            trunk_required: false,
            skip_trunk: false,
            extended_area_codes: false,
            context_free: false,
            find_extensions: false,
            common_format_chars: String::new(),
        }
    }

    /// Same plan, published under another region code. Used for regions that
    /// share the numbering data of a larger one.
    pub(crate) fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_owned();
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Digits dialed before a domestic area code. Empty for regions that
    /// have none.
    pub fn trunk_code(&self) -> &str {
        &self.trunk_code
    }

    pub fn idd_code(&self) -> &str {
        &self.idd_code
    }

    pub fn dialing_style(&self) -> DialingStyle {
        self.dialing_style
    }

    pub fn field_lengths(&self) -> &FieldLengths {
        &self.field_lengths
    }

    pub fn max_local_length(&self) -> Option<usize> {
        (self.field_lengths.max_local_length > 0)
            .then_some(self.field_lengths.max_local_length as usize)
    }

    pub fn trunk_required(&self) -> bool {
        self.trunk_required
    }

    /// After a country code the trunk is implied: parsing resumes behind the
    /// trunk transition and international renderings drop trunk digits.
    pub fn skip_trunk(&self) -> bool {
        self.skip_trunk
    }

    pub fn extended_area_codes(&self) -> bool {
        self.extended_area_codes
    }

    pub fn context_free(&self) -> bool {
        self.context_free
    }

    pub fn find_extensions(&self) -> bool {
        self.find_extensions
    }

    pub fn common_format_chars(&self) -> &str {
        &self.common_format_chars
    }
}
