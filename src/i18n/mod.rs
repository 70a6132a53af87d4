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

mod region_code;

pub use region_code::RegionCode;

/// Region part of a locale spec such as `"en-US"`, `"de_DE"` or a bare
/// `"GB"`, upper-cased. Returns the unknown region when the spec names none.
///
/// A lone two-letter spec is a region when written in capitals and a
/// language otherwise, so `"en"` has no region.
pub fn region_from_locale(locale: &str) -> String {
    let mut parts = locale.split(['-', '_']).filter(|part| !part.is_empty());
    let Some(first) = parts.next() else {
        return RegionCode::get_unknown().to_owned();
    };
    if locale.len() == 2 && RegionCode::is_well_formed(first) {
        return if first.bytes().all(|b| b.is_ascii_uppercase()) {
            first.to_owned()
        } else {
            RegionCode::get_unknown().to_owned()
        };
    }
    parts
        // skip a four-letter script subtag
        .find(|part| RegionCode::is_well_formed(part))
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| RegionCode::get_unknown().to_owned())
}
