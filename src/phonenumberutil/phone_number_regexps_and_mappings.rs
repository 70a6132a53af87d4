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

use regex::Regex;

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Written-out extension labels: `;ext=`, `ext.`, `extn`, `extension`.
    /// Matched case-insensitively together with surrounding blanks, and
    /// replaced by the `x` marker the state machine understands.
    pub extension_label_pattern: Regex,

    /// Switchboard notation of regions that write the extension after a
    /// hyphen, e.g. `089 1234-56`. Only applied when the numbering plan asks
    /// for it: the number must contain a blank, slash or closing parenthesis
    /// group before the last digit group so that plain hyphenated numbers
    /// are left alone.
    pub trailing_extension_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        Self {
            extension_label_pattern: Regex::new(r"(?i)\s*(?:;\s*ext\s*=|ext(?:ension|n)?\.?)\s*")
                .expect("Invalid constant pattern!"),
            trailing_extension_pattern: Regex::new(r"^(.*\d[\s/)]+\d+)-(\d{1,5})$")
                .expect("Invalid constant pattern!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn extension_labels() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let label = &reg_exps.extension_label_pattern;
        assert_eq!(label.replace_all("650 555 1212 ext. 123", "x"), "650 555 1212x123");
        assert_eq!(label.replace_all("tel:+16505551212;ext=44", "x"), "tel:+16505551212x44");
        assert_eq!(label.replace_all("5551212 EXTN 9", "x"), "5551212x9");
        assert_eq!(label.replace_all("5551212", "x"), "5551212");
    }

    #[test]
    fn trailing_extensions() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let trailing = &reg_exps.trailing_extension_pattern;
        assert_eq!(trailing.replace("089 1234-56", "${1}x${2}"), "089 1234x56");
        assert_eq!(trailing.replace("(089) 1234-0", "${1}x${2}"), "(089) 1234x0");
        assert!(!trailing.is_match("089-1234-56"));
        assert!(!trailing.is_match("0891234-56"));
    }
}
