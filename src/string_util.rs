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

/// Strips an ASCII `prefix` from the start of a string Cow, ignoring case.
/// Returns `Some` if the prefix was found.
///
/// An owned string is drained in place, a borrowed one is sliced.
pub fn strip_cow_prefix_ignore_case<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    let matches = cow
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
    if !matches {
        return None;
    }
    match cow {
        Cow::Borrowed(s) => Some(Cow::Borrowed(&s[prefix.len()..])),
        Cow::Owned(mut s) => {
            s.drain(..prefix.len());
            Some(Cow::Owned(s))
        }
    }
}
