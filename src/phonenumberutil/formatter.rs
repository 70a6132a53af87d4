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

use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
};

use log::trace;
use serde::Deserialize;

use super::{
    enums::Field,
    errors::TableError,
    helper_constants::{DEFAULT_EXTN_PREFIX, DEFAULT_STYLE, EXTENSION_SEPARATORS},
    parsed_number::ParsedNumber,
};

/// Stands for one digit of the field in a template.
const DIGIT_PLACEHOLDER: char = 'X';

/// Template of one field. Either a single pattern, or one pattern per field
/// length where entry `n - 1` is used for `n` digits and the last entry for
/// anything longer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Template {
    Fixed(String),
    ByLength(Vec<String>),
}

impl Template {
    fn pattern_for(&self, length: usize) -> Option<&str> {
        match self {
            Template::Fixed(pattern) => Some(pattern),
            Template::ByLength(patterns) => patterns
                .get(length.saturating_sub(1))
                .or_else(|| patterns.last())
                .map(String::as_str),
        }
    }

    /// Writes `value` into the template. Literals that follow the last digit
    /// are only written when the value filled every placeholder, and digits
    /// that do not fit are appended as they are.
    pub fn apply(&self, value: &str, out: &mut String) {
        let Some(pattern) = self.pattern_for(value.len()) else {
            out.push_str(value);
            return;
        };
        let mut digits = value.chars();
        let mut literals = String::new();
        for c in pattern.chars() {
            if c != DIGIT_PLACEHOLDER {
                literals.push(c);
                continue;
            }
            match digits.next() {
                Some(digit) => {
                    out.push_str(&literals);
                    literals.clear();
                    out.push(digit);
                }
                None => return,
            }
        }
        out.push_str(&literals);
        out.extend(digits);
    }
}

/// Raw form of one named style of a region data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFormatStyle {
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub whole: BTreeMap<String, Template>,
    /// Templates for numbers that are still being typed. Falls back to
    /// `whole` when absent.
    #[serde(default)]
    pub partial: Option<BTreeMap<String, Template>>,
}

#[derive(Debug, Clone, Default)]
pub struct FormatStyle {
    example: Option<String>,
    whole: HashMap<Field, Template>,
    partial: HashMap<Field, Template>,
}

fn templates_from_raw(
    raw: BTreeMap<String, Template>,
) -> Result<HashMap<Field, Template>, TableError> {
    raw.into_iter()
        .map(|(name, template)| {
            Field::from_str(&name)
                .map(|field| (field, template))
                .map_err(|_| TableError::UnknownField(name))
        })
        .collect()
}

impl FormatStyle {
    fn from_raw(raw: RawFormatStyle) -> Result<Self, TableError> {
        let whole = templates_from_raw(raw.whole)?;
        let partial = match raw.partial {
            Some(partial) => templates_from_raw(partial)?,
            None => whole.clone(),
        };
        Ok(Self {
            example: raw.example,
            whole,
            partial,
        })
    }

    /// Sample rendering shipped with the style, for display in settings.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    pub fn template(&self, field: Field, partial: bool) -> Option<&Template> {
        if partial {
            self.partial.get(&field)
        } else {
            self.whole.get(&field)
        }
    }
}

/// Named format styles of a region.
#[derive(Debug, Clone, Default)]
pub struct FormatStyles {
    styles: HashMap<String, FormatStyle>,
}

impl FormatStyles {
    pub fn from_raw(raw: BTreeMap<String, RawFormatStyle>) -> Result<Self, TableError> {
        let styles = raw
            .into_iter()
            .map(|(name, style)| FormatStyle::from_raw(style).map(|style| (name, style)))
            .collect::<Result<_, _>>()?;
        Ok(Self { styles })
    }

    /// Style of the given name, or the default style when the region has no
    /// such style.
    pub fn style(&self, name: &str) -> Option<&FormatStyle> {
        self.styles
            .get(name)
            .or_else(|| self.styles.get(DEFAULT_STYLE))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn push_extension(extension: &str, out: &mut String) {
    if extension.starts_with(EXTENSION_SEPARATORS) {
        out.push_str(extension);
    } else {
        out.push_str(&fast_cat::concat_str!(DEFAULT_EXTN_PREFIX, extension));
    }
}

/// Renders a parsed number with templates of the named style.
///
/// Fields are looked up in the destination region's style first, so an
/// international number is grouped the way its own country writes it.
/// Fields without a template are written as they are, separated by a space.
pub(super) fn format(number: &ParsedNumber, style: &str, partial: bool) -> String {
    let origin = number.data().formats().style(style);
    let destination = number
        .has_destination()
        .then(|| number.destination_data().formats().style(style))
        .flatten();
    trace!(
        "Formatting '{}' with style '{}' (partial: {})",
        number, style, partial
    );

    let mut out = String::new();
    let mut extension = None;
    for (field, value) in number.fields() {
        if field == Field::Extension {
            extension = Some(value);
            continue;
        }
        let template = destination
            .and_then(|style| style.template(field, partial))
            .or_else(|| origin.and_then(|style| style.template(field, partial)));
        match template {
            Some(template) => template.apply(value, &mut out),
            None => {
                out.push_str(value);
                out.push(' ');
            }
        }
    }
    out.truncate(out.trim_end().len());
    if let Some(extension) = extension {
        push_extension(extension, &mut out);
    }
    out
}
