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

use std::sync::Arc;

use log::{debug, trace};

use super::{
    enums::Handler,
    errors::ParseError,
    field_handlers,
    helper_constants::{MAX_REGION_SWITCHES, START_MARKER},
    helper_functions::{normalize_input, skip_leading_separators, strip_start_marker},
    helper_types::{Resume, Scan, Step, TableId},
    parsed_number::ParsedNumber,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    region_data::RegionData,
    region_locator::RegionLocator,
    state_table::{DigitClass, Node, StateTable},
};
use crate::region_data_cache::RegionDataCache;

/// Walks `input` from `start` and selects the handler to run.
///
/// Characters without a digit class are stepped over, and so is the start
/// marker where the table has no edge for it. A node that carries a
/// leaf and has further edges is remembered; when a later lookup fails, or
/// the input ends, the scan falls back to the most recently remembered leaf.
/// Without one the `none` handler gets the input.
pub(super) fn scan(start: &Node, input: &str) -> Option<Scan> {
    if input.is_empty() {
        return None;
    }
    let mut node = start;
    let mut last_leaf = None;
    for (position, c) in input.char_indices() {
        let Some(class) = DigitClass::of_char(c) else {
            continue;
        };
        // tables that do not anchor on the start marker never see it
        if class == DigitClass::Start && node.edge(class).is_none() {
            continue;
        }
        let Some(next) = node.step(class) else {
            trace!("No transition for '{c}' at {position} of '{input}'");
            return Some(last_leaf.unwrap_or(Scan {
                handler: Handler::None,
                matched: position,
            }));
        };
        let matched = position + c.len_utf8();
        if next.is_terminal() {
            return Some(Scan {
                handler: next.leaf().unwrap_or(Handler::None),
                matched,
            });
        }
        if let Some(handler) = next.leaf() {
            last_leaf = Some(Scan { handler, matched });
        }
        node = next;
    }
    Some(last_leaf.unwrap_or(Scan {
        handler: Handler::None,
        matched: input.len(),
    }))
}

/// Everything a parse needs besides the text.
pub(super) struct Parser<'a> {
    pub reg_exps: &'a PhoneNumberRegExpsAndMappings,
    pub locator: &'a RegionLocator,
    pub idd_table: &'a StateTable,
    pub cache: &'a RegionDataCache,
}

impl Parser<'_> {
    /// Parses `text` as dialed in `region`.
    ///
    /// Switching to the region named by a country code waits for that
    /// region's data to load, then continues with its plan and table.
    pub async fn parse(&self, text: &str, region: &str) -> Result<ParsedNumber, ParseError> {
        let data = self.cache.get(region).await?;
        let mut input = normalize_input(text, data.plan(), self.reg_exps);
        debug!("Parsing '{}' as '{}' in {}", text, input, data.region());

        let mut parsed = ParsedNumber::new(data.clone());
        let mut current: Arc<RegionData> = data;
        let mut table = TableId::Region;
        let mut resume = Resume::Root;
        let mut region_switches = 0;

        loop {
            let state_table = match table {
                TableId::Region => current.table(),
                TableId::Idd => self.idd_table,
            };
            let start = match resume {
                Resume::Root | Resume::Start => state_table.root(),
                Resume::TrunkSkipped => state_table.trunk_skipped(current.plan().trunk_code()),
            };
            let Some(Scan { handler, matched }) = scan(start, &input) else {
                break;
            };
            let (marked, marker_len) = strip_start_marker(&input);
            let number = skip_leading_separators(marked);
            let skipped = marker_len + marked.len() - number.len();
            let step = field_handlers::run(
                handler,
                number,
                matched.saturating_sub(skipped),
                &mut parsed,
                current.plan(),
            );
            if step != Step::Done && step.remainder().len() >= input.len() {
                return Err(ParseError::NoProgress {
                    handler: handler.as_ref().to_owned(),
                    remaining: input,
                });
            }

            let next = match step {
                Step::Done => break,
                Step::Continue {
                    resume: Resume::Start,
                    remainder,
                } => {
                    resume = Resume::Start;
                    table = TableId::Region;
                    with_start_marker(remainder)
                }
                Step::Continue {
                    resume: next_resume,
                    remainder,
                } => {
                    resume = next_resume;
                    table = TableId::Region;
                    remainder.to_owned()
                }
                Step::SwitchTable {
                    table: next_table,
                    remainder,
                } => {
                    resume = Resume::Root;
                    table = next_table;
                    remainder.to_owned()
                }
                Step::SwitchRegion {
                    calling_code,
                    remainder,
                } => {
                    let remainder = remainder.to_owned();
                    region_switches += 1;
                    if region_switches > MAX_REGION_SWITCHES {
                        return Err(ParseError::TooManyRegionSwitches(MAX_REGION_SWITCHES));
                    }
                    let destination = self
                        .locator
                        .region_for_calling_code(&calling_code)
                        .to_owned();
                    trace!("Country code '{calling_code}' switches to {destination}");
                    current = self.cache.get(&destination).await?;
                    parsed.set_destination(current.clone());
                    table = TableId::Region;
                    if current.plan().skip_trunk() {
                        resume = Resume::TrunkSkipped;
                        remainder
                    } else {
                        resume = Resume::Start;
                        with_start_marker(&remainder)
                    }
                }
            };
            if next.is_empty() {
                break;
            }
            input = next;
        }

        trace!(
            "Parsed '{}' into {:?}",
            text,
            parsed.fields().collect::<Vec<_>>()
        );
        Ok(parsed)
    }
}

fn with_start_marker(number: &str) -> String {
    if number.is_empty() {
        return String::new();
    }
    let mut marked = String::with_capacity(number.len() + 1);
    marked.push(START_MARKER);
    marked.push_str(number);
    marked
}
