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

/// Tables the driver can scan with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    /// Table of the region currently in effect.
    Region,
    /// Shared table of country calling codes.
    Idd,
}

/// Where scanning picks up after a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// Root of the region table.
    Root,
    /// The remainder is a new number: the start marker is put back in
    /// front of it.
    Start,
    /// Node reached through the trunk transition of the region table.
    TrunkSkipped,
}

/// What the driver does after a handler ran. `remainder` is the input
/// still to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    Continue {
        resume: Resume,
        remainder: &'a str,
    },
    SwitchTable {
        table: TableId,
        remainder: &'a str,
    },
    SwitchRegion {
        calling_code: String,
        remainder: &'a str,
    },
    Done,
}

impl<'a> Step<'a> {
    pub fn remainder(&self) -> &'a str {
        match self {
            Step::Continue { remainder, .. }
            | Step::SwitchTable { remainder, .. }
            | Step::SwitchRegion { remainder, .. } => remainder,
            Step::Done => "",
        }
    }
}

/// Result of walking a table: the selected handler and how many characters
/// of the scanned string its path covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub handler: super::enums::Handler,
    pub matched: usize,
}
