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

use std::{collections::BTreeMap, sync::Arc};

use serde::Deserialize;

use super::{
    errors::LoadError,
    formatter::{FormatStyles, RawFormatStyle},
    numbering_plan::NumberingPlan,
    state_table::{RawNode, StateTable},
};

/// Raw form of one region data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    pub plan: NumberingPlan,
    pub states: RawNode,
    #[serde(default)]
    pub formats: BTreeMap<String, RawFormatStyle>,
}

/// Everything the engine knows about one region, shared between every
/// number parsed under it.
#[derive(Debug, Clone)]
pub struct RegionData {
    plan: NumberingPlan,
    table: Arc<StateTable>,
    formats: Arc<FormatStyles>,
}

impl RegionData {
    pub fn from_record(region: &str, record: RegionRecord) -> Result<Self, LoadError> {
        let invalid_table = |source| LoadError::InvalidTable {
            region: region.to_owned(),
            source,
        };
        let table = StateTable::from_raw(record.states).map_err(invalid_table)?;
        let formats = FormatStyles::from_raw(record.formats).map_err(invalid_table)?;
        Ok(Self {
            plan: record.plan.with_region(region),
            table: Arc::new(table),
            formats: Arc::new(formats),
        })
    }

    /// Default plan and fallback table for a region without data.
    pub fn fallback(region: &str) -> Self {
        Self {
            plan: NumberingPlan::default_for(region),
            table: Arc::new(StateTable::fallback()),
            formats: Arc::new(FormatStyles::default()),
        }
    }

    /// The same data published under another region code.
    pub(crate) fn shared_as(&self, region: &str) -> Self {
        Self {
            plan: self.plan.clone().with_region(region),
            table: self.table.clone(),
            formats: self.formats.clone(),
        }
    }

    pub fn region(&self) -> &str {
        self.plan.region()
    }

    pub fn plan(&self) -> &NumberingPlan {
        &self.plan
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    pub fn formats(&self) -> &FormatStyles {
        &self.formats
    }
}
