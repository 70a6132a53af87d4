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

use thiserror::Error;

/// Problems found while turning raw table data into a [`StateTable`].
///
/// [`StateTable`]: crate::StateTable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Unknown handler name '{0}'")]
    UnknownHandler(String),
    #[error("Unknown digit class '{0}'")]
    UnknownDigitClass(String),
    #[error("Unknown field name '{0}' in format templates")]
    UnknownField(String),
}

/// Loading region data failed.
///
/// Errors are `Clone` so that one in-flight load can hand its outcome to
/// every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The data source could not be reached. Callers fall back to the
    /// default plan for this kind of error.
    #[error("Data for '{region}' is unavailable: {reason}")]
    Unavailable { region: String, reason: String },

    #[error("Data for '{region}' is malformed: {message}")]
    Malformed { region: String, message: String },

    #[error("Invalid state table for '{region}': {source}")]
    InvalidTable {
        region: String,
        #[source]
        source: TableError,
    },
}

/// Fatal parse errors.
///
/// A malformed phone number is never an error, it only sets the `invalid`
/// flag of the result. These variants mean the table data or the engine is
/// broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Handler '{handler}' consumed nothing from '{remaining}'")]
    NoProgress { handler: String, remaining: String },

    #[error("Number switched country more than {0} times")]
    TooManyRegionSwitches(usize),
}

impl LoadError {
    /// Whether the caller should fall back to the default plan instead of
    /// failing.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadError::Unavailable { .. })
    }
}
