// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use bgl::RecordKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens when the database rejects a row.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OnError {
    /// Roll back the whole import.
    #[default]
    AbortRun,
    /// Log a warning, abandon the rest of the top-level record and continue.
    ///
    /// Rows of the record which were written before the failure are kept.
    SkipEntity,
}

impl FromStr for OnError {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "abort" | "abortrun" => Ok(Self::AbortRun),
            "skip" | "skipentity" => Ok(Self::SkipEntity),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbortRun => write!(f, "abort"),
            Self::SkipEntity => write!(f, "skip"),
        }
    }
}

/// Error returned when an error policy name is not known.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InvalidPolicy(pub String);

impl fmt::Display for InvalidPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error policy \"{}\", expected abort or skip", self.0)
    }
}

impl std::error::Error for InvalidPolicy {}

/// Options of an import.
///
/// Empty include sets select everything; an excluded kind or airport is
/// skipped even if it's included.
///
/// # Examples
///
/// ```
/// use bgl::RecordKind;
/// use bgl_db::{ImportOptions, OnError};
///
/// let options = ImportOptions::default()
///     .include(RecordKind::Airport)
///     .exclude_airport("KJFK")
///     .with_on_error(OnError::SkipEntity);
///
/// assert!(options.writes_kind(RecordKind::Airport));
/// assert!(!options.writes_kind(RecordKind::Ndb));
/// assert!(!options.writes_airport("KJFK"));
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportOptions {
    /// Log every written record.
    pub verbose: bool,
    pub include_kinds: BTreeSet<RecordKind>,
    pub exclude_kinds: BTreeSet<RecordKind>,
    pub include_airports: BTreeSet<String>,
    pub exclude_airports: BTreeSet<String>,
    /// Persist the delete records of airports.
    pub write_deletes: bool,
    /// Least primary key of new rows. Ids continue after the rows already
    /// in a table if they are greater.
    pub id_base: i64,
    pub on_error: OnError,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            include_kinds: BTreeSet::new(),
            exclude_kinds: BTreeSet::new(),
            include_airports: BTreeSet::new(),
            exclude_airports: BTreeSet::new(),
            write_deletes: true,
            id_base: 1,
            on_error: OnError::default(),
        }
    }
}

impl ImportOptions {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn include(mut self, kind: RecordKind) -> Self {
        self.include_kinds.insert(kind);
        self
    }

    pub fn exclude(mut self, kind: RecordKind) -> Self {
        self.exclude_kinds.insert(kind);
        self
    }

    pub fn include_airport(mut self, ident: &str) -> Self {
        self.include_airports.insert(ident.to_uppercase());
        self
    }

    pub fn exclude_airport(mut self, ident: &str) -> Self {
        self.exclude_airports.insert(ident.to_uppercase());
        self
    }

    pub fn with_deletes(mut self, write_deletes: bool) -> Self {
        self.write_deletes = write_deletes;
        self
    }

    pub fn with_id_base(mut self, id_base: i64) -> Self {
        self.id_base = id_base;
        self
    }

    pub fn with_on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    /// Whether records of `kind` are written.
    pub fn writes_kind(&self, kind: RecordKind) -> bool {
        (self.include_kinds.is_empty() || self.include_kinds.contains(&kind))
            && !self.exclude_kinds.contains(&kind)
    }

    /// Whether the airport with `ident` is written.
    pub fn writes_airport(&self, ident: &str) -> bool {
        let ident = ident.to_uppercase();
        (self.include_airports.is_empty() || self.include_airports.contains(&ident))
            && !self.exclude_airports.contains(&ident)
    }
}
