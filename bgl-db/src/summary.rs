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

use std::collections::BTreeMap;
use std::fmt;

use bgl::{Issue, RecordKind};

use crate::writer::Table;

/// Counts of the top-level records of one kind.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct KindCounts {
    pub decoded: usize,
    /// Records written with all their children.
    pub written: usize,
    /// Records excluded by the options or abandoned after a rejected row.
    pub skipped: usize,
}

/// The outcome of an import.
#[derive(Clone, Default, Debug)]
pub struct ImportSummary {
    pub files: usize,
    /// Files without a valid header.
    pub files_skipped: usize,
    pub kinds: BTreeMap<RecordKind, KindCounts>,
    /// Top-level records with an unknown tag.
    pub unknown: usize,
    /// Top-level records which couldn't be read or decoded.
    pub failed: usize,
    pub rows: BTreeMap<Table, usize>,
    pub issues: Vec<Issue>,
}

impl ImportSummary {
    pub fn counts(&self, kind: RecordKind) -> KindCounts {
        self.kinds.get(&kind).copied().unwrap_or_default()
    }

    /// Rows written to `table`.
    pub fn rows(&self, table: Table) -> usize {
        self.rows.get(&table).copied().unwrap_or_default()
    }

    pub fn total_rows(&self) -> usize {
        self.rows.values().sum()
    }

    pub(crate) fn kind_mut(&mut self, kind: RecordKind) -> &mut KindCounts {
        self.kinds.entry(kind).or_default()
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} files imported, {} skipped",
            self.files, self.files_skipped
        )?;

        for (kind, counts) in &self.kinds {
            writeln!(
                f,
                "{:<20} {:>8} decoded {:>8} written {:>8} skipped",
                kind.name(),
                counts.decoded,
                counts.written,
                counts.skipped
            )?;
        }

        if self.unknown > 0 || self.failed > 0 {
            writeln!(
                f,
                "{} unknown and {} failed records",
                self.unknown, self.failed
            )?;
        }

        for (table, rows) in self.rows.iter().filter(|&(_, &rows)| rows > 0) {
            writeln!(f, "{:<20} {rows:>8} rows", table.name())?;
        }

        write!(
            f,
            "{} rows written, {} issues",
            self.total_rows(),
            self.issues.len()
        )
    }
}
