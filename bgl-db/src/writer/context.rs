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

use std::collections::{BTreeMap, HashMap};

use bgl::records::{AirportNames, NameList};

use super::Table;
use crate::Error;

#[derive(Copy, Clone, Debug)]
struct Slot {
    id: i64,
    generation: u64,
}

/// The state shared by the writers of one import.
///
/// Each writer publishes the id of the row it just wrote. Writers of child
/// tables read their foreign keys from here instead of tracking their
/// parents themselves.
#[derive(Default, Debug)]
pub struct WriterContext {
    current: BTreeMap<Table, Slot>,
    generation: u64,
    airport_ident: Option<String>,
    names: HashMap<String, AirportNames>,
    verbose: bool,
}

impl WriterContext {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The id of the row of `table` that was written last within the current
    /// record.
    pub fn current(&self, table: Table) -> Option<i64> {
        self.current.get(&table).map(|slot| slot.id)
    }

    /// Returns the current id of `parent` as foreign key of a `table` row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParent`] if no `parent` row is current.
    pub fn parent(&self, table: Table, parent: Table) -> Result<i64, Error> {
        self.current(parent).ok_or(Error::MissingParent {
            table: table.name(),
            parent: parent.name(),
        })
    }

    /// Makes `id` the current row of `table`.
    pub fn publish(&mut self, table: Table, id: i64) {
        self.generation += 1;
        self.current.insert(
            table,
            Slot {
                id,
                generation: self.generation,
            },
        );
    }

    /// Counts the publications of the run up to the current row of `table`.
    ///
    /// A row published after another has a greater generation, regardless of
    /// the table.
    pub fn generation(&self, table: Table) -> Option<u64> {
        self.current.get(&table).map(|slot| slot.generation)
    }

    pub fn file_id(&self) -> Option<i64> {
        self.current(Table::BglFile)
    }

    /// The ident of the airport whose children are written.
    pub fn airport_ident(&self) -> Option<&str> {
        self.airport_ident.as_deref()
    }

    pub(crate) fn enter_airport(&mut self, ident: &str) {
        self.airport_ident = Some(ident.to_string());
    }

    /// Clears every slot except the file's.
    ///
    /// Rows of the next top-level record can't reference rows of the
    /// previous one.
    pub(crate) fn end_record(&mut self) {
        self.airport_ident = None;
        self.current.retain(|&table, _| table == Table::BglFile);
    }

    /// Clears every slot.
    pub(crate) fn end_file(&mut self) {
        self.airport_ident = None;
        self.current.clear();
    }

    /// Adds the airport names of `list` to the name index and returns how
    /// many airports it names.
    pub fn add_names(&mut self, list: &NameList) -> usize {
        let before = self.names.len();

        for names in list.names() {
            self.names.insert(names.ident.clone(), names);
        }

        self.names.len() - before
    }

    /// The names of the airport with `ident` from a name list.
    pub fn names(&self, ident: &str) -> Option<&AirportNames> {
        self.names.get(ident)
    }
}
