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

//! Writers of the database tables.
//!
//! Every table has one [`Writer`] which binds the columns of an entity to
//! the table's insert statement. A [`TableWriter`] drives it: it assigns the
//! primary key from the table's id sequence, executes the statement and
//! publishes the id to the [`WriterContext`], from which the writers of child
//! tables read their foreign keys. The [`DataWriter`] walks the decoded
//! records parent first, which keeps every foreign key valid.

use std::fmt;
use std::marker::PhantomData;

use log::debug;
use rusqlite::types::{Null, ToSql};
use rusqlite::{Connection, Statement};

use crate::Error;

mod airport;
mod approach;
mod boundary;
mod context;
mod data_writer;
mod file;
mod nav;
mod runway;
mod table;

pub use airport::{
    AirportWriter, ComWriter, DeleteAirportWriter, HelipadWriter, ParkingWriter, StartWriter,
};
pub use approach::{ApproachLegWriter, ApproachWriter, TransitionLegWriter, TransitionWriter};
pub use boundary::{BoundaryLineWriter, BoundaryWriter};
pub use context::WriterContext;
pub use data_writer::DataWriter;
pub use file::{BglFileWriter, FileInfo};
pub use nav::{IlsWriter, MarkerWriter, NdbWriter, RoutePointWriter, VorWriter, WaypointWriter};
pub use runway::{EndType, RunwayEndWriter, RunwayRow, RunwayWriter};
pub use table::Table;

/// Binds an entity to the insert statement of one table.
pub trait Writer {
    /// The entity that is written as one row.
    type Entity<'e>;

    const TABLE: Table;

    /// The insert statement with named parameters. The primary key is bound
    /// to the parameter named after the key column, e.g. `:airport_id`.
    const SQL: &'static str;

    /// Binds the columns of `entity` and the foreign keys from `ctx`.
    ///
    /// Parameters which aren't bound are `NULL`.
    fn bind(row: &mut Row<'_, '_>, ctx: &WriterContext, entity: &Self::Entity<'_>)
        -> Result<(), Error>;

    /// Publishes more than the id of the written row, e.g. an ident that
    /// rows of child tables denormalise.
    fn publish(_ctx: &mut WriterContext, _entity: &Self::Entity<'_>) {}
}

/// The statement of one row while its parameters are bound.
pub struct Row<'s, 'c> {
    statement: &'s mut Statement<'c>,
    table: Table,
    id: i64,
    bound: Vec<bool>,
}

impl<'s, 'c> Row<'s, 'c> {
    fn new(statement: &'s mut Statement<'c>, table: Table, id: i64) -> Self {
        let bound = vec![false; statement.parameter_count()];

        Self {
            statement,
            table,
            id,
            bound,
        }
    }

    /// The primary key of the row.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Binds `value` to the parameter `name`, e.g. `":ident"`.
    ///
    /// # Errors
    ///
    /// Fails if the statement has no parameter `name` or the value can't be
    /// converted.
    pub fn bind<T: ToSql>(&mut self, name: &str, value: T) -> Result<&mut Self, Error> {
        let index = self
            .statement
            .parameter_index(name)
            .map_err(|source| self.error(source))?
            .ok_or_else(|| self.error(rusqlite::Error::InvalidParameterName(name.to_string())))?;

        self.statement
            .raw_bind_parameter(index, value)
            .map_err(|source| self.error(source))?;
        self.bound[index - 1] = true;

        Ok(self)
    }

    fn execute(mut self) -> Result<(), Error> {
        // bindings of the previous row survive the statement reset
        for (index, bound) in self.bound.iter().enumerate() {
            if !bound {
                self.statement
                    .raw_bind_parameter(index + 1, Null)
                    .map_err(|source| self.error(source))?;
            }
        }

        self.statement
            .raw_execute()
            .map(|_| ())
            .map_err(|source| self.error(source))
    }

    fn error(&self, source: rusqlite::Error) -> Error {
        Error::Persistence {
            table: self.table.name(),
            id: self.id,
            source,
        }
    }
}

/// Writes rows of one table with ids from the table's sequence.
pub struct TableWriter<W> {
    next_id: i64,
    rows: usize,
    writer: PhantomData<fn() -> W>,
}

impl<W: Writer> TableWriter<W> {
    /// Creates a writer whose first row gets the id `id_base`.
    pub fn new(id_base: i64) -> Self {
        Self {
            next_id: id_base,
            rows: 0,
            writer: PhantomData,
        }
    }

    /// Creates a writer which continues after the rows already in the
    /// table, or starts at `id_base` if that's greater.
    ///
    /// # Errors
    ///
    /// Returns an error if the greatest id of the table can't be read.
    pub fn resume(connection: &Connection, id_base: i64) -> Result<Self, Error> {
        let table = W::TABLE;
        let last: Option<i64> = connection
            .query_row(
                &format!("SELECT max({}) FROM {table}", table.id_column()),
                [],
                |row| row.get(0),
            )
            .map_err(|source| Error::Sqlite {
                operation: "read the last row ids",
                source,
            })?;

        let next_id = last.map_or(id_base, |last| id_base.max(last + 1));
        Ok(Self::new(next_id))
    }

    /// Number of rows written.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Writes `entity` as new row and publishes its id.
    ///
    /// The id is consumed even if the row is rejected, so ids stay unique
    /// when the import continues after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParent`] if a foreign key has no current row
    /// and [`Error::Persistence`] if the database rejects the row.
    pub fn write_object(
        &mut self,
        connection: &Connection,
        ctx: &mut WriterContext,
        entity: &W::Entity<'_>,
    ) -> Result<i64, Error> {
        let id = self.next_id;
        self.next_id += 1;

        let mut statement = connection
            .prepare_cached(W::SQL)
            .map_err(|source| Error::Persistence {
                table: W::TABLE.name(),
                id,
                source,
            })?;

        let mut row = Row::new(&mut statement, W::TABLE, id);
        row.bind(W::TABLE.id_param(), id)?;
        W::bind(&mut row, ctx, entity)?;
        row.execute()?;

        if ctx.verbose() {
            match ctx.airport_ident() {
                Some(ident) => debug!("wrote {} {id} of {ident}", W::TABLE),
                None => debug!("wrote {} {id}", W::TABLE),
            }
        }

        ctx.publish(W::TABLE, id);
        W::publish(ctx, entity);
        self.rows += 1;

        Ok(id)
    }
}

impl<W: Writer> fmt::Debug for TableWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableWriter")
            .field("table", &W::TABLE)
            .field("next_id", &self.next_id)
            .field("rows", &self.rows)
            .finish()
    }
}

/// Returns `None` for an empty string, which is bound as `NULL`.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
