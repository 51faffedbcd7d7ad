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

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// A file couldn't be read.
    Io { path: PathBuf, source: io::Error },
    /// The database schema couldn't be created or migrated.
    Schema(rusqlite_migration::Error),
    /// The database rejected the row of `table` with primary key `id`.
    Persistence {
        table: &'static str,
        id: i64,
        source: rusqlite::Error,
    },
    /// A row of `table` was written while no `parent` row was current.
    MissingParent {
        table: &'static str,
        parent: &'static str,
    },
    /// The import was cancelled and rolled back.
    Cancelled,
    /// A database operation outside of a single row failed.
    Sqlite {
        operation: &'static str,
        source: rusqlite::Error,
    },
}

impl Error {
    /// Whether the error concerns a single row and the import may skip the
    /// entity that caused it.
    pub fn is_row_error(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Schema(e) => write!(f, "failed to create the database schema: {e}"),
            Self::Persistence { table, id, source } => {
                write!(f, "failed to write {table} row {id}: {source}")
            }
            Self::MissingParent { table, parent } => {
                write!(f, "{table} row written without a current {parent}")
            }
            Self::Cancelled => write!(f, "import cancelled"),
            Self::Sqlite { operation, source } => {
                write!(f, "failed to {operation}: {source}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Schema(e) => Some(e),
            Self::Persistence { source, .. } | Self::Sqlite { source, .. } => Some(source),
            Self::MissingParent { .. } | Self::Cancelled => None,
        }
    }
}

impl From<rusqlite_migration::Error> for Error {
    fn from(e: rusqlite_migration::Error) -> Self {
        Self::Schema(e)
    }
}
