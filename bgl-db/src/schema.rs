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

//! Database schema.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::Error;

const MIGRATIONS_SLICE: &[M<'_>] = &[M::up(include_str!("schema.sql"))];

const MIGRATIONS: Migrations<'_> = Migrations::from_slice(MIGRATIONS_SLICE);

/// Creates or migrates the schema and enables foreign key checks.
///
/// # Errors
///
/// Returns an error if the schema can't be created or the connection
/// doesn't accept the pragma.
pub fn migrate(connection: &mut Connection) -> Result<(), Error> {
    connection
        .pragma_update(None, "foreign_keys", true)
        .map_err(|source| Error::Sqlite {
            operation: "enable foreign keys",
            source,
        })?;

    MIGRATIONS.to_latest(connection)?;
    Ok(())
}
