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

//! Imports BGL scenery files into an SQLite database.
//!
//! The records of each file are decoded with the [`bgl`] crate and written
//! table by table: every table has a [writer] that assigns the primary keys
//! of its rows and reads its foreign keys from the rows its parents wrote
//! before. An import runs in one transaction, so a failed or cancelled
//! import leaves the database unchanged.
//!
//! # Examples
//!
//! ```no_run
//! use bgl::RecordKind;
//! use bgl_db::{ImportOptions, Importer, OnError};
//! use rusqlite::Connection;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut connection = Connection::open("navdata.sqlite")?;
//! let options = ImportOptions::default()
//!     .exclude(RecordKind::SceneryObject)
//!     .with_on_error(OnError::SkipEntity);
//!
//! let summary = Importer::new(&mut connection, options).import_files(["APX47100.bgl"])?;
//! println!("{} airports written", summary.counts(RecordKind::Airport).written);
//! # Ok(())
//! # }
//! ```
//!
//! [writer]: crate::writer

mod error;
mod import;
mod options;
mod summary;

pub mod schema;
pub mod writer;

pub use error::Error;
pub use import::Importer;
pub use options::{ImportOptions, InvalidPolicy, OnError};
pub use summary::{ImportSummary, KindCounts};
pub use writer::Table;
