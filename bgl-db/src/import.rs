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

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bgl::{BglFile, Issues, Record, RecordKind, Scope};
use log::{debug, info, warn};
use rusqlite::{Connection, Transaction};

use crate::writer::{DataWriter, FileInfo};
use crate::{schema, Error, ImportOptions, ImportSummary, OnError};

/// Imports BGL files into a database.
///
/// All files of one import are written in one transaction. An import either
/// commits every row or, on a fatal error or cancellation, none. Rows of
/// earlier imports into the same database are kept and ids continue after
/// them.
///
/// # Examples
///
/// ```no_run
/// use bgl_db::{ImportOptions, Importer};
/// use rusqlite::Connection;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut connection = Connection::open("scenery.sqlite")?;
/// let summary = Importer::new(&mut connection, ImportOptions::default())
///     .import_files(["APX47100.bgl", "NVX47100.bgl"])?;
///
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
pub struct Importer<'c> {
    connection: &'c mut Connection,
    options: ImportOptions,
    cancel: Arc<AtomicBool>,
}

impl<'c> Importer<'c> {
    pub fn new(connection: &'c mut Connection, options: ImportOptions) -> Self {
        Self {
            connection,
            options,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Uses `cancel` to cancel the import from another thread.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the flag which cancels the import when it's set.
    ///
    /// The flag is checked between top-level records.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports the files at `paths` in one transaction.
    ///
    /// Files without a valid header are skipped and reported as issue.
    ///
    /// # Errors
    ///
    /// Returns an error and rolls back every file if a file can't be read,
    /// a row is rejected while the policy is [`OnError::AbortRun`] or the
    /// import is cancelled.
    pub fn import_files<I, P>(&mut self, paths: I) -> Result<ImportSummary, Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.run(|run, tx| {
            for path in paths {
                let path = path.as_ref();
                run.check_cancel()?;

                let bytes = fs::read(path).map_err(|source| Error::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                run.import_file(tx, path, &bytes)?;
            }

            Ok(())
        })
    }

    /// Imports one file from memory. The `bgl_file` row is named after
    /// `path`.
    ///
    /// # Errors
    ///
    /// See [`Importer::import_files`].
    pub fn import_bytes<P: AsRef<Path>>(
        &mut self,
        path: P,
        bytes: &[u8],
    ) -> Result<ImportSummary, Error> {
        self.run(|run, tx| run.import_file(tx, path.as_ref(), bytes))
    }

    fn run<F>(&mut self, import: F) -> Result<ImportSummary, Error>
    where
        F: FnOnce(&mut Run<'_>, &Transaction<'_>) -> Result<(), Error>,
    {
        schema::migrate(self.connection)?;

        let tx = self
            .connection
            .transaction()
            .map_err(|source| Error::Sqlite {
                operation: "begin the import transaction",
                source,
            })?;

        let writer = DataWriter::resume(&tx, &self.options)?;
        let mut run = Run::new(&self.options, &self.cancel, writer);

        // dropping the transaction rolls it back
        if let Err(e) = import(&mut run, &tx) {
            warn!("import failed and is rolled back: {e}");
            return Err(e);
        }

        let summary = run.finish();
        tx.commit().map_err(|source| Error::Sqlite {
            operation: "commit the import",
            source,
        })?;

        info!(
            "imported {} files with {} rows and {} issues",
            summary.files,
            summary.total_rows(),
            summary.issues.len()
        );

        Ok(summary)
    }
}

/// The state of one import while records are written.
struct Run<'o> {
    options: &'o ImportOptions,
    cancel: &'o AtomicBool,
    writer: DataWriter,
    issues: Issues,
    summary: ImportSummary,
}

impl<'o> Run<'o> {
    fn new(options: &'o ImportOptions, cancel: &'o AtomicBool, writer: DataWriter) -> Self {
        Self {
            options,
            cancel,
            writer,
            issues: Issues::new(),
            summary: ImportSummary::default(),
        }
    }

    fn check_cancel(&self) -> Result<(), Error> {
        if self.cancel.load(Ordering::Relaxed) {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    fn import_file(&mut self, connection: &Connection, path: &Path, bytes: &[u8]) -> Result<(), Error> {
        let file = match BglFile::parse(bytes) {
            Ok(file) => file,
            Err(e) => {
                warn!("skipping {}", path.display());
                self.issues.report(Scope::TopLevel, 0, &e);
                self.summary.files_skipped += 1;
                return Ok(());
            }
        };

        info!("importing {} ({} byte)", path.display(), bytes.len());
        self.writer.write_file(
            connection,
            FileInfo {
                path,
                size: bytes.len() as u64,
            },
        )?;
        self.summary.files += 1;

        for (offset, raw) in file.records() {
            self.check_cancel()?;

            let raw = match raw {
                Ok(raw) => raw,
                Err(e) => {
                    // a truncated top-level record ends the file
                    self.issues.report(Scope::TopLevel, 0, &e);
                    self.summary.failed += 1;
                    continue;
                }
            };

            match Record::decode(&raw, &mut self.issues) {
                Ok(record) => self.write(connection, &record, offset)?,
                Err(e) => {
                    self.issues.report(Scope::TopLevel, raw.tag, &e);
                    self.summary.failed += 1;
                }
            }
        }

        Ok(())
    }

    fn write(&mut self, connection: &Connection, record: &Record, offset: usize) -> Result<(), Error> {
        let Some(kind) = record.kind() else {
            self.summary.unknown += 1;
            return Ok(());
        };

        self.summary.kind_mut(kind).decoded += 1;

        if !self.writes(kind, record) {
            if self.options.verbose {
                debug!("skipping {kind} at {offset:#x}");
            }
            self.summary.kind_mut(kind).skipped += 1;
            return Ok(());
        }

        match self.writer.write_record(connection, record) {
            Ok(true) => self.summary.kind_mut(kind).written += 1,
            Ok(false) => {}
            Err(e) if e.is_row_error() && self.options.on_error == OnError::SkipEntity => {
                warn!("skipping the rest of {kind} at {offset:#x}: {e}");
                self.summary.kind_mut(kind).skipped += 1;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn writes(&self, kind: RecordKind, record: &Record) -> bool {
        if !self.options.writes_kind(kind) {
            return false;
        }

        match record {
            Record::Airport(arpt) => self.options.writes_airport(arpt.ident.as_str()),
            _ => true,
        }
    }

    fn finish(self) -> ImportSummary {
        ImportSummary {
            rows: self.writer.rows(),
            issues: self.issues.into_vec(),
            ..self.summary
        }
    }
}
