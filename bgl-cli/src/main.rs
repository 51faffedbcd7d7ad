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

//! `bglc` imports BGL scenery files into a SQLite database.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use bgl::RecordKind;
use bgl_db::{ImportOptions, Importer, OnError};
use clap::Parser;
use log::{error, LevelFilter};
use rusqlite::Connection;

#[derive(Debug, Parser)]
#[command(name = "bglc", about = "Import BGL scenery files into a SQLite database", version)]
struct Args {
    /// The database to write, created if it doesn't exist.
    #[arg(long, short, value_name = "PATH")]
    database: PathBuf,

    /// Import options as JSON, overridden by the flags below.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log every written row.
    #[arg(long, short)]
    verbose: bool,

    /// Write only records of this kind, e.g. AIRPORT or NDB.
    #[arg(long, value_name = "KIND")]
    include: Vec<RecordKind>,

    /// Skip records of this kind.
    #[arg(long, value_name = "KIND")]
    exclude: Vec<RecordKind>,

    /// Write only the airport with this ident.
    #[arg(long, value_name = "IDENT")]
    airport: Vec<String>,

    /// The least id of new rows in every table.
    #[arg(long, value_name = "N")]
    id_base: Option<i64>,

    /// What to do when a row is rejected: abort or skip.
    #[arg(long, value_name = "POLICY")]
    on_error: Option<OnError>,

    /// Don't write the airport deletions of add-on scenery.
    #[arg(long)]
    no_deletes: bool,

    /// The BGL files to import.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Args {
    fn options(&self) -> Result<ImportOptions, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("can't read {}: {e}", path.display()))?;
                serde_json::from_str(&json)
                    .map_err(|e| format!("invalid options in {}: {e}", path.display()))?
            }
            None => ImportOptions::default(),
        };

        options.verbose |= self.verbose;
        options.include_kinds.extend(self.include.iter().copied());
        options.exclude_kinds.extend(self.exclude.iter().copied());
        options = self
            .airport
            .iter()
            .fold(options, |options, ident| options.include_airport(ident));

        if let Some(id_base) = self.id_base {
            options.id_base = id_base;
        }
        if let Some(on_error) = self.on_error {
            options.on_error = on_error;
        }
        if self.no_deletes {
            options.write_deletes = false;
        }

        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let options = args.options()?;
    let mut connection = Connection::open(&args.database)
        .map_err(|e| format!("can't open {}: {e}", args.database.display()))?;

    let summary = Importer::new(&mut connection, options).import_files(&args.files)?;
    println!("{summary}");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bglc").chain(args.iter().copied())).expect("arguments should parse")
    }

    #[test]
    fn flags_set_options() {
        let args = parse(&[
            "--database",
            "navdata.sqlite",
            "--exclude",
            "ndb",
            "--include",
            "ILS_VOR",
            "--airport",
            "kjfk",
            "--on-error",
            "skip",
            "--id-base",
            "1000",
            "--no-deletes",
            "APX47100.bgl",
        ]);
        let options = args.options().expect("options should be valid");

        assert!(options.writes_kind(RecordKind::IlsVor));
        assert!(!options.writes_kind(RecordKind::Ndb));
        assert!(options.writes_airport("KJFK"));
        assert!(!options.writes_airport("KLGA"));
        assert_eq!(options.on_error, OnError::SkipEntity);
        assert_eq!(options.id_base, 1000);
        assert!(!options.write_deletes);
        assert_eq!(args.files, vec![PathBuf::from("APX47100.bgl")]);
    }

    #[test]
    fn flags_override_config() {
        let dir = tempfile::tempdir().expect("directory should be created");
        let config = dir.path().join("options.json");
        fs::write(
            &config,
            r#"{ "verbose": true, "id_base": 50, "on_error": "skip-entity", "exclude_kinds": ["NDB"] }"#,
        )
        .expect("config should be written");

        let args = parse(&[
            "-d",
            "navdata.sqlite",
            "--config",
            config.to_str().expect("path should be UTF-8"),
            "--id-base",
            "7",
            "APX47100.bgl",
        ]);
        let options = args.options().expect("options should be valid");

        assert!(options.verbose);
        assert_eq!(options.id_base, 7);
        assert_eq!(options.on_error, OnError::SkipEntity);
        assert!(!options.writes_kind(RecordKind::Ndb));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Args::try_parse_from(["bglc", "-d", "a.sqlite", "--include", "RUNWAY", "a.bgl"])
            .is_err());
    }

    #[test]
    fn files_are_required() {
        assert!(Args::try_parse_from(["bglc", "-d", "a.sqlite"]).is_err());
    }
}
