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
use std::sync::atomic::Ordering;

use bgl::test_support::{
    airport, approach, com, file, ils_vor, legs, name, name_list, ndb, runway, transition,
    waypoint, RecordBuilder,
};
use bgl::{IssueKind, RecordKind};
use bgl_db::{Error, ImportOptions, Importer, OnError, Table};
use rusqlite::Connection;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Connection {
    Connection::open(dir.path().join("navdata.sqlite")).expect("database should open")
}

fn count(connection: &Connection, table: &str) -> i64 {
    connection
        .query_row(&format!("SELECT count(*) FROM {table}"), [], |row| row.get(0))
        .expect("rows should be counted")
}

fn kennedy() -> RecordBuilder {
    airport("KJFK", -73.7786, 40.6399)
        .child(name("KENNEDY INTL"))
        .child(runway(4, 1, 22, 2, 44.0, 3460.0))
        .child(runway(13, 2, 31, 1, 134.0, 4442.0))
        .child(com(6, 119_100_000, "KENNEDY TOWER"))
        .child(
            approach(4, 4, "CI04L")
                .child(legs(0x2d, &[(15, "CI04L"), (4, "ROSLY"), (18, "RW04L")]))
                .child(legs(0x2e, &[(19, ""), (7, "DPK")]))
                .child(transition("DPK").child(legs(0x2f, &[(15, "DPK"), (18, "CI04L")])))
                .child(transition("CCC").child(legs(0x2f, &[(15, "CCC")]))),
        )
}

fn laguardia() -> RecordBuilder {
    airport("KLGA", -73.8726, 40.7772).child(name("LA GUARDIA"))
}

fn scenery() -> Vec<u8> {
    file([
        kennedy().build(),
        laguardia().build(),
        waypoint("ROSLY", 0).build(),
        ils_vor(4, "IJFK", 110_900_000).build(),
        ils_vor(3, "CCC", 117_700_000).build(),
        ndb("BE", 400_000).build(),
    ])
}

#[test]
fn children_reference_parents() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    let summary = Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47100.bgl", &scenery())
        .expect("import should succeed");

    assert_eq!(summary.counts(RecordKind::Airport).written, 2);
    assert_eq!(summary.rows(Table::TransitionLeg), 3);

    // legs follow the transition written right before them
    let mut stmt = connection
        .prepare(
            "SELECT t.fix_ident, l.fix_ident FROM transition_leg l \
            JOIN transition t USING (transition_id) ORDER BY l.transition_leg_id",
        )
        .expect("query should be prepared");
    let fixes: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query should run")
        .collect::<Result<_, _>>()
        .expect("legs should be read");

    assert_eq!(
        fixes,
        vec![
            ("DPK".to_string(), "DPK".to_string()),
            ("DPK".to_string(), "CI04L".to_string()),
            ("CCC".to_string(), "CCC".to_string()),
        ]
    );

    // ids follow the order in which rows are written
    let runway_ends: Vec<i64> = {
        let mut stmt = connection
            .prepare("SELECT primary_end_id, secondary_end_id FROM runway ORDER BY runway_id")
            .expect("query should be prepared");
        let rows = stmt
            .query_map([], |row| Ok([row.get(0)?, row.get(1)?]))
            .expect("query should run")
            .collect::<Result<Vec<[i64; 2]>, _>>()
            .expect("runways should be read");
        rows.concat()
    };
    assert_eq!(runway_ends, vec![1, 2, 3, 4]);

    let navaids = (count(&connection, "ils"), count(&connection, "vor"), count(&connection, "ndb"));
    assert_eq!(navaids, (1, 1, 1));
}

#[test]
fn rejected_row_rolls_back_the_import() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);
    bgl_db::schema::migrate(&mut connection).expect("schema should be created");
    connection
        .execute_batch(
            "CREATE TRIGGER reject_com BEFORE INSERT ON com \
            BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .expect("trigger should be created");

    let result = Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47100.bgl", &scenery());

    assert!(matches!(
        result,
        Err(Error::Persistence {
            table: "com",
            id: 1,
            ..
        })
    ));

    // nothing of the run is committed, not even rows before the failure
    drop(connection);
    let connection = open(&dir);
    for table in Table::ALL {
        assert_eq!(count(&connection, table.name()), 0, "{table} should be empty");
    }
}

#[test]
fn rejected_row_skips_its_record() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);
    bgl_db::schema::migrate(&mut connection).expect("schema should be created");
    connection
        .execute_batch(
            "CREATE TRIGGER reject_com BEFORE INSERT ON com \
            BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .expect("trigger should be created");

    let options = ImportOptions::default().with_on_error(OnError::SkipEntity);
    let summary = Importer::new(&mut connection, options)
        .import_bytes("APX47100.bgl", &scenery())
        .expect("import should succeed");

    let airports = summary.counts(RecordKind::Airport);
    assert_eq!((airports.decoded, airports.written, airports.skipped), (2, 1, 1));
    assert_eq!(summary.counts(RecordKind::Ndb).written, 1);

    // rows of KJFK written before its COM are kept, its approach isn't
    assert_eq!(count(&connection, "airport"), 2);
    assert_eq!(count(&connection, "runway"), 2);
    assert_eq!(count(&connection, "com"), 0);
    assert_eq!(count(&connection, "approach"), 0);
    assert_eq!(count(&connection, "ndb"), 1);
}

#[test]
fn cancelled_import_writes_nothing() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let path = dir.path().join("APX47100.bgl");
    fs::write(&path, scenery()).expect("scenery should be written");
    let mut connection = open(&dir);

    let mut importer = Importer::new(&mut connection, ImportOptions::default());
    importer.cancel_flag().store(true, Ordering::Relaxed);

    assert!(matches!(
        importer.import_files([&path]),
        Err(Error::Cancelled)
    ));
    assert_eq!(count(&connection, "bgl_file"), 0);
    assert_eq!(count(&connection, "airport"), 0);
}

#[test]
fn filters_skip_writing() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    let options = ImportOptions::default()
        .exclude(RecordKind::Ndb)
        .exclude(RecordKind::IlsVor)
        .exclude_airport("KLGA");
    let summary = Importer::new(&mut connection, options)
        .import_bytes("APX47100.bgl", &scenery())
        .expect("import should succeed");

    let ndbs = summary.counts(RecordKind::Ndb);
    assert_eq!((ndbs.decoded, ndbs.written, ndbs.skipped), (1, 0, 1));
    assert_eq!(summary.counts(RecordKind::IlsVor).skipped, 2);
    assert_eq!(summary.counts(RecordKind::Airport).skipped, 1);
    assert_eq!(summary.counts(RecordKind::Waypoint).written, 1);

    let idents: String = connection
        .query_row("SELECT group_concat(ident) FROM airport", [], |row| {
            row.get(0)
        })
        .expect("airports should be read");
    assert_eq!(idents, "KJFK");
    assert_eq!(count(&connection, "ndb"), 0);
    assert_eq!(count(&connection, "waypoint"), 1);
}

#[test]
fn included_kinds_restrict_writing() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    let summary = Importer::new(&mut connection, ImportOptions::default().include(RecordKind::Ndb))
        .import_bytes("APX47100.bgl", &scenery())
        .expect("import should succeed");

    assert_eq!(summary.counts(RecordKind::Airport).decoded, 2);
    assert_eq!(count(&connection, "airport"), 0);
    assert_eq!(count(&connection, "ndb"), 1);
    assert_eq!(count(&connection, "bgl_file"), 1);
}

#[test]
fn name_list_names_airports() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    let bytes = file([
        name_list(&[("KJFK", "New York", "Kennedy Intl"), ("KLGA", "Queens", "La Guardia")]).build(),
        airport("KJFK", -73.7786, 40.6399).build(),
        laguardia().build(),
    ]);

    let summary = Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47100.bgl", &bytes)
        .expect("import should succeed");

    assert_eq!(summary.counts(RecordKind::NameList).decoded, 1);

    let mut stmt = connection
        .prepare("SELECT ident, name, city, country FROM airport ORDER BY airport_id")
        .expect("query should be prepared");
    let airports: Vec<(String, String, String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))
        .expect("query should run")
        .collect::<Result<_, _>>()
        .expect("airports should be read");

    // the name of the record wins over the name list
    assert_eq!(
        airports,
        vec![
            (
                "KJFK".to_string(),
                "Kennedy Intl".to_string(),
                "New York".to_string(),
                "United States".to_string()
            ),
            (
                "KLGA".to_string(),
                "LA GUARDIA".to_string(),
                "Queens".to_string(),
                "United States".to_string()
            ),
        ]
    );
}

#[test]
fn invalid_files_are_skipped() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let scenery_path = dir.path().join("APX47100.bgl");
    let readme_path = dir.path().join("README.txt");
    fs::write(&scenery_path, scenery()).expect("scenery should be written");
    fs::write(&readme_path, "not a scenery file").expect("readme should be written");
    let mut connection = open(&dir);

    let summary = Importer::new(&mut connection, ImportOptions::default())
        .import_files([&readme_path, &scenery_path])
        .expect("import should succeed");

    assert_eq!((summary.files, summary.files_skipped), (1, 1));
    assert!(matches!(
        summary.issues.first().map(|issue| issue.kind),
        Some(IssueKind::InvalidHeader { .. })
    ));

    let filename: String = connection
        .query_row("SELECT filename FROM bgl_file", [], |row| row.get(0))
        .expect("file should be written");
    assert_eq!(filename, "APX47100.bgl");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    let result = Importer::new(&mut connection, ImportOptions::default())
        .import_files([dir.path().join("missing.bgl")]);

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn unknown_records_are_counted() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    let bytes = file([
        kennedy().build(),
        RecordBuilder::new(0x0fff).u32(0xdeadbeef).build(),
        laguardia().build(),
    ]);

    let summary = Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47100.bgl", &bytes)
        .expect("import should succeed");

    assert_eq!(summary.unknown, 1);
    assert_eq!(summary.counts(RecordKind::Airport).written, 2);
    assert_eq!(summary.issues.len(), 1);
    assert_eq!(summary.issues[0].kind, IssueKind::UnknownTag);
}

#[test]
fn files_of_one_import_share_sequences() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let paths = ["APX47100.bgl", "APX47101.bgl"].map(|name| dir.path().join(name));
    fs::write(&paths[0], file([kennedy().build()])).expect("scenery should be written");
    fs::write(&paths[1], file([laguardia().build()])).expect("scenery should be written");
    let mut connection = open(&dir);

    let summary = Importer::new(&mut connection, ImportOptions::default().with_id_base(100))
        .import_files(&paths)
        .expect("import should succeed");
    assert_eq!(summary.files, 2);

    let mut stmt = connection
        .prepare("SELECT airport_id, file_id FROM airport ORDER BY airport_id")
        .expect("query should be prepared");
    let airports: Vec<(i64, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query should run")
        .collect::<Result<_, _>>()
        .expect("airports should be read");

    assert_eq!(airports, vec![(100, 100), (101, 101)]);
}

#[test]
fn cancel_after_first_file_rolls_back() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let paths = ["APX47100.bgl", "APX47101.bgl"].map(|name| dir.path().join(name));
    fs::write(&paths[0], scenery()).expect("scenery should be written");
    fs::write(&paths[1], file([laguardia().build()])).expect("scenery should be written");
    let mut connection = open(&dir);

    let mut importer = Importer::new(&mut connection, ImportOptions::default());
    let cancel = importer.cancel_flag();

    // the flag is set once the first file is written and the second is next
    let paths = paths.iter().enumerate().map(|(index, path)| {
        if index == 1 {
            cancel.store(true, Ordering::Relaxed);
        }
        path
    });

    assert!(matches!(importer.import_files(paths), Err(Error::Cancelled)));

    drop(connection);
    let connection = open(&dir);
    for table in Table::ALL {
        assert_eq!(count(&connection, table.name()), 0, "{table} should be empty");
    }
}

#[test]
fn second_import_adds_rows() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);

    Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47100.bgl", &scenery())
        .expect("first import should succeed");
    let summary = Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47101.bgl", &file([laguardia().build()]))
        .expect("second import should succeed");

    assert_eq!(summary.rows(Table::Airport), 1);
    assert_eq!(count(&connection, "bgl_file"), 2);
    assert_eq!(count(&connection, "airport"), 3);

    let (airport_id, filename): (i64, String) = connection
        .query_row(
            "SELECT a.airport_id, f.filename FROM airport a \
            JOIN bgl_file f ON f.bgl_file_id = a.file_id ORDER BY a.airport_id DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("airport should be read");
    assert_eq!((airport_id, filename.as_str()), (3, "APX47101.bgl"));
}

fn reject_airport_updates(connection: &mut Connection) {
    bgl_db::schema::migrate(connection).expect("schema should be created");
    connection
        .execute_batch(
            "CREATE TRIGGER reject_names BEFORE UPDATE ON airport \
            BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .expect("trigger should be created");
}

fn names_after_airport() -> Vec<u8> {
    file([
        laguardia().build(),
        name_list(&[("KLGA", "Queens", "La Guardia"), ("KJFK", "New York", "Kennedy Intl")]).build(),
        airport("KJFK", -73.7786, 40.6399).build(),
    ])
}

#[test]
fn rejected_name_update_aborts() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);
    reject_airport_updates(&mut connection);

    let result = Importer::new(&mut connection, ImportOptions::default())
        .import_bytes("APX47100.bgl", &names_after_airport());

    assert!(matches!(
        result,
        Err(Error::Persistence {
            table: "airport",
            id: 1,
            ..
        })
    ));
    assert_eq!(count(&connection, "airport"), 0);
}

#[test]
fn rejected_name_update_skips_name_list() {
    let dir = tempfile::tempdir().expect("directory should be created");
    let mut connection = open(&dir);
    reject_airport_updates(&mut connection);

    let options = ImportOptions::default().with_on_error(OnError::SkipEntity);
    let summary = Importer::new(&mut connection, options)
        .import_bytes("APX47100.bgl", &names_after_airport())
        .expect("import should succeed");

    let names = summary.counts(RecordKind::NameList);
    assert_eq!((names.decoded, names.skipped), (1, 1));
    assert_eq!(summary.counts(RecordKind::Airport).written, 2);

    // the skipped list names neither airport
    let unnamed: i64 = connection
        .query_row(
            "SELECT count(*) FROM airport WHERE city IS NULL",
            [],
            |row| row.get(0),
        )
        .expect("airports should be counted");
    assert_eq!(unnamed, 2);
}
