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

//! BGL scenery file decoder.
//!
//! A BGL file is a header followed by tagged, length-prefixed records. Most
//! records nest further records after their fixed fields, e.g. an airport
//! holds its runways, which hold their VASIs and approach lights. This crate
//! decodes the [records] into owned entity trees.
//!
//! Decoding never reads beyond the size a record declares. Problems that
//! affect only a nested record, like a truncated runway or an unknown tag,
//! are collected as [`Issues`] and the rest of the tree is kept.
//!
//! # Examples
//!
//! Print all airports of a scenery file:
//!
//! ```no_run
//! use bgl::{BglFile, Issues, Record};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("APX47100.bgl")?;
//! let file = BglFile::parse(&data)?;
//! let mut issues = Issues::new();
//!
//! for (_, raw) in file.records() {
//!     if let Record::Airport(arpt) = Record::decode(&raw?, &mut issues)? {
//!         println!("{} {} with {} runways", arpt.ident, arpt.name, arpt.runways.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [records]: crate::records

#[macro_use]
mod macros;

mod error;
mod field;
mod file;
mod issue;
mod record;

pub mod codes;
pub mod record_type;
pub mod records;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use codes::runway_name;
pub use error::Error;
pub use field::*;
pub use file::{BglFile, Records, MAGIC};
pub use issue::{Issue, IssueKind, Issues};
pub use record::{Cursor, Fields, FromRecord, RawRecord, HEADER_LENGTH};
pub use record_type::{RecordKind, Scope};
pub use records::Record;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{airport, file, name, runway, RecordBuilder};

    fn decode_all(bytes: &[u8]) -> (Vec<Record>, Issues) {
        let file = BglFile::parse(bytes).expect("header should be valid");
        let mut issues = Issues::new();
        let mut records = Vec::new();

        for (offset, raw) in file.records() {
            match raw.and_then(|raw| Record::decode(&raw, &mut issues)) {
                Ok(record) => records.push(record),
                Err(e) => issues.report(Scope::TopLevel, 0, &e),
            }
            assert!(offset >= file.header_size());
        }

        (records, issues)
    }

    #[test]
    fn unknown_record_after_airport() {
        let bytes = file([
            airport("KJFK", -73.7786, 40.6399)
                .child(name("KENNEDY INTL"))
                .child(runway(4, 1, 22, 2, 44.0, 3460.0))
                .build(),
            RecordBuilder::new(0x0fff).u32(0xdeadbeef).build(),
        ]);

        let (records, issues) = decode_all(&bytes);

        assert_eq!(records.len(), 2);
        match &records[0] {
            Record::Airport(arpt) => {
                assert_eq!(arpt.name, "KENNEDY INTL");
                assert_eq!(arpt.runways.len(), 1);
            }
            other => panic!("expected an airport, got {other:?}"),
        }
        assert!(matches!(&records[1], Record::Unknown(unknown) if unknown.tag == 0x0fff));
        assert_eq!(records[1].kind(), None);

        // the unknown record is reported exactly once
        assert_eq!(issues.len(), 1);
        let issue = issues.iter().next().expect("issue should be reported");
        assert_eq!(issue.kind, IssueKind::UnknownTag);
        assert_eq!(issue.tag, 0x0fff);
    }

    #[test]
    fn truncated_child_keeps_siblings() {
        // the runway declares 20 byte but needs 52 for its fixed fields
        let mut short_runway = runway(4, 1, 22, 2, 44.0, 3460.0).build();
        short_runway.truncate(20);
        short_runway[2..6].copy_from_slice(&20u32.to_le_bytes());

        let bytes = file([airport("KJFK", -73.7786, 40.6399)
            .child(name("KENNEDY INTL"))
            .bytes(&short_runway)
            .child(runway(13, 1, 31, 2, 134.0, 3048.0))
            .build()]);

        let (records, issues) = decode_all(&bytes);

        let Record::Airport(arpt) = &records[0] else {
            panic!("expected an airport");
        };
        assert_eq!(arpt.name, "KENNEDY INTL");
        assert_eq!(arpt.runways.len(), 1);
        assert_eq!(arpt.runways[0].name(), "13L/31R");
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues.iter().next().map(|i| (i.scope, i.kind)),
            Some((Scope::Airport, IssueKind::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn record_length_bounds_decoding() {
        // a child which declares more than the parent holds
        let overlong = RecordBuilder::new(0x0019)
            .string("KENNEDY")
            .build_with_size(200);

        let bytes = file([
            airport("KJFK", -73.7786, 40.6399).bytes(&overlong).build(),
            airport("KLGA", -73.8726, 40.7772).build(),
        ]);

        let (records, issues) = decode_all(&bytes);

        assert_eq!(records.len(), 2);
        let Record::Airport(jfk) = &records[0] else {
            panic!("expected an airport");
        };
        assert!(jfk.name.is_empty());
        assert_eq!(
            issues.iter().map(|i| i.kind).collect::<Vec<_>>(),
            vec![IssueKind::Truncated {
                declared: 200,
                available: 14
            }]
        );
    }

    #[test]
    fn empty_records_decode_without_children() {
        let bytes = file([
            airport("KJFK", -73.7786, 40.6399)
                .child(RecordBuilder::new(0x0019))
                .build(),
            // zero-length airport payload can't hold the fixed fields
            RecordBuilder::new(0x003c).build(),
            airport("KLGA", -73.8726, 40.7772).build(),
        ]);

        let (records, issues) = decode_all(&bytes);

        assert_eq!(records.len(), 2);
        let Record::Airport(jfk) = &records[0] else {
            panic!("expected an airport");
        };
        assert!(jfk.name.is_empty());
        assert!(jfk.runways.is_empty());
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues.iter().next().map(|i| i.kind),
            Some(IssueKind::OutOfBounds {
                needed: 6,
                available: 0
            })
        ));
    }

    #[test]
    fn truncated_top_level_record_ends_file() {
        let mut bytes = file([airport("KJFK", -73.7786, 40.6399).build()]);
        bytes.extend(0x003cu16.to_le_bytes());
        bytes.extend(1000u32.to_le_bytes());

        let (records, issues) = decode_all(&bytes);

        assert_eq!(records.len(), 1);
        assert!(matches!(
            issues.iter().next().map(|i| i.kind),
            Some(IssueKind::Truncated {
                declared: 1000,
                available: 6
            })
        ));
    }
}
