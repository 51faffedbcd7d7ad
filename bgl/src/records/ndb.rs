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

use super::{child, children, unknown_child, Name};
use crate::codes::NdbType;
use crate::record_type::{NdbRecord, Scope};
use crate::{Error, FromRecord, Ident, Issues, Position, RawRecord};

const NDB_LENGTH: usize = 38;

#[derive(Clone, PartialEq, Debug)]
pub struct Ndb {
    pub kind: NdbType,
    /// Frequency in Hz.
    pub frequency: u32,
    pub position: Position,
    pub range: f32,
    pub magvar: f32,
    pub ident: Ident,
    pub region: Ident,
    pub airport_ident: Ident,
    pub name: String,
}

impl FromRecord for Ndb {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let mut ndb = Self {
            kind: fields.next()?,
            frequency: fields.next()?,
            position: fields.next()?,
            range: fields.next()?,
            magvar: fields.next()?,
            ident: fields.next()?,
            region: fields.next()?,
            airport_ident: fields.next()?,
            name: String::new(),
        };

        for rec in children(raw, NDB_LENGTH, Scope::Ndb, issues)? {
            match NdbRecord::from_tag(rec.tag) {
                Some(NdbRecord::NdbName) => {
                    ndb.name = child::<Name>(&rec, Scope::Ndb, issues)
                        .map(|name| name.0)
                        .unwrap_or_default();
                }
                None => unknown_child(&rec, Scope::Ndb, issues),
            }
        }

        Ok(ndb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;
    use crate::Cursor;

    #[test]
    fn decodes_ndb_with_name() {
        let bytes = RecordBuilder::new(0x17)
            .u16(2)
            .u32(338_000)
            .position(-73.1, 40.8, 30.0)
            .f32(46300.0)
            .f32(-13.0)
            .ident("CAT")
            .ident("K6")
            .u32(0)
            .child(RecordBuilder::new(0x19).string("CATHEDRAL"))
            .child(RecordBuilder::new(0x55).u8(0))
            .build();

        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();
        let mut issues = Issues::new();
        let ndb = Ndb::from_record(&raw, &mut issues).expect("NDB should decode");

        assert_eq!(ndb.kind, NdbType::H);
        assert_eq!(ndb.frequency, 338_000);
        assert_eq!(ndb.ident.as_str(), "CAT");
        assert_eq!(ndb.name, "CATHEDRAL");
        assert!(ndb.airport_ident.is_empty());
        assert_eq!(issues.len(), 1);
    }
}
