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

use crate::record_type::RecordKind;
use crate::{Error, Fields, FromRecord, Ident, Issues, RawRecord};

const ICAO_ENTRY_LENGTH: usize = 16;

/// A lookup table of VOR/ILS, NDB or waypoint idents in a file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IcaoIndex {
    pub kind: RecordKind,
    pub entries: Vec<IcaoEntry>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IcaoEntry {
    pub ident: Ident,
    pub region: Ident,
    pub airport_ident: Ident,
}

impl IcaoEntry {
    fn read(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let entry = Self {
            ident: fields.next()?,
            region: fields.next()?,
            airport_ident: fields.next()?,
        };
        fields.skip(4)?;
        Ok(entry)
    }
}

impl FromRecord for IcaoIndex {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let count: u32 = fields.next()?;

        Ok(Self {
            kind: RecordKind::from_tag(raw.tag).unwrap_or(RecordKind::VorIlsIcaoIndex),
            entries: fields.entries(count as usize, ICAO_ENTRY_LENGTH, IcaoEntry::read)?,
        })
    }
}
