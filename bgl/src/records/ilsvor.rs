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

use log::debug;

use super::{child, children, unknown_child, Name};
use crate::codes::{IlsVorType, RunwayDesignator};
use crate::record_type::{IlsVorRecord, Scope};
use crate::{runway_name, Error, FromRecord, Ident, Issues, Position, RawRecord};

const ILS_VOR_LENGTH: usize = 40;

/// A VOR, VOR-DME, DME or ILS.
///
/// An ILS is identified by its type and carries a localizer. VORs and DMEs
/// never have a localizer or glideslope.
#[derive(Clone, PartialEq, Debug)]
pub struct IlsVor {
    pub kind: IlsVorType,
    pub dme_only: bool,
    pub backcourse: bool,
    pub position: Position,
    /// Frequency in Hz.
    pub frequency: u32,
    pub range: f32,
    pub magvar: f32,
    pub ident: Ident,
    pub region: Ident,
    pub airport_ident: Ident,
    pub name: String,
    pub localizer: Option<Localizer>,
    pub glideslope: Option<Glideslope>,
    pub dme: Option<Dme>,
}

impl IlsVor {
    pub fn is_ils(&self) -> bool {
        self.kind == IlsVorType::Ils || self.localizer.is_some()
    }
}

impl FromRecord for IlsVor {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let kind = fields.next()?;
        let flags: u8 = fields.next()?;
        fields.skip(2)?;

        let mut navaid = Self {
            kind,
            dme_only: flags & 0x01 != 0,
            backcourse: flags & 0x02 != 0,
            position: fields.next()?,
            frequency: fields.next()?,
            range: fields.next()?,
            magvar: fields.next()?,
            ident: fields.next()?,
            region: fields.next()?,
            airport_ident: fields.next()?,
            name: String::new(),
            localizer: None,
            glideslope: None,
            dme: None,
        };

        const SCOPE: Scope = Scope::IlsVor;

        for rec in children(raw, ILS_VOR_LENGTH, SCOPE, issues)? {
            match IlsVorRecord::from_tag(rec.tag) {
                Some(IlsVorRecord::Localizer) => navaid.localizer = child(&rec, SCOPE, issues),
                Some(IlsVorRecord::Glideslope) => navaid.glideslope = child(&rec, SCOPE, issues),
                Some(IlsVorRecord::Dme) => navaid.dme = child(&rec, SCOPE, issues),
                Some(IlsVorRecord::IlsVorName) => {
                    navaid.name = child::<Name>(&rec, SCOPE, issues)
                        .map(|name| name.0)
                        .unwrap_or_default();
                }
                None => unknown_child(&rec, SCOPE, issues),
            }
        }

        debug!(
            "{} {} \"{}\" on {} kHz",
            navaid.kind,
            navaid.ident,
            navaid.name,
            navaid.frequency / 1000
        );

        Ok(navaid)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Localizer {
    pub runway_number: u8,
    pub runway_designator: RunwayDesignator,
    pub heading: f32,
    pub width: f32,
}

impl Localizer {
    pub fn runway_name(&self) -> String {
        runway_name(self.runway_number, self.runway_designator)
    }
}

impl FromRecord for Localizer {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let runway_number = fields.next()?;
        let runway_designator = fields.next()?;
        fields.skip(2)?;

        Ok(Self {
            runway_number,
            runway_designator,
            heading: fields.next()?,
            width: fields.next()?,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Glideslope {
    pub position: Position,
    pub range: f32,
    pub pitch: f32,
}

impl FromRecord for Glideslope {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        fields.skip(2)?;

        Ok(Self {
            position: fields.next()?,
            range: fields.next()?,
            pitch: fields.next()?,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dme {
    pub position: Position,
    pub range: f32,
}

impl FromRecord for Dme {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        fields.skip(2)?;

        Ok(Self {
            position: fields.next()?,
            range: fields.next()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ils_vor, RecordBuilder};
    use crate::Cursor;

    fn decode(builder: RecordBuilder) -> (IlsVor, Issues) {
        let bytes = builder.build();
        let raw = Cursor::new(&bytes, 0)
            .next_record()
            .unwrap()
            .expect("record should be read");
        let mut issues = Issues::new();
        let navaid = IlsVor::from_record(&raw, &mut issues).expect("navaid should decode");
        (navaid, issues)
    }

    #[test]
    fn decodes_ils_with_components() {
        let builder = ils_vor(4, "IHIQ", 110_900_000)
            .child(RecordBuilder::new(0x14).u8(4).u8(1).u16(0).f32(44.0).f32(5.0))
            .child(
                RecordBuilder::new(0x15)
                    .u16(0)
                    .position(-73.78, 40.62, 3.0)
                    .f32(18520.0)
                    .f32(3.0),
            )
            .child(RecordBuilder::new(0x16).u16(0).position(-73.78, 40.62, 3.0).f32(37040.0))
            .child(RecordBuilder::new(0x19).string("KENNEDY"));

        let (ils, issues) = decode(builder);

        assert!(issues.is_empty());
        assert!(ils.is_ils());
        assert_eq!(ils.ident.as_str(), "IHIQ");
        assert_eq!(ils.name, "KENNEDY");
        assert_eq!(ils.frequency, 110_900_000);
        assert_eq!(ils.localizer.map(|l| l.runway_name()), Some("04L".to_string()));
        assert_eq!(ils.glideslope.map(|g| g.pitch), Some(3.0));
        assert!(ils.dme.is_some());
    }

    #[test]
    fn decodes_vor() {
        let builder =
            ils_vor(3, "CCC", 117_200_000).child(RecordBuilder::new(0x19).string("CALVERTON"));
        let (vor, _) = decode(builder);

        assert!(!vor.is_ils());
        assert_eq!(vor.kind, IlsVorType::High);
        assert_eq!(vor.name, "CALVERTON");
        assert!(vor.localizer.is_none());
    }
}
