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

use std::fmt;

use super::{child, children, unknown_child};
use crate::record_type::{Scope, SceneryObjectRecord};
use crate::{Error, FromRecord, Issues, Position, RawRecord, Turns};

const SCENERY_OBJECT_LENGTH: usize = 22;

/// A placed scenery object.
///
/// Only library objects and windsocks are decoded, other nested objects are
/// counted.
#[derive(Clone, PartialEq, Debug)]
pub struct SceneryObject {
    pub position: Position,
    pub flags: u16,
    pub pitch: Turns,
    pub bank: Turns,
    pub heading: Turns,
    pub complexity: u16,
    pub library_objects: Vec<LibraryObject>,
    pub windsocks: Vec<Windsock>,
    pub other: usize,
}

impl FromRecord for SceneryObject {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let mut object = Self {
            position: fields.next()?,
            flags: fields.next()?,
            pitch: fields.next()?,
            bank: fields.next()?,
            heading: fields.next()?,
            complexity: fields.next()?,
            library_objects: Vec::new(),
            windsocks: Vec::new(),
            other: 0,
        };

        const SCOPE: Scope = Scope::SceneryObject;

        for rec in children(raw, SCENERY_OBJECT_LENGTH, SCOPE, issues)? {
            match SceneryObjectRecord::from_tag(rec.tag) {
                Some(SceneryObjectRecord::LibObject) => object
                    .library_objects
                    .extend(child::<LibraryObject>(&rec, SCOPE, issues)),
                Some(SceneryObjectRecord::Windsock) => object
                    .windsocks
                    .extend(child::<Windsock>(&rec, SCOPE, issues)),
                Some(_) => object.other += 1,
                None => unknown_child(&rec, SCOPE, issues),
            }
        }

        Ok(object)
    }
}

/// A library object referenced by its GUID.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LibraryObject {
    pub guid: Guid,
    pub scale: f32,
}

impl FromRecord for LibraryObject {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        Ok(Self {
            guid: Guid(fields.next()?),
            scale: fields.next()?,
        })
    }
}

/// A GUID in its Windows byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Guid(pub [u8; 16]);

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{{{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}}}",
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_le_bytes([b[4], b[5]]),
            u16::from_le_bytes([b[6], b[7]]),
            b[8],
            b[9],
            b[10],
            b[11],
            b[12],
            b[13],
            b[14],
            b[15]
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Windsock {
    pub pole_height: f32,
    pub sock_length: f32,
    pub lighted: bool,
}

impl FromRecord for Windsock {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let pole_height = fields.next()?;
        let sock_length = fields.next()?;
        let flags: u16 = fields.next()?;

        Ok(Self {
            pole_height,
            sock_length,
            lighted: flags & 0x01 != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;
    use crate::Cursor;

    #[test]
    fn decodes_scenery_object() {
        let guid = [
            0x78, 0x56, 0x34, 0x12, 0xcd, 0xab, 0x01, 0xef, 0, 1, 2, 3, 4, 5, 6, 7,
        ];
        let bytes = RecordBuilder::new(0x25)
            .position(8.5, 50.0, 100.0)
            .u16(0)
            .u16(0)
            .u16(0)
            .u16(16384)
            .u16(2)
            .child(RecordBuilder::new(0x0b).bytes(&guid).f32(1.0))
            .child(RecordBuilder::new(0x0e).f32(6.0).f32(3.0).u16(1))
            .child(RecordBuilder::new(0x0d).u32(0))
            .build();

        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();
        let mut issues = Issues::new();
        let object = SceneryObject::from_record(&raw, &mut issues).expect("object should decode");

        assert!(issues.is_empty());
        assert_eq!(object.heading, Turns(90.0));
        assert_eq!(object.library_objects.len(), 1);
        assert_eq!(
            object.library_objects[0].guid.to_string(),
            "{12345678-abcd-ef01-0001-020304050607}"
        );
        assert!(object.windsocks[0].lighted);
        assert_eq!(object.other, 1);
    }
}
