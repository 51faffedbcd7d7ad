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

//! Builders of synthetic BGL records.
//!
//! The helpers are available to unit tests and, behind the `test-support`
//! feature, to tests and benchmarks of other crates.

use crate::codes::FixType;
use crate::file::MAGIC;
use crate::{encode_ident, lat_to_raw, lon_to_raw, HEADER_LENGTH};

/// The header size of files built by [`file`].
pub const FILE_HEADER_SIZE: usize = 56;

/// Builds one record with its header from fields and nested records.
///
/// # Examples
///
/// ```
/// use bgl::test_support::RecordBuilder;
///
/// let bytes = RecordBuilder::new(0x0012)
///     .u16(6)
///     .u32(118_700_000)
///     .string("TOWER")
///     .build();
///
/// assert_eq!(bytes.len(), 6 + 6 + 6);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct RecordBuilder {
    tag: u16,
    payload: Vec<u8>,
}

impl RecordBuilder {
    pub fn new(tag: u16) -> Self {
        Self {
            tag,
            payload: Vec::new(),
        }
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.payload.push(value);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.payload.extend(value.to_le_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.payload.extend(value.to_le_bytes());
        self
    }

    pub fn i32(mut self, value: i32) -> Self {
        self.payload.extend(value.to_le_bytes());
        self
    }

    pub fn f32(mut self, value: f32) -> Self {
        self.payload.extend(value.to_le_bytes());
        self
    }

    pub fn lon(self, lon: f64) -> Self {
        self.u32(lon_to_raw(lon))
    }

    pub fn lat(self, lat: f64) -> Self {
        self.u32(lat_to_raw(lat))
    }

    /// Altitude in meters.
    pub fn alt(self, alt: f64) -> Self {
        self.i32((alt * 1000.0).round() as i32)
    }

    pub fn position(self, lon: f64, lat: f64, alt: f64) -> Self {
        self.lon(lon).lat(lat).alt(alt)
    }

    pub fn ident(self, ident: &str) -> Self {
        self.u32(encode_ident(ident))
    }

    pub fn fix_ref(self, kind: FixType, ident: &str) -> Self {
        self.u32((encode_ident(ident) << 5) | kind.code() as u32)
    }

    /// A NUL-terminated string.
    pub fn string(mut self, s: &str) -> Self {
        self.payload.extend(s.as_bytes());
        self.payload.push(0);
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.payload.extend(bytes);
        self
    }

    /// Appends a nested record.
    pub fn child(mut self, child: RecordBuilder) -> Self {
        self.payload.extend(child.build());
        self
    }

    /// Returns the record with a header that declares its actual size.
    pub fn build(self) -> Vec<u8> {
        let size = (self.payload.len() + HEADER_LENGTH) as u32;
        self.build_with_size(size)
    }

    /// Returns the record with a header that declares `size`, which may
    /// disagree with the actual size.
    pub fn build_with_size(self, size: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.payload.len() + HEADER_LENGTH);
        bytes.extend(self.tag.to_le_bytes());
        bytes.extend(size.to_le_bytes());
        bytes.extend(self.payload);
        bytes
    }
}

/// Returns a file with a valid header followed by `records`.
pub fn file<I>(records: I) -> Vec<u8>
where
    I: IntoIterator<Item = Vec<u8>>,
{
    let mut bytes = Vec::new();
    bytes.extend(MAGIC.to_le_bytes());
    bytes.extend((FILE_HEADER_SIZE as u32).to_le_bytes());
    bytes.resize(FILE_HEADER_SIZE, 0);

    for record in records {
        bytes.extend(record);
    }

    bytes
}

/// An airport without nested records.
pub fn airport(ident: &str, lon: f64, lat: f64) -> RecordBuilder {
    RecordBuilder::new(0x003c)
        .bytes(&[0; 6])
        .position(lon, lat, 4.0)
        .position(lon, lat, 30.0)
        .f32(-13.0)
        .ident(ident)
        .ident("K6")
        .u32(0)
        .u32(1)
}

/// An asphalt runway at JFK.
pub fn runway(
    prim_number: u8,
    prim_designator: u8,
    sec_number: u8,
    sec_designator: u8,
    heading: f32,
    length: f32,
) -> RecordBuilder {
    RecordBuilder::new(0x0004)
        .u16(4)
        .u8(prim_number)
        .u8(prim_designator)
        .u8(sec_number)
        .u8(sec_designator)
        .u32(0)
        .u32(0)
        .position(-73.7786, 40.6399, 4.0)
        .f32(length)
        .f32(60.0)
        .f32(heading)
        .f32(300.0)
        .u16(0)
        .u8(0x05)
        .u8(0)
}

pub fn com(kind: u16, frequency: u32, name: &str) -> RecordBuilder {
    RecordBuilder::new(0x0012)
        .u16(kind)
        .u32(frequency)
        .string(name)
}

pub fn name(name: &str) -> RecordBuilder {
    RecordBuilder::new(0x0019).string(name)
}

/// An approach to `runway_number` with `kind` as raw approach type.
pub fn approach(runway_number: u8, kind: u8, fix: &str) -> RecordBuilder {
    RecordBuilder::new(0x0024)
        .u8(0)
        .u8(runway_number)
        .u8(kind)
        .bytes(&[0; 3])
        .fix_ref(FixType::TerminalWaypoint, fix)
        .ident("K6")
        .f32(600.0)
        .f32(44.0)
        .f32(3000.0)
}

/// A leg list record with one leg per `(leg type, fix ident)`.
///
/// An empty ident creates a leg without fix.
pub fn legs(tag: u16, legs: &[(u8, &str)]) -> RecordBuilder {
    let mut builder = RecordBuilder::new(tag).u16(legs.len() as u16);

    for &(kind, fix) in legs {
        let fix_type = if fix.is_empty() {
            FixType::None
        } else {
            FixType::TerminalWaypoint
        };

        builder = builder
            .u8(kind)
            .u8(1)
            .u8(0)
            .u8(0)
            .fix_ref(fix_type, fix)
            .ident(if fix.is_empty() { "" } else { "K6" })
            .fix_ref(FixType::None, "")
            .u32(0)
            .f32(0.0)
            .f32(0.0)
            .f32(44.0)
            .f32(0.0)
            .f32(2000.0)
            .f32(0.0);
    }

    builder
}

pub fn transition(fix: &str) -> RecordBuilder {
    RecordBuilder::new(0x002c)
        .u8(1)
        .u8(0)
        .fix_ref(FixType::Vor, fix)
        .ident("K6")
        .f32(3000.0)
        .u32(0)
        .u32(0)
        .i32(0)
        .f32(0.0)
}

/// A named waypoint followed by room for `route_count` routes.
pub fn waypoint(ident: &str, route_count: u8) -> RecordBuilder {
    RecordBuilder::new(0x0022)
        .u8(1)
        .u8(route_count)
        .u16(0)
        .lon(-73.1)
        .lat(40.8)
        .f32(-13.0)
        .ident(ident)
        .ident("K6")
        .u32(0)
}

/// A VOR or ILS with `kind` as raw type.
pub fn ils_vor(kind: u8, ident: &str, frequency: u32) -> RecordBuilder {
    RecordBuilder::new(0x0013)
        .u8(kind)
        .u8(0)
        .u16(0)
        .position(-72.8, 40.9, 50.0)
        .u32(frequency)
        .f32(74080.0)
        .f32(-13.0)
        .ident(ident)
        .ident("K6")
        .ident(if kind == 4 { "KJFK" } else { "" })
}

pub fn ndb(ident: &str, frequency: u32) -> RecordBuilder {
    RecordBuilder::new(0x0017)
        .u16(2)
        .u32(frequency)
        .position(-73.1, 40.8, 30.0)
        .f32(46300.0)
        .f32(-13.0)
        .ident(ident)
        .ident("K6")
        .u32(0)
}

pub fn marker(ident: &str) -> RecordBuilder {
    RecordBuilder::new(0x0018)
        .u8(4)
        .u8(0)
        .f32(44.0)
        .position(-73.9, 40.5, 10.0)
        .ident(ident)
        .ident("K6")
}

/// A class C boundary with one circle.
pub fn boundary(name: &str) -> RecordBuilder {
    RecordBuilder::new(0x0020)
        .u8(4)
        .u8(0x11)
        .u16(0)
        .position(-74.0, 40.5, 0.0)
        .position(-73.5, 41.0, 1219.2)
        .child(
            RecordBuilder::new(0x0023)
                .u16(2)
                .u16(3)
                .u16(0)
                .lon(-73.78)
                .lat(40.64)
                .u16(6)
                .u16(0)
                .f32(9260.0)
                .u32(0),
        )
        .child(RecordBuilder::new(0x0025).string(name))
}

/// A name list with one region, country and state, and one city and airport
/// name per `(ident, city, airport name)`.
pub fn name_list(airports: &[(&str, &str, &str)]) -> RecordBuilder {
    let count = airports.len() as u16;
    let cities: String = airports.iter().map(|(_, city, _)| format!("{city}\0")).collect();
    let names: String = airports.iter().map(|(_, _, name)| format!("{name}\0")).collect();
    let lists = [
        "North America\0",
        "United States\0",
        "New York\0",
        cities.as_str(),
        names.as_str(),
    ];

    let mut builder = RecordBuilder::new(0x0027)
        .u16(1)
        .u16(1)
        .u16(1)
        .u16(count)
        .u16(count)
        .u16(count);

    // offsets count from the record start and the fixed part is 36 byte
    let mut offset = (HEADER_LENGTH + 36) as u32;
    for list in lists {
        builder = builder.u32(offset);
        offset += list.len() as u32;
    }
    builder = builder.u32(offset);

    for list in lists {
        builder = builder.bytes(list.as_bytes());
    }

    for (index, (ident, _, _)) in airports.iter().enumerate() {
        builder = builder
            .u8(0)
            .u8(0)
            .u16(0)
            .u16(index as u16)
            .u16(index as u16)
            .ident(ident)
            .ident("K6")
            .u32(0);
    }

    builder
}
