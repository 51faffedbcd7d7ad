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

use crate::{Error, Fields, FromRecord, Ident, Issues, RawRecord};

const ICAO_NAME_LENGTH: usize = 20;

/// The region, country, state, city and airport names of the airports in a
/// file.
///
/// The names are stored once in string lists, and every ICAO entry refers to
/// its names by list index.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NameList {
    pub regions: Vec<String>,
    pub countries: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub airports: Vec<String>,
    pub icaos: Vec<IcaoName>,
}

/// The name indices of one airport.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IcaoName {
    pub region_index: u8,
    pub country_index: u8,
    pub state_index: u16,
    pub city_index: u16,
    pub airport_index: u16,
    pub ident: Ident,
    pub region: Ident,
}

/// The resolved names of one airport.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AirportNames {
    pub ident: String,
    pub region: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub name: String,
}

impl NameList {
    /// Resolves the names of every ICAO entry.
    ///
    /// Indices beyond their list resolve to an empty name.
    pub fn names(&self) -> impl Iterator<Item = AirportNames> + '_ {
        fn lookup(list: &[String], index: usize) -> String {
            list.get(index).cloned().unwrap_or_default()
        }

        self.icaos.iter().map(|icao| AirportNames {
            ident: icao.ident.to_string(),
            region: lookup(&self.regions, icao.region_index as usize),
            country: lookup(&self.countries, icao.country_index as usize),
            state: lookup(&self.states, icao.state_index as usize),
            city: lookup(&self.cities, icao.city_index as usize),
            name: lookup(&self.airports, icao.airport_index as usize),
        })
    }
}

/// Reads `count` NUL-terminated strings at `offset` from the record start.
///
/// The last string may run to the end of the record without a NUL.
fn string_list(raw: &RawRecord<'_>, offset: u32, count: u16) -> Result<Vec<String>, Error> {
    let count = count as usize;
    if count == 0 {
        return Ok(Vec::new());
    }

    let bytes = raw.bytes();
    let offset = offset as usize;

    if offset >= bytes.len() {
        return Err(Error::OutOfBounds {
            offset: raw.offset + offset,
            needed: count,
            available: 0,
        });
    }

    // a string ends at its NUL or at the end of the record
    let mut rest = &bytes[offset..];
    let mut strings = Vec::with_capacity(count.min(rest.len()));
    while strings.len() < count && !rest.is_empty() {
        let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        strings.push(String::from_utf8_lossy(&rest[..end]).trim().to_string());
        rest = rest.get(end + 1..).unwrap_or_default();
    }

    if strings.len() < count {
        return Err(Error::OutOfBounds {
            offset: raw.offset + offset,
            needed: count,
            available: strings.len(),
        });
    }

    Ok(strings)
}

impl IcaoName {
    fn read(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let name = Self {
            region_index: fields.next()?,
            country_index: fields.next()?,
            state_index: fields.next()?,
            city_index: fields.next()?,
            airport_index: fields.next()?,
            ident: fields.next()?,
            region: fields.next()?,
        };
        fields.skip(4)?;
        Ok(name)
    }
}

impl FromRecord for NameList {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let mut counts = [0u16; 6];
        for count in counts.iter_mut() {
            *count = fields.next()?;
        }

        let mut offsets = [0u32; 6];
        for offset in offsets.iter_mut() {
            *offset = fields.next()?;
        }

        let icaos = if counts[5] == 0 {
            Vec::new()
        } else {
            let start = (offsets[5] as usize).saturating_sub(crate::HEADER_LENGTH);
            let payload = raw.payload();
            if start > payload.len() {
                return Err(Error::OutOfBounds {
                    offset: raw.offset + offsets[5] as usize,
                    needed: counts[5] as usize * ICAO_NAME_LENGTH,
                    available: 0,
                });
            }

            Fields::new(&payload[start..], raw.payload_offset() + start).entries(
                counts[5] as usize,
                ICAO_NAME_LENGTH,
                IcaoName::read,
            )?
        };

        Ok(Self {
            regions: string_list(raw, offsets[0], counts[0])?,
            countries: string_list(raw, offsets[1], counts[1])?,
            states: string_list(raw, offsets[2], counts[2])?,
            cities: string_list(raw, offsets[3], counts[3])?,
            airports: string_list(raw, offsets[4], counts[4])?,
            icaos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;
    use crate::{Cursor, HEADER_LENGTH};

    fn name_list() -> Vec<u8> {
        // string lists and ICAO entries follow the 36 byte fixed part
        let strings: [&[u8]; 5] = [
            b"North America\0",
            b"United States\0",
            b"New York\0",
            b"New York\0Jamaica\0",
            b"Kennedy Intl\0La Guardia\0",
        ];

        let mut offset = (HEADER_LENGTH + 36) as u32;
        let mut builder = RecordBuilder::new(0x27)
            .u16(1)
            .u16(1)
            .u16(1)
            .u16(2)
            .u16(2)
            .u16(2);

        let mut offsets = Vec::new();
        for s in strings {
            offsets.push(offset);
            offset += s.len() as u32;
        }
        offsets.push(offset);

        for o in offsets {
            builder = builder.u32(o);
        }
        for s in strings {
            builder = builder.bytes(s);
        }

        builder
            .u8(0)
            .u8(0)
            .u16(0)
            .u16(1)
            .u16(0)
            .ident("KJFK")
            .ident("K6")
            .u32(0)
            .u8(0)
            .u8(0)
            .u16(0)
            .u16(0)
            .u16(1)
            .ident("KLGA")
            .ident("K6")
            .u32(0)
            .build()
    }

    #[test]
    fn resolves_airport_names() {
        let bytes = name_list();
        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();
        let list = NameList::from_record(&raw, &mut Issues::new()).expect("names should decode");

        assert_eq!(list.cities, vec!["New York", "Jamaica"]);

        let names: Vec<_> = list.names().collect();
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].ident, "KJFK");
        assert_eq!(names[0].name, "Kennedy Intl");
        assert_eq!(names[0].city, "Jamaica");
        assert_eq!(names[0].country, "United States");
        assert_eq!(names[1].name, "La Guardia");
        assert_eq!(names[1].city, "New York");
    }

    #[test]
    fn list_offset_beyond_record_fails() {
        let bytes = RecordBuilder::new(0x27)
            .u16(1)
            .bytes(&[0; 10])
            .u32(500)
            .bytes(&[0; 20])
            .build();
        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();

        assert!(matches!(
            NameList::from_record(&raw, &mut Issues::new()),
            Err(Error::OutOfBounds { .. })
        ));
    }

    fn airport_list(count: u16, strings: &[u8]) -> Vec<u8> {
        RecordBuilder::new(0x27)
            .u16(0)
            .u16(0)
            .u16(0)
            .u16(0)
            .u16(count)
            .u16(0)
            .bytes(&[0; 16])
            .u32((HEADER_LENGTH + 36) as u32)
            .u32(0)
            .bytes(strings)
            .build()
    }

    #[test]
    fn list_with_fewer_strings_fails() {
        let bytes = airport_list(2, b"Kennedy Intl\0");
        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();

        assert!(matches!(
            NameList::from_record(&raw, &mut Issues::new()),
            Err(Error::OutOfBounds {
                needed: 2,
                available: 1,
                ..
            })
        ));
    }

    #[test]
    fn last_string_may_end_with_record() {
        let bytes = airport_list(2, b"Kennedy Intl\0La Guardia");
        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();
        let list = NameList::from_record(&raw, &mut Issues::new()).expect("names should decode");

        assert_eq!(list.airports, vec!["Kennedy Intl", "La Guardia"]);
        assert!(list.icaos.is_empty());
    }
}
