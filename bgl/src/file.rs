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

use crate::record::{Cursor, RawRecord};
use crate::{Error, FixedField};

/// The magic number at the start of every BGL file.
pub const MAGIC: u32 = 0x19920201;

/// The smallest valid header: magic and header size.
pub const MIN_HEADER_SIZE: usize = 8;

/// A BGL file with a validated header.
///
/// # Examples
///
/// ```
/// use bgl::{BglFile, Issues, Record};
///
/// # fn main() -> Result<(), bgl::Error> {
/// # let data = [0x01, 0x02, 0x92, 0x19, 0x08, 0, 0, 0];
/// let file = BglFile::parse(&data)?;
/// let mut issues = Issues::new();
///
/// for (offset, raw) in file.records() {
///     match raw.and_then(|raw| Record::decode(&raw, &mut issues)) {
///         Ok(Record::Airport(airport)) => println!("{} at {offset:#x}", airport.ident),
///         Ok(_) => {}
///         Err(e) => eprintln!("{e}"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BglFile<'a> {
    bytes: &'a [u8],
    header_size: usize,
}

impl<'a> BglFile<'a> {
    /// Validates the header of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if the magic number doesn't match or
    /// the header size doesn't fit the file.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, Error> {
        if bytes.len() < MIN_HEADER_SIZE {
            return Err(Error::InvalidHeader {
                magic: 0,
                header_size: bytes.len(),
            });
        }

        let magic = u32::from_bytes(bytes);
        let header_size = u32::from_bytes(&bytes[4..]) as usize;

        if magic != MAGIC || header_size < MIN_HEADER_SIZE || header_size > bytes.len() {
            return Err(Error::InvalidHeader { magic, header_size });
        }

        Ok(Self { bytes, header_size })
    }

    /// The number of bytes before the first record.
    pub fn header_size(&self) -> usize {
        self.header_size
    }

    /// The total file size.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.len() == self.header_size
    }

    /// Returns an iterator over the top-level records with their offset.
    pub fn records(&self) -> Records<'a> {
        Records {
            cursor: Cursor::new(&self.bytes[self.header_size..], self.header_size),
        }
    }
}

/// Iterator over top-level records.
///
/// Yields the absolute offset with each record. A truncated record is
/// yielded as error and ends the iteration.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, Result<RawRecord<'a>, Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor.offset();
        self.cursor.next_record().map(|result| (offset, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(header_size: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(MAGIC.to_le_bytes());
        bytes.extend(header_size.to_le_bytes());
        bytes.resize(header_size as usize, 0);
        bytes
    }

    #[test]
    fn parses_header() {
        let mut bytes = header(16);
        bytes.extend(0x22u16.to_le_bytes());
        bytes.extend(6u32.to_le_bytes());

        let file = BglFile::parse(&bytes).expect("header should be valid");
        assert_eq!(file.header_size(), 16);
        assert!(!file.is_empty());

        let records: Vec<_> = file.records().collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, 16);
        assert_eq!(records[0].1.clone().map(|r| r.tag), Ok(0x22));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = header(8);
        bytes[0] = 0;
        assert!(matches!(
            BglFile::parse(&bytes),
            Err(Error::InvalidHeader { header_size: 8, .. })
        ));
    }

    #[test]
    fn rejects_header_beyond_file() {
        let mut bytes = header(8);
        bytes[4] = 200;
        assert_eq!(
            BglFile::parse(&bytes).err(),
            Some(Error::InvalidHeader {
                magic: MAGIC,
                header_size: 200
            })
        );
        assert!(BglFile::parse(&[1, 2, 3]).is_err());
    }
}
