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

use crate::{Error, FixedField, Issues};

/// The length of a record header: tag `u16` and size `u32`.
pub const HEADER_LENGTH: usize = 6;

/// An entity type which is decoded from a record.
pub trait FromRecord: Sized {
    /// Decodes the entity from its record, including nested records.
    ///
    /// Problems with nested records that don't invalidate the entity are
    /// reported to `issues` and the nested record is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed fields of the record can't be read.
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error>;
}

/// A record whose size was validated against its enclosing window.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// The tag in the scope of the enclosing record.
    pub tag: u16,
    /// Absolute offset of the record header in the file.
    pub offset: usize,
    bytes: &'a [u8],
}

impl<'a> RawRecord<'a> {
    /// The declared size including the header.
    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// All bytes of the record including the header.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The bytes following the header.
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[HEADER_LENGTH..]
    }

    /// Absolute offset of the first payload byte.
    #[inline]
    pub fn payload_offset(&self) -> usize {
        self.offset + HEADER_LENGTH
    }

    /// Returns a field reader over the payload.
    pub fn fields(&self) -> Fields<'a> {
        Fields::new(self.payload(), self.payload_offset())
    }
}

impl fmt::Debug for RawRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRecord")
            .field("tag", &format_args!("{:#06x}", self.tag))
            .field("offset", &format_args!("{:#x}", self.offset))
            .field("size", &self.size())
            .finish()
    }
}

/// Reads consecutive records from a byte window.
///
/// The cursor never yields a record which extends beyond its window. If a
/// header declares less than [`HEADER_LENGTH`] or more bytes than are left,
/// the cursor returns [`Error::Truncated`] once and stops, since there is no
/// reliable boundary for the next sibling.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    window: &'a [u8],
    base: usize,
    pos: usize,
    done: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `window` which starts at `base_offset` in the
    /// file.
    pub fn new(window: &'a [u8], base_offset: usize) -> Self {
        Self {
            window,
            base: base_offset,
            pos: 0,
            done: false,
        }
    }

    /// Creates a cursor over the nested records of `raw`, which follow the
    /// `fixed_len` bytes of its fixed part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the payload is shorter than the
    /// fixed part.
    pub fn descend(raw: &RawRecord<'a>, fixed_len: usize) -> Result<Self, Error> {
        let payload = raw.payload();

        if fixed_len > payload.len() {
            return Err(Error::OutOfBounds {
                offset: raw.payload_offset(),
                needed: fixed_len,
                available: payload.len(),
            });
        }

        Ok(Self::new(
            &payload[fixed_len..],
            raw.payload_offset() + fixed_len,
        ))
    }

    /// Absolute offset of the next record.
    #[inline]
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Returns `true` if the window is exhausted or the cursor stopped.
    pub fn is_done(&self) -> bool {
        self.done || self.pos >= self.window.len()
    }

    /// Reads the next record header and returns the record.
    ///
    /// Returns `None` once the window is exhausted or after a truncated
    /// record was returned.
    pub fn next_record(&mut self) -> Option<Result<RawRecord<'a>, Error>> {
        if self.is_done() {
            return None;
        }

        let offset = self.offset();
        let rest = &self.window[self.pos..];

        if rest.len() < HEADER_LENGTH {
            self.done = true;
            let tag = if rest.len() >= 2 { u16::from_bytes(rest) } else { 0 };
            return Some(Err(Error::Truncated {
                offset,
                tag,
                declared: HEADER_LENGTH,
                available: rest.len(),
            }));
        }

        let tag = u16::from_bytes(rest);
        let size = u32::from_bytes(&rest[2..]) as usize;

        if size < HEADER_LENGTH || size > rest.len() {
            self.done = true;
            return Some(Err(Error::Truncated {
                offset,
                tag,
                declared: size,
                available: rest.len(),
            }));
        }

        self.pos += size;

        Some(Ok(RawRecord {
            tag,
            offset,
            bytes: &rest[..size],
        }))
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = Result<RawRecord<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// A reader of fixed-length fields within a bounded window.
pub struct Fields<'a> {
    bytes: &'a [u8],
    base: usize,
    index: usize,
}

impl<'a> Fields<'a> {
    /// Creates a reader over `bytes` which start at `base_offset` in the file.
    pub fn new(bytes: &'a [u8], base_offset: usize) -> Self {
        Self {
            bytes,
            base: base_offset,
            index: 0,
        }
    }

    /// Absolute offset of the next field.
    #[inline]
    pub fn offset(&self) -> usize {
        self.base + self.index
    }

    /// Bytes left in the window.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.index)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let available = self.remaining();

        if n > available {
            return Err(Error::OutOfBounds {
                offset: self.offset(),
                needed: n,
                available,
            });
        }

        let bytes = &self.bytes[self.index..self.index + n];
        self.index += n;
        Ok(bytes)
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the field exceeds the window.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: FixedField,
    {
        self.take(F::LENGTH).map(F::from_bytes)
    }

    /// Skips `n` bytes, advancing the position without parsing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than `n` bytes are left.
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<&mut Self, Error> {
        self.take(n)?;
        Ok(self)
    }

    /// Reads `n` raw bytes.
    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
        self.take(n)
    }

    /// Splits off a reader over the next `n` bytes, e.g. for one list entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than `n` bytes are left.
    pub fn split(&mut self, n: usize) -> Result<Fields<'a>, Error> {
        let base = self.offset();
        self.take(n).map(|bytes| Fields::new(bytes, base))
    }

    /// Consumes all remaining bytes.
    pub fn rest(&mut self) -> &'a [u8] {
        let rest = &self.bytes[self.index.min(self.bytes.len())..];
        self.index = self.bytes.len();
        rest
    }

    /// Reads `count` entries of `entry_len` bytes each with `read`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the entries exceed the window, or any
    /// error returned by `read`.
    pub fn entries<T, F>(&mut self, count: usize, entry_len: usize, mut read: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(&mut Fields<'a>) -> Result<T, Error>,
    {
        let needed = count.saturating_mul(entry_len);
        if needed > self.remaining() {
            return Err(Error::OutOfBounds {
                offset: self.offset(),
                needed,
                available: self.remaining(),
            });
        }

        (0..count)
            .map(|_| {
                let mut entry = self.split(entry_len)?;
                read(&mut entry)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: u16, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(tag.to_le_bytes());
        bytes.extend(((payload.len() + HEADER_LENGTH) as u32).to_le_bytes());
        bytes.extend(payload);
        bytes
    }

    #[test]
    fn reads_consecutive_records() {
        let mut window = record(0x3c, &[1, 2, 3]);
        window.extend(record(0x22, &[]));

        let mut cursor = Cursor::new(&window, 100);
        let first = cursor.next_record().unwrap().expect("record should be read");
        assert_eq!(first.tag, 0x3c);
        assert_eq!(first.offset, 100);
        assert_eq!(first.payload(), &[1, 2, 3]);

        let second = cursor.next_record().unwrap().expect("record should be read");
        assert_eq!(second.tag, 0x22);
        assert_eq!(second.offset, 109);
        assert!(second.payload().is_empty());

        assert!(cursor.next_record().is_none());
    }

    #[test]
    fn stops_after_truncated_record() {
        let mut window = record(0x3c, &[1, 2, 3]);
        // declares 100 byte but only 6 follow
        window.extend(0x22u16.to_le_bytes());
        window.extend(100u32.to_le_bytes());

        let results: Vec<_> = Cursor::new(&window, 0).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(Error::Truncated {
                offset: 9,
                tag: 0x22,
                declared: 100,
                available: 6
            })
        );
    }

    #[test]
    fn rejects_size_below_header() {
        let mut window = Vec::new();
        window.extend(0x22u16.to_le_bytes());
        window.extend(2u32.to_le_bytes());

        let mut cursor = Cursor::new(&window, 0);
        assert!(matches!(
            cursor.next_record(),
            Some(Err(Error::Truncated { declared: 2, .. }))
        ));
        assert!(cursor.next_record().is_none());
    }

    #[test]
    fn descend_is_bounded_by_payload() {
        let inner = record(0x19, b"NAME");
        let mut payload = vec![0xaa, 0xbb];
        payload.extend(&inner);
        let outer = record(0x3c, &payload);
        // bytes after the outer record must not be visible to the children
        let mut window = outer.clone();
        window.extend(record(0x19, b"OUTSIDE"));

        let raw = Cursor::new(&window, 0)
            .next_record()
            .unwrap()
            .expect("record should be read");
        let children: Vec<_> = Cursor::descend(&raw, 2)
            .expect("fixed part should fit")
            .collect::<Result<_, _>>()
            .expect("children should be read");

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].offset, 8);
        assert_eq!(children[0].payload(), b"NAME");
    }

    #[test]
    fn descend_into_short_record_fails() {
        let window = record(0x3c, &[0; 4]);
        let raw = Cursor::new(&window, 0).next_record().unwrap().unwrap();
        assert_eq!(
            Cursor::descend(&raw, 50).err(),
            Some(Error::OutOfBounds {
                offset: 6,
                needed: 50,
                available: 4
            })
        );
    }

    #[test]
    fn fields_stay_in_window() {
        let bytes = [1, 0, 2, 0, 0, 0, 9];
        let mut fields = Fields::new(&bytes, 10);

        assert_eq!(fields.next::<u16>(), Ok(1));
        assert_eq!(fields.next::<u32>(), Ok(2));
        assert_eq!(
            fields.next::<u32>(),
            Err(Error::OutOfBounds {
                offset: 16,
                needed: 4,
                available: 1
            })
        );
        assert_eq!(fields.next::<u8>(), Ok(9));
        assert_eq!(fields.remaining(), 0);
    }

    #[test]
    fn reads_entries() {
        let bytes = [1, 0, 2, 0, 3, 0];
        let mut fields = Fields::new(&bytes, 0);

        let entries = fields
            .entries(3, 2, |f| f.next::<u16>())
            .expect("entries should be read");
        assert_eq!(entries, vec![1, 2, 3]);

        let mut fields = Fields::new(&bytes, 0);
        assert!(fields.entries(4, 2, |f| f.next::<u16>()).is_err());
    }
}
