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

use geo::Point;

use crate::codes::FixType;

/// A fixed-length field type.
///
/// This trait is implemented by all BGL fields. The [`Fields`] reader checks
/// that at least [`LENGTH`] bytes are left in the record window before it
/// calls [`from_bytes`], so implementations can index without checks.
///
/// [`Fields`]: crate::Fields
/// [`LENGTH`]: FixedField::LENGTH
/// [`from_bytes`]: FixedField::from_bytes
pub trait FixedField: Sized {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;

    /// Decodes the field from the first [`LENGTH`](FixedField::LENGTH) bytes.
    fn from_bytes(bytes: &[u8]) -> Self;
}

macro_rules! le_field {
    ($($t:ty),+) => {
        $(
            impl FixedField for $t {
                const LENGTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn from_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(&bytes[..Self::LENGTH]);
                    <$t>::from_le_bytes(buf)
                }
            }
        )+
    };
}

le_field!(u8, u16, u32, i32, f32);

impl<const N: usize> FixedField for [u8; N] {
    const LENGTH: usize = N;

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&bytes[..N]);
        buf
    }
}

/////////////////////////////////////////////////////////////////////////////
// Coordinates
/////////////////////////////////////////////////////////////////////////////

const LON_SCALE: f64 = 360.0 / (3.0 * 268_435_456.0);
const LAT_SCALE: f64 = 180.0 / (2.0 * 268_435_456.0);

/// Returns the longitude in degrees of a raw BGL longitude.
#[inline]
pub fn lon_from_raw(raw: u32) -> f64 {
    raw as f64 * LON_SCALE - 180.0
}

/// Returns the latitude in degrees of a raw BGL latitude.
#[inline]
pub fn lat_from_raw(raw: u32) -> f64 {
    90.0 - raw as f64 * LAT_SCALE
}

/// Inverse of [`lon_from_raw`].
pub fn lon_to_raw(lon: f64) -> u32 {
    ((lon + 180.0) / LON_SCALE).round() as u32
}

/// Inverse of [`lat_from_raw`].
pub fn lat_to_raw(lat: f64) -> u32 {
    ((90.0 - lat) / LAT_SCALE).round() as u32
}

/// A longitude and latitude pair decoded into a [`Point`] with `x` as
/// longitude and `y` as latitude.
impl FixedField for Point<f64> {
    const LENGTH: usize = 8;

    fn from_bytes(bytes: &[u8]) -> Self {
        let lon = lon_from_raw(u32::from_bytes(bytes));
        let lat = lat_from_raw(u32::from_bytes(&bytes[4..]));
        Point::new(lon, lat)
    }
}

/// A position with its altitude in meters.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Position {
    pub point: Point<f64>,
    pub altitude: f64,
}

impl Position {
    pub fn new(point: Point<f64>, altitude: f64) -> Self {
        Self { point, altitude }
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.point.y()
    }
}

impl FixedField for Position {
    const LENGTH: usize = 12;

    fn from_bytes(bytes: &[u8]) -> Self {
        let point = Point::from_bytes(bytes);
        let altitude = i32::from_bytes(&bytes[8..]) as f64 / 1000.0;
        Self { point, altitude }
    }
}

/// A heading, pitch or bank angle stored as 1/65536 of a full turn.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Turns(pub f32);

impl FixedField for Turns {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self(u16::from_bytes(bytes) as f32 * 360.0 / 65536.0)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Identifiers
/////////////////////////////////////////////////////////////////////////////

/// Decodes base-38 packed text into an identifier.
///
/// Digit `0` is a space, `2..=11` are `0-9` and `12..=37` are `A-Z`. Other
/// digits can't appear in valid data and are dropped.
pub fn decode_ident(mut value: u32) -> String {
    let mut chars = Vec::new();

    while value > 0 {
        let digit = (value % 38) as u8;
        value /= 38;

        match digit {
            0 => chars.push(' '),
            2..=11 => chars.push((b'0' + digit - 2) as char),
            12..=37 => chars.push((b'A' + digit - 12) as char),
            _ => {}
        }
    }

    chars.iter().rev().collect::<String>().trim().to_string()
}

/// Encodes an identifier into base-38 packed text.
///
/// Characters outside `0-9`, `A-Z` and space are encoded as space.
pub fn encode_ident(ident: &str) -> u32 {
    ident.bytes().fold(0u32, |value, c| {
        let digit = match c.to_ascii_uppercase() {
            c @ b'0'..=b'9' => (c - b'0' + 2) as u32,
            c @ b'A'..=b'Z' => (c - b'A' + 12) as u32,
            _ => 0,
        };
        value.wrapping_mul(38).wrapping_add(digit)
    })
}

/// An identifier stored as packed text in 4 bytes.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Ident(String);

impl Ident {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FixedField for Ident {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self(decode_ident(u32::from_bytes(bytes)))
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Ident> for String {
    fn from(ident: Ident) -> Self {
        ident.0
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to a fix with the fix type in the low 5 bits and the packed
/// identifier in the upper 27 bits.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FixRef {
    pub kind: FixType,
    pub ident: Ident,
}

impl FixRef {
    /// Returns `true` if the reference points to no fix.
    pub fn is_none(&self) -> bool {
        self.kind == FixType::None && self.ident.is_empty()
    }
}

impl FixedField for FixRef {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        let raw = u32::from_bytes(bytes);
        Self {
            kind: FixType::from((raw & 0x1f) as u8),
            ident: Ident(decode_ident(raw >> 5)),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Strings
/////////////////////////////////////////////////////////////////////////////

/// Decodes a NUL-terminated or NUL-padded string.
///
/// Invalid UTF-8 is replaced and surrounding whitespace is removed.
pub fn c_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}
