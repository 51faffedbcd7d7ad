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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The file doesn't start with a BGL header.
    InvalidHeader { magic: u32, header_size: usize },
    /// A record declares more bytes than its window holds, or less than its
    /// own header.
    Truncated {
        offset: usize,
        tag: u16,
        declared: usize,
        available: usize,
    },
    /// A field read would leave the record's window.
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl Error {
    /// Absolute offset of the failing record or field in the file.
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidHeader { .. } => 0,
            Self::Truncated { offset, .. } | Self::OutOfBounds { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeader { magic, header_size } => {
                write!(
                    f,
                    "not a BGL file (magic {magic:#010x}, header size {header_size})"
                )
            }
            Self::Truncated {
                offset,
                tag,
                declared,
                available,
            } => {
                write!(
                    f,
                    "record {tag:#06x} at {offset:#x} declares {declared} byte but only {available} are available"
                )
            }
            Self::OutOfBounds {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "read of {needed} byte at {offset:#x} exceeds the record window ({available} byte left)"
                )
            }
        }
    }
}

impl error::Error for Error {}
