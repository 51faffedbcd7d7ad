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

use crate::codes::MarkerType;
use crate::{Error, FromRecord, Ident, Issues, Position, RawRecord};

/// A marker beacon.
#[derive(Clone, PartialEq, Debug)]
pub struct Marker {
    pub kind: MarkerType,
    pub heading: f32,
    pub position: Position,
    pub ident: Ident,
    pub region: Ident,
}

impl FromRecord for Marker {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let kind = fields.next()?;
        fields.skip(1)?;

        Ok(Self {
            kind,
            heading: fields.next()?,
            position: fields.next()?,
            ident: fields.next()?,
            region: fields.next()?,
        })
    }
}
