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

use crate::{Error, FromRecord, Ident, Issues, Position, RawRecord};

/// The short form of an airport used by the simulator's facility lists.
#[derive(Clone, PartialEq, Debug)]
pub struct AirportSummary {
    pub ident: Ident,
    pub region: Ident,
    pub position: Position,
    pub has_com: bool,
    pub has_paved_runway: bool,
    pub has_ils: bool,
    pub longest_runway_length: f32,
    pub longest_runway_heading: f32,
}

impl FromRecord for AirportSummary {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let ident = fields.next()?;
        let region = fields.next()?;
        let position = fields.next()?;
        let has_com: u8 = fields.next()?;
        let has_paved_runway: u8 = fields.next()?;
        let has_ils: u8 = fields.next()?;
        fields.skip(1)?;

        Ok(Self {
            ident,
            region,
            position,
            has_com: has_com != 0,
            has_paved_runway: has_paved_runway != 0,
            has_ils: has_ils != 0,
            longest_runway_length: fields.next()?,
            longest_runway_heading: fields.next()?,
        })
    }
}
