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

use geo::{Destination, Geodesic, Point};

use super::{child, children, unknown_child};
use crate::codes::{ApproachLightSystem, LightIntensity, RunwayDesignator, Surface, VasiType};
use crate::record_type::{RunwayRecord, Scope};
use crate::{runway_name, Error, FromRecord, Ident, Issues, Position, RawRecord};

const RUNWAY_LENGTH: usize = 46;

const PRIMARY_CLOSED: u16 = 1 << 9;
const SECONDARY_CLOSED: u16 = 1 << 10;

/// A runway with both of its ends.
///
/// The position is the center of the runway. The ends are located half the
/// runway length from the center along the runway heading.
#[derive(Clone, PartialEq, Debug)]
pub struct Runway {
    pub surface: Surface,
    pub position: Position,
    /// Length in meters.
    pub length: f32,
    /// Width in meters.
    pub width: f32,
    /// True heading of the primary end.
    pub heading: f32,
    pub pattern_altitude: f32,
    pub marking_flags: u16,
    pub light_flags: u8,
    pub pattern_flags: u8,
    pub primary: RunwayEnd,
    pub secondary: RunwayEnd,
}

impl Runway {
    pub fn edge_lights(&self) -> LightIntensity {
        LightIntensity::from(self.light_flags & 0x03)
    }

    pub fn center_lights(&self) -> LightIntensity {
        LightIntensity::from((self.light_flags >> 2) & 0x03)
    }

    pub fn center_red(&self) -> bool {
        self.light_flags & 0x10 != 0
    }

    /// The runway name, e.g. `04L/22R`.
    pub fn name(&self) -> String {
        format!("{}/{}", self.primary.name(), self.secondary.name())
    }
}

/// One end of a runway.
#[derive(Clone, PartialEq, Debug)]
pub struct RunwayEnd {
    pub number: u8,
    pub designator: RunwayDesignator,
    pub ils_ident: Ident,
    pub heading: f32,
    /// Threshold position without displacement.
    pub position: Point<f64>,
    pub closed: bool,
    pub takeoff: bool,
    pub landing: bool,
    pub right_pattern: bool,
    pub offset_threshold: Option<RunwayExtension>,
    pub blast_pad: Option<RunwayExtension>,
    pub overrun: Option<RunwayExtension>,
    pub left_vasi: Option<Vasi>,
    pub right_vasi: Option<Vasi>,
    pub approach_lights: Option<ApproachLights>,
}

impl RunwayEnd {
    fn new(
        number: u8,
        designator: RunwayDesignator,
        ils_ident: Ident,
        heading: f32,
        position: Point<f64>,
        pattern_flags: u8,
    ) -> Self {
        Self {
            number,
            designator,
            ils_ident,
            heading,
            position,
            closed: false,
            takeoff: pattern_flags & 0x01 == 0,
            landing: pattern_flags & 0x02 == 0,
            right_pattern: pattern_flags & 0x04 != 0,
            offset_threshold: None,
            blast_pad: None,
            overrun: None,
            left_vasi: None,
            right_vasi: None,
            approach_lights: None,
        }
    }

    pub fn name(&self) -> String {
        runway_name(self.number, self.designator)
    }
}

impl FromRecord for Runway {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let surface = fields.next()?;
        let prim_number = fields.next()?;
        let prim_designator = fields.next()?;
        let sec_number = fields.next()?;
        let sec_designator = fields.next()?;
        let prim_ils = fields.next()?;
        let sec_ils = fields.next()?;
        let position: Position = fields.next()?;
        let length: f32 = fields.next()?;
        let width = fields.next()?;
        let heading: f32 = fields.next()?;
        let pattern_altitude = fields.next()?;
        let marking_flags: u16 = fields.next()?;
        let light_flags = fields.next()?;
        let pattern_flags: u8 = fields.next()?;

        let sec_heading = (heading + 180.0) % 360.0;
        let half = length as f64 / 2.0;

        let mut primary = RunwayEnd::new(
            prim_number,
            prim_designator,
            prim_ils,
            heading,
            Geodesic.destination(position.point, sec_heading as f64, half),
            pattern_flags,
        );
        primary.closed = marking_flags & PRIMARY_CLOSED != 0;

        let mut secondary = RunwayEnd::new(
            sec_number,
            sec_designator,
            sec_ils,
            sec_heading,
            Geodesic.destination(position.point, heading as f64, half),
            pattern_flags >> 3,
        );
        secondary.closed = marking_flags & SECONDARY_CLOSED != 0;

        const SCOPE: Scope = Scope::Runway;

        for rec in children(raw, RUNWAY_LENGTH, SCOPE, issues)? {
            let Some(tag) = RunwayRecord::from_tag(rec.tag) else {
                unknown_child(&rec, SCOPE, issues);
                continue;
            };

            match tag {
                RunwayRecord::OffsetThresholdPrim => {
                    primary.offset_threshold = child(&rec, SCOPE, issues)
                }
                RunwayRecord::OffsetThresholdSec => {
                    secondary.offset_threshold = child(&rec, SCOPE, issues)
                }
                RunwayRecord::BlastPadPrim => primary.blast_pad = child(&rec, SCOPE, issues),
                RunwayRecord::BlastPadSec => secondary.blast_pad = child(&rec, SCOPE, issues),
                RunwayRecord::OverrunPrim => primary.overrun = child(&rec, SCOPE, issues),
                RunwayRecord::OverrunSec => secondary.overrun = child(&rec, SCOPE, issues),
                RunwayRecord::VasiPrimLeft => primary.left_vasi = child(&rec, SCOPE, issues),
                RunwayRecord::VasiPrimRight => primary.right_vasi = child(&rec, SCOPE, issues),
                RunwayRecord::VasiSecLeft => secondary.left_vasi = child(&rec, SCOPE, issues),
                RunwayRecord::VasiSecRight => secondary.right_vasi = child(&rec, SCOPE, issues),
                RunwayRecord::AppLightsPrim => {
                    primary.approach_lights = child(&rec, SCOPE, issues)
                }
                RunwayRecord::AppLightsSec => {
                    secondary.approach_lights = child(&rec, SCOPE, issues)
                }
            }
        }

        Ok(Self {
            surface,
            position,
            length,
            width,
            heading,
            pattern_altitude,
            marking_flags,
            light_flags,
            pattern_flags,
            primary,
            secondary,
        })
    }
}

/// An offset threshold, blast pad or overrun of a runway end.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RunwayExtension {
    pub surface: Surface,
    pub flags: u16,
    pub length: f32,
    pub width: f32,
}

impl FromRecord for RunwayExtension {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        Ok(Self {
            surface: fields.next()?,
            flags: fields.next()?,
            length: fields.next()?,
            width: fields.next()?,
        })
    }
}

/// Visual approach slope indicator on one side of a runway end.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vasi {
    pub kind: VasiType,
    pub bias_x: f32,
    pub bias_z: f32,
    pub spacing: f32,
    pub pitch: f32,
}

impl FromRecord for Vasi {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        Ok(Self {
            kind: fields.next()?,
            bias_x: fields.next()?,
            bias_z: fields.next()?,
            spacing: fields.next()?,
            pitch: fields.next()?,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ApproachLights {
    pub system: ApproachLightSystem,
    pub end_lights: bool,
    pub reils: bool,
    pub touchdown: bool,
    pub strobes: u8,
}

impl FromRecord for ApproachLights {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let flags: u8 = fields.next()?;

        Ok(Self {
            system: ApproachLightSystem::from(flags & 0x1f),
            end_lights: flags & 0x20 != 0,
            reils: flags & 0x40 != 0,
            touchdown: flags & 0x80 != 0,
            strobes: fields.next()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use geo::{Distance, Geodesic};

    use super::*;
    use crate::test_support::{runway, RecordBuilder};
    use crate::{Cursor, IssueKind};

    fn decode(builder: RecordBuilder) -> (Runway, Issues) {
        let bytes = builder.build();
        let raw = Cursor::new(&bytes, 0)
            .next_record()
            .unwrap()
            .expect("record should be read");
        let mut issues = Issues::new();
        let rwy = Runway::from_record(&raw, &mut issues).expect("runway should decode");
        (rwy, issues)
    }

    #[test]
    fn decodes_both_ends() {
        let (rwy, issues) = decode(runway(4, 1, 22, 2, 44.0, 3460.0));

        assert!(issues.is_empty());
        assert_eq!(rwy.name(), "04L/22R");
        assert_eq!(rwy.surface, Surface::Asphalt);
        assert_eq!(rwy.primary.heading, 44.0);
        assert_eq!(rwy.secondary.heading, 224.0);

        let length = Geodesic.distance(rwy.primary.position, rwy.secondary.position);
        assert!((length - 3460.0).abs() < 0.5, "length was {length}");
        // the primary threshold is south west of the secondary
        assert!(rwy.primary.position.y() < rwy.secondary.position.y());
    }

    #[test]
    fn secondary_heading_wraps() {
        let (rwy, _) = decode(runway(27, 0, 9, 0, 270.0, 2000.0));
        assert_eq!(rwy.secondary.heading, 90.0);
    }

    #[test]
    fn decodes_end_details() {
        let builder = runway(4, 1, 22, 2, 44.0, 3460.0)
            .child(RecordBuilder::new(0x0b).u16(8).f32(-20.0).f32(300.0).f32(9.0).f32(3.0))
            .child(RecordBuilder::new(0x10).u8(0x43).u8(2))
            .child(RecordBuilder::new(0x09).u16(4).u16(0).f32(60.0).f32(45.0));

        let (rwy, issues) = decode(builder);

        assert!(issues.is_empty());
        let vasi = rwy.primary.left_vasi.expect("primary end should have a VASI");
        assert_eq!(vasi.kind, VasiType::Papi4);
        assert_eq!(vasi.pitch, 3.0);

        let lights = rwy
            .secondary
            .approach_lights
            .expect("secondary end should have approach lights");
        assert_eq!(lights.system, ApproachLightSystem::Malsr);
        assert!(lights.reils);
        assert!(!lights.end_lights);
        assert_eq!(lights.strobes, 2);

        assert_eq!(rwy.primary.overrun.map(|o| o.length), Some(60.0));
        assert!(rwy.secondary.overrun.is_none());
    }

    #[test]
    fn unknown_children_are_reported() {
        let builder = runway(4, 1, 22, 2, 44.0, 3460.0)
            .child(RecordBuilder::new(0x0004).u32(0))
            .child(RecordBuilder::new(0x0f).u8(1).u8(0));

        let (rwy, issues) = decode(builder);

        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues.iter().next().map(|i| i.kind),
            Some(IssueKind::UnknownTag)
        );
        assert!(rwy.primary.approach_lights.is_some());
    }
}
