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

use geo::{coord, Point, Rect};

use super::{child, children, unknown_child, Name};
use crate::codes::{AltitudeType, BoundaryLineType, BoundaryType};
use crate::record_type::{BoundaryRecord, Scope};
use crate::{Error, Fields, FromRecord, Issues, Position, RawRecord};

const BOUNDARY_LENGTH: usize = 28;
const BOUNDARY_LINE_LENGTH: usize = 12;

/// An airspace boundary.
#[derive(Clone, PartialEq, Debug)]
pub struct Boundary {
    pub kind: BoundaryType,
    pub min_altitude_type: AltitudeType,
    pub max_altitude_type: AltitudeType,
    /// South west corner with the lower altitude limit.
    pub min_position: Position,
    /// North east corner with the upper altitude limit.
    pub max_position: Position,
    pub name: String,
    pub lines: Vec<BoundaryLine>,
}

impl Boundary {
    pub fn bounding_rect(&self) -> Rect<f64> {
        Rect::new(self.min_position.point.0, self.max_position.point.0)
    }
}

impl FromRecord for Boundary {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let kind = fields.next()?;
        let altitude_types: u8 = fields.next()?;
        fields.skip(2)?;

        let mut boundary = Self {
            kind,
            min_altitude_type: AltitudeType::from(altitude_types & 0x0f),
            max_altitude_type: AltitudeType::from(altitude_types >> 4),
            min_position: fields.next()?,
            max_position: fields.next()?,
            name: String::new(),
            lines: Vec::new(),
        };

        const SCOPE: Scope = Scope::Boundary;

        for rec in children(raw, BOUNDARY_LENGTH, SCOPE, issues)? {
            match BoundaryRecord::from_tag(rec.tag) {
                Some(BoundaryRecord::BoundaryLines) => {
                    if let Some(lines) = child::<BoundaryLineList>(&rec, SCOPE, issues) {
                        boundary.lines.extend(lines.0);
                    }
                }
                Some(BoundaryRecord::BoundaryName) => {
                    boundary.name = child::<Name>(&rec, SCOPE, issues)
                        .map(|name| name.0)
                        .unwrap_or_default();
                }
                None => unknown_child(&rec, SCOPE, issues),
            }
        }

        Ok(boundary)
    }
}

/// The geometry of one boundary line point.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LineGeometry {
    Point(Point<f64>),
    /// Radius of a circle around the previous origin in meters.
    Radius(f32),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoundaryLine {
    pub kind: BoundaryLineType,
    pub geometry: LineGeometry,
}

impl BoundaryLine {
    fn read(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let kind: BoundaryLineType = fields.next()?;
        fields.skip(2)?;

        let geometry = match kind {
            BoundaryLineType::Circle => {
                let radius = fields.next()?;
                fields.skip(4)?;
                LineGeometry::Radius(radius)
            }
            _ => LineGeometry::Point(fields.next()?),
        };

        Ok(Self { kind, geometry })
    }

    /// Returns the point, `None` for circles.
    pub fn point(&self) -> Option<Point<f64>> {
        match self.geometry {
            LineGeometry::Point(point) => Some(point),
            LineGeometry::Radius(_) => None,
        }
    }

    pub fn radius(&self) -> Option<f32> {
        match self.geometry {
            LineGeometry::Radius(radius) => Some(radius),
            LineGeometry::Point(_) => None,
        }
    }
}

/// All line points of one `BOUNDARY_LINES` record.
#[derive(Clone, PartialEq, Debug)]
pub struct BoundaryLineList(pub Vec<BoundaryLine>);

impl FromRecord for BoundaryLineList {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let count: u16 = fields.next()?;
        fields
            .entries(count as usize, BOUNDARY_LINE_LENGTH, BoundaryLine::read)
            .map(Self)
    }
}

/// A political boundary or coastline.
#[derive(Clone, PartialEq, Debug)]
pub struct Geopol {
    pub kind: u8,
    pub bounds: Rect<f64>,
    pub points: Vec<Point<f64>>,
}

impl FromRecord for Geopol {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let kind = fields.next()?;
        fields.skip(1)?;
        let count: u16 = fields.next()?;
        let min: Point<f64> = fields.next()?;
        let max: Point<f64> = fields.next()?;
        let points = fields.entries(count as usize, 8, |entry| entry.next())?;

        Ok(Self {
            kind,
            bounds: Rect::new(
                coord! { x: min.x(), y: min.y() },
                coord! { x: max.x(), y: max.y() },
            ),
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;
    use crate::Cursor;

    fn decode<T: FromRecord>(builder: RecordBuilder) -> (T, Issues) {
        let bytes = builder.build();
        let raw = Cursor::new(&bytes, 0).next_record().unwrap().unwrap();
        let mut issues = Issues::new();
        let entity = T::from_record(&raw, &mut issues).expect("record should decode");
        (entity, issues)
    }

    #[test]
    fn decodes_boundary_with_lines_and_name() {
        let builder = RecordBuilder::new(0x20)
            .u8(4)
            .u8(0x21)
            .u16(0)
            .position(-74.0, 40.5, 0.0)
            .position(-73.5, 41.0, 1219.2)
            .child(
                RecordBuilder::new(0x23)
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
            .child(RecordBuilder::new(0x25).string("NEW YORK CLASS C"));

        let (boundary, issues) = decode::<Boundary>(builder);

        assert!(issues.is_empty());
        assert_eq!(boundary.kind, BoundaryType::ClassC);
        assert_eq!(boundary.min_altitude_type, AltitudeType::MeanSeaLevel);
        assert_eq!(boundary.max_altitude_type, AltitudeType::AboveGroundLevel);
        assert_eq!(boundary.name, "NEW YORK CLASS C");
        assert_eq!(boundary.lines.len(), 2);
        assert_eq!(boundary.lines[0].kind, BoundaryLineType::Origin);
        assert!(boundary.lines[0].point().is_some());
        assert_eq!(boundary.lines[1].radius(), Some(9260.0));

        let rect = boundary.bounding_rect();
        assert!((rect.min().x - -74.0).abs() < 1e-6);
        assert!((rect.max().y - 41.0).abs() < 1e-6);
    }

    #[test]
    fn decodes_geopol() {
        let builder = RecordBuilder::new(0x23)
            .u8(1)
            .u8(0)
            .u16(2)
            .lon(5.0)
            .lat(50.0)
            .lon(6.0)
            .lat(51.0)
            .lon(5.5)
            .lat(50.5)
            .lon(5.7)
            .lat(50.7);

        let (geopol, _) = decode::<Geopol>(builder);

        assert_eq!(geopol.points.len(), 2);
        assert!((geopol.bounds.min().y - 50.0).abs() < 1e-6);
        assert!((geopol.points[1].x() - 5.7).abs() < 1e-6);
    }
}
