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
use log::debug;

use super::{child, children, unknown_child, Approach, Name, Opaque, Runway, Waypoint};
use crate::codes::{
    ComType, HelipadType, ParkingName, ParkingType, RunwayDesignator, StartType, Surface,
};
use crate::record_type::{AirportRecord, Scope};
use crate::{
    c_string, runway_name, Error, Fields, FromRecord, Ident, Issues, Position, RawRecord,
};

const AIRPORT_LENGTH: usize = 50;
const PARKING_LENGTH: usize = 20;

/// An airport with all its facilities.
#[derive(Clone, PartialEq, Debug)]
pub struct Airport {
    pub ident: Ident,
    pub region: Ident,
    pub position: Position,
    pub tower_position: Position,
    pub magvar: f32,
    pub fuel_flags: u32,
    pub has_tower: bool,
    pub name: String,
    pub runways: Vec<Runway>,
    pub helipads: Vec<Helipad>,
    pub starts: Vec<Start>,
    pub coms: Vec<Com>,
    pub parkings: Vec<Parking>,
    pub approaches: Vec<Approach>,
    pub waypoints: Vec<Waypoint>,
    pub delete: Option<DeleteAirport>,
    /// Nested records which are kept undecoded, e.g. aprons and taxiways.
    pub other: Vec<Opaque>,
}

impl Airport {
    /// Returns the rectangle enclosing the airport reference point, runway
    /// ends, helipads and starts.
    pub fn bounding_rect(&self) -> Rect<f64> {
        let points = std::iter::once(self.position.point)
            .chain(
                self.runways
                    .iter()
                    .flat_map(|rwy| [rwy.primary.position, rwy.secondary.position]),
            )
            .chain(self.helipads.iter().map(|h| h.position.point))
            .chain(self.starts.iter().map(|s| s.position.point));

        let (mut min, mut max) = (self.position.point, self.position.point);
        for p in points {
            min = Point::new(min.x().min(p.x()), min.y().min(p.y()));
            max = Point::new(max.x().max(p.x()), max.y().max(p.y()));
        }

        Rect::new(
            coord! { x: min.x(), y: min.y() },
            coord! { x: max.x(), y: max.y() },
        )
    }

    /// The length of the longest runway in meters, zero without runways.
    pub fn longest_runway_length(&self) -> f32 {
        self.runways
            .iter()
            .map(|rwy| rwy.length)
            .fold(0.0, f32::max)
    }
}

impl FromRecord for Airport {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        // facility counts are informational, the nested records are decoded
        fields.skip(6)?;
        let position = fields.next()?;
        let tower_position = fields.next()?;
        let magvar = fields.next()?;
        let ident = fields.next()?;
        let region = fields.next()?;
        let fuel_flags = fields.next()?;
        let flags: u32 = fields.next()?;

        let mut airport = Self {
            ident,
            region,
            position,
            tower_position,
            magvar,
            fuel_flags,
            has_tower: flags & 1 != 0,
            name: String::new(),
            runways: Vec::new(),
            helipads: Vec::new(),
            starts: Vec::new(),
            coms: Vec::new(),
            parkings: Vec::new(),
            approaches: Vec::new(),
            waypoints: Vec::new(),
            delete: None,
            other: Vec::new(),
        };

        const SCOPE: Scope = Scope::Airport;

        for rec in children(raw, AIRPORT_LENGTH, SCOPE, issues)? {
            match AirportRecord::from_tag(rec.tag) {
                Some(AirportRecord::Name) => {
                    airport.name = child::<Name>(&rec, SCOPE, issues)
                        .map(|name| name.0)
                        .unwrap_or_default();
                }
                Some(AirportRecord::Runway) => {
                    airport.runways.extend(child::<Runway>(&rec, SCOPE, issues))
                }
                Some(AirportRecord::Helipad) => {
                    airport.helipads.extend(child::<Helipad>(&rec, SCOPE, issues))
                }
                Some(AirportRecord::Start) => {
                    airport.starts.extend(child::<Start>(&rec, SCOPE, issues))
                }
                Some(AirportRecord::Com) => airport.coms.extend(child::<Com>(&rec, SCOPE, issues)),
                Some(AirportRecord::TaxiParking) => {
                    if let Some(list) = child::<ParkingList>(&rec, SCOPE, issues) {
                        airport.parkings.extend(list.0);
                    }
                }
                Some(AirportRecord::Approach) => {
                    airport.approaches.extend(child::<Approach>(&rec, SCOPE, issues))
                }
                Some(AirportRecord::AirportWaypoint) => {
                    airport.waypoints.extend(child::<Waypoint>(&rec, SCOPE, issues))
                }
                Some(AirportRecord::DeleteAirport) => {
                    if let Some(delete) = child::<DeleteAirport>(&rec, SCOPE, issues) {
                        airport.delete = Some(delete);
                    }
                }
                Some(_) => airport.other.push(Opaque::new(&rec)),
                None => {
                    unknown_child(&rec, SCOPE, issues);
                    airport.other.push(Opaque::new(&rec));
                }
            }
        }

        debug!(
            "airport {} \"{}\" with {} runways, {} approaches, {} COMs at {:#x}",
            airport.ident,
            airport.name,
            airport.runways.len(),
            airport.approaches.len(),
            airport.coms.len(),
            raw.offset
        );

        Ok(airport)
    }
}

/// A communication frequency of an airport.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Com {
    pub kind: ComType,
    /// Frequency in Hz.
    pub frequency: u32,
    pub name: String,
}

impl FromRecord for Com {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        Ok(Self {
            kind: fields.next()?,
            frequency: fields.next()?,
            name: c_string(fields.rest()),
        })
    }
}

/// A start position on a runway, water runway or helipad.
#[derive(Clone, PartialEq, Debug)]
pub struct Start {
    pub runway_number: u8,
    pub runway_designator: RunwayDesignator,
    pub kind: StartType,
    pub position: Position,
    pub heading: f32,
}

impl Start {
    pub fn runway_name(&self) -> String {
        runway_name(self.runway_number, self.runway_designator)
    }
}

impl FromRecord for Start {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let runway_number = fields.next()?;
        let flags: u8 = fields.next()?;

        Ok(Self {
            runway_number,
            runway_designator: RunwayDesignator::from(flags & 0x0f),
            kind: StartType::from(flags >> 4),
            position: fields.next()?,
            heading: fields.next()?,
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Helipad {
    pub surface: Surface,
    pub kind: HelipadType,
    pub transparent: bool,
    pub closed: bool,
    pub position: Position,
    pub length: f32,
    pub width: f32,
    pub heading: f32,
}

impl FromRecord for Helipad {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let surface: u8 = fields.next()?;
        let kind = fields.next()?;
        let flags: u8 = fields.next()?;
        fields.skip(1)?;

        Ok(Self {
            surface: Surface::from(surface as u16),
            kind,
            transparent: flags & 0x01 != 0,
            closed: flags & 0x02 != 0,
            position: fields.next()?,
            length: fields.next()?,
            width: fields.next()?,
            heading: fields.next()?,
        })
    }
}

/// Removes facilities of an airport defined by other scenery.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DeleteAirport {
    pub flags: u16,
    pub runways: u8,
    pub starts: u8,
    pub coms: u8,
}

impl DeleteAirport {
    pub fn all_approaches(&self) -> bool {
        self.flags & (1 << 0) != 0
    }

    pub fn all_apron_lights(&self) -> bool {
        self.flags & (1 << 1) != 0
    }

    pub fn all_aprons(&self) -> bool {
        self.flags & (1 << 2) != 0
    }

    pub fn all_frequencies(&self) -> bool {
        self.flags & (1 << 3) != 0
    }

    pub fn all_helipads(&self) -> bool {
        self.flags & (1 << 4) != 0
    }

    pub fn all_runways(&self) -> bool {
        self.flags & (1 << 5) != 0
    }

    pub fn all_starts(&self) -> bool {
        self.flags & (1 << 6) != 0
    }

    pub fn all_taxiways(&self) -> bool {
        self.flags & (1 << 7) != 0
    }
}

impl FromRecord for DeleteAirport {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        Ok(Self {
            flags: fields.next()?,
            runways: fields.next()?,
            starts: fields.next()?,
            coms: fields.next()?,
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Parking {
    pub number: u16,
    pub name: ParkingName,
    pub kind: ParkingType,
    pub radius: f32,
    pub heading: f32,
    pub position: Point<f64>,
}

impl Parking {
    fn read(fields: &mut Fields<'_>) -> Result<Self, Error> {
        Ok(Self {
            number: fields.next()?,
            name: fields.next()?,
            kind: fields.next()?,
            radius: fields.next()?,
            heading: fields.next()?,
            position: fields.next()?,
        })
    }
}

/// All parking spots of one `TAXI_PARKING` record.
#[derive(Clone, PartialEq, Debug)]
pub struct ParkingList(pub Vec<Parking>);

impl FromRecord for ParkingList {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let count: u16 = fields.next()?;
        fields
            .entries(count as usize, PARKING_LENGTH, Parking::read)
            .map(Self)
    }
}
