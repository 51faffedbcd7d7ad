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

use geo::Point;

use crate::codes::{RouteType, WaypointType};
use crate::{c_string, Error, Fields, FixRef, FromRecord, Ident, Issues, RawRecord};

const ROUTE_LENGTH: usize = 36;

/// An enroute or terminal waypoint with the airways passing it.
///
/// Terminal waypoints are nested in their airport or carry the airport ident.
#[derive(Clone, PartialEq, Debug)]
pub struct Waypoint {
    pub kind: WaypointType,
    pub position: Point<f64>,
    pub magvar: f32,
    pub ident: Ident,
    pub region: Ident,
    pub airport_ident: Ident,
    pub routes: Vec<Route>,
}

impl FromRecord for Waypoint {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let kind = fields.next()?;
        let route_count: u8 = fields.next()?;
        fields.skip(2)?;
        let position = fields.next()?;
        let magvar = fields.next()?;
        let ident = fields.next()?;
        let region = fields.next()?;
        let airport_ident = fields.next()?;
        let routes = fields.entries(route_count as usize, ROUTE_LENGTH, Route::read)?;

        Ok(Self {
            kind,
            position,
            magvar,
            ident,
            region,
            airport_ident,
            routes,
        })
    }
}

/// An airway segment through a waypoint.
#[derive(Clone, PartialEq, Debug)]
pub struct Route {
    pub kind: RouteType,
    pub name: String,
    pub next: Option<RouteFix>,
    pub previous: Option<RouteFix>,
}

/// The fix at the other end of an airway segment.
#[derive(Clone, PartialEq, Debug)]
pub struct RouteFix {
    pub fix: FixRef,
    pub region: Ident,
    pub min_altitude: f32,
}

impl RouteFix {
    fn read(fields: &mut Fields<'_>) -> Result<Option<Self>, Error> {
        let fix: FixRef = fields.next()?;
        let region = fields.next()?;
        let min_altitude = fields.next()?;

        Ok((!fix.is_none()).then_some(Self {
            fix,
            region,
            min_altitude,
        }))
    }
}

impl Route {
    fn read(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let kind = fields.next()?;
        fields.skip(3)?;
        let name: [u8; 8] = fields.next()?;

        Ok(Self {
            kind,
            name: c_string(&name),
            next: RouteFix::read(fields)?,
            previous: RouteFix::read(fields)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::FixType;
    use crate::test_support::{waypoint, RecordBuilder};
    use crate::Cursor;

    fn decode(builder: RecordBuilder) -> Result<Waypoint, Error> {
        let bytes = builder.build();
        let raw = Cursor::new(&bytes, 0)
            .next_record()
            .unwrap()
            .expect("record should be read");
        Waypoint::from_record(&raw, &mut Issues::new())
    }

    #[test]
    fn decodes_waypoint_with_routes() {
        let wpt = decode(
            waypoint("DPK", 2)
                .u8(1)
                .bytes(&[0; 3])
                .bytes(b"V16\0\0\0\0\0")
                .fix_ref(FixType::Vor, "CCC")
                .ident("K6")
                .f32(2000.0)
                .fix_ref(FixType::None, "")
                .u32(0)
                .f32(0.0)
                .u8(2)
                .bytes(&[0; 3])
                .bytes(b"J42\0\0\0\0\0")
                .fix_ref(FixType::Waypoint, "HAAYS")
                .ident("K6")
                .f32(18000.0)
                .fix_ref(FixType::Vor, "CCC")
                .ident("K6")
                .f32(18000.0),
        )
        .expect("waypoint should decode");

        assert_eq!(wpt.ident.as_str(), "DPK");
        assert_eq!(wpt.kind, WaypointType::Named);
        assert_eq!(wpt.routes.len(), 2);
        assert_eq!(wpt.routes[0].kind, RouteType::Victor);
        assert_eq!(wpt.routes[0].name, "V16");
        assert!(wpt.routes[0].previous.is_none());

        let next = wpt.routes[1].next.as_ref().expect("J42 should have a next fix");
        assert_eq!(next.fix.ident.as_str(), "HAAYS");
        assert_eq!(next.min_altitude, 18000.0);
        assert!(wpt.routes[1].previous.is_some());
    }

    #[test]
    fn routes_beyond_record_fail() {
        let result = decode(waypoint("DPK", 1).bytes(&[0; 10]));
        assert!(matches!(
            result,
            Err(Error::OutOfBounds {
                needed: ROUTE_LENGTH,
                available: 10,
                ..
            })
        ));
    }
}
