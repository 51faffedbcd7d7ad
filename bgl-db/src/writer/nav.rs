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

use bgl::codes::RouteType;
use bgl::records::{IlsVor, Marker, Ndb, Route, RouteFix, Waypoint};

use super::{non_empty, Row, Table, Writer, WriterContext};
use crate::Error;

pub struct WaypointWriter;

impl Writer for WaypointWriter {
    type Entity<'e> = Waypoint;

    const TABLE: Table = Table::Waypoint;

    const SQL: &'static str = "INSERT INTO waypoint (waypoint_id, file_id, airport_id, ident, \
        region, airport_ident, type, num_victor_airway, num_jet_airway, mag_var, lonx, laty) \
        VALUES (:waypoint_id, :file_id, :airport_id, :ident, :region, :airport_ident, :type, \
        :num_victor_airway, :num_jet_airway, :mag_var, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        wpt: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        let count = |kinds: [RouteType; 2]| {
            wpt.routes
                .iter()
                .filter(|route| kinds.contains(&route.kind))
                .count() as i64
        };

        // airport waypoints are written while their airport is current
        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":airport_id", ctx.current(Table::Airport))?
            .bind(":ident", wpt.ident.as_str())?
            .bind(":region", non_empty(wpt.region.as_str()))?
            .bind(":airport_ident", non_empty(wpt.airport_ident.as_str()))?
            .bind(":type", wpt.kind.as_str())?
            .bind(":num_victor_airway", count([RouteType::Victor, RouteType::Both]))?
            .bind(":num_jet_airway", count([RouteType::Jet, RouteType::Both]))?
            .bind(":mag_var", wpt.magvar)?
            .bind(":lonx", wpt.position.x())?
            .bind(":laty", wpt.position.y())?;

        Ok(())
    }
}

pub struct RoutePointWriter;

impl Writer for RoutePointWriter {
    type Entity<'e> = Route;

    const TABLE: Table = Table::RoutePoint;

    const SQL: &'static str = "INSERT INTO route_point (route_point_id, waypoint_id, name, type, \
        next_type, next_ident, next_region, next_minimum_altitude, previous_type, previous_ident, \
        previous_region, previous_minimum_altitude) \
        VALUES (:route_point_id, :waypoint_id, :name, :type, :next_type, :next_ident, \
        :next_region, :next_minimum_altitude, :previous_type, :previous_ident, \
        :previous_region, :previous_minimum_altitude)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        route: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":waypoint_id", ctx.parent(Self::TABLE, Table::Waypoint)?)?
            .bind(":name", route.name.as_str())?
            .bind(":type", route.kind.as_str())?;

        if let Some(next) = &route.next {
            bind_route_fix(
                row,
                [
                    ":next_type",
                    ":next_ident",
                    ":next_region",
                    ":next_minimum_altitude",
                ],
                next,
            )?;
        }

        if let Some(previous) = &route.previous {
            bind_route_fix(
                row,
                [
                    ":previous_type",
                    ":previous_ident",
                    ":previous_region",
                    ":previous_minimum_altitude",
                ],
                previous,
            )?;
        }

        Ok(())
    }
}

fn bind_route_fix(
    row: &mut Row<'_, '_>,
    [kind, ident, region, altitude]: [&str; 4],
    fix: &RouteFix,
) -> Result<(), Error> {
    row.bind(kind, fix.fix.kind.as_str())?
        .bind(ident, fix.fix.ident.as_str())?
        .bind(region, non_empty(fix.region.as_str()))?
        .bind(altitude, fix.min_altitude)?;

    Ok(())
}

pub struct VorWriter;

impl Writer for VorWriter {
    type Entity<'e> = IlsVor;

    const TABLE: Table = Table::Vor;

    const SQL: &'static str = "INSERT INTO vor (vor_id, file_id, ident, name, region, \
        airport_ident, type, frequency, range, mag_var, dme_only, dme_altitude, dme_lonx, \
        dme_laty, altitude, lonx, laty) \
        VALUES (:vor_id, :file_id, :ident, :name, :region, :airport_ident, :type, :frequency, \
        :range, :mag_var, :dme_only, :dme_altitude, :dme_lonx, :dme_laty, :altitude, :lonx, \
        :laty)";

    fn bind(row: &mut Row<'_, '_>, ctx: &WriterContext, vor: &Self::Entity<'_>) -> Result<(), Error> {
        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":ident", vor.ident.as_str())?
            .bind(":name", non_empty(&vor.name))?
            .bind(":region", non_empty(vor.region.as_str()))?
            .bind(":airport_ident", non_empty(vor.airport_ident.as_str()))?
            .bind(":type", vor.kind.as_str())?
            .bind(":frequency", vor.frequency / 1000)?
            .bind(":range", vor.range)?
            .bind(":mag_var", vor.magvar)?
            .bind(":dme_only", vor.dme_only)?
            .bind(":altitude", vor.position.altitude)?
            .bind(":lonx", vor.position.lon())?
            .bind(":laty", vor.position.lat())?;

        if let Some(dme) = &vor.dme {
            row.bind(":dme_altitude", dme.position.altitude)?
                .bind(":dme_lonx", dme.position.lon())?
                .bind(":dme_laty", dme.position.lat())?;
        }

        Ok(())
    }
}

pub struct IlsWriter;

impl Writer for IlsWriter {
    type Entity<'e> = IlsVor;

    const TABLE: Table = Table::Ils;

    const SQL: &'static str = "INSERT INTO ils (ils_id, file_id, ident, name, region, \
        loc_airport_ident, loc_runway_name, frequency, range, mag_var, has_backcourse, \
        loc_heading, loc_width, gs_range, gs_pitch, gs_altitude, gs_lonx, gs_laty, dme_range, \
        dme_altitude, dme_lonx, dme_laty, altitude, lonx, laty) \
        VALUES (:ils_id, :file_id, :ident, :name, :region, :loc_airport_ident, \
        :loc_runway_name, :frequency, :range, :mag_var, :has_backcourse, :loc_heading, \
        :loc_width, :gs_range, :gs_pitch, :gs_altitude, :gs_lonx, :gs_laty, :dme_range, \
        :dme_altitude, :dme_lonx, :dme_laty, :altitude, :lonx, :laty)";

    fn bind(row: &mut Row<'_, '_>, ctx: &WriterContext, ils: &Self::Entity<'_>) -> Result<(), Error> {
        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":ident", ils.ident.as_str())?
            .bind(":name", non_empty(&ils.name))?
            .bind(":region", non_empty(ils.region.as_str()))?
            .bind(":loc_airport_ident", non_empty(ils.airport_ident.as_str()))?
            .bind(":frequency", ils.frequency / 1000)?
            .bind(":range", ils.range)?
            .bind(":mag_var", ils.magvar)?
            .bind(":has_backcourse", ils.backcourse)?
            .bind(":altitude", ils.position.altitude)?
            .bind(":lonx", ils.position.lon())?
            .bind(":laty", ils.position.lat())?;

        if let Some(loc) = &ils.localizer {
            row.bind(":loc_runway_name", non_empty(&loc.runway_name()))?
                .bind(":loc_heading", loc.heading)?
                .bind(":loc_width", loc.width)?;
        }

        if let Some(gs) = &ils.glideslope {
            row.bind(":gs_range", gs.range)?
                .bind(":gs_pitch", gs.pitch)?
                .bind(":gs_altitude", gs.position.altitude)?
                .bind(":gs_lonx", gs.position.lon())?
                .bind(":gs_laty", gs.position.lat())?;
        }

        if let Some(dme) = &ils.dme {
            row.bind(":dme_range", dme.range)?
                .bind(":dme_altitude", dme.position.altitude)?
                .bind(":dme_lonx", dme.position.lon())?
                .bind(":dme_laty", dme.position.lat())?;
        }

        Ok(())
    }
}

pub struct NdbWriter;

impl Writer for NdbWriter {
    type Entity<'e> = Ndb;

    const TABLE: Table = Table::Ndb;

    const SQL: &'static str = "INSERT INTO ndb (ndb_id, file_id, ident, name, region, \
        airport_ident, type, frequency, range, mag_var, altitude, lonx, laty) \
        VALUES (:ndb_id, :file_id, :ident, :name, :region, :airport_ident, :type, :frequency, \
        :range, :mag_var, :altitude, :lonx, :laty)";

    fn bind(row: &mut Row<'_, '_>, ctx: &WriterContext, ndb: &Self::Entity<'_>) -> Result<(), Error> {
        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":ident", ndb.ident.as_str())?
            .bind(":name", non_empty(&ndb.name))?
            .bind(":region", non_empty(ndb.region.as_str()))?
            .bind(":airport_ident", non_empty(ndb.airport_ident.as_str()))?
            .bind(":type", ndb.kind.as_str())?
            .bind(":frequency", ndb.frequency / 1000)?
            .bind(":range", ndb.range)?
            .bind(":mag_var", ndb.magvar)?
            .bind(":altitude", ndb.position.altitude)?
            .bind(":lonx", ndb.position.lon())?
            .bind(":laty", ndb.position.lat())?;

        Ok(())
    }
}

pub struct MarkerWriter;

impl Writer for MarkerWriter {
    type Entity<'e> = Marker;

    const TABLE: Table = Table::Marker;

    const SQL: &'static str = "INSERT INTO marker (marker_id, file_id, ident, region, type, \
        heading, altitude, lonx, laty) \
        VALUES (:marker_id, :file_id, :ident, :region, :type, :heading, :altitude, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        marker: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":ident", non_empty(marker.ident.as_str()))?
            .bind(":region", non_empty(marker.region.as_str()))?
            .bind(":type", marker.kind.as_str())?
            .bind(":heading", marker.heading)?
            .bind(":altitude", marker.position.altitude)?
            .bind(":lonx", marker.position.lon())?
            .bind(":laty", marker.position.lat())?;

        Ok(())
    }
}
