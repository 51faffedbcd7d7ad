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

use std::collections::BTreeMap;

use bgl::records::{Airport, AirportNames, Approach, Boundary, NameList, Waypoint};
use bgl::Record;
use rusqlite::{named_params, Connection};

use super::*;
use crate::ImportOptions;

/// Writes decoded records with their children into the tables.
///
/// Rows are written parent first: an airport before its runways, a runway's
/// ends before the runway and an approach before its transitions.
#[derive(Debug)]
pub struct DataWriter {
    ctx: WriterContext,
    write_deletes: bool,
    files: TableWriter<BglFileWriter>,
    airports: TableWriter<AirportWriter>,
    deletes: TableWriter<DeleteAirportWriter>,
    runway_ends: TableWriter<RunwayEndWriter>,
    runways: TableWriter<RunwayWriter>,
    helipads: TableWriter<HelipadWriter>,
    starts: TableWriter<StartWriter>,
    coms: TableWriter<ComWriter>,
    parkings: TableWriter<ParkingWriter>,
    approaches: TableWriter<ApproachWriter>,
    approach_legs: TableWriter<ApproachLegWriter>,
    transitions: TableWriter<TransitionWriter>,
    transition_legs: TableWriter<TransitionLegWriter>,
    waypoints: TableWriter<WaypointWriter>,
    route_points: TableWriter<RoutePointWriter>,
    vors: TableWriter<VorWriter>,
    ils: TableWriter<IlsWriter>,
    ndbs: TableWriter<NdbWriter>,
    markers: TableWriter<MarkerWriter>,
    boundaries: TableWriter<BoundaryWriter>,
    boundary_lines: TableWriter<BoundaryLineWriter>,
}

impl DataWriter {
    pub fn new(options: &ImportOptions) -> Self {
        let base = options.id_base;

        Self {
            ctx: WriterContext::new(options.verbose),
            write_deletes: options.write_deletes,
            files: TableWriter::new(base),
            airports: TableWriter::new(base),
            deletes: TableWriter::new(base),
            runway_ends: TableWriter::new(base),
            runways: TableWriter::new(base),
            helipads: TableWriter::new(base),
            starts: TableWriter::new(base),
            coms: TableWriter::new(base),
            parkings: TableWriter::new(base),
            approaches: TableWriter::new(base),
            approach_legs: TableWriter::new(base),
            transitions: TableWriter::new(base),
            transition_legs: TableWriter::new(base),
            waypoints: TableWriter::new(base),
            route_points: TableWriter::new(base),
            vors: TableWriter::new(base),
            ils: TableWriter::new(base),
            ndbs: TableWriter::new(base),
            markers: TableWriter::new(base),
            boundaries: TableWriter::new(base),
            boundary_lines: TableWriter::new(base),
        }
    }

    /// Creates a writer whose ids continue after the rows already in the
    /// database, so an import can add to the rows of earlier imports.
    ///
    /// # Errors
    ///
    /// Returns an error if the last ids can't be read.
    pub fn resume(connection: &Connection, options: &ImportOptions) -> Result<Self, Error> {
        let base = options.id_base;

        Ok(Self {
            ctx: WriterContext::new(options.verbose),
            write_deletes: options.write_deletes,
            files: TableWriter::resume(connection, base)?,
            airports: TableWriter::resume(connection, base)?,
            deletes: TableWriter::resume(connection, base)?,
            runway_ends: TableWriter::resume(connection, base)?,
            runways: TableWriter::resume(connection, base)?,
            helipads: TableWriter::resume(connection, base)?,
            starts: TableWriter::resume(connection, base)?,
            coms: TableWriter::resume(connection, base)?,
            parkings: TableWriter::resume(connection, base)?,
            approaches: TableWriter::resume(connection, base)?,
            approach_legs: TableWriter::resume(connection, base)?,
            transitions: TableWriter::resume(connection, base)?,
            transition_legs: TableWriter::resume(connection, base)?,
            waypoints: TableWriter::resume(connection, base)?,
            route_points: TableWriter::resume(connection, base)?,
            vors: TableWriter::resume(connection, base)?,
            ils: TableWriter::resume(connection, base)?,
            ndbs: TableWriter::resume(connection, base)?,
            markers: TableWriter::resume(connection, base)?,
            boundaries: TableWriter::resume(connection, base)?,
            boundary_lines: TableWriter::resume(connection, base)?,
        })
    }

    pub fn context(&self) -> &WriterContext {
        &self.ctx
    }

    /// Writes the row of a file whose records are written next.
    pub fn write_file(&mut self, connection: &Connection, file: FileInfo<'_>) -> Result<i64, Error> {
        self.ctx.end_file();
        self.files.write_object(connection, &mut self.ctx, &file)
    }

    /// Writes a top-level record with all its children.
    ///
    /// Returns `false` if the record has no table. A name list is added to
    /// the name index and names the airports of the file that are already
    /// written.
    ///
    /// # Errors
    ///
    /// Returns the first error of a row. Rows of the record written before
    /// the error are kept.
    pub fn write_record(&mut self, connection: &Connection, record: &Record) -> Result<bool, Error> {
        let written = self.write_tree(connection, record);
        self.ctx.end_record();
        written
    }

    fn write_tree(&mut self, connection: &Connection, record: &Record) -> Result<bool, Error> {
        match record {
            Record::Airport(arpt) => self.write_airport(connection, arpt)?,
            Record::Waypoint(wpt) => self.write_waypoint(connection, wpt)?,
            Record::IlsVor(ils) if ils.is_ils() => {
                self.ils.write_object(connection, &mut self.ctx, ils)?;
            }
            Record::IlsVor(vor) => {
                self.vors.write_object(connection, &mut self.ctx, vor)?;
            }
            Record::Ndb(ndb) => {
                self.ndbs.write_object(connection, &mut self.ctx, ndb)?;
            }
            Record::Marker(marker) => {
                self.markers.write_object(connection, &mut self.ctx, marker)?;
            }
            Record::Boundary(boundary) => self.write_boundary(connection, boundary)?,
            Record::NameList(list) => {
                self.write_names(connection, list)?;
                return Ok(false);
            }
            Record::AirportSummary(_)
            | Record::SceneryObject(_)
            | Record::Geopol(_)
            | Record::IcaoIndex(_)
            | Record::Unknown(_) => return Ok(false),
        }

        Ok(true)
    }

    fn write_airport(&mut self, connection: &Connection, arpt: &Airport) -> Result<(), Error> {
        self.airports.write_object(connection, &mut self.ctx, arpt)?;

        if let Some(delete) = arpt.delete.as_ref().filter(|_| self.write_deletes) {
            self.deletes.write_object(connection, &mut self.ctx, delete)?;
        }

        for runway in &arpt.runways {
            let primary_end_id = self.runway_ends.write_object(
                connection,
                &mut self.ctx,
                &(EndType::Primary, &runway.primary),
            )?;
            let secondary_end_id = self.runway_ends.write_object(
                connection,
                &mut self.ctx,
                &(EndType::Secondary, &runway.secondary),
            )?;

            self.runways.write_object(
                connection,
                &mut self.ctx,
                &RunwayRow {
                    runway,
                    primary_end_id,
                    secondary_end_id,
                },
            )?;
        }

        for helipad in &arpt.helipads {
            self.helipads.write_object(connection, &mut self.ctx, helipad)?;
        }

        for start in &arpt.starts {
            self.starts.write_object(connection, &mut self.ctx, start)?;
        }

        for com in &arpt.coms {
            self.coms.write_object(connection, &mut self.ctx, com)?;
        }

        for parking in &arpt.parkings {
            self.parkings.write_object(connection, &mut self.ctx, parking)?;
        }

        for appr in &arpt.approaches {
            self.write_approach(connection, appr)?;
        }

        for wpt in &arpt.waypoints {
            self.write_waypoint(connection, wpt)?;
        }

        Ok(())
    }

    fn write_approach(&mut self, connection: &Connection, appr: &Approach) -> Result<(), Error> {
        self.approaches.write_object(connection, &mut self.ctx, appr)?;

        for leg in &appr.legs {
            self.approach_legs
                .write_object(connection, &mut self.ctx, &(leg, false))?;
        }

        for leg in &appr.missed_legs {
            self.approach_legs
                .write_object(connection, &mut self.ctx, &(leg, true))?;
        }

        for trans in &appr.transitions {
            self.transitions.write_object(connection, &mut self.ctx, trans)?;

            for leg in &trans.legs {
                self.transition_legs
                    .write_object(connection, &mut self.ctx, leg)?;
            }
        }

        Ok(())
    }

    fn write_waypoint(&mut self, connection: &Connection, wpt: &Waypoint) -> Result<(), Error> {
        self.waypoints.write_object(connection, &mut self.ctx, wpt)?;

        for route in &wpt.routes {
            self.route_points
                .write_object(connection, &mut self.ctx, route)?;
        }

        Ok(())
    }

    fn write_boundary(&mut self, connection: &Connection, boundary: &Boundary) -> Result<(), Error> {
        self.boundaries
            .write_object(connection, &mut self.ctx, boundary)?;

        for line in &boundary.lines {
            self.boundary_lines
                .write_object(connection, &mut self.ctx, line)?;
        }

        Ok(())
    }

    fn write_names(&mut self, connection: &Connection, list: &NameList) -> Result<(), Error> {
        if let Some(file_id) = self.ctx.file_id() {
            for names in list.names() {
                for airport_id in airports_of_file(connection, file_id, &names.ident)? {
                    name_airport(connection, airport_id, &names)?;
                }
            }
        }

        // a rejected update skips the list, so later airports aren't named
        self.ctx.add_names(list);
        Ok(())
    }

    /// The number of rows written per table.
    pub fn rows(&self) -> BTreeMap<Table, usize> {
        BTreeMap::from([
            (Table::BglFile, self.files.rows()),
            (Table::Airport, self.airports.rows()),
            (Table::DeleteAirport, self.deletes.rows()),
            (Table::RunwayEnd, self.runway_ends.rows()),
            (Table::Runway, self.runways.rows()),
            (Table::Helipad, self.helipads.rows()),
            (Table::Start, self.starts.rows()),
            (Table::Com, self.coms.rows()),
            (Table::Parking, self.parkings.rows()),
            (Table::Approach, self.approaches.rows()),
            (Table::ApproachLeg, self.approach_legs.rows()),
            (Table::Transition, self.transitions.rows()),
            (Table::TransitionLeg, self.transition_legs.rows()),
            (Table::Waypoint, self.waypoints.rows()),
            (Table::RoutePoint, self.route_points.rows()),
            (Table::Vor, self.vors.rows()),
            (Table::Ils, self.ils.rows()),
            (Table::Ndb, self.ndbs.rows()),
            (Table::Marker, self.markers.rows()),
            (Table::Boundary, self.boundaries.rows()),
            (Table::BoundaryLine, self.boundary_lines.rows()),
        ])
    }
}

/// The ids of the airports with `ident` written for the file `file_id`.
fn airports_of_file(connection: &Connection, file_id: i64, ident: &str) -> Result<Vec<i64>, Error> {
    let sqlite = |source: rusqlite::Error| Error::Sqlite {
        operation: "find airports to name",
        source,
    };

    let mut statement = connection
        .prepare_cached("SELECT airport_id FROM airport WHERE file_id = :file_id AND ident = :ident")
        .map_err(sqlite)?;
    let ids = statement
        .query_map(named_params! { ":file_id": file_id, ":ident": ident }, |row| {
            row.get(0)
        })
        .map_err(sqlite)?
        .collect::<Result<Vec<i64>, _>>()
        .map_err(sqlite)?;

    Ok(ids)
}

/// Sets the names of an airport row that is already written. A name of the
/// airport record is kept.
fn name_airport(connection: &Connection, airport_id: i64, names: &AirportNames) -> Result<(), Error> {
    let rejected = |source: rusqlite::Error| Error::Persistence {
        table: Table::Airport.name(),
        id: airport_id,
        source,
    };

    connection
        .prepare_cached(
            "UPDATE airport SET name = coalesce(name, :name), country = :country, \
            state = :state, city = :city WHERE airport_id = :airport_id",
        )
        .map_err(rejected)?
        .execute(named_params! {
            ":name": non_empty(&names.name),
            ":country": non_empty(&names.country),
            ":state": non_empty(&names.state),
            ":city": non_empty(&names.city),
            ":airport_id": airport_id,
        })
        .map_err(rejected)?;

    Ok(())
}
