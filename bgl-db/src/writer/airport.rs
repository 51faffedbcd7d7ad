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

use bgl::records::{Airport, Com, DeleteAirport, Helipad, Parking, Start};

use super::{non_empty, Row, Table, Writer, WriterContext};
use crate::Error;

pub struct AirportWriter;

impl Writer for AirportWriter {
    type Entity<'e> = Airport;

    const TABLE: Table = Table::Airport;

    const SQL: &'static str = "INSERT INTO airport (airport_id, file_id, ident, region, name, \
        country, state, city, fuel_flags, has_tower, num_runways, num_helipads, num_starts, \
        num_coms, num_parkings, num_approaches, longest_runway_length, mag_var, tower_altitude, \
        tower_lonx, tower_laty, left_lonx, top_laty, right_lonx, bottom_laty, altitude, lonx, laty) \
        VALUES (:airport_id, :file_id, :ident, :region, :name, :country, :state, :city, \
        :fuel_flags, :has_tower, :num_runways, :num_helipads, :num_starts, :num_coms, \
        :num_parkings, :num_approaches, :longest_runway_length, :mag_var, :tower_altitude, \
        :tower_lonx, :tower_laty, :left_lonx, :top_laty, :right_lonx, :bottom_laty, :altitude, \
        :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        arpt: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":ident", arpt.ident.as_str())?
            .bind(":region", non_empty(arpt.region.as_str()))?
            .bind(":fuel_flags", arpt.fuel_flags)?
            .bind(":has_tower", arpt.has_tower)?
            .bind(":num_runways", arpt.runways.len() as i64)?
            .bind(":num_helipads", arpt.helipads.len() as i64)?
            .bind(":num_starts", arpt.starts.len() as i64)?
            .bind(":num_coms", arpt.coms.len() as i64)?
            .bind(":num_parkings", arpt.parkings.len() as i64)?
            .bind(":num_approaches", arpt.approaches.len() as i64)?
            .bind(":longest_runway_length", arpt.longest_runway_length())?
            .bind(":mag_var", arpt.magvar)?
            .bind(":altitude", arpt.position.altitude)?
            .bind(":lonx", arpt.position.lon())?
            .bind(":laty", arpt.position.lat())?;

        let bounds = arpt.bounding_rect();
        row.bind(":left_lonx", bounds.min().x)?
            .bind(":top_laty", bounds.max().y)?
            .bind(":right_lonx", bounds.max().x)?
            .bind(":bottom_laty", bounds.min().y)?;

        if arpt.has_tower {
            row.bind(":tower_altitude", arpt.tower_position.altitude)?
                .bind(":tower_lonx", arpt.tower_position.lon())?
                .bind(":tower_laty", arpt.tower_position.lat())?;
        }

        // a name list names airports whose record has no name
        let names = ctx.names(arpt.ident.as_str());
        let name = match names {
            Some(names) if arpt.name.is_empty() => names.name.as_str(),
            _ => arpt.name.as_str(),
        };
        row.bind(":name", non_empty(name))?;

        if let Some(names) = names {
            row.bind(":country", non_empty(&names.country))?
                .bind(":state", non_empty(&names.state))?
                .bind(":city", non_empty(&names.city))?;
        }

        Ok(())
    }

    fn publish(ctx: &mut WriterContext, arpt: &Self::Entity<'_>) {
        ctx.enter_airport(arpt.ident.as_str());
    }
}

pub struct DeleteAirportWriter;

impl Writer for DeleteAirportWriter {
    type Entity<'e> = DeleteAirport;

    const TABLE: Table = Table::DeleteAirport;

    const SQL: &'static str = "INSERT INTO delete_airport (delete_airport_id, airport_id, \
        approaches, apronlights, aprons, frequencies, helipads, runways, starts, taxiways, \
        num_del_runway, num_del_start, num_del_com) \
        VALUES (:delete_airport_id, :airport_id, :approaches, :apronlights, :aprons, \
        :frequencies, :helipads, :runways, :starts, :taxiways, :num_del_runway, \
        :num_del_start, :num_del_com)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        delete: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":approaches", delete.all_approaches())?
            .bind(":apronlights", delete.all_apron_lights())?
            .bind(":aprons", delete.all_aprons())?
            .bind(":frequencies", delete.all_frequencies())?
            .bind(":helipads", delete.all_helipads())?
            .bind(":runways", delete.all_runways())?
            .bind(":starts", delete.all_starts())?
            .bind(":taxiways", delete.all_taxiways())?
            .bind(":num_del_runway", delete.runways)?
            .bind(":num_del_start", delete.starts)?
            .bind(":num_del_com", delete.coms)?;

        Ok(())
    }
}

pub struct HelipadWriter;

impl Writer for HelipadWriter {
    type Entity<'e> = Helipad;

    const TABLE: Table = Table::Helipad;

    const SQL: &'static str = "INSERT INTO helipad (helipad_id, airport_id, surface, type, \
        length, width, heading, is_transparent, is_closed, altitude, lonx, laty) \
        VALUES (:helipad_id, :airport_id, :surface, :type, :length, :width, :heading, \
        :is_transparent, :is_closed, :altitude, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        helipad: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":surface", helipad.surface.as_str())?
            .bind(":type", helipad.kind.as_str())?
            .bind(":length", helipad.length)?
            .bind(":width", helipad.width)?
            .bind(":heading", helipad.heading)?
            .bind(":is_transparent", helipad.transparent)?
            .bind(":is_closed", helipad.closed)?
            .bind(":altitude", helipad.position.altitude)?
            .bind(":lonx", helipad.position.lon())?
            .bind(":laty", helipad.position.lat())?;

        Ok(())
    }
}

pub struct StartWriter;

impl Writer for StartWriter {
    type Entity<'e> = Start;

    const TABLE: Table = Table::Start;

    const SQL: &'static str = "INSERT INTO start (start_id, airport_id, runway_name, type, \
        heading, altitude, lonx, laty) \
        VALUES (:start_id, :airport_id, :runway_name, :type, :heading, :altitude, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        start: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":runway_name", non_empty(&start.runway_name()))?
            .bind(":type", start.kind.as_str())?
            .bind(":heading", start.heading)?
            .bind(":altitude", start.position.altitude)?
            .bind(":lonx", start.position.lon())?
            .bind(":laty", start.position.lat())?;

        Ok(())
    }
}

pub struct ComWriter;

impl Writer for ComWriter {
    type Entity<'e> = Com;

    const TABLE: Table = Table::Com;

    const SQL: &'static str = "INSERT INTO com (com_id, airport_id, type, frequency, name) \
        VALUES (:com_id, :airport_id, :type, :frequency, :name)";

    fn bind(row: &mut Row<'_, '_>, ctx: &WriterContext, com: &Self::Entity<'_>) -> Result<(), Error> {
        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":type", com.kind.as_str())?
            .bind(":frequency", com.frequency / 1000)?
            .bind(":name", non_empty(&com.name))?;

        Ok(())
    }
}

pub struct ParkingWriter;

impl Writer for ParkingWriter {
    type Entity<'e> = Parking;

    const TABLE: Table = Table::Parking;

    const SQL: &'static str = "INSERT INTO parking (parking_id, airport_id, type, name, number, \
        radius, heading, lonx, laty) \
        VALUES (:parking_id, :airport_id, :type, :name, :number, :radius, :heading, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        parking: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":type", parking.kind.as_str())?
            .bind(":name", parking.name.as_str())?
            .bind(":number", parking.number)?
            .bind(":radius", parking.radius)?
            .bind(":heading", parking.heading)?
            .bind(":lonx", parking.position.x())?
            .bind(":laty", parking.position.y())?;

        Ok(())
    }
}
