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

use bgl::records::{Runway, RunwayEnd};

use super::{non_empty, Row, Table, Writer, WriterContext};
use crate::Error;

/// Which end of its runway a runway end is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EndType {
    Primary,
    Secondary,
}

impl EndType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "P",
            Self::Secondary => "S",
        }
    }
}

pub struct RunwayEndWriter;

impl Writer for RunwayEndWriter {
    type Entity<'e> = (EndType, &'e RunwayEnd);

    const TABLE: Table = Table::RunwayEnd;

    const SQL: &'static str = "INSERT INTO runway_end (runway_end_id, name, end_type, \
        offset_threshold, blast_pad, overrun, left_vasi_type, left_vasi_pitch, right_vasi_type, \
        right_vasi_pitch, app_light_system_type, has_end_lights, has_reils, has_touchdown_lights, \
        num_strobes, is_closed, is_takeoff, is_landing, is_pattern, ils_ident, heading, lonx, laty) \
        VALUES (:runway_end_id, :name, :end_type, :offset_threshold, :blast_pad, :overrun, \
        :left_vasi_type, :left_vasi_pitch, :right_vasi_type, :right_vasi_pitch, \
        :app_light_system_type, :has_end_lights, :has_reils, :has_touchdown_lights, \
        :num_strobes, :is_closed, :is_takeoff, :is_landing, :is_pattern, :ils_ident, :heading, \
        :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        _ctx: &WriterContext,
        &(end_type, end): &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":name", end.name())?
            .bind(":end_type", end_type.as_str())?
            .bind(":offset_threshold", end.offset_threshold.map(|ext| ext.length))?
            .bind(":blast_pad", end.blast_pad.map(|ext| ext.length))?
            .bind(":overrun", end.overrun.map(|ext| ext.length))?
            .bind(":is_closed", end.closed)?
            .bind(":is_takeoff", end.takeoff)?
            .bind(":is_landing", end.landing)?
            .bind(":is_pattern", if end.right_pattern { "R" } else { "L" })?
            .bind(":ils_ident", non_empty(end.ils_ident.as_str()))?
            .bind(":heading", end.heading)?
            .bind(":lonx", end.position.x())?
            .bind(":laty", end.position.y())?;

        if let Some(vasi) = &end.left_vasi {
            row.bind(":left_vasi_type", vasi.kind.as_str())?
                .bind(":left_vasi_pitch", vasi.pitch)?;
        }

        if let Some(vasi) = &end.right_vasi {
            row.bind(":right_vasi_type", vasi.kind.as_str())?
                .bind(":right_vasi_pitch", vasi.pitch)?;
        }

        if let Some(lights) = &end.approach_lights {
            row.bind(":app_light_system_type", non_empty(lights.system.as_str()))?
                .bind(":has_end_lights", lights.end_lights)?
                .bind(":has_reils", lights.reils)?
                .bind(":has_touchdown_lights", lights.touchdown)?
                .bind(":num_strobes", lights.strobes)?;
        }

        Ok(())
    }
}

/// A runway with the ids of its written ends.
#[derive(Copy, Clone, Debug)]
pub struct RunwayRow<'a> {
    pub runway: &'a Runway,
    pub primary_end_id: i64,
    pub secondary_end_id: i64,
}

pub struct RunwayWriter;

impl Writer for RunwayWriter {
    type Entity<'e> = RunwayRow<'e>;

    const TABLE: Table = Table::Runway;

    const SQL: &'static str = "INSERT INTO runway (runway_id, airport_id, primary_end_id, \
        secondary_end_id, surface, length, width, heading, pattern_altitude, marking_flags, \
        edge_light, center_light, has_center_red, primary_lonx, primary_laty, secondary_lonx, \
        secondary_laty, altitude, lonx, laty) \
        VALUES (:runway_id, :airport_id, :primary_end_id, :secondary_end_id, :surface, :length, \
        :width, :heading, :pattern_altitude, :marking_flags, :edge_light, :center_light, \
        :has_center_red, :primary_lonx, :primary_laty, :secondary_lonx, :secondary_laty, \
        :altitude, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        rwy: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        let RunwayRow {
            runway,
            primary_end_id,
            secondary_end_id,
        } = *rwy;

        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":primary_end_id", primary_end_id)?
            .bind(":secondary_end_id", secondary_end_id)?
            .bind(":surface", runway.surface.as_str())?
            .bind(":length", runway.length)?
            .bind(":width", runway.width)?
            .bind(":heading", runway.heading)?
            .bind(":pattern_altitude", runway.pattern_altitude)?
            .bind(":marking_flags", runway.marking_flags)?
            .bind(":edge_light", runway.edge_lights().as_str())?
            .bind(":center_light", runway.center_lights().as_str())?
            .bind(":has_center_red", runway.center_red())?
            .bind(":primary_lonx", runway.primary.position.x())?
            .bind(":primary_laty", runway.primary.position.y())?
            .bind(":secondary_lonx", runway.secondary.position.x())?
            .bind(":secondary_laty", runway.secondary.position.y())?
            .bind(":altitude", runway.position.altitude)?
            .bind(":lonx", runway.position.lon())?
            .bind(":laty", runway.position.lat())?;

        Ok(())
    }
}
