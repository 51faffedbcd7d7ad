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

use bgl::records::{Approach, Leg, Transition};
use bgl::{FixRef, Ident};

use super::{non_empty, Row, Table, Writer, WriterContext};
use crate::Error;

pub struct ApproachWriter;

impl Writer for ApproachWriter {
    type Entity<'e> = Approach;

    const TABLE: Table = Table::Approach;

    const SQL: &'static str = "INSERT INTO approach (approach_id, airport_id, airport_ident, \
        runway_name, type, suffix, has_gps_overlay, fix_type, fix_ident, fix_region, altitude, \
        heading, missed_altitude) \
        VALUES (:approach_id, :airport_id, :airport_ident, :runway_name, :type, :suffix, \
        :has_gps_overlay, :fix_type, :fix_ident, :fix_region, :altitude, :heading, \
        :missed_altitude)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        appr: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":airport_id", ctx.parent(Self::TABLE, Table::Airport)?)?
            .bind(":airport_ident", ctx.airport_ident().unwrap_or_default())?
            .bind(":runway_name", non_empty(&appr.runway_name()))?
            .bind(":type", appr.kind.as_str())?
            .bind(":suffix", appr.suffix.map(String::from))?
            .bind(":has_gps_overlay", appr.gps_overlay)?
            .bind(":fix_type", appr.fix.kind.as_str())?
            .bind(":fix_ident", non_empty(appr.fix.ident.as_str()))?
            .bind(":fix_region", non_empty(appr.fix_region.as_str()))?
            .bind(":altitude", appr.altitude)?
            .bind(":heading", appr.heading)?
            .bind(":missed_altitude", appr.missed_altitude)?;

        Ok(())
    }
}

macro_rules! leg_columns {
    () => {
        "type, alt_descriptor, turn_direction, fix_type, fix_ident, fix_region, \
        recommended_fix_type, recommended_fix_ident, recommended_fix_region, is_true_course, \
        course, distance, time, theta, rho, altitude1, altitude2"
    };
}

macro_rules! leg_params {
    () => {
        ":type, :alt_descriptor, :turn_direction, :fix_type, :fix_ident, :fix_region, \
        :recommended_fix_type, :recommended_fix_ident, :recommended_fix_region, \
        :is_true_course, :course, :distance, :time, :theta, :rho, :altitude1, :altitude2"
    };
}

/// Binds the columns which approach and transition legs share.
fn bind_leg(row: &mut Row<'_, '_>, leg: &Leg) -> Result<(), Error> {
    row.bind(":type", leg.kind.as_str())?
        .bind(":alt_descriptor", non_empty(leg.altitude_descriptor.as_str()))?
        .bind(":turn_direction", non_empty(leg.turn_direction.as_str()))?
        .bind(":is_true_course", leg.true_course)?
        .bind(":course", leg.course)?
        .bind(":theta", leg.theta)?
        .bind(":rho", leg.rho)?
        .bind(":altitude1", leg.altitude1)?
        .bind(":altitude2", leg.altitude2)?;

    if leg.is_time {
        row.bind(":time", leg.distance_or_time)?;
    } else {
        row.bind(":distance", leg.distance_or_time)?;
    }

    bind_fix(
        row,
        [":fix_type", ":fix_ident", ":fix_region"],
        &leg.fix,
        &leg.fix_region,
    )?;
    bind_fix(
        row,
        [
            ":recommended_fix_type",
            ":recommended_fix_ident",
            ":recommended_fix_region",
        ],
        &leg.recommended,
        &leg.recommended_region,
    )
}

/// Binds type, ident and region of a fix, or leaves them `NULL` if there's
/// no fix.
fn bind_fix(
    row: &mut Row<'_, '_>,
    [kind, ident, region_param]: [&str; 3],
    fix: &FixRef,
    region: &Ident,
) -> Result<(), Error> {
    if fix.is_none() {
        return Ok(());
    }

    row.bind(kind, fix.kind.as_str())?
        .bind(ident, fix.ident.as_str())?
        .bind(region_param, non_empty(region.as_str()))?;

    Ok(())
}

pub struct ApproachLegWriter;

impl Writer for ApproachLegWriter {
    /// The leg and whether it's part of the missed approach.
    type Entity<'e> = (&'e Leg, bool);

    const TABLE: Table = Table::ApproachLeg;

    const SQL: &'static str = concat!(
        "INSERT INTO approach_leg (approach_leg_id, approach_id, is_missed, ",
        leg_columns!(),
        ") VALUES (:approach_leg_id, :approach_id, :is_missed, ",
        leg_params!(),
        ")"
    );

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        &(leg, missed): &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":approach_id", ctx.parent(Self::TABLE, Table::Approach)?)?
            .bind(":is_missed", missed)?;
        bind_leg(row, leg)
    }
}

pub struct TransitionWriter;

impl Writer for TransitionWriter {
    type Entity<'e> = Transition;

    const TABLE: Table = Table::Transition;

    const SQL: &'static str = "INSERT INTO transition (transition_id, approach_id, type, \
        fix_type, fix_ident, fix_region, altitude, dme_ident, dme_region, dme_radial, \
        dme_distance) \
        VALUES (:transition_id, :approach_id, :type, :fix_type, :fix_ident, :fix_region, \
        :altitude, :dme_ident, :dme_region, :dme_radial, :dme_distance)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        trans: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":approach_id", ctx.parent(Self::TABLE, Table::Approach)?)?
            .bind(":type", trans.kind.as_str())?
            .bind(":fix_type", trans.fix.kind.as_str())?
            .bind(":fix_ident", non_empty(trans.fix.ident.as_str()))?
            .bind(":fix_region", non_empty(trans.fix_region.as_str()))?
            .bind(":altitude", trans.altitude)?;

        if !trans.dme_ident.is_empty() {
            row.bind(":dme_ident", trans.dme_ident.as_str())?
                .bind(":dme_region", non_empty(trans.dme_region.as_str()))?
                .bind(":dme_radial", trans.dme_radial)?
                .bind(":dme_distance", trans.dme_distance)?;
        }

        Ok(())
    }
}

pub struct TransitionLegWriter;

impl Writer for TransitionLegWriter {
    type Entity<'e> = Leg;

    const TABLE: Table = Table::TransitionLeg;

    const SQL: &'static str = concat!(
        "INSERT INTO transition_leg (transition_leg_id, transition_id, ",
        leg_columns!(),
        ") VALUES (:transition_leg_id, :transition_id, ",
        leg_params!(),
        ")"
    );

    fn bind(row: &mut Row<'_, '_>, ctx: &WriterContext, leg: &Self::Entity<'_>) -> Result<(), Error> {
        row.bind(":transition_id", ctx.parent(Self::TABLE, Table::Transition)?)?;
        bind_leg(row, leg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_statements_share_columns() {
        for sql in [ApproachLegWriter::SQL, TransitionLegWriter::SQL] {
            let columns = sql.split(") VALUES").next().unwrap_or_default();
            assert_eq!(columns.matches(',').count(), sql.matches(':').count() - 1);
        }
    }
}
