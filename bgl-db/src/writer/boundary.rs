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

use bgl::records::{Boundary, BoundaryLine};

use super::{non_empty, Row, Table, Writer, WriterContext};
use crate::Error;

pub struct BoundaryWriter;

impl Writer for BoundaryWriter {
    type Entity<'e> = Boundary;

    const TABLE: Table = Table::Boundary;

    const SQL: &'static str = "INSERT INTO boundary (boundary_id, file_id, type, name, \
        min_altitude_type, max_altitude_type, min_altitude, max_altitude, min_lonx, min_laty, \
        max_lonx, max_laty) \
        VALUES (:boundary_id, :file_id, :type, :name, :min_altitude_type, :max_altitude_type, \
        :min_altitude, :max_altitude, :min_lonx, :min_laty, :max_lonx, :max_laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        boundary: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        let bounds = boundary.bounding_rect();

        row.bind(":file_id", ctx.parent(Self::TABLE, Table::BglFile)?)?
            .bind(":type", boundary.kind.as_str())?
            .bind(":name", non_empty(&boundary.name))?
            .bind(":min_altitude_type", boundary.min_altitude_type.as_str())?
            .bind(":max_altitude_type", boundary.max_altitude_type.as_str())?
            .bind(":min_altitude", boundary.min_position.altitude)?
            .bind(":max_altitude", boundary.max_position.altitude)?
            .bind(":min_lonx", bounds.min().x)?
            .bind(":min_laty", bounds.min().y)?
            .bind(":max_lonx", bounds.max().x)?
            .bind(":max_laty", bounds.max().y)?;

        Ok(())
    }
}

pub struct BoundaryLineWriter;

impl Writer for BoundaryLineWriter {
    type Entity<'e> = BoundaryLine;

    const TABLE: Table = Table::BoundaryLine;

    const SQL: &'static str = "INSERT INTO boundary_line (boundary_line_id, boundary_id, type, \
        radius, lonx, laty) \
        VALUES (:boundary_line_id, :boundary_id, :type, :radius, :lonx, :laty)";

    fn bind(
        row: &mut Row<'_, '_>,
        ctx: &WriterContext,
        line: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        row.bind(":boundary_id", ctx.parent(Self::TABLE, Table::Boundary)?)?
            .bind(":type", line.kind.as_str())?
            .bind(":radius", line.radius())?
            .bind(":lonx", line.point().map(|point| point.x()))?
            .bind(":laty", line.point().map(|point| point.y()))?;

        Ok(())
    }
}
