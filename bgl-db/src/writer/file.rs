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

use std::path::Path;

use super::{Row, Table, Writer, WriterContext};
use crate::Error;

/// A scenery file of the import.
#[derive(Copy, Clone, Debug)]
pub struct FileInfo<'a> {
    pub path: &'a Path,
    /// Size in byte.
    pub size: u64,
}

pub struct BglFileWriter;

impl Writer for BglFileWriter {
    type Entity<'e> = FileInfo<'e>;

    const TABLE: Table = Table::BglFile;

    const SQL: &'static str = "INSERT INTO bgl_file (bgl_file_id, filepath, filename, size) \
        VALUES (:bgl_file_id, :filepath, :filename, :size)";

    fn bind(
        row: &mut Row<'_, '_>,
        _ctx: &WriterContext,
        file: &Self::Entity<'_>,
    ) -> Result<(), Error> {
        let filename = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        row.bind(":filepath", file.path.to_string_lossy().into_owned())?
            .bind(":filename", filename)?
            .bind(":size", i64::try_from(file.size).unwrap_or(i64::MAX))?;

        Ok(())
    }
}
