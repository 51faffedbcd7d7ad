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

//! Entities decoded from BGL records.
//!
//! Every entity owns its children, so a decoded top-level [`Record`] is a
//! tree. Nested records which fail to decode are reported to [`Issues`] and
//! dropped from the tree while their siblings are kept.

use log::trace;

use crate::record::{Cursor, FromRecord, RawRecord};
use crate::record_type::{RecordKind, Scope};
use crate::{Error, Issue, IssueKind, Issues};

mod airport;
mod approach;
mod boundary;
mod icao_index;
mod ilsvor;
mod marker;
mod namelist;
mod ndb;
mod runway;
mod scenery;
mod summary;
mod waypoint;

pub use airport::{Airport, Com, DeleteAirport, Helipad, Parking, ParkingList, Start};
pub use approach::{Approach, Leg, LegList, Transition};
pub use boundary::{Boundary, BoundaryLine, BoundaryLineList, Geopol, LineGeometry};
pub use icao_index::{IcaoEntry, IcaoIndex};
pub use ilsvor::{Dme, Glideslope, IlsVor, Localizer};
pub use marker::Marker;
pub use namelist::{AirportNames, IcaoName, NameList};
pub use ndb::Ndb;
pub use runway::{ApproachLights, Runway, RunwayEnd, RunwayExtension, Vasi};
pub use scenery::{Guid, LibraryObject, SceneryObject, Windsock};
pub use summary::AirportSummary;
pub use waypoint::{Route, RouteFix, Waypoint};

/// A record that is kept as bytes, either because its tag is unknown or
/// because it isn't decoded.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Opaque {
    pub tag: u16,
    pub offset: usize,
    /// The payload without the record header.
    pub bytes: Vec<u8>,
}

impl Opaque {
    pub fn new(raw: &RawRecord<'_>) -> Self {
        trace!(
            "record {:#06x} at {:#x}: {:02x?}",
            raw.tag,
            raw.offset,
            raw.payload()
        );

        Self {
            tag: raw.tag,
            offset: raw.offset,
            bytes: raw.payload().to_vec(),
        }
    }
}

/// A decoded top-level record.
#[derive(Clone, PartialEq, Debug)]
pub enum Record {
    Airport(Airport),
    Waypoint(Waypoint),
    AirportSummary(AirportSummary),
    IlsVor(IlsVor),
    Ndb(Ndb),
    SceneryObject(SceneryObject),
    Marker(Marker),
    Boundary(Boundary),
    Geopol(Geopol),
    NameList(NameList),
    IcaoIndex(IcaoIndex),
    /// A record with a tag outside the known set.
    Unknown(Opaque),
}

impl Record {
    /// Decodes a top-level record.
    ///
    /// Unknown tags are reported once and decode to [`Record::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed fields of the record can't be read. The
    /// caller decides whether to report it and skip the record.
    pub fn decode(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let Some(kind) = RecordKind::from_tag(raw.tag) else {
            issues.push(Issue::new(
                raw.offset,
                raw.tag,
                Scope::TopLevel,
                IssueKind::UnknownTag,
            ));
            return Ok(Self::Unknown(Opaque::new(raw)));
        };

        Ok(match kind {
            RecordKind::Airport => Self::Airport(Airport::from_record(raw, issues)?),
            RecordKind::Waypoint => Self::Waypoint(Waypoint::from_record(raw, issues)?),
            RecordKind::AirportSummary => {
                Self::AirportSummary(AirportSummary::from_record(raw, issues)?)
            }
            RecordKind::IlsVor => Self::IlsVor(IlsVor::from_record(raw, issues)?),
            RecordKind::Ndb => Self::Ndb(Ndb::from_record(raw, issues)?),
            RecordKind::SceneryObject => {
                Self::SceneryObject(SceneryObject::from_record(raw, issues)?)
            }
            RecordKind::Marker => Self::Marker(Marker::from_record(raw, issues)?),
            RecordKind::Boundary => Self::Boundary(Boundary::from_record(raw, issues)?),
            RecordKind::Geopol => Self::Geopol(Geopol::from_record(raw, issues)?),
            RecordKind::NameList => Self::NameList(NameList::from_record(raw, issues)?),
            RecordKind::VorIlsIcaoIndex
            | RecordKind::NdbIcaoIndex
            | RecordKind::WaypointIcaoIndex => {
                Self::IcaoIndex(IcaoIndex::from_record(raw, issues)?)
            }
        })
    }

    /// The kind of the record, `None` if the tag is unknown.
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Self::Airport(_) => Some(RecordKind::Airport),
            Self::Waypoint(_) => Some(RecordKind::Waypoint),
            Self::AirportSummary(_) => Some(RecordKind::AirportSummary),
            Self::IlsVor(_) => Some(RecordKind::IlsVor),
            Self::Ndb(_) => Some(RecordKind::Ndb),
            Self::SceneryObject(_) => Some(RecordKind::SceneryObject),
            Self::Marker(_) => Some(RecordKind::Marker),
            Self::Boundary(_) => Some(RecordKind::Boundary),
            Self::Geopol(_) => Some(RecordKind::Geopol),
            Self::NameList(_) => Some(RecordKind::NameList),
            Self::IcaoIndex(index) => Some(index.kind),
            Self::Unknown(_) => None,
        }
    }
}

/// Returns the nested records which follow the fixed part of `raw`.
///
/// A truncated nested record is reported and ends the list.
pub(crate) fn children<'a>(
    raw: &RawRecord<'a>,
    fixed_len: usize,
    scope: Scope,
    issues: &mut Issues,
) -> Result<Vec<RawRecord<'a>>, Error> {
    let mut children = Vec::new();

    for child in Cursor::descend(raw, fixed_len)? {
        match child {
            Ok(child) => children.push(child),
            Err(e) => issues.report(scope, raw.tag, &e),
        }
    }

    Ok(children)
}

/// Decodes a nested record, reporting it and returning `None` on failure.
pub(crate) fn child<T: FromRecord>(
    raw: &RawRecord<'_>,
    scope: Scope,
    issues: &mut Issues,
) -> Option<T> {
    match T::from_record(raw, issues) {
        Ok(entity) => Some(entity),
        Err(e) => {
            issues.report(scope, raw.tag, &e);
            None
        }
    }
}

/// Reports a nested record whose tag isn't known in `scope`.
pub(crate) fn unknown_child(raw: &RawRecord<'_>, scope: Scope, issues: &mut Issues) {
    issues.push(Issue::new(raw.offset, raw.tag, scope, IssueKind::UnknownTag));
}

/// Reports a nested record whose tag isn't valid below its parent.
pub(crate) fn misplaced_child(raw: &RawRecord<'_>, scope: Scope, issues: &mut Issues) {
    issues.push(Issue::new(
        raw.offset,
        raw.tag,
        scope,
        IssueKind::FormatOrderViolation,
    ));
}

/// A record which holds a name in its payload.
pub(crate) struct Name(pub String);

impl FromRecord for Name {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        Ok(Self(crate::c_string(raw.payload())))
    }
}
