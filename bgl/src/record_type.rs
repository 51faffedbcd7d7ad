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

//! Record tags of a BGL file.
//!
//! Tags are scoped by their parent: the same value means a name below an
//! airport and a DME below an ILS. Each scope is a closed enum and every tag
//! has exactly one diagnostic name.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

record_scope! {
    /// Tags of top-level records.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
    pub enum RecordKind {
        Airport = 0x003c => "AIRPORT",
        Waypoint = 0x0022 => "WAYPOINT",
        AirportSummary = 0x0032 => "AIRPORTSUMMARY",
        IlsVor = 0x0013 => "ILS_VOR",
        Ndb = 0x0017 => "NDB",
        SceneryObject = 0x0025 => "SCENERYOBJECT",
        Marker = 0x0018 => "MARKER",
        Boundary = 0x0020 => "BOUNDARY",
        Geopol = 0x0023 => "GEOPOL",
        NameList = 0x0027 => "NAMELIST",
        VorIlsIcaoIndex = 0x0028 => "VOR_ILS_ICAO_INDEX",
        NdbIcaoIndex = 0x0029 => "NDB_ICAO_INDEX",
        WaypointIcaoIndex = 0x002a => "WAYPOINT_ICAO_INDEX",
    }
}

record_scope! {
    /// Tags of records nested in an airport.
    pub enum AirportRecord {
        Name = 0x0019 => "NAME",
        TowerObj = 0x0066 => "TOWER_OBJ",
        Runway = 0x0004 => "RUNWAY",
        AirportWaypoint = 0x0022 => "AIRPORT_WAYPOINT",
        Helipad = 0x0026 => "HELIPAD",
        Start = 0x0011 => "START",
        Com = 0x0012 => "COM",
        DeleteAirport = 0x0033 => "DELETE_AIRPORT",
        ApronFirst = 0x0037 => "APRON_FIRST",
        ApronSecond = 0x0030 => "APRON_SECOND",
        ApronEdgeLights = 0x0031 => "APRON_EDGE_LIGHTS",
        TaxiPoint = 0x001a => "TAXI_POINT",
        TaxiParking = 0x003d => "TAXI_PARKING",
        TaxiPath = 0x001c => "TAXI_PATH",
        TaxiName = 0x001d => "TAXI_NAME",
        Jetway = 0x003a => "JETWAY",
        Approach = 0x0024 => "APPROACH",
        FenceBlast = 0x0038 => "FENCE_BLAST",
        FenceBoundary = 0x0039 => "FENCE_BOUNDARY",
        UnknownRec = 0x003b => "UNKNOWN_REC",
    }
}

record_scope! {
    /// Tags of records nested in a runway.
    pub enum RunwayRecord {
        OffsetThresholdPrim = 0x0005 => "OFFSET_THRESHOLD_PRIM",
        OffsetThresholdSec = 0x0006 => "OFFSET_THRESHOLD_SEC",
        BlastPadPrim = 0x0007 => "BLAST_PAD_PRIM",
        BlastPadSec = 0x0008 => "BLAST_PAD_SEC",
        OverrunPrim = 0x0009 => "OVERRUN_PRIM",
        OverrunSec = 0x000a => "OVERRUN_SEC",
        VasiPrimLeft = 0x000b => "VASI_PRIM_LEFT",
        VasiPrimRight = 0x000c => "VASI_PRIM_RIGHT",
        VasiSecLeft = 0x000d => "VASI_SEC_LEFT",
        VasiSecRight = 0x000e => "VASI_SEC_RIGHT",
        AppLightsPrim = 0x000f => "APP_LIGHTS_PRIM",
        AppLightsSec = 0x0010 => "APP_LIGHTS_SEC",
    }
}

record_scope! {
    /// Tags of records nested in an approach or a transition.
    pub enum ApproachRecord {
        Legs = 0x002d => "LEGS",
        MissedLegs = 0x002e => "MISSED_LEGS",
        Transition = 0x002c => "TRANS",
        TransitionLegs = 0x002f => "TRANS_LEGS",
    }
}

record_scope! {
    /// Tags of records nested in an ILS or VOR.
    pub enum IlsVorRecord {
        Localizer = 0x0014 => "LOCALIZER",
        Glideslope = 0x0015 => "GLIDESLOPE",
        Dme = 0x0016 => "DME",
        IlsVorName = 0x0019 => "ILS_VOR_NAME",
    }
}

record_scope! {
    /// Tags of records nested in an NDB.
    pub enum NdbRecord {
        NdbName = 0x0019 => "NDB_NAME",
    }
}

record_scope! {
    /// Tags of records nested in a scenery object.
    pub enum SceneryObjectRecord {
        LibObject = 0x000b => "SCENERYOBJECT_LIB_OBJECT",
        AttachedObject = 0x1002 => "SCENERYOBJECT_ATTACHED_OBJECT",
        Effect = 0x000d => "SCENERYOBJECT_EFFECT",
        GenBuilding = 0x000a => "SCENERYOBJECT_GEN_BUILDING",
        Windsock = 0x000e => "SCENERYOBJECT_WINDSOCK",
        ExtBridge = 0x0012 => "SCENERYOBJECT_EXT_BRIDGE",
        Trigger = 0x0010 => "SCENERYOBJECT_TRIGGER",
    }
}

record_scope! {
    /// Tags of records nested in a boundary.
    pub enum BoundaryRecord {
        BoundaryLines = 0x0023 => "BOUNDARY_LINES",
        BoundaryName = 0x0025 => "BOUNDARY_NAME",
    }
}

/// Parses a record kind from its name.
///
/// The comparison ignores case and underscores, so `AIRPORT_SUMMARY`,
/// `airportsummary` and `AirportSummary` are all accepted.
impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = |name: &str| -> String {
            name.chars()
                .filter(|&c| c != '_' && c != '-')
                .map(|c| c.to_ascii_uppercase())
                .collect()
        };

        let wanted = normalized(s);
        Self::ALL
            .iter()
            .find(|kind| normalized(kind.name()) == wanted)
            .copied()
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Error returned when a record kind name is not known.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown record kind \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownKind {}

/// The parent context in which a tag is interpreted.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Scope {
    TopLevel,
    Airport,
    Runway,
    Approach,
    Transition,
    IlsVor,
    Ndb,
    SceneryObject,
    Boundary,
}

impl Scope {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopLevel => "top-level",
            Self::Airport => "airport",
            Self::Runway => "runway",
            Self::Approach => "approach",
            Self::Transition => "transition",
            Self::IlsVor => "ILS/VOR",
            Self::Ndb => "NDB",
            Self::SceneryObject => "scenery object",
            Self::Boundary => "boundary",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the diagnostic name of a raw tag within its scope.
///
/// Returns an empty string if the tag isn't known in the scope.
pub fn tag_name(scope: Scope, tag: u16) -> &'static str {
    let name = match scope {
        Scope::TopLevel => RecordKind::from_tag(tag).map(|t| t.name()),
        Scope::Airport => AirportRecord::from_tag(tag).map(|t| t.name()),
        Scope::Runway => RunwayRecord::from_tag(tag).map(|t| t.name()),
        Scope::Approach | Scope::Transition => ApproachRecord::from_tag(tag).map(|t| t.name()),
        Scope::IlsVor => IlsVorRecord::from_tag(tag).map(|t| t.name()),
        Scope::Ndb => NdbRecord::from_tag(tag).map(|t| t.name()),
        Scope::SceneryObject => SceneryObjectRecord::from_tag(tag).map(|t| t.name()),
        Scope::Boundary => BoundaryRecord::from_tag(tag).map(|t| t.name()),
    };

    name.unwrap_or("")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_scope<T: Copy>(all: &[T], name: fn(&T) -> &'static str, tag: fn(&T) -> u16) {
        let mut tags = HashSet::new();
        for t in all {
            assert!(!name(t).is_empty(), "tag {:#06x} has no name", tag(t));
            assert!(tags.insert(tag(t)), "tag {:#06x} is not unique", tag(t));
        }
    }

    #[test]
    fn every_tag_has_a_unique_name() {
        assert_scope(RecordKind::ALL, RecordKind::name, RecordKind::tag);
        assert_scope(AirportRecord::ALL, AirportRecord::name, AirportRecord::tag);
        assert_scope(RunwayRecord::ALL, RunwayRecord::name, RunwayRecord::tag);
        assert_scope(ApproachRecord::ALL, ApproachRecord::name, ApproachRecord::tag);
        assert_scope(IlsVorRecord::ALL, IlsVorRecord::name, IlsVorRecord::tag);
        assert_scope(NdbRecord::ALL, NdbRecord::name, NdbRecord::tag);
        assert_scope(
            SceneryObjectRecord::ALL,
            SceneryObjectRecord::name,
            SceneryObjectRecord::tag,
        );
        assert_scope(BoundaryRecord::ALL, BoundaryRecord::name, BoundaryRecord::tag);
    }

    #[test]
    fn tags_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_tag(kind.tag()), Some(*kind));
        }
        for rec in AirportRecord::ALL {
            assert_eq!(AirportRecord::from_tag(rec.tag()), Some(*rec));
        }
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(tag_name(Scope::TopLevel, 0x003c), "AIRPORT");
        assert_eq!(tag_name(Scope::TopLevel, 0x0027), "NAMELIST");
        assert_eq!(tag_name(Scope::Approach, 0x002c), "TRANS");
        assert_eq!(tag_name(Scope::Transition, 0x002f), "TRANS_LEGS");
        assert_eq!(tag_name(Scope::Airport, 0x003b), "UNKNOWN_REC");
        // the same value means different things in different scopes
        assert_eq!(tag_name(Scope::Airport, 0x0019), "NAME");
        assert_eq!(tag_name(Scope::IlsVor, 0x0019), "ILS_VOR_NAME");
        assert_eq!(tag_name(Scope::Ndb, 0x0019), "NDB_NAME");
    }

    #[test]
    fn unknown_tags_have_empty_names() {
        assert_eq!(tag_name(Scope::TopLevel, 0xbeef), "");
        assert_eq!(tag_name(Scope::Runway, 0x0004), "");
        assert_eq!(tag_name(Scope::Ndb, 0x0000), "");
    }

    #[test]
    fn parses_kind_names() {
        assert_eq!("AIRPORT".parse(), Ok(RecordKind::Airport));
        assert_eq!("airport_summary".parse(), Ok(RecordKind::AirportSummary));
        assert_eq!("ils-vor".parse(), Ok(RecordKind::IlsVor));
        assert_eq!(
            "runway".parse::<RecordKind>(),
            Err(UnknownKind("runway".to_string()))
        );
    }
}
