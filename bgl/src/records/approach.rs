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

use log::debug;

use super::{child, children, misplaced_child, unknown_child};
use crate::codes::{
    AltitudeDescriptor, ApproachType, LegType, RunwayDesignator, TransitionType, TurnDirection,
};
use crate::record_type::{ApproachRecord, Scope};
use crate::{runway_name, Error, Fields, FixRef, FromRecord, Ident, Issues, RawRecord};

const APPROACH_LENGTH: usize = 26;
const TRANSITION_LENGTH: usize = 30;
const LEG_LENGTH: usize = 44;

/// An instrument approach procedure of an airport.
#[derive(Clone, PartialEq, Debug)]
pub struct Approach {
    pub suffix: Option<char>,
    pub runway_number: u8,
    pub runway_designator: RunwayDesignator,
    pub kind: ApproachType,
    pub gps_overlay: bool,
    pub fix: FixRef,
    pub fix_region: Ident,
    pub altitude: f32,
    pub heading: f32,
    pub missed_altitude: f32,
    pub legs: Vec<Leg>,
    pub missed_legs: Vec<Leg>,
    pub transitions: Vec<Transition>,
}

impl Approach {
    /// The runway name, empty for circling approaches.
    pub fn runway_name(&self) -> String {
        runway_name(self.runway_number, self.runway_designator)
    }
}

impl FromRecord for Approach {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let suffix: u8 = fields.next()?;
        let runway_number = fields.next()?;
        let type_flags: u8 = fields.next()?;
        // transition, leg and missed leg counts
        fields.skip(3)?;

        let mut approach = Self {
            suffix: (suffix != 0).then_some(suffix as char),
            runway_number,
            runway_designator: RunwayDesignator::from((type_flags >> 4) & 0x07),
            kind: ApproachType::from(type_flags & 0x0f),
            gps_overlay: type_flags & 0x80 != 0,
            fix: fields.next()?,
            fix_region: fields.next()?,
            altitude: fields.next()?,
            heading: fields.next()?,
            missed_altitude: fields.next()?,
            legs: Vec::new(),
            missed_legs: Vec::new(),
            transitions: Vec::new(),
        };

        const SCOPE: Scope = Scope::Approach;

        for rec in children(raw, APPROACH_LENGTH, SCOPE, issues)? {
            match ApproachRecord::from_tag(rec.tag) {
                Some(ApproachRecord::Legs) => {
                    if let Some(legs) = child::<LegList>(&rec, SCOPE, issues) {
                        approach.legs.extend(legs.0);
                    }
                }
                Some(ApproachRecord::MissedLegs) => {
                    if let Some(legs) = child::<LegList>(&rec, SCOPE, issues) {
                        approach.missed_legs.extend(legs.0);
                    }
                }
                Some(ApproachRecord::Transition) => approach
                    .transitions
                    .extend(child::<Transition>(&rec, SCOPE, issues)),
                Some(ApproachRecord::TransitionLegs) => misplaced_child(&rec, SCOPE, issues),
                None => unknown_child(&rec, SCOPE, issues),
            }
        }

        debug!(
            "approach {} {} with {} legs, {} missed legs and {} transitions",
            approach.kind,
            approach.runway_name(),
            approach.legs.len(),
            approach.missed_legs.len(),
            approach.transitions.len()
        );

        Ok(approach)
    }
}

/// An approach transition leading to the initial approach fix.
#[derive(Clone, PartialEq, Debug)]
pub struct Transition {
    pub kind: TransitionType,
    pub fix: FixRef,
    pub fix_region: Ident,
    pub altitude: f32,
    pub dme_ident: Ident,
    pub dme_region: Ident,
    pub dme_radial: i32,
    pub dme_distance: f32,
    pub legs: Vec<Leg>,
}

impl FromRecord for Transition {
    fn from_record(raw: &RawRecord<'_>, issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();

        let kind = fields.next()?;
        // leg count
        fields.skip(1)?;

        let mut transition = Self {
            kind,
            fix: fields.next()?,
            fix_region: fields.next()?,
            altitude: fields.next()?,
            dme_ident: fields.next()?,
            dme_region: fields.next()?,
            dme_radial: fields.next()?,
            dme_distance: fields.next()?,
            legs: Vec::new(),
        };

        const SCOPE: Scope = Scope::Transition;

        for rec in children(raw, TRANSITION_LENGTH, SCOPE, issues)? {
            match ApproachRecord::from_tag(rec.tag) {
                Some(ApproachRecord::TransitionLegs) => {
                    if let Some(legs) = child::<LegList>(&rec, SCOPE, issues) {
                        transition.legs.extend(legs.0);
                    }
                }
                Some(_) => misplaced_child(&rec, SCOPE, issues),
                None => unknown_child(&rec, SCOPE, issues),
            }
        }

        Ok(transition)
    }
}

/// A leg of an approach, missed approach or transition.
#[derive(Clone, PartialEq, Debug)]
pub struct Leg {
    pub kind: LegType,
    pub altitude_descriptor: AltitudeDescriptor,
    pub turn_direction: TurnDirection,
    /// `distance_or_time` is a time in minutes.
    pub is_time: bool,
    pub true_course: bool,
    pub fix: FixRef,
    pub fix_region: Ident,
    pub recommended: FixRef,
    pub recommended_region: Ident,
    pub theta: f32,
    pub rho: f32,
    pub course: f32,
    pub distance_or_time: f32,
    pub altitude1: f32,
    pub altitude2: f32,
}

impl Leg {
    fn read(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let kind = fields.next()?;
        let altitude_descriptor = fields.next()?;
        let flags: u8 = fields.next()?;
        fields.skip(1)?;

        Ok(Self {
            kind,
            altitude_descriptor,
            turn_direction: TurnDirection::from(flags & 0x03),
            is_time: flags & 0x10 != 0,
            true_course: flags & 0x20 != 0,
            fix: fields.next()?,
            fix_region: fields.next()?,
            recommended: fields.next()?,
            recommended_region: fields.next()?,
            theta: fields.next()?,
            rho: fields.next()?,
            course: fields.next()?,
            distance_or_time: fields.next()?,
            altitude1: fields.next()?,
            altitude2: fields.next()?,
        })
    }
}

/// All legs of one `LEGS`, `MISSED_LEGS` or `TRANS_LEGS` record.
#[derive(Clone, PartialEq, Debug)]
pub struct LegList(pub Vec<Leg>);

impl FromRecord for LegList {
    fn from_record(raw: &RawRecord<'_>, _issues: &mut Issues) -> Result<Self, Error> {
        let mut fields = raw.fields();
        let count: u16 = fields.next()?;
        fields
            .entries(count as usize, LEG_LENGTH, Leg::read)
            .map(Self)
    }
}
