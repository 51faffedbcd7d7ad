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

use std::fmt;

macro_rules! tables {
    ($($variant:ident => $name:literal,)+) => {
        /// The tables written by an import.
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum Table {
            $($variant,)+
        }

        impl Table {
            /// All tables in the order parents before children.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// The primary key column.
            pub fn id_column(&self) -> &'static str {
                match self {
                    $(Self::$variant => concat!($name, "_id"),)+
                }
            }

            /// The named statement parameter of the primary key.
            pub fn id_param(&self) -> &'static str {
                match self {
                    $(Self::$variant => concat!(":", $name, "_id"),)+
                }
            }
        }
    };
}

tables! {
    BglFile => "bgl_file",
    Airport => "airport",
    DeleteAirport => "delete_airport",
    RunwayEnd => "runway_end",
    Runway => "runway",
    Helipad => "helipad",
    Start => "start",
    Com => "com",
    Parking => "parking",
    Approach => "approach",
    ApproachLeg => "approach_leg",
    Transition => "transition",
    TransitionLeg => "transition_leg",
    Waypoint => "waypoint",
    RoutePoint => "route_point",
    Vor => "vor",
    Ils => "ils",
    Ndb => "ndb",
    Marker => "marker",
    Boundary => "boundary",
    BoundaryLine => "boundary_line",
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_names_follow_table_names() {
        assert_eq!(Table::ALL.len(), 21);
        assert_eq!(Table::TransitionLeg.id_column(), "transition_leg_id");
        assert_eq!(Table::BglFile.id_param(), ":bgl_file_id");
    }
}
