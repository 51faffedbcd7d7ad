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

//! Code tables of enumerated record fields.

code_table! {
    /// Surface of runways, helipads, starts and runway extensions.
    pub enum Surface: u16 {
        Concrete = 0 => "C",
        Grass = 1 => "G",
        Water = 2 => "W",
        Asphalt = 4 => "A",
        Clay = 7 => "CE",
        Snow = 8 => "SN",
        Ice = 9 => "I",
        Dirt = 12 => "D",
        Coral = 13 => "CR",
        Gravel = 14 => "GR",
        OilTreated = 15 => "OT",
        SteelMats = 16 => "SM",
        Bituminous = 17 => "B",
        Brick = 18 => "BR",
        Macadam = 19 => "M",
        Planks = 20 => "PL",
        Sand = 21 => "S",
        Shale = 22 => "SH",
        Tarmac = 23 => "T",
        Undefined = 254 => "UNKNOWN",
    }
}

code_table! {
    pub enum ComType: u16 {
        Atis = 1 => "ATIS",
        Multicom = 2 => "MC",
        Unicom = 3 => "UC",
        Ctaf = 4 => "CTAF",
        Ground = 5 => "G",
        Tower = 6 => "T",
        Clearance = 7 => "C",
        Approach = 8 => "A",
        Departure = 9 => "D",
        Center = 10 => "CTR",
        Fss = 11 => "FSS",
        Awos = 12 => "AWOS",
        Asos = 13 => "ASOS",
        ClearancePreTaxi = 14 => "CPT",
        RemoteClearanceDelivery = 15 => "GCO",
    }
}

code_table! {
    pub enum StartType: u8 {
        Runway = 1 => "R",
        Water = 2 => "W",
        Helipad = 3 => "H",
    }
}

code_table! {
    pub enum HelipadType: u8 {
        None = 0 => "NONE",
        H = 1 => "H",
        Square = 2 => "SQUARE",
        Circle = 3 => "CIRCLE",
        Medical = 4 => "MEDICAL",
    }
}

code_table! {
    pub enum ParkingType: u8 {
        None = 0 => "NONE",
        RampGa = 1 => "RGA",
        RampGaSmall = 2 => "RGAS",
        RampGaMedium = 3 => "RGAM",
        RampGaLarge = 4 => "RGAL",
        RampCargo = 5 => "RC",
        RampMilCargo = 6 => "RMC",
        RampMilCombat = 7 => "RMCB",
        GateSmall = 8 => "GS",
        GateMedium = 9 => "GM",
        GateHeavy = 10 => "GH",
        DockGa = 11 => "DGA",
        Fuel = 12 => "FUEL",
        Vehicles = 13 => "V",
    }
}

code_table! {
    pub enum ParkingName: u8 {
        None = 0 => "NONE",
        Parking = 1 => "P",
        NorthParking = 2 => "NP",
        NorthEastParking = 3 => "NEP",
        EastParking = 4 => "EP",
        SouthEastParking = 5 => "SEP",
        SouthParking = 6 => "SP",
        SouthWestParking = 7 => "SWP",
        WestParking = 8 => "WP",
        NorthWestParking = 9 => "NWP",
        Gate = 10 => "G",
        Dock = 11 => "D",
        GateA = 12 => "GA",
        GateB = 13 => "GB",
        GateC = 14 => "GC",
        GateD = 15 => "GD",
        GateE = 16 => "GE",
        GateF = 17 => "GF",
        GateG = 18 => "GG",
        GateH = 19 => "GH",
        GateI = 20 => "GI",
        GateJ = 21 => "GJ",
        GateK = 22 => "GK",
        GateL = 23 => "GL",
        GateM = 24 => "GM",
        GateN = 25 => "GN",
        GateO = 26 => "GO",
        GateP = 27 => "GP",
        GateQ = 28 => "GQ",
        GateR = 29 => "GR",
        GateS = 30 => "GS",
        GateT = 31 => "GT",
        GateU = 32 => "GU",
        GateV = 33 => "GV",
        GateW = 34 => "GW",
        GateX = 35 => "GX",
        GateY = 36 => "GY",
        GateZ = 37 => "GZ",
    }
}

code_table! {
    pub enum ApproachType: u8 {
        Gps = 1 => "GPS",
        Vor = 2 => "VOR",
        Ndb = 3 => "NDB",
        Ils = 4 => "ILS",
        Localizer = 5 => "LOC",
        Sdf = 6 => "SDF",
        Lda = 7 => "LDA",
        VorDme = 8 => "VORDME",
        NdbDme = 9 => "NDBDME",
        Rnav = 10 => "RNAV",
        LocalizerBackcourse = 11 => "LOCB",
    }
}

code_table! {
    /// ARINC 424 path and terminator of a procedure leg.
    pub enum LegType: u8 {
        ArcToFix = 1 => "AF",
        CourseToAltitude = 2 => "CA",
        CourseToDme = 3 => "CD",
        CourseToFix = 4 => "CF",
        CourseToIntercept = 5 => "CI",
        CourseToRadial = 6 => "CR",
        DirectToFix = 7 => "DF",
        FixToAltitude = 8 => "FA",
        TrackFromFixDistance = 9 => "FC",
        TrackFromFixDme = 10 => "FD",
        FromFixToManual = 11 => "FM",
        HoldToAltitude = 12 => "HA",
        HoldToFix = 13 => "HF",
        HoldToManual = 14 => "HM",
        InitialFix = 15 => "IF",
        ProcedureTurn = 16 => "PI",
        ConstantRadiusArc = 17 => "RF",
        TrackToFix = 18 => "TF",
        HeadingToAltitude = 19 => "VA",
        HeadingToDme = 20 => "VD",
        HeadingToIntercept = 21 => "VI",
        HeadingToManual = 22 => "VM",
        HeadingToRadial = 23 => "VR",
    }
}

code_table! {
    /// Type of a fix referenced by approaches, transitions, legs and routes.
    pub enum FixType: u8 {
        None = 0 => "NONE",
        Airport = 1 => "A",
        Vor = 2 => "V",
        Ndb = 3 => "N",
        TerminalNdb = 4 => "TN",
        Waypoint = 5 => "W",
        TerminalWaypoint = 6 => "TW",
        Runway = 9 => "R",
        Localizer = 10 => "L",
    }
}

impl Default for FixType {
    fn default() -> Self {
        Self::None
    }
}

code_table! {
    pub enum AltitudeDescriptor: u8 {
        None = 0 => "",
        At = 1 => "A",
        AtOrAbove = 2 => "+",
        AtOrBelow = 3 => "-",
        Between = 4 => "B",
    }
}

code_table! {
    pub enum TurnDirection: u8 {
        None = 0 => "",
        Left = 1 => "L",
        Right = 2 => "R",
        Both = 3 => "B",
    }
}

code_table! {
    pub enum TransitionType: u8 {
        Full = 1 => "F",
        Dme = 2 => "D",
    }
}

code_table! {
    pub enum IlsVorType: u8 {
        Terminal = 1 => "T",
        Low = 2 => "L",
        High = 3 => "H",
        Ils = 4 => "ILS",
        Vot = 5 => "VT",
    }
}

code_table! {
    pub enum NdbType: u16 {
        CompassPoint = 0 => "CP",
        Mh = 1 => "MH",
        H = 2 => "H",
        Hh = 3 => "HH",
    }
}

code_table! {
    pub enum MarkerType: u8 {
        Fan75 = 0 => "FAN75",
        Backcourse = 1 => "BACKCOURSE",
        Inner = 2 => "INNER",
        Middle = 3 => "MIDDLE",
        Outer = 4 => "OUTER",
    }
}

code_table! {
    /// Airspace type of a boundary.
    pub enum BoundaryType: u8 {
        None = 0 => "NONE",
        Center = 1 => "C",
        ClassA = 2 => "CA",
        ClassB = 3 => "CB",
        ClassC = 4 => "CC",
        ClassD = 5 => "CD",
        ClassE = 6 => "CE",
        ClassF = 7 => "CF",
        ClassG = 8 => "CG",
        Tower = 9 => "T",
        Clearance = 10 => "CL",
        Ground = 11 => "G",
        Departure = 12 => "D",
        Approach = 13 => "A",
        Moa = 14 => "M",
        Restricted = 15 => "R",
        Prohibited = 16 => "P",
        Warning = 17 => "W",
        Alert = 18 => "AL",
        Danger = 19 => "DA",
        NationalPark = 20 => "NP",
        ModeC = 21 => "MD",
        Radar = 22 => "RD",
        Training = 23 => "TR",
    }
}

code_table! {
    pub enum AltitudeType: u8 {
        Unspecified = 0 => "UNKNOWN",
        MeanSeaLevel = 1 => "MSL",
        AboveGroundLevel = 2 => "AGL",
        Unlimited = 3 => "UL",
    }
}

code_table! {
    pub enum BoundaryLineType: u16 {
        Start = 1 => "START",
        Line = 2 => "LINE",
        Origin = 3 => "ORIGIN",
        ArcClockwise = 4 => "ARC_CW",
        ArcCounterClockwise = 5 => "ARC_CCW",
        Circle = 6 => "CIRCLE",
    }
}

code_table! {
    pub enum VasiType: u16 {
        Vasi21 = 1 => "VASI21",
        Vasi31 = 2 => "VASI31",
        Vasi22 = 3 => "VASI22",
        Vasi32 = 4 => "VASI32",
        Vasi23 = 5 => "VASI23",
        Vasi33 = 6 => "VASI33",
        Papi2 = 7 => "PAPI2",
        Papi4 = 8 => "PAPI4",
        Tricolor = 9 => "TRICOLOR",
        Pvasi = 10 => "PVASI",
        Tvasi = 11 => "TVASI",
        Ball = 12 => "BALL",
        ApapPanels = 13 => "APAP",
    }
}

code_table! {
    pub enum ApproachLightSystem: u8 {
        None = 0 => "NONE",
        Odals = 1 => "ODALS",
        Malsf = 2 => "MALSF",
        Malsr = 3 => "MALSR",
        Ssalf = 4 => "SSALF",
        Ssalr = 5 => "SSALR",
        Alsf1 = 6 => "ALSF1",
        Alsf2 = 7 => "ALSF2",
        Rail = 8 => "RAIL",
        Calvert = 9 => "CALVERT",
        Calvert2 = 10 => "CALVERT2",
        Mals = 11 => "MALS",
        Sals = 12 => "SALS",
        Salsf = 13 => "SALSF",
        Ssals = 14 => "SSALS",
    }
}

code_table! {
    pub enum WaypointType: u8 {
        Named = 1 => "N",
        Unnamed = 2 => "U",
        Vor = 3 => "V",
        Ndb = 4 => "NDB",
        OffRoute = 5 => "OA",
        Iaf = 6 => "IAF",
        Faf = 7 => "FAF",
    }
}

code_table! {
    pub enum RouteType: u8 {
        Victor = 1 => "V",
        Jet = 2 => "J",
        Both = 3 => "B",
    }
}

code_table! {
    /// Intensity of runway edge and center lights.
    pub enum LightIntensity: u8 {
        None = 0 => "",
        Low = 1 => "L",
        Medium = 2 => "M",
        High = 3 => "H",
    }
}

code_table! {
    /// Runway designator letter following the runway number.
    pub enum RunwayDesignator: u8 {
        None = 0 => "",
        Left = 1 => "L",
        Right = 2 => "R",
        Center = 3 => "C",
        Water = 4 => "W",
        A = 5 => "A",
        B = 6 => "B",
    }
}

/// Returns the runway name for a runway number and designator.
///
/// Numbers 1 to 36 are headings and padded to two digits, 37 to 44 are the
/// compass directions used by water runways and helipads.
pub fn runway_name(number: u8, designator: RunwayDesignator) -> String {
    let number = match number {
        1..=36 => format!("{number:02}"),
        37 => "N".to_string(),
        38 => "NE".to_string(),
        39 => "E".to_string(),
        40 => "SE".to_string(),
        41 => "S".to_string(),
        42 => "SW".to_string(),
        43 => "W".to_string(),
        44 => "NW".to_string(),
        _ => String::new(),
    };

    format!("{number}{}", designator.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_strings() {
        assert_eq!(Surface::from(4), Surface::Asphalt);
        assert_eq!(Surface::Asphalt.as_str(), "A");
        assert_eq!(ComType::from(6).as_str(), "T");
        assert_eq!(LegType::from(18).as_str(), "TF");
        assert_eq!(ParkingName::from(14).as_str(), "GC");
        assert_eq!(FixType::from(6), FixType::TerminalWaypoint);
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let surface = Surface::from(99);
        assert_eq!(surface, Surface::Unknown(99));
        assert_eq!(surface.code(), 99);
        assert_eq!(surface.as_str(), "");
        assert_eq!(LegType::from(0), LegType::Unknown(0));
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..=40u8 {
            assert_eq!(LegType::from(code).code(), code);
            assert_eq!(ApproachType::from(code).code(), code);
            assert_eq!(ParkingName::from(code).code(), code);
        }
    }

    #[test]
    fn formats_runway_names() {
        assert_eq!(runway_name(4, RunwayDesignator::Left), "04L");
        assert_eq!(runway_name(22, RunwayDesignator::None), "22");
        assert_eq!(runway_name(37, RunwayDesignator::Water), "NW");
        assert_eq!(runway_name(0, RunwayDesignator::None), "");
    }
}
