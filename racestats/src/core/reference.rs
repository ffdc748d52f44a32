use crate::core::years::YearAxis;

// BASE ENTRANTS (1995 - 2025) ---------------------------------------------------------------------
// Ford values are negative since Ford is drawn on the left side of the split chart.
const FORD_VALS: [i64; 31] = [
    -8, -12, -6, -11, -12, -23, -21, -21, -19, -16, -16, -15, -16, -13, -13, -11, -11, -11, -6, -7,
    -6, -6, -6, -7, -6, -8, -8, -9, -13, -10, -11,
];
const GM_VALS: [i64; 31] = [
    24, 24, 9, 16, 16, 33, 20, 19, 21, 19, 18, 16, 15, 16, 19, 20, 18, 18, 16, 11, 13, 14, 16, 15,
    16, 17, 17, 19, 15, 16, 16,
];

// FURTHER MAKES AND CLASSES (year, entrants) ------------------------------------------------------
const NISSAN_VALS: [(u32, i64); 7] = [
    (2013, -4),
    (2014, -4),
    (2015, -4),
    (2016, -5),
    (2017, -4),
    (2018, -4),
    (2019, -4),
];
const MERCEDES_VALS: [(u32, i64); 3] = [(2013, -3), (2014, -2), (2015, -2)];
const VOLVO_VALS: [(u32, i64); 3] = [(2014, -2), (2015, -2), (2016, -2)];
const FORD_PRIVATEER_VALS: [(u32, i64); 2] = [(1998, -4), (1999, -8)];
const HOLDEN_PRIVATEER_VALS: [(u32, i64); 2] = [(1998, 14), (1999, 21)];
const FORD_SPECIAL_LEVEL_1_VALS: [(u32, i64); 1] = [(1997, 0)];
const FORD_LEVEL_2_VALS: [(u32, i64); 1] = [(1997, -3)];
const HOLDEN_SPECIAL_LEVEL_1_VALS: [(u32, i64); 1] = [(1997, 6)];
const HOLDEN_LEVEL_2_VALS: [(u32, i64); 1] = [(1997, 17)];

/// ReferenceData contains the hand-curated entrant counts per year, make and class. All arrays
/// are indexed by the position of a year on the contained axis. Ford side values are stored with a
/// negative sign, GM side values with a positive sign.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub axis: YearAxis,
    pub ford: Vec<i64>,
    pub gm: Vec<i64>,
    pub nissan: Vec<i64>,
    pub mercedes: Vec<i64>,
    pub volvo: Vec<i64>,
    pub ford_privateer: Vec<i64>,
    pub holden_privateer: Vec<i64>,
    pub ford_special_level_1: Vec<i64>,
    pub ford_level_2: Vec<i64>,
    pub holden_special_level_1: Vec<i64>,
    pub holden_level_2: Vec<i64>,
}

impl ReferenceData {
    /// bathurst creates the reference data set for the seasons 1995 to 2025.
    pub fn bathurst() -> ReferenceData {
        let axis = YearAxis::bathurst();

        ReferenceData {
            ford: FORD_VALS.to_vec(),
            gm: GM_VALS.to_vec(),
            nissan: sparse(&axis, &NISSAN_VALS),
            mercedes: sparse(&axis, &MERCEDES_VALS),
            volvo: sparse(&axis, &VOLVO_VALS),
            ford_privateer: sparse(&axis, &FORD_PRIVATEER_VALS),
            holden_privateer: sparse(&axis, &HOLDEN_PRIVATEER_VALS),
            ford_special_level_1: sparse(&axis, &FORD_SPECIAL_LEVEL_1_VALS),
            ford_level_2: sparse(&axis, &FORD_LEVEL_2_VALS),
            holden_special_level_1: sparse(&axis, &HOLDEN_SPECIAL_LEVEL_1_VALS),
            holden_level_2: sparse(&axis, &HOLDEN_LEVEL_2_VALS),
            axis,
        }
    }

    /// values returns the per-year entrant counts of the inserted class.
    pub fn values(&self, class: EntrantClass) -> &[i64] {
        match class {
            EntrantClass::Ford => &self.ford,
            EntrantClass::FordSpecialLevel1 => &self.ford_special_level_1,
            EntrantClass::FordLevel2 => &self.ford_level_2,
            EntrantClass::FordPrivateer => &self.ford_privateer,
            EntrantClass::Nissan => &self.nissan,
            EntrantClass::Mercedes => &self.mercedes,
            EntrantClass::Volvo => &self.volvo,
            EntrantClass::HoldenChevrolet => &self.gm,
            EntrantClass::HoldenSpecialLevel1 => &self.holden_special_level_1,
            EntrantClass::HoldenLevel2 => &self.holden_level_2,
            EntrantClass::HoldenPrivateer => &self.holden_privateer,
        }
    }
}

/// sparse creates a zero-filled array matching the axis and overwrites the inserted years.
fn sparse(axis: &YearAxis, entries: &[(u32, i64)]) -> Vec<i64> {
    let mut vals = vec![0; axis.len()];

    for &(year, val) in entries.iter() {
        if let Some(idx) = axis.index_of(year) {
            vals[idx] = val;
        }
    }

    vals
}

/// EntrantClass identifies one make/class series of the split entrants chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrantClass {
    Ford,
    FordSpecialLevel1,
    FordLevel2,
    FordPrivateer,
    Nissan,
    Mercedes,
    Volvo,
    HoldenChevrolet,
    HoldenSpecialLevel1,
    HoldenLevel2,
    HoldenPrivateer,
}

/// ENTRANT_CLASSES is the declaration (and therefore stacking) order of the split chart series.
pub const ENTRANT_CLASSES: [EntrantClass; 11] = [
    EntrantClass::Ford,
    EntrantClass::FordSpecialLevel1,
    EntrantClass::FordLevel2,
    EntrantClass::FordPrivateer,
    EntrantClass::Nissan,
    EntrantClass::Mercedes,
    EntrantClass::Volvo,
    EntrantClass::HoldenChevrolet,
    EntrantClass::HoldenSpecialLevel1,
    EntrantClass::HoldenLevel2,
    EntrantClass::HoldenPrivateer,
];

impl EntrantClass {
    pub fn name(&self) -> &'static str {
        match self {
            EntrantClass::Ford => "Ford",
            EntrantClass::FordSpecialLevel1 => "Ford — Special Level 1",
            EntrantClass::FordLevel2 => "Ford — Level 2",
            EntrantClass::FordPrivateer => "Ford (Privateer)",
            EntrantClass::Nissan => "Nissan",
            EntrantClass::Mercedes => "Mercedes",
            EntrantClass::Volvo => "Volvo",
            EntrantClass::HoldenChevrolet => "Holden → Chevrolet",
            EntrantClass::HoldenSpecialLevel1 => "Holden — Special Level 1",
            EntrantClass::HoldenLevel2 => "Holden — Level 2",
            EntrantClass::HoldenPrivateer => "Holden (Privateer)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EntrantClass::Ford => "#1C3F95",
            EntrantClass::FordSpecialLevel1 => "#4C7BEA",
            EntrantClass::FordLevel2 => "#9BB4F6",
            EntrantClass::FordPrivateer => "#3d6ada",
            EntrantClass::Nissan => "#FFE01A",
            EntrantClass::Mercedes => "#C0C0C0",
            EntrantClass::Volvo => "#00B7EB",
            EntrantClass::HoldenChevrolet => "#C8102E",
            EntrantClass::HoldenSpecialLevel1 => "#E04557",
            EntrantClass::HoldenLevel2 => "#F59AAA",
            EntrantClass::HoldenPrivateer => "#e55864",
        }
    }

    /// legend_index determines the position in the legend, which differs from the stacking order.
    pub fn legend_index(&self) -> u32 {
        match self {
            EntrantClass::Ford => 0,
            EntrantClass::HoldenChevrolet => 1,
            EntrantClass::Nissan => 2,
            EntrantClass::Mercedes => 3,
            EntrantClass::Volvo => 4,
            EntrantClass::FordSpecialLevel1 => 5,
            EntrantClass::HoldenSpecialLevel1 => 6,
            EntrantClass::FordLevel2 => 7,
            EntrantClass::HoldenLevel2 => 8,
            EntrantClass::FordPrivateer => 9,
            EntrantClass::HoldenPrivateer => 10,
        }
    }

    /// is_ford_side is true for all classes drawn on the left (negative) side of the split chart.
    pub fn is_ford_side(&self) -> bool {
        matches!(
            self,
            EntrantClass::Ford
                | EntrantClass::FordSpecialLevel1
                | EntrantClass::FordLevel2
                | EntrantClass::FordPrivateer
                | EntrantClass::Nissan
                | EntrantClass::Mercedes
                | EntrantClass::Volvo
        )
    }
}
