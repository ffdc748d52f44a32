use crate::core::makes::Make;
use crate::core::record::Outcome;
use serde::Serialize;

// The structs in this module form the data handed over to the charting library. Fields named
// `custom` carry the metadata required to build tooltips without recalculation.

// ENTRANTS ----------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrantInfo {
    pub year: String,
    pub label: String,
    pub entrants: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrantPoint {
    pub x: usize,
    pub y: i64,
    pub custom: EntrantInfo,
}

// RESULTS -----------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct FinishSeries {
    pub outcome: Outcome,
    pub data: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceTimeInfo {
    pub year: String,
    pub time: String,
}

/// RaceTimePoint contains the winner's race time in seconds, None results in a gap in the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceTimePoint {
    pub x: usize,
    pub y: Option<f64>,
    pub custom: RaceTimeInfo,
}

// HEATMAPS ----------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapPoint<T> {
    pub x: usize,
    pub y: usize,
    pub value: f64,
    pub color: &'static str,
    pub custom: T,
}

/// * `pos` - Podium position (1, 2, 3)
/// * `position` - Podium position label (1st, 2nd, 3rd)
/// * `letter` - Raw make code as contained in the input
/// * `make` - Decoded make (None for unmapped codes)
/// * `who` - Display text, e.g. "Holden (H)" or the raw code if it is unmapped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodiumInfo {
    pub year: String,
    pub pos: u8,
    pub position: &'static str,
    pub letter: String,
    pub make: Option<Make>,
    pub who: String,
}

pub type PodiumPoint = HeatmapPoint<PodiumInfo>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepInfo {
    pub year: String,
    pub letter: String,
    pub make: Option<Make>,
    pub name: String,
}

/// SweepMarker marks a year in which a single make took all three podium positions. It is placed
/// in the middle row of the podium heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepMarker {
    pub x: usize,
    pub y: usize,
    pub color: &'static str,
    pub custom: SweepInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRow {
    pub make: Make,
    pub model: &'static str,
}

impl ModelRow {
    pub fn label(&self) -> String {
        format!("{} ({})", self.model, self.make.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelUsageInfo {
    pub make: Make,
    pub model: &'static str,
    pub year: String,
    pub count: f64,
}

pub type ModelUsagePoint = HeatmapPoint<ModelUsageInfo>;
