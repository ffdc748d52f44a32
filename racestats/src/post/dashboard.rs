use crate::core::entrants::{build_split_series, gm_zone_boundary, total_entrants_series, SplitSeries};
use crate::core::finishes::build_finish_series;
use crate::core::lookup::YearLookup;
use crate::core::model_usage::{build_model_usage_points, visible_models};
use crate::core::podium::{build_podium_points, find_sweeps};
use crate::core::race_time::build_race_times;
use crate::core::record::RaceYearRecord;
use crate::core::reference::ReferenceData;
use crate::core::years::YearAxis;
use crate::interfaces::chart_interface::{
    FinishSeries, ModelRow, ModelUsagePoint, PodiumPoint, RaceTimePoint, SweepMarker,
};
use log::{error, info};
use std::fmt::Write;

/// Dashboard contains the chart-ready data of all charts. All series share the same year axis.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub axis: YearAxis,
    pub totals: Vec<i64>,
    pub split_series: Vec<SplitSeries>,
    pub gm_zone_boundary: Option<usize>,
    pub finish_series: Vec<FinishSeries>,
    pub race_times: Vec<RaceTimePoint>,
    pub podium_points: Vec<PodiumPoint>,
    pub sweeps: Vec<SweepMarker>,
    pub model_rows: Vec<ModelRow>,
    pub model_usage_points: Vec<ModelUsagePoint>,
}

/// build_dashboard prepares the data of all charts. If the record collection is missing, this is
/// logged and None is returned, i.e. no chart is built at all.
pub fn build_dashboard(
    reference: &ReferenceData,
    records: Option<&[RaceYearRecord]>,
) -> Option<Dashboard> {
    let records = match records {
        Some(records) => records,
        None => {
            error!("No race records found, chart construction is skipped!");
            return None;
        }
    };

    let axis = &reference.axis;
    let lookup = YearLookup::new(records);
    info!(
        "Preparing charts from {} race records ({} distinct years)",
        records.len(),
        lookup.len()
    );

    // ENTRANTS (reference data only) --------------------------------------------------------------
    let totals = total_entrants_series(reference);
    let split_series = build_split_series(reference);

    // RESULTS (race records) ----------------------------------------------------------------------
    let finish_series = build_finish_series(axis, &lookup);
    let race_times = build_race_times(axis, &lookup);
    let podium_points = build_podium_points(axis, &lookup);
    let sweeps = find_sweeps(axis, &lookup);
    let model_rows = visible_models(axis, &lookup);
    let model_usage_points = build_model_usage_points(axis, &lookup, &model_rows);

    info!(
        "Prepared {} podium points, {} sweeps, {} visible models",
        podium_points.len(),
        sweeps.len(),
        model_rows.len()
    );

    Some(Dashboard {
        axis: axis.to_owned(),
        totals,
        split_series,
        gm_zone_boundary: gm_zone_boundary(reference),
        finish_series,
        race_times,
        podium_points,
        sweeps,
        model_rows,
        model_usage_points,
    })
}

impl Dashboard {
    /// print_summary prints entrants, winner's race time and podium per year to the console output.
    pub fn print_summary(&self) {
        println!("RESULT: Summary per year");
        println!("{}", self.summary_table());

        if self.sweeps.is_empty() {
            println!("RESULT: No podium sweeps");
        } else {
            let sweeps: Vec<String> = self
                .sweeps
                .iter()
                .map(|s| format!("{} ({})", s.custom.year, s.custom.name))
                .collect();
            println!("RESULT: Podium sweeps: {}", sweeps.join(", "));
        }
    }

    /// summary_table creates the table printed by print_summary.
    pub fn summary_table(&self) -> String {
        let mut tmp_string = String::from("year, entrants,   race time, podium\n");

        for (idx, year) in self.axis.iter() {
            let mut podium: Vec<&PodiumPoint> =
                self.podium_points.iter().filter(|p| p.x == idx).collect();
            podium.sort_by_key(|p| p.y);
            let podium: Vec<&str> = podium.iter().map(|p| p.custom.letter.as_str()).collect();

            let race_time = self
                .race_times
                .get(idx)
                .map_or("", |p| p.custom.time.as_str());

            writeln!(
                &mut tmp_string,
                "{}, {:8}, {:>11}, {}",
                year,
                self.totals.get(idx).copied().unwrap_or(0),
                race_time,
                podium.join("-")
            )
            .unwrap();
        }

        tmp_string
    }
}
