use crate::core::lookup::YearLookup;
use crate::core::record::OUTCOMES;
use crate::core::years::YearAxis;
use crate::interfaces::chart_interface::FinishSeries;

/// build_finish_series creates one series per result type containing the count for every year on
/// the axis. Years without a record and non-numeric fields count as zero.
pub fn build_finish_series(axis: &YearAxis, lookup: &YearLookup) -> Vec<FinishSeries> {
    OUTCOMES
        .iter()
        .map(|&outcome| FinishSeries {
            outcome,
            data: axis
                .iter()
                .map(|(_, year)| lookup.get(year).map_or(0, |r| r.outcome_count(outcome)))
                .collect(),
        })
        .collect()
}
