use crate::core::lookup::YearLookup;
use crate::core::years::YearAxis;
use crate::interfaces::chart_interface::{RaceTimeInfo, RaceTimePoint};
use helpers::time::{format_duration, parse_duration};

/// Distance between two ticks of the race time axis (15 minutes).
pub const TIME_TICK_STEP: f64 = 900.0;

/// Maximum number of ticks on the race time axis.
pub const MAX_TIME_TICKS: usize = 25;

/// build_race_times returns the winner's race time in seconds for every year on the axis. Years
/// without a record or with a malformed time result in None.
pub fn build_race_times(axis: &YearAxis, lookup: &YearLookup) -> Vec<RaceTimePoint> {
    axis.iter()
        .map(|(x, year)| {
            let y = lookup
                .get(year)
                .and_then(|record| parse_duration(record.race_time()));

            RaceTimePoint {
                x,
                y,
                custom: RaceTimeInfo {
                    year: year.to_owned(),
                    time: format_duration(y),
                },
            }
        })
        .collect()
}

/// time_ticks returns evenly spaced tick positions that enclose all available race times. The
/// distance between the ticks starts at step and is doubled until at most MAX_TIME_TICKS ticks are
/// required. The result is empty if there is no race time at all.
pub fn time_ticks(points: &[RaceTimePoint], step: f64) -> Vec<f64> {
    let mut times = points.iter().filter_map(|p| p.y);

    let first = match times.next() {
        Some(t) => t,
        None => return vec![],
    };
    let (t_min, t_max) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));

    let mut step = step;
    while ((t_max / step).ceil() - (t_min / step).floor()) as usize + 1 > MAX_TIME_TICKS
        && (step * 2.0).is_finite()
    {
        step *= 2.0;
    }

    let idx_min = (t_min / step).floor() as i64;
    let idx_max = (t_max / step).ceil() as i64;

    (idx_min..=idx_max).map(|i| i as f64 * step).collect()
}
