use crate::core::lookup::YearLookup;
use crate::core::makes::{color_of, Make};
use crate::core::record::{PodiumPosition, PODIUM_POSITIONS};
use crate::core::years::YearAxis;
use crate::interfaces::chart_interface::{PodiumInfo, PodiumPoint, SweepInfo, SweepMarker};

/// Heatmap row at which sweep markers are placed (2nd place row).
pub const SWEEP_ROW: usize = 1;

/// build_podium_points creates a heatmap point for every occupied podium position. Positions
/// without a make code do not result in a point at all.
pub fn build_podium_points(axis: &YearAxis, lookup: &YearLookup) -> Vec<PodiumPoint> {
    let mut points = vec![];

    for (x, year) in axis.iter() {
        let record = match lookup.get(year) {
            Some(record) => record,
            None => continue,
        };

        for &position in PODIUM_POSITIONS.iter() {
            let letter = match record.podium_code(position) {
                Some(letter) => letter,
                None => continue,
            };
            let make = Make::from_letter(&letter);

            points.push(PodiumPoint {
                x,
                y: position.row(),
                value: 1.0,
                color: color_of(make),
                custom: PodiumInfo {
                    year: year.to_owned(),
                    pos: position.number(),
                    position: position.label(),
                    who: podium_display_name(make, &letter),
                    letter,
                    make,
                },
            });
        }
    }

    points
}

/// find_sweeps returns a marker for every year in which positions 1, 2 and 3 carry the same make
/// code.
pub fn find_sweeps(axis: &YearAxis, lookup: &YearLookup) -> Vec<SweepMarker> {
    axis.iter()
        .filter_map(|(x, year)| {
            let record = lookup.get(year)?;
            let first = record.podium_code(PodiumPosition::First)?;

            if record.podium_code(PodiumPosition::Second).as_ref() != Some(&first)
                || record.podium_code(PodiumPosition::Third).as_ref() != Some(&first)
            {
                return None;
            }

            let make = Make::from_letter(&first);

            Some(SweepMarker {
                x,
                y: SWEEP_ROW,
                color: color_of(make),
                custom: SweepInfo {
                    year: year.to_owned(),
                    name: make.map_or(first.to_owned(), |m| m.name().to_owned()),
                    letter: first,
                    make,
                },
            })
        })
        .collect()
}

/// podium_display_name returns e.g. "Holden (H)", or the raw code if it cannot be mapped.
fn podium_display_name(make: Option<Make>, letter: &str) -> String {
    match make {
        Some(make) => format!("{} ({})", make.name(), letter),
        None => letter.to_owned(),
    }
}
