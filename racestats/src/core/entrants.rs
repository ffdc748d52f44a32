use crate::core::reference::{EntrantClass, ReferenceData, ENTRANT_CLASSES};
use crate::interfaces::chart_interface::{EntrantInfo, EntrantPoint};

/// First season in which the GM entries raced as Chevrolet instead of Holden.
pub const CHEVROLET_FIRST_YEAR: u32 = 2023;

/// total_entrants returns the number of entrants in the year at position idx. Ford side values are
/// stored negative and must therefore be summed up as absolute values.
pub fn total_entrants(data: &ReferenceData, idx: usize) -> i64 {
    let left_extras = data.nissan[idx].abs()
        + data.mercedes[idx].abs()
        + data.volvo[idx].abs()
        + data.ford_privateer[idx].abs()
        + data.ford_special_level_1[idx].abs()
        + data.ford_level_2[idx].abs();
    let right_extras =
        data.holden_privateer[idx] + data.holden_special_level_1[idx] + data.holden_level_2[idx];

    data.ford[idx].abs() + data.gm[idx] + left_extras + right_extras
}

/// total_entrants_series returns the total number of entrants for every year on the axis.
pub fn total_entrants_series(data: &ReferenceData) -> Vec<i64> {
    (0..data.axis.len())
        .map(|idx| total_entrants(data, idx))
        .collect()
}

/// SplitSeries contains the points of one make/class series of the split entrants chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSeries {
    pub class: EntrantClass,
    pub points: Vec<EntrantPoint>,
}

/// build_split_series creates the eleven make/class series in declaration order. The sign of the
/// values is kept, it determines the side of the chart.
pub fn build_split_series(data: &ReferenceData) -> Vec<SplitSeries> {
    let mut split_series = Vec::with_capacity(ENTRANT_CLASSES.len());

    for &class in ENTRANT_CLASSES.iter() {
        let points = data
            .values(class)
            .iter()
            .enumerate()
            .map(|(x, &y)| {
                let year = data.axis.label(x).unwrap_or_default().to_owned();

                EntrantPoint {
                    x,
                    y,
                    custom: EntrantInfo {
                        label: class_label(class, &year).to_owned(),
                        year,
                        entrants: y.abs(),
                    },
                }
            })
            .collect();

        split_series.push(SplitSeries { class, points });
    }

    split_series
}

/// gm_zone_boundary returns the axis index from which the GM series is colored as Chevrolet.
pub fn gm_zone_boundary(data: &ReferenceData) -> Option<usize> {
    data.axis.index_of(CHEVROLET_FIRST_YEAR)
}

/// class_label returns the display name of a class in a specific year. The combined GM series is
/// labelled Holden until 2022 and Chevrolet afterwards.
fn class_label(class: EntrantClass, year: &str) -> &'static str {
    if class != EntrantClass::HoldenChevrolet {
        return class.name();
    }

    match year.parse::<u32>() {
        Ok(y) if y >= CHEVROLET_FIRST_YEAR => "Chevrolet",
        _ => "Holden",
    }
}
