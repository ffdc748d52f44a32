use crate::core::lookup::YearLookup;
use crate::core::makes::MODEL_CATALOGUE;
use crate::core::years::YearAxis;
use crate::interfaces::chart_interface::{ModelRow, ModelUsageInfo, ModelUsagePoint};

/// visible_models filters the model catalogue to those models that were used in at least one year
/// on the axis. The catalogue order is kept.
pub fn visible_models(axis: &YearAxis, lookup: &YearLookup) -> Vec<ModelRow> {
    let mut rows = vec![];

    for &(make, models) in MODEL_CATALOGUE.iter() {
        for &model in models.iter() {
            let used = axis
                .iter()
                .any(|(_, year)| lookup.get(year).map_or(0.0, |r| r.usage(model)) > 0.0);

            if used {
                rows.push(ModelRow { make, model });
            }
        }
    }

    rows
}

/// build_model_usage_points creates a heatmap point for every visible model and year in which the
/// model was used. The row of a point is the index of its model in rows.
pub fn build_model_usage_points(
    axis: &YearAxis,
    lookup: &YearLookup,
    rows: &[ModelRow],
) -> Vec<ModelUsagePoint> {
    let mut points = vec![];

    for (row_idx, row) in rows.iter().enumerate() {
        for (x, year) in axis.iter() {
            let count = lookup.get(year).map_or(0.0, |r| r.usage(row.model));

            if count > 0.0 {
                points.push(ModelUsagePoint {
                    x,
                    y: row_idx,
                    value: count,
                    color: row.make.color(),
                    custom: ModelUsageInfo {
                        make: row.make,
                        model: row.model,
                        year: year.to_owned(),
                        count,
                    },
                });
            }
        }
    }

    points
}
