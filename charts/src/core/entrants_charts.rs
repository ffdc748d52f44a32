use crate::core::config::{
    Axis, AxisLabels, Chart, ChartConfig, ChartOpts, ChartType, Color, DataLabels, DataPoint,
    Gradient, Legend, PlotOptions, Series, SeriesOptions, Title, Tooltip, Zone,
};
use crate::interfaces::racestats_interface::to_data_points;
use racestats::core::makes::Make;
use racestats::core::reference::EntrantClass;
use racestats::post::dashboard::Dashboard;

/// Distance between two ticks of the entrants axis of the split chart.
const ENTRANTS_TICK_STEP: i64 = 5;

/// totals_chart creates chart 1: a column per year containing the total number of entrants.
pub fn totals_chart(dashboard: &Dashboard) -> Chart {
    let series = Series {
        name: "Total".to_owned(),
        data: dashboard.totals.iter().map(|&t| DataPoint::Value(t)).collect(),
        color: Some(Color::solid("#6e7a8a")),
        data_labels: Some(DataLabels {
            enabled: Some(true),
            format: Some("{point.y:,.0f}"),
            ..Default::default()
        }),
        ..Default::default()
    };

    Chart {
        container: "totals-container",
        options: ChartConfig {
            chart: ChartOpts {
                chart_type: ChartType::Column,
            },
            title: Title::new("Chart 1: Bathurst Supercar Entrants — Total per Year"),
            x_axis: vec![Axis {
                categories: Some(dashboard.axis.categories().to_vec()),
                tickmark_placement: Some("on"),
                ..Default::default()
            }],
            y_axis: Axis {
                title: Some(Title::new("Entrants")),
                allow_decimals: Some(false),
                ..Default::default()
            },
            legend: Legend {
                enabled: false,
                item_distance: None,
            },
            tooltip: Tooltip {
                point_format: Some("<b>{point.y}</b> entrants".to_owned()),
                ..Default::default()
            },
            color_axis: None,
            plot_options: PlotOptions {
                column: Some(SeriesOptions {
                    border_width: Some(0),
                    point_padding: Some(0.1),
                    group_padding: Some(0.05),
                    ..Default::default()
                }),
                ..Default::default()
            },
            series: vec![series],
        },
    }
}

/// split_chart creates chart 2: entrants per make and class, Ford side on the left (negative
/// values) and GM side on the right. The combined Holden/Chevrolet series changes its color at the
/// year GM switched to Chevrolet.
pub fn split_chart(dashboard: &Dashboard) -> Chart {
    let mut series_all = Vec::with_capacity(dashboard.split_series.len());

    for split_series in dashboard.split_series.iter() {
        let class = split_series.class;
        let mut series = Series {
            name: class.name().to_owned(),
            data: to_data_points(&split_series.points),
            color: Some(Color::solid(class.color())),
            legend_index: Some(class.legend_index()),
            ..Default::default()
        };

        if class == EntrantClass::HoldenChevrolet {
            series.color = Some(Color::Gradient(Gradient::two_tone(
                Make::Holden.color(),
                Make::Chevrolet.color(),
            )));

            if let Some(boundary) = dashboard.gm_zone_boundary {
                series.zone_axis = Some("x");
                series.zones = Some(vec![
                    Zone {
                        value: Some(boundary),
                        color: Make::Holden.color().to_owned(),
                    },
                    Zone {
                        value: None,
                        color: Make::Chevrolet.color().to_owned(),
                    },
                ]);
            }
        }

        series_all.push(series);
    }

    let (tick_positions, tick_labels) = entrants_ticks(dashboard);
    let year_axis = Axis {
        categories: Some(dashboard.axis.categories().to_vec()),
        reversed: Some(true),
        labels: Some(AxisLabels {
            step: Some(1),
            ..Default::default()
        }),
        tickmark_placement: Some("between"),
        ..Default::default()
    };

    Chart {
        container: "container",
        options: ChartConfig {
            chart: ChartOpts {
                chart_type: ChartType::Bar,
            },
            title: Title::new("Chart 2: Bathurst Supercar Entrants: Makes and Classes"),
            x_axis: vec![
                year_axis.clone(),
                Axis {
                    opposite: Some(true),
                    linked_to: Some(0),
                    ..year_axis
                },
            ],
            y_axis: Axis {
                title: Some(Title::default()),
                tick_positions: Some(tick_positions),
                labels: Some(AxisLabels {
                    tick_labels: Some(tick_labels),
                    ..Default::default()
                }),
                reversed_stacks: Some(false),
                ..Default::default()
            },
            legend: Legend {
                enabled: true,
                item_distance: None,
            },
            tooltip: Tooltip::point_only(
                "<b>{point.custom.label}, {point.custom.year}</b><br/>Entrants: \
                {point.custom.entrants}",
                false,
            ),
            color_axis: None,
            plot_options: PlotOptions {
                series: Some(SeriesOptions {
                    stacking: Some("normal"),
                    border_width: Some(0),
                    group_padding: Some(0.0),
                    point_padding: Some(0.0),
                    point_width: Some(8),
                    animation: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            },
            series: series_all,
        },
    }
}

/// entrants_ticks returns the tick positions of the split chart's value axis covering both sides,
/// and the corresponding labels showing the absolute number of entrants.
pub fn entrants_ticks(dashboard: &Dashboard) -> (Vec<f64>, Vec<String>) {
    let no_years = dashboard.axis.len();
    let mut left_max = 0;
    let mut right_max = 0;

    for idx in 0..no_years {
        let (left, right) = dashboard
            .split_series
            .iter()
            .filter_map(|s| s.points.get(idx))
            .fold((0, 0), |(l, r), p| {
                if p.y < 0 {
                    (l - p.y, r)
                } else {
                    (l, r + p.y)
                }
            });
        left_max = left_max.max(left);
        right_max = right_max.max(right);
    }

    let idx_min = -((left_max + ENTRANTS_TICK_STEP - 1) / ENTRANTS_TICK_STEP);
    let idx_max = (right_max + ENTRANTS_TICK_STEP - 1) / ENTRANTS_TICK_STEP;

    (idx_min..=idx_max)
        .map(|i| {
            let tick = i * ENTRANTS_TICK_STEP;
            (tick as f64, tick.abs().to_string())
        })
        .unzip()
}
