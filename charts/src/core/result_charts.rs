use crate::core::config::{
    Axis, AxisLabels, Chart, ChartConfig, ChartOpts, ChartType, Color, ColorAxis, DataLabels,
    DataPoint, LabelStyle, Legend, Marker, PlotOptions, Series, SeriesOptions, Title, Toggle,
    Tooltip,
};
use crate::interfaces::racestats_interface::to_data_points;
use helpers::time::format_duration;
use racestats::core::race_time::{time_ticks, TIME_TICK_STEP};
use racestats::core::record::PODIUM_POSITIONS;
use racestats::post::dashboard::Dashboard;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// White color axis: heatmap cells are colored per point, not by value.
fn white_color_axis() -> Option<ColorAxis> {
    Some(ColorAxis {
        min: 0.0,
        min_color: "#ffffff",
        max_color: "#ffffff",
    })
}

fn year_axis(dashboard: &Dashboard, title: Option<&str>) -> Axis {
    Axis {
        categories: Some(dashboard.axis.categories().to_vec()),
        title: title.map(Title::new),
        ..Default::default()
    }
}

/// finishes_chart creates chart 4: stacked columns of all result types per year.
pub fn finishes_chart(dashboard: &Dashboard) -> Chart {
    let series = dashboard
        .finish_series
        .iter()
        .map(|s| Series {
            name: s.outcome.key().to_owned(),
            data: s.data.iter().map(|&v| DataPoint::Value(v)).collect(),
            color: Some(Color::solid(s.outcome.color())),
            ..Default::default()
        })
        .collect();

    Chart {
        container: "finishes-by-year",
        options: ChartConfig {
            chart: ChartOpts {
                chart_type: ChartType::Column,
            },
            title: Title::new("Chart 4: Result Types per Year"),
            x_axis: vec![Axis {
                tickmark_placement: Some("on"),
                ..year_axis(dashboard, None)
            }],
            y_axis: Axis {
                title: Some(Title::new("Count")),
                allow_decimals: Some(false),
                stack_labels: Some(Toggle { enabled: true }),
                ..Default::default()
            },
            legend: Legend {
                enabled: true,
                item_distance: Some(12),
            },
            tooltip: Tooltip {
                shared: Some(true),
                ..Default::default()
            },
            color_axis: None,
            plot_options: PlotOptions {
                column: Some(SeriesOptions {
                    stacking: Some("normal"),
                    border_width: Some(0),
                    group_padding: Some(0.08),
                    point_padding: Some(0.04),
                    ..Default::default()
                }),
                ..Default::default()
            },
            series,
        },
    }
}

/// race_time_chart creates chart 6: the winner's race time per year. The value axis shows the
/// times formatted as H:MM:SS.ff, years without a valid time result in gaps.
pub fn race_time_chart(dashboard: &Dashboard) -> Chart {
    let tick_positions = time_ticks(&dashboard.race_times, TIME_TICK_STEP);
    let tick_labels = tick_positions
        .iter()
        .map(|&t| format_duration(Some(t)))
        .collect();

    Chart {
        container: "race-time-total",
        options: ChartConfig {
            chart: ChartOpts {
                chart_type: ChartType::Line,
            },
            title: Title::new("Chart 6: Winners Race Time"),
            x_axis: vec![year_axis(dashboard, None)],
            y_axis: Axis {
                title: Some(Title::new("Time (hh:mm:ss)")),
                tick_positions: Some(tick_positions),
                labels: Some(AxisLabels {
                    tick_labels: Some(tick_labels),
                    ..Default::default()
                }),
                ..Default::default()
            },
            legend: Legend {
                enabled: false,
                item_distance: None,
            },
            tooltip: Tooltip::point_only(
                "<b>{point.custom.year}</b><br/>Total time: <b>{point.custom.time}</b>",
                true,
            ),
            color_axis: None,
            plot_options: PlotOptions {
                series: Some(SeriesOptions {
                    marker: Some(Marker {
                        enabled: Some(true),
                        radius: Some(3),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            series: vec![Series {
                name: "Total Time".to_owned(),
                data: to_data_points(&dashboard.race_times),
                ..Default::default()
            }],
        },
    }
}

/// podium_chart creates chart 5: a heatmap with one row per podium position (1st at the top) and a
/// star marker for every podium sweep.
pub fn podium_chart(dashboard: &Dashboard) -> Chart {
    let podium_series = Series {
        name: "Podium".to_owned(),
        data: to_data_points(&dashboard.podium_points),
        null_color: Some(TRANSPARENT),
        data_labels: Some(DataLabels {
            enabled: Some(true),
            format: Some("{point.custom.letter}"),
            style: Some(LabelStyle {
                color: "#ffffff",
                font_weight: "700",
                text_outline: "0px rgba(0,0,0,0.75)",
            }),
        }),
        ..Default::default()
    };
    let sweep_series = Series {
        name: "Sweep".to_owned(),
        series_type: Some(ChartType::Scatter),
        data: to_data_points(&dashboard.sweeps),
        tooltip: Some(Tooltip {
            point_format: Some("<b>★ {point.custom.name} sweep</b>".to_owned()),
            ..Default::default()
        }),
        ..Default::default()
    };

    Chart {
        container: "podium-by-make",
        options: ChartConfig {
            chart: ChartOpts {
                chart_type: ChartType::Heatmap,
            },
            title: Title::new("Chart 5: Podium by Manufacturer (1st/2nd/3rd)"),
            x_axis: vec![year_axis(dashboard, Some("Year"))],
            y_axis: Axis {
                categories: Some(
                    PODIUM_POSITIONS
                        .iter()
                        .map(|p| p.label().to_owned())
                        .collect(),
                ),
                title: Some(Title::default()),
                reversed: Some(true),
                grid_line_width: Some(0),
                ..Default::default()
            },
            legend: Legend {
                enabled: false,
                item_distance: None,
            },
            tooltip: Tooltip::point_only(
                "<b>{point.custom.year}</b><br/>{point.custom.position}: <b>{point.custom.who}</b>",
                true,
            ),
            color_axis: white_color_axis(),
            plot_options: PlotOptions {
                series: Some(SeriesOptions {
                    border_width: Some(1),
                    border_color: Some("#e0e0e0"),
                    ..Default::default()
                }),
                ..Default::default()
            },
            series: vec![podium_series, sweep_series],
        },
    }
}

/// model_usage_chart creates chart 3: a heatmap with one row per model that was used at least once.
pub fn model_usage_chart(dashboard: &Dashboard) -> Chart {
    Chart {
        container: "makes-over-years",
        options: ChartConfig {
            chart: ChartOpts {
                chart_type: ChartType::Heatmap,
            },
            title: Title::new("Chart 3: Models Used by Year"),
            x_axis: vec![year_axis(dashboard, Some("Year"))],
            y_axis: Axis {
                categories: Some(dashboard.model_rows.iter().map(|r| r.label()).collect()),
                title: Some(Title::new("Model")),
                reversed: Some(true),
                ..Default::default()
            },
            legend: Legend {
                enabled: false,
                item_distance: None,
            },
            tooltip: Tooltip::point_only(
                "<b>{point.custom.model}</b> ({point.custom.make})<br/>{point.custom.year}: \
                <b>{point.custom.count}</b>",
                true,
            ),
            color_axis: white_color_axis(),
            plot_options: PlotOptions {
                series: Some(SeriesOptions {
                    border_width: Some(1),
                    ..Default::default()
                }),
                ..Default::default()
            },
            series: vec![Series {
                name: "Usage".to_owned(),
                data: to_data_points(&dashboard.model_usage_points),
                null_color: Some(TRANSPARENT),
                ..Default::default()
            }],
        },
    }
}
