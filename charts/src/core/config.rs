use serde::Serialize;
use serde_json::Value;

// The structs in this module mirror the subset of the Highcharts options used by the dashboard.
// Unset options are not serialized such that the library defaults apply.

/// Chart combines the options of a chart with the id of the HTML container it is rendered into.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub container: &'static str,
    pub options: ChartConfig,
}

/// ChartDocument is the JSON output: the shared year categories and all charts in render order.
#[derive(Debug, Clone, Serialize)]
pub struct ChartDocument {
    pub categories: Vec<String>,
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart: ChartOpts,
    pub title: Title,
    pub x_axis: Vec<Axis>,
    pub y_axis: Axis,
    pub legend: Legend,
    pub tooltip: Tooltip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<ColorAxis>,
    pub plot_options: PlotOptions,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Column,
    Heatmap,
    Line,
    Scatter,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOpts {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Title {
    pub text: Option<String>,
}

impl Title {
    pub fn new(text: &str) -> Title {
        Title {
            text: Some(text.to_owned()),
        }
    }
}

// AXES --------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_to: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmark_placement: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_positions: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<AxisLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_decimals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed_stacks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_labels: Option<Toggle>,
}

/// AxisLabels.tick_labels is not a Highcharts option: it contains the precomputed label of every
/// entry in tick_positions and is turned into a label formatter by the HTML page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAxis {
    pub min: f64,
    pub min_color: &'static str,
    pub max_color: &'static str,
}

// LEGEND, TOOLTIP, PLOT OPTIONS -------------------------------------------------------------------
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_distance: Option<u32>,
}

/// Tooltip contents are Highcharts format strings, e.g. `{point.custom.year}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(rename = "useHTML", skip_serializing_if = "Option::is_none")]
    pub use_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_format: Option<String>,
}

impl Tooltip {
    /// point_only creates a tooltip that only shows the inserted point template.
    pub fn point_only(point_format: &str, use_html: bool) -> Tooltip {
        Tooltip {
            use_html: Some(use_html),
            header_format: Some(String::new()),
            point_format: Some(point_format.to_owned()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<SeriesOptions>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

// SERIES ------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub series_type: Option<ChartType>,
    pub data: Vec<DataPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_axis: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Zone>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

/// DataPoint is either a plain value, a gap, or a point object with metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(i64),
    Gap,
    Point(Box<Point>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: usize,
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
    pub custom: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Solid(String),
    Gradient(Gradient),
}

impl Color {
    pub fn solid(color: &str) -> Color {
        Color::Solid(color.to_owned())
    }
}

/// Gradient is a horizontal linear gradient, stops are (offset, color) pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub linear_gradient: LinearGradient,
    pub stops: Vec<(f64, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Gradient {
    /// two_tone creates a gradient that is split in the middle between the two colors.
    pub fn two_tone(left: &str, right: &str) -> Gradient {
        Gradient {
            linear_gradient: LinearGradient {
                x1: 0,
                y1: 0,
                x2: 1,
                y2: 0,
            },
            stops: vec![
                (0.0, left.to_owned()),
                (0.5, left.to_owned()),
                (0.5, right.to_owned()),
                (1.0, right.to_owned()),
            ],
        }
    }
}

/// Zone colors all points below value (or all remaining points if value is None).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<usize>,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LabelStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub color: &'static str,
    pub font_weight: &'static str,
    pub text_outline: &'static str,
}
