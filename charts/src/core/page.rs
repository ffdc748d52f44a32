use crate::core::config::{Chart, ChartDocument};
use crate::core::entrants_charts::{split_chart, totals_chart};
use crate::core::result_charts::{finishes_chart, model_usage_chart, podium_chart, race_time_chart};
use anyhow::Context;
use log::debug;
use racestats::post::dashboard::Dashboard;
use std::fmt::Write;

const HIGHCHARTS_URL: &str = "https://code.highcharts.com/highcharts.js";
const HIGHCHARTS_HEATMAP_URL: &str = "https://code.highcharts.com/modules/heatmap.js";

// installs label formatters for precomputed tick labels and renders all charts
const RENDER_SCRIPT: &str = r#"
function applyTickLabels(axis) {
  if (!axis || !axis.labels || !axis.labels.tickLabels) return;
  const positions = axis.tickPositions || [];
  const labels = axis.labels.tickLabels;
  axis.labels.formatter = function () {
    const idx = positions.indexOf(this.value);
    return idx >= 0 ? labels[idx] : '';
  };
}
DASHBOARD.charts.forEach(function (c) {
  [].concat(c.options.xAxis, c.options.yAxis).forEach(applyTickLabels);
  Highcharts.chart(c.container, c.options);
});
"#;

/// build_charts creates the configurations of all charts in render order (entrants charts first).
pub fn build_charts(dashboard: &Dashboard) -> Vec<Chart> {
    vec![
        totals_chart(dashboard),
        split_chart(dashboard),
        finishes_chart(dashboard),
        race_time_chart(dashboard),
        podium_chart(dashboard),
        model_usage_chart(dashboard),
    ]
}

pub fn build_document(dashboard: &Dashboard) -> ChartDocument {
    let charts = build_charts(dashboard);
    debug!("Built {} chart configurations", charts.len());

    ChartDocument {
        categories: dashboard.axis.categories().to_vec(),
        charts,
    }
}

/// render_page creates a standalone HTML page that loads Highcharts and renders all charts of the
/// document. The containers are ordered as in the original dashboard layout.
pub fn render_page(document: &ChartDocument) -> anyhow::Result<String> {
    let doc_json =
        serde_json::to_string(document).context("Failed to serialize chart document!")?;
    // prevent the JSON from terminating the script element
    let doc_json = doc_json.replace("</", "<\\/");

    let mut page = String::new();

    writeln!(&mut page, "<!DOCTYPE html>")?;
    writeln!(&mut page, "<html lang=\"en\">")?;
    writeln!(&mut page, "<head>")?;
    writeln!(&mut page, "<meta charset=\"utf-8\">")?;
    writeln!(&mut page, "<title>Bathurst Supercar Statistics</title>")?;
    writeln!(&mut page, "<script src=\"{}\"></script>", HIGHCHARTS_URL)?;
    writeln!(&mut page, "<script src=\"{}\"></script>", HIGHCHARTS_HEATMAP_URL)?;
    writeln!(&mut page, "</head>")?;
    writeln!(&mut page, "<body>")?;

    for chart in document.charts.iter() {
        writeln!(
            &mut page,
            "<div id=\"{}\" style=\"min-height: 500px; margin: 1em 0\"></div>",
            chart.container
        )?;
    }

    writeln!(&mut page, "<script>")?;
    writeln!(&mut page, "const DASHBOARD = {};", doc_json)?;
    write!(&mut page, "{}", RENDER_SCRIPT)?;
    writeln!(&mut page, "</script>")?;
    writeln!(&mut page, "</body>")?;
    writeln!(&mut page, "</html>")?;

    Ok(page)
}
