use anyhow::Context;
use charts::core::page::{build_document, render_page};
use clap::Parser;
use log::info;
use racestats::core::reference::ReferenceData;
use racestats::post::dashboard::build_dashboard;
use racestats::pre::check_stats_opts::check_stats_opts;
use racestats::pre::read_race_rows::read_race_rows;
use racestats::pre::stats_opts::{OutputFormat, StatsOpts};
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get options from the command line arguments and set up logging
    let stats_opts: StatsOpts = StatsOpts::parse();
    init_logging(stats_opts.debug);

    // check options and read race records
    check_stats_opts(&stats_opts)?;
    let race_rows = read_race_rows(stats_opts.input_path.as_path())?;

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();
    let reference = ReferenceData::bathurst();

    // a missing record collection is logged by build_dashboard, no chart is created in that case
    let dashboard = match build_dashboard(&reference, race_rows.as_deref()) {
        Some(dashboard) => dashboard,
        None => return Ok(()),
    };

    let document = build_document(&dashboard);
    let output = match stats_opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&document)
            .context("Failed to serialize chart document!")?,
        OutputFormat::Html => render_page(&document)?,
    };

    info!(
        "Execution time (total): {}ms",
        t_start.elapsed().as_millis()
    );

    // POST-PROCESSING -----------------------------------------------------------------------------
    match &stats_opts.output_path {
        Some(output_path) => {
            fs::write(output_path, output).context(format!(
                "Failed to write output file {}!",
                output_path.display()
            ))?;
            info!("Wrote {} charts to {}", document.charts.len(), output_path.display());
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", output).context("Failed to write output to stdout!")?;
        }
    }

    if stats_opts.summary {
        dashboard.print_summary();
    }

    Ok(())
}

/// init_logging sets up the logger, RUST_LOG overrides the default level.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
