// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the admin analytics dashboard charts to a standalone HTML report.
//!
//! ```text
//! quint_charts_demo [DATA.json] [--out PATH] [--metric views|users|applications]
//! ```
//!
//! Without a data file the built-in mock analytics data is used. Set `RUST_LOG` to control
//! log output (for example `RUST_LOG=quint_charts=debug`).

mod data;
mod html;
mod svg;

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use quint_charts::{DataPoint, InvalidInput, Viewport};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::data::{AnalyticsData, Metric};
use crate::html::HtmlSection;

const DEFAULT_OUT: &str = "quint_charts_demo.html";

/// Command-line options.
#[derive(Debug, PartialEq)]
struct Options {
    data: Option<PathBuf>,
    out: PathBuf,
    metric: Metric,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut opts = Self {
            data: None,
            out: PathBuf::from(DEFAULT_OUT),
            metric: Metric::default(),
        };
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    let path = args.next().context("--out needs a path")?;
                    opts.out = PathBuf::from(path);
                }
                "--metric" => {
                    let name = args.next().context("--metric needs a name")?;
                    opts.metric = Metric::parse(&name)
                        .with_context(|| format!("unknown metric `{name}`"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown flag `{flag}`"),
                path => {
                    if opts.data.is_some() {
                        bail!("only one data file may be given");
                    }
                    opts.data = Some(PathBuf::from(path));
                }
            }
        }
        Ok(opts)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let opts = Options::parse(std::env::args().skip(1))?;
    let data = match &opts.data {
        Some(path) => {
            info!(path = %path.display(), "loading analytics data");
            AnalyticsData::from_json_file(path)?
        }
        None => AnalyticsData::mock(),
    };

    let sections = build_sections(&data, opts.metric);
    let html = html::render_report("Quintessence analytics", &sections);
    std::fs::write(&opts.out, html)
        .with_context(|| format!("writing {}", opts.out.display()))?;
    info!(path = %opts.out.display(), charts = sections.len(), "wrote report");
    Ok(())
}

fn build_sections(data: &AnalyticsData, metric: Metric) -> Vec<HtmlSection> {
    let viewport = Viewport::analytics_line();
    vec![
        section(
            format!("Traffic Overview ({})", metric.label()),
            &data.traffic_series(metric),
            |s| svg::line_chart(s, &viewport),
        ),
        section("Traffic Sources", &data.source_series(), svg::pie_chart),
        section("Top Pages", &data.page_series(), svg::bar_chart),
        section("Device Usage", &data.device_series(), svg::pie_chart),
        section(
            "Geographic Distribution",
            &data.country_series(),
            svg::bar_chart,
        ),
    ]
}

/// Draws one chart, falling back to an empty-state placeholder when the data is unusable.
fn section(
    title: impl Into<String>,
    series: &[DataPoint],
    draw: impl FnOnce(&[DataPoint]) -> Result<String, InvalidInput>,
) -> HtmlSection {
    let title = title.into();
    let svg = draw(series).unwrap_or_else(|err| {
        warn!(chart = %title, %err, "chart data could not be drawn");
        svg::empty_state(&format!("No data to display ({err})"))
    });
    HtmlSection::new(title, svg)
}
