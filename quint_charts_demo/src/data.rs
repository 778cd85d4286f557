// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analytics data shown on the admin dashboard.

use std::path::Path;

use anyhow::Context as _;
use peniko::Color;
use quint_charts::DataPoint;
use serde::Deserialize;

/// Slice/bar palette (Tailwind blue, green, purple, orange, pink 500).
pub(crate) const PALETTE: [Color; 5] = [
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0x22, 0xc5, 0x5e),
    Color::from_rgb8(0xa8, 0x55, 0xf7),
    Color::from_rgb8(0xf9, 0x73, 0x16),
    Color::from_rgb8(0xec, 0x48, 0x99),
];

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct DailyTraffic {
    pub(crate) date: String,
    pub(crate) views: f64,
    pub(crate) users: f64,
    pub(crate) applications: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TrafficSource {
    pub(crate) source: String,
    pub(crate) visitors: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PageViews {
    pub(crate) page: String,
    pub(crate) views: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct DeviceUsage {
    pub(crate) device: String,
    pub(crate) users: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CountryVisitors {
    pub(crate) country: String,
    pub(crate) visitors: f64,
}

/// Which daily metric the traffic line chart plots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Metric {
    #[default]
    Views,
    Users,
    Applications,
}

impl Metric {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "views" => Some(Self::Views),
            "users" => Some(Self::Users),
            "applications" => Some(Self::Applications),
            _ => None,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Views => "Views",
            Self::Users => "Users",
            Self::Applications => "Applications",
        }
    }
}

/// The analytics page data set.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct AnalyticsData {
    pub(crate) time_series: Vec<DailyTraffic>,
    pub(crate) traffic_sources: Vec<TrafficSource>,
    pub(crate) top_pages: Vec<PageViews>,
    pub(crate) device_stats: Vec<DeviceUsage>,
    pub(crate) geographic_data: Vec<CountryVisitors>,
}

impl AnalyticsData {
    /// Loads a data set from a JSON file.
    pub(crate) fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub(crate) fn traffic_series(&self, metric: Metric) -> Vec<DataPoint> {
        self.time_series
            .iter()
            .map(|d| {
                let v = match metric {
                    Metric::Views => d.views,
                    Metric::Users => d.users,
                    Metric::Applications => d.applications,
                };
                DataPoint::new(v).with_label(d.date.clone())
            })
            .collect()
    }

    pub(crate) fn source_series(&self) -> Vec<DataPoint> {
        colored(self.traffic_sources.iter().map(|s| (&s.source, s.visitors)))
    }

    pub(crate) fn device_series(&self) -> Vec<DataPoint> {
        colored(self.device_stats.iter().map(|d| (&d.device, d.users)))
    }

    pub(crate) fn page_series(&self) -> Vec<DataPoint> {
        self.top_pages
            .iter()
            .map(|p| DataPoint::new(p.views).with_label(p.page.clone()))
            .collect()
    }

    /// The first five countries, in data order.
    pub(crate) fn country_series(&self) -> Vec<DataPoint> {
        self.geographic_data
            .iter()
            .take(5)
            .map(|c| DataPoint::new(c.visitors).with_label(c.country.clone()))
            .collect()
    }

    /// The mock data the dashboard shows until the stats API is wired up.
    pub(crate) fn mock() -> Self {
        let day = |date: &str, views, users, applications| DailyTraffic {
            date: date.to_string(),
            views,
            users,
            applications,
        };
        let source = |source: &str, visitors| TrafficSource {
            source: source.to_string(),
            visitors,
        };
        let page = |page: &str, views| PageViews {
            page: page.to_string(),
            views,
        };
        let device = |device: &str, users| DeviceUsage {
            device: device.to_string(),
            users,
        };
        let country = |country: &str, visitors| CountryVisitors {
            country: country.to_string(),
            visitors,
        };
        Self {
            time_series: vec![
                day("2024-01-01", 1200.0, 320.0, 8.0),
                day("2024-01-02", 1350.0, 380.0, 12.0),
                day("2024-01-03", 1100.0, 290.0, 6.0),
                day("2024-01-04", 1600.0, 420.0, 15.0),
                day("2024-01-05", 1800.0, 480.0, 18.0),
                day("2024-01-06", 2000.0, 520.0, 22.0),
                day("2024-01-07", 1900.0, 500.0, 20.0),
            ],
            traffic_sources: vec![
                source("Organic Search", 1458.0),
                source("Direct", 810.0),
                source("Social Media", 486.0),
                source("Referral", 324.0),
                source("Email", 162.0),
            ],
            top_pages: vec![
                page("Home", 5420.0),
                page("Services", 3200.0),
                page("Projects", 2800.0),
                page("Career", 2100.0),
                page("About", 1900.0),
            ],
            device_stats: vec![
                device("Desktop", 1782.0),
                device("Mobile", 1134.0),
                device("Tablet", 324.0),
            ],
            geographic_data: vec![
                country("India", 8200.0),
                country("United States", 2100.0),
                country("United Kingdom", 1800.0),
                country("Canada", 1200.0),
                country("Australia", 900.0),
                country("Others", 1220.0),
            ],
        }
    }
}

fn colored<'a>(items: impl Iterator<Item = (&'a String, f64)>) -> Vec<DataPoint> {
    items
        .zip(PALETTE.iter().cycle())
        .map(|((label, value), &color)| {
            DataPoint::new(value)
                .with_label(label.clone())
                .with_color(color)
        })
        .collect()
}
