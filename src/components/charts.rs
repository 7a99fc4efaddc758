//! SVG and HTML renderings of the chart view-models.
//!
//! These only draw; every number comes precomputed from
//! `equipment_dashboard::view_model`.

use std::f64::consts::PI;

use leptos::prelude::*;

use equipment_dashboard::view_model::{CategoryChart, ChartColor, RadarChart};

const RADAR_SIZE: f64 = 200.0;
const RADAR_RADIUS: f64 = 80.0;
/// Radius giving a circumference of 100, so dash lengths are percentages.
const DOUGHNUT_RADIUS: f64 = 15.915_494;

/// Labelled bar for [`BarChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub display: String,
    pub color: ChartColor,
}

impl Bar {
    pub fn from_counts(chart: &CategoryChart<u64>) -> Vec<Bar> {
        chart
            .entries()
            .map(|(label, &value, color)| Bar {
                label: label.to_string(),
                value: value as f64,
                display: value.to_string(),
                color,
            })
            .collect()
    }

    pub fn from_values(chart: &CategoryChart<f64>) -> Vec<Bar> {
        chart
            .entries()
            .map(|(label, &value, color)| Bar {
                label: label.to_string(),
                value,
                display: format!("{:.2}", value),
                color,
            })
            .collect()
    }
}

#[component]
pub fn BarChart(#[prop(into)] title: String, bars: Vec<Bar>) -> impl IntoView {
    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <div class="bar-chart">
                {bars.into_iter().map(|bar| {
                    let width = if max > 0.0 { bar.value / max * 100.0 } else { 0.0 };
                    let style = format!(
                        "width: {:.1}%; background: {}; border-color: {}",
                        width, bar.color.fill, bar.color.border
                    );
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{bar.label}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style=style></div>
                            </div>
                            <span class="bar-value">{bar.display}</span>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn DoughnutChart(#[prop(into)] title: String, chart: CategoryChart<u64>) -> impl IntoView {
    let shares = chart.percentages();
    let mut offset = 0.0;
    let slices: Vec<_> = chart
        .entries()
        .zip(shares.iter())
        .map(|((label, &count, color), &share)| {
            // dash offsets start at 12 o'clock and run clockwise
            let dash_offset = 25.0 - offset;
            offset += share;
            (label.to_string(), count, share, color, dash_offset)
        })
        .collect();

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg class="doughnut-chart" viewBox="0 0 42 42">
                {slices.iter().map(|(_, _, share, color, dash_offset)| {
                    view! {
                        <circle
                            cx="21"
                            cy="21"
                            r=DOUGHNUT_RADIUS.to_string()
                            fill="transparent"
                            stroke=color.fill
                            stroke-width="6"
                            stroke-dasharray=format!("{:.2} {:.2}", share, 100.0 - share)
                            stroke-dashoffset=format!("{:.2}", dash_offset)
                        />
                    }
                }).collect::<Vec<_>>()}
            </svg>
            <ul class="chart-legend">
                {slices.into_iter().map(|(label, count, share, color, _)| {
                    view! {
                        <li class="legend-item">
                            <span class="legend-swatch" style=format!("background: {}", color.fill)></span>
                            <span class="legend-label">{label}</span>
                            <span class="legend-value">{format!("{} ({:.1}%)", count, share)}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn RadarChartView(#[prop(into)] title: String, chart: RadarChart) -> impl IntoView {
    let center = RADAR_SIZE / 2.0;
    let axes = chart.labels.len();
    let grid = radar_points(&vec![100.0; axes], RADAR_RADIUS, center);

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg class="radar-chart" viewBox=format!("0 0 {} {}", RADAR_SIZE, RADAR_SIZE)>
                <polygon class="radar-grid" points=grid fill="none" />
                {chart.datasets.iter().map(|series| {
                    view! {
                        <polygon
                            class="radar-series"
                            points=radar_points(&series.values, RADAR_RADIUS, center)
                            fill=series.color.fill
                            stroke=series.color.border
                            stroke-width="2"
                        />
                    }
                }).collect::<Vec<_>>()}
                {chart.labels.iter().enumerate().map(|(i, label)| {
                    let (x, y) = radar_vertex(i, axes, RADAR_RADIUS + 12.0, center);
                    view! {
                        <text class="radar-label" x=format!("{:.1}", x) y=format!("{:.1}", y) text-anchor="middle">
                            {label.clone()}
                        </text>
                    }
                }).collect::<Vec<_>>()}
            </svg>
            <ul class="chart-legend">
                {chart.datasets.iter().map(|series| {
                    view! {
                        <li class="legend-item">
                            <span class="legend-swatch" style=format!("background: {}", series.color.border)></span>
                            <span class="legend-label">{series.label}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Position of axis `index` out of `axes`, the first pointing straight up.
fn radar_vertex(index: usize, axes: usize, radius: f64, center: f64) -> (f64, f64) {
    let angle = 2.0 * PI * index as f64 / axes.max(1) as f64 - PI / 2.0;
    (center + radius * angle.cos(), center + radius * angle.sin())
}

/// SVG `points` for values on a 0-100 scale.
fn radar_points(values: &[f64], radius: f64, center: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let (x, y) = radar_vertex(i, values.len(), radius * v / 100.0, center);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
