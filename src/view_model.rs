//! Projection of an [`EquipmentSummary`] into everything the dashboard renders.
//!
//! [`build`] is pure: the same summary always produces the same
//! [`DashboardView`], so views can be recomputed freely whenever the active
//! summary changes.

use serde::Serialize;

use crate::model::{EquipmentRecord, EquipmentSummary};
use crate::normalize::normalize;
use crate::stats::{stat_cards, StatCard, StatKind};

/// The radar chart compares at most this many units.
pub const RADAR_LIMIT: usize = 5;

/// Radar label for a record without a name.
pub const UNNAMED_EQUIPMENT: &str = "Unknown";

/// Fill and border colour pair for one chart element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartColor {
    pub fill: &'static str,
    pub border: &'static str,
}

/// Category colours, cycled when there are more than five categories.
pub const PALETTE: [ChartColor; 5] = [
    ChartColor { fill: "rgba(6, 182, 212, 0.8)", border: "rgb(6, 182, 212)" },
    ChartColor { fill: "rgba(168, 85, 247, 0.8)", border: "rgb(168, 85, 247)" },
    ChartColor { fill: "rgba(251, 146, 60, 0.8)", border: "rgb(251, 146, 60)" },
    ChartColor { fill: "rgba(34, 197, 94, 0.8)", border: "rgb(34, 197, 94)" },
    ChartColor { fill: "rgba(244, 63, 94, 0.8)", border: "rgb(244, 63, 94)" },
];

const FLOW_COLOR: ChartColor = ChartColor { fill: "rgba(6, 182, 212, 0.2)", border: "rgb(6, 182, 212)" };
const PRESSURE_COLOR: ChartColor = ChartColor { fill: "rgba(251, 146, 60, 0.2)", border: "rgb(251, 146, 60)" };
const TEMPERATURE_COLOR: ChartColor = ChartColor { fill: "rgba(34, 197, 94, 0.2)", border: "rgb(34, 197, 94)" };

/// Labelled values for a bar or doughnut chart. `labels[i]` belongs to `values[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart<T> {
    pub labels: Vec<String>,
    pub values: Vec<T>,
    pub colors: Vec<ChartColor>,
}

impl<T> Default for CategoryChart<T> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
            colors: Vec::new(),
        }
    }
}

impl<T> CategoryChart<T> {
    fn new(labels: Vec<String>, values: Vec<T>) -> Self {
        let colors = (0..labels.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();
        Self { labels, values, colors }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, value, colour)` triples in chart order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T, ChartColor)> + '_ {
        self.labels
            .iter()
            .zip(self.values.iter())
            .zip(self.colors.iter())
            .map(|((label, value), color)| (label.as_str(), value, *color))
    }
}

impl CategoryChart<u64> {
    /// Share of each category in percent, zero when every count is zero.
    pub fn percentages(&self) -> Vec<f64> {
        let total: u64 = self.values.iter().sum();
        if total == 0 {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|&v| v as f64 / total as f64 * 100.0)
            .collect()
    }
}

/// One normalized radar series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub color: ChartColor,
}

/// Normalized flow, pressure and temperature for the first few units.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarSeries>,
}

impl RadarChart {
    fn from_records(records: &[EquipmentRecord]) -> Self {
        let head = &records[..records.len().min(RADAR_LIMIT)];
        let labels = head
            .iter()
            .map(|r| {
                if r.name.is_empty() {
                    UNNAMED_EQUIPMENT.to_string()
                } else {
                    r.name.clone()
                }
            })
            .collect();

        let series = |label, color, field: fn(&EquipmentRecord) -> f64| {
            let raw: Vec<f64> = head.iter().map(field).collect();
            RadarSeries {
                label,
                values: normalize(&raw),
                color,
            }
        };

        Self {
            labels,
            datasets: vec![
                series("Flowrate", FLOW_COLOR, |r| r.flowrate),
                series("Pressure", PRESSURE_COLOR, |r| r.pressure),
                series("Temperature", TEMPERATURE_COLOR, |r| r.temperature),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A comparison-table row with raw values and their unit suffixes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub kind: String,
    pub flowrate: String,
    pub pressure: String,
    pub temperature: String,
}

impl From<&EquipmentRecord> for TableRow {
    fn from(record: &EquipmentRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind.clone(),
            flowrate: format!("{}{}", record.flowrate, StatKind::Flowrate.unit()),
            pressure: format!("{}{}", record.pressure, StatKind::Pressure.unit()),
            temperature: format!("{}{}", record.temperature, StatKind::Temperature.unit()),
        }
    }
}

/// Everything the dashboard draws for one summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub bar: CategoryChart<u64>,
    pub doughnut: CategoryChart<u64>,
    pub radar: RadarChart,
    /// Summary averages side by side.
    pub averages: CategoryChart<f64>,
    pub stat_cards: Vec<StatCard>,
    pub table_rows: Vec<TableRow>,
}

impl DashboardView {
    /// True when there is nothing to chart. Any present summary has averages,
    /// so only an absent one is empty.
    pub fn is_empty(&self) -> bool {
        self.bar.is_empty()
            && self.radar.is_empty()
            && self.averages.is_empty()
            && self.table_rows.is_empty()
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        build(None)
    }
}

/// Project `summary` into chart, card and table view-models.
pub fn build(summary: Option<&EquipmentSummary>) -> DashboardView {
    let stat_cards = stat_cards(summary);
    let Some(summary) = summary else {
        return DashboardView {
            bar: CategoryChart::default(),
            doughnut: CategoryChart::default(),
            radar: RadarChart::default(),
            averages: CategoryChart::default(),
            stat_cards,
            table_rows: Vec::new(),
        };
    };

    let labels: Vec<String> = summary.type_distribution.keys().cloned().collect();
    let counts: Vec<u64> = summary.type_distribution.values().copied().collect();
    let distribution = CategoryChart::new(labels, counts);

    let averages = CategoryChart::new(
        vec!["Flowrate".into(), "Pressure".into(), "Temperature".into()],
        vec![summary.avg_flowrate, summary.avg_pressure, summary.avg_temperature],
    );

    DashboardView {
        bar: distribution.clone(),
        doughnut: distribution,
        radar: RadarChart::from_records(&summary.equipment_list),
        averages,
        stat_cards,
        table_rows: summary.equipment_list.iter().map(TableRow::from).collect(),
    }
}
