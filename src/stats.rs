//! Headline metric cards shown above the charts.

use serde::Serialize;

use crate::model::EquipmentSummary;

/// Which summary metric a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatKind {
    Count,
    Flowrate,
    Pressure,
    Temperature,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Count,
        StatKind::Flowrate,
        StatKind::Pressure,
        StatKind::Temperature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Count => "Total Equipment",
            StatKind::Flowrate => "Avg Flowrate",
            StatKind::Pressure => "Avg Pressure",
            StatKind::Temperature => "Avg Temperature",
        }
    }

    /// Display suffix, including its leading space.
    pub fn unit(self) -> &'static str {
        match self {
            StatKind::Count => "",
            StatKind::Flowrate => " L/min",
            StatKind::Pressure => " bar",
            StatKind::Temperature => " °C",
        }
    }

    /// The count is an integer; every averaged metric gets one decimal.
    pub fn decimals(self) -> usize {
        match self {
            StatKind::Count => 0,
            _ => 1,
        }
    }

    fn value(self, summary: &EquipmentSummary) -> f64 {
        match self {
            StatKind::Count => summary.total_equipment as f64,
            StatKind::Flowrate => summary.avg_flowrate,
            StatKind::Pressure => summary.avg_pressure,
            StatKind::Temperature => summary.avg_temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub decimals: usize,
}

impl StatCard {
    fn new(kind: StatKind, value: f64) -> Self {
        Self {
            kind,
            label: kind.label(),
            value,
            unit: kind.unit(),
            decimals: kind.decimals(),
        }
    }

    /// Value rounded to the card's precision with its unit attached.
    pub fn display(&self) -> String {
        format!("{:.*}{}", self.decimals, self.value, self.unit)
    }
}

/// The four fixed cards, zero-valued when no summary is active.
pub fn stat_cards(summary: Option<&EquipmentSummary>) -> Vec<StatCard> {
    StatKind::ALL
        .iter()
        .map(|&kind| StatCard::new(kind, summary.map(|s| kind.value(s)).unwrap_or(0.0)))
        .collect()
}
