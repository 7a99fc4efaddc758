//! Payload types returned by the summary service.
//!
//! Everything here is produced remotely and treated as immutable once it
//! arrives. Deserialization is lenient about missing or `null` numbers because
//! the service computes them with pandas and does not guarantee finite values.

use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One equipment unit from an uploaded CSV.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct EquipmentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

/// Wire shape of a record. The service emits `equipment_name`; older payloads use `name`.
#[derive(Deserialize)]
struct RawRecord {
    equipment_name: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    flowrate: Option<f64>,
    pressure: Option<f64>,
    temperature: Option<f64>,
}

impl From<RawRecord> for EquipmentRecord {
    fn from(raw: RawRecord) -> Self {
        let name = [raw.equipment_name, raw.name]
            .into_iter()
            .flatten()
            .find(|n| !n.is_empty())
            .unwrap_or_default();

        Self {
            name,
            kind: raw.kind.unwrap_or_default(),
            flowrate: raw.flowrate.unwrap_or(0.0),
            pressure: raw.pressure.unwrap_or(0.0),
            temperature: raw.temperature.unwrap_or(0.0),
        }
    }
}

/// Aggregate statistics for one upload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentSummary {
    pub total_equipment: u64,
    #[serde(deserialize_with = "zero_if_null")]
    pub avg_flowrate: f64,
    #[serde(deserialize_with = "zero_if_null")]
    pub avg_pressure: f64,
    #[serde(deserialize_with = "zero_if_null")]
    pub avg_temperature: f64,
    /// Type name to count, in the order the service listed them.
    pub type_distribution: IndexMap<String, u64>,
    pub equipment_list: Vec<EquipmentRecord>,
}

/// A prior upload as reported by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub filename: String,
    #[serde(deserialize_with = "flexible_timestamp")]
    pub uploaded_at: DateTime<Utc>,
    pub summary: EquipmentSummary,
}

impl HistoryEntry {
    /// Timestamp as shown in the history panel.
    pub fn uploaded_label(&self) -> String {
        self.uploaded_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Accepts RFC 3339 timestamps and, when the server runs without time zone
/// support, naive ISO timestamps which are taken to be UTC.
fn flexible_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}
