use crate::report::runtime::{Runtime, Uptime};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The rendered status report.
///
/// Field order here is the key order of the emitted document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub running: bool,
    pub debug: &'static str,
    pub hostid: String,
    pub checksum: String,
    pub uptime: Uptime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loginterface: Option<LogInterface>,
    pub states: CounterTable,
    #[serde(rename = "source tracking")]
    pub source_tracking: CounterTable,
    pub counters: CounterTable,
    #[serde(rename = "limit counters")]
    pub limit_counters: CounterTable,
    #[serde(rename = "adaptive syncookies watermarks")]
    pub syncookie_watermarks: Watermarks,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CounterEntry {
    pub total: u64,
    /// `None` for gauges and whenever no time has elapsed.
    pub rate: Option<f64>,
}

/// Labelled entries emitted as a map in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterTable {
    entries: Vec<(&'static str, CounterEntry)>,
}

impl CounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantaneous value; never carries a rate.
    pub fn gauge(mut self, label: &'static str, value: u32) -> Self {
        self.entries.push((
            label,
            CounterEntry {
                total: u64::from(value),
                rate: None,
            },
        ));
        self
    }

    /// One entry per label. Both arrays share `N`, so every counter has
    /// exactly one label.
    pub fn counters<const N: usize>(
        mut self,
        labels: &[&'static str; N],
        totals: &[u64; N],
        runtime: Runtime,
    ) -> Self {
        self.entries
            .extend(labels.iter().zip(totals).map(|(label, total)| {
                (
                    *label,
                    CounterEntry {
                        total: *total,
                        rate: runtime.rate(*total),
                    },
                )
            }));
        self
    }

    pub fn get(&self, label: &str) -> Option<&CounterEntry> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, entry)| entry)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }
}

impl Serialize for CounterTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, entry) in &self.entries {
            map.serialize_entry(label, entry)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogInterface {
    pub name: String,
    pub bytes_in: FamilyTotals,
    pub bytes_out: FamilyTotals,
    pub packets_in: DispositionTotals,
    pub packets_out: DispositionTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FamilyTotals {
    pub ipv4: u64,
    pub ipv6: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispositionTotals {
    pub passed: FamilyTotals,
    pub blocked: FamilyTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Watermarks {
    pub start: u32,
    pub end: u32,
}
