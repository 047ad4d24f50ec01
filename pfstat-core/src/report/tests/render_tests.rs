use crate::report::labels::{LIMIT_LABELS, REASON_LABELS};
use crate::report::{CounterEntry, render_report};
use crate::snapshot::{RawStatusSnapshot, WatermarkPair};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn snapshot() -> RawStatusSnapshot {
    RawStatusSnapshot {
        running: true,
        log_level: 3,
        host_id: u32::from_ne_bytes([0x7f, 0x00, 0x00, 0x01]),
        checksum: [0xab; 16],
        since: 1_000,
        interface_name: String::new(),
        states: 12,
        states_half_open: 2,
        src_nodes: 4,
        counters: std::array::from_fn(|i| (i as u64) * 100),
        limit_counters: std::array::from_fn(|i| i as u64),
        state_counters: [600, 30, 29],
        src_node_counters: [60, 6, 4],
        bytes: [[1_000, 2_000], [3_000, 4_000]],
        packets: [[[11, 12], [13, 14]], [[15, 16], [17, 18]]],
    }
}

fn watermarks() -> WatermarkPair {
    WatermarkPair {
        high: 2_500,
        low: 1_500,
    }
}

fn to_value(snapshot: &RawStatusSnapshot, now: Option<i64>) -> Value {
    serde_json::to_value(render_report(snapshot, &watermarks(), now)).unwrap()
}

#[test]
fn test_scalar_fields() {
    let report = render_report(&snapshot(), &watermarks(), Some(1_060));

    assert!(report.running);
    assert_eq!(report.debug, "err");
    assert_eq!(report.hostid, "0x7f000001");
    assert_eq!(report.checksum, format!("0x{}", "ab".repeat(16)));
    assert_eq!(report.uptime.minutes, 1);
    assert_eq!(report.uptime.seconds, 0);
}

#[test]
fn test_unknown_log_level_is_not_numeric() {
    let mut snap = snapshot();
    snap.log_level = 42;

    let value = to_value(&snap, Some(1_060));

    assert_eq!(value["debug"], json!("unknown"));
}

#[test]
fn test_states_section() {
    let value = to_value(&snapshot(), Some(1_060));

    assert_eq!(
        value["states"],
        json!({
            "current entries": { "total": 12, "rate": null },
            "half-open tcp": { "total": 2, "rate": null },
            "searches": { "total": 600, "rate": 10.0 },
            "inserts": { "total": 30, "rate": 0.5 },
            "removals": { "total": 29, "rate": 0.5 },
        })
    );
}

#[test]
fn test_source_tracking_section() {
    let value = to_value(&snapshot(), Some(1_060));

    assert_eq!(
        value["source tracking"],
        json!({
            "current entries": { "total": 4, "rate": null },
            "searches": { "total": 60, "rate": 1.0 },
            "inserts": { "total": 6, "rate": 0.1 },
            "removals": { "total": 4, "rate": 0.1 },
        })
    );
}

#[test]
fn test_counter_families_are_complete() {
    let report = render_report(&snapshot(), &watermarks(), Some(1_100));

    assert_eq!(
        report.counters.labels().collect::<Vec<_>>(),
        REASON_LABELS.to_vec()
    );
    assert_eq!(
        report.limit_counters.labels().collect::<Vec<_>>(),
        LIMIT_LABELS.to_vec()
    );
    assert_eq!(
        report.counters.get("no-route"),
        Some(&CounterEntry {
            total: 1_600,
            rate: Some(16.0),
        })
    );
    assert_eq!(
        report.limit_counters.get("syncookies validated"),
        Some(&CounterEntry {
            total: 9,
            rate: Some(0.1),
        })
    );
}

#[test]
fn test_zero_runtime_nulls_every_rate() {
    for now in [None, Some(1_000), Some(10)] {
        let value = to_value(&snapshot(), now);

        for section in ["states", "source tracking", "counters", "limit counters"] {
            for (label, entry) in value[section].as_object().unwrap() {
                assert_eq!(entry["rate"], Value::Null, "{section}/{label} at {now:?}");
            }
        }

        assert_eq!(
            value["uptime"],
            json!({ "days": 0, "hours": 0, "minutes": 0, "seconds": 0 })
        );
    }
}

#[test]
fn test_zero_total_with_runtime_is_numeric_zero() {
    let value = to_value(&snapshot(), Some(1_060));

    // "match" is index 0 and has no hits
    assert_eq!(value["counters"]["match"], json!({ "total": 0, "rate": 0.0 }));
    assert!(value["counters"]["match"]["rate"].is_f64());
}

#[test]
fn test_log_interface_omitted_when_unset() {
    let value = to_value(&snapshot(), Some(1_060));

    assert!(value.get("loginterface").is_none());

    let text = serde_json::to_string(&render_report(&snapshot(), &watermarks(), Some(1_060)))
        .unwrap();
    assert!(!text.contains("loginterface"));
}

#[test]
fn test_log_interface_families_not_swapped() {
    let mut snap = snapshot();
    snap.interface_name = "em0".into();

    let value = to_value(&snap, Some(1_060));

    assert_eq!(
        value["loginterface"],
        json!({
            "name": "em0",
            "bytes_in": { "ipv4": 1_000, "ipv6": 3_000 },
            "bytes_out": { "ipv4": 2_000, "ipv6": 4_000 },
            "packets_in": {
                "passed": { "ipv4": 11, "ipv6": 15 },
                "blocked": { "ipv4": 12, "ipv6": 16 },
            },
            "packets_out": {
                "passed": { "ipv4": 13, "ipv6": 17 },
                "blocked": { "ipv4": 14, "ipv6": 18 },
            },
        })
    );
}

#[test]
fn test_watermarks_passed_through() {
    let value = to_value(&snapshot(), None);

    assert_eq!(
        value["adaptive syncookies watermarks"],
        json!({ "start": 2_500, "end": 1_500 })
    );
}

#[test]
fn test_key_order() {
    let mut snap = snapshot();
    snap.interface_name = "pflog0".into();

    let text =
        serde_json::to_string(&render_report(&snap, &watermarks(), Some(1_060))).unwrap();

    let keys = [
        "\"running\"",
        "\"debug\"",
        "\"hostid\"",
        "\"checksum\"",
        "\"uptime\"",
        "\"loginterface\"",
        "\"states\"",
        "\"source tracking\"",
        "\"counters\"",
        "\"limit counters\"",
        "\"adaptive syncookies watermarks\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| text.find(k).unwrap_or_else(|| panic!("missing {k}")))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_counter_order_follows_label_table() {
    let text =
        serde_json::to_string(&render_report(&snapshot(), &watermarks(), Some(1_060))).unwrap();

    let counters = &text[text.find("\"counters\"").unwrap()..text.find("\"limit counters\"").unwrap()];
    let positions: Vec<usize> = REASON_LABELS
        .iter()
        .map(|label| counters.find(&format!("\"{label}\"")).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
