use crate::report::document::{
    CounterTable, DispositionTotals, FamilyTotals, LogInterface, StatusReport, Watermarks,
};
use crate::report::encode::{checksum_hex, host_id_hex};
use crate::report::labels::{
    CURRENT_ENTRIES, HALF_OPEN_TCP, LIMIT_LABELS, REASON_LABELS, TABLE_OP_LABELS, log_level_name,
};
use crate::report::runtime::Runtime;
use crate::snapshot::{AddressFamily, Direction, Disposition, RawStatusSnapshot, WatermarkPair};

/// Build the report for one snapshot.
///
/// `now` is the current boot-clock second, or `None` when the clock could not
/// be read. Pure apart from debug logging.
pub fn render_report(
    snapshot: &RawStatusSnapshot,
    watermarks: &WatermarkPair,
    now: Option<i64>,
) -> StatusReport {
    let runtime = Runtime::between(now, snapshot.since);

    let report = StatusReport {
        running: snapshot.running,
        debug: log_level_name(snapshot.log_level),
        hostid: host_id_hex(snapshot.host_id),
        checksum: checksum_hex(&snapshot.checksum),
        uptime: runtime.uptime(),
        loginterface: render_log_interface(snapshot),
        states: CounterTable::new()
            .gauge(CURRENT_ENTRIES, snapshot.states)
            .gauge(HALF_OPEN_TCP, snapshot.states_half_open)
            .counters(&TABLE_OP_LABELS, &snapshot.state_counters, runtime),
        source_tracking: CounterTable::new()
            .gauge(CURRENT_ENTRIES, snapshot.src_nodes)
            .counters(&TABLE_OP_LABELS, &snapshot.src_node_counters, runtime),
        counters: CounterTable::new().counters(&REASON_LABELS, &snapshot.counters, runtime),
        limit_counters: CounterTable::new().counters(
            &LIMIT_LABELS,
            &snapshot.limit_counters,
            runtime,
        ),
        syncookie_watermarks: Watermarks {
            start: watermarks.high,
            end: watermarks.low,
        },
    };

    tracing::debug!(
        runtime = runtime.as_secs(),
        loginterface = report.loginterface.is_some(),
        "rendered status report"
    );

    report
}

fn render_log_interface(snapshot: &RawStatusSnapshot) -> Option<LogInterface> {
    if !snapshot.has_log_interface() {
        return None;
    }

    let bytes = |dir| FamilyTotals {
        ipv4: snapshot.bytes(AddressFamily::V4, dir),
        ipv6: snapshot.bytes(AddressFamily::V6, dir),
    };

    let packets = |dir, disp| FamilyTotals {
        ipv4: snapshot.packets(AddressFamily::V4, dir, disp),
        ipv6: snapshot.packets(AddressFamily::V6, dir, disp),
    };

    let dispositions = |dir| DispositionTotals {
        passed: packets(dir, Disposition::Pass),
        blocked: packets(dir, Disposition::Drop),
    };

    Some(LogInterface {
        name: snapshot.interface_name.clone(),
        bytes_in: bytes(Direction::In),
        bytes_out: bytes(Direction::Out),
        packets_in: dispositions(Direction::In),
        packets_out: dispositions(Direction::Out),
    })
}
