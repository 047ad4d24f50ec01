use crate::snapshot::{LIMIT_COUNT, REASON_COUNT, TABLE_OP_COUNT};

pub const UNKNOWN_LOG_LEVEL: &str = "unknown";

/// syslog `prioritynames`, in table order. Codes repeat for deprecated
/// aliases, so the first entry for a code is the one reported.
pub const LOG_LEVELS: &[(u32, &str)] = &[
    (1, "alert"),
    (2, "crit"),
    (7, "debug"),
    (0, "emerg"),
    (3, "err"),
    (3, "error"),
    (6, "info"),
    (0x10, "none"),
    (5, "notice"),
    (0, "panic"),
    (4, "warn"),
    (4, "warning"),
];

pub const REASON_LABELS: [&str; REASON_COUNT] = [
    "match",
    "bad-offset",
    "fragment",
    "short",
    "normalize",
    "memory",
    "bad-timestamp",
    "congestion",
    "ip-option",
    "proto-cksum",
    "state-mismatch",
    "state-insert",
    "state-limit",
    "src-limit",
    "synproxy",
    "translate",
    "no-route",
];

pub const LIMIT_LABELS: [&str; LIMIT_COUNT] = [
    "max states per rule",
    "max-src-states",
    "max-src-nodes",
    "max-src-conn",
    "max-src-conn-rate",
    "overload table insertion",
    "overload flush states",
    "synfloods detected",
    "syncookies sent",
    "syncookies validated",
];

/// Shared by the state table and the source-tracking table.
pub const TABLE_OP_LABELS: [&str; TABLE_OP_COUNT] = ["searches", "inserts", "removals"];

pub const CURRENT_ENTRIES: &str = "current entries";
pub const HALF_OPEN_TCP: &str = "half-open tcp";

pub fn log_level_name(code: u32) -> &'static str {
    LOG_LEVELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_LOG_LEVEL)
}
