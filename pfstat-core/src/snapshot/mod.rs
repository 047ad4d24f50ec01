//! Point-in-time packet filter status, decoded from the kernel into plain values.
//!
//! A snapshot is built once by a [`crate::source::SnapshotSource`], handed to the
//! renderer by reference and dropped at exit. Nothing here is mutated after
//! acquisition.

/// Drop/pass reasons (`PFRES_*`).
pub const REASON_COUNT: usize = 17;
/// Resource-limit triggers (`LCNT_*`).
pub const LIMIT_COUNT: usize = 10;
/// Table operations: search, insert, removal (`FCNT_*` / `SCNT_*`).
pub const TABLE_OP_COUNT: usize = 3;
/// MD5 digest of the loaded ruleset.
pub const CHECKSUM_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4 = 0,
    V6 = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In = 0,
    Out = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Pass = 0,
    Drop = 1,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStatusSnapshot {
    pub running: bool,
    /// syslog priority code
    pub log_level: u32,
    /// Network byte order, as the kernel stores it.
    pub host_id: u32,
    pub checksum: [u8; CHECKSUM_LEN],
    /// Boot-clock second at which counting started.
    pub since: i64,
    /// Empty when no log interface is configured.
    pub interface_name: String,

    // gauges
    pub states: u32,
    pub states_half_open: u32,
    pub src_nodes: u32,

    // monotonic counters
    pub counters: [u64; REASON_COUNT],
    pub limit_counters: [u64; LIMIT_COUNT],
    pub state_counters: [u64; TABLE_OP_COUNT],
    pub src_node_counters: [u64; TABLE_OP_COUNT],

    /// `[family][direction]`
    pub bytes: [[u64; 2]; 2],
    /// `[family][direction][disposition]`
    pub packets: [[[u64; 2]; 2]; 2],
}

impl RawStatusSnapshot {
    pub fn bytes(&self, af: AddressFamily, dir: Direction) -> u64 {
        self.bytes[af as usize][dir as usize]
    }

    pub fn packets(&self, af: AddressFamily, dir: Direction, disp: Disposition) -> u64 {
        self.packets[af as usize][dir as usize][disp as usize]
    }

    pub fn has_log_interface(&self) -> bool {
        !self.interface_name.is_empty()
    }
}

/// Adaptive syncookie thresholds: `high` switches syncookies on, `low` off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatermarkPair {
    pub high: u32,
    pub low: u32,
}
