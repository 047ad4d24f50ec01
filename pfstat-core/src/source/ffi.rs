//! Kernel ABI for the pf control device.
//!
//! Layouts mirror `struct pf_status` and `struct pfioc_synflwats` from
//! `<net/pfvar.h>`. Field order and sizes must not change.

use crate::snapshot::{
    CHECKSUM_LEN, LIMIT_COUNT, REASON_COUNT, RawStatusSnapshot, TABLE_OP_COUNT, WatermarkPair,
};
use nix::libc::{c_char, time_t};
use std::ffi::CStr;

pub const IFNAMSIZ: usize = 16;

/// `pcounters` carries a third disposition slot the report never reads.
const PF_DISPOSITIONS: usize = 3;
const PF_PASS: usize = 0;
const PF_DROP: usize = 1;

#[repr(C)]
#[derive(Debug, Default, Clone)]
pub struct PfStatus {
    pub counters: [u64; REASON_COUNT],
    pub lcounters: [u64; LIMIT_COUNT],
    pub fcounters: [u64; TABLE_OP_COUNT],
    pub scounters: [u64; TABLE_OP_COUNT],
    pub pcounters: [[[u64; PF_DISPOSITIONS]; 2]; 2],
    pub bcounters: [[u64; 2]; 2],
    pub stateid: u64,
    pub syncookies_inflight: [u64; 2],
    pub since: time_t,
    pub running: u32,
    pub states: u32,
    pub states_halfopen: u32,
    pub src_nodes: u32,
    pub debug: u32,
    pub hostid: u32,
    pub reass: u32,
    pub syncookies_active: u8,
    pub syncookies_mode: u8,
    pub pad: [u8; 2],
    pub ifname: [c_char; IFNAMSIZ],
    pub pf_chksum: [u8; CHECKSUM_LEN],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PfiocSynflwats {
    pub hiwat: u32,
    pub lowat: u32,
}

pub const DIOCGETSTATUS: &str = "DIOCGETSTATUS";
pub const DIOCGETSYNFLWATS: &str = "DIOCGETSYNFLWATS";

nix::ioctl_readwrite!(get_status, b'D', 21, PfStatus);
nix::ioctl_readwrite!(get_synflwats, b'D', 99, PfiocSynflwats);

impl PfStatus {
    fn interface_name(&self) -> String {
        let bytes = self.ifname.map(|c| c as u8);
        match CStr::from_bytes_until_nul(&bytes) {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl From<&PfStatus> for RawStatusSnapshot {
    fn from(s: &PfStatus) -> Self {
        let packets = s.pcounters.map(|family| {
            family.map(|direction| [direction[PF_PASS], direction[PF_DROP]])
        });

        Self {
            running: s.running != 0,
            log_level: s.debug,
            host_id: s.hostid,
            checksum: s.pf_chksum,
            since: i64::from(s.since),
            interface_name: s.interface_name(),
            states: s.states,
            states_half_open: s.states_halfopen,
            src_nodes: s.src_nodes,
            counters: s.counters,
            limit_counters: s.lcounters,
            state_counters: s.fcounters,
            src_node_counters: s.scounters,
            bytes: s.bcounters,
            packets,
        }
    }
}

impl From<PfiocSynflwats> for WatermarkPair {
    fn from(w: PfiocSynflwats) -> Self {
        Self {
            high: w.hiwat,
            low: w.lowat,
        }
    }
}
