use crate::snapshot::CHECKSUM_LEN;

/// Ruleset digest as `0x` followed by two lowercase hex digits per byte.
pub fn checksum_hex(checksum: &[u8; CHECKSUM_LEN]) -> String {
    format!("0x{}", hex::encode(checksum))
}

/// Host id, converted from network order, as `0x` and eight hex digits.
pub fn host_id_hex(network_order: u32) -> String {
    format!("0x{:08x}", u32::from_be(network_order))
}
