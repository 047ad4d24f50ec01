//! Status report rendering.
//!
//! Turns one [`RawStatusSnapshot`](crate::snapshot::RawStatusSnapshot) into a
//! [`StatusReport`] ready for serialization:
//!
//! RawStatusSnapshot + WatermarkPair + boot clock
//! Runtime (uptime, rates)
//! CounterTable / LogInterface
//! StatusReport
//!
//! Label tables are fixed at build time and sized by the same constants as
//! the counter arrays they describe.

mod document;
mod encode;
pub mod labels;
mod render;
mod runtime;

#[cfg(test)]
mod tests;

pub use document::*;
pub use encode::{checksum_hex, host_id_hex};
pub use render::render_report;
pub use runtime::{Runtime, Uptime};
