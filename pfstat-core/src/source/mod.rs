mod error;
mod ffi;
mod pf;


use crate::snapshot::{RawStatusSnapshot, WatermarkPair};

pub use error::*;
pub use pf::{DEFAULT_DEVICE, PfDevice};

/// Produces exactly one status snapshot and its syncookie watermarks.
///
/// Implementations perform a single blocking query with no retry. Either both
/// records are returned or the acquisition fails as a whole.
pub trait SnapshotSource {
    fn acquire(&self) -> Result<(RawStatusSnapshot, WatermarkPair), AcquisitionError>;
}
