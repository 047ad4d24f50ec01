use crate::snapshot::{RawStatusSnapshot, WatermarkPair};
use crate::source::ffi::{self, PfStatus, PfiocSynflwats};
use crate::source::{AcquisitionError, SnapshotSource};
use std::fs::OpenOptions;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

pub const DEFAULT_DEVICE: &str = "/dev/pf";

/// The pf control device. Opened per acquisition and closed on return.
#[derive(Debug, Clone)]
pub struct PfDevice {
    path: PathBuf,
}

impl PfDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for PfDevice {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl SnapshotSource for PfDevice {
    fn acquire(&self) -> Result<(RawStatusSnapshot, WatermarkPair), AcquisitionError> {
        let dev = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| AcquisitionError::open(&self.path, e))?;

        tracing::debug!(device = %self.path.display(), "opened pf control device");

        let mut status = PfStatus::default();
        // SAFETY: `status` is a live, correctly laid out `struct pf_status`.
        unsafe { ffi::get_status(dev.as_raw_fd(), &mut status) }
            .map_err(|e| AcquisitionError::query(ffi::DIOCGETSTATUS, e))?;

        let mut watermarks = PfiocSynflwats::default();
        // SAFETY: as above, for `struct pfioc_synflwats`.
        unsafe { ffi::get_synflwats(dev.as_raw_fd(), &mut watermarks) }
            .map_err(|e| AcquisitionError::query(ffi::DIOCGETSYNFLWATS, e))?;

        tracing::debug!(
            running = status.running,
            states = status.states,
            since = status.since,
            "pf status acquired"
        );

        Ok((RawStatusSnapshot::from(&status), watermarks.into()))
    }
}
