use nix::time::{ClockId, clock_gettime};

/// Source of the current boot-clock second, the timebase of `since`.
pub trait Clock {
    /// `None` when the clock cannot be read.
    fn now(&self) -> Option<i64>;
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "openbsd"))]
const BOOT_CLOCK: ClockId = ClockId::from_raw(nix::libc::CLOCK_BOOTTIME);

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "openbsd")))]
const BOOT_CLOCK: ClockId = ClockId::CLOCK_MONOTONIC;

/// Time since boot, including time spent suspended.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootClock;

impl Clock for BootClock {
    fn now(&self) -> Option<i64> {
        match clock_gettime(BOOT_CLOCK) {
            Ok(ts) => Some(i64::from(ts.tv_sec())),
            Err(e) => {
                tracing::debug!(error = %e, "boot clock unavailable, reporting zero runtime");
                None
            }
        }
    }
}
