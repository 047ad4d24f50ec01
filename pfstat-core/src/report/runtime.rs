use serde::Serialize;

/// Seconds since the packet filter started counting.
///
/// Never negative: an unavailable clock or a `since` in the future both
/// yield zero, which in turn makes every rate `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Runtime(u64);

impl Runtime {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn between(now: Option<i64>, since: i64) -> Self {
        let Some(now) = now else {
            return Self(0);
        };

        let elapsed = now.saturating_sub(since);
        if elapsed < 0 {
            tracing::debug!(now, since, "counting start is ahead of the clock, clamping runtime");
        }
        Self(u64::try_from(elapsed).unwrap_or(0))
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// `total / runtime` to one decimal place, or `None` when no time has elapsed.
    ///
    /// Rounds the exact binary quotient with ties to even, the way `%.1f` does.
    pub fn rate(&self, total: u64) -> Option<f64> {
        if self.0 == 0 {
            return None;
        }
        let rate = total as f64 / self.0 as f64;
        Some(format!("{rate:.1}").parse().unwrap_or(rate))
    }

    pub fn uptime(&self) -> Uptime {
        let mut rest = self.0;
        let seconds = rest % 60;
        rest /= 60;
        let minutes = rest % 60;
        rest /= 60;
        let hours = rest % 24;
        rest /= 24;

        Uptime {
            days: rest,
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Uptime {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}
