use crate::cli::emit::{OutputFormat, emit};
use crate::clock::Clock;
use crate::report::render_report;
use crate::source::SnapshotSource;
use anyhow::{Context, Result};
use std::io::Write;

/// Acquire one snapshot, render it and write the report to `out`.
///
/// Nothing is written unless acquisition succeeds.
pub fn run<S, C, W>(source: &S, clock: &C, format: OutputFormat, out: W) -> Result<()>
where
    S: SnapshotSource,
    C: Clock,
    W: Write,
{
    let (snapshot, watermarks) = source.acquire().context("failed to acquire pf status")?;

    let report = render_report(&snapshot, &watermarks, clock.now());

    emit(&report, format, out).context("failed to write status report")
}
