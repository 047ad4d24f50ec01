pub mod cli;
pub mod clock;
pub mod logging;
pub mod report;
pub mod snapshot;
pub mod source;
