pub mod demo;
pub mod report;

use crate::reports;
use fittrack::config::{Config, OutputFormat};
use fittrack::driver::{self, DriverSummary};
use fittrack::{SensorPacket, TrackerResult};
use std::io::{self, Write};

/// Runs the packets through the driver and renders them in the configured format.
pub fn execute(packets: &[SensorPacket], config: &Config) -> TrackerResult<DriverSummary> {
    let fail_fast = config.output.fail_fast;

    match config.output.format {
        OutputFormat::Line => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = driver::run(packets, fail_fast, &mut out)?;
            out.flush()?;
            Ok(summary)
        }
        OutputFormat::Table => {
            let outcomes = driver::process_packets(packets, fail_fast);
            reports::print_summary_table(&outcomes);
            Ok(DriverSummary::from_outcomes(&outcomes))
        }
        OutputFormat::Json => {
            let outcomes = driver::process_packets(packets, fail_fast);
            reports::print_json(&outcomes)?;
            Ok(DriverSummary::from_outcomes(&outcomes))
        }
    }
}
