use crate::error::TrackerResult;
use crate::packets::SensorPacket;
use crate::report::WorkoutReport;
use crate::workout::Training;
use std::io::Write;
use tracing::{debug, error};

/// Result of pushing one packet through decode, formulas and validation.
#[derive(Debug)]
pub struct PacketOutcome {
    pub index: usize,
    pub workout_type: String,
    pub result: TrackerResult<WorkoutReport>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverSummary {
    pub processed: usize,
    pub failed: usize,
}

impl DriverSummary {
    pub fn from_outcomes(outcomes: &[PacketOutcome]) -> Self {
        Self {
            processed: outcomes.len(),
            failed: outcomes.iter().filter(|o| o.result.is_err()).count(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

pub fn process_packet(packet: &SensorPacket) -> TrackerResult<WorkoutReport> {
    packet.decode()?.summarize()
}

/// Processes packets strictly in input order. A failed packet is logged and
/// skipped; with `fail_fast` processing stops right after it.
pub fn process_packets(packets: &[SensorPacket], fail_fast: bool) -> Vec<PacketOutcome> {
    let mut outcomes = Vec::with_capacity(packets.len());

    for (index, packet) in packets.iter().enumerate() {
        let result = process_packet(packet);
        let failed = result.is_err();

        match &result {
            Ok(report) => debug!("#{} {} -> {}", index, packet.workout_type, report),
            Err(e) => error!("Packet #{} ({}) failed: {}", index, packet.workout_type, e),
        }

        outcomes.push(PacketOutcome {
            index,
            workout_type: packet.workout_type.clone(),
            result,
        });

        if failed && fail_fast {
            break;
        }
    }

    outcomes
}

/// Writes one report line per successful packet to `out`.
pub fn run<W: Write>(
    packets: &[SensorPacket],
    fail_fast: bool,
    out: &mut W,
) -> TrackerResult<DriverSummary> {
    let outcomes = process_packets(packets, fail_fast);
    for outcome in &outcomes {
        if let Ok(report) = &outcome.result {
            writeln!(out, "{}", report.message())?;
        }
    }
    Ok(DriverSummary::from_outcomes(&outcomes))
}
