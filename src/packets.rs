use crate::dispatch::read_package;
use crate::error::{TrackerError, TrackerResult};
use crate::workout::WorkoutSample;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// A raw packet as the tracker hands it over: a type code plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPacket {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn decode(&self) -> TrackerResult<WorkoutSample> {
        read_package(&self.workout_type, &self.data)
    }
}

/// The sample session bundled with the tracker.
pub fn default_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", &[15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Loads packets from disk. `.json` files hold an array of packets, everything
/// else is read as delimited rows (`.tsv` splits on tabs, the rest on commas).
pub fn load_packets_from_file<P: AsRef<Path>>(path: P) -> TrackerResult<Vec<SensorPacket>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        TrackerError::Io(std::io::Error::new(
            e.kind(),
            format!("Could not open packet file '{}': {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let packets = match ext.as_deref() {
        Some("json") => load_packets_json(reader)?,
        Some("tsv") => load_packets_delimited(reader, b'\t')?,
        _ => load_packets_delimited(reader, b',')?,
    };

    info!("Loaded {} packets from {}", packets.len(), path.display());
    Ok(packets)
}

pub fn load_packets_json<R: Read>(reader: R) -> TrackerResult<Vec<SensorPacket>> {
    Ok(serde_json::from_reader(reader)?)
}

/// One packet per row: `CODE,v1,v2,...`. Rows may differ in length. A leading
/// `workout_type` header and blank rows are skipped.
pub fn load_packets_delimited<R: Read>(reader: R, delimiter: u8) -> TrackerResult<Vec<SensorPacket>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut packets = Vec::new();
    let mut row_idx = 0;

    for result in rdr.records() {
        row_idx += 1;
        let rec = result?;

        let Some(code) = rec.get(0) else {
            continue;
        };
        if code.is_empty() && rec.len() <= 1 {
            continue;
        }
        if row_idx == 1 && code.eq_ignore_ascii_case("workout_type") {
            continue;
        }

        let mut data = Vec::with_capacity(rec.len().saturating_sub(1));
        for field in rec.iter().skip(1) {
            if field.is_empty() {
                continue;
            }
            let value: f64 = field.parse().map_err(|_| {
                TrackerError::Validation(format!(
                    "Row {}: '{}' is not a number",
                    row_idx, field
                ))
            })?;
            data.push(value);
        }

        packets.push(SensorPacket {
            workout_type: code.to_string(),
            data,
        });
    }

    if packets.is_empty() {
        warn!("Packet source contained no rows");
    }

    Ok(packets)
}
