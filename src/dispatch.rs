use crate::error::{TrackerError, TrackerResult};
use crate::workout::{Running, SportsWalking, Swimming, WorkoutKind, WorkoutSample};
use tracing::debug;

/// Decodes a raw sensor packet into a typed workout.
///
/// `data` is positional; see [`WorkoutKind::field_names`] for the order each
/// kind expects. Only the shape of the packet is checked here: value ranges
/// are left to [`crate::workout::Training::validate`].
pub fn read_package(workout_type: &str, data: &[f64]) -> TrackerResult<WorkoutSample> {
    let kind = WorkoutKind::from_code(workout_type)?;

    let fields = kind.field_names();
    if data.len() != fields.len() {
        return Err(TrackerError::MalformedPacket {
            code: kind.code().to_string(),
            expected: format!("{} values ({})", fields.len(), fields.join(", ")),
            found: format!("{} values", data.len()),
        });
    }

    debug!("Decoding {} packet: {:?}", kind, data);

    let action = whole_number(kind, "action", data[0], u64::MAX as f64)?;
    let (duration, weight) = (data[1], data[2]);

    let sample: WorkoutSample = match kind {
        WorkoutKind::Run => Running::new(action, duration, weight).into(),
        WorkoutKind::Walk => SportsWalking::new(action, duration, weight, data[3]).into(),
        WorkoutKind::Swim => {
            let laps = whole_number(kind, "pool_laps", data[4], u32::MAX as f64)?;
            Swimming::new(action, duration, weight, data[3], laps as u32).into()
        }
    };

    Ok(sample)
}

fn whole_number(kind: WorkoutKind, field: &str, value: f64, max: f64) -> TrackerResult<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= max {
        Ok(value as u64)
    } else {
        Err(TrackerError::MalformedPacket {
            code: kind.code().to_string(),
            expected: format!("a non-negative whole number for '{}'", field),
            found: value.to_string(),
        })
    }
}
