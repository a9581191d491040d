use fittrack::driver::PacketOutcome;
use fittrack::{TrackerResult, WorkoutReport};
use serde::Serialize;

#[derive(Serialize)]
struct OutcomeView<'a> {
    index: usize,
    workout_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a WorkoutReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn print(outcomes: &[PacketOutcome]) -> TrackerResult<()> {
    let views: Vec<OutcomeView> = outcomes
        .iter()
        .map(|o| OutcomeView {
            index: o.index,
            workout_type: &o.workout_type,
            report: o.result.as_ref().ok(),
            error: o.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}
