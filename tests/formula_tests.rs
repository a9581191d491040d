use fittrack::workout::{Running, SportsWalking, Swimming, Training, WorkoutSample};
use rstest::rstest;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case::bundled_run(Running::new(15000, 1.0, 75.0), 9.75, 9.75, 699.75)]
#[case::half_hour(Running::new(6000, 0.5, 60.0), 3.9, 7.8, (18.0 * 7.8 - 20.0) * 60.0 / 1000.0 * 30.0)]
fn running_formulas(
    #[case] run: Running,
    #[case] distance: f64,
    #[case] speed: f64,
    #[case] calories: f64,
) {
    assert_close(run.distance_km(), distance);
    assert_close(run.mean_speed_kmh(), speed);
    assert_close(run.spent_calories(), calories);
}

#[rstest]
#[case::bundled_walk(SportsWalking::new(9000, 1.0, 75.0, 180.0), 5.85, 5.85, 157.5)]
#[case::two_hours(SportsWalking::new(12000, 2.0, 90.0, 170.0), 7.8, 3.9, 0.035 * 90.0 * 120.0)]
fn walking_formulas(
    #[case] walk: SportsWalking,
    #[case] distance: f64,
    #[case] speed: f64,
    #[case] calories: f64,
) {
    assert_close(walk.distance_km(), distance);
    assert_close(walk.mean_speed_kmh(), speed);
    assert_close(walk.spent_calories(), calories);
}

#[rstest]
#[case::bundled_swim(Swimming::new(720, 1.0, 80.0, 25.0, 40), 0.9936, 1.0, 336.0)]
#[case::long_pool(Swimming::new(1000, 2.0, 70.0, 50.0, 60), 1.38, 1.5, (1.5 + 1.1) * 2.0 * 70.0)]
fn swimming_formulas(
    #[case] swim: Swimming,
    #[case] distance: f64,
    #[case] speed: f64,
    #[case] calories: f64,
) {
    assert_close(swim.distance_km(), distance);
    assert_close(swim.mean_speed_kmh(), speed);
    assert_close(swim.spent_calories(), calories);
}

#[test]
fn swim_speed_ignores_stroke_count() {
    let few = Swimming::new(10, 1.0, 80.0, 25.0, 40);
    let many = Swimming::new(10_000, 1.0, 80.0, 25.0, 40);
    assert_close(few.mean_speed_kmh(), many.mean_speed_kmh());
    assert!(many.distance_km() > few.distance_km());
}

#[test]
fn sample_forwards_to_the_concrete_workout() {
    let run = Running::new(15000, 1.0, 75.0);
    let sample = WorkoutSample::from(run);
    assert_close(sample.distance_km(), run.distance_km());
    assert_close(sample.mean_speed_kmh(), run.mean_speed_kmh());
    assert_close(sample.spent_calories(), run.spent_calories());
}

#[rstest]
#[case::run(WorkoutSample::from(Running::new(15000, 1.0, 75.0)), "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories: 699.750.")]
#[case::walk(WorkoutSample::from(SportsWalking::new(9000, 1.0, 75.0, 180.0)), "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories: 157.500.")]
#[case::swim(WorkoutSample::from(Swimming::new(720, 1.0, 80.0, 25.0, 40)), "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories: 336.000.")]
fn summary_lines(#[case] sample: WorkoutSample, #[case] expected: &str) {
    let report = sample.summarize().expect("valid sample");
    assert_eq!(report.message(), expected);
}
