use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fittrack::driver::PacketOutcome;

pub fn summary(outcomes: &[PacketOutcome]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Workout").add_attribute(Attribute::Bold),
        Cell::new("Duration (h)"),
        Cell::new("Distance (km)"),
        Cell::new("Avg speed (km/h)"),
        Cell::new("Calories").fg(Color::Cyan),
    ]);

    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_duration = 0.0;
    let mut total_distance = 0.0;
    let mut total_calories = 0.0;

    for outcome in outcomes {
        match &outcome.result {
            Ok(r) => {
                total_duration += r.duration_hours;
                total_distance += r.distance_km;
                total_calories += r.calories;

                table.add_row(vec![
                    Cell::new(outcome.index),
                    Cell::new(&r.kind_label).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:.3}", r.duration_hours)),
                    Cell::new(format!("{:.3}", r.distance_km)),
                    Cell::new(format!("{:.3}", r.avg_speed_kmh)),
                    Cell::new(format!("{:.3}", r.calories)).fg(Color::Cyan),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new(outcome.index),
                    Cell::new(&outcome.workout_type).fg(Color::Red),
                    Cell::new(e.to_string()).fg(Color::Red),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
        }
    }

    table.add_row(vec![
        Cell::new(""),
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", total_duration)),
        Cell::new(format!("{:.3}", total_distance)),
        Cell::new(""),
        Cell::new(format!("{:.3}", total_calories)).add_attribute(Attribute::Bold),
    ]);

    println!("{}", table);
}
