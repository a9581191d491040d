mod json;
mod tables;

pub use self::json::print as print_json;
pub use self::tables::summary as print_summary_table;
