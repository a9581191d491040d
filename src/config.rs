use crate::error::{TrackerError, TrackerResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary sentence per workout
    #[default]
    Line,
    /// A table with a totals row
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Line)]
    pub format: OutputFormat,

    /// Stop at the first packet that cannot be processed
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Line,
            fail_fast: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TrackerError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            TrackerError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })
    }

    /// Overlays values the user typed on the command line; defaults filled in
    /// by clap do not override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(output.format);
        update_if_present!(output.fail_fast);
    }
}
