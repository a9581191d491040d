use clap::Args;
use fittrack::config::Config;
use fittrack::driver::DriverSummary;
use fittrack::packets::load_packets_from_file;
use fittrack::TrackerResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: Config,

    /// Packet file (.json, .csv or .tsv)
    #[arg(short, long)]
    pub input: String,
}

pub fn run(args: &ReportArgs, config: &Config) -> TrackerResult<DriverSummary> {
    info!("📂 Loading packets: {}", args.input);
    let packets = load_packets_from_file(&args.input)?;

    if packets.is_empty() {
        warn!("No packets found in {}", args.input);
    }

    super::execute(&packets, config)
}
