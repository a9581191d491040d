use clap::Args;
use fittrack::config::Config;
use fittrack::driver::DriverSummary;
use fittrack::packets::default_packets;
use fittrack::TrackerResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: &Config) -> TrackerResult<DriverSummary> {
    let packets = default_packets();
    info!("🏊 Replaying {} bundled sample packets", packets.len());
    super::execute(&packets, config)
}
