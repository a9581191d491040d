use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use fittrack::config::Config;
use fittrack::TrackerResult;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with output settings; explicit flags win over it
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize the bundled sample session
    Demo(cmd::demo::DemoArgs),
    /// Summarize packets read from a JSON or CSV file
    Report(cmd::report::ReportArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(
    config_file: Option<&str>,
    cli_config: &Config,
    sub_matches: &ArgMatches,
) -> TrackerResult<Config> {
    match config_file {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(cli_config, sub_matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let (cli_config, sub_name) = match &cli.command {
        Commands::Demo(args) => (&args.config, "demo"),
        Commands::Report(args) => (&args.config, "report"),
    };
    let sub_matches = matches.subcommand_matches(sub_name).unwrap_or(&matches);

    let config = resolve_config(cli.config_file.as_deref(), cli_config, sub_matches)
        .unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });

    let outcome = match &cli.command {
        Commands::Demo(_) => cmd::demo::run(&config),
        Commands::Report(args) => cmd::report::run(args, &config),
    };

    match outcome {
        Ok(summary) if summary.is_clean() => {
            info!("✅ {} workouts summarized", summary.processed);
        }
        Ok(summary) => {
            warn!(
                "⚠️  {} of {} packets failed",
                summary.failed, summary.processed
            );
            process::exit(1);
        }
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
