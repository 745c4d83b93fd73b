use color_eyre::Result;
use eventfeed::cli::{parse_args, run, version_line, CliCommand, USAGE};
use tracing_subscriber::EnvFilter;

/// Default log filter when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => println!("{}", version_line()),
        CliCommand::Help => println!("{}", USAGE),
        CliCommand::Run(options) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let summary = runtime.block_on(run(&options, &mut out))?;
            tracing::info!(
                events = summary.events,
                reconnect_intervals = summary.reconnect_intervals,
                deltas = summary.deltas,
                "done"
            );
        }
    }

    Ok(())
}
