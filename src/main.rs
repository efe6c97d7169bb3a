use clap::Parser;
use plaindeck::cli::commands::Cli;
use plaindeck::cli::handlers;
use tracing_subscriber::EnvFilter;

/// `PLAINDECK_LOG` wins; otherwise `-v` flags pick the level. Logs go to
/// stderr so `--json` output stays clean.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "plaindeck=warn",
        1 => "plaindeck=info",
        2 => "plaindeck=debug",
        _ => "plaindeck=trace",
    };
    let filter =
        EnvFilter::try_from_env("PLAINDECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
