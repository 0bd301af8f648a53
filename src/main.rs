use anyhow::Result;
use clap::Parser;
use jumbler::cli::Cli;
use jumbler::commands::{run_find, FindConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = FindConfig::resolve(jumbler::config::load_config(), cli.dict);
    log::debug!("Using word list {}", config.dictionary.display());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_find(&config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

// Side effect: logger writes to stderr so stdout carries only matches
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
