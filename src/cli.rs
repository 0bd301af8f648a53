use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jumbler")]
#[command(about = "List dictionary words that match an anagram", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Word list to search (one word per line); overrides .jumbler.toml
    #[arg(short, long = "dict", value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show lookup summary
    /// -vv: Show config and word list loading
    /// -vvv: Show all trace information
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Default log level for the verbosity count; `RUST_LOG` still wins.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
