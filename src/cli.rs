// Clap definitions in derive style

use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "mucat", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON config file
    #[clap(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Accept songs with a negative duration
    #[clap(long, default_value_t = false)]
    pub allow_negative_duration: bool,

    /// Library file (defaults to library.txt)
    #[clap(value_name = "LIBRARY_FILE")]
    pub library_path: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
