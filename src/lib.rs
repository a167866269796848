pub mod album;
pub mod artist;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod library;
pub mod shell;
pub mod song;

pub use album::{ALBUM_CAPACITY, Album};
pub use artist::Artist;
pub use config::Config;
pub use error::{CatalogError, Entity, Result};
pub use library::{LIBRARY_CAPACITY, Library};
pub use song::{DurationPolicy, Song};

/// Loads the configured library file and runs the menu on stdin/stdout.
pub fn run(config: &Config) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut shell = shell::Shell::new(stdin.lock(), std::io::stdout(), config);
    shell.load()?;
    shell.run()
}
