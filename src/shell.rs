//! Interactive menu over a [`Library`].
//!
//! Every menu action collects its fields, calls exactly one library operation
//! and prints either a confirmation or the failure message.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, warn};

use crate::artist::Artist;
use crate::config::Config;
use crate::error::CatalogError;
use crate::fs;
use crate::library::Library;
use crate::song::{DurationPolicy, Song};

const MENU: &str = "\n=== MENU ===\n\
                    1. Add Album\n\
                    2. Add Song\n\
                    3. Edit Album Title\n\
                    4. Delete Album\n\
                    5. Edit Song\n\
                    6. Delete Song\n\
                    7. Display Library\n\
                    8. Save\n\
                    9. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddAlbum,
    AddSong,
    EditAlbumTitle,
    DeleteAlbum,
    EditSong,
    DeleteSong,
    Display,
    Save,
    Exit,
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Action::AddAlbum),
            "2" => Ok(Action::AddSong),
            "3" => Ok(Action::EditAlbumTitle),
            "4" => Ok(Action::DeleteAlbum),
            "5" => Ok(Action::EditSong),
            "6" => Ok(Action::DeleteSong),
            "7" => Ok(Action::Display),
            "8" => Ok(Action::Save),
            "9" => Ok(Action::Exit),
            _ => Err(()),
        }
    }
}

/// Why an action stopped before printing a confirmation.
enum Abort {
    /// Exit was chosen or input ran out.
    Quit,
    /// Bad field value or rejected operation; the message is shown to the user.
    Failed(String),
    Io(io::Error),
}

impl From<io::Error> for Abort {
    fn from(e: io::Error) -> Self {
        Abort::Io(e)
    }
}

impl From<CatalogError> for Abort {
    fn from(e: CatalogError) -> Self {
        Abort::Failed(e.to_string())
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    library: Library,
    library_file: PathBuf,
    policy: DurationPolicy,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Shell {
            input,
            output,
            library: Library::new(),
            library_file: config.library_file.clone(),
            policy: config.duration_policy,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Replaces the in-memory library with the content of the library file.
    ///
    /// Load failures are reported and leave the library empty.
    pub fn load(&mut self) -> io::Result<()> {
        match fs::load(&self.library_file, self.policy) {
            Ok(Some(library)) => {
                self.library = library;
                writeln!(self.output, "Loaded.")
            }
            Ok(None) => {
                self.library = Library::new();
                writeln!(self.output, "No previous library.")
            }
            Err(e) => {
                warn!("Could not load {:?}: {}", self.library_file, e);
                self.library = Library::new();
                writeln!(self.output, "{}\nStarting with an empty library.", e)
            }
        }
    }

    /// Runs the menu until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };

            let Ok(action) = choice.parse::<Action>() else {
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };
            debug!("Menu action: {:?}", action);

            match self.dispatch(action) {
                Ok(message) | Err(Abort::Failed(message)) => {
                    writeln!(self.output, "{}", message)?
                }
                Err(Abort::Quit) => break,
                Err(Abort::Io(e)) => return Err(e),
            }
        }

        self.output.flush()
    }

    fn dispatch(&mut self, action: Action) -> Result<String, Abort> {
        match action {
            Action::AddAlbum => {
                let title = self.field("Enter album title: ")?;
                self.library.add_album(title)?;
                Ok("Album added.".to_string())
            }
            Action::AddSong => {
                let album = self.index("Album index: ")?;
                let song = self.song_fields()?;
                self.library.add_song_to_album(album, song)?;
                Ok("Song added.".to_string())
            }
            Action::EditAlbumTitle => {
                let album = self.index("Album index: ")?;
                let title = self.field("New album title: ")?;
                self.library.edit_album_title(album, title)?;
                Ok("Album title updated.".to_string())
            }
            Action::DeleteAlbum => {
                let album = self.index("Album index: ")?;
                self.library.delete_album(album)?;
                Ok("Album deleted.".to_string())
            }
            Action::EditSong => {
                let album = self.index("Album index: ")?;
                let index = self.index("Song index: ")?;
                // Fail on a bad index before asking for the new fields.
                self.library.song(album, index)?;
                let song = self.song_fields()?;
                self.library.edit_song(album, index, song)?;
                Ok("Song updated.".to_string())
            }
            Action::DeleteSong => {
                let album = self.index("Album index: ")?;
                let index = self.index("Song index: ")?;
                self.library.delete_song(album, index)?;
                Ok("Song deleted.".to_string())
            }
            Action::Display => Ok(self.library.to_string()),
            Action::Save => {
                fs::save(&self.library, &self.library_file)?;
                Ok("Saved.".to_string())
            }
            Action::Exit => Err(Abort::Quit),
        }
    }

    fn song_fields(&mut self) -> Result<Song, Abort> {
        let title = self.field("Song title: ")?;
        let name = self.field("Artist name: ")?;
        let genre = self.field("Genre: ")?;
        let year_born: i32 = self.number("Year born: ", "Invalid year.")?;
        let duration: f64 = self.number("Duration: ", "Invalid duration.")?;

        Ok(Song::with_policy(
            title,
            Artist::new(name, genre, year_born),
            duration,
            self.policy,
        )?)
    }

    fn index(&mut self, label: &str) -> Result<usize, Abort> {
        self.number(label, "Invalid index.")
    }

    fn number<T: FromStr>(&mut self, label: &str, invalid: &str) -> Result<T, Abort> {
        let raw = self.field(label)?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| Abort::Failed(invalid.to_string()))
    }

    fn field(&mut self, label: &str) -> Result<String, Abort> {
        self.prompt(label)?.ok_or(Abort::Quit)
    }

    /// Prints `label` and reads one line without its line ending.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        let config = Config {
            library_file: PathBuf::from("/nonexistent/library.txt"),
            ..Config::default()
        };
        Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config)
    }

    fn run(input: &str) -> (Library, String) {
        let mut shell = shell(input);
        shell.run().unwrap();
        let library = shell.library().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (library, output)
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!("1".parse::<Action>(), Ok(Action::AddAlbum));
        assert_eq!(" 9 ".parse::<Action>(), Ok(Action::Exit));
        assert!("0".parse::<Action>().is_err());
        assert!("add".parse::<Action>().is_err());
    }

    #[test]
    fn adds_album_and_song() {
        let (library, output) = run("1\nGreatest Hits\n2\n0\nIntro\nAda\nSynth\n1990\n3.5\n9\n");

        assert!(output.contains("Album added."));
        assert!(output.contains("Song added."));
        let song = library.album(0).unwrap().song(0).unwrap();
        assert_eq!(song.title(), "Intro");
        assert_eq!(song.artist().genre, "Synth");
        assert_eq!(song.duration(), 3.5);
    }

    #[test]
    fn unknown_choice_reprompts() {
        let (library, output) = run("42\nabc\n9\n");
        assert_eq!(output.matches("Invalid choice.").count(), 2);
        assert!(library.is_empty());
    }

    #[test]
    fn end_of_input_exits_mid_action() {
        let (library, _) = run("1\n");
        assert!(library.is_empty());
    }

    #[test]
    fn bad_album_index_is_reported() {
        let (_, output) = run("4\n3\n9\n");
        assert!(output.contains("Invalid album index 3 (0 available)."));
    }

    #[test]
    fn non_numeric_index_is_reported() {
        let (_, output) = run("4\n-1\n9\n");
        assert!(output.contains("Invalid index."));
    }

    #[test]
    fn negative_duration_is_rejected_without_mutation() {
        let (library, output) = run("1\nA\n2\n0\nT\nN\nG\n1990\n-3\n9\n");
        assert!(output.contains("Invalid duration -3"));
        assert_eq!(library.album(0).unwrap().num_songs(), 0);
    }

    #[test]
    fn edit_song_checks_index_before_fields() {
        let (library, output) = run("1\nA\n2\n0\nT\nN\nG\n1990\n3\n5\n0\n5\n9\n");
        assert!(output.contains("Invalid song index 5 (1 available)."));
        assert!(!output.contains("Song updated."));
        assert_eq!(library.album(0).unwrap().song(0).unwrap().title(), "T");
    }

    #[test]
    fn edit_and_delete_song() {
        let (library, output) = run(
            "1\nA\n\
             2\n0\nOne\nN\nG\n1990\n3\n\
             2\n0\nTwo\nN\nG\n1990\n4\n\
             5\n0\n1\nDeux\nM\nH\n1991\n4.5\n\
             6\n0\n0\n\
             9\n",
        );

        assert!(output.contains("Song updated."));
        assert!(output.contains("Song deleted."));
        let album = library.album(0).unwrap();
        assert_eq!(album.num_songs(), 1);
        assert_eq!(album.song(0).unwrap().title(), "Deux");
        assert_eq!(album.song(0).unwrap().artist().year_born, 1991);
    }

    #[test]
    fn rename_and_delete_album() {
        let (library, output) = run("1\nA\n1\nB\n3\n1\nBee\n4\n0\n7\n9\n");
        assert!(output.contains("Album title updated."));
        assert!(output.contains("Album deleted."));
        assert!(output.contains("===== ALBUM #0 =====\nAlbum: Bee"));
        assert_eq!(library.num_albums(), 1);
    }

    #[test]
    fn load_without_file_starts_empty() {
        let mut shell = shell("");
        shell.load().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(output, "No previous library.\n");
    }
}
