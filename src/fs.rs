//! Flat text persistence for the [`Library`].
//!
//! One value per line: album count, then per album its title and song count,
//! then per song title, artist name, genre, year born and duration.

use std::path::Path;
use std::str::{FromStr, Lines};
use std::{fs, io};

use log::{debug, info};

use crate::album::{ALBUM_CAPACITY, Album};
use crate::artist::Artist;
use crate::error::{CatalogError, Result};
use crate::library::{LIBRARY_CAPACITY, Library};
use crate::song::{DurationPolicy, Song};

/// Writes `library` to `path`, replacing any previous content.
///
/// Nothing is written when a text field cannot be represented on one line.
pub fn save(library: &Library, path: &Path) -> Result<()> {
    debug!("Saving library to {:?}", path);
    let content = encode(library)?;
    fs::write(path, content)?;
    info!("Saved {} albums to {:?}", library.num_albums(), path);
    Ok(())
}

/// Reads a library from `path`.
///
/// Returns `Ok(None)` when there is no file yet; callers start with an empty
/// library in that case. Content that is not UTF-8 is a parse error.
pub fn load(path: &Path, policy: DurationPolicy) -> Result<Option<Library>> {
    debug!("Loading library from {:?}", path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No previous library at {:?}", path);
            return Ok(None);
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(CatalogError::Parse {
                line: 0,
                message: "file is not valid UTF-8".to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let library = decode(&content, policy)?;
    info!("Loaded {} albums from {:?}", library.num_albums(), path);
    Ok(Some(library))
}

pub fn encode(library: &Library) -> Result<String> {
    let mut content = String::new();

    content.push_str(&format!("{}\n", library.num_albums()));
    for album in library.albums() {
        push_text(&mut content, "album title", album.title())?;
        content.push_str(&format!("{}\n", album.num_songs()));

        for song in album.songs() {
            let artist = song.artist();
            push_text(&mut content, "song title", song.title())?;
            push_text(&mut content, "artist name", &artist.name)?;
            push_text(&mut content, "genre", &artist.genre)?;
            content.push_str(&format!("{}\n", artist.year_born));
            content.push_str(&format!("{}\n", song.duration()));
        }
    }

    Ok(content)
}

pub fn decode(content: &str, policy: DurationPolicy) -> Result<Library> {
    let mut reader = LineReader::new(content);
    let mut library = Library::new();

    let album_count: usize = reader.number("album count")?;
    if album_count > LIBRARY_CAPACITY {
        return Err(reader.error(format!(
            "{} albums exceed the library capacity of {}",
            album_count, LIBRARY_CAPACITY
        )));
    }

    for _ in 0..album_count {
        let mut album = Album::new(reader.text("album title")?);

        let song_count: usize = reader.number("song count")?;
        if song_count > ALBUM_CAPACITY {
            return Err(reader.error(format!(
                "{} songs exceed the album capacity of {}",
                song_count, ALBUM_CAPACITY
            )));
        }

        for _ in 0..song_count {
            let title = reader.text("song title")?;
            let name = reader.text("artist name")?;
            let genre = reader.text("genre")?;
            let year_born: i32 = reader.number("year born")?;
            let duration: f64 = reader.number("duration")?;

            let song = Song::with_policy(
                title,
                Artist::new(name, genre, year_born),
                duration,
                policy,
            )
            .map_err(|e| reader.error(e.to_string()))?;
            album.add_song(song)?;
        }

        library.push_album(album)?;
    }

    reader.finish()?;
    Ok(library)
}

fn push_text(content: &mut String, field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(CatalogError::UnencodableField {
            field: format!("{} {:?}", field, value),
        });
    }
    content.push_str(value);
    content.push('\n');
    Ok(())
}

/// Positional reader that remembers the current line for error reporting.
struct LineReader<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(content: &'a str) -> Self {
        LineReader {
            lines: content.lines(),
            line: 0,
        }
    }

    fn text(&mut self, what: &str) -> Result<&'a str> {
        self.line += 1;
        self.lines
            .next()
            .ok_or_else(|| self.error(format!("missing {}", what)))
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let raw = self.text(what)?.trim();
        raw.parse::<T>()
            .map_err(|_| self.error(format!("expected {}, found {:?}", what, raw)))
    }

    fn finish(mut self) -> Result<()> {
        while let Some(rest) = self.lines.next() {
            self.line += 1;
            if !rest.trim().is_empty() {
                debug!("Unexpected trailing line: {}", rest);
                return Err(self.error("unexpected data after the last album".to_string()));
            }
        }
        Ok(())
    }

    fn error(&self, message: String) -> CatalogError {
        CatalogError::Parse {
            line: self.line,
            message,
        }
    }
}
