use std::fmt;

use log::debug;

use crate::error::{CatalogError, Entity, Result};
use crate::song::Song;

pub const ALBUM_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    title: String,
    songs: Vec<Song>,
}

impl Album {
    pub fn new(title: impl Into<String>) -> Self {
        Album {
            title: title.into(),
            songs: Vec::with_capacity(ALBUM_CAPACITY),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn num_songs(&self) -> usize {
        self.songs.len()
    }

    pub fn is_full(&self) -> bool {
        self.songs.len() >= ALBUM_CAPACITY
    }

    pub fn add_song(&mut self, song: Song) -> Result<()> {
        if self.is_full() {
            return Err(CatalogError::CapacityExceeded {
                entity: Entity::Album,
                capacity: ALBUM_CAPACITY,
            });
        }

        debug!("Adding '{}' to album '{}'", song.title(), self.title);
        self.songs.push(song);
        Ok(())
    }

    /// Removes the song at `index`; later songs move down by one.
    pub fn delete_song(&mut self, index: usize) -> Result<Song> {
        self.check_index(index)?;
        Ok(self.songs.remove(index))
    }

    /// Replaces the song at `index` in place.
    pub fn edit_song(&mut self, index: usize, song: Song) -> Result<()> {
        self.check_index(index)?;
        self.songs[index] = song;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.songs.len() {
            Ok(())
        } else {
            Err(CatalogError::IndexOutOfRange {
                entity: Entity::Song,
                index,
                len: self.songs.len(),
            })
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Album: {}", self.title)?;
        write!(f, "Songs: {}", self.songs.len())?;
        for (i, song) in self.songs.iter().enumerate() {
            write!(f, "\n---- Song #{} ----\n{}", i, song)?;
        }
        Ok(())
    }
}
