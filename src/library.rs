use std::fmt;

use log::{debug, info};

use crate::album::Album;
use crate::error::{CatalogError, Entity, Result};
use crate::song::Song;

pub const LIBRARY_CAPACITY: usize = 5;

/// The whole catalog. Albums are kept in insertion order and addressed by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    albums: Vec<Album>,
}

impl Library {
    pub fn new() -> Self {
        Library {
            albums: Vec::with_capacity(LIBRARY_CAPACITY),
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    /// Looks up a song, validating the album index first.
    pub fn song(&self, album_index: usize, song_index: usize) -> Result<&Song> {
        self.check_index(album_index)?;
        let album = &self.albums[album_index];
        album.song(song_index).ok_or(CatalogError::IndexOutOfRange {
            entity: Entity::Song,
            index: song_index,
            len: album.num_songs(),
        })
    }

    pub fn num_albums(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.albums.len() >= LIBRARY_CAPACITY
    }

    pub fn add_album(&mut self, title: impl Into<String>) -> Result<()> {
        self.push_album(Album::new(title))
    }

    /// Appends an already populated album, e.g. one read back from disk.
    pub(crate) fn push_album(&mut self, album: Album) -> Result<()> {
        if self.is_full() {
            return Err(CatalogError::CapacityExceeded {
                entity: Entity::Library,
                capacity: LIBRARY_CAPACITY,
            });
        }

        info!("Album added: {}", album.title());
        self.albums.push(album);
        Ok(())
    }

    /// Removes the album at `index`; later albums move down by one.
    pub fn delete_album(&mut self, index: usize) -> Result<Album> {
        self.check_index(index)?;
        let album = self.albums.remove(index);
        info!("Album deleted: {}", album.title());
        Ok(album)
    }

    pub fn edit_album_title(&mut self, index: usize, title: impl Into<String>) -> Result<()> {
        self.album_mut(index)?.set_title(title);
        Ok(())
    }

    pub fn add_song_to_album(&mut self, album_index: usize, song: Song) -> Result<()> {
        self.album_mut(album_index)?.add_song(song)
    }

    pub fn delete_song(&mut self, album_index: usize, song_index: usize) -> Result<Song> {
        self.album_mut(album_index)?.delete_song(song_index)
    }

    pub fn edit_song(&mut self, album_index: usize, song_index: usize, song: Song) -> Result<()> {
        self.album_mut(album_index)?.edit_song(song_index, song)
    }

    // Album index is always validated here, before any album-level check.
    fn album_mut(&mut self, index: usize) -> Result<&mut Album> {
        self.check_index(index)?;
        debug!("Selected album #{}", index);
        Ok(&mut self.albums[index])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.albums.len() {
            Ok(())
        } else {
            Err(CatalogError::IndexOutOfRange {
                entity: Entity::Album,
                index,
                len: self.albums.len(),
            })
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=== MUSIC LIBRARY ===")?;
        for (i, album) in self.albums.iter().enumerate() {
            write!(f, "\n\n===== ALBUM #{} =====\n{}", i, album)?;
        }
        Ok(())
    }
}
