use std::fmt;

use serde::Deserialize;

use crate::artist::Artist;
use crate::error::{CatalogError, Result};

/// How song durations are validated when a song is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationPolicy {
    /// Negative, NaN and infinite durations fail with `InvalidDuration`.
    #[default]
    Reject,
    /// Any value is stored as given.
    Allow,
}

impl DurationPolicy {
    pub fn check(self, minutes: f64) -> Result<f64> {
        match self {
            DurationPolicy::Allow => Ok(minutes),
            DurationPolicy::Reject if minutes.is_finite() && minutes >= 0.0 => Ok(minutes),
            DurationPolicy::Reject => Err(CatalogError::InvalidDuration(minutes)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    title: String,
    artist: Artist,
    duration: f64,
}

impl Song {
    /// Builds a song, rejecting negative durations.
    pub fn new(title: impl Into<String>, artist: Artist, duration: f64) -> Result<Self> {
        Self::with_policy(title, artist, duration, DurationPolicy::Reject)
    }

    pub fn with_policy(
        title: impl Into<String>,
        artist: Artist,
        duration: f64,
        policy: DurationPolicy,
    ) -> Result<Self> {
        let duration = policy.check(duration)?;
        Ok(Song {
            title: title.into(),
            artist,
            duration,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &Artist {
        &self.artist
    }

    /// Duration in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Song: {}", self.title)?;
        writeln!(f, "{}", self.artist)?;
        write!(f, "Duration: {} mins", self.duration)
    }
}
