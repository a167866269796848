use std::fmt;

use thiserror::Error;

/// What an index or capacity error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Library,
    Album,
    Song,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Library => write!(f, "library"),
            Entity::Album => write!(f, "album"),
            Entity::Song => write!(f, "song"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid {entity} index {index} ({len} available).")]
    IndexOutOfRange {
        entity: Entity,
        index: usize,
        len: usize,
    },

    #[error("The {entity} is full ({capacity} max).")]
    CapacityExceeded { entity: Entity, capacity: usize },

    #[error("Invalid duration {0}: must be a non-negative number of minutes.")]
    InvalidDuration(f64),

    #[error("Cannot save {field}: line breaks are not supported.")]
    UnencodableField { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed library file at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
