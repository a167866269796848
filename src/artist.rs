use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artist {
    pub name: String,
    pub genre: String,
    pub year_born: i32,
}

impl Artist {
    pub fn new(name: impl Into<String>, genre: impl Into<String>, year_born: i32) -> Self {
        Artist {
            name: name.into(),
            genre: genre.into(),
            year_born,
        }
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Artist: {} | Genre: {} | Born: {}",
            self.name, self.genre, self.year_born
        )
    }
}
