use serde::{Deserialize, Serialize};

/// An album as stored in the catalog: a unique name and its release year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub year: i32,
}

impl Album {
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Album {
            name: name.into(),
            year,
        }
    }
}

impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.year)
    }
}
