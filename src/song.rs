use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single song. Two songs are the same entry iff name, album reference and
/// duration all match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Length in seconds.
    pub duration: f64,
}

impl Song {
    pub fn new(name: impl Into<String>, album: Option<&str>, duration: f64) -> Self {
        Song {
            name: name.into(),
            album: album.map(str::to_string),
            duration,
        }
    }

    pub fn has_album(&self) -> bool {
        self.album.is_some()
    }

    /// True when the song references exactly `album`.
    pub fn is_in(&self, album: &str) -> bool {
        self.album.as_deref() == Some(album)
    }

    // -0.0 and 0.0 must land on the same key
    fn duration_bits(&self) -> u64 {
        if self.duration == 0.0 {
            0.0f64.to_bits()
        } else {
            self.duration.to_bits()
        }
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.album == other.album
            && self.duration_bits() == other.duration_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration_bits().hash(state);
    }
}

impl From<&Song> for String {
    fn from(value: &Song) -> Self {
        let album = value.album.as_deref().unwrap_or("No Album");
        format!("{} - {} ({:.1}s)", album, value.name, value.duration)
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(self))
    }
}
