use crate::error::CatalogError;
use crate::song::Song;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// In-memory catalog of albums (name -> year) and songs.
///
/// Songs are kept in a set keyed on (name, album, duration) and also in the
/// order they were first inserted, which decides ties in the `longest_*`
/// queries. Nothing can be removed once added.
#[derive(Debug, Default, Clone)]
pub struct MusicCatalog {
    albums: HashMap<String, i32>,
    songs: Vec<Song>,
    seen: HashSet<Song>,
}

/// Running total for the songs of one album.
#[derive(Debug, Clone, Copy)]
struct AlbumGroup<'a> {
    name: &'a str,
    total: f64,
    count: usize,
}

/// Per-album figures used by the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumStats {
    pub name: String,
    pub year: i32,
    pub songs: usize,
    pub total_duration: f64,
    pub average_duration: Option<f64>,
}

/// A snapshot of every aggregate the catalog can answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub songs: usize,
    pub songs_with_no_album: usize,
    pub albums: Vec<AlbumStats>,
    pub longest_song: Option<String>,
    pub longest_album: Option<String>,
}

impl MusicCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an album, replacing the year if the name is already known.
    pub fn add_album(&mut self, name: &str, year: i32) {
        match self.albums.insert(name.to_string(), year) {
            Some(previous) if previous != year => {
                info!("Album '{}' year changed: {} -> {}", name, previous, year)
            }
            Some(_) => debug!("Album '{}' re-added with the same year", name),
            None => debug!("Album added: '{}' ({})", name, year),
        }
    }

    /// Adds a song. The album, when given, must already be registered.
    ///
    /// Returns `Ok(false)` when an identical song was already present.
    pub fn add_song(
        &mut self,
        name: &str,
        album: Option<&str>,
        duration: f64,
    ) -> Result<bool, CatalogError> {
        if let Some(album) = album
            && !self.albums.contains_key(album)
        {
            warn!("Rejected song '{}': unknown album '{}'", name, album);
            return Err(CatalogError::InvalidReference {
                song: name.to_string(),
                album: album.to_string(),
            });
        }

        let song = Song::new(name, album, duration);
        if !self.seen.insert(song.clone()) {
            debug!("Duplicate song ignored: {}", song);
            return Ok(false);
        }

        debug!("Song added: {}", song);
        self.songs.push(song);
        Ok(true)
    }

    /// All song names in ascending order. Shared names are repeated.
    pub fn ordered_song_names(&self) -> impl Iterator<Item = &str> + '_ {
        let mut names: Vec<&str> = self.songs.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.into_iter()
    }

    /// Album names in no particular order.
    pub fn album_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.albums.keys().map(String::as_str)
    }

    pub fn albums_in_year(&self, year: i32) -> impl Iterator<Item = &str> + '_ {
        self.albums
            .iter()
            .filter(move |(_, released)| **released == year)
            .map(|(name, _)| name.as_str())
    }

    /// Number of songs on `album`. Unknown albums simply count zero.
    pub fn count_songs(&self, album: &str) -> usize {
        self.songs_in(album).count()
    }

    pub fn count_songs_with_no_album(&self) -> usize {
        self.songs.iter().filter(|s| !s.has_album()).count()
    }

    /// Arithmetic mean of the durations on `album`, or `None` if it has no songs.
    pub fn average_duration(&self, album: &str) -> Option<f64> {
        let (sum, count) = self
            .songs_in(album)
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.duration, count + 1));

        (count > 0).then(|| sum / count as f64)
    }

    /// Name of the longest song. On a tie the earliest inserted song wins.
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .reduce(|best, s| if s.duration > best.duration { s } else { best })
            .map(|s| s.name.as_str())
    }

    /// Album with the greatest summed duration. Songs without an album are
    /// ignored; on a tie the album that appeared first wins.
    pub fn longest_album(&self) -> Option<&str> {
        self.album_groups()
            .into_iter()
            .reduce(|best, g| if g.total > best.total { g } else { best })
            .map(|g| g.name)
    }

    pub fn album_year(&self, name: &str) -> Option<i32> {
        self.albums.get(name).copied()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty() && self.albums.is_empty()
    }

    /// Songs in insertion order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs.iter()
    }

    /// Collects every aggregate in one pass over the albums. Albums are listed
    /// by year, then name.
    pub fn summary(&self) -> CatalogSummary {
        let groups: HashMap<&str, AlbumGroup> = self
            .album_groups()
            .into_iter()
            .map(|g| (g.name, g))
            .collect();

        let mut albums: Vec<AlbumStats> = self
            .albums
            .iter()
            .map(|(name, year)| {
                let (songs, total) = groups
                    .get(name.as_str())
                    .map_or((0, 0.0), |g| (g.count, g.total));

                AlbumStats {
                    name: name.clone(),
                    year: *year,
                    songs,
                    total_duration: total,
                    average_duration: (songs > 0).then(|| total / songs as f64),
                }
            })
            .collect();
        albums.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.name.cmp(&b.name)));

        CatalogSummary {
            songs: self.song_count(),
            songs_with_no_album: self.count_songs_with_no_album(),
            albums,
            longest_song: self.longest_song().map(str::to_string),
            longest_album: self.longest_album().map(str::to_string),
        }
    }

    fn songs_in<'a>(&'a self, album: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |s| s.is_in(album))
    }

    /// Groups songs by album in order of first appearance.
    fn album_groups(&self) -> Vec<AlbumGroup<'_>> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<AlbumGroup> = Vec::new();

        for song in &self.songs {
            let Some(album) = song.album.as_deref() else {
                continue;
            };

            let slot = *index.entry(album).or_insert_with(|| {
                groups.push(AlbumGroup {
                    name: album,
                    total: 0.0,
                    count: 0,
                });
                groups.len() - 1
            });

            groups[slot].total += song.duration;
            groups[slot].count += 1;
        }

        groups
    }
}
