//! Reading catalog fixtures from disk: a JSON file with albums and songs, or a
//! CSV song list exported from a spreadsheet.

use crate::album::Album;
use crate::catalog::MusicCatalog;
use crate::error::ImportError;
use crate::song::Song;
use csv::ReaderBuilder;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a catalog fixture.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub albums: Vec<Album>,
    pub songs: Vec<Song>,
}

impl CatalogFile {
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Builds a catalog, albums first then songs in file order. The first song
    /// pointing at an unknown album aborts the build.
    pub fn into_catalog(self) -> Result<MusicCatalog, ImportError> {
        let mut catalog = MusicCatalog::new();

        for album in &self.albums {
            catalog.add_album(&album.name, album.year);
        }
        for song in &self.songs {
            catalog.add_song(&song.name, song.album.as_deref(), song.duration)?;
        }

        info!(
            "Catalog loaded with {} albums and {} songs.",
            catalog.album_count(),
            catalog.song_count()
        );
        Ok(catalog)
    }
}

/// One row of a song list CSV.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SongRow {
    #[serde(rename = "Song Name")]
    song_name: String,

    #[serde(rename = "Album Name")]
    album_name: String,

    #[serde(rename = "Duration")]
    duration: Option<f64>,
}

/// Outcome of a CSV import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Adds every row of a headered CSV to `catalog`. A blank album column means
/// "no album". Malformed rows and rows naming an unknown album are skipped.
pub fn import_songs_csv(
    path: &Path,
    catalog: &mut MusicCatalog,
) -> Result<ImportStats, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut stats = ImportStats::default();

    for result in reader.deserialize::<SongRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping invalid row in {:?}: {}", path, e);
                stats.skipped += 1;
                continue;
            }
        };

        let Some(duration) = row.duration.filter(|d| *d >= 0.0) else {
            warn!("Skipping '{}' in {:?}: missing or negative duration", row.song_name, path);
            stats.skipped += 1;
            continue;
        };

        let album = Some(row.album_name.as_str()).filter(|a| !a.is_empty());

        match catalog.add_song(&row.song_name, album, duration) {
            Ok(true) => stats.inserted += 1,
            Ok(false) => stats.duplicates += 1,
            Err(e) => {
                warn!("Skipping row in {:?}: {}", path, e);
                stats.skipped += 1;
            }
        }
    }

    info!(
        "Imported {} songs from {:?} ({} duplicates, {} skipped)",
        stats.inserted, path, stats.duplicates, stats.skipped
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIXTURE: &str = r#"{
        "albums": [
            { "name": "A", "year": 2000 },
            { "name": "B", "year": 2001 }
        ],
        "songs": [
            { "name": "s1", "album": "A", "duration": 10.0 },
            { "name": "s2", "album": "A", "duration": 20.0 },
            { "name": "s3", "album": "B", "duration": 40.0 },
            { "name": "s4", "duration": 5.0 }
        ]
    }"#;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "catalog.json", FIXTURE);

        let catalog = CatalogFile::load(&path).unwrap().into_catalog().unwrap();

        assert_eq!(catalog.album_count(), 2);
        assert_eq!(catalog.song_count(), 4);
        assert_eq!(catalog.count_songs_with_no_album(), 1);
        assert_eq!(catalog.longest_album(), Some("B"));
    }

    #[test]
    fn test_catalog_file_with_unknown_album_fails() {
        let file = CatalogFile {
            albums: vec![Album::new("A", 2000)],
            songs: vec![Song::new("s1", Some("Z"), 1.0)],
        };

        let result = file.into_catalog();

        assert!(matches!(result, Err(ImportError::Catalog(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "broken.json", "{ not json");

        assert!(matches!(CatalogFile::load(&path), Err(ImportError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(CatalogFile::load(&path), Err(ImportError::Io(_))));
    }

    #[test]
    fn test_import_songs_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "songs.csv",
            "Song Name,Album Name,Duration\n\
             s1,A,100\n\
             s2,,50.5\n\
             s1,A,100\n\
             s3,Unknown,10\n\
             s4,A,not-a-number\n\
             s5,A,-3\n",
        );

        let mut catalog = MusicCatalog::new();
        catalog.add_album("A", 2000);

        let stats = import_songs_csv(&path, &mut catalog).unwrap();

        assert_eq!(
            stats,
            ImportStats {
                inserted: 2,
                duplicates: 1,
                skipped: 3,
            }
        );
        assert_eq!(catalog.count_songs("A"), 1);
        assert_eq!(catalog.count_songs_with_no_album(), 1);
        assert_eq!(catalog.average_duration("A"), Some(100.0));
    }
}
