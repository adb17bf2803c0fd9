pub mod album;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod filter;
pub mod import;
pub mod song;

pub use album::Album;
pub use catalog::{AlbumStats, CatalogSummary, MusicCatalog};
pub use error::{CatalogError, ImportError};
pub use filter::{TextFilter, word_frequencies};
pub use import::{CatalogFile, ImportStats, import_songs_csv};
pub use song::Song;
