#![allow(clippy::uninlined_format_args)]

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use mucat::cli::{Cli, Commands};
use mucat::{CatalogFile, CatalogSummary, MusicCatalog, import_songs_csv};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Report {
            catalog,
            songs_csv,
            json,
        } => {
            let mut library = load_catalog(&catalog)?;

            if let Some(csv_path) = songs_csv {
                let stats = import_songs_csv(&csv_path, &mut library)
                    .with_context(|| format!("failed to import songs from {:?}", csv_path))?;
                println!(
                    "Imported {} songs ({} duplicates, {} skipped).",
                    stats.inserted, stats.duplicates, stats.skipped
                );
            }

            let summary = library.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_report(&library, &summary);
            }
        }
        Commands::Year { catalog, year } => {
            let library = load_catalog(&catalog)?;

            let mut albums: Vec<&str> = library.albums_in_year(year).collect();
            albums.sort_unstable();

            if albums.is_empty() {
                println!("No albums released in {}.", year);
            }
            for album in albums {
                println!("{}", album);
            }
        }
        Commands::Filter { mode } => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;

            debug!("Applying filter '{}' to {} bytes", mode, input.len());
            println!("{}", mode.translate(&input));
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<MusicCatalog> {
    CatalogFile::load(path)
        .with_context(|| format!("failed to read catalog {:?}", path))?
        .into_catalog()
        .with_context(|| format!("invalid catalog {:?}", path))
}

fn print_report(library: &MusicCatalog, summary: &CatalogSummary) {
    println!("Songs:");
    for name in library.ordered_song_names() {
        println!("  {}", name);
    }

    println!("Albums:");
    for album in &summary.albums {
        match album.average_duration {
            Some(avg) => println!(
                "  {} ({}): {} songs, {:.1}s total, {:.1}s average",
                album.name, album.year, album.songs, album.total_duration, avg
            ),
            None => println!("  {} ({}): no songs", album.name, album.year),
        }
    }

    println!("Songs with no album: {}", summary.songs_with_no_album);
    println!(
        "Longest song: {}",
        summary.longest_song.as_deref().unwrap_or("-")
    );
    println!(
        "Longest album: {}",
        summary.longest_album.as_deref().unwrap_or("-")
    );
}
