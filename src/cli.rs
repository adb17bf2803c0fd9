// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::filter::TextFilter;

#[derive(Parser)]
#[command(name = "mucat", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every aggregate for a catalog file
    Report {
        /// Catalog file (JSON with "albums" and "songs")
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Extra songs to add from a CSV file (Song Name, Album Name, Duration)
        #[arg(short = 's', long = "songs")]
        songs_csv: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long = "json", default_value_t = false)]
        json: bool,
    },

    /// List the albums released in a given year
    Year {
        /// Catalog file (JSON with "albums" and "songs")
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        #[arg(value_name = "YEAR", allow_negative_numbers = true)]
        year: i32,
    },

    /// Apply a text filter to stdin
    Filter {
        #[arg(short = 'm', long = "mode", value_enum, default_value_t = TextFilter::Identity)]
        mode: TextFilter,
    },
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
