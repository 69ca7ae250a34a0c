use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tmdb_gatherer::host::GatherKind;

#[derive(Parser)]
#[command(name = "tmdb-gatherer")]
#[command(author, version, about = "TMDB metadata lookup for media files")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up metadata for a media file
    Lookup {
        /// Media file (only the name is used)
        #[arg(required = true)]
        file: PathBuf,

        /// Media types to gather (repeatable)
        #[arg(short = 't', long = "type", value_enum, required = true)]
        types: Vec<MediaType>,

        /// Title already known to the host
        #[arg(long)]
        title: Option<String>,

        /// Original title already known to the host
        #[arg(long)]
        original_name: Option<String>,

        /// Season number already known to the host
        #[arg(long)]
        season: Option<u32>,

        /// Episode number already known to the host
        #[arg(long)]
        episode: Option<u32>,

        /// TMDB API key (overrides tmdb.api_key from config)
        #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List artwork URLs for a media file
    Arts {
        /// Media file (only the name is used)
        #[arg(required = true)]
        file: PathBuf,

        /// Host art type: movie, tvshow, tvshow_season, tvshow_episode
        #[arg(long, default_value = "movie")]
        art_type: String,

        /// Maximum number of URLs
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Episode number already known to the host
        #[arg(long)]
        episode: Option<u32>,

        /// TMDB API key (overrides tmdb.api_key from config)
        #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MediaType {
    Movie,
    Tvshow,
}

impl From<MediaType> for GatherKind {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Movie => GatherKind::Movie,
            MediaType::Tvshow => GatherKind::TvShow,
        }
    }
}
