mod cli;

use tmdb_gatherer::{
    config::{self, Config},
    gatherer::{GatherOutcome, TmdbGatherer, API_KEY_PREFERENCE},
    host::{GatherTypes, MediaInfo, MemoryPreferences, MetadataArtAggregator},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tmdb_gatherer=debug,tg_parser=debug".to_string()
        } else {
            "tmdb_gatherer=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lookup {
            file,
            types,
            title,
            original_name,
            season,
            episode,
            api_key,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let media = MediaInfo {
                file,
                title,
                original_name,
                tvshow_season: season,
                tvshow_episode: episode,
            };
            let types = GatherTypes::new(types);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(lookup(&config, api_key, &types, &media, json))
        }
        Commands::Arts {
            file,
            art_type,
            limit,
            episode,
            api_key,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let media = MediaInfo {
                tvshow_episode: episode,
                ..MediaInfo::new(file)
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(arts(&config, api_key, &art_type, &media, limit))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("tmdb-gatherer {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Install and load the plugin the way a host would, seeding the key
/// preference from the command line or config.
fn loaded_gatherer(config: &Config, api_key: Option<String>) -> Result<TmdbGatherer> {
    let mut prefs = MemoryPreferences::new();
    let mut gatherer = TmdbGatherer::new(config);
    gatherer.install(&mut prefs);

    let key = api_key
        .or_else(|| config.tmdb.api_key.clone())
        .unwrap_or_default();
    prefs
        .set(API_KEY_PREFERENCE, key)
        .context("Failed to store API key preference")?;

    if !gatherer.load(&prefs) {
        anyhow::bail!("No TMDB API key configured (use --api-key, TMDB_API_KEY or tmdb.api_key)");
    }

    Ok(gatherer)
}

async fn lookup(
    config: &Config,
    api_key: Option<String>,
    types: &GatherTypes,
    media: &MediaInfo,
    json: bool,
) -> Result<()> {
    let gatherer = loaded_gatherer(config, api_key)?;
    let outcome = gatherer.get_metadata(types, media).await;

    if let GatherOutcome::Failed { error, .. } = &outcome {
        tracing::warn!("Lookup failed, showing partial result: {}", error);
    }

    let status = outcome.status();
    let Some(metadata) = outcome.into_metadata() else {
        println!("No metadata ({status})");
        return Ok(());
    };

    let value = serde_json::to_value(&metadata)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Status: {status}");
    if let Some(fields) = value.as_object() {
        for (key, field) in fields {
            match field {
                serde_json::Value::String(s) => println!("  {key}: {s}"),
                other => println!("  {key}: {other}"),
            }
        }
    }

    Ok(())
}

async fn arts(
    config: &Config,
    api_key: Option<String>,
    art_type: &str,
    media: &MediaInfo,
    limit: usize,
) -> Result<()> {
    let gatherer = loaded_gatherer(config, api_key)?;
    let candidates = gatherer
        .gather_arts(&MetadataArtAggregator, art_type, media, limit)
        .await;

    if candidates.is_empty() {
        println!("No artwork found");
    }
    for candidate in candidates {
        println!("{:?}\t{}", candidate.role, candidate.url);
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)
                .with_context(|| format!("Invalid config {}", p.display()))?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            print_config(&config);
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    println!("  API base: {}", config.tmdb.base_url);
    println!("  Language: {}", config.tmdb.language);
    println!("  Image size: {}", config.tmdb.image_size);
    println!("  Timeout: {}s", config.tmdb.timeout_secs);
    println!("  Match policy: {:?}", config.matching.policy);
    println!(
        "  API key: {}",
        if config.tmdb.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) {
            "set"
        } else {
            "not set"
        }
    );
}
