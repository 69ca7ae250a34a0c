mod types;

pub use types::*;

use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./tmdb-gatherer.toml",
        "~/.config/tmdb-gatherer/config.toml",
        "/etc/tmdb-gatherer/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!(path = %path.display(), "Using config file");
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.tmdb.timeout_secs == 0 {
        return Err(Error::Config("tmdb.timeout_secs must be positive".into()));
    }

    if config.tmdb.base_url.trim().is_empty() {
        return Err(Error::Config("tmdb.base_url cannot be empty".into()));
    }

    if config.tmdb.image_size.trim().is_empty() {
        return Err(Error::Config("tmdb.image_size cannot be empty".into()));
    }

    if config
        .tmdb
        .api_key
        .as_deref()
        .is_some_and(|key| key.trim().is_empty())
    {
        tracing::warn!("tmdb.api_key is set but empty; the plugin will stay disabled");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.tmdb.language, "en-US");
        assert_eq!(cfg.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(cfg.tmdb.image_size, "original");
        assert_eq!(cfg.tmdb.timeout_secs, 30);
        assert_eq!(cfg.matching.policy, MatchPolicy::First);
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn parse_partial_toml_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [tmdb]
            api_key = "abc"

            [matching]
            policy = "best_title"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tmdb.api_key.as_deref(), Some("abc"));
        assert_eq!(cfg.tmdb.language, "en-US");
        assert_eq!(cfg.matching.policy, MatchPolicy::BestTitle);
    }

    #[test]
    fn parse_empty_toml_uses_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.tmdb.timeout_secs, 30);
        assert!(cfg.tmdb.api_key.is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut cfg = Config::default();
        cfg.tmdb.timeout_secs = 0;
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let mut cfg = Config::default();
        cfg.tmdb.base_url = "  ".into();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tmdb]\nlanguage = \"de-DE\"\ntimeout_secs = 5").unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.tmdb.language, "de-DE");
        assert_eq!(cfg.tmdb.timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn load_config_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tmdb\nbroken").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/tmdb-gatherer.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[matching]\npolicy = \"closest\"");
        assert!(result.is_err());
    }
}
