// src/config.rs

//! Configuration and catalog loading utilities.
//!
//! Convenience functions combining the config file and the link catalog,
//! with validation and default fallbacks.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{Catalog, Config};

/// Resolve the catalog path, honoring a command-line override.
pub fn catalog_path(config: &Config, links_override: Option<&Path>) -> PathBuf {
    links_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.paths.links_file))
}

/// Load and validate the link catalog.
pub fn load_catalog(config: &Config, links_override: Option<&Path>) -> Result<Catalog> {
    let path = catalog_path(config, links_override);
    let catalog = Catalog::load(&path)
        .map_err(|e| AppError::config(format!("cannot load catalog {}: {e}", path.display())))?;
    catalog
        .validate()
        .map_err(|e| AppError::config(format!("invalid catalog {}: {e}", path.display())))?;
    Ok(catalog)
}

/// Load and validate configuration plus the link catalog.
pub fn load_all(config_path: &Path, links_override: Option<&Path>) -> Result<(Config, Catalog)> {
    let config = Config::load_or_default(config_path);
    config.validate()?;

    let catalog = load_catalog(&config, links_override)?;
    Ok((config, catalog))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_all_reads_config_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let links_path = dir.path().join("links.toml");

        std::fs::write(
            &config_path,
            format!(
                r#"
[checker]
max_concurrent = 2

[paths]
links_file = "{}"
"#,
                links_path.display()
            ),
        )
        .unwrap();

        let mut links = std::fs::File::create(&links_path).unwrap();
        write!(
            links,
            r#"
[[links]]
category = "Pelicula"
title = "A movie"
url = "https://mega.nz/file/AbC#def"
"#
        )
        .unwrap();

        let (config, catalog) = load_all(&config_path, None).unwrap();
        assert_eq!(config.checker.max_concurrent, 2);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_all_rejects_invalid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let links_path = dir.path().join("links.toml");

        std::fs::write(&config_path, "").unwrap();
        std::fs::write(
            &links_path,
            r#"
[[links]]
category = "x"
title = ""
url = "https://mega.nz/file/AbC#def"
"#,
        )
        .unwrap();

        let result = load_all(&config_path, Some(links_path.as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn override_wins_over_configured_path() {
        let config = Config::default();
        let path = catalog_path(&config, Some(Path::new("/tmp/other.toml")));
        assert_eq!(path, PathBuf::from("/tmp/other.toml"));
        assert_eq!(
            catalog_path(&config, None),
            PathBuf::from("data/links.toml")
        );
    }
}
