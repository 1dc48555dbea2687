//! Link catalog loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::LinkEntry;

/// The ordered list of links to check, loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate catalog entries for basic sanity.
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.links.iter().enumerate() {
            if entry.url.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "link {index} (\"{}\") has an empty url",
                    entry.title
                )));
            }
            if entry.title.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "link {index} ({}) has an empty title",
                    entry.url
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_parses_link_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[links]]
category = "Pelicula"
title = "Some movie (2025)"
url = "https://mega.nz/file/AbCdEfGh#key"

[[links]]
category = "Serie"
title = "Some show"
url = "https://www.mediafire.com/file/abc123/show.zip/file"
"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.links[0].category, "Pelicula");
        assert!(catalog.links[1].url.contains("mediafire.com"));
    }

    #[test]
    fn validate_rejects_empty_url() {
        let catalog = Catalog {
            links: vec![LinkEntry {
                category: "x".to_string(),
                title: "t".to_string(),
                url: "  ".to_string(),
            }],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validate_accepts_empty_catalog() {
        assert!(Catalog::default().validate().is_ok());
    }
}
