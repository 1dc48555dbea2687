//! Maps catalog URLs to the provider strategy responsible for them.

use crate::error::Result;
use crate::models::Config;
use crate::services::{MediafireChecker, MegaChecker, ProviderCheck};

/// Ordered provider registry; the first strategy whose `matches` accepts a
/// URL wins. URLs no strategy claims are reported as unsupported by the
/// orchestrator, with no network traffic.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn ProviderCheck>>,
}

impl ProviderRegistry {
    /// Build the registry with the built-in providers.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_providers(vec![
            Box::new(MediafireChecker::new(config.mediafire.clone())?),
            Box::new(MegaChecker::new(
                config.mega.clone(),
                &config.checker.user_agent,
            )?),
        ]))
    }

    /// Build a registry from an explicit strategy list. New providers plug
    /// in here without the orchestrator changing.
    pub fn with_providers(providers: Vec<Box<dyn ProviderCheck>>) -> Self {
        Self { providers }
    }

    /// Find the strategy responsible for `url`, if any.
    pub fn resolve(&self, url: &str) -> Option<&dyn ProviderCheck> {
        self.providers
            .iter()
            .find(|provider| provider.matches(url))
            .map(|provider| provider.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_builtin_providers_by_domain() {
        let registry = ProviderRegistry::from_config(&Config::default()).unwrap();

        assert_eq!(
            registry
                .resolve("https://www.mediafire.com/file/abc/x.zip/file")
                .map(|p| p.name()),
            Some("mediafire")
        );
        assert_eq!(
            registry
                .resolve("https://mega.nz/file/AbC123#key")
                .map(|p| p.name()),
            Some("mega")
        );
    }

    #[test]
    fn unknown_domains_resolve_to_none() {
        let registry = ProviderRegistry::from_config(&Config::default()).unwrap();
        assert!(registry.resolve("https://example.com/file/1").is_none());
    }
}
