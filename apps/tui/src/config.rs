use digest_core::{Resource, Sources};
use dotenv::dotenv;
use std::env;
use thiserror::Error;

pub const ROOTS_ENV: &str = "DIGEST_ROOTS";
pub const COMPANY_SOURCES_ENV: &str = "DIGEST_COMPANY_SOURCES";
pub const THEME_SOURCES_ENV: &str = "DIGEST_THEME_SOURCES";

/// Project build directory first, then the sibling one.
pub const DEFAULT_ROOTS: [&str; 2] = ["build", "../build"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no candidate locations configured for {resource}")]
    NoSources { resource: Resource },
}

/// Candidate lists given on the command line. A non-empty list replaces the
/// matching environment variable; entries are used verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOverrides {
    pub roots: Vec<String>,
    pub companies: Vec<String>,
    pub themes: Vec<String>,
}

/// Loads `.env` and resolves candidate locations from the command line and
/// the environment.
pub fn init_sources(overrides: &SourceOverrides) -> Result<Sources, ConfigError> {
    dotenv().ok();
    resolve_sources(overrides, |key| env::var(key).ok())
}

/// Explicit per-document lists win over roots; roots default to
/// [`DEFAULT_ROOTS`].
pub fn resolve_sources<F>(overrides: &SourceOverrides, lookup: F) -> Result<Sources, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let list = |given: &[String], key: &str| -> Option<Vec<String>> {
        if given.is_empty() {
            lookup(key).map(|value| split_list(&value))
        } else {
            Some(given.to_vec())
        }
    };

    let roots = list(&overrides.roots, ROOTS_ENV)
        .unwrap_or_else(|| DEFAULT_ROOTS.iter().map(|root| (*root).to_string()).collect());
    let from_roots = Sources::from_roots(&roots);

    let sources = Sources {
        companies: list(&overrides.companies, COMPANY_SOURCES_ENV).unwrap_or(from_roots.companies),
        themes: list(&overrides.themes, THEME_SOURCES_ENV).unwrap_or(from_roots.themes),
    };

    if sources.companies.is_empty() {
        return Err(ConfigError::NoSources {
            resource: Resource::Companies,
        });
    }
    if sources.themes.is_empty() {
        return Err(ConfigError::NoSources {
            resource: Resource::Themes,
        });
    }

    Ok(sources)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
