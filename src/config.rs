//! Runtime configuration, read from the environment (and an optional `.env`)
use crate::constants::DEFAULT_CATALOG_SOURCE;
use std::path::PathBuf;

/// Where the catalog JSON comes from
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogSource::Url(raw.to_string())
        } else {
            CatalogSource::File(PathBuf::from(raw))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Url(url) => url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_source: CatalogSource,
    /// None = keep cookies in memory only
    pub cookie_db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load `.env` if present, then read GUIA_* variables
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("[Config] Loaded {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("[Config] Failed to load .env file: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_source = CatalogSource::parse(
            &lookup("GUIA_CATALOG").unwrap_or_else(|| DEFAULT_CATALOG_SOURCE.to_string()),
        );

        let memory_only = lookup("GUIA_MEMORY_COOKIES")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        let cookie_db_path = if memory_only {
            None
        } else {
            lookup("GUIA_COOKIE_DB")
                .map(PathBuf::from)
                .or_else(default_cookie_db_path)
        };

        Self {
            catalog_source,
            cookie_db_path,
        }
    }
}

fn default_cookie_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("GuiaRS").join("cookies.db"))
}
