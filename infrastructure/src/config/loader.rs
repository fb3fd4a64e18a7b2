//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["senpex-mcp.toml", ".senpex-mcp.toml"];

/// `SENPEX_*` variables mapped onto the `[senpex]` section
const ENV_KEYS: [&str; 4] = ["client_id", "secret_id", "base_url", "country"];

/// Credentials are opaque: read verbatim, never parsed as numbers
const CREDENTIAL_VARS: [(&str, &str); 2] = [
    ("SENPEX_CLIENT_ID", "senpex.client_id"),
    ("SENPEX_SECRET_ID", "senpex.secret_id"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SENPEX_CLIENT_ID`, `SENPEX_SECRET_ID`, `SENPEX_BASE_URL`, `SENPEX_COUNTRY`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./senpex-mcp.toml` or `./.senpex-mcp.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/senpex-mcp/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::merge_env(figment).extract().map_err(Box::new)
    }

    /// Defaults plus environment only (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::merge_env(figment).extract().map_err(Box::new)
    }

    /// Layer `SENPEX_*` variables on top of `figment`.
    fn merge_env(figment: Figment) -> Figment {
        let figment = figment.merge(
            Env::prefixed("SENPEX_")
                .only(&["base_url", "country"])
                .map(|key| format!("senpex.{}", key).into()),
        );
        CREDENTIAL_VARS
            .iter()
            .fold(figment, |figment, (var, key)| match std::env::var(*var) {
                Ok(value) => figment.merge(Serialized::default(*key, value)),
                Err(_) => figment,
            })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/senpex-mcp/config.toml if set,
    /// otherwise falls back to ~/.config/senpex-mcp/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("senpex-mcp").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        let env_set: Vec<String> = ENV_KEYS
            .iter()
            .map(|key| format!("SENPEX_{}", key.to_uppercase()))
            .filter(|var| std::env::var_os(var).is_some())
            .collect();
        if env_set.is_empty() {
            println!("  [     ] Env:     SENPEX_CLIENT_ID, SENPEX_SECRET_ID, ...");
        } else {
            println!("  [FOUND] Env:     {}", env_set.join(", "));
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./senpex-mcp.toml or ./.senpex-mcp.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
