//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["janus.toml", ".janus.toml"];

/// Environment variable honoured for the backend base URL, kept for
/// deployments that already export it for the web front end.
pub const PUBLIC_API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `JANUS_<SECTION>_<KEY>` environment variables (e.g. `JANUS_BACKEND_URL`)
    /// 2. `NEXT_PUBLIC_API_URL` (backend URL only)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./janus.toml` or `./.janus.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/janus-forge/config.toml`
    /// 6. Default values
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

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load a single file plus environment, skipping discovery
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(
                Env::raw()
                    .only(&[PUBLIC_API_URL_VAR])
                    .map(|_| "backend.url".into()),
            )
            // JANUS_BACKEND_DEGRADED_MODE -> backend.degraded_mode
            .merge(Env::prefixed("JANUS_").map(|key| key.as_str().replacen('_', ".", 1).into()))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/janus-forge/config.toml if set,
    /// otherwise falls back to ~/.config/janus-forge/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("janus-forge").join("config.toml"))
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
        println!("  [ENV  ] JANUS_* variables, {}", PUBLIC_API_URL_VAR);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./janus.toml or ./.janus.toml");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::DEFAULT_BACKEND_URL;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.backend.base_url(), DEFAULT_BACKEND_URL);
        assert!(config.backend.degraded_mode);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("janus-forge"));
    }

    #[test]
    fn test_project_file_and_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "janus.toml",
                r#"
[backend]
url = "http://from-file:8000"
probe = true

[proxy]
variant = "authenticated"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.base_url(), "http://from-file:8000");
            assert!(config.backend.probe);

            jail.set_env("NEXT_PUBLIC_API_URL", "http://from-public:1");
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.base_url(), "http://from-public:1");

            jail.set_env("JANUS_BACKEND_URL", "http://from-janus:2");
            jail.set_env("JANUS_BACKEND_DEGRADED_MODE", "false");
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.base_url(), "http://from-janus:2");
            assert!(!config.backend.degraded_mode);
            assert_eq!(config.proxy.variant, "authenticated");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".janus.toml", "[proxy]\nbind = \"127.0.0.1:1111\"\n")?;
            jail.create_file("custom.toml", "[proxy]\nbind = \"127.0.0.1:2222\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.proxy.bind, "127.0.0.1:2222");

            let config = ConfigLoader::load_file(Path::new(".janus.toml")).map_err(|e| *e)?;
            assert_eq!(config.proxy.bind, "127.0.0.1:1111");
            Ok(())
        });
    }
}
