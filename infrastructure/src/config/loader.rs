//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["votegraph.toml", ".votegraph.toml"];

/// Prefix for environment overrides, e.g. `VOTEGRAPH_API__PAGE_SIZE=50`
pub const ENV_PREFIX: &str = "VOTEGRAPH_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `VOTEGRAPH_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./votegraph.toml` or `./.votegraph.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/votegraph/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Build the layered figment from explicit file locations.
    ///
    /// Missing files are skipped, except `explicit`, which must exist.
    pub fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/votegraph/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("votegraph").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        let overrides: Vec<String> = std::env::vars()
            .map(|(k, _)| k)
            .filter(|k| k.starts_with(ENV_PREFIX))
            .collect();
        if overrides.is_empty() {
            println!("  [     ] Env:     {}*", ENV_PREFIX);
        } else {
            println!("  [FOUND] Env:     {}", overrides.join(", "));
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./votegraph.toml or ./.votegraph.toml");
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
    use figment::Jail;
    use votegraph_domain::Orientation;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.max_concurrent_requests, 1);
        assert_eq!(config.output.orientation, Orientation::Undirected);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("votegraph"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("global.toml", "[api]\npage_size = 50\ntimeout_secs = 5\n")?;
            jail.create_file("votegraph.toml", "[api]\npage_size = 100\n")?;

            let config: FileConfig = ConfigLoader::figment(
                Some(Path::new("global.toml")),
                Some(Path::new("votegraph.toml")),
                None,
            )
            .extract()?;

            assert_eq!(config.api.page_size, 100);
            assert_eq!(config.api.timeout_secs, 5);
            assert_eq!(config.api.max_concurrent_requests, 1);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_wins_over_project() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("votegraph.toml", "[output]\norientation = \"undirected\"\n")?;
            jail.create_file("run.toml", "[output]\norientation = \"directed\"\n")?;

            let config: FileConfig = ConfigLoader::figment(
                None,
                Some(Path::new("votegraph.toml")),
                Some(Path::new("run.toml")),
            )
            .extract()?;

            assert_eq!(config.output.orientation, Orientation::Directed);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_every_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("run.toml", "[api]\npage_size = 100\n")?;
            jail.set_env("VOTEGRAPH_API__PAGE_SIZE", 50);
            jail.set_env("VOTEGRAPH_OUTPUT__ORIENTATION", "directed");

            let config: FileConfig =
                ConfigLoader::figment(None, None, Some(Path::new("run.toml"))).extract()?;

            assert_eq!(config.api.page_size, 50);
            assert_eq!(config.output.orientation, Orientation::Directed);
            assert_eq!(config.api.max_concurrent_requests, 1);
            Ok(())
        });
    }

    #[test]
    fn test_unprefixed_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("API__PAGE_SIZE", 50);

            let config: FileConfig = ConfigLoader::figment(None, None, None).extract()?;

            assert_eq!(config.api, ConfigLoader::load_defaults().api);
            Ok(())
        });
    }

    #[test]
    fn test_missing_layer_files_are_skipped() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: FileConfig =
                ConfigLoader::figment(Some(Path::new("absent.toml")), None, None).extract()?;
            assert_eq!(config.api, ConfigLoader::load_defaults().api);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let result = ConfigLoader::figment(None, None, Some(Path::new("absent.toml")))
                .extract::<FileConfig>();
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("bad.toml", "[output]\nformat = \"xml\"\n")?;
            let result = ConfigLoader::figment(None, None, Some(Path::new("bad.toml")))
                .extract::<FileConfig>();
            assert!(result.is_err());
            Ok(())
        });
    }
}
