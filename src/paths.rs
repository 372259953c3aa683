use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DEPTHCLOCK_CONFIG_DIR";

/// Overrides for default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom data directory (from CLI or ENV)
    pub data_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → ENV var (DEPTHCLOCK_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let data_dir = cli_dir.or_else(|| std::env::var(DATA_DIR_ENV).ok().map(PathBuf::from));
        Self { data_dir }
    }
}

/// Get path to a data file (logs).
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. DEPTHCLOCK_CONFIG_DIR environment variable
/// 3. Platform-specific data directory from dirs-next
///
/// Platform paths:
/// - Linux: ~/.local/share/depthclock/{name}
/// - macOS: ~/Library/Application Support/depthclock/{name}
/// - Windows: %APPDATA%\depthclock\{name}
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    data_dir(config).join(name)
}

/// Create the data directory if missing.
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let dir = data_dir(config);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Create `path`'s parent directory if missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

fn data_dir(config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.data_dir {
        return dir.clone();
    }

    if let Some(dir) = dirs_next::data_dir() {
        return dir.join("depthclock");
    }

    // Fallback: "." if everything else fails
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_dir_wins() {
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/tmp/dc-test")));
        assert_eq!(data_file("depthclock.log", &config), PathBuf::from("/tmp/dc-test/depthclock.log"));
    }

    #[test]
    fn test_default_dir_named() {
        let config = PathConfig::default();
        let path = data_file("depthclock.log", &config);
        assert!(path.ends_with("depthclock.log"));
    }

    #[test]
    fn test_ensure_dirs_creates() {
        let dir = std::env::temp_dir().join(format!("depthclock-paths-{}", std::process::id()));
        let config = PathConfig::from_env_and_cli(Some(dir.clone()));
        ensure_dirs(&config).unwrap();
        assert!(dir.is_dir());
        ensure_parent(&dir.join("nested").join("x.log")).unwrap();
        assert!(dir.join("nested").is_dir());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
