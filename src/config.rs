//! Where the catalog lives on disk.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Environment variable that overrides the default database location.
pub const DB_PATH_ENV: &str = "LIBRARY_DB_PATH";
/// Hidden per-user folder that holds the catalog when no path is given.
const DATA_DIR_NAME: &str = ".library-book-finder";
/// Catalog file name inside that folder.
const DB_FILE_NAME: &str = "library.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
}

impl Settings {
    /// Resolve settings with precedence: explicit path, then
    /// `LIBRARY_DB_PATH`, then the per-user data directory.
    pub fn resolve(explicit_db_path: Option<PathBuf>) -> Result<Self> {
        let env_path = env::var_os(DB_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::resolve_from(explicit_db_path, env_path)
    }

    fn resolve_from(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> Result<Self> {
        let db_path = match explicit.or(from_env) {
            Some(path) => path,
            None => default_db_path()?,
        };
        Ok(Self { db_path })
    }
}

/// Fallback catalog location: `~/.library-book-finder/library.sqlite`.
fn default_db_path() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
        .ok_or_else(|| anyhow!("no home directory to hold the catalog; set {DB_PATH_ENV}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_environment() {
        let settings = Settings::resolve_from(
            Some(PathBuf::from("/tmp/flag.sqlite")),
            Some(PathBuf::from("/tmp/env.sqlite")),
        )
        .unwrap();
        assert_eq!(settings.db_path, PathBuf::from("/tmp/flag.sqlite"));
    }

    #[test]
    fn environment_path_used_without_flag() {
        let settings =
            Settings::resolve_from(None, Some(PathBuf::from("/tmp/env.sqlite"))).unwrap();
        assert_eq!(settings.db_path, PathBuf::from("/tmp/env.sqlite"));
    }

    #[test]
    fn default_path_lives_in_data_directory() {
        if let Ok(settings) = Settings::resolve_from(None, None) {
            assert!(settings.db_path.ends_with(".library-book-finder/library.sqlite"));
        }
    }
}
