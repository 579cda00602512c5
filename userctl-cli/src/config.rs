use std::path::PathBuf;

use userctl_core::DatabaseConfig;

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Variables already set in the environment
/// 2. Current directory .env
/// 3. ~/.userctl/.env
///
/// dotenvy never overwrites a variable that is already set, so loading the
/// current directory first gives it precedence over the home directory.
/// Returns the files that were loaded; runs before tracing is initialized,
/// so the caller logs the result.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// Get the userctl config directory path (~/.userctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".userctl"))
}

/// Database config from the `--database-url` flag (which clap also fills
/// from `DATABASE_URL`), falling back to the built-in default.
pub fn database_config(url: Option<String>) -> DatabaseConfig {
    url.map(DatabaseConfig::new).unwrap_or_default()
}
