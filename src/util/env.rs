use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

// Ensures the dotenv files are read at most once per process.
static LOAD_ENV: OnceLock<()> = OnceLock::new();

/// Loads environment variables from `.env` and environment-specific files.
///
/// Order of precedence (earlier files win, real env vars win over all):
/// 1. `.env`
/// 2. `.env.dev` in debug builds, `.env.prod` in release builds
/// 3. `.env.local`
pub fn load_dotenv() {
    LOAD_ENV.get_or_init(|| {
        dotenv().ok();

        let env_file = if cfg!(debug_assertions) { ".env.dev" } else { ".env.prod" };
        if Path::new(env_file).exists() {
            dotenvy::from_filename(env_file).ok();
        }

        if Path::new(".env.local").exists() {
            dotenvy::from_filename(".env.local").ok();
        }
    });
}

/// Retrieves a value from an environment variable and parses it into type `T`.
/// If the variable is not set, returns `default`. If parsing fails, returns an error.
pub fn get_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| anyhow!("Failed to parse {} env var: {:?}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Retrieves a `bool` from an environment variable.
/// Recognizes `"true"`, `"1"`, `"yes"`, `"on"` as `true`; `"false"`, `"0"`, `"no"`, `"off"` as `false`.
pub fn get_bool_from_env_or(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(anyhow!("Failed to parse {} env var as `bool`", key)),
        },
        Err(_) => Ok(default),
    }
}
