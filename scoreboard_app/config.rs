use dotenvy::dotenv;
use std::env;

pub const DEFAULT_TABLE: &str = "leaderboard";
pub const DEFAULT_PORT: u16 = 8080;
/// Relative to the working directory, the workspace root when run with `cargo run`.
pub const DEFAULT_ASSETS_DIR: &str = "scoreboard_web/assets";

/// Credentials for the hosted table store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when the store credentials are missing; the API then runs in degraded mode.
    pub store: Option<StoreConfig>,
    pub port: u16,
    /// Directory served under `/static`.
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| var(name).filter(|val| !val.trim().is_empty());

        let table = non_blank("SCOREBOARD_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string());

        let store = match (non_blank("SUPABASE_URL"), non_blank("SUPABASE_KEY")) {
            (Some(url), Some(key)) => Some(StoreConfig { url, key, table }),
            _ => None,
        };

        let port = match var("SCOREBOARD_PORT") {
            Some(val) => val.parse::<u16>().unwrap_or(DEFAULT_PORT),
            None => DEFAULT_PORT,
        };

        let assets_dir =
            non_blank("SCOREBOARD_ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string());

        Self {
            store,
            port,
            assets_dir,
        }
    }
}
