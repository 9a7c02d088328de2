//! Backend selection configuration.
//!
//! # Responsibility
//! - Describe which store backend a deployment uses and where its data
//!   lives.
//!
//! # Invariants
//! - The backend is chosen once at startup from configuration, never by
//!   runtime type inspection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const BACKEND_ENV: &str = "TODOLISTS_BACKEND";
const DB_PATH_ENV: &str = "TODOLISTS_DB_PATH";
const DEFAULT_DB_PATH: &str = "todolists.db";

/// Which store variant the process runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Ephemeral per-session storage, discarded on session end.
    Session,
    /// Durable SQLite storage at the given path.
    Sqlite { path: PathBuf },
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::Session
    }
}

impl StoreConfig {
    /// Reads the backend choice from the environment.
    ///
    /// `TODOLISTS_BACKEND` selects `session` (default) or `sqlite`;
    /// `TODOLISTS_DB_PATH` overrides the database path for the latter.
    ///
    /// # Errors
    /// Returns a human-readable message for an unknown backend name.
    pub fn from_env() -> Result<Self, String> {
        let backend = std::env::var(BACKEND_ENV).unwrap_or_else(|_| "session".to_string());
        match backend.trim().to_ascii_lowercase().as_str() {
            "session" => Ok(Self::Session),
            "sqlite" => {
                let path = std::env::var(DB_PATH_ENV)
                    .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
                Ok(Self::Sqlite {
                    path: PathBuf::from(path),
                })
            }
            other => Err(format!(
                "unsupported backend `{other}`; expected session|sqlite"
            )),
        }
    }

    /// Short backend name for logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Sqlite { .. } => "sqlite",
        }
    }
}
