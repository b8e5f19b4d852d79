//! Startup and terminal failures.
//!
//! Everything in here is fatal: `main` restores the terminal, prints the
//! message and exits.  No-op conditions (firing above the cap, clicking Play
//! mid-game) are not errors and never reach this type.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// A sprite file could not be read.
    AssetLoad { path: PathBuf, source: io::Error },
    /// A sprite file exists but has no drawable rows.
    EmptyAsset { path: PathBuf },
    /// A settings value is out of range.
    Config { field: &'static str, reason: String },
    Terminal(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { path, source } => {
                write!(f, "failed to load asset {}: {source}", path.display())
            }
            Self::EmptyAsset { path } => write!(f, "asset {} is empty", path.display()),
            Self::Config { field, reason } => write!(f, "invalid setting {field}: {reason}"),
            Self::Terminal(err) => write!(f, "terminal error: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } => Some(source),
            Self::Terminal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Terminal(err)
    }
}
