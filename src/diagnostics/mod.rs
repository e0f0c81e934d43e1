use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumkitError {
    #[error("Config error: {msg}")]
    Config { msg: String, path: PathBuf },

    #[error("I/O error: {msg}")]
    Io { msg: String },
}

impl NumkitError {
    pub fn config(msg: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config { msg: msg.into(), path: path.into() }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io { msg: msg.into() }
    }
}

impl From<std::io::Error> for NumkitError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Print a NumkitError to stderr the way the binary reports it.
pub fn render_error(err: &NumkitError) {
    match err {
        NumkitError::Config { msg, path } => {
            eprintln!("error[config]: {msg}");
            eprintln!("  --> {}", path.display());
        }
        NumkitError::Io { msg } => {
            eprintln!("error: {msg}");
        }
    }
}
