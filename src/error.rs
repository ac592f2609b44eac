use std::path::PathBuf;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to read content database {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content database: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid content item #{index} ({title}): {reason}")]
    InvalidItem {
        index: usize,
        title: String,
        reason: String,
    },

    #[error("Render error: {0}")]
    Render(String),
}

impl AppError {
    /// Process exit code for this error, following sysexits(3)
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io { .. } => 66,
            AppError::Parse(_) | AppError::InvalidItem { .. } => 65,
            AppError::Render(_) => 70,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
