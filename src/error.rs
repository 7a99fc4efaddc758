use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DashboardError::Status(status.as_u16()),
            None => DashboardError::Transport(err.to_string()),
        }
    }
}
