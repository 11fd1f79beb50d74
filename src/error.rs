use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisualizerError>;

#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Draw error: {0}")]
    Draw(String),

    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}
