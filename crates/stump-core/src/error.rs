use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StumpError {
    #[error("content file not found: {}", .0.display())]
    ContentNotFound(PathBuf),

    #[error("candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("talking point not found: {0}")]
    TalkingPointNotFound(String),

    #[error("follow-up not found: {0}")]
    FollowUpNotFound(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StumpError>;
