use thiserror::Error;

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("config load failed: {0}")]
    ConfigLoad(String),

    #[error("invalid config: {0}")]
    ConfigValidation(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("console write failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("runtime error: {0}")]
    Runtime(String),
}
