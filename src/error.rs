use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A logger was already installed: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, LogInitError>;
