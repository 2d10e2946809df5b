use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Settings Error: {0}")]
    Settings(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(ref msg) if msg == "gone"));
        assert_eq!(err.to_string(), "I/O Error: gone");
    }

    #[test]
    fn test_serializes_as_tagged_variant() {
        let json = serde_json::to_value(AppError::Validation("bad unit".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"Validation": "bad unit"}));
    }
}
