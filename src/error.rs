pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create fragment-pattern error for an invalid user regex
pub fn regex_error(pattern: &str, source: regex::Error) -> AppError {
    AppError::bad_request(format!(
        "Invalid SQL fragment pattern '{}': {}",
        pattern, source
    ))
}
