use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Regex(regex::Error),
    Lock,
    InvalidName(String),
    InvalidPhone(String),
    DuplicatePhone(String),
    NotFound(String),
    Validation(String),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::Lock
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Could not read or write contact data: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
            AppError::Lock => {
                write!(f, "A lock was poisoned by a panicking thread")
            }
            AppError::InvalidName(req) => {
                write!(f, "Invalid name: {}", req)
            }
            AppError::InvalidPhone(req) => {
                write!(f, "Invalid phone number: {}", req)
            }
            AppError::DuplicatePhone(phone) => {
                write!(f, "Phone number already exists: {}", phone)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}
