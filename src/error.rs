use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DroplensError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidText(String),

    #[error("Failed to write {path}: {message}")]
    Export { path: String, message: String },
}

impl From<std::io::Error> for DroplensError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            DroplensError::InvalidText(err.to_string())
        } else {
            DroplensError::Io(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_data_maps_to_invalid_text() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert!(matches!(DroplensError::from(io_err), DroplensError::InvalidText(_)));
    }

    #[test]
    fn test_not_found_maps_to_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(
            DroplensError::from(io_err),
            DroplensError::Io("missing".to_string())
        );
    }

    #[test]
    fn test_export_error_message() {
        let err = DroplensError::Export {
            path: "out.csv".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write out.csv: permission denied");
    }
}
