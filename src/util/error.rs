/// Error type for maidenhead-rs operations.
#[derive(Debug, PartialEq)]
pub enum LocatorError {
    /// The locator length is not 2, 4, 6 or 8.
    InvalidLength(usize),
    /// A character does not belong to the class required at its position.
    InvalidCharacter { position: usize, found: char },
    /// Latitude or longitude is outside the encodable range.
    OutOfRange { lat: f64, lon: f64 },
    /// File I/O error.
    IoError(String),
    /// CSV parsing, reading or writing error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for LocatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocatorError::InvalidLength(len) => write!(f, "Invalid locator length: {}", len),
            LocatorError::InvalidCharacter { position, found } => {
                write!(f, "Invalid character '{}' at position {}", found, position)
            }
            LocatorError::OutOfRange { lat, lon } => {
                write!(f, "Coordinate out of range: lat {}, lon {}", lat, lon)
            }
            LocatorError::IoError(msg) => write!(f, "IO error: {}", msg),
            LocatorError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            LocatorError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LocatorError::InvalidLength(5).to_string(),
            "Invalid locator length: 5"
        );
        assert_eq!(
            LocatorError::InvalidCharacter {
                position: 4,
                found: '5'
            }
            .to_string(),
            "Invalid character '5' at position 4"
        );
    }
}
