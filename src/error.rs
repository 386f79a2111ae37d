//! Error types for the palette_swap library

use thiserror::Error;

/// Result type alias for palette_swap operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for clustering, palette extraction, and recoloring operations
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Invalid input parameters (non-positive cluster counts, empty images)
    #[error("Invalid argument: {parameter} = {value}")]
    InvalidArgument { parameter: String, value: String },

    /// Fewer distinct colors in the input than requested clusters
    #[error("Degenerate clustering: {distinct} distinct colors for {requested} requested clusters")]
    DegenerateClustering { distinct: usize, requested: usize },

    /// Label map and image dimensions disagree at a component boundary
    #[error("Dimension mismatch in {context}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        context: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {message}")]
    Processing { message: String },
}

impl PaletteError {
    /// Create an invalid-argument error from any displayable value
    pub fn invalid_argument(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a dimension-mismatch error for a component boundary check
    pub fn dimension_mismatch(
        context: impl Into<String>,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a generic processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PaletteError::invalid_argument("grid_size", 0);
        assert_eq!(err.to_string(), "Invalid argument: grid_size = 0");
    }

    #[test]
    fn test_degenerate_clustering_display() {
        let err = PaletteError::DegenerateClustering {
            distinct: 2,
            requested: 5,
        };
        assert!(err.to_string().contains("2 distinct colors"));
        assert!(err.to_string().contains("5 requested"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = PaletteError::dimension_mismatch("editor", (4, 4), (2, 2));
        assert!(err.to_string().contains("editor"));
        assert!(err.to_string().contains("(4, 4)"));
    }
}
