//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use dualtile::PuzzleError;
    use dualtile::io::error::{computation_error, invalid_image, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::Directory {
            path: "/tmp/out".into(),
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/out"));
    }

    // Tests InvalidColor names the rejected value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_color_message() {
        let error = PuzzleError::InvalidColor {
            value: "#12345".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("#12345"));
        assert!(message.contains("#RRGGBB"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("grid_size", &0, &"must be at least 1").to_string();
        assert!(message.contains("grid_size"));
        assert!(message.contains('0'));
        assert!(message.contains("must be at least 1"));
    }

    // Tests Encode error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = PuzzleError::Encode {
            path: PathBuf::from("/root/out.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/root/out.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests helper constructors produce the matching variants
    // Verified by mapping both helpers to InvalidParameter
    #[test]
    fn test_helpers() {
        assert!(matches!(
            invalid_image(&"ragged"),
            PuzzleError::InvalidImage { reason } if reason == "ragged"
        ));
        assert!(matches!(
            computation_error("render", &"overflow"),
            PuzzleError::Computation { operation: "render", .. }
        ));
        let permutation = PuzzleError::InvalidPermutation {
            reason: "index 3 repeats".to_string(),
        };
        assert!(permutation.to_string().contains("index 3 repeats"));
    }

    // Tests parameter errors carry no source
    // Verified by returning the reason as a source
    #[test]
    fn test_validation_errors_have_no_source() {
        assert!(invalid_parameter("seed", &1, &"bad").source().is_none());
        assert!(invalid_image(&"empty").source().is_none());
    }
}
