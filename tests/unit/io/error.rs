//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilefit::TileFitError;
    use tilefit::io::error::{WithLine, invalid_parameter, malformed};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TileFitError::FileSystem {
            path: "/tmp/puzzle.txt".into(),
            operation: "read puzzle",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read puzzle"));
        assert!(malformed("x", "bad").source().is_none());
    }

    // Tests malformed input messages include line and token when known
    // Verified by omitting the line from the message
    #[test]
    fn test_malformed_messages() {
        let without = malformed("B?C", "unknown place label '?'");
        assert_eq!(
            without.to_string(),
            "Malformed input near 'B?C': unknown place label '?'"
        );

        let with = Err::<(), _>(without).at_line(14).expect_err("still an error");
        assert_eq!(
            with.to_string(),
            "Malformed input at line 14 near 'B?C': unknown place label '?'"
        );
    }

    // Tests line numbers only attach to malformed input
    // Verified by rewriting every variant on at_line
    #[test]
    fn test_at_line_ignores_other_errors() {
        let error = Err::<(), _>(invalid_parameter("limit", &0, &"must be positive"))
            .at_line(3)
            .expect_err("still an error");
        assert!(matches!(error, TileFitError::InvalidParameter { .. }));
        assert_eq!(Ok::<u8, TileFitError>(4).at_line(3).ok(), Some(4));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("cell_size", &0, &"must be between 1 and 64");

        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be between 1 and 64"));
    }

    // Tests dimension mismatch messages name both sizes
    // Verified by swapping expected and found
    #[test]
    fn test_dimension_mismatch() {
        let error = TileFitError::DimensionMismatch {
            context: "tile size",
            expected: 6,
            found: 4,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch in tile size: expected 6, found 4"
        );
    }

    // Tests io errors convert with a placeholder path
    // Verified by dropping the io source on conversion
    #[test]
    fn test_from_io_error() {
        let error = TileFitError::from(std::io::Error::other("boom"));
        assert!(matches!(error, TileFitError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
