use crate::utils::error::{GaugeError, Result};

/// Unwraps a required constructor argument, failing with `InvalidArgument` when absent.
pub fn require<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        tracing::warn!("Rejected construction: `{}` is missing", field_name);
        GaugeError::invalid_argument(field_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present_value() {
        assert_eq!(require("width", Some(1435)).unwrap(), 1435);
    }

    #[test]
    fn test_require_missing_value() {
        let err = require::<i32>("european_railway", None).unwrap_err();
        match err {
            GaugeError::InvalidArgument { parameter } => assert_eq!(parameter, "european_railway"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = GaugeError::invalid_argument("wide_gauge_railway");
        assert_eq!(
            err.to_string(),
            "Invalid argument: `wide_gauge_railway` is required"
        );
    }
}
