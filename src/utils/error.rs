use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("Invalid argument: `{parameter}` is required")]
    InvalidArgument { parameter: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GaugeError {
    pub fn invalid_argument(parameter: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GaugeError>;
