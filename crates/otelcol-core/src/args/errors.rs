use crate::errors::OtelcolError;

#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("Flag '{flag}' was given without a value")]
    MissingFlagValue { flag: String },
}

impl OtelcolError for ArgumentError {
    fn error_code(&self) -> &'static str {
        match self {
            ArgumentError::MissingFlagValue { .. } => "ARGS_MISSING_FLAG_VALUE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
