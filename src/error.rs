use thiserror::Error;

/// Category of a failed transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Input rejected before an undefined operation was attempted.
    Domain,
    /// Arithmetic fault during evaluation (non-finite result, undefined intermediate).
    Computation,
    /// Malformed coordinate text.
    Parse,
}

/// Failure signal returned by every transform in this crate.
///
/// A transform either yields a finite `f64` or one of these; a computed `0.0`
/// is always a value, never a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("{function}: {message}")]
    Domain {
        function: &'static str,
        message: String,
    },

    #[error("{function}: {message}")]
    Computation {
        function: &'static str,
        message: String,
    },

    #[error("cannot parse coordinate '{input}': {reason}")]
    Parse { input: String, reason: String },
}

impl TransformError {
    pub fn domain(function: &'static str, message: impl Into<String>) -> Self {
        Self::Domain {
            function,
            message: message.into(),
        }
    }

    pub fn computation(function: &'static str, message: impl Into<String>) -> Self {
        Self::Computation {
            function,
            message: message.into(),
        }
    }

    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Domain { .. } => FailureKind::Domain,
            Self::Computation { .. } => FailureKind::Computation,
            Self::Parse { .. } => FailureKind::Parse,
        }
    }

    /// Name of the transform that produced the failure.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Domain { function, .. } | Self::Computation { function, .. } => function,
            Self::Parse { .. } => "parse_coordinate",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

// CLI errors: I/O and JSON sources, plus transform failures surfaced to the user
#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --inputs-json")]
    MissingInputData,

    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_function_follow_variant() {
        let err = TransformError::domain("temperature", "frequency is 0");
        assert_eq!(err.kind(), FailureKind::Domain);
        assert_eq!(err.function(), "temperature");
        assert_eq!(err.to_string(), "temperature: frequency is 0");

        let err = TransformError::parse("12 30", "expected 3 tokens, found 2");
        assert_eq!(err.kind(), FailureKind::Parse);
        assert_eq!(err.function(), "parse_coordinate");
        assert!(err.to_string().contains("12 30"));
    }

    #[test]
    fn app_error_wraps_transform_failure() {
        let err: AppError = TransformError::computation("salinity", "RT denominator is 0").into();
        assert!(err.to_string().contains("salinity"));
    }
}
