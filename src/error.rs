use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid format directive '{directive}': {reason}"))]
    InvalidDirective { directive: String, reason: String },

    #[snafu(display("Invalid size '{input}': {reason}"))]
    InvalidSize { input: String, reason: String },

    #[snafu(display("Unknown unit suffix '{suffix}' in '{input}'"))]
    UnknownUnit { input: String, suffix: String },

    #[snafu(display("Size '{input}' does not fit in 64 bits"))]
    SizeOverflow { input: String },

    #[snafu(display("Operation '{operation}' requires --by <SIZE>"))]
    MissingMagnitude { operation: String },

    #[snafu(display("Magnitude must be at least 1 byte, got '{input}'"))]
    ZeroMagnitude { input: String },

    #[snafu(display("Operation '{operation}' overflows 64 bits for {bytes} bytes"))]
    ArithmeticOverflow { operation: String, bytes: u64 },

    #[snafu(display("Environment variable '{key}' has invalid value '{value}'"))]
    InvalidEnvVar { key: String, value: String },

    #[snafu(display("Failed to apply '{operation}' to '{input}': {source}"))]
    OperationFailed {
        operation: String,
        input: String,
        source: Box<Error>,
    },

    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

/// Wrap a Result-producing expression into a Snafu variant with `source: Box<Error>`.
/// Example:
/// wrap_err!(apply(op, value), OperationFailed { operation: name, input: text })?
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e: $crate::error::Error| {
            $crate::error::Error::$variant { $($field: $value),*, source: Box::new(e) }
        })
    }};
}
