use thiserror::Error as ThisError;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while compiling expressions or assembling a request.
///
/// Compilation errors are always raised synchronously, before the failing call touches the
/// placeholder registry, so fragments produced by earlier calls stay valid.
#[derive(Debug, ThisError)]
pub enum Error {
    /// An operator received arguments it cannot compile.
    #[error("invalid argument to `{operator}`: {reason}")]
    InvalidArgument {
        /// The operator that rejected its arguments (e.g. `in`, `and`).
        operator: &'static str,
        /// The violated constraint.
        reason: &'static str,
    },
    /// An update was compiled from zero fields.
    #[error("invalid argument to `update`: no SET, REMOVE, ADD or DELETE clauses were produced")]
    EmptyUpdate,
    /// A literal could not be encoded into a DynamoDB attribute value.
    #[error("failed to encode attribute value: {0}")]
    Encode(#[from] serde_dynamo::Error),
}

impl Error {
    pub(crate) fn invalid_argument(operator: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { operator, reason }
    }

    /// Whether the error is a local caller mistake (including an empty update).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::EmptyUpdate)
    }
}
