use std::num::ParseIntError;
use thiserror::Error;

/// Input that should have been a Discord ID but could not be read as one
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Raised when a chat command receives an ID argument as free text. Reported
    /// back to the invoking channel; over HTTP it results in a 500 Internal Server
    /// Error with a generic message.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
