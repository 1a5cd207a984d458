use thiserror::Error;

/// Failure of a call made against Discord itself.
///
/// Lookups that Discord answers with 404 are not errors; the platform port turns
/// those into `None`. Everything else (rejected requests, missing bot permissions,
/// gateway or transport failures) ends up here unclassified.
#[derive(Error, Debug)]
#[error("Discord request failed: {0}")]
pub struct PlatformError(#[from] Box<serenity::Error>);

/// Boxes the error since serenity::Error is large.
impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        PlatformError(Box::new(err))
    }
}
