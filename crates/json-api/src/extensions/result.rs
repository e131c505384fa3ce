//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::warn;

/// Map any error to a logged HTTP error.
pub(crate) trait ResultExt<T> {
    /// Log the error and respond with `400 Bad Request`, using the error as the brief.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{context}: {error}");

            StatusError::bad_request().brief(error.to_string())
        })
    }
}
