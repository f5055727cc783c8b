//! Configuration errors

use super::GloboticketError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> GloboticketError {
    GloboticketError::ConfigInvalid {
        message: message.into(),
    }
}
