//! Construction errors

use weft_dom::DomError;

/// Result type for construction calls
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that abort a construction call.
///
/// Nothing is rolled back: attributes replaced before the failure stay
/// replaced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("key is already associated with a <{found}> element, cannot use it with <{expected}>")]
    Conflict { expected: String, found: String },

    #[error("key string {marker:?} is already associated with another key")]
    DuplicateMarker { marker: String },

    #[error("search for key string {marker:?} found {count} elements")]
    AmbiguousMatch { marker: String, count: usize },

    #[error("cannot set a non-finite number value for the \"{name}\" attribute")]
    NonFiniteValue { name: String },

    #[error("cannot set an illegal value for the \"{name}\" attribute")]
    IllegalValue { name: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}
