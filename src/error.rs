use crate::Variant;

/// There is but one failure: asking for the variant that isn't there.
///
/// An outcome that holds neither variant cannot be constructed, so there is no
/// error kind for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// `get_value` on an `Error` outcome, or `get_error` on an `Ok` outcome.
    #[error("attempted to unwrap an invalid result: wanted {wanted}, held {held}")]
    InvalidUnwrap { wanted: Variant, held: Variant },
}

impl Error {
    #[inline]
    pub(crate) fn invalid_unwrap(wanted: Variant, held: Variant) -> Self {
        debug!("invalid unwrap: wanted {}, held {}", wanted, held);
        Error::InvalidUnwrap { wanted, held }
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
