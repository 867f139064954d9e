use core::fmt;

use super::{Held, Outcome, Variant};

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    /// Renders as `Ok(..)` or `Error(..)`, hiding the inner representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Held::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Held::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Ok => "Ok",
            Variant::Error => "Error",
        })
    }
}

// There is deliberately no `From<T>` nor `From<E>`: for `T == E` the two
// impls would overlap, and which variant to pick is undecidable anyway.

impl<T, E> From<core::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for core::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
