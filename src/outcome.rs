//! The [`Outcome`] container.
//!
//! The representation is a closed two-variant enum, private to the crate. Every
//! instance holds exactly one of the two payloads from construction until drop, and
//! nothing outside the crate can reach the payload mutably.

use crate::{Error, Result};

mod trait_implementations;

/// Either a success value `T` or a failure value `E`, never both, never neither.
///
/// Accessors consume `self`, in the manner of `core::result::Result`;
/// use [`as_ref`](Outcome::as_ref) to look without taking.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Outcome<T, E>(pub(crate) Held<T, E>);

#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub(crate) enum Held<T, E> {
    Ok(T),
    Error(E),
}

/// Which of the two variants an [`Outcome`] holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Variant {
    Ok,
    Error,
}

// c'tors
impl<T, E> Outcome<T, E> {
    /// Always `Ok`, whatever `T` and `E` are (even if they coincide).
    pub const fn from_value(value: T) -> Self {
        Self(Held::Ok(value))
    }

    /// Always `Error`, whatever `T` and `E` are (even if they coincide).
    pub const fn from_error(error: E) -> Self {
        Self(Held::Error(error))
    }
}

// inspection
impl<T, E> Outcome<T, E> {
    pub const fn is_ok(&self) -> bool {
        matches!(self.0, Held::Ok(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.0, Held::Error(_))
    }

    pub const fn variant(&self) -> Variant {
        match self.0 {
            Held::Ok(_) => Variant::Ok,
            Held::Error(_) => Variant::Error,
        }
    }

    /// Borrowing view, e.g. to inspect an outcome of non-`Copy` payloads
    /// without giving it up.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match &self.0 {
            Held::Ok(value) => Outcome::from_value(value),
            Held::Error(error) => Outcome::from_error(error),
        }
    }
}

// extraction
impl<T, E> Outcome<T, E> {
    /// The canonical destructuring: calls exactly one of `on_ok` and `on_error`
    /// with the held payload and returns what it returns.
    ///
    /// All other accessors could be written in terms of this one.
    pub fn match_with<U, F, G>(self, on_ok: F, on_error: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self.0 {
            Held::Ok(value) => on_ok(value),
            Held::Error(error) => on_error(error),
        }
    }

    /// Fails: iff holding `Error`.
    pub fn get_value(self) -> Result<T> {
        match self.0 {
            Held::Ok(value) => Ok(value),
            Held::Error(_) => Err(Error::invalid_unwrap(Variant::Ok, Variant::Error)),
        }
    }

    /// Fails: iff holding `Ok`.
    pub fn get_error(self) -> Result<E> {
        match self.0 {
            Held::Error(error) => Ok(error),
            Held::Ok(_) => Err(Error::invalid_unwrap(Variant::Error, Variant::Ok)),
        }
    }

    pub fn try_get_value(self) -> Option<T> {
        self.match_with(Some, |_| None)
    }

    pub fn try_get_error(self) -> Option<E> {
        self.match_with(|_| None, Some)
    }

    pub fn value_or(self, fallback: T) -> T {
        match self.0 {
            Held::Ok(value) => value,
            Held::Error(_) => fallback,
        }
    }

    pub fn error_or(self, fallback: E) -> E {
        match self.0 {
            Held::Error(error) => error,
            Held::Ok(_) => fallback,
        }
    }

    /// Like [`value_or`](Outcome::value_or), computing the fallback from the error.
    pub fn value_or_else<F: FnOnce(E) -> T>(self, fallback: F) -> T {
        self.match_with(|value| value, fallback)
    }

    /// Like [`error_or`](Outcome::error_or), computing the fallback from the value.
    pub fn error_or_else<F: FnOnce(T) -> E>(self, fallback: F) -> E {
        self.match_with(fallback, |error| error)
    }

    pub fn into_result(self) -> core::result::Result<T, E> {
        self.match_with(Ok, Err)
    }
}

// chaining
//
// These build a new outcome, the variant is carried over unchanged
// (except for `and_then`, whose continuation may fail).
impl<T, E> Outcome<T, E> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        self.match_with(
            |value| Outcome::from_value(f(value)),
            Outcome::from_error,
        )
    }

    pub fn map_error<D, F: FnOnce(E) -> D>(self, f: F) -> Outcome<T, D> {
        self.match_with(
            Outcome::from_value,
            |error| Outcome::from_error(f(error)),
        )
    }

    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        self.match_with(f, Outcome::from_error)
    }
}
