#![cfg_attr(not(test), no_std)]
//! A success-or-failure container, [`Outcome`], with total accessors.
//!
//! Unlike `core::result::Result`, the variants are not public: an [`Outcome`] is built
//! with [`Outcome::from_value`] or [`Outcome::from_error`] and taken apart with
//! [`Outcome::match_with`] or one of its convenience wrappers. Extracting the wrong
//! variant is not a panic, it is an [`Error::InvalidUnwrap`].
//!
//! ```
//! use two_variant_outcome::{Error, Outcome, Variant};
//!
//! let answer = Outcome::<i32, &str>::from_value(42);
//! assert!(answer.is_ok());
//! assert_eq!(answer.value_or(0), 42);
//! assert_eq!(
//!     answer.get_error(),
//!     Err(Error::InvalidUnwrap { wanted: Variant::Error, held: Variant::Ok }),
//! );
//! ```

// must come before the modules, they use the generated log macros
delog::generate_macros!();

mod error;
pub use error::{Error, Result};
mod outcome;
pub use outcome::{Outcome, Variant};

#[cfg(test)]
mod fixtures;
