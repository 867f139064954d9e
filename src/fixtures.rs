pub use hex_literal::hex;

use crate::Outcome;

/// `Ok(42)`
pub fn answer() -> Outcome<i32, &'static str> {
    Outcome::from_value(42)
}

/// `Error("Error")`
pub fn failure() -> Outcome<i32, &'static str> {
    Outcome::from_error("Error")
}
