#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod maths;

pub use maths::special;
pub use maths::special::{DomainError, Rational, Regime, Result, erfcinv, erfinv, regime};
