//! Inverse error functions and the rational evaluator they are built on.
//!
//! The transcendental collaborators (`ln`, `sqrt`) come from the platform math
//! library when `std` is enabled and from `libm` (the `libm` feature) in
//! `no_std` builds.

#![allow(clippy::excessive_precision)]

mod erfcinv;
mod error;
pub mod rational;

pub use erfcinv::{Regime, erfcinv, erfinv, regime};
pub use error::{DomainError, Result};
pub use rational::Rational;

// ========= float helpers =========

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature for ln/sqrt");

#[cfg(feature = "std")]
#[inline(always)]
fn ln(x: f64) -> f64 {
    x.ln()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline(always)]
fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[cfg(feature = "std")]
#[inline(always)]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline(always)]
fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}
