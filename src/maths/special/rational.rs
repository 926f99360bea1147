//! Rational function evaluation.
//!
//! `R(x) = (p0 + p1*x + ... + pm*x^m) / (q0 + q1*x + ... + qn*x^n)`, each
//! polynomial evaluated with Horner's scheme from the highest-order
//! coefficient down. Numerator and denominator lengths are independent; absent
//! high-order terms are zero.

/// A rational function with fixed numerator and denominator coefficients,
/// stored in ascending order of power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rational<const P: usize, const Q: usize> {
    p: [f64; P],
    q: [f64; Q],
}

impl<const P: usize, const Q: usize> Rational<P, Q> {
    /// Builds the evaluator from coefficients in ascending order of power.
    pub const fn new(p: [f64; P], q: [f64; Q]) -> Self {
        Self { p, q }
    }

    /// Numerator coefficients, lowest order first.
    pub const fn numerator(&self) -> &[f64; P] {
        &self.p
    }

    /// Denominator coefficients, lowest order first.
    pub const fn denominator(&self) -> &[f64; Q] {
        &self.q
    }

    /// Evaluates `R(x)`. A zero denominator or an overflow yields NaN or an
    /// infinity, which is returned as is.
    #[inline(always)]
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate(&self.p, &self.q, x)
    }
}

/// Evaluates the rational function with coefficients `p` over `q` at `x`.
///
/// An empty coefficient slice is the zero polynomial.
#[inline(always)]
pub fn evaluate(p: &[f64], q: &[f64], x: f64) -> f64 {
    horner(p, x) / horner(q, x)
}

#[inline(always)]
fn horner(c: &[f64], x: f64) -> f64 {
    match c.split_last() {
        Some((&top, rest)) => rest.iter().rev().fold(top, |acc, &ci| acc * x + ci),
        None => 0.0,
    }
}
