//! Bernstein polynomials `B_{i,n}(u) = C(n,i) u^i (1-u)^(n-i)`.

use knotwork_core::error::check_domain;
use knotwork_core::Result;

/// `n!` for small `n`. Overflows past `n = 20`.
pub fn factorial(n: u32) -> u64 {
    (1..=u64::from(n)).product()
}

/// `n!` accumulated in floating point.
pub fn factorial_f64(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * f64::from(k))
}

/// Binomial coefficient `C(n, i)` as a float.
pub fn binomial(n: u32, i: u32) -> f64 {
    debug_assert!(i <= n, "binomial index {} exceeds degree {}", i, n);
    factorial_f64(n) / (factorial_f64(i) * factorial_f64(n - i))
}

/// A single Bernstein basis function.
///
/// The binomial coefficient is computed once in [`Bernstein::new`] and reused
/// by every call to [`Bernstein::eval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernstein {
    index: u32,
    degree: u32,
    coefficient: f64,
}

impl Bernstein {
    pub fn new(index: u32, degree: u32) -> Self {
        debug_assert!(
            index <= degree,
            "Bernstein index {} exceeds degree {}",
            index,
            degree
        );
        Self {
            index,
            degree,
            coefficient: binomial(degree, index),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Evaluate at `u`, which must lie in `[0, 1]`.
    pub fn eval(&self, u: f64) -> f64 {
        debug_assert!((0.0..=1.0).contains(&u), "Bernstein parameter {} outside [0, 1]", u);
        let i = self.index as i32;
        let n = self.degree as i32;
        self.coefficient * u.powi(i) * (1.0 - u).powi(n - i)
    }

    /// Checked form of [`Bernstein::eval`].
    pub fn try_eval(&self, u: f64) -> Result<f64> {
        check_domain(u, 0.0, 1.0)?;
        Ok(self.eval(u))
    }
}

/// The Bernstein function `B_{i,n}` as a reusable value.
pub fn bernstein(i: u32, n: u32) -> Bernstein {
    Bernstein::new(i, n)
}

/// Evaluate `B_{i,n}(u)` directly.
pub fn bernstein_at(i: u32, n: u32, u: f64) -> f64 {
    bernstein(i, n).eval(u)
}
