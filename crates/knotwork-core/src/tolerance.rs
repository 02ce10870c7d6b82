/// Tolerances used when comparing evaluated curve data.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Tolerance for comparing evaluated values and point coordinates
    pub linear: f64,
    /// Tolerance for comparing curve parameters and knot values
    pub parametric: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_PARAMETRIC: f64 = 1e-10;

    pub fn new(linear: f64, parametric: f64) -> Self {
        Self { linear, parametric }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            parametric: Self::DEFAULT_PARAMETRIC,
        }
    }

    /// Matches the 1e-5 bound the basis identities are usually checked against.
    pub fn loose() -> Self {
        Self {
            linear: 1e-5,
            parametric: 1e-8,
        }
    }

    pub fn tight() -> Self {
        Self {
            linear: 1e-10,
            parametric: 1e-12,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if two parameters are equal within parametric tolerance
    pub fn parametric_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.parametric
    }

    /// Check that a set of basis values sums to one.
    pub fn is_partition_of_unity<I>(self, values: I) -> bool
    where
        I: IntoIterator<Item = f64>,
    {
        self.linear_eq(values.into_iter().sum(), 1.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_default_precision() {
        assert_eq!(Tolerance::default(), Tolerance::default_precision());
        assert!(Tolerance::tight().linear < Tolerance::default().linear);
        assert!(Tolerance::loose().linear > Tolerance::default().linear);
    }

    #[test]
    fn test_comparisons() {
        let tol = Tolerance::new(1e-3, 1e-6);
        assert!(tol.linear_eq(1.0, 1.0005));
        assert!(!tol.linear_eq(1.0, 1.002));
        assert!(tol.is_zero(-5e-4));
        assert!(tol.parametric_eq(0.5, 0.5 + 1e-7));
        assert!(!tol.parametric_eq(0.5, 0.5 + 1e-5));
    }

    #[test]
    fn test_partition_of_unity() {
        let tol = Tolerance::loose();
        assert!(tol.is_partition_of_unity([0.25, 0.5, 0.25]));
        assert!(!tol.is_partition_of_unity([0.25, 0.5]));
        assert!(!tol.is_partition_of_unity(std::iter::empty()));
    }
}
