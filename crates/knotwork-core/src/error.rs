use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Curve needs at least one control point")]
    EmptyControlPoints,

    #[error("Derivative of a constant (degree 0) curve is undefined")]
    ConstantDerivative,

    #[error("Invalid knot vector: {0}")]
    InvalidKnotVector(String),

    #[error("Parameter {u} outside of domain [{min}, {max}]")]
    ParameterOutOfDomain { u: f64, min: f64, max: f64 },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SplineError>;

/// Check that `u` lies in the closed interval `[min, max]`.
pub fn check_domain(u: f64, min: f64, max: f64) -> Result<()> {
    if u >= min && u <= max {
        Ok(())
    } else {
        Err(SplineError::ParameterOutOfDomain { u, min, max })
    }
}

/// Check that `index < len`.
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SplineError::IndexOutOfRange { index, len })
    }
}
