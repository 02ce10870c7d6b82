pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{SplineError, Result};
pub use tolerance::Tolerance;
