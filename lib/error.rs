//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when two vector quantities that must live in the same space have
/// different dimensions.
#[derive(Debug, Error)]
#[error("encountered vectors with incompatible dimensions; got {0} and {1}")]
pub struct DimensionError(pub usize, pub usize);

impl DimensionError {
    /// Check that every vector in `vecs` has the same dimension and return
    /// it; an empty set has no dimension to report and yields `None`.
    pub(crate) fn check<T>(vecs: &[Vec<T>]) -> Result<Option<usize>, Self> {
        let mut iter = vecs.iter();
        let Some(first) = iter.next() else { return Ok(None) };
        let dim = first.len();
        for v in iter {
            if v.len() != dim { return Err(Self(dim, v.len())); }
        }
        Ok(Some(dim))
    }

    pub(crate) fn check_eq(da: usize, db: usize) -> Result<(), Self> {
        (da == db).then_some(()).ok_or(Self(da, db))
    }
}

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a frequency-index window is empty or inverted.
#[derive(Debug, Error)]
#[error("frequency window must satisfy k_max > k_min; got [{0}, {1})")]
pub struct WindowError(pub i64, pub i64);

impl WindowError {
    pub(crate) fn check(k_min: i64, k_max: i64) -> Result<(), Self> {
        (k_max > k_min).then_some(()).ok_or(Self(k_min, k_max))
    }
}

/// Returned when a transform is applied to a zero-length signal.
#[derive(Debug, Error)]
#[error("signal must contain at least one sample")]
pub struct EmptySignalError;

/// Returned when a plane-wave expansion is built from an empty coefficient
/// mapping.
#[derive(Debug, Error)]
#[error("coefficient mapping must contain at least one term")]
pub struct EmptyBasisError;

/// Returned when a field with zero L2 norm is renormalized.
#[derive(Debug, Error)]
#[error("cannot renormalize a field with zero norm")]
pub struct ZeroFieldError;

/// Returned from functions in [`fourier`][crate::fourier].
#[derive(Debug, Error)]
pub enum FourierError {
    /// [`WindowError`]
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`EmptySignalError`]
    #[error("signal error: {0}")]
    EmptySignal(#[from] EmptySignalError),
}

/// Returned from functions in [`wavefunctions`][crate::wavefunctions].
#[derive(Debug, Error)]
pub enum WaveError {
    /// [`EmptyBasisError`]
    #[error("basis error: {0}")]
    EmptyBasis(#[from] EmptyBasisError),

    /// [`DimensionError`]
    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionError),

    /// [`ZeroFieldError`]
    #[error("field error: {0}")]
    ZeroField(#[from] ZeroFieldError),
}
