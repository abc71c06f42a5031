//! Exact truncated discrete Fourier transforms for one- and two-dimensional
//! signals.
//!
//! All transforms here evaluate the defining sums directly over a restricted
//! frequency-index window `[k_min, k_max)`; none of them is a fast transform.
//! The forward transform carries the full `1/N` normalization and the inverse
//! carries none, so a forward-inverse round trip is exact only over the full
//! band. See [`docs`][crate::docs] for the conventions.

use std::f64::consts::TAU;
use ndarray::{ self as nd, Axis };
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    Arr1,
    Arr2,
    error::{ EmptySignalError, FourierError, LengthError, WindowError },
};

pub type FourierResult<T> = Result<T, FourierError>;

/// Compute the truncated discrete Fourier transform of a signal.
///
/// Index 0 of the output corresponds to frequency index `k_min`; the output
/// has length `k_max - k_min`:
/// ```text
///              1  N-1
/// X[k-kmin] =  -   Σ  x[n] exp(-2πi k n / N)
///              N  n=0
/// ```
/// Negative frequency indices are allowed.
pub fn dft<S>(signal: &Arr1<S>, k_min: i64, k_max: i64)
    -> FourierResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    WindowError::check(k_min, k_max)?;
    let n = signal.len();
    if n == 0 { return Err(EmptySignalError.into()); }
    let mut spectrum: nd::Array1<C64>
        = nd::Array1::zeros((k_max - k_min) as usize);
    for (Xk, k) in spectrum.iter_mut().zip(k_min..k_max) {
        let mut acc = C64::zero();
        for (j, xj) in signal.iter().enumerate() {
            let ph = -TAU * (k as f64) * (j as f64) / (n as f64);
            acc += *xj * C64::cis(ph);
        }
        *Xk = acc / n as f64;
    }
    Ok(spectrum)
}

/// Reconstruct a signal of length `sig_len` from a truncated spectrum.
///
/// ```text
///        kmax-1
/// x[n] =   Σ    X[k-kmin] exp(+2πi k n / sig_len)
///        k=kmin
/// ```
/// No `1/N` factor is applied here; [`dft`] normalizes on the forward pass.
/// For a window narrower than the full band this produces the band-limited
/// reconstruction of the original signal, not an exact inverse.
pub fn idft<S>(spectrum: &Arr1<S>, sig_len: usize, k_min: i64, k_max: i64)
    -> FourierResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    WindowError::check(k_min, k_max)?;
    LengthError::check(spectrum.len(), (k_max - k_min) as usize)?;
    let mut signal: nd::Array1<C64> = nd::Array1::zeros(sig_len);
    for (xj, j) in signal.iter_mut().zip(0..sig_len) {
        let mut acc = C64::zero();
        for (Xk, k) in spectrum.iter().zip(k_min..k_max) {
            let ph = TAU * (k as f64) * (j as f64) / (sig_len as f64);
            acc += *Xk * C64::cis(ph);
        }
        *xj = acc;
    }
    Ok(signal)
}

/// Compute the truncated two-dimensional discrete Fourier transform of a
/// signal as two separable passes of [`dft`]: one over every row, then one
/// over every column of the intermediate.
///
/// The output is square with side `k_max - k_min` and is oriented so that
/// axis 0 remains the row-frequency axis.
pub fn dft2<S>(signal: &Arr2<S>, k_min: i64, k_max: i64)
    -> FourierResult<nd::Array2<C64>>
where S: nd::Data<Elem = C64>
{
    WindowError::check(k_min, k_max)?;
    let width = (k_max - k_min) as usize;
    let mut rows: nd::Array2<C64>
        = nd::Array2::zeros((signal.nrows(), width));
    for (mut out, row) in
        rows.outer_iter_mut().zip(signal.outer_iter())
    {
        out.assign(&dft(&row, k_min, k_max)?);
    }
    let mut spectrum: nd::Array2<C64> = nd::Array2::zeros((width, width));
    for (mut out, col) in
        spectrum.axis_iter_mut(Axis(1)).zip(rows.axis_iter(Axis(1)))
    {
        out.assign(&dft(&col, k_min, k_max)?);
    }
    Ok(spectrum)
}

/// Reconstruct a two-dimensional signal of shape `shape` from a truncated
/// two-dimensional spectrum, mirroring [`dft2`]: [`idft`] down every column,
/// then along every row of the intermediate.
pub fn idft2<S>(
    spectrum: &Arr2<S>,
    shape: (usize, usize),
    k_min: i64,
    k_max: i64,
) -> FourierResult<nd::Array2<C64>>
where S: nd::Data<Elem = C64>
{
    WindowError::check(k_min, k_max)?;
    let (nrows, ncols) = shape;
    let mut cols: nd::Array2<C64>
        = nd::Array2::zeros((nrows, spectrum.ncols()));
    for (mut out, col) in
        cols.axis_iter_mut(Axis(1)).zip(spectrum.axis_iter(Axis(1)))
    {
        out.assign(&idft(&col, nrows, k_min, k_max)?);
    }
    let mut signal: nd::Array2<C64> = nd::Array2::zeros((nrows, ncols));
    for (mut out, row) in
        signal.outer_iter_mut().zip(cols.outer_iter())
    {
        out.assign(&idft(&row, ncols, k_min, k_max)?);
    }
    Ok(signal)
}
