#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for the construction and
//! analysis of plane-wave models of a single electron in a periodic cell.
//!
//! Provides implementations for the following numerical routines:
//! - Operators:
//!     - Diagonal kinetic-energy matrix over an N-dimensional plane-wave
//!       basis
//!     - Electron-nucleus (bare Coulomb kernel) potential matrix, assembled
//!       in parallel over matrix elements
//!     - Full plane-wave Hamiltonian as the sum of the two
//! - Fourier methods:
//!     - Exact truncated discrete Fourier transform and inverse, in one and
//!       two dimensions
//! - Wavefunctions:
//!     - Evaluable plane-wave expansions over finite k-point sets
//!     - L2 renormalization of sampled fields
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod fourier;
pub mod operators;
pub mod wavefunctions;

pub mod docs;

/// Default reduced Planck constant (natural units).
pub const DEF_HBAR: f64 = 1.0;
/// Default particle mass (natural units).
pub const DEF_MASS: f64 = 1.0;

/// A single plane-wave mode index in D-dimensional reciprocal space.
pub type KPoint = Vec<i32>;
/// A nuclear position in D-dimensional real space.
pub type Position = Vec<f64>;
/// A finite mapping from k-points to complex expansion coefficients.
pub type Coeffs
    = std::collections::HashMap<KPoint, num_complex::Complex64>;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
