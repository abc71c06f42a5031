//! Matrix operators for a single electron in an N-dimensional plane-wave
//! basis.
//!
//! The basis is an ordered set of integer k-points; matrix rows and columns
//! follow the order of the set. The kinetic term is diagonal, the
//! electron-nucleus term couples distinct k-points through a bare Coulomb
//! kernel, and the full Hamiltonian is their elementwise sum. Potential
//! matrix elements are mutually independent and are computed on a rayon
//! worker pool; a panic in any element computation aborts the whole
//! assembly.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use rayon::prelude::*;
use crate::{
    DEF_HBAR,
    DEF_MASS,
    KPoint,
    Position,
    error::DimensionError,
};

pub type OperatorResult<T> = Result<T, DimensionError>;

/// Return the diagonal kinetic-energy matrix for an N-dimensional plane-wave
/// system.
///
/// Entry (i, i) is `ħ² (kᵢ·kᵢ)² / (2 m)`; the dot product itself is squared
/// (see [`docs`][crate::docs] on this dispersion relation). `hbar` and `m`
/// default to [`DEF_HBAR`] and [`DEF_MASS`].
pub fn kinetic(k_points: &[KPoint], hbar: Option<f64>, m: Option<f64>)
    -> OperatorResult<nd::Array2<C64>>
{
    DimensionError::check(k_points)?;
    let hbar = hbar.unwrap_or(DEF_HBAR);
    let m = m.unwrap_or(DEF_MASS);
    let n = k_points.len();
    let mut T: nd::Array2<C64> = nd::Array2::zeros((n, n));
    for (i, k) in k_points.iter().enumerate() {
        let ksq: f64
            = k.iter().map(|kx| i64::from(*kx).pow(2)).sum::<i64>() as f64;
        T[[i, i]] = C64::from(hbar.powi(2) * ksq.powi(2) / (2.0 * m));
    }
    Ok(T)
}

/// Compute a single electron-nucleus matrix element between a bra and a ket
/// k-point, summed over all nuclei.
///
/// Coincident bra and ket k-points give exactly zero; the Coulomb kernel is
/// singular there and the diagonal carries no potential coupling.
fn elec_nuc_element(
    k_bra: &KPoint,
    k_ket: &KPoint,
    cell_area: f64,
    r_pos: &[Position],
) -> C64 {
    if k_bra == k_ket { return C64::zero(); }
    let dk: Vec<f64> = k_bra.iter().zip(k_ket)
        .map(|(kb, kk)| f64::from(kb - kk))
        .collect();
    let dk_sq: f64 = dk.iter().map(|dkx| dkx * dkx).sum();
    let scale = 4.0 * PI / (cell_area * dk_sq);
    r_pos.iter()
        .map(|r| {
            let dk_r: f64
                = dk.iter().zip(r).map(|(dkx, rx)| dkx * rx).sum();
            scale * C64::cis(-dk_r)
        })
        .sum()
}

/// Return the electron-nucleus potential matrix for an N-dimensional
/// plane-wave system with point nuclei at `r_pos`.
///
/// Entry (i, j) is
/// ```text
///           4 π
/// Σ  ------------------ exp(-i (kᵢ - kⱼ)·r)
/// r  A ‖kᵢ - kⱼ‖²
/// ```
/// with `A = cell_area`, and exactly 0 whenever `kᵢ == kⱼ`. Every element is
/// an independent parallel task; the matrix is assembled from the results by
/// index alone.
pub fn elec_nuc_potential(
    k_points: &[KPoint],
    cell_area: f64,
    r_pos: &[Position],
) -> OperatorResult<nd::Array2<C64>>
{
    let dim_k = DimensionError::check(k_points)?;
    let dim_r = DimensionError::check(r_pos)?;
    if let (Some(dk), Some(dr)) = (dim_k, dim_r) {
        DimensionError::check_eq(dk, dr)?;
    }
    let n = k_points.len();
    let elements: Vec<(usize, usize, C64)> = (0..n * n).into_par_iter()
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            let element = elec_nuc_element(
                &k_points[i], &k_points[j], cell_area, r_pos);
            (i, j, element)
        })
        .collect();
    let mut V: nd::Array2<C64> = nd::Array2::zeros((n, n));
    for (i, j, element) in elements.into_iter() {
        V[[i, j]] = element;
    }
    Ok(V)
}

/// Return the full Hamiltonian matrix `H = T + V` for an N-dimensional
/// plane-wave system: [`kinetic`] plus [`elec_nuc_potential`], elementwise.
pub fn plane_wave_hamiltonian(
    k_points: &[KPoint],
    cell_area: f64,
    r_pos: &[Position],
    hbar: Option<f64>,
    m: Option<f64>,
) -> OperatorResult<nd::Array2<C64>>
{
    Ok(kinetic(k_points, hbar, m)?
        + elec_nuc_potential(k_points, cell_area, r_pos)?)
}
