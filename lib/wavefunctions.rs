//! Evaluable plane-wave expansions over finite k-point sets.
//!
//! A [`PlaneWave`] binds a coefficient mapping once and can then be evaluated
//! over whole batches of spatial points. Evaluations are not normalized; use
//! [`plane_wave_renorm`] on a sampled field to impose unit L2 norm.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    Coeffs,
    KPoint,
    error::{ DimensionError, EmptyBasisError, WaveError, ZeroFieldError },
};

pub type WaveResult<T> = Result<T, WaveError>;

/// A plane-wave expansion
/// ```text
/// ψ(r) = Σ c_k exp(iπ k·r)
///        k
/// ```
/// over a finite set of integer k-points.
///
/// The spatial dimension is inferred from the coefficient keys; the phase
/// convention carries a factor of `π`, not `2π` (see [`docs`][crate::docs]).
#[derive(Clone, Debug)]
pub struct PlaneWave {
    coeffs: Coeffs,
    dim: usize,
}

impl PlaneWave {
    /// Bind a coefficient mapping into an evaluable expansion.
    ///
    /// The mapping must be non-empty and all keys must share one dimension.
    pub fn new(coeffs: Coeffs) -> WaveResult<Self> {
        let dim = coeffs.keys().next().ok_or(EmptyBasisError)?.len();
        for k in coeffs.keys() {
            DimensionError::check_eq(dim, k.len())?;
        }
        Ok(Self { coeffs, dim })
    }

    /// Return the spatial dimension of the expansion.
    pub fn dim(&self) -> usize { self.dim }

    /// Return a reference to the bound coefficient mapping.
    pub fn coeffs(&self) -> &Coeffs { &self.coeffs }

    /// Evaluate the expansion at a batch of spatial points, one D-dimensional
    /// point per row of `points`, producing one complex value per point.
    ///
    /// Each mode contributes through a single matrix-vector product
    /// `points · k`; summation order over the k-points is unspecified.
    pub fn evaluate<S>(&self, points: &Arr2<S>)
        -> WaveResult<nd::Array1<C64>>
    where S: nd::Data<Elem = f64>
    {
        DimensionError::check_eq(self.dim, points.ncols())?;
        let mut values: nd::Array1<C64> = nd::Array1::zeros(points.nrows());
        for (k, ck) in self.coeffs.iter() {
            let kvec: nd::Array1<f64>
                = k.iter().map(|kx| f64::from(*kx)).collect();
            let phases = points.dot(&kvec);
            for (val, ph) in values.iter_mut().zip(phases.iter()) {
                *val += *ck * C64::cis(PI * ph);
            }
        }
        Ok(values)
    }

    /// Evaluate the expansion at a single spatial point.
    pub fn evaluate_at<S>(&self, r: &Arr1<S>) -> WaveResult<C64>
    where S: nd::Data<Elem = f64>
    {
        DimensionError::check_eq(self.dim, r.len())?;
        let value = self.coeffs.iter()
            .map(|(k, ck)| *ck * C64::cis(PI * k_dot_r(k, r)))
            .sum();
        Ok(value)
    }
}

fn k_dot_r<S>(k: &KPoint, r: &Arr1<S>) -> f64
where S: nd::Data<Elem = f64>
{
    k.iter().zip(r.iter()).map(|(kx, rx)| f64::from(*kx) * rx).sum()
}

/// Return a copy of a sampled field rescaled to unit L2 norm over all of its
/// elements, with the shape preserved.
pub fn plane_wave_renorm<S, D>(field: &nd::ArrayBase<S, D>)
    -> WaveResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = C64>,
    D: nd::Dimension,
{
    let norm: f64
        = field.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    if norm == 0.0 { return Err(ZeroFieldError.into()); }
    Ok(field.mapv(|z| z / norm))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::{ array, s, Array1, Array2 };
    use super::*;

    const EPS: f64 = 1e-12;

    fn single_mode(k: KPoint, c: C64) -> PlaneWave {
        PlaneWave::new(Coeffs::from([(k, c)])).unwrap()
    }

    #[test]
    fn single_mode_at_origin_returns_its_coefficient() {
        let c = C64::new(0.4343, -1.25);
        let pw = single_mode(vec![1, 0], c);
        let v = pw.evaluate_at(&array![0.0, 0.0]).unwrap();
        assert_eq!(v, c);
    }

    #[test]
    fn unit_mode_at_unit_point_flips_sign() {
        // exp(iπ · 1) = -1
        let c = C64::new(1.0, 0.5);
        let pw = single_mode(vec![1, 0], c);
        let v = pw.evaluate_at(&array![1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(v.re, -c.re, epsilon = EPS);
        assert_abs_diff_eq!(v.im, -c.im, epsilon = EPS);
    }

    #[test]
    fn batch_evaluation_matches_per_point() {
        let coeffs = Coeffs::from([
            (vec![1, 0], C64::new(0.4343, 0.0)),
            (vec![0, 1], C64::new(0.3434, -0.2)),
            (vec![-1, 1], C64::new(0.0, 0.9)),
        ]);
        let pw = PlaneWave::new(coeffs).unwrap();
        let points: Array2<f64> = array![
            [0.0, 0.0],
            [0.5, -0.25],
            [1.0, 2.0],
            [-0.75, 0.125],
        ];
        let batch = pw.evaluate(&points).unwrap();
        for (v, r) in batch.iter().zip(points.outer_iter()) {
            let single = pw.evaluate_at(&r).unwrap();
            assert_abs_diff_eq!(v.re, single.re, epsilon = EPS);
            assert_abs_diff_eq!(v.im, single.im, epsilon = EPS);
        }
    }

    #[test]
    fn batch_evaluation_on_a_strided_view() {
        let coeffs = Coeffs::from([
            (vec![2, -1], C64::new(0.6, 0.1)),
            (vec![0, 3], C64::new(-0.3, 0.8)),
        ]);
        let pw = PlaneWave::new(coeffs).unwrap();
        let points: Array2<f64> = Array2::from_shape_fn(
            (6, 2),
            |(i, j)| 0.3 * i as f64 - 0.7 * j as f64,
        );
        let view = points.slice(s![..;2, ..]);
        let batch = pw.evaluate(&view).unwrap();
        assert_eq!(batch.len(), 3);
        for (v, r) in batch.iter().zip(view.outer_iter()) {
            let single = pw.evaluate_at(&r).unwrap();
            assert_abs_diff_eq!(v.re, single.re, epsilon = EPS);
            assert_abs_diff_eq!(v.im, single.im, epsilon = EPS);
        }
    }

    #[test]
    fn expansion_is_linear_in_the_coefficients() {
        let ka = vec![1, 0];
        let kb = vec![0, 2];
        let ca = C64::new(0.3, -0.1);
        let cb = C64::new(-0.7, 0.2);
        let both = PlaneWave::new(
            Coeffs::from([(ka.clone(), ca), (kb.clone(), cb)])).unwrap();
        let r = array![0.3, -1.2];
        let v = both.evaluate_at(&r).unwrap();
        let va = single_mode(ka, ca).evaluate_at(&r).unwrap();
        let vb = single_mode(kb, cb).evaluate_at(&r).unwrap();
        assert_abs_diff_eq!(v.re, (va + vb).re, epsilon = EPS);
        assert_abs_diff_eq!(v.im, (va + vb).im, epsilon = EPS);
    }

    #[test]
    fn empty_mapping_is_rejected() {
        assert!(matches!(
            PlaneWave::new(Coeffs::new()),
            Err(WaveError::EmptyBasis(..)),
        ));
    }

    #[test]
    fn mixed_key_dimensions_are_rejected() {
        let coeffs = Coeffs::from([
            (vec![1, 0], C64::new(1.0, 0.0)),
            (vec![2], C64::new(0.0, 1.0)),
        ]);
        assert!(matches!(
            PlaneWave::new(coeffs),
            Err(WaveError::Dimension(..)),
        ));
    }

    #[test]
    fn point_dimension_must_match() {
        let pw = single_mode(vec![1, 0], C64::new(1.0, 0.0));
        assert!(matches!(
            pw.evaluate_at(&array![1.0]),
            Err(WaveError::Dimension(DimensionError(2, 1))),
        ));
        let points: Array2<f64> = Array2::zeros((3, 3));
        assert!(matches!(
            pw.evaluate(&points),
            Err(WaveError::Dimension(DimensionError(2, 3))),
        ));
    }

    #[test]
    fn renorm_produces_unit_norm() {
        let field: Array2<C64> = Array2::from_shape_fn(
            (3, 5),
            |(i, j)| C64::new(i as f64 + 0.5, j as f64 - 2.0),
        );
        let out = plane_wave_renorm(&field).unwrap();
        assert_eq!(out.dim(), field.dim());
        let norm: f64
            = out.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = EPS);
        // direction is unchanged
        let scale = field[[0, 0]] / out[[0, 0]];
        for (f, o) in field.iter().zip(out.iter()) {
            let back = *o * scale;
            assert_abs_diff_eq!(back.re, f.re, epsilon = 1e-9);
            assert_abs_diff_eq!(back.im, f.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn renorm_of_one_dimensional_field() {
        let field: Array1<C64> = array![
            C64::new(3.0, 0.0), C64::new(0.0, 4.0),
        ];
        let out = plane_wave_renorm(&field).unwrap();
        assert_abs_diff_eq!(out[0].re, 0.6, epsilon = EPS);
        assert_abs_diff_eq!(out[1].im, 0.8, epsilon = EPS);
    }

    #[test]
    fn zero_field_is_rejected() {
        let field: Array2<C64> = Array2::zeros((2, 2));
        assert!(matches!(
            plane_wave_renorm(&field),
            Err(WaveError::ZeroField(..)),
        ));
        let empty: Array1<C64> = array![];
        assert!(matches!(
            plane_wave_renorm(&empty),
            Err(WaveError::ZeroField(..)),
        ));
    }
}
