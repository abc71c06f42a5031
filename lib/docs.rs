//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [The Hamiltonian matrix](#the-hamiltonian-matrix)
//! - [Truncated Fourier transforms](#truncated-fourier-transforms)
//! - [Phase and normalization conventions](#phase-and-normalization-conventions)
//!
//! # Background
//! A single electron in a periodic cell can be expanded over plane waves
//! indexed by integer k-points,
//! ```text
//! ψ(r) = Σ c_k exp(iπ k·r)
//!        k
//! ```
//! where each k is a D-dimensional vector of integers and the sum runs over
//! a finite, *ordered* set of modes. The ordering matters: it fixes the
//! correspondence between modes and the rows and columns of every matrix
//! operator built over the basis. All quantities are handled in natural
//! units with ħ = m = 1 by default.
//!
//! # The Hamiltonian matrix
//! The Hamiltonian splits into a kinetic and a potential part, H = T + V.
//! The kinetic part is diagonal in the plane-wave basis,
//! ```text
//!          ħ² (kᵢ·kᵢ)²
//! T[i,i] = -----------
//!             2 m
//! ```
//! Note that the *dot product* is squared here, not merely the mode index;
//! this quartic dispersion is the convention this crate implements, and it
//! is deliberately not reduced to the quadratic ħ²(k·k)/2m form.
//!
//! The potential part couples distinct modes through the bare Coulomb
//! kernel of a set of point nuclei at positions r,
//! ```text
//!                 4 π
//! V[i,j] = Σ ------------- exp(-i (kᵢ - kⱼ)·r)
//!          r  A ‖kᵢ - kⱼ‖²
//! ```
//! with A the area (volume) of the periodic cell. The kernel is singular at
//! kᵢ = kⱼ, so coincident bra and ket modes contribute exactly zero: the
//! diagonal of V vanishes, as does any element between duplicated modes.
//! Since ‖kᵢ - kⱼ‖² is symmetric under exchange and conjugation flips the
//! sign of the exponent, V is Hermitian whenever its entries are finite.
//!
//! Each element of V depends only on one (bra, ket) pair and the shared
//! nucleus set, so the n² elements are computed as independent tasks on a
//! worker pool and written into the matrix by index. Completion order
//! carries no meaning and no partial matrix is ever observable.
//!
//! # Truncated Fourier transforms
//! The crate evaluates the discrete Fourier transform by its defining sum
//! over a restricted frequency window `[k_min, k_max)`,
//! ```text
//!              1  N-1
//! X[k-kmin] =  -   Σ  x[n] exp(-2πi k n / N)
//!              N  n=0
//! ```
//! and reconstructs via
//! ```text
//!        kmax-1
//! x[n] =   Σ    X[k-kmin] exp(+2πi k n / N)
//!        k=kmin
//! ```
//! This is an O(N·(kmax-kmin)) computation per pass; no fast algorithm is
//! involved. The two-dimensional variants apply the one-dimensional
//! transform separably, rows first and then columns of the intermediate on
//! the forward pass and in mirror order on the inverse.
//!
//! Restricting the window makes the pair lossy by construction: the inverse
//! yields the band-limited reconstruction of the input, which equals the
//! input exactly only when the window covers the full band `[0, N)` or when
//! the input has no spectral content outside the window.
//!
//! # Phase and normalization conventions
//! Two conventions here differ from common textbook choices and are fixed
//! properties of the crate:
//! - the forward transform carries the whole `1/N` normalization and the
//!   inverse carries none, rather than splitting symmetrically;
//! - the plane-wave phase is `exp(iπ k·r)`, a factor of π per unit of k·r
//!   rather than 2π, so a mode is periodic over r → r + 2 along each axis.
//!
//! Spatial fields sampled from an expansion are renormalized against the
//! flattened L2 norm,
//! ```text
//! ψ → ψ / ‖ψ‖₂
//! ```
//! which imposes Σ|ψ|² = 1 over the samples irrespective of the field's
//! shape or any grid spacing.
