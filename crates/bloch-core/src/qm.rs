//! The density operator value type.
//!
//! A [`QmOperator`] carries the quantum-mechanical state tracked per
//! spatial grid index: level populations on the main diagonal and
//! complex coherences off the diagonal. It is an opaque value type —
//! the operator algebra itself lives in the solver backends.

use num_complex::Complex64;
use smallvec::SmallVec;

/// A density matrix stored as main diagonal plus off-diagonal terms.
///
/// For an n-level system the main diagonal holds n populations and the
/// off-diagonal holds n·(n−1)/2 coherences. The common two-level case
/// fits inline without heap allocation.
///
/// The matrix is not validated on construction; whether populations sum
/// to one or the coherence count matches the level count is the
/// producer's concern (a zero matrix is e.g. a legitimate placeholder).
#[derive(Clone, Debug, PartialEq)]
pub struct QmOperator {
    main_diag: SmallVec<[f64; 4]>,
    off_diag: SmallVec<[Complex64; 6]>,
}

impl QmOperator {
    /// Construct from main-diagonal populations and off-diagonal
    /// coherences.
    pub fn new(main_diag: Vec<f64>, off_diag: Vec<Complex64>) -> Self {
        Self {
            main_diag: SmallVec::from_vec(main_diag),
            off_diag: SmallVec::from_vec(off_diag),
        }
    }

    /// Construct a purely diagonal operator (all coherences zero).
    ///
    /// ```
    /// use bloch_core::QmOperator;
    ///
    /// let rho = QmOperator::diagonal(vec![1.0, 0.0]);
    /// assert_eq!(rho.num_levels(), 2);
    /// assert_eq!(rho.trace(), 1.0);
    /// ```
    pub fn diagonal(main_diag: Vec<f64>) -> Self {
        let n = main_diag.len();
        let coherences = n * n.saturating_sub(1) / 2;
        Self {
            main_diag: SmallVec::from_vec(main_diag),
            off_diag: SmallVec::from_elem(Complex64::new(0.0, 0.0), coherences),
        }
    }

    /// Number of levels (length of the main diagonal).
    pub fn num_levels(&self) -> usize {
        self.main_diag.len()
    }

    /// The level populations.
    pub fn main_diagonal(&self) -> &[f64] {
        &self.main_diag
    }

    /// The coherence terms.
    pub fn off_diagonal(&self) -> &[Complex64] {
        &self.off_diag
    }

    /// Sum of the populations. 1.0 for a physical density matrix.
    pub fn trace(&self) -> f64 {
        self.main_diag.iter().sum()
    }
}
