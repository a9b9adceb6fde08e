//! Result traces produced by solver runs.

/// A (rows × cols) matrix of sampled values for one requested record.
///
/// Rows index sample times, columns index grid positions. Complex
/// traces carry a second matrix for the imaginary part; real traces
/// (fields) carry none.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    name: String,
    rows: usize,
    cols: usize,
    real: Vec<f64>,
    imag: Option<Vec<f64>>,
}

impl Trace {
    /// Create a real-valued trace.
    ///
    /// # Panics
    ///
    /// Panics if `real.len() != rows * cols`.
    pub fn real(name: &str, rows: usize, cols: usize, real: Vec<f64>) -> Self {
        assert_eq!(real.len(), rows * cols, "trace data must fill rows x cols");
        Self {
            name: name.to_string(),
            rows,
            cols,
            real,
            imag: None,
        }
    }

    /// Create a complex-valued trace from separate real and imaginary
    /// parts.
    ///
    /// # Panics
    ///
    /// Panics if either part's length differs from `rows * cols`.
    pub fn complex(name: &str, rows: usize, cols: usize, real: Vec<f64>, imag: Vec<f64>) -> Self {
        assert_eq!(real.len(), rows * cols, "trace data must fill rows x cols");
        assert_eq!(imag.len(), rows * cols, "trace data must fill rows x cols");
        Self {
            name: name.to_string(),
            rows,
            cols,
            real,
            imag: Some(imag),
        }
    }

    /// The record name this trace answers.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the trace carries an imaginary part.
    pub fn is_complex(&self) -> bool {
        self.imag.is_some()
    }

    /// Number of sample times.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid positions.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The real part, row-major.
    pub fn data_real(&self) -> &[f64] {
        &self.real
    }

    /// The imaginary part, row-major, if the trace is complex.
    pub fn data_imag(&self) -> Option<&[f64]> {
        self.imag.as_deref()
    }
}
