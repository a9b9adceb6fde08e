//! Output record requests.

/// Requests that a solver backend collect a named data trace.
///
/// The record names address solver-defined quantities (e.g. `"e"` for
/// the electric field or `"inv12"` for a population inversion); the
/// core passes them through without interpretation. The interval
/// controls how often the trace is sampled in simulated time.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: String,
    interval: f64,
}

impl Record {
    /// Create a record request sampling `name` every `interval` seconds.
    pub fn new(name: &str, interval: f64) -> Self {
        Self {
            name: name.to_string(),
            interval,
        }
    }

    /// The requested quantity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sampling interval in seconds of simulated time.
    pub fn interval(&self) -> f64 {
        self.interval
    }
}
