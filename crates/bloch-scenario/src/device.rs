//! The simulated device.

/// Names the simulated structure and gives its spatial extent.
///
/// The region and material description lives in the solver backends;
/// the core only needs what the writer contract persists: a name and
/// the device length the grid is laid over.
#[derive(Clone, Debug, PartialEq)]
pub struct Device {
    name: String,
    length: f64,
}

impl Device {
    /// Create a device of `length` meters.
    pub fn new(name: &str, length: f64) -> Self {
        Self {
            name: name.to_string(),
            length,
        }
    }

    /// The device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device length in meters.
    pub fn length(&self) -> f64 {
        self.length
    }
}
