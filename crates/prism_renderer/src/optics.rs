//! Per-object optical coefficients.

/// How much of each lighting term reaches the final pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalProperties {
    /// Weight of the surface color with no light applied
    pub ambient: f32,
    /// Weight of each light's contribution
    pub diffusion: f32,
}

impl OpticalProperties {
    pub fn new(ambient: f32, diffusion: f32) -> Self {
        Self { ambient, diffusion }
    }
}

impl Default for OpticalProperties {
    fn default() -> Self {
        Self {
            ambient: 1.0,
            diffusion: 0.5,
        }
    }
}
