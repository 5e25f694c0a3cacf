use nalgebra::{Isometry3, Vector3};

/// Flow conditions for a single force evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowInput {
    /// Free-stream fluid velocity relative to the foil, world frame, in m/s.
    pub velocity: Vector3<f64>,

    /// Body pose in the world frame.
    ///
    /// Only the rotation is used.
    pub pose: Isometry3<f64>,
}

impl FlowInput {
    /// Creates flow conditions from a relative velocity and body pose.
    #[must_use]
    pub fn new(velocity: Vector3<f64>, pose: Isometry3<f64>) -> Self {
        Self { velocity, pose }
    }
}
