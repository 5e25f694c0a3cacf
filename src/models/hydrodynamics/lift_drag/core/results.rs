//! Results of a lift-drag force evaluation.

use nalgebra::Vector3;
use uom::si::f64::{Angle, Pressure, Velocity};

/// World-frame lift and drag forces acting on a foil.
///
/// Forces are in newtons when the model parameters and velocity are SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftDragForces {
    /// Lift force, perpendicular to the in-plane relative flow.
    pub lift: Vector3<f64>,

    /// Drag force, parallel to the in-plane relative flow.
    pub drag: Vector3<f64>,

    /// Intermediate flow quantities.
    ///
    /// `None` when the relative speed was too small to define a flow
    /// direction, in which case both forces are zero.
    pub diagnostics: Option<FlowDiagnostics>,
}

impl LiftDragForces {
    /// Zero forces with no diagnostics, for a foil at rest in the fluid.
    pub(super) fn at_rest() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            diagnostics: None,
        }
    }

    /// Sum of lift and drag.
    #[must_use]
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag
    }
}

/// Flow quantities computed on the way to the forces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowDiagnostics {
    /// Unsigned angle of attack, in `[0, π]`.
    pub angle_of_attack: Angle,

    /// Relative speed within the lift-drag plane.
    pub speed: Velocity,

    /// Dynamic pressure of the in-plane flow.
    pub dynamic_pressure: Pressure,

    /// Signed lift coefficient.
    pub lift_coefficient: f64,

    /// Drag coefficient due to lift, excluding skin friction.
    pub drag_coefficient: f64,
}
