//! Resolution of the relative flow into lift and drag forces.

use nalgebra::{Isometry3, Vector3};
use tracing::trace;
use uom::si::{
    angle::radian,
    area::square_meter,
    f64::{Angle, Pressure, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use super::{FlowDiagnostics, Foil, LiftDragForces};

/// Relative speeds at or below this produce no force.
pub const MIN_FLOW_SPEED: f64 = 0.01;

impl Foil {
    /// Computes world-frame lift and drag for a relative fluid velocity.
    ///
    /// `velocity` is the world-frame free-stream velocity relative to the
    /// foil. Only the rotation of `pose` is used.
    ///
    /// The flow is projected onto the lift-drag plane (normal to the span,
    /// `forward × upward`). Drag acts along the projected flow, lift
    /// perpendicular to it within the plane. When the relative speed is at
    /// most [`MIN_FLOW_SPEED`] both forces are zero and no diagnostics are
    /// reported.
    #[must_use]
    pub fn compute(&self, velocity: &Vector3<f64>, pose: &Isometry3<f64>) -> LiftDragForces {
        if velocity.norm() <= MIN_FLOW_SPEED {
            return LiftDragForces::at_rest();
        }

        let rho = self.fluid_density().get::<kilogram_per_cubic_meter>();
        let area = self.area().get::<square_meter>();

        let forward = pose.rotation * self.forward.into_inner();
        let upward = pose.rotation * self.upward.into_inner();

        // Normal to the lift-drag plane.
        let span = unit_or_zero(forward.cross(&upward));

        let velocity_in_plane = velocity - span * velocity.dot(&span);
        let drag_unit = unit_or_zero(velocity_in_plane);
        let lift_unit = unit_or_zero(drag_unit.cross(&span));

        // acos is unsigned; the side of the chord the flow strikes sets the sign.
        let sign = if forward.dot(&lift_unit) < 0.0 { -1.0 } else { 1.0 };
        let cos_alpha = (-forward.dot(&drag_unit)).clamp(-1.0, 1.0);
        let alpha = cos_alpha.acos();

        let speed = velocity_in_plane.norm();
        let q = 0.5 * rho * speed * speed;

        let cl = self.lift.coefficient(alpha) * sign;
        let lift = lift_unit * (cl * q * area);

        // Vortex drag acts on the full in-plane flow, skin friction on the
        // chordwise component only.
        let cd = self.drag.coefficient(alpha);
        let chordwise_speed = speed * cos_alpha;
        let qf = 0.5 * rho * chordwise_speed * chordwise_speed;
        let drag = drag_unit * ((cd * q + self.cf * qf) * area);

        trace!(
            ?velocity,
            ?forward,
            ?upward,
            ?span,
            ?velocity_in_plane,
            alpha,
            speed,
            cl,
            cd,
            ?lift,
            ?drag,
            "foil forces"
        );

        LiftDragForces {
            lift,
            drag,
            diagnostics: Some(FlowDiagnostics {
                angle_of_attack: Angle::new::<radian>(alpha),
                speed: Velocity::new::<meter_per_second>(speed),
                dynamic_pressure: Pressure::new::<pascal>(q),
                lift_coefficient: cl,
                drag_coefficient: cd,
            }),
        }
    }

    /// Computes only the lift and drag vectors.
    ///
    /// Equivalent to [`Foil::compute`] without the diagnostics.
    #[must_use]
    pub fn forces(
        &self,
        velocity: &Vector3<f64>,
        pose: &Isometry3<f64>,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let LiftDragForces { lift, drag, .. } = self.compute(velocity, pose);
        (lift, drag)
    }
}

/// Normalizes `v`, leaving a vanishing vector at zero instead of NaN.
fn unit_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(1e-12).unwrap_or_else(Vector3::zeros)
}
