//! Lift and drag on a single radially symmetric foil.
//!
//! A foil (rudder, keel, fin, or control surface) is described by its
//! body-frame chord and lift axes, a reference area, and piecewise-linear
//! lift and drag coefficient curves in angle of attack. Given the relative
//! fluid velocity and the body orientation, [`Foil::compute`] resolves the
//! flow into the foil's lift-drag plane and returns world-frame forces.
//!
//! The flow is assumed steady and incompressible.

mod drag;
mod error;
mod forces;
mod input;
mod lift;
mod params;
mod results;

#[cfg(test)]
mod test_support;

pub use error::{Axis, ConfigError};
pub use forces::MIN_FLOW_SPEED;
pub use input::FlowInput;
pub use params::FoilParams;
pub use results::{FlowDiagnostics, LiftDragForces};

use nalgebra::{UnitVector3, Vector3};
use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, MassDensity},
    mass_density::kilogram_per_cubic_meter,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use drag::DragCurve;
use lift::{LiftCurve, StallLines};

/// Smallest non-zero stall radius accepted by [`Foil::new`].
pub const MIN_STALL_RADIUS: f64 = 0.01;

/// Validated, immutable foil model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Foil {
    fluid_density: Constrained<MassDensity, StrictlyPositive>,
    area: Constrained<Area, StrictlyPositive>,
    forward: UnitVector3<f64>,
    upward: UnitVector3<f64>,
    lift: LiftCurve,
    drag: DragCurve,
    cf: f64,
}

impl Foil {
    /// Validates parameters and builds a foil.
    ///
    /// The forward and upward axes are normalized. They are not required to
    /// be perpendicular.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid parameter.
    pub fn new(params: &FoilParams) -> Result<Self, ConfigError> {
        Self::validate(params).inspect_err(|err| {
            debug!(error = %err, ?params, "rejected foil parameters");
        })
    }

    fn validate(params: &FoilParams) -> Result<Self, ConfigError> {
        if !params.radial_symmetry {
            return Err(ConfigError::NotRadiallySymmetric);
        }

        let fluid_density = StrictlyPositive::new(MassDensity::new::<kilogram_per_cubic_meter>(
            params.fluid_density,
        ))
        .map_err(ConfigError::FluidDensity)?;

        let area = StrictlyPositive::new(Area::new::<square_meter>(params.area))
            .map_err(ConfigError::Area)?;

        let r_stall = NonNegative::new(params.r_stall)
            .map_err(ConfigError::StallRadius)?
            .into_inner();

        // A NaN stall angle fails the comparison and must be rejected too.
        if params.alpha_stall.is_nan() || r_stall >= params.alpha_stall {
            return Err(ConfigError::StallRadiusTooLarge {
                r_stall,
                alpha_stall: params.alpha_stall,
            });
        }

        if r_stall > 0.0 && r_stall < MIN_STALL_RADIUS {
            return Err(ConfigError::StallRadiusBelowFloor {
                r_stall,
                min: MIN_STALL_RADIUS,
            });
        }

        let forward = normalize_axis(params.forward, Axis::Forward)?;
        let upward = normalize_axis(params.upward, Axis::Upward)?;

        let lines = StallLines {
            alpha0: params.alpha0,
            cla: params.cla,
            alpha_stall: params.alpha_stall,
            cla_stall: params.cla_stall,
        };

        Ok(Self {
            fluid_density,
            area,
            forward,
            upward,
            lift: LiftCurve::new(lines, r_stall),
            drag: DragCurve { cda: params.cda },
            cf: params.cf,
        })
    }

    /// Density of the surrounding fluid.
    #[must_use]
    pub fn fluid_density(&self) -> MassDensity {
        self.fluid_density.get()
    }

    /// Reference area of the foil.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area.get()
    }

    /// Unit chordwise axis in the body frame.
    #[must_use]
    pub fn forward(&self) -> UnitVector3<f64> {
        self.forward
    }

    /// Unit lift axis in the body frame.
    #[must_use]
    pub fn upward(&self) -> UnitVector3<f64> {
        self.upward
    }

    /// Lift coefficient at an unsigned angle of attack in radians.
    #[must_use]
    pub fn lift_coefficient(&self, alpha: f64) -> f64 {
        self.lift.coefficient(alpha)
    }

    /// Drag coefficient due to lift at an unsigned angle of attack in radians.
    #[must_use]
    pub fn drag_coefficient(&self, alpha: f64) -> f64 {
        self.drag.coefficient(alpha)
    }
}

fn normalize_axis(axis: [f64; 3], which: Axis) -> Result<UnitVector3<f64>, ConfigError> {
    let v = Vector3::from(axis);
    if !v.iter().all(|c| c.is_finite()) {
        return Err(ConfigError::DegenerateAxis { axis: which });
    }
    UnitVector3::try_new(v, f64::EPSILON).ok_or(ConfigError::DegenerateAxis { axis: which })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    use super::test_support::{blended_params, params};

    #[test]
    fn defaults_are_valid() {
        let foil = Foil::new(&FoilParams::default()).expect("defaults should be valid");
        assert_relative_eq!(foil.fluid_density().get::<kilogram_per_cubic_meter>(), 1.2);
        assert_relative_eq!(foil.area().get::<square_meter>(), 1.0);
    }

    #[test]
    fn axes_are_normalized() {
        let foil = Foil::new(&FoilParams {
            forward: [3.0, 0.0, 0.0],
            upward: [0.0, 0.0, 0.5],
            ..params()
        })
        .unwrap();

        assert_relative_eq!(foil.forward().into_inner(), Vector3::x());
        assert_relative_eq!(foil.upward().into_inner(), Vector3::z());
    }

    #[test]
    fn skewed_axes_are_accepted() {
        let result = Foil::new(&FoilParams {
            upward: [1.0, 0.0, 1.0],
            ..params()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_asymmetric_foils() {
        let err = Foil::new(&FoilParams {
            radial_symmetry: false,
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::NotRadiallySymmetric);
    }

    #[test]
    fn rejects_stall_radius_equal_to_stall_angle() {
        let p = params();
        let err = Foil::new(&FoilParams {
            r_stall: p.alpha_stall,
            ..p
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::StallRadiusTooLarge { .. }));
    }

    #[test]
    fn rejects_stall_radius_below_floor() {
        let err = Foil::new(&blended_params(0.005)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::StallRadiusBelowFloor {
                r_stall: 0.005,
                min: MIN_STALL_RADIUS,
            }
        );
    }

    #[test]
    fn rejects_nan_stall_angle() {
        let err = Foil::new(&FoilParams {
            alpha_stall: f64::NAN,
            ..params()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::StallRadiusTooLarge { .. }));

        let err = Foil::new(&FoilParams {
            alpha_stall: f64::NAN,
            ..blended_params(0.05)
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::StallRadiusTooLarge { .. }));
    }

    #[test]
    fn accepts_stall_radius_at_floor() {
        assert!(Foil::new(&blended_params(MIN_STALL_RADIUS)).is_ok());
    }

    #[test]
    fn rejects_negative_stall_radius() {
        let err = Foil::new(&blended_params(-0.05)).unwrap_err();
        assert_eq!(err, ConfigError::StallRadius(ConstraintError::Negative));
    }

    #[test]
    fn rejects_non_positive_density_and_area() {
        let err = Foil::new(&FoilParams {
            fluid_density: 0.0,
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::FluidDensity(ConstraintError::Zero));

        let err = Foil::new(&FoilParams {
            area: -1.0,
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::Area(ConstraintError::Negative));
    }

    #[test]
    fn rejects_degenerate_axes() {
        let err = Foil::new(&FoilParams {
            forward: [0.0, 0.0, 0.0],
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::DegenerateAxis { axis: Axis::Forward });

        let err = Foil::new(&FoilParams {
            upward: [f64::NAN, 0.0, 1.0],
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::DegenerateAxis { axis: Axis::Upward });
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = Foil::new(&FoilParams {
            r_stall: 0.5,
            ..params()
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("stall radius must be smaller than stall angle"));
    }
}
