//! Lift-drag model for rudders, keels, fins, and other foils.
//!
//! [`LiftDragModel`] is the [`twine_core::Model`] adapter over the internal
//! `core` module, which holds the coefficient curves and force geometry.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Isometry3, Vector3};
//! use twine_core::Model;
//! use twine_foils::models::hydrodynamics::lift_drag::{FlowInput, FoilParams, LiftDragModel};
//!
//! let rudder = LiftDragModel::new(&FoilParams {
//!     fluid_density: 1025.0,
//!     area: 0.2,
//!     ..FoilParams::default()
//! })
//! .unwrap();
//!
//! let input = FlowInput::new(Vector3::new(-2.0, 0.0, 0.1), Isometry3::identity());
//! let forces = rudder.call(&input).unwrap();
//! assert!(forces.lift.z > 0.0);
//! ```

mod core;

pub use self::core::{
    Axis, ConfigError, FlowDiagnostics, FlowInput, FoilParams, LiftDragForces, MIN_FLOW_SPEED,
    MIN_STALL_RADIUS,
};

use std::convert::Infallible;

use nalgebra::{Isometry3, UnitVector3, Vector3};
use twine_core::Model;
use uom::si::f64::{Area, MassDensity};

use self::core::Foil;

/// Steady-state lift and drag on a single radially symmetric foil.
///
/// The model is immutable once built and can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftDragModel {
    foil: Foil,
}

impl LiftDragModel {
    /// Validates parameters and builds a model.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any parameter is invalid.
    pub fn new(params: &FoilParams) -> Result<Self, ConfigError> {
        Foil::new(params).map(|foil| Self { foil })
    }

    /// Computes world-frame lift and drag forces.
    ///
    /// See [`LiftDragForces`] for the conventions of the result.
    #[must_use]
    pub fn compute(&self, velocity: &Vector3<f64>, pose: &Isometry3<f64>) -> LiftDragForces {
        self.foil.compute(velocity, pose)
    }

    /// Computes only the `(lift, drag)` force vectors.
    #[must_use]
    pub fn forces(
        &self,
        velocity: &Vector3<f64>,
        pose: &Isometry3<f64>,
    ) -> (Vector3<f64>, Vector3<f64>) {
        self.foil.forces(velocity, pose)
    }

    /// Lift coefficient at an unsigned angle of attack in radians.
    #[must_use]
    pub fn lift_coefficient(&self, alpha: f64) -> f64 {
        self.foil.lift_coefficient(alpha)
    }

    /// Drag coefficient due to lift at an unsigned angle of attack in radians.
    #[must_use]
    pub fn drag_coefficient(&self, alpha: f64) -> f64 {
        self.foil.drag_coefficient(alpha)
    }

    /// Density of the surrounding fluid.
    #[must_use]
    pub fn fluid_density(&self) -> MassDensity {
        self.foil.fluid_density()
    }

    /// Reference area of the foil.
    #[must_use]
    pub fn area(&self) -> Area {
        self.foil.area()
    }

    /// Unit chordwise axis in the body frame.
    #[must_use]
    pub fn forward(&self) -> UnitVector3<f64> {
        self.foil.forward()
    }

    /// Unit lift axis in the body frame.
    #[must_use]
    pub fn upward(&self) -> UnitVector3<f64> {
        self.foil.upward()
    }
}

impl Model for LiftDragModel {
    type Input = FlowInput;
    type Output = LiftDragForces;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.compute(&input.velocity, &input.pose))
    }
}
