//! Raw foil parameters as read from a configuration document.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Unvalidated foil parameters.
///
/// Every field is optional in a configuration document; missing keys take
/// the values of [`FoilParams::default`], which describe a thin flat plate
/// in air. Values are interpreted in SI units and radians.
///
/// Use [`LiftDragModel::new`](crate::models::hydrodynamics::lift_drag::LiftDragModel::new)
/// to validate a set of parameters and build a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoilParams {
    /// Density of the surrounding fluid, in kg/m³.
    pub fluid_density: f64,

    /// Whether the coefficient curves are symmetric about `α = π/2`.
    ///
    /// Only symmetric foils are supported.
    pub radial_symmetry: bool,

    /// Chordwise direction of the foil in the body frame.
    pub forward: [f64; 3],

    /// Direction of positive lift in the body frame.
    pub upward: [f64; 3],

    /// Reference area of the foil, in m².
    pub area: f64,

    /// Angle of attack at zero lift, in radians.
    #[serde(rename = "a0")]
    pub alpha0: f64,

    /// Slope of the lift coefficient before stall, per radian.
    pub cla: f64,

    /// Angle of attack at stall, in radians.
    pub alpha_stall: f64,

    /// Slope of the lift coefficient after stall, per radian.
    pub cla_stall: f64,

    /// Slope of the drag coefficient, per radian.
    pub cda: f64,

    /// Skin friction drag coefficient.
    pub cf: f64,

    /// Radius of the arc blending the pre-stall and post-stall lift lines.
    ///
    /// Zero disables blending.
    pub r_stall: f64,
}

impl Default for FoilParams {
    fn default() -> Self {
        Self {
            fluid_density: 1.2,
            radial_symmetry: true,
            forward: [1.0, 0.0, 0.0],
            upward: [0.0, 0.0, 1.0],
            area: 1.0,
            alpha0: 0.0,
            cla: 2.0 * PI,
            alpha_stall: 1.0 / (2.0 * PI),
            cla_stall: -(2.0 * PI) / (PI * PI - 1.0),
            cda: 2.0 / PI,
            cf: 0.0,
            r_stall: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_document_uses_defaults() {
        let params: FoilParams = toml::from_str("").unwrap();
        assert_eq!(params, FoilParams::default());
    }

    #[test]
    fn partial_document_overrides_named_keys() {
        let params: FoilParams = toml::from_str(
            r"
            fluid_density = 1025.0
            area = 0.12
            a0 = 0.02
            forward = [0.0, 1.0, 0.0]
            r_stall = 0.05
            ",
        )
        .unwrap();

        assert_relative_eq!(params.fluid_density, 1025.0);
        assert_relative_eq!(params.area, 0.12);
        assert_relative_eq!(params.alpha0, 0.02);
        assert_eq!(params.forward, [0.0, 1.0, 0.0]);
        assert_relative_eq!(params.r_stall, 0.05);

        // Untouched keys keep their defaults.
        let defaults = FoilParams::default();
        assert_eq!(params.upward, defaults.upward);
        assert_relative_eq!(params.cla, defaults.cla);
        assert_relative_eq!(params.cla_stall, defaults.cla_stall);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<FoilParams, _> = toml::from_str("alpha_0 = 0.1");
        assert!(result.is_err());
    }

    #[test]
    fn default_post_stall_line_returns_to_zero_at_right_angle() {
        let p = FoilParams::default();
        let cl_at_stall = p.cla * (p.alpha_stall - p.alpha0);
        let cl_at_right_angle = p.cla_stall * (PI / 2.0 - p.alpha_stall) + cl_at_stall;
        assert_relative_eq!(cl_at_right_angle, 0.0, epsilon = 1e-12);
    }
}
