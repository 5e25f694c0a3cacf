use std::f64::consts::PI;

use nalgebra::{Isometry3, Translation3, UnitQuaternion};

use super::{Foil, FoilParams};

/// Reference flat plate in air: forward along +x, lift along +z.
pub(super) fn params() -> FoilParams {
    FoilParams::default()
}

/// Reference plate with a stall blend of radius `r_stall`.
pub(super) fn blended_params(r_stall: f64) -> FoilParams {
    FoilParams {
        r_stall,
        ..params()
    }
}

pub(super) fn foil(params: &FoilParams) -> Foil {
    Foil::new(params).expect("test parameters should be valid")
}

pub(super) fn identity() -> Isometry3<f64> {
    Isometry3::identity()
}

/// A pose with an arbitrary position and a non-trivial rotation.
pub(super) fn tilted() -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::new(4.0, -2.0, 7.5),
        UnitQuaternion::from_euler_angles(0.3, -0.7, PI / 3.0),
    )
}
