use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building a lift-drag model from parameters.
///
/// A model is only produced when every parameter is valid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The coefficient curves were not declared radially symmetric.
    #[error("only radially symmetric foils are supported")]
    NotRadiallySymmetric,

    /// The fluid density is not strictly positive.
    #[error("invalid fluid density")]
    FluidDensity(#[source] ConstraintError),

    /// The foil area is not strictly positive.
    #[error("invalid foil area")]
    Area(#[source] ConstraintError),

    /// The stall radius is negative or not a number.
    #[error("invalid stall radius")]
    StallRadius(#[source] ConstraintError),

    /// The stall radius is not smaller than the stall angle.
    #[error("stall radius must be smaller than stall angle: r_stall={r_stall}, alpha_stall={alpha_stall}")]
    StallRadiusTooLarge {
        /// Configured stall radius.
        r_stall: f64,

        /// Configured stall angle, in radians.
        alpha_stall: f64,
    },

    /// A non-zero stall radius is too small for the blend geometry.
    #[error("non-zero stall radius must be at least {min}: r_stall={r_stall}")]
    StallRadiusBelowFloor {
        /// Configured stall radius.
        r_stall: f64,

        /// Smallest allowed non-zero radius.
        min: f64,
    },

    /// A foil axis has zero length or non-finite components.
    #[error("{axis} axis cannot be normalized")]
    DegenerateAxis {
        /// The offending axis.
        axis: Axis,
    },
}

/// A body-frame foil axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The chordwise axis.
    Forward,

    /// The axis of positive lift.
    Upward,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Forward => f.write_str("forward"),
            Axis::Upward => f.write_str("upward"),
        }
    }
}
