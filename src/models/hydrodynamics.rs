//! Hydrodynamic and aerodynamic force models.
//!
//! Models in this module turn a relative fluid velocity and a body pose
//! into forces that a rigid-body simulation can apply.

pub mod lift_drag;
