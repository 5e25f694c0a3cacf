use std::f64::consts::{FRAC_PI_2, PI};

/// Drag coefficient due to lift, linear in angle of attack.
///
/// Symmetric about `α = π/2`. Stall blending is not applied to drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DragCurve {
    pub(super) cda: f64,
}

impl DragCurve {
    /// Drag coefficient at an unsigned angle of attack `alpha ∈ [0, π]`.
    pub(super) fn coefficient(&self, alpha: f64) -> f64 {
        if alpha < FRAC_PI_2 {
            self.cda * alpha
        } else {
            self.cda * (PI - alpha)
        }
    }
}
