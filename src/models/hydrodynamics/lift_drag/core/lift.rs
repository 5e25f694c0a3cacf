//! Lift coefficient as a function of angle of attack.
//!
//! The curve is defined on `0 ≤ α < π/2` and mirrored for the rest of
//! `[0, π]` using `cl(α) = −cl(π − α)`. Within the defined half it is
//! built from two straight lines, one before and one after stall, that
//! optionally meet through a circular arc instead of a sharp corner.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Point2, Vector2};

/// The pre-stall and post-stall lift lines.
///
/// The lines meet at `alpha_stall`, so the unblended curve is continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct StallLines {
    pub(super) alpha0: f64,
    pub(super) cla: f64,
    pub(super) alpha_stall: f64,
    pub(super) cla_stall: f64,
}

impl StallLines {
    fn pre_stall(&self, alpha: f64) -> f64 {
        self.cla * (alpha - self.alpha0)
    }

    fn post_stall(&self, alpha: f64) -> f64 {
        self.cla_stall * (alpha - self.alpha_stall) + self.pre_stall(self.alpha_stall)
    }

    /// Where the two lines meet, in `(α, cl)` space.
    fn corner(&self) -> Point2<f64> {
        Point2::new(self.alpha_stall, self.pre_stall(self.alpha_stall))
    }
}

/// Circular arc tangent to both stall lines.
///
/// All breakpoints are derived once from the lines and the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct StallArc {
    center: Point2<f64>,
    radius: f64,

    /// End of the pre-stall line (first tangent point).
    max_straight_alpha: f64,

    /// Start of the post-stall line (second tangent point).
    min_straight_stall_alpha: f64,
}

impl StallArc {
    /// Builds the arc of `radius` inscribed in the corner between the lines.
    ///
    /// The radius must be strictly positive; construction-time validation
    /// guarantees it is at least the configured floor.
    pub(super) fn new(lines: &StallLines, radius: f64) -> Self {
        let lift_slope_angle = lines.cla.atan2(1.0);
        let stall_slope_angle = lines.cla_stall.atan2(1.0);

        // Opening angle of the corner below the curve.
        let corner_angle = stall_slope_angle + (PI - lift_slope_angle);
        let corner_to_center = radius / (corner_angle / 2.0).sin();
        let bisector_angle = corner_angle / 2.0 + lift_slope_angle;

        let center = lines.corner()
            - Vector2::new(bisector_angle.cos(), bisector_angle.sin()) * corner_to_center;

        Self {
            center,
            radius,
            max_straight_alpha: center.x - radius * lift_slope_angle.sin(),
            min_straight_stall_alpha: center.x - radius * stall_slope_angle.sin(),
        }
    }

    /// Upper half of the circle at `alpha`.
    fn evaluate(&self, alpha: f64) -> f64 {
        let cos_theta = ((self.center.x - alpha) / self.radius).clamp(-1.0, 1.0);
        self.center.y + self.radius * cos_theta.acos().sin()
    }
}

/// Lift coefficient curve, radially symmetric about `α = π/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum LiftCurve {
    /// Two straight lines with a sharp corner at stall.
    Linear(StallLines),

    /// Two straight lines joined by a tangent arc.
    Blended { lines: StallLines, arc: StallArc },
}

impl LiftCurve {
    /// Builds the curve, blending the stall corner when `r_stall > 0`.
    pub(super) fn new(lines: StallLines, r_stall: f64) -> Self {
        if r_stall > 0.0 {
            Self::Blended {
                lines,
                arc: StallArc::new(&lines, r_stall),
            }
        } else {
            Self::Linear(lines)
        }
    }

    /// Lift coefficient at an unsigned angle of attack `alpha ∈ [0, π]`.
    pub(super) fn coefficient(&self, alpha: f64) -> f64 {
        if alpha < FRAC_PI_2 {
            self.half(alpha)
        } else {
            -self.half(PI - alpha)
        }
    }

    fn half(&self, alpha: f64) -> f64 {
        match self {
            Self::Linear(lines) => {
                if alpha < lines.alpha_stall {
                    lines.pre_stall(alpha)
                } else {
                    lines.post_stall(alpha)
                }
            }
            Self::Blended { lines, arc } => {
                let cl = if alpha <= arc.max_straight_alpha {
                    lines.pre_stall(alpha)
                } else if alpha >= arc.min_straight_stall_alpha {
                    lines.post_stall(alpha)
                } else {
                    arc.evaluate(alpha)
                };
                cl.max(0.0)
            }
        }
    }
}
