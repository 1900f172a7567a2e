//! Easing curves and tween specifications.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions applied to the linear tween fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using a cubic bezier curve.
    EaseIn,
    /// Ease out using a cubic bezier curve.
    EaseOut,
    /// Ease in and out using a cubic bezier curve.
    EaseInOut,
    /// Cubic deceleration, `1 - (1 - t)^3`. Fast start, gentle settle; the
    /// panel's default snap curve.
    Decelerate,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::Decelerate => {
                let inverse = 1.0 - fraction.clamp(0.0, 1.0);
                1.0 - inverse * inverse * inverse
            }
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching the x fraction, with a
    // bisection fallback when the derivative degenerates.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Tween specification: duration plus easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::Decelerate)
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
