//! Easing functions
//!
//! Every curve maps [0, 1] onto [0, 1] monotonically, with exact endpoints.

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic deceleration (`power3.out` in animation-library terms).
    #[default]
    EaseOutCubic,
    EaseInCubic,
    EaseInOutCubic,
    /// Exponential deceleration used for smooth scrolling:
    /// `min(1, 1.001 - 2^(-10t))`.
    ExpoOut,
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value in [0, 1].
    ///
    /// Inputs are clamped; `apply(0.0) == 0.0` and `apply(1.0) == 1.0`
    /// for every curve.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInCubic => t * t * t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::ExpoOut => (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Solve a CSS cubic bezier at progress `t`.
///
/// Newton iterations with a bisection fallback; computed in f64 so repeated
/// per-frame sampling stays stable.
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    let mut converged = false;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            converged = true;
            break;
        }
        let slope = slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    if !converged {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        p = x;
        for _ in 0..24 {
            let val = sample(p, x1, x2);
            if (val - x).abs() < 1e-7 {
                break;
            }
            if val < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }
    }

    sample(p, y1, y2) as f32
}

// One-dimensional cubic bezier through 0, p1, p2, 1 in Horner form.
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
