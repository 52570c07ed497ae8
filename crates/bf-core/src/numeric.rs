use crate::BfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BfError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimal places.
///
/// Presentation helper only: the solvers return full precision and rounding
/// happens when building report tables.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let factor = 10f64.powi(decimals as i32);
    (v * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round_to_decimals() {
        assert_eq!(round_to(328.0945, 2), 328.09);
        assert_eq!(round_to(0.63836, 4), 0.6384);
        assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
    }
}
