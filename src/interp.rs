use crate::{
    ease::Ease,
    error::{PlayheadError, PlayheadResult},
};

pub fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Maps `value` from `domain` onto `range`, clamping progress to `[0,1]`
/// before the optional ease is applied.
///
/// A degenerate domain (`d0 == d1`) is a caller error: silently dividing
/// would produce NaN or infinity downstream.
pub fn interpolate(
    value: f64,
    domain: [f64; 2],
    range: [f64; 2],
    ease: Option<Ease>,
) -> PlayheadResult<f64> {
    let [d0, d1] = domain;
    let [r0, r1] = range;
    if d0 == d1 {
        return Err(PlayheadError::validation(
            "interpolate domain bounds must differ",
        ));
    }
    if !(d0.is_finite() && d1.is_finite() && r0.is_finite() && r1.is_finite()) {
        return Err(PlayheadError::validation(
            "interpolate domain and range must be finite",
        ));
    }

    let mut t = clamp01((value - d0) / (d1 - d0));
    if let Some(ease) = ease {
        t = ease.apply(t);
    }
    Ok(r0 + (r1 - r0) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_midpoint() {
        assert_eq!(interpolate(125.0, [0.0, 250.0], [0.0, 1.0], None).unwrap(), 0.5);
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(interpolate(-10.0, [0.0, 250.0], [0.0, 1.0], None).unwrap(), 0.0);
        assert_eq!(interpolate(900.0, [0.0, 250.0], [0.0, 1.0], None).unwrap(), 1.0);
    }

    #[test]
    fn reversed_range_descends() {
        let v = interpolate(250.0, [0.0, 1000.0], [100.0, 0.0], None).unwrap();
        assert_eq!(v, 75.0);
    }

    #[test]
    fn eased_quarter_point() {
        // 100 * (1 - OutQuad(0.25)) = 100 * (1 - 0.4375) = 56.25
        let v = interpolate(250.0, [0.0, 1000.0], [100.0, 0.0], Some(Ease::OutQuad)).unwrap();
        assert_eq!(v, 56.25);
    }

    #[test]
    fn degenerate_domain_is_an_error() {
        assert!(interpolate(5.0, [3.0, 3.0], [0.0, 1.0], None).is_err());
    }

    #[test]
    fn pure_under_re_evaluation() {
        let a = interpolate(0.3, [0.0, 1.0], [2.0, 4.0], Some(Ease::InQuad)).unwrap();
        let b = interpolate(0.3, [0.0, 1.0], [2.0, 4.0], Some(Ease::InQuad)).unwrap();
        assert_eq!(a, b);
    }
}
