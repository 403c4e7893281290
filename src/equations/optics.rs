use super::finite;
use crate::error::Result;

/// ECO-FL chlorophyll fluorescence (µg/L), Sea-Bird Application Note 62.
pub fn fluorescence(voltage: f64, dark_output: f64, scale_factor: f64) -> Result<f64> {
    finite("fluorescence", (voltage - dark_output) * scale_factor, || {
        format!("voltage={voltage}, dark_output={dark_output}, scale_factor={scale_factor}")
    })
}

/// ECO-NTU turbidity (NTU), Sea-Bird Application Note 62.
pub fn turbidity(voltage: f64, dark_output: f64, scale_factor: f64) -> Result<f64> {
    finite("turbidity", (voltage - dark_output) * scale_factor, || {
        format!("voltage={voltage}, dark_output={dark_output}, scale_factor={scale_factor}")
    })
}

/// Altimeter height above bottom (m), Sea-Bird Application Note 95.
///
/// A zero `scale_factor` cannot be evaluated and is reported as a failure.
pub fn altimeter_height(voltage: f64, scale_factor: f64, offset: f64) -> Result<f64> {
    finite("altimeter_height", 300.0 * voltage / scale_factor + offset, || {
        format!("voltage={voltage}, scale_factor={scale_factor}, offset={offset}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fluorescence_and_turbidity_share_arithmetic() {
        assert_abs_diff_eq!(fluorescence(4.00, 0.060, 10.0).unwrap(), 39.4, epsilon = 1e-9);
        assert_abs_diff_eq!(turbidity(4.00, 0.060, 5.0).unwrap(), 19.7, epsilon = 1e-9);
    }

    #[test]
    fn altimeter_scales_voltage() {
        assert_abs_diff_eq!(altimeter_height(2.5, 5.0, 0.3).unwrap(), 150.3, epsilon = 1e-9);
    }

    #[test]
    fn altimeter_zero_scale_is_failure() {
        assert!(altimeter_height(2.5, 0.0, 0.0).is_err());
        assert!(altimeter_height(0.0, 0.0, 0.0).is_err());
    }
}
