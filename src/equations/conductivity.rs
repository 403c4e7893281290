use super::finite;
use crate::error::Result;
use crate::models::ConductivityCoefficients;

/// Conductivity (S/m) from cell frequency in Hz.
///
/// The frequency is rescaled to kHz before the `g..j` polynomial; the result
/// is compensated for cell temperature (`ctcor`) and pressure (`cpcor`).
pub fn conductivity(
    frequency_hz: f64,
    temperature_c: f64,
    pressure_dbar: f64,
    cal: &ConductivityCoefficients,
) -> Result<f64> {
    let f = frequency_hz / 1000.0;
    let f2 = f * f;
    let numerator = cal.g + cal.h * f2 + cal.i * f2 * f + cal.j * f2 * f2;
    let c = numerator / (10.0 * (1.0 + cal.ctcor * temperature_c + cal.cpcor * pressure_dbar));

    finite("conductivity", c, || {
        format!(
            "f={frequency_hz}, T={temperature_c}, P={pressure_dbar}, coefficients={cal:?}"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_CPCOR, DEFAULT_CTCOR};
    use approx::assert_abs_diff_eq;

    #[test]
    fn profile_sample() {
        let cal = ConductivityCoefficients::new(
            -10.2031661,
            1.25585159,
            -0.00176544102,
            0.000179338527,
        );
        assert_eq!(cal.cpcor, DEFAULT_CPCOR);
        assert_eq!(cal.ctcor, DEFAULT_CTCOR);
        let c = conductivity(6728.17578125, 20.492843082230024, 13.0592236857729, &cal).unwrap();
        assert_abs_diff_eq!(c, 4.647392355780951, epsilon = 1e-9);
    }

    #[test]
    fn singular_compensation_is_a_failure() {
        let cal = ConductivityCoefficients {
            ctcor: -1.0,
            cpcor: 0.0,
            ..ConductivityCoefficients::new(-10.2, 1.25, -0.0023, 0.00022)
        };
        assert!(conductivity(5631.59, 1.0, 0.0, &cal).is_err());
    }
}
