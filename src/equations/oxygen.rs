use super::{fault, finite, reject};
use crate::error::{FailureKind, Result};
use crate::models::OxygenCoefficients;

// Garcia & Gordon (1992), combined fit, ml/L
const SOL_A: [f64; 6] = [2.00907, 3.22014, 4.0501, 4.94457, -0.256847, 3.88767];
const SOL_B: [f64; 4] = [-0.00624523, -0.00737614, -0.010341, -0.00817083];
const SOL_C0: f64 = -0.000000488682;

const KELVIN_OFFSET: f64 = 273.15;

/// Oxygen solubility (ml/L) in seawater at one atmosphere, Garcia & Gordon.
///
/// # Errors
/// The scaled temperature `ln((298.15 - T) / (273.15 + T))` only exists for
/// -273.15 < T < 298.15; anything else is a domain error.
pub fn oxygen_solubility(salinity: f64, temperature_c: f64) -> Result<f64> {
    let params = || format!("salinity={salinity}, temperature={temperature_c}");

    let ratio = (298.15 - temperature_c) / (KELVIN_OFFSET + temperature_c);
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(reject(
            "oxygen_solubility",
            format!("scaled temperature ratio {ratio} has no logarithm: {}", params()),
        ));
    }
    let ts = ratio.ln();

    let a = SOL_A.iter().rev().fold(0.0, |acc, c| acc * ts + c);
    let b = SOL_B.iter().rev().fold(0.0, |acc, c| acc * ts + c);
    let sol = (a + salinity * b + SOL_C0 * salinity * salinity).exp();

    finite("oxygen_solubility", sol, params)
}

/// SBE 43 dissolved oxygen (ml/L), Sea-Bird Application Note 64-2.
///
/// `Soc·(V + Voffset + τ·dV/dt)·(1 + A·T + B·T² + C·T³)·OxSol(T,S)·exp(E·P/K)`
/// with `τ = tau20·exp(D1·P + D2·(T - 20))`.
///
/// `dV/dt` is `voltage - previous_voltage`, and zero when there is no previous
/// sample. A previous voltage of exactly `0.0` is indistinguishable from no
/// sample and also gives a zero slope.
///
/// The hysteresis terms `h1..h3` are not applied.
pub fn oxygen(
    temperature_c: f64,
    pressure_dbar: f64,
    salinity: f64,
    voltage: f64,
    previous_voltage: Option<f64>,
    cal: &OxygenCoefficients,
) -> Result<f64> {
    let params = || {
        format!(
            "T={temperature_c}, P={pressure_dbar}, S={salinity}, V={voltage}, \
             previous V={previous_voltage:?}, coefficients={cal:?}"
        )
    };

    let t = temperature_c;
    let tau = cal.tau20 * (cal.d1 * pressure_dbar + cal.d2 * (t - 20.0)).exp();
    let dvdt = match previous_voltage {
        Some(prev) if prev != 0.0 => voltage - prev,
        _ => 0.0,
    };

    let oxsol = oxygen_solubility(salinity, t).map_err(|e| {
        let message = format!("solubility failed ({e}): {}", params());
        match e.kind() {
            FailureKind::Domain => reject("oxygen", message),
            _ => fault("oxygen", message),
        }
    })?;

    let k = t + KELVIN_OFFSET;

    let ox = cal.soc
        * (voltage + cal.v_offset + tau * dvdt)
        * (1.0 + cal.a * t + cal.b * t * t + cal.c * t * t * t)
        * oxsol
        * (cal.e * pressure_dbar / k).exp();

    finite("oxygen", ox, params)
}

/// Aanderaa optode output (µmol/L) to ml/L using the molar volume of oxygen,
/// 22.3916 L/mol.
pub fn umol_per_l_to_ml_per_l(umol_per_l: f64) -> Result<f64> {
    finite("umol_per_l_to_ml_per_l", umol_per_l / 44.6596, || {
        format!("x={umol_per_l}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sbe43() -> OxygenCoefficients {
        OxygenCoefficients {
            soc: 0.5777,
            v_offset: -0.5282,
            a: -3.7388e-3,
            b: 1.5155e-4,
            c: -2.6903e-6,
            e: 0.036,
            tau20: 1.79,
            d1: 1.92634e-4,
            d2: -4.64803e-2,
            h1: -3.3e-2,
            h2: 5.0e3,
            h3: 1.45e3,
        }
    }

    #[test]
    fn solubility_reference_values() {
        let fresh = oxygen_solubility(0.0, 30.0).unwrap();
        assert_abs_diff_eq!(fresh, 5.289268949075266, epsilon = 1e-9);
        let sea = oxygen_solubility(35.0, 10.0).unwrap();
        assert_abs_diff_eq!(sea, 6.314767278130201, epsilon = 1e-9);
    }

    #[test]
    fn solubility_outside_scaled_temperature_range() {
        for t in [298.15, 300.0, -273.15, -300.0] {
            let err = oxygen_solubility(35.0, t).unwrap_err();
            assert_eq!(err.kind(), FailureKind::Domain);
        }
    }

    #[test]
    fn zero_previous_voltage_means_no_slope() {
        let none = oxygen(30.0, 0.0, 0.0, 1.928, None, &sbe43()).unwrap();
        let zero = oxygen(30.0, 0.0, 0.0, 1.928, Some(0.0), &sbe43()).unwrap();
        assert_eq!(none, zero);
        assert_abs_diff_eq!(none, 4.0701948492522675, epsilon = 1e-9);
    }

    #[test]
    fn previous_voltage_applies_tau_correction() {
        let v = oxygen(30.0, 0.0, 0.0, 1.928, Some(1.9), &sbe43()).unwrap();
        assert_abs_diff_eq!(v, 4.161753396983738, epsilon = 1e-9);
    }

    #[test]
    fn hysteresis_terms_do_not_change_result() {
        let mut cal = sbe43();
        let reference = oxygen(11.286, 2.015, 33.8477, 1.928, None, &cal).unwrap();
        cal.h1 = 0.0;
        cal.h2 = 0.0;
        cal.h3 = 0.0;
        assert_eq!(oxygen(11.286, 2.015, 33.8477, 1.928, None, &cal).unwrap(), reference);
    }

    #[test]
    fn solubility_failure_surfaces_as_oxygen_domain_failure() {
        for t in [300.0, -273.15] {
            let err = oxygen(t, 0.0, 35.0, 1.928, None, &sbe43()).unwrap_err();
            assert_eq!(err.function(), "oxygen");
            assert_eq!(err.kind(), FailureKind::Domain);
            assert!(err.to_string().contains("solubility failed"));
        }
    }

    #[test]
    fn optode_conversion() {
        assert_abs_diff_eq!(umol_per_l_to_ml_per_l(446.596).unwrap(), 10.0, epsilon = 1e-12);
    }
}
