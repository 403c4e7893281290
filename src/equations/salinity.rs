use super::{fault, finite};
use crate::error::Result;

// PSS-78 pressure correction (RP)
const A1: f64 = 2.070e-5;
const A2: f64 = -6.370e-10;
const A3: f64 = 3.989e-15;
const B1: f64 = 3.426e-2;
const B2: f64 = 4.464e-4;
const B3: f64 = 4.215e-1;
const B4: f64 = -3.107e-3;

// PSS-78 temperature correction (rt)
const C0: f64 = 6.766097e-1;
const C1: f64 = 2.00564e-2;
const C2: f64 = 1.104259e-4;
const C3: f64 = -6.9698e-7;
const C4: f64 = 1.0031e-9;

const A: [f64; 6] = [0.0080, -0.1692, 25.3851, 14.0941, -7.0261, 2.7081];
const B: [f64; 6] = [0.0005, -0.0056, -0.0066, -0.0375, 0.0636, -0.0144];

/// Conductivity of standard seawater (S=35, T=15 °C, P=0) in mS/cm.
const C_35_15_0: f64 = 42.914;
/// Floor for the conductivity ratio before the half-power sums.
const MIN_RT: f64 = 0.000001;
/// Returned when the `1 + 0.0162·(T-15)` denominator vanishes.
pub const SALINITY_SENTINEL: f64 = -99.0;

/// Practical salinity (PSS-78) from conductivity (S/m), temperature (°C) and
/// pressure (dbar).
///
/// Non-positive conductivity short-circuits to `0.0`. A non-positive ratio
/// `RT` is clamped to `1e-6`, and a vanishing final denominator yields
/// [`SALINITY_SENTINEL`]; both are values, not failures.
///
/// # Errors
/// A zero `RP` or `RT` denominator leaves the ratio undefined and is reported
/// as a computation failure.
pub fn salinity(conductivity: f64, temperature_c: f64, pressure_dbar: f64) -> Result<f64> {
    let params = || format!("C={conductivity}, T={temperature_c}, P={pressure_dbar}");

    if conductivity <= 0.0 {
        return Ok(0.0);
    }

    let t = temperature_c;
    let p = pressure_dbar;
    let r = conductivity * 10.0 / C_35_15_0;

    let val = 1.0 + B1 * t + B2 * t * t + B3 * r + B4 * r * t;
    if val == 0.0 {
        return Err(fault(
            "salinity",
            format!("RP denominator is 0: {}", params()),
        ));
    }
    let rp = 1.0 + (p * (A1 + p * (A2 + p * A3))) / val;

    let val = rp * (C0 + t * (C1 + t * (C2 + t * (C3 + t * C4))));
    if val == 0.0 {
        return Err(fault(
            "salinity",
            format!("RT denominator is 0: {}", params()),
        ));
    }
    let mut rt = r / val;
    if rt <= 0.0 {
        log::debug!("salinity: RT={rt} clamped to {MIN_RT}");
        rt = MIN_RT;
    }

    let (sum1, sum2) = A
        .iter()
        .zip(B.iter())
        .enumerate()
        .fold((0.0, 0.0), |(s1, s2), (i, (a, b))| {
            let term = rt.powf(i as f64 / 2.0);
            (s1 + a * term, s2 + b * term)
        });

    let val = 1.0 + 0.0162 * (t - 15.0);
    let s = if val != 0.0 {
        sum1 + sum2 * (t - 15.0) / val
    } else {
        log::debug!("salinity: temperature denominator is 0, returning sentinel");
        SALINITY_SENTINEL
    };

    finite("salinity", s, params)
}
