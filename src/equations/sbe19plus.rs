//! SBE 19plus V2 channels reported as raw A/D counts.
//!
//! The 19plus V2 digitises a strain-gauge pressure sensor and a thermistor
//! instead of reporting frequencies; these conversions follow its
//! calibration sheet.

use super::{finite, reject};
use crate::error::Result;
use crate::models::{CountTemperatureCoefficients, StrainGaugeCoefficients};

const ATMOSPHERE_PSI: f64 = 14.7;
const DBAR_PER_PSI: f64 = 0.689476;

/// Absolute pressure in psia to gauge pressure in decibars.
pub fn pressure_psia_to_dbar(psia: f64) -> f64 {
    (psia - ATMOSPHERE_PSI) * DBAR_PER_PSI
}

/// Strain-gauge pressure (dbar) from A/D `counts` and the temperature
/// compensation voltage.
pub fn strain_gauge_pressure(
    counts: f64,
    compensation_voltage: f64,
    cal: &StrainGaugeCoefficients,
) -> Result<f64> {
    let y = compensation_voltage;
    let t = cal.ptempa0 + cal.ptempa1 * y + cal.ptempa2 * y * y;
    let x = counts - cal.ptca0 - cal.ptca1 * t - cal.ptca2 * t * t;
    let n = x * cal.ptcb0 / (cal.ptcb0 + cal.ptcb1 * t + cal.ptcb2 * t * t);
    let psia = cal.pa0 + cal.pa1 * n + cal.pa2 * n * n;

    finite(
        "strain_gauge_pressure",
        pressure_psia_to_dbar(psia) + cal.offset,
        || format!("counts={counts}, voltage={compensation_voltage}, coefficients={cal:?}"),
    )
}

/// ITS-90 thermistor temperature (°C) from A/D `counts`.
///
/// # Errors
/// Counts that map to a non-positive thermistor resistance are rejected before
/// the logarithm.
pub fn temperature_from_counts(counts: f64, cal: &CountTemperatureCoefficients) -> Result<f64> {
    let params = || format!("counts={counts}, coefficients={cal:?}");

    let mv = (counts - 524288.0) / 1.6e7;
    let r = (mv * 2.900e9 + 1.024e8) / (2.048e4 - mv * 2.0e5);
    if r.is_nan() || r <= 0.0 {
        return Err(reject(
            "temperature_from_counts",
            format!("thermistor resistance {r} has no logarithm: {}", params()),
        ));
    }

    let l = r.ln();
    let t90 = (1.0 / (cal.a0 + l * (cal.a1 + l * (cal.a2 + l * cal.a3))) - 273.15) * cal.slope
        + cal.offset;
    finite("temperature_from_counts", t90, params)
}
