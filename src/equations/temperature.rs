use super::{finite, reject};
use crate::error::Result;
use crate::models::TemperatureCoefficients;

const KELVIN_OFFSET: f64 = 273.15;

/// ITS-90 temperature (°C) from a frequency-output thermometer.
///
/// `1 / (g + h·L + i·L² + j·L³) - 273.15` with `L = ln(f0 / f)`.
///
/// # Errors
/// A zero frequency, or any `f0 / f` that is not positive, is rejected before
/// the logarithm is taken.
pub fn temperature(frequency_hz: f64, cal: &TemperatureCoefficients) -> Result<f64> {
    let params = || {
        format!(
            "f={frequency_hz}, g={}, h={}, i={}, j={}, f0={}",
            cal.g, cal.h, cal.i, cal.j, cal.f0
        )
    };

    if frequency_hz == 0.0 {
        return Err(reject("temperature", format!("frequency is 0: {}", params())));
    }
    let ratio = cal.f0 / frequency_hz;
    if ratio.is_nan() || ratio <= 0.0 {
        return Err(reject(
            "temperature",
            format!("f0/f = {ratio} has no logarithm: {}", params()),
        ));
    }

    let l = ratio.ln();
    let t = 1.0 / (cal.g + l * (cal.h + l * (cal.i + l * cal.j))) - KELVIN_OFFSET;
    finite("temperature", t, params)
}
