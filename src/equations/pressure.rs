use super::finite;
use crate::error::Result;
use crate::models::PressureCoefficients;

/// Decibars per psi.
const DBAR_PER_PSI: f64 = 0.6894759;
/// Standard atmosphere in psi; the sensor reads absolute pressure.
const ATMOSPHERE_PSI: f64 = 14.7;

/// Gauge pressure in decibars from a Digiquartz frequency (Hz).
///
/// `pt_comp` is the raw compensation thermistor reading; `m * pt_comp + b`
/// gives the temperature used by the `c`, `d` and `t0` polynomials.
pub fn pressure(frequency_hz: f64, pt_comp: f64, cal: &PressureCoefficients) -> Result<f64> {
    let td = cal.m * pt_comp + cal.b;
    let c = cal.c1 + cal.c2 * td + cal.c3 * td * td;
    let d = cal.d1 + cal.d2 * td;
    let t0 = (cal.t1 + td * (cal.t2 + td * (cal.t3 + td * (cal.t4 + td * cal.t5)))) * 1.0e-6;
    let w = 1.0 - t0 * t0 * frequency_hz * frequency_hz;

    let p_dbar = cal.slope * (DBAR_PER_PSI * (c * w * (1.0 - d * w) - ATMOSPHERE_PSI)) + cal.offset;

    finite("pressure", p_dbar, || {
        format!("f={frequency_hz}, pt_comp={pt_comp}, coefficients={cal:?}")
    })
}
