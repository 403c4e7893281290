//! Speed of sound in seawater (m/s).
//!
//! Three published empirical fits, each with its own coefficient set. They
//! take the same arguments (practical salinity, temperature in °C, pressure
//! in dbar) but are not interchangeable: every function converts pressure to
//! the unit its fit was made in and evaluates its own polynomial.
#![allow(clippy::excessive_precision)]

use super::finite;
use crate::error::Result;

/// Chen & Millero (1977), UNESCO Tech. Paper 44.
///
/// Pressure is converted to bars. Negative salinity is treated as fresh water.
pub fn sound_velocity_chen_millero(
    salinity: f64,
    temperature_c: f64,
    pressure_dbar: f64,
) -> Result<f64> {
    let t = temperature_c;
    let p = pressure_dbar / 10.0;
    let s = if salinity < 0.0 { 0.0 } else { salinity };
    let sr = s.sqrt();

    let d = 1.727e-3 - 7.9836e-6 * p;

    let b1 = 7.3637e-5 + 1.7945e-7 * t;
    let b0 = -1.922e-2 - 4.42e-5 * t;
    let b = b0 + b1 * p;

    let a3 = (-3.389e-13 * t + 6.649e-12) * t + 1.100e-10;
    let a2 = ((7.988e-12 * t - 1.6002e-10) * t + 9.1041e-9) * t - 3.9064e-7;
    let a1 = (((-2.0122e-10 * t + 1.0507e-8) * t - 6.4885e-8) * t - 1.2580e-5) * t + 9.4742e-5;
    let a0 = (((-3.21e-8 * t + 2.006e-6) * t + 7.164e-5) * t - 1.262e-2) * t + 1.389;
    let a = ((a3 * p + a2) * p + a1) * p + a0;

    let c3 = (-2.3643e-12 * t + 3.8504e-10) * t - 9.7729e-9;
    let c2 = (((1.0405e-12 * t - 2.5335e-10) * t + 2.5974e-8) * t - 1.7107e-6) * t + 3.1260e-5;
    let c1 = (((-6.1185e-10 * t + 1.3621e-7) * t - 8.1788e-6) * t + 6.8982e-4) * t + 0.153563;
    let c0 = ((((3.1464e-9 * t - 1.47800e-6) * t + 3.3420e-4) * t - 5.80852e-2) * t + 5.03711) * t
        + 1402.388;
    let c = ((c3 * p + c2) * p + c1) * p + c0;

    let sv = c + (a + b * sr + d * s) * s;
    finite("sound_velocity_chen_millero", sv, || {
        format!("s={salinity}, t={temperature_c}, p={pressure_dbar}")
    })
}

/// Del Grosso (1974).
///
/// Pressure is converted to kg/cm².
pub fn sound_velocity_del_grosso(
    salinity: f64,
    temperature_c: f64,
    pressure_dbar: f64,
) -> Result<f64> {
    const C000: f64 = 1402.392;

    let t = temperature_c;
    let s = salinity;
    let p = pressure_dbar / 9.80665;

    let dct = (0.501109398873e1 - (0.550946843172e-1 - 0.22153596924e-3 * t) * t) * t;
    let dcs = (0.132952290781e1 + 0.128955756844e-3 * s) * s;
    let dcp = (0.156059257041e0 + (0.244998688441e-4 - 0.83392332513e-8 * p) * p) * p;
    let dcstp = -0.127562783426e-1 * t * s
        + 0.635191613389e-2 * t * p
        + 0.265484716608e-7 * t * t * p * p
        - 0.159349479045e-5 * t * p * p
        + 0.522116437235e-9 * t * p * p * p
        - 0.438031096213e-6 * t * t * t * p
        - 0.161674495909e-8 * s * s * p * p
        + 0.968403156410e-4 * t * t * s
        + 0.485639620015e-5 * t * s * s * p
        - 0.340597039004e-3 * t * s * p;

    let sv = C000 + dct + dcs + dcp + dcstp;
    finite("sound_velocity_del_grosso", sv, || {
        format!("s={salinity}, t={temperature_c}, p={pressure_dbar}")
    })
}

/// Wilson (1960).
///
/// Pressure is converted to absolute kg/cm²; salinity enters as its
/// deviation from 35.
pub fn sound_velocity_wilson(
    salinity: f64,
    temperature_c: f64,
    pressure_dbar: f64,
) -> Result<f64> {
    let t = temperature_c;
    let pr = 0.1019716 * (pressure_dbar + 10.1325);
    let sd = salinity - 35.0;

    let a = (((7.9851e-6 * t - 2.6045e-4) * t - 4.4532e-2) * t + 4.5721) * t + 1449.14;
    let sv = (7.7711e-7 * t - 1.1244e-2) * t + 1.39799;
    let v0 = (1.69202e-3 * sd + sv) * sd + a;

    let a = ((4.5283e-8 * t + 7.4812e-6) * t - 1.8607e-4) * t + 0.16072;
    let sv = (1.579e-9 * t + 3.158e-8) * t + 7.7016e-5;
    let v1 = sv * sd + a;

    let a = (1.8563e-9 * t - 2.5294e-7) * t + 1.0268e-5;
    let sv = -1.2943e-7 * sd + a;
    let a = -1.9646e-10 * t + 3.5216e-9;

    let sv = (((-3.3603e-12 * pr + a) * pr + sv) * pr + v1) * pr + v0;
    finite("sound_velocity_wilson", sv, || {
        format!("s={salinity}, t={temperature_c}, p={pressure_dbar}")
    })
}
