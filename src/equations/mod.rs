//! Sensor equations: raw CTD readings to physical quantities.
//!
//! Each transform is a pure function over `f64` inputs and a calibration
//! bundle from [`crate::models`]. Callers get either a finite value or a
//! [`TransformError`]; the failure is also reported through the `log` facade
//! together with the inputs that caused it. The crate never installs a logger.
//!
//! Sequencing is the caller's job: `pressure`, `temperature` and
//! `conductivity` feed `salinity`, and those results feed the sound velocity
//! and oxygen transforms.
//!
//! ```rust
//! use ctd_rs::{conductivity, salinity, ConductivityCoefficients};
//!
//! let cal = ConductivityCoefficients {
//!     g: -1.02100013e1,
//!     h: 1.25794268,
//!     i: -2.29686787e-3,
//!     j: 2.19007441e-4,
//!     cpcor: -9.57e-8,
//!     ctcor: 3.25e-6,
//! };
//! let c = conductivity(5631.59, 1.0, 1.0, &cal).unwrap();
//! let sp = salinity(c, 1.0, 1.0).unwrap();
//! assert!((sp - 34.474).abs() < 1e-3);
//! ```

pub mod conductivity;
pub mod coordinates;
pub mod depth;
pub mod optics;
pub mod oxygen;
pub mod pressure;
pub mod salinity;
pub mod sbe19plus;
pub mod sound_velocity;
pub mod temperature;

use crate::error::{Result, TransformError};

/// Logs and returns a domain failure.
pub(crate) fn reject(function: &'static str, message: String) -> TransformError {
    log::error!("{function}: {message}");
    TransformError::domain(function, message)
}

/// Logs and returns a computation failure.
pub(crate) fn fault(function: &'static str, message: String) -> TransformError {
    log::error!("{function}: {message}");
    TransformError::computation(function, message)
}

/// Function boundary check: a transform never hands back `NaN` or `±inf`.
///
/// `inputs` is only formatted on failure.
pub(crate) fn finite(
    function: &'static str,
    value: f64,
    inputs: impl FnOnce() -> String,
) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(fault(
            function,
            format!("result is not finite ({value}) for {}", inputs()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn finite_passes_zero_through() {
        assert_eq!(finite("t", 0.0, String::new), Ok(0.0));
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = finite("t", v, || "x=1".to_string()).unwrap_err();
            assert_eq!(err.kind(), FailureKind::Computation);
            assert!(err.to_string().contains("x=1"));
        }
    }
}
