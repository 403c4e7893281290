use super::finite;
use crate::error::Result;
use crate::models::WaterType;

/// Degrees per radian as used by the UNESCO depth algorithm.
const DEG_PER_RAD: f64 = 57.29578;
/// Fresh-water metres per decibar.
const FRESH_WATER_M_PER_DBAR: f64 = 1.019716;

/// Depth in metres from pressure in decibars (UNESCO Tech. Paper 44).
///
/// Fresh water is a plain scale; latitude is ignored. Salt water divides a
/// quartic in pressure by the local gravity at `latitude_deg`. A zero gravity
/// term leaves the polynomial undivided.
pub fn depth(water: WaterType, pressure_dbar: f64, latitude_deg: f64) -> Result<f64> {
    let d = match water {
        WaterType::FreshWater => pressure_dbar * FRESH_WATER_M_PER_DBAR,
        WaterType::SaltWater => {
            let p = pressure_dbar;
            let x = (latitude_deg / DEG_PER_RAD).sin().powi(2);
            let gr = 9.780318 * (1.0 + (5.2788e-3 + 2.36e-5 * x) * x) + 1.092e-6 * p;
            let d = (((-1.82e-15 * p + 2.279e-10) * p - 2.2512e-5) * p + 9.72659) * p;
            if gr != 0.0 {
                d / gr
            } else {
                log::debug!("depth: gravity term is 0, returning undivided polynomial");
                d
            }
        }
    };

    finite("depth", d, || {
        format!("type={water}, pressure={pressure_dbar}, latitude={latitude_deg}")
    })
}
